//! The JSON-RPC reply envelope and relay error object.

use serde::{Deserialize, Serialize};

/// A relay-reported JSON-RPC error object.
///
/// A reply carrying one of these is a relay-level rejection, distinct
/// from a transport failure and from a malformed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("relay error {code}: {message}")]
pub struct RpcError {
    /// Error code reported by the relay.
    pub code: i64,
    /// Human-readable message reported by the relay.
    pub message: String,
}

/// A JSON-RPC 2.0 reply envelope.
///
/// A well-formed reply populates exactly one of `result` and `error`.
/// Both absent means the body did not match the protocol shape; callers
/// must not treat that as success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RpcReply<T> {
    /// Protocol version echoed by the relay.
    #[serde(default)]
    pub jsonrpc: String,
    /// Request id echoed by the relay. `None` when the relay could not
    /// associate the reply with a request.
    #[serde(default)]
    pub id: Option<u64>,
    /// The method result, when the call succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// The relay-reported error, when the call failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl<T> RpcReply<T> {
    /// True if the reply carries a relay error object.
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Split the reply into its result and error parts.
    pub fn into_parts(self) -> (Option<T>, Option<RpcError>) {
        (self.result, self.error)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_reply_decodes() {
        let json = r#"{"id":1,"jsonrpc":"2.0","error":{"code":-32000,"message":"bundle too large"}}"#;
        let reply: RpcReply<serde_json::Value> = serde_json::from_str(json).unwrap();

        assert!(reply.is_error());
        assert_eq!(reply.result, None);
        let error = reply.error.unwrap();
        assert_eq!(error.code, -32000);
        assert_eq!(error.message, "bundle too large");
    }

    #[test]
    fn success_reply_decodes() {
        let json = r#"{"id":3,"jsonrpc":"2.0","result":true}"#;
        let reply: RpcReply<bool> = serde_json::from_str(json).unwrap();
        assert_eq!(reply.id, Some(3));
        assert_eq!(reply.result, Some(true));
        assert!(!reply.is_error());
    }

    #[test]
    fn null_id_is_tolerated() {
        let json = r#"{"id":null,"jsonrpc":"2.0","error":{"code":-32600,"message":"invalid request"}}"#;
        let reply: RpcReply<bool> = serde_json::from_str(json).unwrap();
        assert_eq!(reply.id, None);
        assert!(reply.is_error());
    }

    #[test]
    fn empty_reply_is_neither_result_nor_error() {
        let reply: RpcReply<bool> = serde_json::from_str(r#"{"id":1,"jsonrpc":"2.0"}"#).unwrap();
        let (result, error) = reply.into_parts();
        assert!(result.is_none());
        assert!(error.is_none());
    }
}
