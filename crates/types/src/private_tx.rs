//! Private transaction submission types.

use alloy::primitives::{Bytes, TxHash, U64};
use serde::{Deserialize, Serialize};

/// Parameters for `eth_sendPrivateTransaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateTransaction {
    /// The raw signed transaction.
    pub tx: Bytes,
    /// Highest block number the transaction may be included in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_block_number: Option<U64>,
    /// Relay-specific delivery preferences.
    #[serde(default, skip_serializing_if = "PrivateTransactionPreferences::is_empty")]
    pub preferences: PrivateTransactionPreferences,
}

impl PrivateTransaction {
    /// Create a submission for a raw signed transaction.
    pub fn new(tx: impl Into<Bytes>) -> Self {
        Self {
            tx: tx.into(),
            max_block_number: None,
            preferences: PrivateTransactionPreferences::default(),
        }
    }

    /// Set the inclusion deadline.
    pub fn with_max_block_number(mut self, block_number: u64) -> Self {
        self.max_block_number = Some(U64::from(block_number));
        self
    }

    /// Enable fast mode, allowing the transaction to be cancelled quickly.
    pub const fn with_fast(mut self) -> Self {
        self.preferences.fast = true;
        self
    }
}

/// Named boolean flags tuning how the relay handles a private transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateTransactionPreferences {
    /// Fast mode: shared with more builders and cancellable quickly.
    #[serde(default)]
    pub fast: bool,
}

impl PrivateTransactionPreferences {
    /// True if no preference deviates from the relay default.
    pub const fn is_empty(&self) -> bool {
        !self.fast
    }
}

/// Parameters for `eth_cancelPrivateTransaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelPrivateTransaction {
    /// Hash of the private transaction to cancel.
    pub tx_hash: TxHash,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn full_submission_wire_shape() {
        let tx = PrivateTransaction::new(b"\x02\xf8tx".as_slice())
            .with_max_block_number(255)
            .with_fast();

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["tx"], "0x02f87478");
        assert_eq!(value["maxBlockNumber"], "0xff");
        assert_eq!(value["preferences"]["fast"], true);
    }

    #[test]
    fn default_preferences_are_omitted() {
        let value = serde_json::to_value(PrivateTransaction::new(b"\x01".as_slice())).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("maxBlockNumber"));
        assert!(!object.contains_key("preferences"));
    }

    #[test]
    fn cancel_wire_shape() {
        let cancel = CancelPrivateTransaction { tx_hash: TxHash::repeat_byte(7) };
        let value = serde_json::to_value(cancel).unwrap();
        assert_eq!(value["txHash"], format!("{}", TxHash::repeat_byte(7)));
    }

    #[test]
    fn submission_roundtrip() {
        let tx = PrivateTransaction::new(b"\x02\xf8tx".as_slice()).with_fast();
        let json = serde_json::to_string(&tx).unwrap();
        assert_eq!(serde_json::from_str::<PrivateTransaction>(&json).unwrap(), tx);
    }
}
