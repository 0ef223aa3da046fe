//! The JSON-RPC request envelope and the closed set of relay methods.

use crate::{BundleStatsRequest, CancelPrivateTransaction, PrivateTransaction};
use alloy::{
    primitives::U64,
    rpc::types::mev::{EthCallBundle, EthSendBundle},
};
use serde::Serialize;

/// JSON-RPC protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Method name for submitting a bundle.
pub const ETH_SEND_BUNDLE: &str = "eth_sendBundle";
/// Method name for simulating a bundle.
pub const ETH_CALL_BUNDLE: &str = "eth_callBundle";
/// Method name for submitting a private transaction.
pub const ETH_SEND_PRIVATE_TRANSACTION: &str = "eth_sendPrivateTransaction";
/// Method name for cancelling a private transaction.
pub const ETH_CANCEL_PRIVATE_TRANSACTION: &str = "eth_cancelPrivateTransaction";
/// Method name for estimating per-transaction gas usage of a bundle.
pub const ETH_ESTIMATE_GAS_BUNDLE: &str = "eth_estimateGasBundle";
/// Method name for fetching aggregate stats for the calling identity.
pub const FLASHBOTS_GET_USER_STATS: &str = "flashbots_getUserStats";
/// Method name for fetching delivery stats for a single bundle.
pub const FLASHBOTS_GET_BUNDLE_STATS: &str = "flashbots_getBundleStats";

/// Parameters for one relay call. One variant per supported method, so a
/// request can only be built with the parameter shape its method expects.
///
/// Serialization is untagged: the variant body becomes the single element
/// of the JSON-RPC params array.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RelayRequest {
    /// `eth_sendBundle`.
    SendBundle(EthSendBundle),
    /// `eth_callBundle`.
    CallBundle(EthCallBundle),
    /// `eth_sendPrivateTransaction`.
    SendPrivateTransaction(PrivateTransaction),
    /// `eth_cancelPrivateTransaction`.
    CancelPrivateTransaction(CancelPrivateTransaction),
    /// `eth_estimateGasBundle`.
    EstimateGasBundle(EthCallBundle),
    /// `flashbots_getUserStats`, carrying the block number context.
    UserStats(U64),
    /// `flashbots_getBundleStats`.
    BundleStats(BundleStatsRequest),
}

impl RelayRequest {
    /// The JSON-RPC method name for this request.
    pub const fn method(&self) -> &'static str {
        match self {
            Self::SendBundle(_) => ETH_SEND_BUNDLE,
            Self::CallBundle(_) => ETH_CALL_BUNDLE,
            Self::SendPrivateTransaction(_) => ETH_SEND_PRIVATE_TRANSACTION,
            Self::CancelPrivateTransaction(_) => ETH_CANCEL_PRIVATE_TRANSACTION,
            Self::EstimateGasBundle(_) => ETH_ESTIMATE_GAS_BUNDLE,
            Self::UserStats(_) => FLASHBOTS_GET_USER_STATS,
            Self::BundleStats(_) => FLASHBOTS_GET_BUNDLE_STATS,
        }
    }
}

/// A JSON-RPC 2.0 request envelope.
///
/// Field order is fixed and serialization is deterministic, so the bytes
/// signed for the authentication header are exactly the bytes sent on the
/// wire. `params` always serializes as a one-element array: the request
/// value is wrapped exactly once, never doubled.
#[derive(Debug, Clone, Serialize)]
pub struct RpcEnvelope {
    /// JSON-RPC protocol version. Always [`JSONRPC_VERSION`].
    pub jsonrpc: &'static str,
    /// Request id. Only used to correlate pipelined responses.
    pub id: u64,
    /// Method name from the supported set.
    pub method: &'static str,
    /// The method parameters.
    pub params: (RelayRequest,),
}

impl RpcEnvelope {
    /// Create an envelope for the given request.
    pub const fn new(id: u64, request: RelayRequest) -> Self {
        let method = request.method();
        Self { jsonrpc: JSONRPC_VERSION, id, method, params: (request,) }
    }
}
