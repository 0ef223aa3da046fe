//! Wire types for the relay's signed JSON-RPC protocol.
//!
//! The relay is schema-strict: the params value for each method must be
//! the exact shape that method documents, passed as the single element of
//! the JSON-RPC params array. The types in this crate pin those shapes at
//! compile time, and the [`RelayRequest`] union makes it impossible to
//! pair a method name with the wrong parameter type.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bundle;
pub use bundle::{
    call_bundle, send_bundle, EstimateGasBundleResponse, EthCallBundle, EthCallBundleResponse,
    EthCallBundleTransactionResult, EthSendBundle, SendBundleResponse, TxGasEstimate,
};

mod envelope;
pub use envelope::{
    RelayRequest, RpcEnvelope, ETH_CALL_BUNDLE, ETH_CANCEL_PRIVATE_TRANSACTION,
    ETH_ESTIMATE_GAS_BUNDLE, ETH_SEND_BUNDLE, ETH_SEND_PRIVATE_TRANSACTION,
    FLASHBOTS_GET_BUNDLE_STATS, FLASHBOTS_GET_USER_STATS, JSONRPC_VERSION,
};

mod private_tx;
pub use private_tx::{CancelPrivateTransaction, PrivateTransaction, PrivateTransactionPreferences};

mod reply;
pub use reply::{RpcError, RpcReply};

mod stats;
pub use stats::{BundleStats, BundleStatsRequest, UserStats};
