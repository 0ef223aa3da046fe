//! Bundle parameter and response types.
//!
//! Bundle params reuse the standard Flashbots-shaped types from
//! [`alloy::rpc::types::mev`]; transaction order within a bundle is the
//! execution order and is preserved through construction and the wire
//! format.

pub use alloy::rpc::types::mev::{
    EthCallBundle, EthCallBundleResponse, EthCallBundleTransactionResult, EthSendBundle,
};

use alloy::primitives::{Bytes, B256};
use serde::{Deserialize, Serialize};

/// Build `eth_sendBundle` params from raw signed transactions targeting
/// one block, preserving transaction order.
///
/// Timestamps, reverting hashes and the other optional fields start
/// unset; set them on the returned bundle as needed.
pub fn send_bundle<I, T>(txs: I, block_number: u64) -> EthSendBundle
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    EthSendBundle {
        txs: txs.into_iter().map(Into::into).collect(),
        block_number,
        ..Default::default()
    }
}

/// Build `eth_callBundle` params from raw signed transactions.
///
/// The state view defaults to `latest`; override `state_block_number` or
/// `timestamp` on the returned bundle to simulate against something else.
pub fn call_bundle<I, T>(txs: I, block_number: u64) -> EthCallBundle
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    EthCallBundle {
        txs: txs.into_iter().map(Into::into).collect(),
        block_number,
        ..Default::default()
    }
}

/// Response to `eth_sendBundle`: the content hash identifying the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBundleResponse {
    /// The bundle hash.
    pub bundle_hash: B256,
}

impl From<B256> for SendBundleResponse {
    fn from(bundle_hash: B256) -> Self {
        Self { bundle_hash }
    }
}

impl From<SendBundleResponse> for B256 {
    fn from(response: SendBundleResponse) -> Self {
        response.bundle_hash
    }
}

/// Response to `eth_estimateGasBundle`: per-transaction gas estimates,
/// in bundle order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateGasBundleResponse {
    /// One estimate per transaction, in the order submitted.
    pub results: Vec<TxGasEstimate>,
}

/// Gas estimate for a single transaction within a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxGasEstimate {
    /// Hash of the estimated transaction, when the relay reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<B256>,
    /// Estimated gas consumed by the transaction.
    pub gas_used: u64,
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn block_numbers_encode_as_minimal_hex() {
        let value = serde_json::to_value(send_bundle([b"tx".as_slice()], 0)).unwrap();
        assert_eq!(value["blockNumber"], "0x0");

        let value = serde_json::to_value(send_bundle([b"tx".as_slice()], 255)).unwrap();
        assert_eq!(value["blockNumber"], "0xff");
    }

    #[test]
    fn send_bundle_response_roundtrip() {
        let json = format!(r#"{{"bundleHash":"{}"}}"#, B256::repeat_byte(0x22));
        let response: SendBundleResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.bundle_hash, B256::repeat_byte(0x22));
        assert_eq!(serde_json::to_string(&response).unwrap(), json);
    }

    #[test]
    fn estimate_gas_response_decodes() {
        let json = r#"{"results":[{"gasUsed":21000},{"txHash":"0x0101010101010101010101010101010101010101010101010101010101010101","gasUsed":63000}]}"#;
        let response: EstimateGasBundleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].gas_used, 21_000);
        assert_eq!(response.results[0].tx_hash, None);
        assert_eq!(response.results[1].tx_hash, Some(B256::repeat_byte(1)));
    }

    proptest! {
        #[test]
        fn send_bundle_preserves_tx_order(
            txs in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 1..64), 1..12),
            block in any::<u64>(),
        ) {
            let expected: Vec<Bytes> = txs.iter().cloned().map(Bytes::from).collect();

            let bundle = send_bundle(txs, block);
            prop_assert_eq!(&bundle.txs, &expected);

            // order survives the wire format too
            let json = serde_json::to_string(&bundle).unwrap();
            let back: EthSendBundle = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back.txs, expected);
        }
    }
}
