use crate::{
    config,
    signer::{identity_from_hex, signature_header},
    transport::{HttpTransport, RawResponse, Transport},
    RelayClientError, Result,
};
use alloy::{
    primitives::{Address, B256, TxHash, U64},
    signers::{local::PrivateKeySigner, Signer},
};
use relay_constants::{Network, SIGNATURE_HEADER};
use relay_types::{
    BundleStats, BundleStatsRequest, CancelPrivateTransaction, EstimateGasBundleResponse,
    EthCallBundle, EthCallBundleResponse, EthSendBundle, PrivateTransaction, RelayRequest,
    RpcEnvelope, RpcReply, SendBundleResponse, UserStats,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{instrument, warn};
use url::Url;

/// Signed JSON-RPC client for a bundle relay.
///
/// One instance holds an immutable identity and endpoint. Each call
/// builds the envelope from typed params, signs the exact serialized
/// bytes, dispatches the POST, and decodes the typed reply. Sharing an
/// instance across tasks is safe: nothing after construction is mutated
/// except the request id counter.
#[derive(Debug)]
pub struct RelayClient<S = PrivateKeySigner, T = HttpTransport> {
    url: Url,
    signer: S,
    transport: T,
    next_id: AtomicU64,
}

impl RelayClient {
    /// Create a client for the given endpoint, signing with a local key.
    pub fn new(url: Url, signer: PrivateKeySigner) -> Result<Self> {
        Self::new_with_transport(url, signer, HttpTransport::new())
    }

    /// Create a client for a known network's default relay.
    pub fn from_network(network: Network, signer: PrivateKeySigner) -> Result<Self> {
        Self::new(Url::parse(network.relay_url())?, signer)
    }

    /// Create a client for the Mainnet relay.
    pub fn mainnet(signer: PrivateKeySigner) -> Result<Self> {
        Self::from_network(Network::Mainnet, signer)
    }

    /// Create a client configured from the environment.
    ///
    /// The signing key comes from `RELAY_SIGNING_KEY`. The endpoint is
    /// taken from `RELAY_URL` when set, otherwise resolved from the
    /// `RELAY_NETWORK` label, defaulting to mainnet.
    pub fn from_env() -> Result<Self> {
        let signer = identity_from_hex(&config::load_required(config::SIGNING_KEY_VAR)?)?;
        let url = match config::load_opt(config::URL_VAR) {
            Some(url) => Url::parse(&url)?,
            None => {
                let network = match config::load_opt(config::NETWORK_VAR) {
                    Some(label) => label.parse::<Network>()?,
                    None => Network::Mainnet,
                };
                Url::parse(network.relay_url())?
            }
        };
        Self::new(url, signer)
    }
}

impl<S, T> RelayClient<S, T>
where
    S: Signer + Send + Sync,
    T: Transport,
{
    /// Create a client over a custom signer and transport.
    ///
    /// The endpoint must use https; plain http is accepted only for
    /// loopback hosts so local stub relays remain reachable.
    pub fn new_with_transport(url: Url, signer: S, transport: T) -> Result<Self> {
        if url.scheme() != "https" && !is_loopback(&url) {
            return Err(RelayClientError::InsecureEndpoint(url));
        }
        Ok(Self { url, signer, transport, next_id: AtomicU64::new(1) })
    }

    /// The relay endpoint this client talks to.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// The public account address derived from the signing key.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Submit a bundle for inclusion in its target block.
    #[instrument(skip_all, fields(block = bundle.block_number))]
    pub async fn send_bundle(&self, bundle: EthSendBundle) -> Result<SendBundleResponse> {
        if bundle.txs.is_empty() {
            return Err(RelayClientError::EmptyBundle);
        }
        self.request(RelayRequest::SendBundle(bundle)).await
    }

    /// Simulate a bundle against a state view, `latest` by default.
    #[instrument(skip_all, fields(block = bundle.block_number))]
    pub async fn call_bundle(&self, bundle: EthCallBundle) -> Result<EthCallBundleResponse> {
        if bundle.txs.is_empty() {
            return Err(RelayClientError::EmptyBundle);
        }
        self.request(RelayRequest::CallBundle(bundle)).await
    }

    /// Submit a single transaction to the relay's private pool. Returns
    /// the relay's acknowledgement, the transaction hash.
    #[instrument(skip_all)]
    pub async fn send_private_transaction(&self, tx: PrivateTransaction) -> Result<TxHash> {
        if tx.tx.is_empty() {
            return Err(RelayClientError::MissingArgument("tx"));
        }
        self.request(RelayRequest::SendPrivateTransaction(tx)).await
    }

    /// Cancel a previously submitted private transaction. Returns whether
    /// the relay accepted the cancellation.
    #[instrument(skip_all)]
    pub async fn cancel_private_transaction(&self, tx_hash: TxHash) -> Result<bool> {
        self.request(RelayRequest::CancelPrivateTransaction(CancelPrivateTransaction { tx_hash }))
            .await
    }

    /// Estimate per-transaction gas usage for a bundle.
    #[instrument(skip_all, fields(block = bundle.block_number))]
    pub async fn estimate_gas_bundle(
        &self,
        bundle: EthCallBundle,
    ) -> Result<EstimateGasBundleResponse> {
        if bundle.txs.is_empty() {
            return Err(RelayClientError::EmptyBundle);
        }
        self.request(RelayRequest::EstimateGasBundle(bundle)).await
    }

    /// Fetch aggregate stats for the calling identity. The relay derives
    /// the identity from the request signature.
    #[instrument(skip_all)]
    pub async fn user_stats(&self, block_number: u64) -> Result<UserStats> {
        self.request(RelayRequest::UserStats(U64::from(block_number))).await
    }

    /// Fetch delivery stats for one bundle.
    #[instrument(skip_all)]
    pub async fn bundle_stats(&self, bundle_hash: B256, block_number: u64) -> Result<BundleStats> {
        self.request(RelayRequest::BundleStats(BundleStatsRequest {
            bundle_hash,
            block_number: U64::from(block_number),
        }))
        .await
    }

    /// Build, sign, dispatch and decode one call.
    async fn request<R: DeserializeOwned>(&self, request: RelayRequest) -> Result<R> {
        let envelope = RpcEnvelope::new(self.next_id.fetch_add(1, Ordering::Relaxed), request);
        let body = serde_json::to_vec(&envelope).map_err(RelayClientError::Encode)?;

        // Sign the exact bytes that go on the wire.
        let signature = signature_header(&self.signer, &body).await?;

        let raw = self.transport.post(&self.url, body, request_headers(&signature)).await?;
        decode_reply(raw)
    }
}

/// Headers attached to every dispatch.
fn request_headers(signature: &str) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(SIGNATURE_HEADER),
        HeaderValue::from_str(signature).expect("address and hex signature are ascii"),
    );
    headers
}

/// Decode a raw reply into the method result.
///
/// A relay error object is surfaced as [`RelayClientError::Relay`] even
/// when the HTTP status reads success; a reply with neither result nor
/// error is never treated as success.
fn decode_reply<R: DeserializeOwned>(raw: RawResponse) -> Result<R> {
    let reply: RpcReply<R> = serde_json::from_slice(&raw.body).map_err(|source| {
        warn!(status = raw.status, %source, "failed to decode relay response");
        RelayClientError::Decode {
            source,
            status: raw.status,
            body: String::from_utf8_lossy(&raw.body).into_owned(),
        }
    })?;

    if let Some(error) = reply.error {
        return Err(error.into());
    }
    reply.result.ok_or_else(|| RelayClientError::MissingResult {
        status: raw.status,
        body: String::from_utf8_lossy(&raw.body).into_owned(),
    })
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        Some(url::Host::Domain(host)) => host == "localhost",
        None => false,
    }
}
