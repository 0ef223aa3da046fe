//! Transport seam for dispatching signed request bodies.

use crate::Result;
use reqwest::header::HeaderMap;
use std::{future::Future, time::Duration};
use url::Url;

/// Bound on how long a single dispatch may take, relay-side simulation
/// work included.
pub const DISPATCH_TIMEOUT: Duration = Duration::from_secs(20);

/// A raw transport reply: HTTP status code and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code of the reply.
    pub status: u16,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

/// Dispatches signed request bodies to the relay.
///
/// Implementations must deliver the bytes unchanged and must not retry
/// submission calls on their own: replaying a signed body can
/// double-broadcast a private transaction. Retrying read-only stats
/// calls is acceptable.
pub trait Transport {
    /// POST the body with the given headers and return the raw reply.
    fn post(
        &self,
        url: &Url,
        body: Vec<u8>,
        headers: HeaderMap,
    ) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// [`Transport`] over a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with [`DISPATCH_TIMEOUT`] applied to every
    /// request.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(DISPATCH_TIMEOUT)
            .build()
            .expect("client construction only fails without a TLS backend");
        Self { client }
    }

    /// Create a transport over an existing client.
    ///
    /// The caller is responsible for configuring a request timeout; a
    /// dispatch must never be allowed to block indefinitely.
    pub const fn new_with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get the underlying client.
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn post(&self, url: &Url, body: Vec<u8>, headers: HeaderMap) -> Result<RawResponse> {
        let response = self.client.post(url.clone()).headers(headers).body(body).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}
