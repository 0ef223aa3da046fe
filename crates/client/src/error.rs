use url::Url;

/// Result type for relay client operations.
pub type Result<T> = std::result::Result<T, RelayClientError>;

/// Errors returned by the relay client.
///
/// Caller-input and signing errors are returned before any network
/// traffic. Transport, relay and decode failures are kept distinct so a
/// rejected bundle is never mistaken for a broken network, and the
/// decode variants carry the raw reply for diagnostics.
#[derive(thiserror::Error, Debug)]
pub enum RelayClientError {
    /// The signing key hex was malformed or outside the valid key range.
    #[error("invalid signing key: {0}")]
    InvalidKeyFormat(#[from] alloy::signers::local::LocalSignerError),

    /// A required credential was absent from the environment.
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// The network label does not resolve to a known relay.
    #[error(transparent)]
    UnknownNetwork(#[from] relay_constants::UnknownNetworkError),

    /// The bundle contains no transactions.
    #[error("bundle contains no transactions")]
    EmptyBundle,

    /// A required argument was empty or absent.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// The signer failed to produce a signature.
    #[error("failed to sign request: {0}")]
    SigningFailed(#[from] alloy::signers::Error),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The endpoint does not use a secure transport scheme.
    #[error("relay endpoint must use https: {0}")]
    InsecureEndpoint(Url),

    /// The endpoint URL could not be parsed.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// The request could not be delivered, or timed out.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The relay replied with a well-formed error object.
    #[error("relay error {code}: {message}")]
    Relay {
        /// Error code reported by the relay.
        code: i64,
        /// Message reported by the relay.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode relay response (status {status}): {source}")]
    Decode {
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
        /// HTTP status of the reply.
        status: u16,
        /// Raw reply body, for diagnostics.
        body: String,
    },

    /// The reply was well-formed but carried neither result nor error.
    #[error("relay reply carried no result (status {status})")]
    MissingResult {
        /// HTTP status of the reply.
        status: u16,
        /// Raw reply body, for diagnostics.
        body: String,
    },
}

impl From<relay_types::RpcError> for RelayClientError {
    fn from(error: relay_types::RpcError) -> Self {
        Self::Relay { code: error.code, message: error.message }
    }
}

impl RelayClientError {
    /// True if the relay itself rejected the call, as opposed to a local,
    /// transport or decode failure.
    pub const fn is_relay_error(&self) -> bool {
        matches!(self, Self::Relay { .. })
    }
}
