use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The list of known networks as a string.
const KNOWN_NETWORKS: &str = "mainnet, goerli";

/// Default relay endpoint for the Mainnet network.
pub const MAINNET_RELAY_URL: &str = "https://relay.flashbots.net";
/// Default relay endpoint for the Goerli network.
pub const GOERLI_RELAY_URL: &str = "https://relay-goerli.flashbots.net";

/// Error type for resolving a [`Network`] from a label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownNetworkError {
    /// The network label is not supported.
    #[error("network label {0} is not known. supported networks: {KNOWN_NETWORKS}")]
    NetworkNotSupported(String),
}

/// Networks with a known relay deployment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Ethereum Mainnet.
    Mainnet,
    /// The Goerli testnet.
    Goerli,
}

impl Network {
    /// The default relay endpoint for this network.
    pub const fn relay_url(&self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_RELAY_URL,
            Self::Goerli => GOERLI_RELAY_URL,
        }
    }

    /// The label used for this network in configuration.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Goerli => "goerli",
        }
    }
}

impl FromStr for Network {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "goerli" => Ok(Self::Goerli),
            _ => Err(UnknownNetworkError::NetworkNotSupported(s)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_known_labels() {
        assert_eq!("mainnet".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!(" Goerli ".parse::<Network>(), Ok(Network::Goerli));
    }

    #[test]
    fn unknown_label_is_typed_error() {
        let err = "hoodi".parse::<Network>().unwrap_err();
        assert_eq!(err, UnknownNetworkError::NetworkNotSupported("hoodi".to_string()));
    }

    #[test]
    fn relay_urls_are_https() {
        assert!(Network::Mainnet.relay_url().starts_with("https://"));
        assert!(Network::Goerli.relay_url().starts_with("https://"));
    }

    #[test]
    fn label_serde_roundtrip() {
        let json = serde_json::to_string(&Network::Mainnet).unwrap();
        assert_eq!(json, "\"mainnet\"");
        assert_eq!(serde_json::from_str::<Network>(&json).unwrap(), Network::Mainnet);
    }
}
