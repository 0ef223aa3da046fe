//! Request signing for the relay authentication header.
//!
//! The relay authenticates a caller by recovering the signer of an
//! EIP-191 personal message. The message is the ASCII `0x`-hex encoding
//! of the keccak-256 digest of the request body, not the digest bytes
//! themselves. The header value pairs the signer's address with the
//! 65-byte recoverable signature, hex encoded, joined by a colon.

use crate::Result;
use alloy::{
    primitives::keccak256,
    signers::{local::PrivateKeySigner, Signer},
};

/// Load a signing identity from a hex-encoded private key scalar, with
/// or without a `0x` prefix.
///
/// The account address is always derived from the key by the signer,
/// never stored separately, so the two cannot diverge.
pub fn identity_from_hex(secret_hex: &str) -> Result<PrivateKeySigner> {
    secret_hex.trim().parse::<PrivateKeySigner>().map_err(Into::into)
}

/// Compute the authentication header value for a serialized request body.
///
/// The body must be exactly the bytes sent on the wire; re-serializing
/// between signing and dispatch invalidates the signature.
pub async fn signature_header<S>(signer: &S, body: &[u8]) -> Result<String>
where
    S: Signer + Send + Sync,
{
    // The personal message is the ASCII "0x..." rendering of the digest.
    let digest = keccak256(body);
    let signature = signer.sign_message(digest.to_string().as_bytes()).await?;

    Ok(format!("{}:{}", signer.address(), hex::encode_prefixed(signature.as_bytes())))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::RelayClientError;
    use alloy::primitives::{address, Signature};

    /// Well-known throwaway development key.
    const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn signer() -> PrivateKeySigner {
        identity_from_hex(TEST_KEY).unwrap()
    }

    #[test]
    fn address_derivation_is_deterministic() {
        let expected = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert_eq!(signer().address(), expected);
        assert_eq!(identity_from_hex(TEST_KEY).unwrap().address(), expected);
        // a 0x prefix parses to the same identity
        assert_eq!(identity_from_hex(&format!("0x{TEST_KEY}")).unwrap().address(), expected);
    }

    #[test]
    fn malformed_key_is_rejected() {
        let err = identity_from_hex("not a key").unwrap_err();
        assert!(matches!(err, RelayClientError::InvalidKeyFormat(_)));

        // too-short scalars are also rejected
        let err = identity_from_hex("0xabcd").unwrap_err();
        assert!(matches!(err, RelayClientError::InvalidKeyFormat(_)));
    }

    #[tokio::test]
    async fn header_pairs_address_with_recoverable_signature() {
        let signer = signer();
        let body = br#"{"jsonrpc":"2.0","id":1,"method":"eth_sendBundle","params":[{}]}"#;

        let header = signature_header(&signer, body).await.unwrap();
        let (address_part, signature_part) = header.split_once(':').unwrap();

        assert_eq!(address_part, signer.address().to_string());
        assert!(signature_part.starts_with("0x"));
        // 65 bytes, hex encoded
        assert_eq!(signature_part.len(), 2 + 65 * 2);

        // the signature recovers to the derived address
        let bytes = hex::decode(signature_part).unwrap();
        let parity = match bytes[64] {
            27 | 28 => bytes[64] == 28,
            b => b == 1,
        };
        let signature = Signature::from_bytes_and_parity(&bytes[..64], parity);
        let message = keccak256(body).to_string();
        assert_eq!(
            signature.recover_address_from_msg(message.as_bytes()).unwrap(),
            signer.address()
        );
    }

    #[tokio::test]
    async fn signing_is_deterministic() {
        let signer = signer();
        let body = b"identical body";

        let first = signature_header(&signer, body).await.unwrap();
        let second = signature_header(&signer, body).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn one_byte_change_invalidates_the_signature() {
        let signer = signer();
        let body = br#"{"id":1}"#.to_vec();
        let mut tampered = body.clone();
        *tampered.last_mut().unwrap() = b' ';

        assert_ne!(keccak256(&body), keccak256(&tampered));

        let header = signature_header(&signer, &body).await.unwrap();
        let (_, signature_part) = header.split_once(':').unwrap();
        let bytes = hex::decode(signature_part).unwrap();
        let parity = match bytes[64] {
            27 | 28 => bytes[64] == 28,
            b => b == 1,
        };
        let signature = Signature::from_bytes_and_parity(&bytes[..64], parity);

        // recovering against the tampered body must not yield the signer
        let message = keccak256(&tampered).to_string();
        let recovered = signature.recover_address_from_msg(message.as_bytes());
        assert!(recovered.map_or(true, |recovered| recovered != signer.address()));
    }
}
