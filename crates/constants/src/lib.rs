//! Relay SDK constants.
//!
//! This crate contains the set of networks with a known relay deployment,
//! the default endpoint for each, and the name of the authentication
//! header the relay requires on every request.

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

mod networks;
pub use networks::{Network, UnknownNetworkError, GOERLI_RELAY_URL, MAINNET_RELAY_URL};

/// Name of the header carrying the request authentication signature.
///
/// The value is `<signer address>:<hex-encoded signature>`. Lowercase, as
/// header names are case-insensitive on the wire and typed header maps
/// require it.
pub const SIGNATURE_HEADER: &str = "x-relay-signature";
