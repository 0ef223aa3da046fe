//! Signed JSON-RPC client for bundle and private transaction relays.
//!
//! Every call follows the same path: build the envelope from typed
//! params, serialize it once, sign those exact bytes for the
//! authentication header, dispatch the POST, and decode the typed reply.
//! Nothing is mutated after construction apart from the request id
//! counter, so one [`RelayClient`] can be shared freely across tasks.

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

/// The [`RelayClient`] method gateway.
pub mod client;

/// Environment configuration for [`RelayClient::from_env`].
pub mod config;

mod error;
pub use error::{RelayClientError, Result};

/// Request signing for the authentication header.
pub mod signer;

/// The transport seam used to dispatch signed requests.
pub mod transport;

pub use client::RelayClient;
pub use relay_constants::{Network, SIGNATURE_HEADER};
