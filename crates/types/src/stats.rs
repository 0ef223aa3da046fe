//! Relay statistics types.

use alloy::primitives::{B256, U64};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters for `flashbots_getBundleStats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleStatsRequest {
    /// Hash identifying the bundle.
    pub bundle_hash: B256,
    /// Block the bundle targeted.
    pub block_number: U64,
}

/// Aggregate payment and gas statistics for the calling identity.
///
/// The identity is recovered from the request signature; no explicit
/// account parameter exists. Wire keys are snake_case and monetary
/// amounts are decimal wei strings, as the relay reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Whether the relay currently treats the identity as high priority.
    #[serde(default)]
    pub is_high_priority: bool,
    /// Total validator payments over all time, in wei.
    pub all_time_miner_payments: String,
    /// Total gas simulated for the identity's submissions, all time.
    pub all_time_gas_simulated: String,
    /// Validator payments over the last seven days, in wei.
    pub last_7d_miner_payments: String,
    /// Gas simulated over the last seven days.
    pub last_7d_gas_simulated: String,
    /// Validator payments over the last day, in wei.
    pub last_1d_miner_payments: String,
    /// Gas simulated over the last day.
    pub last_1d_gas_simulated: String,
}

/// Delivery and simulation status for a single submitted bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleStats {
    /// Whether the relay has simulated the bundle.
    #[serde(default)]
    pub is_simulated: bool,
    /// Whether the bundle was forwarded to block producers.
    #[serde(default)]
    pub is_sent_to_miners: bool,
    /// Whether the identity was high priority at submission time.
    #[serde(default)]
    pub is_high_priority: bool,
    /// When the relay simulated the bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated_at: Option<DateTime<Utc>>,
    /// When the relay received the bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    /// When the relay first forwarded the bundle to block producers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_to_miners_at: Option<DateTime<Utc>>,
}
