//! Error types for the paperclip economy.

use thiserror::Error;

/// Failures that indicate a caller or configuration mistake.
///
/// Running short of paperclips is *not* an error; see
/// [`PurchaseOutcome::InsufficientResources`](crate::farm::logic::PurchaseOutcome).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EconomyError {
    /// The adapter referenced a catalog entry that does not exist.
    #[error("unknown upgrade: {0}")]
    UnknownUpgrade(String),

    #[error("invalid economy config: {0}")]
    InvalidConfig(String),

    /// The cached production rate drifted from the per-upgrade sum.
    #[error("production rate {cached} does not match owned upgrades ({expected})")]
    InvariantViolation { cached: f64, expected: f64 },

    #[error("paperclip count went negative: {0}")]
    NegativeResource(f64),
}
