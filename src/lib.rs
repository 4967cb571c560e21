//! Paperclip Farm: an incremental clicker economy with a browser terminal UI.
//!
//! The economy (`farm::state`, `farm::logic`) is plain data and pure
//! functions; `farm::render`, `widgets` and `input` adapt it to ratatui.

pub mod config;
pub mod error;
pub mod farm;
pub mod format;
pub mod input;
pub mod logging;
pub mod time;
pub mod widgets;

pub use config::{EconomyConfig, UpgradeSpec};
pub use error::EconomyError;
pub use farm::logic::{
    attempt_purchase, attempt_purchase_at, check_invariants, produce_elapsed, produce_manual,
    PurchaseOutcome,
};
pub use farm::state::{FarmState, Snapshot, UpgradeView};
pub use format::format_amount;
