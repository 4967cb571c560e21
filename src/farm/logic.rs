//! Paperclip Farm economy logic — pure functions over `FarmState`.

use crate::error::EconomyError;
use crate::format::{format_amount, round_to_cents};
use crate::time::Ticker;

use super::state::FarmState;

/// Result of a purchase attempt that referenced a real upgrade.
#[derive(Clone, Debug, PartialEq)]
pub enum PurchaseOutcome {
    Purchased {
        index: usize,
        /// Price paid (the cost in effect before the increase).
        paid: f64,
        owned: u32,
        next_cost: f64,
        rate: f64,
    },
    /// Not enough paperclips; nothing changed.
    InsufficientResources { needed: f64, available: f64 },
}

impl PurchaseOutcome {
    pub fn is_purchased(&self) -> bool {
        matches!(self, PurchaseOutcome::Purchased { .. })
    }
}

/// Manual click: add the configured yield.
pub fn produce_manual(state: &mut FarmState) {
    state.resource += state.manual_yield;
}

/// Passive production over `delta_seconds` of elapsed time.
///
/// Negative or NaN deltas count as zero so a misbehaving clock can never
/// take paperclips away.
pub fn produce_elapsed(state: &mut FarmState, delta_seconds: f64) {
    let delta = if delta_seconds > 0.0 { delta_seconds } else { 0.0 };
    state.resource += state.rate * delta;
}

/// Feed one host timestamp through `ticker` and produce for the time it yields.
/// Returns the elapsed seconds that were credited.
pub fn advance<T: Ticker + ?Sized>(state: &mut FarmState, ticker: &mut T, now_ms: f64) -> f64 {
    let seconds = ticker.advance(now_ms);
    produce_elapsed(state, seconds);
    seconds
}

/// Try to buy one unit of the upgrade with the given id.
pub fn attempt_purchase(state: &mut FarmState, id: &str) -> Result<PurchaseOutcome, EconomyError> {
    let index = state
        .upgrade_index(id)
        .ok_or_else(|| EconomyError::UnknownUpgrade(id.to_string()))?;
    attempt_purchase_at(state, index)
}

/// Try to buy one unit of the upgrade at display position `index`.
pub fn attempt_purchase_at(
    state: &mut FarmState,
    index: usize,
) -> Result<PurchaseOutcome, EconomyError> {
    let multiplier = state.price_multiplier;
    let available = state.resource;
    let upgrade = state
        .upgrades
        .get_mut(index)
        .ok_or_else(|| EconomyError::UnknownUpgrade(format!("#{index}")))?;

    let cost = upgrade.current_cost;
    if available < cost {
        log::trace!("{}: need {}, have {}", upgrade.spec.id, cost, available);
        return Ok(PurchaseOutcome::InsufficientResources {
            needed: cost,
            available,
        });
    }

    upgrade.owned += 1;
    upgrade.current_cost = round_to_cents(cost * multiplier);
    let (owned, next_cost, unit_rate) = (upgrade.owned, upgrade.current_cost, upgrade.spec.rate);
    log::info!(
        "bought {} for {} (owned {}, next {})",
        upgrade.spec.name,
        format_amount(cost),
        owned,
        format_amount(next_cost)
    );

    state.resource -= cost;
    state.rate += unit_rate;
    debug_assert!(check_invariants(state).is_ok());

    Ok(PurchaseOutcome::Purchased {
        index,
        paid: cost,
        owned,
        next_cost,
        rate: state.rate,
    })
}

/// Verify the cached production rate against a full recomputation and that
/// the counter has not gone negative.
pub fn check_invariants(state: &FarmState) -> Result<(), EconomyError> {
    let expected = state.expected_rate();
    let tolerance = 1e-9 * expected.abs().max(1.0);
    if (state.rate - expected).abs() > tolerance {
        return Err(EconomyError::InvariantViolation {
            cached: state.rate,
            expected,
        });
    }
    if state.resource < 0.0 {
        return Err(EconomyError::NegativeResource(state.resource));
    }
    Ok(())
}
