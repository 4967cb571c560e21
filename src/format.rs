//! Compact number formatting for counters, rates, and prices.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount for display (e.g. 1500000 → "1.50M").
///
/// Thresholds: billions and millions get two decimals, anything from ten
/// thousand up gets one decimal with a "k" suffix. Smaller values print as
/// plain integers, or with exactly two decimals when fractional.
pub fn format_amount(n: f64) -> String {
    if n < 0.0 {
        return format!("-{}", format_amount(-n));
    }
    if n >= 1_000_000_000.0 {
        format!("{:.2}B", n / 1_000_000_000.0)
    } else if n >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if n >= 10_000.0 {
        format!("{:.1}k", n / 1_000.0)
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{:.2}", n)
    }
}

/// Round to two decimal places, half away from zero.
///
/// Rounds the exact binary value of `n` (so 13.224999999999998 gives 13.22),
/// then returns the double nearest to the rounded decimal. Values outside
/// `Decimal` range (or non-finite) are returned unchanged.
pub fn round_to_cents(n: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(n) else {
        return n;
    };
    let cents = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.to_string().parse().unwrap_or(n)
}
