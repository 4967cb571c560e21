//! Economy tuning: manual yield, price growth, and the upgrade catalog.
//!
//! The defaults reproduce the reference paperclip catalog. A JSON document
//! can override any subset of fields; missing fields fall back to defaults.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::EconomyError;

/// Geometric cost growth applied after each purchase (15%).
pub const DEFAULT_PRICE_MULTIPLIER: f64 = 1.15;

/// Paperclips granted per manual click.
pub const DEFAULT_MANUAL_YIELD: f64 = 1.0;

/// Static definition of one catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpgradeSpec {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Cost of the first unit.
    pub base_cost: f64,
    /// Clips per second contributed by each owned unit.
    pub rate: f64,
}

impl UpgradeSpec {
    pub fn new(id: &str, name: &str, base_cost: f64, rate: f64, description: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            base_cost,
            rate,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub manual_yield: f64,
    pub price_multiplier: f64,
    /// Display order is catalog order.
    pub catalog: Vec<UpgradeSpec>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            manual_yield: DEFAULT_MANUAL_YIELD,
            price_multiplier: DEFAULT_PRICE_MULTIPLIER,
            catalog: default_catalog(),
        }
    }
}

impl EconomyConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self, EconomyError> {
        let config: EconomyConfig = serde_json::from_str(json)
            .map_err(|e| EconomyError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EconomyError> {
        if !self.manual_yield.is_finite() || self.manual_yield < 0.0 {
            return Err(EconomyError::InvalidConfig(format!(
                "manual_yield must be finite and >= 0, got {}",
                self.manual_yield
            )));
        }
        if !self.price_multiplier.is_finite() || self.price_multiplier < 1.0 {
            return Err(EconomyError::InvalidConfig(format!(
                "price_multiplier must be finite and >= 1, got {}",
                self.price_multiplier
            )));
        }
        if self.catalog.is_empty() {
            return Err(EconomyError::InvalidConfig("catalog is empty".into()));
        }

        let mut seen = HashSet::new();
        for spec in &self.catalog {
            if !seen.insert(spec.id.as_str()) {
                return Err(EconomyError::InvalidConfig(format!(
                    "duplicate upgrade id: {}",
                    spec.id
                )));
            }
            let valid = |v: f64| v.is_finite() && v >= 0.0;
            if !valid(spec.base_cost) || !valid(spec.rate) {
                return Err(EconomyError::InvalidConfig(format!(
                    "upgrade {} needs finite non-negative cost and rate",
                    spec.id
                )));
            }
        }
        Ok(())
    }
}

/// The five reference upgrades, cheapest first.
pub fn default_catalog() -> Vec<UpgradeSpec> {
    vec![
        UpgradeSpec::new(
            "tray",
            "Sorting Tray (A)",
            10.0,
            0.1,
            "Keeps wire bits tidy; +0.1 clips/sec per tray.",
        ),
        UpgradeSpec::new(
            "coil",
            "Wire Coil (B)",
            100.0,
            2.0,
            "Fresh galvanized coil; +2 clips/sec per coil.",
        ),
        UpgradeSpec::new(
            "bender",
            "Auto-Bender (C)",
            1_000.0,
            50.0,
            "Bends perfect paperclips nonstop; +50 clips/sec.",
        ),
        UpgradeSpec::new(
            "line",
            "Assembly Line (D)",
            12_000.0,
            800.0,
            "Conveyors & QA cams; +800 clips/sec.",
        ),
        UpgradeSpec::new(
            "foundry",
            "Micro-Foundry (E)",
            180_000.0,
            15_000.0,
            "Wire-drawing, annealing, the works; +15k clips/sec.",
        ),
    ]
}
