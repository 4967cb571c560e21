//! Paperclip Farm state definitions.

use serde::Serialize;

use crate::config::{EconomyConfig, UpgradeSpec};

/// One catalog entry together with how many the player owns.
#[derive(Clone, Debug)]
pub struct Upgrade {
    pub spec: UpgradeSpec,
    /// Price of the next unit. Starts at `spec.base_cost`, only ever grows.
    pub current_cost: f64,
    pub owned: u32,
}

impl Upgrade {
    pub fn new(spec: UpgradeSpec) -> Self {
        Self {
            current_cost: spec.base_cost,
            owned: 0,
            spec,
        }
    }

    /// Clips per second from all owned units.
    pub fn contribution(&self) -> f64 {
        self.spec.rate * self.owned as f64
    }
}

/// Full state of one Paperclip Farm session.
pub struct FarmState {
    /// Paperclips on hand. Never negative.
    pub resource: f64,
    /// Clips per second; cached sum of every upgrade's contribution.
    pub rate: f64,
    pub manual_yield: f64,
    pub price_multiplier: f64,
    /// Catalog in display order.
    pub upgrades: Vec<Upgrade>,
}

impl FarmState {
    pub fn new() -> Self {
        Self::with_config(EconomyConfig::default())
    }

    pub fn with_config(config: EconomyConfig) -> Self {
        Self {
            resource: 0.0,
            rate: 0.0,
            manual_yield: config.manual_yield,
            price_multiplier: config.price_multiplier,
            upgrades: config.catalog.into_iter().map(Upgrade::new).collect(),
        }
    }

    /// Display index of the upgrade with this id.
    pub fn upgrade_index(&self, id: &str) -> Option<usize> {
        self.upgrades.iter().position(|u| u.spec.id == id)
    }

    /// Production rate recomputed from scratch.
    pub fn expected_rate(&self) -> f64 {
        self.upgrades.iter().map(Upgrade::contribution).sum()
    }

    /// Read-only view for rendering. Takes `&self`, so it cannot mutate.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            resource: self.resource,
            rate: self.rate,
            upgrades: self
                .upgrades
                .iter()
                .map(|u| UpgradeView {
                    id: u.spec.id.clone(),
                    name: u.spec.name.clone(),
                    description: u.spec.description.clone(),
                    owned: u.owned,
                    base_cost: u.spec.base_cost,
                    current_cost: u.current_cost,
                    rate: u.spec.rate,
                    affordable: self.resource >= u.current_cost,
                })
                .collect(),
        }
    }
}

/// Immutable copy of the model handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub resource: f64,
    pub rate: f64,
    pub upgrades: Vec<UpgradeView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpgradeView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owned: u32,
    pub base_cost: f64,
    pub current_cost: f64,
    /// Per-unit clips per second.
    pub rate: f64,
    /// Whether the current resource covers `current_cost`.
    pub affordable: bool,
}

impl UpgradeView {
    pub fn contribution(&self) -> f64 {
        self.rate * self.owned as f64
    }
}
