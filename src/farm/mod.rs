//! Paperclip Farm — click for paperclips, buy upgrades, watch the rate climb.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::config::EconomyConfig;
use crate::input::{ClickState, InputEvent};
use crate::time::{FrameTicker, Ticker};

use logic::PurchaseOutcome;
use state::{FarmState, Snapshot};

/// A farm session: the economy plus the clock that drives it.
pub struct FarmGame {
    pub state: FarmState,
    ticker: Box<dyn Ticker>,
}

impl FarmGame {
    pub fn new() -> Self {
        Self::with_config(EconomyConfig::default())
    }

    pub fn with_config(config: EconomyConfig) -> Self {
        Self::with_ticker(FarmState::with_config(config), Box::new(FrameTicker::new()))
    }

    pub fn with_ticker(state: FarmState, ticker: Box<dyn Ticker>) -> Self {
        Self { state, ticker }
    }

    /// Dispatch an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) if actions::PRODUCE_KEYS.contains(c) => self.produce(),
            InputEvent::Key(c) => match actions::key_upgrade_index(*c) {
                Some(index) if index < self.state.upgrades.len() => self.purchase(index),
                _ => false,
            },
            InputEvent::Click(actions::PRODUCE) => self.produce(),
            InputEvent::Click(id) => match actions::buy_index(*id) {
                Some(index) => self.purchase(index),
                None => false,
            },
        }
    }

    fn produce(&mut self) -> bool {
        logic::produce_manual(&mut self.state);
        true
    }

    fn purchase(&mut self, index: usize) -> bool {
        match logic::attempt_purchase_at(&mut self.state, index) {
            Ok(PurchaseOutcome::Purchased { .. }) => {
                if log::log_enabled!(log::Level::Debug) {
                    if let Ok(json) = serde_json::to_string(&self.state.snapshot()) {
                        log::debug!("snapshot {json}");
                    }
                }
                true
            }
            // Greyed-out button; the click is simply absorbed.
            Ok(PurchaseOutcome::InsufficientResources { .. }) => true,
            Err(e) => {
                log::error!("purchase dispatch failed: {e}");
                false
            }
        }
    }

    /// Credit production for the frame drawn at `now_ms`.
    pub fn frame(&mut self, now_ms: f64) {
        logic::advance(&mut self.state, self.ticker.as_mut(), now_ms);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.snapshot(), f, area, click_state);
    }
}
