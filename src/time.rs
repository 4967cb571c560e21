//! Frame clocks that turn host timestamps into elapsed game time.
//!
//! `draw_web()` calls at ~60fps with a variable delta. A [`Ticker`] converts
//! the `performance.now()` timestamp of each frame into seconds of game time
//! to credit. [`FrameTicker`] passes the measured delta straight through;
//! [`FixedStepTicker`] quantizes it into whole steps so loops are
//! deterministic and fully testable.

/// Source of elapsed game time, fed one host timestamp per frame.
pub trait Ticker {
    /// Feed a wall-clock timestamp in milliseconds. Returns the seconds of
    /// game time that elapsed since the previous call (never negative).
    fn advance(&mut self, now_ms: f64) -> f64;
}

/// Milliseconds since the last timestamp, or zero on the first frame.
fn frame_delta(last_timestamp: &mut Option<f64>, now_ms: f64, max_delta_ms: Option<f64>) -> f64 {
    let delta = match *last_timestamp {
        // Clock anomalies (timestamps going backwards) count as no time.
        Some(prev) => (now_ms - prev).max(0.0),
        None => 0.0,
    };
    *last_timestamp = Some(now_ms);
    match max_delta_ms {
        Some(cap) => delta.min(cap),
        None => delta,
    }
}

/// Variable-step ticker: credits exactly the measured frame delta.
pub struct FrameTicker {
    last_timestamp: Option<f64>,
    /// Upper bound on one frame's delta, if any.
    max_delta_ms: Option<f64>,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self {
            last_timestamp: None,
            max_delta_ms: None,
        }
    }

    /// Cap each frame's delta, e.g. to ignore the gap while a tab was hidden.
    pub fn with_max_delta(max_delta_ms: f64) -> Self {
        Self {
            last_timestamp: None,
            max_delta_ms: Some(max_delta_ms),
        }
    }
}

impl Ticker for FrameTicker {
    fn advance(&mut self, now_ms: f64) -> f64 {
        frame_delta(&mut self.last_timestamp, now_ms, self.max_delta_ms) / 1000.0
    }
}

/// Fixed-step ticker using an accumulator pattern.
pub struct FixedStepTicker {
    /// Milliseconds per step (e.g. 100ms = 10 steps/sec)
    ms_per_step: f64,
    /// Accumulated milliseconds not yet consumed as steps
    accumulator: f64,
    /// Total elapsed steps since creation
    pub total_steps: u64,
    last_timestamp: Option<f64>,
}

impl FixedStepTicker {
    /// `steps_per_sec`: how many game steps per real-time second (e.g. 10).
    pub fn new(steps_per_sec: u32) -> Self {
        Self {
            ms_per_step: 1000.0 / steps_per_sec.max(1) as f64,
            accumulator: 0.0,
            total_steps: 0,
            last_timestamp: None,
        }
    }

    pub fn step_seconds(&self) -> f64 {
        self.ms_per_step / 1000.0
    }

    /// Number of whole steps that elapsed by `now_ms`; the remainder is
    /// carried into the next call.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        self.accumulator += frame_delta(&mut self.last_timestamp, now_ms, None);
        let steps = (self.accumulator / self.ms_per_step) as u32;
        self.accumulator -= steps as f64 * self.ms_per_step;
        self.total_steps += steps as u64;
        steps
    }
}

impl Ticker for FixedStepTicker {
    fn advance(&mut self, now_ms: f64) -> f64 {
        self.update(now_ms) as f64 * self.step_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── FrameTicker ────────────────────────────────────────────

    #[test]
    fn frame_first_call_returns_zero() {
        let mut t = FrameTicker::new();
        assert_eq!(t.advance(12_345.0), 0.0);
    }

    #[test]
    fn frame_returns_seconds_between_calls() {
        let mut t = FrameTicker::new();
        t.advance(1_000.0);
        assert!((t.advance(1_016.0) - 0.016).abs() < 1e-12);
        assert!((t.advance(2_016.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn frame_backwards_clock_is_zero() {
        let mut t = FrameTicker::new();
        t.advance(5_000.0);
        assert_eq!(t.advance(4_000.0), 0.0);
        // Next delta is measured from the new (earlier) timestamp.
        assert!((t.advance(4_500.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn frame_uncapped_credits_long_gap() {
        let mut t = FrameTicker::new();
        t.advance(0.0);
        assert!((t.advance(60_000.0) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn frame_cap_limits_long_gap() {
        let mut t = FrameTicker::with_max_delta(500.0);
        t.advance(0.0);
        assert!((t.advance(10_000.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn frame_deltas_sum_to_span() {
        let mut t = FrameTicker::new();
        t.advance(0.0);
        let total: f64 = (1..=60).map(|i| t.advance(i as f64 * 16.667)).sum();
        assert!((total - 60.0 * 0.016667).abs() < 1e-9);
    }

    // ── FixedStepTicker ────────────────────────────────────────

    #[test]
    fn fixed_first_frame_returns_zero_steps() {
        let mut t = FixedStepTicker::new(10);
        assert_eq!(t.update(0.0), 0);
    }

    #[test]
    fn fixed_one_step_at_100ms() {
        let mut t = FixedStepTicker::new(10);
        t.update(0.0);
        assert_eq!(t.update(100.0), 1);
        assert_eq!(t.total_steps, 1);
    }

    #[test]
    fn fixed_remainder_carried_over() {
        let mut t = FixedStepTicker::new(10);
        t.update(0.0);
        assert_eq!(t.update(150.0), 1); // 50ms left over
        assert_eq!(t.update(200.0), 1); // 50ms + 50ms
        assert_eq!(t.total_steps, 2);
    }

    #[test]
    fn fixed_sub_step_frames_accumulate() {
        let mut t = FixedStepTicker::new(10);
        t.update(0.0);
        for i in 1..=6 {
            assert_eq!(t.update(i as f64 * 16.0), 0); // up to 96ms
        }
        assert_eq!(t.update(112.0), 1);
    }

    #[test]
    fn fixed_backwards_clock_adds_nothing() {
        let mut t = FixedStepTicker::new(10);
        t.update(1_000.0);
        assert_eq!(t.update(500.0), 0);
        assert_eq!(t.total_steps, 0);
    }

    #[test]
    fn fixed_advance_returns_step_seconds() {
        let mut t = FixedStepTicker::new(4); // 250ms
        t.advance(0.0);
        assert!((t.advance(1_000.0) - 1.0).abs() < 1e-12);
        assert!((t.step_seconds() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn fixed_steady_60fps() {
        let mut t = FixedStepTicker::new(10);
        t.update(0.0);
        let total: u32 = (1..=60).map(|i| t.update(i as f64 * 16.667)).sum();
        assert!((9..=11).contains(&total), "expected ~10 steps, got {}", total);
    }

    #[test]
    fn tickers_work_as_trait_objects() {
        let mut tickers: Vec<Box<dyn Ticker>> =
            vec![Box::new(FrameTicker::new()), Box::new(FixedStepTicker::new(10))];
        for t in &mut tickers {
            t.advance(0.0);
            assert!((t.advance(1_000.0) - 1.0).abs() < 1e-9);
        }
    }
}
