//! Frame timing for drivers that feed wall-clock timestamps into `tick`.

/// Turns successive frame timestamps into clamped tick deltas.
///
/// The first call after construction or `reset` yields a zero delta, and no
/// delta ever exceeds `max_delta_ms`, so a long pause does not turn into one
/// huge simulation step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<u64>,
    max_delta_ms: f64,
}

impl FrameClock {
    pub fn new(max_delta_ms: f64) -> Self {
        Self {
            last: None,
            max_delta_ms,
        }
    }

    /// Records `now` and returns the milliseconds since the previous call.
    pub fn advance(&mut self, now: u64) -> f64 {
        let delta = match self.last {
            Some(last) => now.saturating_sub(last) as f64,
            None => 0.0,
        };
        self.last = Some(now);
        delta.min(self.max_delta_ms)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
