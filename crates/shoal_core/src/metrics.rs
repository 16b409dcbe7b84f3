//! Tick timing and structured logging setup.

use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Default number of ticks between summary log lines.
pub const DEFAULT_REPORT_EVERY: u64 = 600;

/// Collects per-tick timings for the driver loop.
#[derive(Debug, Clone)]
pub struct Metrics {
    tick_count: u64,
    total_tick_time: Duration,
    slowest_tick: Duration,
    report_every: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_EVERY)
    }
}

impl Metrics {
    #[must_use]
    pub fn new(report_every: u64) -> Self {
        Self {
            tick_count: 0,
            total_tick_time: Duration::ZERO,
            slowest_tick: Duration::ZERO,
            report_every: report_every.max(1),
        }
    }

    /// Records a completed tick. Emits an `info!` summary every
    /// `report_every` ticks.
    pub fn record_tick(&mut self, duration: Duration, population: usize, food: usize) {
        self.tick_count += 1;
        self.total_tick_time += duration;
        self.slowest_tick = self.slowest_tick.max(duration);

        if self.tick_count.is_multiple_of(self.report_every) {
            tracing::info!(
                tick = self.tick_count,
                population,
                food,
                avg_tick_us = self.average_tick().as_micros() as u64,
                slowest_tick_us = self.slowest_tick.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn average_tick(&self) -> Duration {
        if self.tick_count == 0 {
            return Duration::ZERO;
        }
        self.total_tick_time.div_f64(self.tick_count as f64)
    }

    #[must_use]
    pub fn slowest_tick(&self) -> Duration {
        self.slowest_tick
    }
}

/// Installs the global fmt subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Calling it twice is harmless; the second install is ignored.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
