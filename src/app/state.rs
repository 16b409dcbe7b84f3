use anyhow::{Context, Result};
use shoal_core::{Ecosystem, Frame, FrameClock, Metrics, SimConfig};
use shoal_data::Bounds;
use std::time::Instant;

/// Headless driver state: the ecosystem plus its clock and timings.
pub struct App {
    pub ecosystem: Ecosystem,
    pub clock: FrameClock,
    pub metrics: Metrics,
    /// Simulated milliseconds between frames.
    pub frame_ms: u64,
    /// Timestamp of the last frame.
    pub now: u64,
    pub last_frame: Frame,
    pub fingerprint: String,
}

impl App {
    pub fn new(config: SimConfig, bounds: Bounds, frame_ms: u64) -> Result<Self> {
        let fingerprint = config.fingerprint();
        let clock = FrameClock::new(config.world.max_frame_delta_ms);
        let ecosystem =
            Ecosystem::new(config, bounds).context("Failed to build the ecosystem")?;
        let last_frame = ecosystem.frame();
        Ok(Self {
            ecosystem,
            clock,
            metrics: Metrics::default(),
            frame_ms,
            now: 0,
            last_frame,
            fingerprint,
        })
    }

    /// Runs one frame at timestamp `now`.
    pub fn step_at(&mut self, now: u64) -> &Frame {
        let delta_ms = self.clock.advance(now);
        let started = Instant::now();
        self.last_frame = self.ecosystem.tick(now, delta_ms);
        self.metrics.record_tick(
            started.elapsed(),
            self.last_frame.stats.population,
            self.last_frame.stats.food_count,
        );
        self.now = now;
        &self.last_frame
    }

    /// Runs one frame on the simulated clock.
    pub fn step(&mut self) -> &Frame {
        let now = if self.metrics.tick_count() == 0 {
            self.now
        } else {
            self.now + self.frame_ms
        };
        self.step_at(now)
    }

    /// Runs `ticks` frames on the simulated clock, as fast as possible.
    pub fn run_ticks(&mut self, ticks: u64) -> &Frame {
        for _ in 0..ticks {
            self.step();
        }
        &self.last_frame
    }
}
