pub mod shutdown;
pub mod state;

pub use shutdown::ShutdownManager;
pub use state::App;

use anyhow::Result;
use std::time::{Duration, Instant};

impl App {
    /// Paces frames on the wall clock until `max_ticks` frames have run or
    /// shutdown is requested.
    pub async fn run_realtime(
        &mut self,
        max_ticks: Option<u64>,
        shutdown: &ShutdownManager,
    ) -> Result<()> {
        let mut interval = tokio::time::interval(Duration::from_millis(self.frame_ms.max(1)));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let started = Instant::now();
        let offset = self.now;
        let mut ticks = 0u64;

        while !shutdown.is_shutdown_requested() && max_ticks.is_none_or(|max| ticks < max) {
            interval.tick().await;
            let now = offset + started.elapsed().as_millis() as u64;
            self.step_at(now);
            ticks += 1;
        }
        tracing::info!(
            ticks,
            population = self.last_frame.stats.population,
            "Realtime run finished"
        );
        Ok(())
    }
}
