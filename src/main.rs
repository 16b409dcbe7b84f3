use anyhow::{Context, Result};
use clap::Parser;
use shoal_core::{init_logging, SimConfig};
use shoal_data::Bounds;
use shoal_lib::app::{App, ShutdownManager};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of frames to run (realtime mode runs until Ctrl-C when unset)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Random seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Milliseconds between frames
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Pace frames on the wall clock instead of a simulated one
    #[arg(long)]
    realtime: bool,

    /// Print the final frame as JSON
    #[arg(long)]
    json: bool,

    /// Log filter, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

const DEFAULT_TICKS: u64 = 3600;

fn load_config(path: &str) -> Result<SimConfig> {
    if Path::new(path).exists() {
        SimConfig::load(path).with_context(|| format!("Failed to load config from {path}"))
    } else {
        tracing::info!(path, "No config file found, using defaults");
        Ok(SimConfig::default())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log);

    let mut config = load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    let mut app = App::new(config, Bounds::new(args.width, args.height), args.frame_ms)?;
    tracing::info!(
        fingerprint = %app.fingerprint,
        population = app.ecosystem.agents().len(),
        "Shoal started"
    );

    if args.realtime {
        let shutdown = ShutdownManager::new();
        shutdown.listen_for_ctrl_c();
        app.run_realtime(args.ticks, &shutdown).await?;
    } else {
        app.run_ticks(args.ticks.unwrap_or(DEFAULT_TICKS));
    }

    let frame = &app.last_frame;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(frame).context("Failed to serialize frame")?
        );
    } else {
        let s = &frame.stats;
        println!(
            "ticks={} population={} food={} avg_size={:.2} born={} dead={} predation={} starvation={}",
            app.metrics.tick_count(),
            s.population,
            s.food_count,
            s.avg_size,
            s.total_born,
            s.total_dead,
            s.predation_count,
            s.starvation_count
        );
    }
    Ok(())
}
