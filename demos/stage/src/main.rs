//! stage — run the line theater in a terminal.
//!
//! Drives the engine with a fixed 60 fps frame clock and prints the line
//! after every resolution pass.
//!
//! ```text
//! cargo run -p stage                    # defaults
//! cargo run -p stage -- run.json        # SimConfig as JSON
//! RUST_LOG=lt_sim=debug cargo run -p stage
//! ```

mod render;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use lt_core::SimConfig;
use lt_sim::SimBuilder;
use tracing::info;
use tracing_subscriber::EnvFilter;

use render::TextStage;

const FRAME: Duration = Duration::from_millis(16);
const RUN_SECS: u64 = 30;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn load_config() -> Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config: SimConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config.clamped())
}

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    println!("=== stage — line theater ===");
    println!(
        "Line: {} cells  |  Interval: {} ms  |  Seed: {}",
        config.line_length, config.action_interval_ms, config.seed
    );
    println!();

    let mut stage = TextStage::new(config.line_length);
    let mut engine = SimBuilder::uniform(config)?.build()?;
    engine.start()?;

    let frames = RUN_SECS * 1000 / FRAME.as_millis() as u64;
    let t0 = Instant::now();
    for _ in 0..frames {
        engine.tick_with(FRAME, &mut stage);
    }
    info!(frames, elapsed_ms = t0.elapsed().as_millis() as u64, "run finished");

    println!();
    println!("{}", stage.summary());
    println!();
    println!("{:<14} {:<12} {:<6} {:<6} {:<20} {:>7}", "Agent", "Kind", "Cell", "Body", "State", "x");
    println!("{}", "-".repeat(70));
    for (agent, x) in engine.agents().iter().zip(&stage.xs) {
        println!(
            "{:<14} {:<12} {:<6} {:<6} {:<20} {:>7.2}",
            agent.id.to_string(),
            agent.kind.as_str(),
            agent.position,
            agent.body.to_string(),
            agent.animation_state.as_str(),
            x,
        );
    }
    println!();
    println!("{}", serde_json::to_string_pretty(engine.agents())?);

    engine.stop();
    Ok(())
}
