//! # player_demo
//!
//! Creates a player game object, attaches a transform, reads it back,
//! detaches it, and destroys the player. Every step is logged.
//!
//! Log verbosity follows `RUST_LOG` when set, otherwise `--log-level`.

mod components;
mod config;
mod scenario;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::DemoConfig;
use gameobject_math::Vec3;

#[derive(Parser)]
#[command(name = "player_demo", about = "Attach, query, detach, and destroy components on a player")]
struct Args {
    /// Display name of the player
    #[arg(short, long, default_value = "Player")]
    name: String,

    /// Starting position of the player's transform
    #[arg(short, long, num_args = 3, value_names = ["X", "Y", "Z"], default_values_t = [1.0, 2.0, 3.0], allow_negative_numbers = true)]
    position: Vec<f32>,

    /// Uniform scale of the player's transform
    #[arg(short, long, default_value_t = 1.0)]
    scale: f32,

    /// Log level used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Filter used when `RUST_LOG` is unset: `level` applies to every target,
/// including the registry crates' own events.
fn fallback_filter(level: &str) -> EnvFilter {
    EnvFilter::new(level)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(&args.log_level)),
        )
        .init();

    let position = match args.position[..] {
        [x, y, z] => Vec3::new(x, y, z),
        _ => anyhow::bail!("--position takes exactly three values"),
    };
    let config = DemoConfig::new(args.name)
        .with_position(position)
        .with_scale(args.scale);

    info!(?config, "player demo starting");
    let report = scenario::run(&config)?;
    info!(
        position = ?report.position,
        first_detach = report.first_detach,
        second_detach = report.second_detach,
        handle_expired = report.handle_expired,
        remaining = report.remaining_after_destroy,
        "player demo finished"
    );
    Ok(())
}
