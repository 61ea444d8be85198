#![deny(unsafe_code)]
//! CLI binary for the starfield particle field.
//!
//! Subcommands:
//! - `render`: simulate N frames at the reference cadence, write a PNG
//! - `layers`: print the built-in depth tiers and their particle counts
//!   for a viewport

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use starfield_core::clock::REFERENCE_FRAME_MS;
use starfield_core::{Animator, FieldConfig, Layer, LayerConfig};
use starfield_raster::PixelSurface;
use std::path::PathBuf;
use std::process;

/// The three depth tiers, far to near, with display names.
const TIERS: &[(&str, LayerConfig)] = &[
    ("far", LayerConfig::FAR),
    ("mid", LayerConfig::MID),
    ("near", LayerConfig::NEAR),
];

#[derive(Parser)]
#[command(name = "starfield", about = "Drifting parallax starfield renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate N frames and write the final frame as a PNG.
    Render {
        /// Viewport width in logical pixels.
        #[arg(short = 'W', long, default_value_t = 800.0)]
        width: f64,

        /// Viewport height in logical pixels.
        #[arg(short = 'H', long, default_value_t = 600.0)]
        height: f64,

        /// Number of simulated frames (16.67 ms apart).
        #[arg(short, long, default_value_t = 600)]
        frames: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Device pixel ratio (clamped to [1, 2]).
        #[arg(long, default_value_t = 1.0)]
        pixel_ratio: f64,

        /// Output file path.
        #[arg(short, long, default_value = "starfield.png")]
        output: PathBuf,

        /// Field overrides as a JSON string
        /// (keys: background, twinkle, twinkle_step).
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Print the depth tiers and the particle counts they produce.
    Layers {
        /// Viewport width in logical pixels.
        #[arg(short = 'W', long, default_value_t = 800.0)]
        width: f64,

        /// Viewport height in logical pixels.
        #[arg(short = 'H', long, default_value_t = 600.0)]
        height: f64,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            width,
            height,
            frames,
            seed,
            pixel_ratio,
            output,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let config = FieldConfig::from_json(&params)?;

            let mut animator = Animator::new(
                config,
                width,
                height,
                pixel_ratio,
                seed,
                PixelSurface::default(),
            );
            for frame in 0..frames {
                animator.step(frame as f64 * REFERENCE_FRAME_MS);
            }

            starfield_raster::snapshot::write_png(animator.surface(), &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "frames": frames,
                    "seed": seed,
                    "pixel_ratio": animator.viewport().pixel_ratio(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {width}x{height} ({frames} frames, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
        Command::Layers { width, height } => {
            if cli.json {
                let tiers: Vec<serde_json::Value> = TIERS
                    .iter()
                    .map(|(name, config)| {
                        serde_json::json!({
                            "tier": name,
                            "config": config,
                            "count": Layer::target_count(config, width, height),
                        })
                    })
                    .collect();
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "layers": tiers,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Layers for {width}x{height}:");
                for (name, config) in TIERS {
                    println!(
                        "  {name:<4} density {:.5} speed {:.2} size [{:.1}, {:.1}] alpha {:.2} -> {} particles",
                        config.density,
                        config.speed,
                        config.size_min,
                        config.size_max,
                        config.alpha,
                        Layer::target_count(config, width, height)
                    );
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
