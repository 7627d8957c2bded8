//! Season report for one or more color profiles
//!
//! Usage: season_report <profile.json> [--calibration <file>]
//!
//! The profile file holds a single profile object or an array of them.
//! Reports are printed to stdout as JSON; logs go to stderr (RUST_LOG).

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use season_scorer_rust::{ColorProfile, SeasonScorer};

#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileInput {
    Many(Vec<ColorProfile>),
    One(ColorProfile),
}

struct Args {
    profile: PathBuf,
    calibration: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut profile = None;
    let mut calibration = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--calibration" => {
                let path = args.next().context("--calibration requires a file path")?;
                calibration = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("Usage: season_report <profile.json> [--calibration <file>]");
                std::process::exit(0);
            }
            other if other.starts_with("--") => bail!("Unknown option: {}", other),
            other => {
                if profile.is_some() {
                    bail!("Unexpected argument: {}", other);
                }
                profile = Some(PathBuf::from(other));
            }
        }
    }

    Ok(Args {
        profile: profile.context("Usage: season_report <profile.json> [--calibration <file>]")?,
        calibration,
    })
}

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "season_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args()?;

    let scorer = match &args.calibration {
        Some(path) => {
            tracing::info!("Loading calibration: {:?}", path);
            SeasonScorer::from_calibration_file(path)?
        }
        None => SeasonScorer::builtin(),
    };

    let contents = fs::read_to_string(&args.profile)
        .with_context(|| format!("Failed to read profile file: {:?}", args.profile))?;
    let input: ProfileInput = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse profile JSON: {:?}", args.profile))?;

    let output = match input {
        ProfileInput::One(profile) => serde_json::to_string_pretty(&scorer.score_profile(&profile))?,
        ProfileInput::Many(profiles) => {
            tracing::info!("Scoring {} profiles", profiles.len());
            serde_json::to_string_pretty(&scorer.score_profiles_parallel(&profiles))?
        }
    };

    println!("{}", output);
    Ok(())
}
