//! Command-line front end for memorize-core.
//!
//! Owns the mutable study state (loaded set, selected passage, settings,
//! random source) and hands it to the stateless core one call at a time.

pub mod cli;
pub mod commands;
pub mod config;

use clap::Parser;
use memorize_core::EffectiveSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::commands::Runtime;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(cli.verbose).into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let global = config::load_global_settings()?;
    let overrides = cli.settings.overrides();
    let settings = EffectiveSettings::merge(&global, Some(&overrides));
    tracing::debug!(?settings, "effective settings");

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut runtime = Runtime { settings, rng };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::List(args) => commands::list(args, &mut out),
        Command::Check(args) => commands::check(args, &runtime, &mut out),
        Command::Hints(args) => commands::hints(args, &mut runtime, &mut out),
        Command::Order(args) => commands::order(args, &mut runtime, &mut out),
        Command::Reveal(args) => commands::reveal(args, &mut out),
    }
}

/// Log filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}
