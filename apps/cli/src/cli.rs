//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use memorize_core::{HintPercentage, SettingsOverrides};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "memorize", version, about = "Practice memorizing passages")]
pub struct Cli {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Seed for hint selection and shuffling (random when omitted).
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags overriding the environment-configured settings.
#[derive(Debug, Default, Args)]
pub struct SettingsArgs {
    #[arg(long, global = true, value_name = "BOOL")]
    pub ignore_case: Option<bool>,

    #[arg(long, global = true, value_name = "BOOL")]
    pub ignore_punctuation: Option<bool>,

    /// Percentage of words given as hints (0-100).
    #[arg(long, global = true, value_name = "P", value_parser = parse_percentage)]
    pub percent: Option<HintPercentage>,

    #[arg(long, global = true, value_name = "BOOL")]
    pub underlines: Option<bool>,
}

impl SettingsArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            ignore_case: self.ignore_case,
            ignore_punctuation: self.ignore_punctuation,
            hint_percentage: self.percent,
            show_underlines: self.underlines,
        }
    }
}

fn parse_percentage(value: &str) -> Result<HintPercentage, String> {
    let value: u32 = value.parse().map_err(|e| format!("{e}"))?;
    HintPercentage::new(value).map_err(|e| e.to_string())
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the passages of a set.
    List(SetArgs),
    /// Check a typed transcription against a passage.
    Check(CheckArgs),
    /// Show the hint overlay for a passage.
    Hints(PassageArgs),
    /// Shuffle a passage's lines, or verify an arrangement of them.
    Order(OrderArgs),
    /// Show a passage with only its first lines revealed.
    Reveal(RevealArgs),
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Passage set file (`.json`, or the plain-text format).
    pub set: PathBuf,
}

#[derive(Debug, Args)]
pub struct PassageArgs {
    #[command(flatten)]
    pub set: SetArgs,

    /// Passage number, starting at 1.
    #[arg(short, long, default_value_t = 1)]
    pub passage: usize,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub passage: PassageArgs,

    /// File holding the typed text, or `-` for stdin.
    #[arg(short, long)]
    pub answer: PathBuf,

    /// Print the full report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct OrderArgs {
    #[command(flatten)]
    pub passage: PassageArgs,

    /// Shown positions in the order you believe is correct, e.g. `2,0,1`.
    #[arg(short, long, value_delimiter = ',')]
    pub answer: Option<Vec<usize>>,
}

#[derive(Debug, Args)]
pub struct RevealArgs {
    #[command(flatten)]
    pub passage: PassageArgs,

    /// Number of lines to reveal.
    #[arg(short, long, default_value_t = 0)]
    pub lines: usize,
}
