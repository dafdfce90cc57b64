//! Global study settings from the environment.
//!
//! | Variable                      | Default |
//! |-------------------------------|---------|
//! | `MEMORIZE_IGNORE_CASE`        | false   |
//! | `MEMORIZE_IGNORE_PUNCTUATION` | false   |
//! | `MEMORIZE_HINT_PERCENTAGE`    | 0       |
//! | `MEMORIZE_SHOW_UNDERLINES`    | true    |

use anyhow::{bail, Context};
use memorize_core::{HintPercentage, StudySettings};

/// Read settings from the process environment. `run` loads `.env` first.
pub fn load_global_settings() -> anyhow::Result<StudySettings> {
    settings_from_lookup(|key| std::env::var(key).ok())
}

/// Build settings from an arbitrary variable lookup.
pub fn settings_from_lookup<F>(lookup: F) -> anyhow::Result<StudySettings>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = StudySettings::default();
    let flag = |key: &str, default: bool| -> anyhow::Result<bool> {
        lookup(key).map_or(Ok(default), |value| parse_bool(key, &value))
    };

    let hint_percentage = match lookup("MEMORIZE_HINT_PERCENTAGE") {
        Some(value) => {
            let value: u32 = value
                .trim()
                .parse()
                .with_context(|| format!("MEMORIZE_HINT_PERCENTAGE is not a number: {value}"))?;
            HintPercentage::new(value).context("invalid MEMORIZE_HINT_PERCENTAGE")?
        }
        None => defaults.hint_percentage,
    };

    Ok(StudySettings {
        ignore_case: flag("MEMORIZE_IGNORE_CASE", defaults.ignore_case)?,
        ignore_punctuation: flag("MEMORIZE_IGNORE_PUNCTUATION", defaults.ignore_punctuation)?,
        hint_percentage,
        show_underlines: flag("MEMORIZE_SHOW_UNDERLINES", defaults.show_underlines)?,
    })
}

fn parse_bool(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be true or false, got {other:?}"),
    }
}
