//! Core types for the memorization tool.

use crate::error::{ParseError, SettingsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque passage identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassageId(Uuid);

impl PassageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PassageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PassageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A text to be memorized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    #[serde(default)]
    pub id: PassageId,
    pub title: String,
    pub content: String,
}

impl Passage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: PassageId::new(),
            title: title.into(),
            content: content.into(),
        }
    }
}

const UNTITLED_SET: &str = "Untitled Set";

/// Ordered collection of passages. The order is the "correct" order for
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageSet {
    pub title: String,
    pub passages: Vec<Passage>,
}

impl PassageSet {
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Passage> {
        self.passages.get(index)
    }

    /// Apply the save rules: titles and contents trimmed, an empty set title
    /// becomes "Untitled Set", an empty passage title becomes "Passage N"
    /// (1-based position before skipping), and passages without content are
    /// dropped. Fails if no passage is left.
    pub fn sanitized(self) -> Result<PassageSet, ParseError> {
        let passages: Vec<Passage> = self
            .passages
            .into_iter()
            .enumerate()
            .filter_map(|(i, passage)| {
                let content = passage.content.trim();
                if content.is_empty() {
                    tracing::debug!(position = i + 1, "skipping passage without content");
                    return None;
                }
                let title = match passage.title.trim() {
                    "" => format!("Passage {}", i + 1),
                    title => title.to_string(),
                };
                Some(Passage {
                    id: passage.id,
                    title,
                    content: content.to_string(),
                })
            })
            .collect();

        if passages.is_empty() {
            return Err(ParseError::NoPassages);
        }

        let title = match self.title.trim() {
            "" => UNTITLED_SET.to_string(),
            title => title.to_string(),
        };
        Ok(PassageSet { title, passages })
    }
}

/// Options controlling what the aligner treats as a difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentOptions {
    pub ignore_case: bool,
    pub ignore_punctuation: bool,
}

/// Share of words revealed as hints, 0 to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HintPercentage(u8);

impl HintPercentage {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(100);

    pub fn new(value: u32) -> Result<Self, SettingsError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or(SettingsError::PercentageOutOfRange { value })
    }

    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u32> for HintPercentage {
    type Error = SettingsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HintPercentage> for u32 {
    fn from(value: HintPercentage) -> Self {
        value.get()
    }
}

/// Global study settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySettings {
    pub ignore_case: bool,
    pub ignore_punctuation: bool,
    pub hint_percentage: HintPercentage,
    pub show_underlines: bool,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            ignore_case: false,
            ignore_punctuation: false,
            hint_percentage: HintPercentage::NONE,
            show_underlines: true,
        }
    }
}

/// Per-session overrides (all fields optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_punctuation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint_percentage: Option<HintPercentage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_underlines: Option<bool>,
}

/// Effective settings (global merged with overrides).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveSettings {
    pub ignore_case: bool,
    pub ignore_punctuation: bool,
    pub hint_percentage: HintPercentage,
    pub show_underlines: bool,
}

impl EffectiveSettings {
    /// Merge global settings with optional overrides.
    pub fn merge(global: &StudySettings, overrides: Option<&SettingsOverrides>) -> Self {
        match overrides {
            Some(o) => Self {
                ignore_case: o.ignore_case.unwrap_or(global.ignore_case),
                ignore_punctuation: o.ignore_punctuation.unwrap_or(global.ignore_punctuation),
                hint_percentage: o.hint_percentage.unwrap_or(global.hint_percentage),
                show_underlines: o.show_underlines.unwrap_or(global.show_underlines),
            },
            None => Self {
                ignore_case: global.ignore_case,
                ignore_punctuation: global.ignore_punctuation,
                hint_percentage: global.hint_percentage,
                show_underlines: global.show_underlines,
            },
        }
    }

    pub fn alignment_options(&self) -> AlignmentOptions {
        AlignmentOptions {
            ignore_case: self.ignore_case,
            ignore_punctuation: self.ignore_punctuation,
        }
    }
}
