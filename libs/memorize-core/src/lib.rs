//! Core library for passage memorization.
//!
//! Provides:
//! - Normalization, LCS alignment and feedback rendering for typed recall
//! - Error classification (wrong words, capitalization, punctuation)
//! - Random word hints and the underline overlay
//! - Line shuffling and order verification
//! - Progressive line reveal
//! - Passage set import format and shared types

pub mod align;
pub mod check;
pub mod classify;
pub mod error;
pub mod hints;
pub mod lines;
pub mod normalize;
pub mod order;
pub mod parser;
pub mod render;
pub mod reveal;
pub mod session;
pub mod shuffle;
pub mod types;

pub use align::{align, EditOp, EditScript};
pub use check::{check_answer, CheckReport, Feedback, WordScore};
pub use classify::{classify, count_incorrect_words, ErrorStats};
pub use error::{ParseError, Result, SettingsError};
pub use hints::{ghost_text, select_hints, HintSet};
pub use normalize::{normalize, NormalizedView};
pub use order::{shuffle_lines, verify_order, OrderChallenge, OrderItem, OrderVerdict};
pub use parser::{format_set, parse};
pub use render::{render, RenderedSegment};
pub use reveal::RevealBoard;
pub use session::{PassageProvider, SettingsSource, StudyCursor};
pub use types::{
    AlignmentOptions, EffectiveSettings, HintPercentage, Passage, PassageId, PassageSet,
    SettingsOverrides, StudySettings,
};
