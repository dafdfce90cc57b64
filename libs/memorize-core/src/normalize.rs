//! Projection of raw text into the alignment string used for matching.
//!
//! The alignment string drops ignored characters and optionally folds case,
//! while the index map remembers where each kept character came from so
//! feedback can be rendered against the original text.

use crate::types::AlignmentOptions;
use serde::{Deserialize, Serialize};

/// Character shown in place of hidden letters by the hint overlay.
pub const PLACEHOLDER: char = '_';

/// Normalized projection of a source string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedView {
    /// Characters that take part in alignment.
    pub align: String,
    /// `index_map[i]` is the byte offset in the source of the i-th char of `align`.
    pub index_map: Vec<usize>,
}

impl NormalizedView {
    /// Number of characters in the alignment string.
    pub fn len(&self) -> usize {
        self.index_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_map.is_empty()
    }
}

/// Word characters: Unicode letters and digits, underscore, and the
/// Latin-1 supplement block used by accented characters.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || ('\u{C0}'..='\u{FF}').contains(&c)
}

/// Punctuation class: anything that is neither a word character nor
/// whitespace, plus the hint placeholder itself.
pub fn is_punctuation(c: char) -> bool {
    c == PLACEHOLDER || (!is_word_char(c) && !c.is_whitespace())
}

/// Lowercase a single character, keeping it unchanged when its lowercase
/// form expands to more than one character.
pub(crate) fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Build the alignment string and index map for `source`.
pub fn normalize(source: &str, opts: AlignmentOptions) -> NormalizedView {
    let mut view = NormalizedView::default();

    for (offset, c) in source.char_indices() {
        if opts.ignore_punctuation && is_punctuation(c) {
            continue;
        }
        view.align.push(if opts.ignore_case { fold_case(c) } else { c });
        view.index_map.push(offset);
    }

    view
}
