//! Random word hints for typed recall and the underline overlay that shows
//! them.
//!
//! Word indices count whitespace-delimited tokens of a passage in reading
//! order. Line breaks never occupy an index, so they do not inflate the base
//! the hint percentage is taken from.

use crate::normalize::{is_word_char, PLACEHOLDER};
use crate::shuffle::shuffle;
use crate::types::HintPercentage;
use rand::Rng;
use std::collections::BTreeSet;

/// Indices of words given to the user as hints.
pub type HintSet = BTreeSet<usize>;

/// Number of word tokens in `content`.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Pick `floor(words * percentage / 100)` distinct word indices at random.
pub fn select_hints(content: &str, percentage: HintPercentage) -> HintSet {
    select_hints_with(content, percentage, &mut rand::thread_rng())
}

/// [`select_hints`] with an explicit random source.
pub fn select_hints_with<R: Rng + ?Sized>(
    content: &str,
    percentage: HintPercentage,
    rng: &mut R,
) -> HintSet {
    let mut indices: Vec<usize> = (0..word_count(content)).collect();
    let count = indices.len() * percentage.get() as usize / 100;

    shuffle(&mut indices, rng);
    tracing::debug!(words = indices.len(), given = count, "selected hint words");
    indices.into_iter().take(count).collect()
}

/// Underline overlay for `content`: hinted words verbatim, every other word
/// character replaced by the placeholder. Whitespace and punctuation are kept.
pub fn ghost_text(content: &str, hints: &HintSet) -> String {
    let mut out = String::with_capacity(content.len());
    let mut word = 0;
    let mut in_word = false;

    for c in content.chars() {
        if c.is_whitespace() {
            if in_word {
                word += 1;
                in_word = false;
            }
            out.push(c);
            continue;
        }

        in_word = true;
        if hints.contains(&word) || !is_word_char(c) {
            out.push(c);
        } else {
            out.push(PLACEHOLDER);
        }
    }

    out
}
