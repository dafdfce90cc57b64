//! Error taxonomy for typed recall.

use crate::align::EditOp;
use crate::normalize::{fold_case, is_punctuation};
use crate::types::AlignmentOptions;
use serde::{Deserialize, Serialize};

/// Aggregate error counts for one check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorStats {
    pub incorrect_words: usize,
    pub capitalization_errors: usize,
    pub punctuation_errors: usize,
}

impl ErrorStats {
    pub fn total(&self) -> usize {
        self.incorrect_words + self.capitalization_errors + self.punctuation_errors
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// Classify the discrepancies between `reference` and `candidate`.
///
/// Punctuation errors are only counted when punctuation is respected, and
/// capitalization errors only when case is respected.
pub fn classify(
    reference: &str,
    candidate: &str,
    script: &[EditOp],
    opts: AlignmentOptions,
) -> ErrorStats {
    ErrorStats {
        incorrect_words: count_incorrect_words(reference, candidate, opts),
        capitalization_errors: if opts.ignore_case {
            0
        } else {
            count_capitalization_errors(script)
        },
        punctuation_errors: if opts.ignore_punctuation {
            0
        } else {
            count_punctuation_errors(script)
        },
    }
}

/// Deleted reference characters in the punctuation class.
pub fn count_punctuation_errors(script: &[EditOp]) -> usize {
    script
        .iter()
        .filter(|op| matches!(op, EditOp::Delete(c) if is_punctuation(*c)))
        .count()
}

/// Adjacent delete/insert pairs of the same letter in a different case.
///
/// Backtracking places a substitution's insertion before its deletion, so the
/// pair is recognized in either order. Each op belongs to at most one pair.
pub fn count_capitalization_errors(script: &[EditOp]) -> usize {
    let mut count = 0;
    let mut k = 0;
    while k + 1 < script.len() {
        let pair = match (script[k], script[k + 1]) {
            (EditOp::Delete(r), EditOp::Insert(c)) | (EditOp::Insert(c), EditOp::Delete(r)) => {
                Some((r, c))
            }
            _ => None,
        };
        match pair {
            Some((r, c)) if is_case_slip(r, c) => {
                count += 1;
                k += 2;
            }
            _ => k += 1,
        }
    }
    count
}

fn is_case_slip(reference: char, candidate: char) -> bool {
    reference.is_alphabetic() && reference != candidate && fold_case(reference) == fold_case(candidate)
}

/// Position-by-position word comparison, independent of the alignment.
pub fn count_incorrect_words(reference: &str, candidate: &str, opts: AlignmentOptions) -> usize {
    let reference = cleaned_words(reference, opts);
    let candidate = cleaned_words(candidate, opts);

    (0..reference.len().max(candidate.len()))
        .filter(|&i| match (reference.get(i), candidate.get(i)) {
            (Some(r), Some(c)) => r != c,
            _ => true,
        })
        .count()
}

/// Words of `text` after the cleaning used by the word-level metric.
pub(crate) fn cleaned_words(text: &str, opts: AlignmentOptions) -> Vec<String> {
    clean_for_words(text, opts)
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean_for_words(text: &str, opts: AlignmentOptions) -> String {
    let stripped: String = if opts.ignore_punctuation {
        text.chars().filter(|&c| !is_punctuation(c)).collect()
    } else {
        text.to_string()
    };
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if opts.ignore_case {
        collapsed.to_lowercase()
    } else {
        collapsed
    }
}
