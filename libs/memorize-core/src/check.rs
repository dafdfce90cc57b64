//! Typed recall checks: align a transcription against its passage and
//! report feedback plus error statistics.

use crate::align::{align, EditOp};
use crate::classify::{classify, cleaned_words, ErrorStats};
use crate::normalize::normalize;
use crate::render::{render, RenderedSegment};
use crate::types::AlignmentOptions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of checking a typed transcription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Feedback laid over the reference text.
    pub segments: Vec<RenderedSegment>,
    pub stats: ErrorStats,
    pub words: WordScore,
    /// The options used.
    pub options: AlignmentOptions,
    /// True when no error of any kind was found.
    pub perfect: bool,
}

/// Reference words typed in the right position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordScore {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for WordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} words", self.correct, self.total)
    }
}

/// Check `candidate` against `reference`.
pub fn check_answer(reference: &str, candidate: &str, opts: AlignmentOptions) -> CheckReport {
    let reference_view = normalize(reference, opts);
    let candidate_view = normalize(candidate, opts);
    let script = align(&reference_view.align, &candidate_view.align);

    report(reference, candidate, &script, &reference_view.index_map, opts)
}

fn report(
    reference: &str,
    candidate: &str,
    script: &[EditOp],
    index_map: &[usize],
    opts: AlignmentOptions,
) -> CheckReport {
    let stats = classify(reference, candidate, script, opts);

    CheckReport {
        segments: render(reference, script, index_map),
        words: score_words(reference, candidate, opts),
        perfect: stats.is_clean(),
        options: opts,
        stats,
    }
}

/// Count reference words matched position by position.
pub fn score_words(reference: &str, candidate: &str, opts: AlignmentOptions) -> WordScore {
    let reference = cleaned_words(reference, opts);
    let candidate = cleaned_words(candidate, opts);

    WordScore {
        correct: reference
            .iter()
            .zip(&candidate)
            .filter(|(r, c)| r == c)
            .count(),
        total: reference.len(),
    }
}

/// Plain-text rendering of feedback with incorrect characters bracketed.
pub struct Feedback<'a>(pub &'a [RenderedSegment]);

impl fmt::Display for Feedback<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut in_error = false;
        for segment in self.0 {
            let incorrect = segment.is_incorrect();
            if incorrect != in_error {
                f.write_str(if incorrect { "[" } else { "]" })?;
                in_error = incorrect;
            }
            write!(f, "{segment}")?;
        }
        if in_error {
            f.write_str("]")?;
        }
        Ok(())
    }
}
