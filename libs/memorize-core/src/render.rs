//! Per-character correctness feedback laid over the reference text.

use crate::align::EditOp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A piece of rendered feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum RenderedSegment {
    /// Reference text that never took part in alignment.
    Ignored(String),
    /// Reference character the candidate got right.
    Correct(char),
    /// Reference character the candidate missed or got wrong.
    Incorrect(char),
}

impl RenderedSegment {
    pub fn is_incorrect(&self) -> bool {
        matches!(self, Self::Incorrect(_))
    }
}

impl fmt::Display for RenderedSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignored(text) => f.write_str(text),
            Self::Correct(c) | Self::Incorrect(c) => write!(f, "{c}"),
        }
    }
}

/// Walk `script` against the original `reference` and emit segments.
///
/// `index_map` is the map produced when normalizing `reference`. Candidate
/// insertions are skipped; reference text between aligned characters is
/// emitted as [`RenderedSegment::Ignored`].
pub fn render(reference: &str, script: &[EditOp], index_map: &[usize]) -> Vec<RenderedSegment> {
    let mut segments = Vec::new();
    let mut last = 0;
    let mut aligned = index_map.iter().copied();

    for op in script {
        let correct = match op {
            EditOp::Insert(_) => continue,
            EditOp::Match(_) => true,
            EditOp::Delete(_) => false,
        };
        let Some(offset) = aligned.next() else {
            break;
        };
        let Some(original) = reference[offset..].chars().next() else {
            break;
        };

        if offset > last {
            segments.push(RenderedSegment::Ignored(reference[last..offset].to_string()));
        }
        segments.push(if correct {
            RenderedSegment::Correct(original)
        } else {
            RenderedSegment::Incorrect(original)
        });
        last = offset + original.len_utf8();
    }

    if last < reference.len() {
        segments.push(RenderedSegment::Ignored(reference[last..].to_string()));
    }

    segments
}

/// Concatenate the text of all segments.
pub fn segments_text(segments: &[RenderedSegment]) -> String {
    segments.iter().map(ToString::to_string).collect()
}
