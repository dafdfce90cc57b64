//! Character alignment via longest common subsequence.

use serde::{Deserialize, Serialize};

/// Table size above which alignment is logged as potentially slow.
const LARGE_TABLE_CELLS: usize = 16_000_000;

/// One step of an edit script from the reference to the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "char", rename_all = "snake_case")]
pub enum EditOp {
    /// Character present on both sides.
    Match(char),
    /// Reference character missing from the candidate.
    Delete(char),
    /// Extra candidate character not in the reference.
    Insert(char),
}

impl EditOp {
    /// Character contributed to the reference side, if any.
    pub fn reference_char(self) -> Option<char> {
        match self {
            Self::Match(c) | Self::Delete(c) => Some(c),
            Self::Insert(_) => None,
        }
    }

    /// Character contributed to the candidate side, if any.
    pub fn candidate_char(self) -> Option<char> {
        match self {
            Self::Match(c) | Self::Insert(c) => Some(c),
            Self::Delete(_) => None,
        }
    }
}

/// Ordered edit operations, left to right.
pub type EditScript = Vec<EditOp>;

/// Align the reference alignment string `a` against the candidate `b`.
///
/// Builds the full LCS length table and backtracks from the end. On ties the
/// reference character is reported as deleted rather than the candidate
/// character as inserted.
pub fn align(a: &str, b: &str) -> EditScript {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());
    let width = m + 1;

    let cells = (n + 1) * width;
    if cells > LARGE_TABLE_CELLS {
        tracing::warn!(
            reference_len = n,
            candidate_len = m,
            "aligning large passage, this may be slow"
        );
    }

    let mut table = vec![0u32; cells];
    for i in 1..=n {
        for j in 1..=m {
            table[i * width + j] = if a[i - 1] == b[j - 1] {
                table[(i - 1) * width + j - 1] + 1
            } else {
                table[(i - 1) * width + j].max(table[i * width + j - 1])
            };
        }
    }

    let mut script = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            script.push(EditOp::Match(a[i - 1]));
            i -= 1;
            j -= 1;
        } else if j == 0 || (i > 0 && table[(i - 1) * width + j] >= table[i * width + j - 1]) {
            script.push(EditOp::Delete(a[i - 1]));
            i -= 1;
        } else {
            script.push(EditOp::Insert(b[j - 1]));
            j -= 1;
        }
    }

    script.reverse();
    script
}

/// Reference-side text of a script (matches and deletions).
pub fn reference_side(script: &[EditOp]) -> String {
    script.iter().filter_map(|op| op.reference_char()).collect()
}

/// Candidate-side text of a script (matches and insertions).
pub fn candidate_side(script: &[EditOp]) -> String {
    script.iter().filter_map(|op| op.candidate_char()).collect()
}
