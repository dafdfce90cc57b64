//! Progressive line-by-line reveal.

use crate::lines::study_lines;
use serde::{Deserialize, Serialize};

/// Visibility of each line of a passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealBoard {
    lines: Vec<String>,
    visible: Vec<bool>,
}

impl RevealBoard {
    /// Board over the non-blank lines of `content`, all hidden.
    pub fn new(content: &str) -> Self {
        let lines: Vec<String> = study_lines(content).into_iter().map(str::to_string).collect();
        let visible = vec![false; lines.len()];
        Self { lines, visible }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Reveal the first hidden line and return its index.
    pub fn reveal_next(&mut self) -> Option<usize> {
        let next = self.visible.iter().position(|v| !v)?;
        self.visible[next] = true;
        Some(next)
    }

    /// Flip one line. Returns the new visibility, or `None` if out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.visible.get_mut(index)?;
        *slot = !*slot;
        Some(*slot)
    }

    pub fn reveal_all(&mut self) {
        self.visible.fill(true);
    }

    pub fn hide_all(&mut self) {
        self.visible.fill(false);
    }

    pub fn is_complete(&self) -> bool {
        self.visible.iter().all(|v| *v)
    }

    /// Lines with their visibility, in order.
    pub fn lines(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.lines
            .iter()
            .map(String::as_str)
            .zip(self.visible.iter().copied())
    }
}
