//! Line reordering challenge.

use crate::lines::study_lines;
use crate::shuffle::shuffle;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A line together with its position in the passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub text: String,
    pub original_index: usize,
}

/// Outcome of checking a presented order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderVerdict {
    /// Whether each presented position holds the right line.
    pub per_item: Vec<bool>,
    pub all_correct: bool,
    /// First presented position holding the wrong line.
    pub first_incorrect: Option<usize>,
}

impl OrderVerdict {
    pub fn correct_count(&self) -> usize {
        self.per_item.iter().filter(|ok| **ok).count()
    }
}

/// Tag each line with its index, in the given order.
pub fn index_lines<S: AsRef<str>>(lines: &[S]) -> Vec<OrderItem> {
    lines
        .iter()
        .enumerate()
        .map(|(original_index, text)| OrderItem {
            text: text.as_ref().to_string(),
            original_index,
        })
        .collect()
}

/// Tag each line with its index and shuffle.
pub fn shuffle_lines<S: AsRef<str>>(lines: &[S]) -> Vec<OrderItem> {
    shuffle_lines_with(lines, &mut rand::thread_rng())
}

/// [`shuffle_lines`] with an explicit random source.
pub fn shuffle_lines_with<S: AsRef<str>, R: Rng + ?Sized>(lines: &[S], rng: &mut R) -> Vec<OrderItem> {
    let mut items = index_lines(lines);
    shuffle(&mut items, rng);
    tracing::debug!(lines = items.len(), "shuffled lines");
    items
}

/// Compare each presented position with the item's original index.
pub fn verify_order(presented: &[OrderItem]) -> OrderVerdict {
    let per_item: Vec<bool> = presented
        .iter()
        .enumerate()
        .map(|(position, item)| item.original_index == position)
        .collect();

    OrderVerdict {
        all_correct: per_item.iter().all(|ok| *ok),
        first_incorrect: per_item.iter().position(|ok| !ok),
        per_item,
    }
}

/// A shuffled passage waiting to be put back in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChallenge {
    pub items: Vec<OrderItem>,
}

impl OrderChallenge {
    /// Shuffle the non-blank lines of a passage.
    pub fn from_passage<R: Rng + ?Sized>(content: &str, rng: &mut R) -> Self {
        Self {
            items: shuffle_lines_with(study_lines(content).as_slice(), rng),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rearrange by presented positions: `arrangement[k]` is the current
    /// position of the item that should now sit at `k`. Returns `false` and
    /// leaves the challenge untouched unless `arrangement` is a permutation.
    pub fn rearrange(&mut self, arrangement: &[usize]) -> bool {
        let mut seen = vec![false; self.items.len()];
        let is_permutation = arrangement.len() == self.items.len()
            && arrangement
                .iter()
                .all(|&i| i < seen.len() && !std::mem::replace(&mut seen[i], true));
        if !is_permutation {
            return false;
        }
        self.items = arrangement.iter().map(|&i| self.items[i].clone()).collect();
        true
    }

    pub fn verify(&self) -> OrderVerdict {
        verify_order(&self.items)
    }
}
