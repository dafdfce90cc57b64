//! Shared fixtures for integration tests.
#![allow(dead_code)]

pub mod fixtures;

use memorize_core::AlignmentOptions;

/// Every combination of the two alignment toggles.
pub fn all_options() -> [AlignmentOptions; 4] {
    [(false, false), (true, false), (false, true), (true, true)].map(
        |(ignore_case, ignore_punctuation)| AlignmentOptions {
            ignore_case,
            ignore_punctuation,
        },
    )
}
