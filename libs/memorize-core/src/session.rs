//! Study state owned by the caller, and the interfaces the study modes read
//! it through.

use crate::check::{check_answer, CheckReport};
use crate::hints::{ghost_text, select_hints_with, HintSet};
use crate::order::OrderChallenge;
use crate::reveal::RevealBoard;
use crate::types::{AlignmentOptions, EffectiveSettings, HintPercentage, Passage, PassageSet};
use rand::Rng;

/// Source of the passage currently being studied.
pub trait PassageProvider {
    fn current_passage(&self) -> Option<&Passage>;

    fn passage_count(&self) -> usize;
}

/// Source of the settings in effect for the next study action.
pub trait SettingsSource {
    fn alignment_options(&self) -> AlignmentOptions;

    fn hint_percentage(&self) -> HintPercentage;

    fn show_underlines(&self) -> bool;
}

impl SettingsSource for EffectiveSettings {
    fn alignment_options(&self) -> AlignmentOptions {
        EffectiveSettings::alignment_options(self)
    }

    fn hint_percentage(&self) -> HintPercentage {
        self.hint_percentage
    }

    fn show_underlines(&self) -> bool {
        self.show_underlines
    }
}

/// A passage set plus the index of the passage being studied.
#[derive(Debug, Clone)]
pub struct StudyCursor {
    set: PassageSet,
    index: usize,
}

impl StudyCursor {
    pub fn new(set: PassageSet) -> Self {
        Self { set, index: 0 }
    }

    pub fn set(&self) -> &PassageSet {
        &self.set
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Jump to `index`. Returns `false` if it is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.set.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Move by `delta` passages, wrapping around both ends.
    pub fn step(&mut self, delta: isize) -> usize {
        let len = self.set.len();
        if len > 0 {
            let len = len as isize;
            self.index = (self.index as isize + delta).rem_euclid(len) as usize;
        }
        self.index
    }
}

impl PassageProvider for StudyCursor {
    fn current_passage(&self) -> Option<&Passage> {
        self.set.get(self.index)
    }

    fn passage_count(&self) -> usize {
        self.set.len()
    }
}

/// Check a transcription of the current passage.
pub fn check_current<P, S>(passages: &P, settings: &S, typed: &str) -> Option<CheckReport>
where
    P: PassageProvider + ?Sized,
    S: SettingsSource + ?Sized,
{
    let passage = passages.current_passage()?;
    Some(check_answer(&passage.content, typed, settings.alignment_options()))
}

/// Fresh hints and the overlay for the current passage. The overlay is empty
/// when underlines are switched off.
pub fn hint_current<P, S, R>(passages: &P, settings: &S, rng: &mut R) -> Option<(HintSet, String)>
where
    P: PassageProvider + ?Sized,
    S: SettingsSource + ?Sized,
    R: Rng + ?Sized,
{
    let passage = passages.current_passage()?;
    let hints = select_hints_with(&passage.content, settings.hint_percentage(), rng);
    let overlay = if settings.show_underlines() {
        ghost_text(&passage.content, &hints)
    } else {
        String::new()
    };
    Some((hints, overlay))
}

/// Reveal board for the current passage.
pub fn reveal_current<P: PassageProvider + ?Sized>(passages: &P) -> Option<RevealBoard> {
    passages
        .current_passage()
        .map(|passage| RevealBoard::new(&passage.content))
}

/// Shuffled line challenge for the current passage.
pub fn order_current<P, R>(passages: &P, rng: &mut R) -> Option<OrderChallenge>
where
    P: PassageProvider + ?Sized,
    R: Rng + ?Sized,
{
    passages
        .current_passage()
        .map(|passage| OrderChallenge::from_passage(&passage.content, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StudySettings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cursor() -> StudyCursor {
        StudyCursor::new(PassageSet {
            title: "Set".into(),
            passages: vec![
                Passage::new("A", "alpha line\nsecond line"),
                Passage::new("B", "beta"),
                Passage::new("C", "gamma"),
            ],
        })
    }

    #[test]
    fn step_wraps_both_ways() {
        let mut cursor = cursor();
        assert_eq!(cursor.step(-1), 2);
        assert_eq!(cursor.step(1), 0);
        assert_eq!(cursor.step(4), 1);
        assert_eq!(cursor.current_passage().map(|p| p.title.as_str()), Some("B"));
    }

    #[test]
    fn step_on_empty_set_is_noop() {
        let mut cursor = StudyCursor::new(PassageSet {
            title: String::new(),
            passages: Vec::new(),
        });
        assert_eq!(cursor.step(3), 0);
        assert!(cursor.current_passage().is_none());
    }

    #[test]
    fn select_checks_bounds() {
        let mut cursor = cursor();
        assert!(cursor.select(2));
        assert!(!cursor.select(3));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn check_uses_current_passage() {
        let mut cursor = cursor();
        cursor.step(1);
        let settings = EffectiveSettings::merge(&StudySettings::default(), None);
        let report = check_current(&cursor, &settings, "beta").unwrap();
        assert!(report.perfect);
    }

    #[test]
    fn hints_respect_underline_setting() {
        let cursor = cursor();
        let mut rng = StdRng::seed_from_u64(1);
        let mut settings = EffectiveSettings::merge(&StudySettings::default(), None);

        let (hints, overlay) = hint_current(&cursor, &settings, &mut rng).unwrap();
        assert!(hints.is_empty());
        assert_eq!(overlay, "_____ ____\n______ ____");

        settings.show_underlines = false;
        let (_, overlay) = hint_current(&cursor, &settings, &mut rng).unwrap();
        assert!(overlay.is_empty());
    }

    #[test]
    fn line_modes_use_current_passage() {
        let cursor = cursor();
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(reveal_current(&cursor).map(|b| b.len()), Some(2));
        assert_eq!(order_current(&cursor, &mut rng).map(|c| c.len()), Some(2));
    }
}
