//! Hint selection, ordering and passage set handling.

mod common;

use common::fixtures::{sample_set_text, POEM};
use memorize_core::hints::{select_hints_with, word_count};
use memorize_core::order::{index_lines, shuffle_lines_with};
use memorize_core::session::{PassageProvider, StudyCursor};
use memorize_core::{
    format_set, parse, select_hints, shuffle_lines, verify_order, HintPercentage, HintSet,
    OrderChallenge,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn hint_size_matches_percentage_for_every_value() {
    let words = word_count(POEM);
    assert_eq!(words, 30);
    let mut rng = StdRng::seed_from_u64(2024);
    for p in 0..=100 {
        let hints = select_hints_with(POEM, HintPercentage::new(p).unwrap(), &mut rng);
        assert_eq!(hints.len(), words * p as usize / 100, "percentage {p}");
    }
}

#[test]
fn hint_extremes() {
    let mut rng = StdRng::seed_from_u64(8);
    assert!(select_hints_with(POEM, HintPercentage::NONE, &mut rng).is_empty());
    assert_eq!(
        select_hints_with(POEM, HintPercentage::ALL, &mut rng),
        (0..word_count(POEM)).collect::<HintSet>()
    );
}

#[test]
fn default_random_source_hints() {
    let hints = select_hints(POEM, HintPercentage::new(50).unwrap());
    assert_eq!(hints.len(), 15);
    assert!(hints.iter().all(|&i| i < word_count(POEM)));
}

#[test]
fn default_random_source_shuffles_lines() {
    let mut items = shuffle_lines(&["A", "B", "C", "D"]);
    assert_eq!(items.len(), 4);
    items.sort_by_key(|item| item.original_index);
    assert_eq!(items, index_lines(&["A", "B", "C", "D"]));
}

#[test]
fn unshuffled_order_verifies() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut items = shuffle_lines_with(&["A", "B", "C"], &mut rng);
    items.sort_by_key(|item| item.original_index);
    assert!(verify_order(&items).all_correct);
}

#[test]
fn swapped_order_has_one_correct_item() {
    let items = index_lines(&["A", "B", "C"]);
    let presented = vec![items[1].clone(), items[0].clone(), items[2].clone()];
    let verdict = verify_order(&presented);
    assert!(!verdict.all_correct);
    assert_eq!(verdict.correct_count(), 1);
    assert!(verdict.per_item[2]);
}

#[test]
fn order_challenge_uses_non_blank_poem_lines() {
    let mut rng = StdRng::seed_from_u64(12);
    let challenge = OrderChallenge::from_passage(POEM, &mut rng);
    assert_eq!(challenge.len(), 4);
    let mut indices: Vec<_> = challenge.items.iter().map(|i| i.original_index).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn parsed_set_drives_navigation() {
    let set = parse(&sample_set_text(3)).unwrap();
    assert_eq!(set.title, "Untitled Set");

    let mut cursor = StudyCursor::new(set);
    assert_eq!(cursor.passage_count(), 3);
    cursor.step(-1);
    let passage = cursor.current_passage().unwrap();
    assert_eq!(passage.title, "Passage title 3");
    assert_eq!(passage.content, "Line one of 3.\nLine two of 3.");
}

#[test]
fn heading_like_lines_survive_format_and_parse() {
    let set = parse("# Songs\n## Refrain\nChorus:\n\\# sing it twice\n\\## then stop").unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.passages[0].content, "Chorus:\n# sing it twice\n## then stop");

    let reparsed = parse(&format_set(&set)).unwrap();
    assert_eq!(reparsed.title, "Songs");
    assert_eq!(reparsed.len(), 1);
    assert_eq!(reparsed.passages[0].content, set.passages[0].content);
}
