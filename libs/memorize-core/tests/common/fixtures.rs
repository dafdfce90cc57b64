//! Sample passages and transcriptions.

/// (reference, candidate) pairs covering typical slips.
pub const PAIRS: &[(&str, &str)] = &[
    ("Hello, world!", "Hello world"),
    ("Hello", "hello"),
    ("the quick fox", "the slow fox"),
    ("The Lord is my shepherd;\nI shall not want.", "the lord is my shepard\ni shall not want"),
    ("Two roads diverged in a yellow wood,", "Two roads diverged in the wood"),
    ("Ça fait déjà l'été — «n'est-ce pas?»", "ca fait deja l ete nest ce pas"),
    ("short", "much longer than the reference text"),
    ("", "typed with no reference"),
    ("nothing typed", ""),
    ("", ""),
    ("___ placeholders ___", "placeholders"),
];

/// A multi-line passage used for hint and order tests.
pub const POEM: &str = "Whose woods these are I think I know.\n\
His house is in the village though;\n\
\n\
He will not see me stopping here\n\
To watch his woods fill up with snow.";

/// Passage set in the plain-text import format.
pub fn sample_set_text(num_passages: usize) -> String {
    (0..num_passages)
        .map(|i| format!("## Passage title {}\nLine one of {}.\nLine two of {}.\n", i + 1, i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
