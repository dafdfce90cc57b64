//! Subcommand handlers. Each one loads its passage, calls into the core and
//! writes a plain-text (or JSON) result.

use crate::cli::{CheckArgs, OrderArgs, PassageArgs, RevealArgs, SetArgs};
use anyhow::{bail, Context};
use memorize_core::session::{check_current, hint_current, order_current, reveal_current};
use memorize_core::{EffectiveSettings, Feedback, PassageProvider, PassageSet, StudyCursor};
use rand::rngs::StdRng;
use std::io::{Read, Write};
use std::path::Path;

/// Settings and randomness shared by every command.
pub struct Runtime {
    pub settings: EffectiveSettings,
    pub rng: StdRng,
}

/// Load a passage set from JSON or the plain-text format.
pub fn load_set(path: &Path) -> anyhow::Result<PassageSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let set = if path.extension().is_some_and(|ext| ext == "json") {
        let set: PassageSet = serde_json::from_str(&content)
            .with_context(|| format!("invalid passage set JSON in {}", path.display()))?;
        set.sanitized()
            .with_context(|| format!("failed to load {}", path.display()))?
    } else {
        memorize_core::parse(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?
    };

    tracing::info!(title = %set.title, passages = set.len(), "loaded passage set");
    Ok(set)
}

fn open_passage(args: &PassageArgs) -> anyhow::Result<StudyCursor> {
    let mut cursor = StudyCursor::new(load_set(&args.set.set)?);
    let count = cursor.passage_count();
    if args.passage == 0 || !cursor.select(args.passage - 1) {
        bail!("passage {} does not exist (set has {count})", args.passage);
    }
    Ok(cursor)
}

fn read_answer(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut answer = String::new();
        std::io::stdin()
            .read_to_string(&mut answer)
            .context("failed to read answer from stdin")?;
        Ok(answer)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

pub fn list<W: Write>(args: &SetArgs, out: &mut W) -> anyhow::Result<()> {
    let set = load_set(&args.set)?;
    writeln!(out, "{}", set.title)?;
    for (i, passage) in set.passages.iter().enumerate() {
        let lines = memorize_core::lines::study_lines(&passage.content).len();
        writeln!(out, "{:>3}. {} ({lines} lines)", i + 1, passage.title)?;
    }
    Ok(())
}

pub fn check<W: Write>(args: &CheckArgs, runtime: &Runtime, out: &mut W) -> anyhow::Result<()> {
    let cursor = open_passage(&args.passage)?;
    let typed = read_answer(&args.answer)?;
    let Some(report) = check_current(&cursor, &runtime.settings, &typed) else {
        bail!("no passage selected");
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", Feedback(&report.segments))?;
    writeln!(out)?;
    if report.perfect {
        writeln!(out, "Perfect! {}.", report.words)?;
    } else {
        writeln!(out, "Keep trying! {} correct.", report.words)?;
    }
    writeln!(out, "Incorrect words: {}", report.stats.incorrect_words)?;
    let opts = runtime.settings.alignment_options();
    if !opts.ignore_case {
        writeln!(out, "Capitalization errors: {}", report.stats.capitalization_errors)?;
    }
    if !opts.ignore_punctuation {
        writeln!(out, "Punctuation errors: {}", report.stats.punctuation_errors)?;
    }
    Ok(())
}

pub fn hints<W: Write>(args: &PassageArgs, runtime: &mut Runtime, out: &mut W) -> anyhow::Result<()> {
    let cursor = open_passage(args)?;
    let Some((hints, overlay)) = hint_current(&cursor, &runtime.settings, &mut runtime.rng) else {
        bail!("no passage selected");
    };

    tracing::debug!(given = hints.len(), "hint overlay ready");
    if overlay.is_empty() {
        writeln!(out, "(underlines off; {} words given)", hints.len())?;
    } else {
        writeln!(out, "{overlay}")?;
    }
    Ok(())
}

pub fn order<W: Write>(args: &OrderArgs, runtime: &mut Runtime, out: &mut W) -> anyhow::Result<()> {
    let cursor = open_passage(&args.passage)?;
    let Some(mut challenge) = order_current(&cursor, &mut runtime.rng) else {
        bail!("no passage selected");
    };

    let Some(arrangement) = &args.answer else {
        for (position, item) in challenge.items.iter().enumerate() {
            writeln!(out, "{position:>3}  {}", item.text)?;
        }
        return Ok(());
    };

    if !challenge.rearrange(arrangement) {
        bail!(
            "answer must list each of the positions 0..{} exactly once",
            challenge.len()
        );
    }
    let verdict = challenge.verify();
    for (item, correct) in challenge.items.iter().zip(&verdict.per_item) {
        let mark = if *correct { "ok" } else { "xx" };
        writeln!(out, "{mark}  {}", item.text)?;
    }
    if verdict.all_correct {
        writeln!(out, "Perfect order!")?;
    } else {
        writeln!(
            out,
            "{}/{} lines in place. Not quite right yet.",
            verdict.correct_count(),
            challenge.len()
        )?;
    }
    Ok(())
}

pub fn reveal<W: Write>(args: &RevealArgs, out: &mut W) -> anyhow::Result<()> {
    let cursor = open_passage(&args.passage)?;
    let Some(mut board) = reveal_current(&cursor) else {
        bail!("no passage selected");
    };

    for _ in 0..args.lines {
        if board.reveal_next().is_none() {
            break;
        }
    }
    for (line, visible) in board.lines() {
        if visible {
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "{}", "·".repeat(line.chars().count()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use memorize_core::StudySettings;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use std::path::PathBuf;

    const SET: &str = "# Verses\n## First\nOne line.\nTwo line.\n## Second\nRed fish\n";

    fn write_set(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("verses.md");
        std::fs::write(&path, SET).unwrap();
        path
    }

    fn runtime() -> Runtime {
        Runtime {
            settings: EffectiveSettings::merge(&StudySettings::default(), None),
            rng: StdRng::seed_from_u64(1),
        }
    }

    fn passage(path: PathBuf, passage: usize) -> PassageArgs {
        PassageArgs {
            set: SetArgs { set: path },
            passage,
        }
    }

    #[test]
    fn lists_passages() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        list(&SetArgs { set: write_set(&dir) }, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Verses\n  1. First (2 lines)\n  2. Second (1 lines)\n"
        );
    }

    #[test]
    fn checks_answer_file() {
        let dir = tempfile::tempdir().unwrap();
        let answer = dir.path().join("answer.txt");
        std::fs::write(&answer, "red fish").unwrap();
        let args = CheckArgs {
            passage: passage(write_set(&dir), 2),
            answer,
            json: false,
        };
        let mut out = Vec::new();
        check(&args, &runtime(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[R]ed fish\n"));
        assert!(text.contains("Capitalization errors: 1"));
        assert!(text.contains("Keep trying! 1/2 words correct."));
    }

    #[test]
    fn rejects_missing_passage() {
        let dir = tempfile::tempdir().unwrap();
        let result = reveal(
            &RevealArgs {
                passage: passage(write_set(&dir), 3),
                lines: 1,
            },
            &mut Vec::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn reveals_first_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        reveal(
            &RevealArgs {
                passage: passage(write_set(&dir), 1),
                lines: 1,
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "One line.\n·········\n");
    }

    #[test]
    fn masks_words_without_hints() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        hints(&passage(write_set(&dir), 2), &mut runtime(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "___ ____\n");
    }

    #[test]
    fn order_rejects_bad_arrangement() {
        let dir = tempfile::tempdir().unwrap();
        let args = OrderArgs {
            passage: passage(write_set(&dir), 1),
            answer: Some(vec![0, 0]),
        };
        assert!(order(&args, &mut runtime(), &mut Vec::new()).is_err());
    }

    #[test]
    fn loads_json_sets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.json");
        std::fs::write(&path, r#"{"title":"J","passages":[{"title":"P","content":"x"}]}"#).unwrap();
        assert_eq!(load_set(&path).unwrap().title, "J");

        std::fs::write(&path, r#"{"title":"J","passages":[]}"#).unwrap();
        assert!(load_set(&path).is_err());
    }

    #[test]
    fn json_sets_follow_save_rules() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.json");
        std::fs::write(&path, r#"{"title":"","passages":[{"title":"","content":"   "}]}"#).unwrap();
        assert!(load_set(&path).is_err());

        std::fs::write(
            &path,
            r#"{"title":" ","passages":[{"title":"","content":" "},{"title":"","content":" red fish
"}]}"#,
        )
        .unwrap();
        let set = load_set(&path).unwrap();
        assert_eq!(set.title, "Untitled Set");
        assert_eq!(set.len(), 1);
        assert_eq!(set.passages[0].title, "Passage 2");
        assert_eq!(set.passages[0].content, "red fish");
    }
}
