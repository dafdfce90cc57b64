//! Plain-text import format for passage sets.
//!
//! # Format
//! ```markdown
//! # Psalms
//!
//! ## Psalm 23
//! The Lord is my shepherd;
//! I shall not want.
//!
//! ## Psalm 117
//! O praise the Lord, all ye nations.
//! ```
//!
//! Titles and contents are trimmed. A missing set title becomes
//! "Untitled Set", a missing passage title becomes "Passage N", and passages
//! without content are dropped (see [`PassageSet::sanitized`]).
//!
//! A content line starting with `\` has that backslash removed, so
//! `\## not a heading` is the text `## not a heading`. [`format_set`] adds
//! the escape wherever a line would otherwise read as a heading.

use crate::error::{ParseError, Result};
use crate::types::{Passage, PassageSet};

const ESCAPE: char = '\\';

/// Parse a passage set.
pub fn parse(content: &str) -> Result<PassageSet> {
    let mut parser = Parser::new();

    for (idx, line) in content.lines().enumerate() {
        parser.process_line(line, idx + 1)?;
    }

    parser.finish()
}

struct PassageBuilder {
    title: String,
    lines: Vec<String>,
}

impl PassageBuilder {
    fn build(self) -> Passage {
        Passage::new(self.title, self.lines.join("\n"))
    }
}

struct Parser {
    title: Option<String>,
    current: Option<PassageBuilder>,
    passages: Vec<Passage>,
}

impl Parser {
    fn new() -> Self {
        Self {
            title: None,
            current: None,
            passages: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<()> {
        match LineType::of(line) {
            LineType::SetTitle(title) => self.handle_set_title(title, line_num)?,
            LineType::PassageTitle(title) => self.handle_passage_title(title),
            LineType::Text(text) => self.handle_text(text, line_num)?,
            LineType::Empty => {
                if let Some(ref mut passage) = self.current {
                    passage.lines.push(String::new());
                }
            }
        }
        Ok(())
    }

    fn handle_set_title(&mut self, title: &str, line_num: usize) -> Result<()> {
        if self.title.is_some() {
            return Err(ParseError::DuplicateSetTitle { line: line_num });
        }
        self.title = Some(title.to_string());
        Ok(())
    }

    fn handle_passage_title(&mut self, title: &str) {
        self.flush();
        self.current = Some(PassageBuilder {
            title: title.to_string(),
            lines: Vec::new(),
        });
    }

    fn handle_text(&mut self, text: &str, line_num: usize) -> Result<()> {
        match self.current {
            Some(ref mut passage) => {
                passage.lines.push(text.to_string());
                Ok(())
            }
            None => Err(ParseError::ContentOutsidePassage { line: line_num }),
        }
    }

    fn flush(&mut self) {
        if let Some(passage) = self.current.take() {
            self.passages.push(passage.build());
        }
    }

    fn finish(mut self) -> Result<PassageSet> {
        self.flush();

        PassageSet {
            title: self.title.unwrap_or_default(),
            passages: self.passages,
        }
        .sanitized()
    }
}

enum LineType<'a> {
    SetTitle(&'a str),
    PassageTitle(&'a str),
    Text(&'a str),
    Empty,
}

impl<'a> LineType<'a> {
    fn of(line: &'a str) -> Self {
        let trimmed = line.trim();

        if let Some(rest) = line.trim_start().strip_prefix(ESCAPE) {
            LineType::Text(rest)
        } else if trimmed == "##" {
            LineType::PassageTitle("")
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            LineType::PassageTitle(rest.trim())
        } else if trimmed == "#" {
            LineType::SetTitle("")
        } else if let Some(rest) = trimmed.strip_prefix("# ") {
            LineType::SetTitle(rest.trim())
        } else if trimmed.is_empty() {
            LineType::Empty
        } else {
            LineType::Text(line)
        }
    }
}

/// Write a set back out in the import format, escaping content lines that
/// would otherwise parse as headings or lose a leading backslash.
pub fn format_set(set: &PassageSet) -> String {
    let mut out = format!("# {}\n", set.title);
    for passage in &set.passages {
        out.push_str(&format!("\n## {}\n", passage.title));
        for line in passage.content.split('\n') {
            if needs_escape(line) {
                out.push(ESCAPE);
            }
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn needs_escape(line: &str) -> bool {
    matches!(
        LineType::of(line),
        LineType::SetTitle(_) | LineType::PassageTitle(_)
    ) || line.trim_start().starts_with(ESCAPE)
}
