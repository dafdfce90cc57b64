//! Line splitting for the line-based study modes.

/// Lines of `content`, dropping lines that are blank after trimming.
pub fn study_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect()
}
