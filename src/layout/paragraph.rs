use derive_more::{Deref, Into};

/// The wrapped lines of one input paragraph. Never empty, and never contains
/// a blank line.
#[derive(Debug, Clone, PartialEq, Eq, Deref, Into)]
pub struct Paragraph(Vec<String>);

impl Paragraph {
    /// Builds a paragraph from lines, or returns `None` if `lines` is empty or
    /// contains a blank line
    pub fn new(lines: Vec<String>) -> Option<Paragraph> {
        if lines.is_empty() || lines.iter().any(|line| line.is_empty()) {
            None
        } else {
            Some(Paragraph(lines))
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }
}

/// Splits a flat list of lines into paragraphs. Runs of blank lines separate
/// paragraphs and are dropped; they never produce empty paragraphs.
pub fn segment(lines: &[String]) -> Vec<Paragraph> {
    lines
        .split(|line| line.is_empty())
        .filter(|run| !run.is_empty())
        .map(|run| Paragraph(run.to_vec()))
        .collect()
}

/// Joins paragraphs back into a flat list of lines, with exactly one blank
/// separator line between consecutive paragraphs
pub fn flatten(paragraphs: &[Paragraph]) -> Vec<String> {
    let mut lines = Vec::with_capacity(count_display_lines(paragraphs));
    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(paragraph.iter().cloned());
    }
    lines
}

/// Number of lines [`flatten`] produces for `paragraphs`, separators included
pub fn count_display_lines(paragraphs: &[Paragraph]) -> usize {
    if paragraphs.is_empty() {
        return 0;
    }
    paragraphs.iter().map(|p| p.len()).sum::<usize>() + paragraphs.len() - 1
}

/// Removes leading and trailing blank lines
pub fn trim_blank_lines(lines: &[String]) -> &[String] {
    let start = lines
        .iter()
        .position(|line| !line.is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}
