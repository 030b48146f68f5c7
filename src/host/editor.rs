use std::fs;
use std::path::Path;

use crate::app::Result;

/// The editing surface inline summaries are written into.
pub trait EditorSurface {
    /// Currently selected text.
    fn selection(&self) -> String;

    /// Zero-based line holding the cursor (the end of the selection).
    fn cursor_line(&self) -> usize;

    /// Insert `text` as new lines directly after `line`.
    fn insert_after_line(&mut self, line: usize, text: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A Markdown note held in memory as lines.
///
/// Line endings and the presence of a final newline are kept as loaded, so
/// saving only changes the lines that were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDocument {
    lines: Vec<String>,
    line_ending: LineEnding,
    final_newline: bool,
    cursor_line: usize,
    selection: Option<String>,
}

impl MarkdownDocument {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
            line_ending: LineEnding::detect(text),
            final_newline: text.ends_with('\n'),
            cursor_line: 0,
            selection: None,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }

    pub fn with_cursor(mut self, line: usize) -> Self {
        self.cursor_line = line.min(self.lines.len().saturating_sub(1));
        self
    }

    /// Explicit selection; without one the cursor line is the selection.
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let eol = self.line_ending.as_str();
        let mut text = self.lines.join(eol);
        if self.final_newline {
            text.push_str(eol);
        }
        text
    }
}

impl EditorSurface for MarkdownDocument {
    fn selection(&self) -> String {
        match &self.selection {
            Some(selection) => selection.clone(),
            None => self.lines.get(self.cursor_line).cloned().unwrap_or_default(),
        }
    }

    fn cursor_line(&self) -> usize {
        self.cursor_line
    }

    fn insert_after_line(&mut self, line: usize, text: &str) {
        let at = (line + 1).min(self.lines.len());
        let new_lines = text.split('\n').map(String::from);
        self.lines.splice(at..at, new_lines);
    }
}
