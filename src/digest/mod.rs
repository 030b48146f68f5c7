//! The dated Markdown digest written by the summary pipeline.
//!
//! Layout on disk:
//!
//! ```text
//! <root>/News Summaries/2024-03-07 News Summary.md
//!
//! # News Summary for 2024-03-07
//!
//! ## Tech
//!
//! <body>
//!
//! ---
//! ```
//!
//! Every section is appended straight to the file, so a run that dies
//! half-way leaves the finished categories in place.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::app::Result;

pub const SUMMARY_DIR: &str = "News Summaries";

pub struct DigestWriter {
    root: PathBuf,
}

/// An artifact created by [`DigestWriter::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestHandle {
    path: PathBuf,
}

impl DigestHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DigestWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(SUMMARY_DIR)
            .join(format!("{} News Summary.md", date.format("%Y-%m-%d")))
    }

    /// Create (or truncate) the artifact for `date`, leaving only the title.
    pub fn open(&self, date: NaiveDate) -> Result<DigestHandle> {
        let path = self.path_for(date);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, title(date))?;
        tracing::info!("Created digest at {}", path.display());

        Ok(DigestHandle { path })
    }

    pub fn append_section(&self, handle: &DigestHandle, category: &str, body: &str) -> Result<()> {
        let mut file = OpenOptions::new().append(true).open(&handle.path)?;
        file.write_all(section(category, body).as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

fn title(date: NaiveDate) -> String {
    format!("# News Summary for {}\n\n", date.format("%Y-%m-%d"))
}

fn section(category: &str, body: &str) -> String {
    format!("## {}\n\n{}\n\n---\n\n", category, body.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn test_path_is_zero_padded() {
        let writer = DigestWriter::new("/notes");
        assert_eq!(
            writer.path_for(date()),
            PathBuf::from("/notes/News Summaries/2024-03-07 News Summary.md")
        );
    }

    #[test]
    fn test_open_creates_directory_and_title() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DigestWriter::new(dir.path());

        let handle = writer.open(date()).unwrap();

        assert!(dir.path().join(SUMMARY_DIR).is_dir());
        let content = fs::read_to_string(handle.path()).unwrap();
        assert_eq!(content, "# News Summary for 2024-03-07\n\n");
    }

    #[test]
    fn test_sections_appended_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DigestWriter::new(dir.path());
        let handle = writer.open(date()).unwrap();

        writer.append_section(&handle, "A", "alpha").unwrap();
        writer.append_section(&handle, "B", "beta\n").unwrap();

        let content = fs::read_to_string(handle.path()).unwrap();
        assert_eq!(
            content,
            "# News Summary for 2024-03-07\n\n## A\n\nalpha\n\n---\n\n## B\n\nbeta\n\n---\n\n"
        );
    }

    #[test]
    fn test_completed_section_survives_interrupted_run() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DigestWriter::new(dir.path());
        let handle = writer.open(date()).unwrap();

        let run = || -> Result<()> {
            writer.append_section(&handle, "A", "alpha")?;
            Err::<(), _>(crate::app::DigestError::Generation)?;
            writer.append_section(&handle, "B", "beta")
        };
        assert!(run().is_err());

        let content = fs::read_to_string(handle.path()).unwrap();
        assert!(content.contains("## A\n\nalpha"));
        assert!(!content.contains("## B"));
    }

    #[test]
    fn test_reopen_truncates_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DigestWriter::new(dir.path());

        let handle = writer.open(date()).unwrap();
        writer.append_section(&handle, "Old", "stale").unwrap();
        let handle = writer.open(date()).unwrap();

        let content = fs::read_to_string(handle.path()).unwrap();
        assert_eq!(content, "# News Summary for 2024-03-07\n\n");
    }
}
