//! Common test utilities and helpers

#![allow(dead_code)]

use friend_circle::{Circle, CriteriaSet, ScoreMap, TextFileStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A data file inside a fresh temporary directory
pub struct TestDataFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestDataFile {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("friends.txt");
        Self { dir, path }
    }

    /// Create the data file with the given lines
    pub fn with_lines(lines: &[&str]) -> Self {
        let file = Self::new();
        let mut text = lines.join("\n");
        text.push('\n');
        std::fs::write(&file.path, text).expect("Failed to write data file");
        file
    }

    pub fn open(&self) -> Circle<TextFileStore> {
        open_circle(&self.path, CriteriaSet::shared_default())
    }

    pub fn contents(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap_or_default()
    }
}

pub fn open_circle(path: &Path, criteria: Arc<CriteriaSet>) -> Circle<TextFileStore> {
    Circle::open(TextFileStore::new(path), criteria).expect("Failed to open circle")
}

/// Every criterion scored `value`
pub fn uniform_scores(criteria: &CriteriaSet, value: i32) -> ScoreMap {
    criteria.iter().map(|c| (c.to_string(), value)).collect()
}

/// A valid default-criteria line with every score set to `value`
pub fn sample_line(name: &str, value: i32, gender: char) -> String {
    let scores = vec![value.to_string(); 10].join(",");
    format!("{},{},{},Unknown", name, scores, gender)
}
