//! Scoring criteria
//!
//! A collection owns one ordered `CriteriaSet` and shares it with every friend
//! through an `Arc`. The order is the order scores are written to the data file.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Number of criteria a criteria file must list
pub const CRITERIA_COUNT: usize = 10;

/// Built-in criteria, used when no valid criteria file is available
pub const DEFAULT_CRITERIA: [&str; CRITERIA_COUNT] = [
    "empathy_warmth",
    "trust",
    "reciprocity",
    "shared_interests",
    "availability_presence",
    "effective_communication",
    "support_in_hardship",
    "conflict_resolution",
    "fun_recreation",
    "personal_growth",
];

/// Ordered list of criterion identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaSet {
    names: Vec<String>,
}

impl CriteriaSet {
    /// Build a set from identifiers, rejecting empty or duplicate names
    pub fn new<I, S>(names: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for name in names {
            let name = name.into().trim().to_string();
            if name.is_empty() {
                return Err(crate::CircleError::Validation(
                    "criterion names cannot be empty".to_string(),
                ));
            }
            if collected.contains(&name) {
                return Err(crate::CircleError::Validation(format!(
                    "duplicate criterion '{}'",
                    name
                )));
            }
            collected.push(name);
        }
        if collected.is_empty() {
            return Err(crate::CircleError::Validation(
                "at least one criterion is required".to_string(),
            ));
        }
        Ok(Self { names: collected })
    }

    /// The built-in criteria wrapped for sharing
    pub fn shared_default() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Position of a criterion identifier
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Human-readable label: underscores become spaces, words are title-cased
    pub fn label(&self, index: usize) -> Option<String> {
        self.name(index).map(title_case)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for CriteriaSet {
    fn default() -> Self {
        Self {
            names: DEFAULT_CRITERIA.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn title_case(name: &str) -> String {
    name.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Where the active criteria came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaSource {
    /// Read from a criteria file
    File(PathBuf),

    /// Built-in list substituted for a missing or invalid file
    Default { reason: String },
}

impl CriteriaSource {
    pub fn is_default(&self) -> bool {
        matches!(self, CriteriaSource::Default { .. })
    }
}

/// Criteria together with their provenance
#[derive(Debug, Clone)]
pub struct LoadedCriteria {
    pub criteria: Arc<CriteriaSet>,
    pub source: CriteriaSource,
}

/// Load criteria from a newline-delimited file
///
/// The file is honored only when it lists exactly `CRITERIA_COUNT` non-empty
/// lines with no duplicates. Anything else yields the built-in list and a
/// `CriteriaSource::Default` explaining why; this never fails.
pub fn load_criteria(path: &Path) -> LoadedCriteria {
    let fallback = |reason: String| {
        debug!("Using default criteria: {}", reason);
        LoadedCriteria {
            criteria: CriteriaSet::shared_default(),
            source: CriteriaSource::Default { reason },
        }
    };

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return fallback(format!("{} not found", path.display()));
        }
        Err(e) => {
            warn!("Failed to read criteria file {}: {}", path.display(), e);
            return fallback(format!("{} could not be read: {}", path.display(), e));
        }
    };

    let lines: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() != CRITERIA_COUNT {
        warn!(
            "Criteria file {} lists {} criteria, expected {}",
            path.display(),
            lines.len(),
            CRITERIA_COUNT
        );
        return fallback(format!(
            "{} lists {} criteria, expected {}",
            path.display(),
            lines.len(),
            CRITERIA_COUNT
        ));
    }

    match CriteriaSet::new(lines) {
        Ok(set) => LoadedCriteria {
            criteria: Arc::new(set),
            source: CriteriaSource::File(path.to_path_buf()),
        },
        Err(e) => {
            warn!("Rejected criteria file {}: {}", path.display(), e);
            fallback(format!("{}: {}", path.display(), e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_set() {
        let set = CriteriaSet::default();
        assert_eq!(set.len(), CRITERIA_COUNT);
        assert_eq!(set.position("trust"), Some(1));
        assert_eq!(set.label(3).as_deref(), Some("Shared Interests"));
        assert_eq!(set.label(10), None);
    }

    #[test]
    fn test_new_rejects_duplicates_and_blanks() {
        assert!(CriteriaSet::new(["a", "b", "a"]).is_err());
        assert!(CriteriaSet::new(["a", "  "]).is_err());
        assert!(CriteriaSet::new(Vec::<String>::new()).is_err());
        assert_eq!(CriteriaSet::new([" a ", "b"]).unwrap().names(), ["a", "b"]);
    }

    #[test]
    fn test_title_case_labels() {
        assert_eq!(title_case("fun_recreation"), "Fun Recreation");
        assert_eq!(title_case("Honesty"), "Honesty");
        assert_eq!(title_case("time spent"), "Time Spent");
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let loaded = load_criteria(&dir.path().join("criteria.txt"));
        assert!(loaded.source.is_default());
        assert_eq!(*loaded.criteria, CriteriaSet::default());
    }

    #[test]
    fn test_load_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("criteria.txt");
        let names: Vec<String> = (1..=10).map(|i| format!("c{}", i)).collect();
        std::fs::write(&path, format!("{}\n\n", names.join("\n"))).unwrap();

        let loaded = load_criteria(&path);
        assert_eq!(loaded.source, CriteriaSource::File(path.clone()));
        assert_eq!(loaded.criteria.names(), names.as_slice());
    }

    #[test]
    fn test_load_wrong_count_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("criteria.txt");
        std::fs::write(&path, "one\ntwo\nthree\n").unwrap();

        let loaded = load_criteria(&path);
        match loaded.source {
            CriteriaSource::Default { reason } => assert!(reason.contains("lists 3 criteria")),
            other => panic!("expected default criteria, got {:?}", other),
        }
    }

    #[test]
    fn test_load_duplicates_fall_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("criteria.txt");
        let mut names: Vec<String> = (1..=9).map(|i| format!("c{}", i)).collect();
        names.push("c1".to_string());
        std::fs::write(&path, names.join("\n")).unwrap();

        assert!(load_criteria(&path).source.is_default());
    }
}
