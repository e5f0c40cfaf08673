//! Plain-text file backend
//!
//! One friend per line. Every save rewrites the whole file through a
//! temporary sibling that is renamed over the original.

use super::{render_lines, Encoding, FriendStore, LoadOutcome};
use crate::criteria::CriteriaSet;
use crate::error::Result;
use crate::friend::Friend;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::debug;

/// Friend collection stored in a newline-delimited text file
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
    encoding: Encoding,
}

impl TextFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_encoding(path, Encoding::default())
    }

    pub fn with_encoding(path: impl Into<PathBuf>, encoding: Encoding) -> Self {
        Self {
            path: path.into(),
            encoding,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl FriendStore for TextFileStore {
    fn load(&self, criteria: &Arc<CriteriaSet>) -> Result<LoadOutcome> {
        if !self.path.exists() {
            debug!("Data file {} does not exist, starting empty", self.path.display());
            return Ok(LoadOutcome::default());
        }

        let bytes = std::fs::read(&self.path)?;
        let mut outcome = LoadOutcome::default();

        // Lines are decoded one at a time; a bad byte skips only its own line
        for (i, raw) in split_lines(&bytes).enumerate() {
            match self.encoding.decode(raw) {
                Ok(line) => outcome.push_line(i + 1, &line, criteria),
                Err(e) => {
                    let content = String::from_utf8_lossy(raw).into_owned();
                    outcome.skip(i + 1, content, e.to_string());
                }
            }
        }

        debug!(
            "Loaded {} friends from {} ({} skipped)",
            outcome.friends.len(),
            self.path.display(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }

    fn save(&self, friends: &[Friend]) -> Result<()> {
        let bytes = self.encoding.encode(&render_lines(friends))?;

        let dir = self.parent_dir();
        std::fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&bytes)?;
        if let Ok(metadata) = std::fs::metadata(&self.path) {
            // Temp files start out owner-only; keep the data file's mode
            tmp.as_file().set_permissions(metadata.permissions())?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!("Saved {} friends to {}", friends.len(), self.path.display());
        Ok(())
    }
}

/// Split raw file bytes into lines the way `str::lines` does
///
/// Lines end at `\n`, an optional `\r` before it is dropped, and a final
/// terminator does not produce an extra empty line.
fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let mut lines = body.split(|&b| b == b'\n');
    if bytes.is_empty() {
        // Empty file: no lines at all
        lines.next();
    }
    lines.map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = TextFileStore::new(dir.path().join("friends.txt"));
        let outcome = store.load(&CriteriaSet::shared_default()).unwrap();
        assert!(outcome.friends.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_save_creates_parent_dirs_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("friends.txt");
        let store = TextFileStore::new(&path);
        let criteria = CriteriaSet::shared_default();

        store
            .save(&[Friend::new("Ana", criteria.clone()), Friend::new("Luis", criteria.clone())])
            .unwrap();
        store.save(&[Friend::new("Eva", criteria.clone())]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Eva,0,0,0,0,0,0,0,0,0,0,M,Acquaintance\n");

        let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_latin1_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("amigos.txt");
        let mut bytes = b"Jos".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b",5,5,5,5,5,5,5,5,5,5,H,Terciario\n");
        std::fs::write(&path, &bytes).unwrap();

        let store = TextFileStore::with_encoding(&path, Encoding::Latin1);
        let outcome = store.load(&CriteriaSet::shared_default()).unwrap();
        assert_eq!(outcome.friends.len(), 1);
        assert_eq!(outcome.friends[0].name(), "José");

        store.save(&outcome.friends).unwrap();
        let saved = std::fs::read(&path).unwrap();
        assert_eq!(saved[3], 0xE9);
    }

    #[test]
    fn test_split_lines_matches_str_lines() {
        for text in ["", "\n", "a", "a\n", "a\r\nb", "a\n\nb\n", "a\n\n"] {
            let expected: Vec<&str> = text.lines().collect();
            let actual: Vec<&[u8]> = split_lines(text.as_bytes()).collect();
            let expected: Vec<&[u8]> = expected.iter().map(|l| l.as_bytes()).collect();
            assert_eq!(actual, expected, "input {:?}", text);
        }
    }

    #[test]
    fn test_undecodable_line_is_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("friends.txt");
        let mut bytes = b"Ana,9,9,9,9,9,9,9,9,9,9,F,Primary\nJos".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b",5,5,5,5,5,5,5,5,5,5,M,Tertiary\n");
        std::fs::write(&path, &bytes).unwrap();

        let outcome = TextFileStore::new(&path)
            .load(&CriteriaSet::shared_default())
            .unwrap();
        assert_eq!(outcome.friends.len(), 1);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].line_number, 2);
        assert!(outcome.skipped[0].reason.contains("UTF-8"));
        assert!(outcome.skipped[0].content.starts_with("Jos"));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("friends.txt");
        std::fs::write(&path, "").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = TextFileStore::new(&path);
        store
            .save(&[Friend::new("Ana", CriteriaSet::shared_default())])
            .unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
