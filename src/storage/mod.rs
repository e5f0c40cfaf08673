//! Storage layer for the friend circle
//!
//! Provides the backing-store abstraction the collection persists through,
//! with a plain-text file implementation and an in-memory one.

pub mod encoding;
pub mod memory;
pub mod text_file;

pub use encoding::Encoding;
pub use memory::MemoryStore;
pub use text_file::TextFileStore;

use crate::criteria::CriteriaSet;
use crate::error::{CircleError, Result};
use crate::friend::Friend;
use std::sync::Arc;
use tracing::warn;

/// Storage backend trait defining the whole-collection operations
pub trait FriendStore: Send + Sync {
    /// Read every friend, skipping lines that fail to parse
    fn load(&self, criteria: &Arc<CriteriaSet>) -> Result<LoadOutcome>;

    /// Replace the stored collection with `friends`, in order
    fn save(&self, friends: &[Friend]) -> Result<()>;
}

/// A storage line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line_number: usize,

    /// Raw line content
    pub content: String,

    /// Why the line was rejected
    pub reason: String,
}

/// Result of loading a collection
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub friends: Vec<Friend>,
    pub skipped: Vec<SkippedLine>,
}

impl LoadOutcome {
    /// Parse one stored line, recording it as skipped if it fails
    pub fn push_line(&mut self, line_number: usize, line: &str, criteria: &Arc<CriteriaSet>) {
        match Friend::from_line(line, Arc::clone(criteria)) {
            Ok(friend) => self.friends.push(friend),
            Err(e) => {
                let reason = match e {
                    CircleError::Format(msg) | CircleError::Encoding(msg) => msg,
                    other => other.to_string(),
                };
                self.skip(line_number, line.to_string(), reason);
            }
        }
    }

    /// Record a line that never reached the parser
    pub fn skip(&mut self, line_number: usize, content: String, reason: String) {
        warn!("Skipping line {}: {}", line_number, reason);
        self.skipped.push(SkippedLine {
            line_number,
            content,
            reason,
        });
    }
}

/// Parse stored text one line at a time
///
/// A failing line is logged and recorded in `skipped`; it never aborts the
/// load.
pub fn parse_lines<'a, I>(lines: I, criteria: &Arc<CriteriaSet>) -> LoadOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    let mut outcome = LoadOutcome::default();
    for (i, line) in lines.into_iter().enumerate() {
        outcome.push_line(i + 1, line, criteria);
    }
    outcome
}

/// Render a collection as stored text, one line per friend
pub fn render_lines(friends: &[Friend]) -> String {
    let mut text = String::new();
    for friend in friends {
        text.push_str(&friend.to_line());
        text.push('\n');
    }
    text
}
