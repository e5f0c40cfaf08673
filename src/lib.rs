//! Friend Circle - friendship tracking over a plain-text file
//!
//! Each friend is scored from 1 to 10 on a fixed, ordered set of criteria; the
//! total of those scores decides the friend's category. The collection lives
//! in a newline-delimited text file that is rewritten in full after every
//! change.
//!
//! # Architecture
//!
//! - **Types**: gender and category value types
//! - **Criteria**: the ordered criterion list shared by a collection
//! - **Friend**: one record, its classification, and its line encoding
//! - **Storage**: backends the collection persists through
//! - **Circle**: the ordered collection and its add/update/remove/list operations
//!
//! # Example
//!
//! ```no_run
//! use friend_circle::{Circle, CriteriaSet, ScoreMap, TextFileStore};
//!
//! fn main() -> friend_circle::Result<()> {
//!     let criteria = CriteriaSet::shared_default();
//!     let mut circle = Circle::open(TextFileStore::new("friends.txt"), criteria.clone())?;
//!
//!     let scores: ScoreMap = criteria.iter().map(|c| (c.to_string(), 9)).collect();
//!     circle.add("Ana", &scores, "F")?;
//!
//!     for friend in circle.list_sorted() {
//!         println!("{} ({})", friend.name(), friend.category());
//!     }
//!     Ok(())
//! }
//! ```

pub mod circle;
pub mod config;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod form;
pub mod friend;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use circle::Circle;
pub use config::CircleConfig;
pub use criteria::{load_criteria, CriteriaSet, CriteriaSource, LoadedCriteria};
pub use error::{CircleError, Result};
pub use filter::ListFilter;
pub use form::FriendForm;
pub use friend::{Friend, FriendRecord, FriendSummary, ScoreMap};
pub use storage::{Encoding, FriendStore, MemoryStore, SkippedLine, TextFileStore};
pub use types::{Category, Gender};
