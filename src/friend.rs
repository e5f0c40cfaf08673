//! Friend records
//!
//! A `Friend` holds a name, a gender flag, one integer score per criterion,
//! and a cached category. The category is recomputed after every score change
//! and after parsing, so it always agrees with the current total.
//!
//! # Line format
//!
//! ```text
//! name,score_1,...,score_N,gender,category
//! ```
//!
//! Older files may merge the last two fields into one (`MPrimary`), in which
//! case the first character is the gender and the rest the category. The
//! delimiter is never escaped: a comma inside a name shifts every later field,
//! and such a line fails to parse on the next load.

use crate::criteria::CriteriaSet;
use crate::error::{CircleError, Result};
use crate::types::{Category, Gender};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Field delimiter of the line format
pub const DELIMITER: char = ',';

/// Lowest score accepted by `update_scores`
pub const MIN_SCORE: i32 = 1;

/// Highest score accepted by `update_scores`
pub const MAX_SCORE: i32 = 10;

/// Scores keyed by criterion identifier
pub type ScoreMap = HashMap<String, i32>;

/// One tracked relationship
#[derive(Debug, Clone)]
pub struct Friend {
    name: String,
    gender: Gender,
    scores: Vec<i32>,
    category: Category,
    criteria: Arc<CriteriaSet>,
}

impl Friend {
    /// Create a friend with every score at zero and the primary gender
    pub fn new(name: &str, criteria: Arc<CriteriaSet>) -> Self {
        Self::from_parts(name, None, "M", None, criteria)
    }

    /// Create a friend from raw parts
    ///
    /// Scores for criteria missing from `scores` start at zero; keys that are
    /// not criteria are ignored. Construction does not range-check scores.
    /// `gender` goes through `Gender::normalize`. A supplied `category` is
    /// overwritten by classification before this returns.
    pub fn from_parts(
        name: &str,
        scores: Option<&ScoreMap>,
        gender: &str,
        category: Option<Category>,
        criteria: Arc<CriteriaSet>,
    ) -> Self {
        let scores = criteria
            .iter()
            .map(|c| scores.and_then(|s| s.get(c).copied()).unwrap_or(0))
            .collect();

        let mut friend = Self {
            name: name.trim().to_string(),
            gender: Gender::normalize(gender),
            scores,
            category: category.unwrap_or(Category::Unknown),
            criteria,
        };
        friend.classify();
        friend
    }

    /// Apply new scores
    ///
    /// Entries whose key is not a criterion, or whose value falls outside
    /// `MIN_SCORE..=MAX_SCORE`, are skipped silently. The category is
    /// recomputed afterwards regardless.
    pub fn update_scores(&mut self, new_scores: &ScoreMap) {
        for (key, &value) in new_scores {
            if let Some(index) = self.criteria.position(key) {
                if (MIN_SCORE..=MAX_SCORE).contains(&value) {
                    self.scores[index] = value;
                }
            }
        }
        self.classify();
    }

    /// Recompute the category from the current total
    pub fn classify(&mut self) -> Category {
        self.category = Category::from_total(self.total());
        self.category
    }

    /// Replace the name (trimmed, otherwise unvalidated)
    pub fn rename(&mut self, new_name: &str) {
        self.name = new_name.trim().to_string();
    }

    /// Replace the gender; unrecognized input becomes the primary symbol
    pub fn set_gender(&mut self, new_gender: &str) {
        self.gender = Gender::normalize(new_gender);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn criteria(&self) -> &Arc<CriteriaSet> {
        &self.criteria
    }

    /// Scores in criteria order
    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    /// Score for one criterion identifier
    pub fn score(&self, criterion: &str) -> Option<i32> {
        self.criteria.position(criterion).map(|i| self.scores[i])
    }

    /// Scores keyed by criterion identifier
    pub fn score_map(&self) -> ScoreMap {
        self.criteria
            .iter()
            .zip(&self.scores)
            .map(|(c, &s)| (c.to_string(), s))
            .collect()
    }

    /// Sum of all scores
    pub fn total(&self) -> i64 {
        self.scores.iter().map(|&s| i64::from(s)).sum()
    }

    /// Encode as one data-file line (without the trailing newline)
    pub fn to_line(&self) -> String {
        let mut fields = Vec::with_capacity(self.scores.len() + 3);
        fields.push(self.name.clone());
        fields.extend(self.scores.iter().map(|s| s.to_string()));
        fields.push(self.gender.symbol().to_string());
        fields.push(self.category.label().to_string());
        fields.join(&DELIMITER.to_string())
    }

    /// Decode one data-file line
    ///
    /// Accepts `criteria.len() + 3` fields (explicit gender and category) or
    /// `criteria.len() + 2` fields (gender and category merged). Any other
    /// field count, or a score that is not an integer, fails the whole line.
    pub fn from_line(line: &str, criteria: Arc<CriteriaSet>) -> Result<Self> {
        let parts: Vec<&str> = line.trim().split(DELIMITER).collect();
        let n = criteria.len();

        let (gender, category) = if parts.len() == n + 3 {
            let gender = alternate_to_primary(parts[n + 1].trim().to_uppercase());
            (gender, Category::from_label(parts[n + 2]))
        } else if parts.len() == n + 2 {
            split_combined_field(parts[n + 1])
        } else {
            return Err(CircleError::Format(format!(
                "expected {} or {} fields, found {}",
                n + 3,
                n + 2,
                parts.len()
            )));
        };

        let mut scores = ScoreMap::with_capacity(n);
        for (criterion, raw) in criteria.iter().zip(&parts[1..=n]) {
            let value = raw.trim().parse::<i32>().map_err(|e| {
                CircleError::Format(format!(
                    "score for '{}' is not an integer ({:?}): {}",
                    criterion, raw, e
                ))
            })?;
            scores.insert(criterion.to_string(), value);
        }

        Ok(Self::from_parts(
            parts[0],
            Some(&scores),
            &gender,
            category,
            criteria,
        ))
    }
}

fn alternate_to_primary(symbol: String) -> String {
    if symbol == "H" {
        "M".to_string()
    } else {
        symbol
    }
}

/// Split a merged `<gender><category>` field
fn split_combined_field(field: &str) -> (String, Option<Category>) {
    let field = field.trim();
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => {
            let gender = alternate_to_primary(first.to_uppercase().collect());
            let rest = chars.as_str().trim();
            let category = if rest.is_empty() {
                Some(Category::Unknown)
            } else {
                Category::from_label(rest)
            };
            (gender, category)
        }
        None => ("M".to_string(), Some(Category::Unknown)),
    }
}

impl PartialEq for Friend {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.gender == other.gender
            && self.scores == other.scores
            && self.category == other.category
            && (Arc::ptr_eq(&self.criteria, &other.criteria) || self.criteria == other.criteria)
    }
}

impl Eq for Friend {}

impl std::fmt::Display for Friend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Gender: {}", self.gender)?;
        for (i, score) in self.scores.iter().enumerate() {
            let label = self.criteria.label(i).unwrap_or_default();
            writeln!(f, "{}: {}", label, score)?;
        }
        writeln!(f, "Category: {}", self.category)
    }
}

/// One row of the ranked overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FriendSummary {
    pub name: String,
    pub total: i64,
    pub category: Category,
    pub gender: Gender,
}

impl From<&Friend> for FriendSummary {
    fn from(friend: &Friend) -> Self {
        Self {
            name: friend.name.clone(),
            total: friend.total(),
            category: friend.category,
            gender: friend.gender,
        }
    }
}

impl std::fmt::Display for FriendSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, Total Score: {}, Category: {}, {}",
            self.name, self.total, self.category, self.gender
        )
    }
}

/// Serializable view of a friend for export
#[derive(Debug, Clone, Serialize)]
pub struct FriendRecord {
    pub name: String,
    pub gender: Gender,
    pub scores: Vec<CriterionScore>,
    pub total: i64,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriterionScore {
    pub criterion: String,
    pub score: i32,
}

impl From<&Friend> for FriendRecord {
    fn from(friend: &Friend) -> Self {
        Self {
            name: friend.name.clone(),
            gender: friend.gender,
            scores: friend
                .criteria
                .iter()
                .zip(&friend.scores)
                .map(|(criterion, &score)| CriterionScore {
                    criterion: criterion.to_string(),
                    score,
                })
                .collect(),
            total: friend.total(),
            category: friend.category,
        }
    }
}
