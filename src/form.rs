//! Input validation for new and edited friends
//!
//! Record-level operations are lenient (bad scores are dropped, bad genders
//! coerced). User input is checked here first so mistakes are reported
//! instead of silently ignored.

use crate::criteria::CriteriaSet;
use crate::error::{CircleError, Result};
use crate::friend::{ScoreMap, MAX_SCORE, MIN_SCORE};
use crate::types::Gender;

/// Field values collected for a new friend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendForm {
    pub name: String,
    pub gender: Gender,
    pub scores: ScoreMap,
}

impl FriendForm {
    /// Check the form against the active criteria
    ///
    /// The name must be non-empty after trimming and every criterion needs a
    /// score within range.
    pub fn validate(&self, criteria: &CriteriaSet) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CircleError::Validation("name cannot be empty".to_string()));
        }

        let missing: Vec<&str> = criteria
            .iter()
            .filter(|c| !self.scores.contains_key(*c))
            .collect();
        if !missing.is_empty() {
            return Err(CircleError::Validation(format!(
                "missing scores for: {}",
                missing.join(", ")
            )));
        }

        validate_scores(&self.scores, criteria)
    }
}

/// Check that every key is a criterion and every value is within range
pub fn validate_scores(scores: &ScoreMap, criteria: &CriteriaSet) -> Result<()> {
    let mut keys: Vec<&String> = scores.keys().collect();
    keys.sort_by_key(|k| criteria.position(k));

    for key in keys {
        if criteria.position(key).is_none() {
            return Err(CircleError::Validation(format!("unknown criterion '{}'", key)));
        }
        let value = scores[key];
        if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(CircleError::Validation(format!(
                "score for '{}' must be between {} and {}, got {}",
                key, MIN_SCORE, MAX_SCORE, value
            )));
        }
    }
    Ok(())
}

/// Parse `key=value` score assignments
///
/// `key` is a criterion identifier or its 1-based position. Values must be
/// integers; range checks are left to `validate_scores`.
pub fn parse_score_assignments<S: AsRef<str>>(
    assignments: &[S],
    criteria: &CriteriaSet,
) -> Result<ScoreMap> {
    let mut scores = ScoreMap::new();

    for assignment in assignments {
        let assignment = assignment.as_ref();
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            CircleError::Validation(format!("expected criterion=score, got '{}'", assignment))
        })?;
        let key = key.trim();

        let criterion = match key.parse::<usize>() {
            Ok(position) => position
                .checked_sub(1)
                .and_then(|i| criteria.name(i))
                .ok_or_else(|| {
                    CircleError::Validation(format!(
                        "criterion position {} is outside 1..={}",
                        position,
                        criteria.len()
                    ))
                })?,
            Err(_) => criteria
                .iter()
                .find(|c| *c == key)
                .ok_or_else(|| CircleError::Validation(format!("unknown criterion '{}'", key)))?,
        };

        let value = parse_score(criterion, value)?;
        if scores.insert(criterion.to_string(), value).is_some() {
            return Err(CircleError::Validation(format!(
                "'{}' is scored more than once",
                criterion
            )));
        }
    }

    Ok(scores)
}

/// Parse a comma-separated score list given in criteria order
pub fn parse_score_list(list: &str, criteria: &CriteriaSet) -> Result<ScoreMap> {
    let values: Vec<&str> = list.split(',').map(str::trim).collect();
    if values.len() != criteria.len() {
        return Err(CircleError::Validation(format!(
            "expected {} scores, got {}",
            criteria.len(),
            values.len()
        )));
    }

    criteria
        .iter()
        .zip(values)
        .map(|(criterion, raw)| Ok((criterion.to_string(), parse_score(criterion, raw)?)))
        .collect()
}

fn parse_score(criterion: &str, raw: &str) -> Result<i32> {
    raw.trim().parse::<i32>().map_err(|_| {
        CircleError::Validation(format!(
            "score for '{}' must be a whole number, got '{}'",
            criterion,
            raw.trim()
        ))
    })
}
