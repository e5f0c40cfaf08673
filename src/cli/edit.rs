//! Friend re-evaluation command

use anyhow::{Context, Result};
use friend_circle::{
    form::{parse_score_assignments, validate_scores},
    CircleError,
};

use super::helpers::{parse_gender, to_index, GlobalOptions};

/// Handle friend re-evaluation command
pub fn handle(
    position: usize,
    name: Option<String>,
    gender: Option<String>,
    score: Vec<String>,
    globals: &GlobalOptions,
) -> Result<()> {
    let mut circle = globals.open_circle()?;
    let index = to_index(position, circle.len())?;
    let criteria = circle.criteria().clone();

    let scores = parse_score_assignments(&score, &criteria).context("Invalid --score")?;
    validate_scores(&scores, &criteria)?;

    if let Some(ref n) = name {
        if n.trim().is_empty() {
            return Err(CircleError::Validation("name cannot be empty".to_string()).into());
        }
    }

    let symbol = gender
        .as_deref()
        .map(parse_gender)
        .transpose()?
        .map(|g| g.symbol().to_string());

    if !circle.update_at(index, &scores, name.as_deref(), symbol.as_deref())? {
        return Err(CircleError::IndexOutOfBounds {
            index: position,
            len: circle.len(),
        }
        .into());
    }

    if let Some(friend) = circle.get(index) {
        println!(" Friend updated:");
        println!();
        print!("{}", friend);
    }
    Ok(())
}
