//! Friend creation command

use anyhow::{Context, Result};
use friend_circle::{
    form::{parse_score_assignments, parse_score_list},
    FriendForm, ScoreMap,
};
use tracing::debug;

use super::helpers::{parse_gender, GlobalOptions};

/// Handle friend creation command
pub fn handle(
    name: String,
    gender: String,
    scores: Option<String>,
    score: Vec<String>,
    globals: &GlobalOptions,
) -> Result<()> {
    let mut circle = globals.open_circle()?;
    let criteria = circle.criteria().clone();

    let mut collected = match scores {
        Some(list) => parse_score_list(&list, &criteria).context("Invalid --scores")?,
        None => ScoreMap::new(),
    };
    collected.extend(parse_score_assignments(&score, &criteria).context("Invalid --score")?);

    let form = FriendForm {
        name,
        gender: parse_gender(&gender)?,
        scores: collected,
    };
    form.validate(&criteria)?;

    let symbol = form.gender.symbol().to_string();
    let index = circle.add(&form.name, &form.scores, &symbol)?;
    debug!("Added friend at position {}", index + 1);

    let friend = &circle.friends()[index];
    println!(" Friend added as #{}", index + 1);
    println!();
    print!("{}", friend);
    Ok(())
}
