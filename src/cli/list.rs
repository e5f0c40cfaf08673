//! Ranked listing and detail commands

use anyhow::{Context, Result};
use friend_circle::{FriendSummary, ListFilter};

use super::helpers::{to_index, GlobalOptions};

/// Handle ranked listing command
pub fn handle(filter: String, globals: &GlobalOptions) -> Result<()> {
    let filter: ListFilter = filter.parse().context("Invalid --filter")?;
    let circle = globals.open_circle()?;

    let rows = circle.list(&filter);
    println!("Showing {} friends (Filter: {})", rows.len(), filter);
    for (index, friend) in rows {
        println!("#{} {}", index + 1, FriendSummary::from(friend));
    }
    Ok(())
}

/// Handle single friend detail command
pub fn handle_show(position: usize, globals: &GlobalOptions) -> Result<()> {
    let circle = globals.open_circle()?;
    let index = to_index(position, circle.len())?;
    print!("{}", circle.friends()[index]);
    Ok(())
}
