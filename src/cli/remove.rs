//! Friend removal command

use anyhow::Result;
use friend_circle::CircleError;

use super::helpers::{confirm, to_index, GlobalOptions};

/// Handle friend removal command
pub fn handle(position: usize, yes: bool, globals: &GlobalOptions) -> Result<()> {
    let mut circle = globals.open_circle()?;
    let index = to_index(position, circle.len())?;

    let name = circle.friends()[index].name().to_string();
    if !yes && !confirm(&format!("Are you sure you want to remove {}?", name))? {
        println!("Operation cancelled.");
        return Ok(());
    }

    match circle.remove_at(index)? {
        Some(removed) => {
            println!(" Removed {}", removed.name());
            Ok(())
        }
        None => Err(CircleError::IndexOutOfBounds {
            index: position,
            len: circle.len(),
        }
        .into()),
    }
}
