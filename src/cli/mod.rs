//! CLI command handlers
//!
//! This module contains all the command handlers for the friend-circle CLI.
//! Each subcommand is implemented in its own module.

pub mod add;
pub mod config;
pub mod criteria;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod list;
pub mod remove;
