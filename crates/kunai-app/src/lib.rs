//! The `kunai` command-line front end.
//!
//! Argument parsing lives in [`cli`], the subcommand bodies in [`commands`]
//! and subscriber setup in [`logging`]. Every command writes to a caller
//! supplied sink so it can be exercised without a terminal.

pub mod cli;
pub mod commands;
pub mod logging;
