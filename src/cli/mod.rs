//! Command-line front end.
//!
//! Parses arguments with clap and turns each command into one store call.

pub mod args;
pub mod commands;
