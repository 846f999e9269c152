//! Identity command-line tooling.
//!
//! - **args**: clap definitions
//! - **commands**: command implementations on top of the domain crate

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
