//! Common utilities shared by the identity tooling.
//!
//! This crate provides:
//! - Unified application error handling
//! - Configuration structures loaded from the environment
//! - Tracing setup

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::{AppError, AppResult};
pub use logging::init_tracing;
