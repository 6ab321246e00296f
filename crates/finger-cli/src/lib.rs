//! finger CLI library.
//!
//! This crate provides the command-line surface and text layout for the
//! finger report.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Mode, UsageError};
pub use config::Config;
