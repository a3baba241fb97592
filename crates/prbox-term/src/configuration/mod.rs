//! Configuration management for the dashboard.
//!
//! Values come from built-in defaults, then `config.toml`, then command-line
//! flags and their environment variables, in that order of precedence.

mod config;

pub use config::*;
