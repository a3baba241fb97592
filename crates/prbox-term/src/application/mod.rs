//! Application layer driving the terminal.
//!
//! This module builds the command line, runs the UI loop and renders frames
//! from the current snapshot.

pub mod cli;
pub mod ui;
pub mod view;
