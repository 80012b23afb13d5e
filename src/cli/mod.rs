// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for classifying landmark frames.
//!
//! This module contains the command-line interface logic, including argument parsing,
//! console logging, and the `classify` and `rules` command implementations.

// Modules
/// CLI arguments.
pub mod args;

/// Classification commands.
pub mod classify;

/// Console logging macros.
pub mod logging;
