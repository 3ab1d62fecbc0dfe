//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, configuration resolution,
//! and session startup.

pub mod app;

// Re-export main types
pub use app::*;
