//! Configuration parsing and validation
//!
//! This module handles parsing of bikeshare.yml configuration files
//! and the compiled-in default city mapping.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;
