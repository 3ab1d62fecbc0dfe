//! Report generators
//!
//! Four independent, read-only consumers of the filtered dataset. Each is
//! split into a pure `compute` returning a stats struct and a `render`
//! writing labeled lines.

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod user;

pub use mode::{mode, mode_with_count, modes, value_counts};
