//! Error types for the bikeshare explorer

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bikeshare operations
pub type Result<T> = std::result::Result<T, BikeshareError>;

/// Main error type for the bikeshare explorer
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filter selection errors
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Dataset loading errors
    #[error("Dataset error: {0}")]
    Load(#[from] LoadError),

    /// Report generation errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {}", .path.display(), .error)]
    Unreadable { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No city datasets defined in configuration")]
    NoCities,
}

/// Filter selection errors
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unknown city '{city}' (expected one of: {known})")]
    UnknownCity { city: String, known: String },

    #[error("Unknown month '{0}' (expected january through june, or 'all')")]
    InvalidMonth(String),

    #[error("Unknown day '{0}' (expected a weekday name, or 'all')")]
    InvalidDay(String),
}

/// Dataset loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open dataset '{}': {}", .path.display(), .error)]
    Open { path: PathBuf, error: String },

    #[error("Failed to parse dataset '{}': {}", .path.display(), .error)]
    Malformed { path: PathBuf, error: String },
}

/// Report generation errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("No trips match the selected filters")]
    EmptyDataset,
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for filter operations
pub type FilterResult<T> = std::result::Result<T, FilterError>;

/// Specialized result type for dataset loading
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Specialized result type for report generation
pub type ReportResult<T> = std::result::Result<T, ReportError>;
