//! Core configuration types
//!
//! This module defines the data structures that represent a bikeshare.yml
//! configuration file: the immutable city-to-CSV mapping owned by the
//! dataset loader.

use crate::error::{FilterError, FilterResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration structure
///
/// The city map is ordered so prompts and error messages enumerate cities
/// deterministically.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Application name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Directory containing the city CSV files (optional); relative paths
    /// resolve against the working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Lowercase city name -> CSV file name
    #[serde(default)]
    pub cities: BTreeMap<String, String>,
}

impl Default for Config {
    /// The three stock city datasets
    fn default() -> Self {
        let mut cities = BTreeMap::new();
        cities.insert("chicago".to_string(), "chicago.csv".to_string());
        cities.insert("new york city".to_string(), "new_york_city.csv".to_string());
        cities.insert("washington".to_string(), "washington.csv".to_string());

        Config {
            name: None,
            data_dir: None,
            cities,
        }
    }
}

impl Config {
    /// Override the data directory (e.g. from the command line)
    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = Some(dir);
        self
    }

    /// City names in listing order
    pub fn city_names(&self) -> Vec<&str> {
        self.cities.keys().map(String::as_str).collect()
    }

    /// Resolve a city selection (case-insensitive, trimmed) to the path of
    /// its backing CSV file
    pub fn resolve_city(&self, city: &str) -> FilterResult<PathBuf> {
        let key = city.trim().to_lowercase();
        match self.cities.get(&key) {
            Some(file) => {
                let mut path = self.data_dir.clone().unwrap_or_default();
                path.push(file);
                Ok(path)
            }
            None => Err(FilterError::UnknownCity {
                city: city.trim().to_string(),
                known: self.city_names().join(", "),
            }),
        }
    }
}
