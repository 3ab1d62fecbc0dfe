//! Dataset loading and filtering
//!
//! Loads all rows of a city's CSV file into memory, then restricts them to
//! the selected month and day.

use crate::config::Config;
use crate::data::filter::{month_index, title_case, Filters, ALL};
use crate::data::trip::Trip;
use crate::error::{LoadError, Result};
use std::fs::File;
use std::path::Path;

/// An in-memory, filtered trip table for one city
#[derive(Debug, Clone)]
pub struct Dataset {
    /// City label as selected by the user
    pub city: String,

    /// Trips matching the month/day selection, in file order
    pub trips: Vec<Trip>,

    /// Whether the source file carries a Gender column
    pub has_gender: bool,

    /// Whether the source file carries a Birth Year column
    pub has_birth_year: bool,
}

impl Dataset {
    /// Number of trips in the filtered table
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the filtered table has no rows
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

/// Load the dataset for the selected city and apply the month/day filters
///
/// The city is resolved through the configuration mapping before any file
/// access. The month must be a tracked month name or "all"; the day is
/// compared by title-cased name, so an unrecognized day yields an empty
/// table rather than an error (the interactive collector validates day
/// names before they reach this point).
pub fn load_dataset(config: &Config, filters: &Filters) -> Result<Dataset> {
    let path = config.resolve_city(&filters.city)?;

    let (mut trips, has_gender, has_birth_year) = read_trips(&path)?;

    if !filters.month.eq_ignore_ascii_case(ALL) {
        let index = month_index(&filters.month)?;
        trips.retain(|t| t.month() == index);
    }

    if !filters.day.eq_ignore_ascii_case(ALL) {
        let day = title_case(&filters.day);
        trips.retain(|t| t.weekday_name() == day);
    }

    Ok(Dataset {
        city: filters.city.clone(),
        trips,
        has_gender,
        has_birth_year,
    })
}

fn read_trips(path: &Path) -> Result<(Vec<Trip>, bool, bool)> {
    let file = File::open(path).map_err(|e| LoadError::Open {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|e| LoadError::Malformed {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut trips = Vec::new();
    for record in reader.deserialize() {
        let trip: Trip = record.map_err(|e| LoadError::Malformed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        trips.push(trip);
    }

    Ok((trips, has_gender, has_birth_year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const HEADER: &str =
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

    fn write_csv(dir: &TempDir, name: &str, rows: &[&str]) {
        let mut contents = String::from(HEADER);
        contents.push('\n');
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn test_config(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.data_dir = Some(dir.path().to_path_buf());
        config
    }

    #[test]
    fn test_load_unfiltered() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "chicago.csv",
            &[
                "2017-01-02 08:00:00,,100.0,A,B,Subscriber,Male,1990.0",
                "2017-06-05 09:00:00,,200.0,B,C,Customer,Female,1985.0",
            ],
        );
        let config = test_config(&dir);

        let dataset =
            load_dataset(&config, &Filters::new("chicago", "all", "all")).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(dataset.has_gender);
        assert!(dataset.has_birth_year);
    }

    #[test]
    fn test_month_filter() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "chicago.csv",
            &[
                "2017-01-02 08:00:00,,100.0,A,B,Subscriber,Male,1990.0",
                "2017-06-05 09:00:00,,200.0,B,C,Customer,Female,1985.0",
            ],
        );
        let config = test_config(&dir);

        let dataset =
            load_dataset(&config, &Filters::new("chicago", "june", "all")).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.trips[0].month(), 6);
    }

    #[test]
    fn test_unknown_day_yields_empty_table() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "chicago.csv",
            &["2017-01-02 08:00:00,,100.0,A,B,Subscriber,Male,1990.0"],
        );
        let config = test_config(&dir);

        let dataset =
            load_dataset(&config, &Filters::new("chicago", "all", "someday")).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_unknown_city_before_file_access() {
        // data_dir does not exist; an unknown city must fail on the lookup,
        // never on the file open
        let config = Config::default().with_data_dir(PathBuf::from("/nonexistent"));
        let result = load_dataset(&config, &Filters::new("springfield", "all", "all"));
        assert!(matches!(
            result,
            Err(crate::error::BikeshareError::Filter(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let result = load_dataset(&config, &Filters::new("chicago", "all", "all"));
        assert!(matches!(result, Err(crate::error::BikeshareError::Load(_))));
    }
}
