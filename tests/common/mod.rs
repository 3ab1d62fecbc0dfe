//! Common test utilities

use bikeshare::config::Config;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Header carried by the fully-populated city files
pub const FULL_HEADER: &str =
    "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

/// Header carried by the city file without demographics columns
pub const MINIMAL_HEADER: &str = "Start Time,Trip Duration,Start Station,End Station,User Type";

/// Write a city CSV file into a data directory
pub fn write_city_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) {
    let mut contents = String::from(header);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(dir.join(name), contents).unwrap();
}

/// Create a temporary data directory holding a chicago.csv with the given
/// rows, and a default config pointing at it
pub fn chicago_fixture(rows: &[&str]) -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    write_city_csv(dir.path(), "chicago.csv", FULL_HEADER, rows);
    let config = Config::default().with_data_dir(dir.path().to_path_buf());
    (dir, config)
}
