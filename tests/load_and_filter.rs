//! Integration tests for dataset loading and filtering

mod common;

use bikeshare::config::Config;
use bikeshare::data::{load_dataset, title_case, Filters, DAYS, MONTHS};
use bikeshare::error::BikeshareError;
use common::{chicago_fixture, write_city_csv, MINIMAL_HEADER};
use std::path::PathBuf;
use tempfile::TempDir;

/// One row per tracked month, two extra June rows on distinct weekdays
fn month_spread_rows() -> Vec<&'static str> {
    vec![
        "2017-01-02 08:00:00,,100.0,A,B,Subscriber,Male,1990.0",
        "2017-02-06 08:00:00,,100.0,A,B,Subscriber,Male,1990.0",
        "2017-03-06 08:00:00,,100.0,A,B,Subscriber,Male,1990.0",
        "2017-04-03 08:00:00,,100.0,A,B,Subscriber,Male,1990.0",
        "2017-05-01 08:00:00,,100.0,A,B,Subscriber,Male,1990.0",
        "2017-06-05 08:00:00,,100.0,A,B,Subscriber,Male,1990.0",
        // a Tuesday and a Saturday in June
        "2017-06-06 09:00:00,,100.0,A,B,Customer,Female,1985.0",
        "2017-06-10 10:00:00,,100.0,A,B,Customer,,",
    ]
}

#[test]
fn test_all_filter_keeps_every_row() {
    let (_dir, config) = chicago_fixture(&month_spread_rows());
    let dataset = load_dataset(&config, &Filters::new("chicago", "all", "all")).unwrap();
    assert_eq!(dataset.len(), 8);
}

#[test]
fn test_each_month_name_filters_to_matching_rows() {
    let (_dir, config) = chicago_fixture(&month_spread_rows());

    for (i, month) in MONTHS.iter().enumerate() {
        let dataset = load_dataset(&config, &Filters::new("chicago", month, "all")).unwrap();
        let expected = if *month == "june" { 3 } else { 1 };
        assert_eq!(dataset.len(), expected, "month {}", month);
        for trip in &dataset.trips {
            assert_eq!(trip.month(), i as u32 + 1);
        }
    }
}

#[test]
fn test_each_weekday_name_filters_to_matching_rows() {
    // 2017-06-05 through 2017-06-11 cover Monday through Sunday
    let rows: Vec<String> = (5..=11)
        .map(|day| format!("2017-06-{:02} 08:00:00,,100.0,A,B,Subscriber,Male,1990.0", day))
        .collect();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let (_dir, config) = chicago_fixture(&row_refs);

    for day in DAYS {
        let dataset = load_dataset(&config, &Filters::new("chicago", "all", day)).unwrap();
        assert_eq!(dataset.len(), 1, "day {}", day);
        assert_eq!(dataset.trips[0].weekday_name(), title_case(day));
    }
}

#[test]
fn test_day_filter_matches_exact_weekday() {
    let (_dir, config) = chicago_fixture(&month_spread_rows());

    let dataset = load_dataset(&config, &Filters::new("chicago", "june", "saturday")).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.trips[0].weekday_name(), "Saturday");
}

#[test]
fn test_unrecognized_day_yields_zero_rows() {
    let (_dir, config) = chicago_fixture(&month_spread_rows());

    let dataset = load_dataset(&config, &Filters::new("chicago", "all", "someday")).unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn test_invalid_month_errors() {
    let (_dir, config) = chicago_fixture(&month_spread_rows());

    let result = load_dataset(&config, &Filters::new("chicago", "december", "all"));
    assert!(matches!(result, Err(BikeshareError::Filter(_))));
}

#[test]
fn test_unknown_city_fails_without_file_access() {
    // the data directory does not exist, so any file access would fail
    // with a load error rather than a filter error
    let config = Config::default().with_data_dir(PathBuf::from("/nonexistent/data"));

    let result = load_dataset(&config, &Filters::new("atlantis", "all", "all"));
    assert!(matches!(result, Err(BikeshareError::Filter(_))));
}

#[test]
fn test_city_without_demographics_columns() {
    let dir = TempDir::new().unwrap();
    write_city_csv(
        dir.path(),
        "washington.csv",
        MINIMAL_HEADER,
        &["2017-04-03 08:00:00,100.0,A,B,Subscriber"],
    );
    let config = Config::default().with_data_dir(dir.path().to_path_buf());

    let dataset = load_dataset(&config, &Filters::new("washington", "all", "all")).unwrap();
    assert!(!dataset.has_gender);
    assert!(!dataset.has_birth_year);
    assert!(dataset.trips[0].gender.is_none());
    assert!(dataset.trips[0].birth_year.is_none());
}

#[test]
fn test_malformed_timestamp_surfaces_load_error() {
    let (_dir, config) = chicago_fixture(&["garbage,,100.0,A,B,Subscriber,Male,1990.0"]);

    let result = load_dataset(&config, &Filters::new("chicago", "all", "all"));
    match result {
        Err(BikeshareError::Load(e)) => {
            assert!(e.to_string().contains("chicago.csv"));
        }
        other => panic!("expected load error, got {:?}", other.map(|d| d.len())),
    }
}

#[test]
fn test_city_selection_is_case_insensitive() {
    let (_dir, config) = chicago_fixture(&month_spread_rows());

    let dataset = load_dataset(&config, &Filters::new("  Chicago ", "all", "all")).unwrap();
    assert_eq!(dataset.len(), 8);
}
