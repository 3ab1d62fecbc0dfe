//! User demographics

use crate::data::Dataset;
use crate::error::{ReportError, ReportResult};
use crate::report::mode::{modes, value_counts};
use std::io::{self, Write};

/// User type, gender, and birth year breakdowns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// User type -> count, descending by count
    pub user_types: Vec<(String, usize)>,

    /// Gender -> count, when the dataset has a gender column
    pub genders: Option<Vec<(String, usize)>>,

    /// Birth year summary, when the dataset has a birth year column
    pub birth_years: Option<BirthYearStats>,
}

/// Birth year mode(s) and range
///
/// Every year tied for the highest count is reported, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub most_common: Vec<i32>,
    pub earliest: i32,
    pub latest: i32,
}

/// Compute the user breakdowns over the filtered dataset
pub fn compute(dataset: &Dataset) -> ReportResult<UserStats> {
    if dataset.trips.is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    let user_types = value_counts(
        dataset
            .trips
            .iter()
            .filter_map(|t| t.user_type.clone()),
    );

    let genders = if dataset.has_gender {
        Some(value_counts(
            dataset.trips.iter().filter_map(|t| t.gender.clone()),
        ))
    } else {
        None
    };

    let birth_years = if dataset.has_birth_year {
        let years: Vec<i32> = dataset.trips.iter().filter_map(|t| t.birth_year).collect();
        if years.is_empty() {
            None
        } else {
            Some(BirthYearStats {
                most_common: modes(years.iter().copied()),
                earliest: *years.iter().min().unwrap_or(&0),
                latest: *years.iter().max().unwrap_or(&0),
            })
        }
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

/// Write the labeled statistics
pub fn render<W: Write>(stats: &UserStats, city: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "Counts by user type:")?;
    for (user_type, count) in &stats.user_types {
        writeln!(out, "  {}: {}", user_type, count)?;
    }

    match &stats.genders {
        Some(genders) => {
            writeln!(out, "Counts by gender:")?;
            for (gender, count) in genders {
                writeln!(out, "  {}: {}", gender, count)?;
            }
        }
        None => writeln!(out, "No gender data available for {}", city)?,
    }

    match &stats.birth_years {
        Some(birth) => {
            let years: Vec<String> = birth.most_common.iter().map(i32::to_string).collect();
            writeln!(out, "Most common birth year(s): {}", years.join(", "))?;
            writeln!(out, "Earliest birth year: {}", birth.earliest)?;
            writeln!(out, "Most recent birth year: {}", birth.latest)?;
        }
        None => writeln!(out, "No birth year data available for {}", city)?,
    }

    Ok(())
}
