//! Most frequent times of travel

use crate::data::{month_name, Dataset, Trip};
use crate::error::{ReportError, ReportResult};
use crate::report::mode::mode;
use std::io::{self, Write};

/// Most frequent month, weekday, and start hour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Numeric month (1-12)
    pub popular_month: u32,
    pub popular_day: &'static str,
    /// Start hour (0-23)
    pub popular_hour: u32,
}

/// Compute the most frequent travel times over the filtered dataset
pub fn compute(dataset: &Dataset) -> ReportResult<TimeStats> {
    let popular_month =
        mode(dataset.trips.iter().map(Trip::month)).ok_or(ReportError::EmptyDataset)?;
    let popular_day =
        mode(dataset.trips.iter().map(Trip::weekday_name)).ok_or(ReportError::EmptyDataset)?;
    let popular_hour =
        mode(dataset.trips.iter().map(Trip::start_hour)).ok_or(ReportError::EmptyDataset)?;

    Ok(TimeStats {
        popular_month,
        popular_day,
        popular_hour,
    })
}

/// Write the labeled statistics
pub fn render<W: Write>(stats: &TimeStats, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Most popular month: {}",
        month_name(stats.popular_month)
    )?;
    writeln!(out, "Most popular day: {}", stats.popular_day)?;
    writeln!(out, "Most popular start hour: {}", stats.popular_hour)?;
    Ok(())
}
