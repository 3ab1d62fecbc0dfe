//! Total and average trip duration

use crate::data::Dataset;
use crate::error::{ReportError, ReportResult};
use std::io::{self, Write};

/// Total and mean trip duration in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
}

/// Sum and average the trip durations of the filtered dataset
pub fn compute(dataset: &Dataset) -> ReportResult<DurationStats> {
    if dataset.trips.is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    let total_secs: f64 = dataset.trips.iter().map(|t| t.duration_secs).sum();
    let mean_secs = total_secs / dataset.trips.len() as f64;

    Ok(DurationStats {
        total_secs,
        mean_secs,
    })
}

/// Format seconds as `D days, HH:MM:SS.fff`, omitting a zero-day prefix
///
/// Decomposition by successive division: 60 seconds to a minute, 60 minutes
/// to an hour, 24 hours to a day; the seconds component keeps millisecond
/// precision.
pub fn format_duration(secs: f64) -> String {
    let total_minutes = (secs / 60.0).floor();
    let seconds = secs - total_minutes * 60.0;
    let total_hours = (total_minutes / 60.0).floor();
    let minutes = (total_minutes - total_hours * 60.0) as u32;
    let days = (total_hours / 24.0).floor() as u64;
    let hours = (total_hours % 24.0) as u32;

    let hms = format!("{:02}:{:02}:{:06.3}", hours, minutes, seconds);
    if days == 0 {
        hms
    } else {
        format!("{} days, {}", days, hms)
    }
}

/// Write the labeled statistics
pub fn render<W: Write>(stats: &DurationStats, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Total travel time: {}",
        format_duration(stats.total_secs)
    )?;
    writeln!(
        out,
        "Average travel time: {}",
        format_duration(stats.mean_secs)
    )?;
    Ok(())
}
