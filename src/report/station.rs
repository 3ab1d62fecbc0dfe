//! Most popular stations and trip

use crate::data::Dataset;
use crate::error::{ReportError, ReportResult};
use crate::report::mode::{mode, mode_with_count};
use std::io::{self, Write};

/// Most frequent start/end stations and station pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub popular_start: String,
    pub popular_end: String,
    /// Most frequent (start, end) pair by exact string equality
    pub popular_trip: (String, String),
    pub popular_trip_count: usize,
}

/// Compute station popularity over the filtered dataset
pub fn compute(dataset: &Dataset) -> ReportResult<StationStats> {
    let popular_start = mode(dataset.trips.iter().map(|t| t.start_station.clone()))
        .ok_or(ReportError::EmptyDataset)?;
    let popular_end = mode(dataset.trips.iter().map(|t| t.end_station.clone()))
        .ok_or(ReportError::EmptyDataset)?;
    let (popular_trip, popular_trip_count) = mode_with_count(
        dataset
            .trips
            .iter()
            .map(|t| (t.start_station.clone(), t.end_station.clone())),
    )
    .ok_or(ReportError::EmptyDataset)?;

    Ok(StationStats {
        popular_start,
        popular_end,
        popular_trip,
        popular_trip_count,
    })
}

/// Write the labeled statistics
pub fn render<W: Write>(stats: &StationStats, out: &mut W) -> io::Result<()> {
    writeln!(out, "Most popular start station: {}", stats.popular_start)?;
    writeln!(out, "Most popular end station: {}", stats.popular_end)?;
    writeln!(
        out,
        "Most frequent trip: {} -> {} ({} trips)",
        stats.popular_trip.0, stats.popular_trip.1, stats.popular_trip_count
    )?;
    Ok(())
}
