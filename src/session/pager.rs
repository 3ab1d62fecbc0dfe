//! Paginated raw-row display
//!
//! Shows the filtered table in growing prefixes of five rows while the
//! user keeps answering "yes".

use crate::data::{Dataset, TIMESTAMP_FORMAT};
use crate::session::prompt::confirm;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::io::{self, BufRead, Write};

/// Rows added per "yes" answer
pub const PAGE_STEP: usize = 5;

/// Render the first `limit` rows as a table
///
/// Gender and birth-year columns appear only when the dataset carries
/// them. A limit beyond the table length prints every available row.
pub fn render_page<W: Write>(dataset: &Dataset, limit: usize, out: &mut W) -> io::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        "Start Time",
        "End Time",
        "Duration (s)",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if dataset.has_gender {
        header.push("Gender");
    }
    if dataset.has_birth_year {
        header.push("Birth Year");
    }
    table.set_header(header);

    for trip in dataset.trips.iter().take(limit) {
        let mut row = vec![
            trip.start_time.format(TIMESTAMP_FORMAT).to_string(),
            trip.end_time
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
            trip.duration_secs.to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone().unwrap_or_default(),
        ];
        if dataset.has_gender {
            row.push(trip.gender.clone().unwrap_or_default());
        }
        if dataset.has_birth_year {
            row.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        table.add_row(row);
    }

    writeln!(out, "{}", table)
}

/// Show the first rows, then keep growing the page while the user answers
/// "yes"
///
/// The whole prefix is re-printed each round; any non-"yes" answer (or end
/// of input) stops.
pub fn page_trips<R: BufRead, W: Write>(
    dataset: &Dataset,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "Raw data for the first {} trips in {}:",
        PAGE_STEP.min(dataset.len()),
        dataset.city
    )?;

    let mut limit = PAGE_STEP;
    loop {
        render_page(dataset, limit, out)?;
        if !confirm(input, out, "\nWould you like to see more? Enter yes or no.")? {
            break;
        }
        limit += PAGE_STEP;
    }
    Ok(())
}
