//! Interactive filter collection
//!
//! Prompts are generic over the input/output streams so tests can drive
//! them with in-memory buffers. Each field is a single validated read:
//! invalid answers are reported and re-asked, and an exhausted input stream
//! ends the session cleanly.

use crate::config::Config;
use crate::data::{validate_day, validate_month, Filters};
use crate::error::{FilterResult, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Preset answers supplied on the command line
///
/// A preset field replaces its prompt for the first iteration. Presets are
/// validated eagerly at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPresets {
    pub city: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

/// Validate preset answers against the configuration and the filter sets
pub fn validate_presets(config: &Config, presets: &FilterPresets) -> FilterResult<()> {
    if let Some(city) = &presets.city {
        config.resolve_city(city)?;
    }
    if let Some(month) = &presets.month {
        validate_month(month)?;
    }
    if let Some(day) = &presets.day {
        validate_day(day)?;
    }
    Ok(())
}

/// Ask a question and read one trimmed line; `None` on end of input
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    writeln!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask a yes/no question; only a case-insensitive "yes" is affirmative
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<bool> {
    Ok(matches!(
        ask(input, out, question)?,
        Some(answer) if answer.eq_ignore_ascii_case("yes")
    ))
}

/// Collect the city/month/day selection, prompting for fields without a
/// preset; `None` when the input stream is exhausted
pub fn collect_filters<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &Config,
    presets: FilterPresets,
) -> Result<Option<Filters>> {
    let city_question = format!(
        "Which city would you like to look at? ({})",
        config.city_names().join(", ")
    );
    let city = match field(input, out, presets.city, &city_question, |answer| {
        config.resolve_city(answer).map(|_| ())
    })? {
        Some(city) => city,
        None => return Ok(None),
    };
    writeln!(out, "Looking at data for {}", city)?;

    let month = match field(
        input,
        out,
        presets.month,
        "Which month? (january through june, or all)",
        validate_month,
    )? {
        Some(month) => month,
        None => return Ok(None),
    };
    writeln!(out, "Looking at data for {}", month)?;

    let day = match field(
        input,
        out,
        presets.day,
        "Which day of the week? (monday through sunday, or all)",
        validate_day,
    )? {
        Some(day) => day,
        None => return Ok(None),
    };
    writeln!(out, "Looking at data for {}", day)?;

    Ok(Some(Filters::new(&city, &month, &day)))
}

fn field<R, W, F>(
    input: &mut R,
    out: &mut W,
    preset: Option<String>,
    question: &str,
    validate: F,
) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> FilterResult<()>,
{
    if let Some(value) = preset {
        // validated at startup
        return Ok(Some(value));
    }

    loop {
        let answer = match ask(input, out, question)? {
            Some(answer) => answer,
            None => return Ok(None),
        };
        match validate(&answer) {
            Ok(()) => return Ok(Some(answer)),
            Err(e) => writeln!(out, "{}", e.to_string().red())?,
        }
    }
}
