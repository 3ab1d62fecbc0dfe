//! Interactive session loop
//!
//! Orchestrates one full pass (collect filters -> load data -> run the four
//! reports -> page raw data) and repeats while the user asks to restart.

pub mod pager;
pub mod prompt;

// Re-export main types
pub use pager::*;
pub use prompt::*;

use crate::config::Config;
use crate::data::{load_dataset, Dataset};
use crate::error::{ReportError, Result};
use crate::report::{duration, station, time, user};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Separator printed after each report section
const SEPARATOR: &str = "----------------------------------------";

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

/// Interactive session driver
pub struct Session {
    /// City dataset mapping
    config: Config,

    /// Verbosity level
    verbosity: Verbosity,

    /// Command-line preset answers, consumed by the first iteration
    presets: FilterPresets,
}

impl Session {
    /// Create a session with default settings
    pub fn new(config: Config) -> Self {
        Session {
            config,
            verbosity: Verbosity::Normal,
            presets: FilterPresets::default(),
        }
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set preset answers for the first iteration
    pub fn with_presets(mut self, presets: FilterPresets) -> Self {
        self.presets = presets;
        self
    }

    /// Run the session loop on stdin/stdout
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(&mut stdin.lock(), &mut stdout.lock())
    }

    /// Run the session loop on the given streams
    ///
    /// An error inside a pass is reported and control returns to the
    /// restart prompt; only a non-"yes" restart answer (or end of input)
    /// ends the loop.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        loop {
            match self.run_iteration(input, out) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) => self.print_error(&e.to_string()),
            }

            if !confirm(input, out, "\nWould you like to restart? Enter yes or no.")? {
                break;
            }
        }
        Ok(())
    }

    /// One collect -> load -> report -> page pass
    ///
    /// Returns `Ok(false)` when the input stream is exhausted.
    fn run_iteration<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<bool> {
        let title = self.config.name.as_deref().unwrap_or("US bikeshare");
        writeln!(out, "Hello! Let's explore some {} data!", title)?;

        let presets = std::mem::take(&mut self.presets);
        let filters = match collect_filters(input, out, &self.config, presets)? {
            Some(filters) => filters,
            None => return Ok(false),
        };

        let dataset = load_dataset(&self.config, &filters)?;
        self.print_debug(&format!(
            "{} trips for {} after filtering",
            dataset.len(),
            dataset.city
        ));
        if dataset.is_empty() {
            return Err(ReportError::EmptyDataset.into());
        }

        self.run_reports(&dataset, out)?;
        page_trips(&dataset, input, out)?;
        Ok(true)
    }

    /// Run all four reports in their fixed order
    fn run_reports<W: Write>(&self, dataset: &Dataset, out: &mut W) -> Result<()> {
        self.section(out, "Calculating the most frequent times of travel...", |out| {
            let stats = time::compute(dataset)?;
            time::render(&stats, out)?;
            Ok(())
        })?;

        self.section(out, "Calculating the most popular stations and trip...", |out| {
            let stats = station::compute(dataset)?;
            station::render(&stats, out)?;
            Ok(())
        })?;

        self.section(out, "Calculating trip duration...", |out| {
            let stats = duration::compute(dataset)?;
            duration::render(&stats, out)?;
            Ok(())
        })?;

        self.section(out, "Calculating user stats...", |out| {
            let stats = user::compute(dataset)?;
            user::render(&stats, &dataset.city, out)?;
            Ok(())
        })?;

        Ok(())
    }

    /// Print a report section with its timing diagnostic and separator
    fn section<W, F>(&self, out: &mut W, title: &str, body: F) -> Result<()>
    where
        W: Write,
        F: FnOnce(&mut W) -> Result<()>,
    {
        writeln!(out, "\n{}\n", title.cyan().bold())?;
        let started = Instant::now();
        body(out)?;
        if self.verbosity >= Verbosity::Normal {
            writeln!(
                out,
                "\nThis took {:.4} seconds.",
                started.elapsed().as_secs_f64()
            )?;
        }
        writeln!(out, "{}", SEPARATOR)?;
        Ok(())
    }

    /// Print an error message
    fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", "Error:".red().bold(), message);
        }
    }

    /// Print a debug message (only in verbose mode)
    fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("[DEBUG] {}", message);
        }
    }
}
