//! Main CLI application

use crate::config::{load_config_auto, parse_config_file, validate_config, Config};
use crate::error::Result;
use crate::session::{validate_presets, FilterPresets, Session, Verbosity};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Build the clap command
fn build_command() -> Command {
    Command::new("bikeshare")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Explore US bikeshare trip data from the terminal")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to bikeshare.yml config file"),
        )
        .arg(
            Arg::new("data-dir")
                .short('d')
                .long("data-dir")
                .value_name("DIR")
                .help("Directory containing the city CSV files"),
        )
        .arg(
            Arg::new("city")
                .long("city")
                .value_name("CITY")
                .help("Answer the city prompt up front"),
        )
        .arg(
            Arg::new("month")
                .long("month")
                .value_name("MONTH")
                .help("Answer the month prompt up front (january through june, or all)"),
        )
        .arg(
            Arg::new("day")
                .long("day")
                .value_name("DAY")
                .help("Answer the day prompt up front (a weekday name, or all)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress diagnostics such as per-report timing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print statistics and prompts only")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Resolve the configuration from --file, discovery, or the default mapping
fn resolve_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<String>("file") {
        Some(path) => parse_config_file(&PathBuf::from(path))?,
        None => load_config_auto()?.0,
    };

    if let Some(dir) = matches.get_one::<String>("data-dir") {
        config.data_dir = Some(PathBuf::from(dir));
    }

    validate_config(&config)?;
    Ok(config)
}

/// Collect preset prompt answers from the command line
fn presets_from_matches(matches: &ArgMatches) -> FilterPresets {
    FilterPresets {
        city: matches.get_one::<String>("city").cloned(),
        month: matches.get_one::<String>("month").cloned(),
        day: matches.get_one::<String>("day").cloned(),
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let matches = build_command().get_matches();
    let verbosity = get_verbosity(&matches);

    let config = resolve_config(&matches)?;
    let presets = presets_from_matches(&matches);

    // a bad preset terminates before the session starts
    validate_presets(&config, &presets)?;

    let mut session = Session::new(config)
        .with_verbosity(verbosity)
        .with_presets(presets);
    session.run()
}
