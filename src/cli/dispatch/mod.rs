use crate::{
    cli::actions::Action,
    config::Config,
    month::{self, DateRange},
};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::ArgMatches;
use std::path::Path;

/// Months added to `today` when `--from-date` is omitted on `create`.
const CREATE_DEFAULT_OFFSET: i32 = 1;

/// Months added to `today` when `--from-date` is omitted on `drop`.
const DROP_DEFAULT_OFFSET: i32 = -6;

/// Convert `ArgMatches` into typed Action enum with validation
///
/// Loads the configuration file, parses the optional `YYYY-MM` arguments and
/// resolves the month range against `today` with the per-command default
/// offset. Everything here runs before any database interaction.
///
/// # Errors
///
/// Returns an error when the configuration file cannot be loaded or a date
/// argument is malformed.
pub fn dispatch(matches: &ArgMatches, today: NaiveDate) -> Result<Action> {
    match matches.subcommand() {
        Some(("create", sub)) => {
            let config = load_config(sub)?;
            let range = resolve_range(sub, today, CREATE_DEFAULT_OFFSET)?;

            Ok(Action::Create { config, range })
        }
        Some(("drop", sub)) => {
            let config = load_config(sub)?;
            let range = resolve_range(sub, today, DROP_DEFAULT_OFFSET)?;
            let service = sub.get_one::<String>("service").cloned();
            let dry_run = sub.get_flag("dry-run");

            Ok(Action::Drop {
                config,
                range,
                service,
                dry_run,
            })
        }
        _ => bail!("a subcommand is required"),
    }
}

fn load_config(matches: &ArgMatches) -> Result<Config> {
    let path = matches
        .get_one::<String>("config_file")
        .context("config file is required")?;

    Ok(Config::from_file(Path::new(path))?)
}

fn resolve_range(matches: &ArgMatches, today: NaiveDate, default_offset: i32) -> Result<DateRange> {
    let from = matches
        .get_one::<String>("from-date")
        .map(|raw| month::parse_month(raw))
        .transpose()?;
    let to = matches
        .get_one::<String>("to-date")
        .map(|raw| month::parse_month(raw))
        .transpose()?;

    Ok(month::resolve_range(from, to, today, default_offset))
}
