use crate::config::ResolvedConfig;
use crate::constants::*;
use crate::errors::{AppError, AppResult};
use crate::fetch::fetch_entries;
use crate::models::{BatchReport, FileFormat, Region};
use crate::retriever::Connector;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{info, warn};

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the command-line definition.
pub fn build_command() -> Command {
    Command::new("fetchpdb")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .after_help("Example:\n  fetchpdb -format cif -region eu 1abc 4hhb")
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help(FORMAT_HELP_TEXT)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("region")
                .short('r')
                .long("region")
                .help(REGION_HELP_TEXT)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML config file")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .help("Existing directory to write files into [default: .]")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("ids")
                .help("Entry identifiers (e.g. 1abc 4hhb)")
                .num_args(0..)
                .action(ArgAction::Append),
        )
}

/// Positional identifiers, in command-line order.
pub fn positional_ids(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("ids")
        .map(|ids| ids.cloned().collect())
        .unwrap_or_default()
}

/// Merges the optional config file with command-line overrides.
///
/// Precedence: flag, then config file, then built-in default.
pub fn resolve_config(matches: &ArgMatches) -> AppResult<ResolvedConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ResolvedConfig::from_toml_file(path)?,
        None => ResolvedConfig::default(),
    };

    if let Some(format) = matches.get_one::<String>("format") {
        config.format = format.clone();
    }
    if let Some(region) = matches.get_one::<String>("region") {
        config.region = region.clone();
    }
    if let Some(output_dir) = matches.get_one::<PathBuf>("output_dir") {
        config.output_dir = output_dir.clone();
    }

    Ok(config)
}

/// Rewrites single-dash long flags (`-format cif`, `-region=eu`) into their `--` form.
///
/// Everything after a bare `--` is left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if after_separator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                after_separator = true;
                return arg;
            }
            let is_single_dash_long = SINGLE_DASH_LONG_FLAGS.iter().any(|flag| {
                text.strip_prefix('-')
                    .and_then(|rest| rest.strip_prefix(flag))
                    .is_some_and(|tail| tail.is_empty() || tail.starts_with('='))
            });
            if is_single_dash_long {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Parses command-line arguments and runs the download.
///
/// # Errors
///
/// Returns an error if:
/// - The config file cannot be read or parsed
/// - The region or format is not supported
/// - An identifier is malformed
/// - The mirror session cannot be opened, authenticated or closed
pub fn cli() -> AppResult<()> {
    cli_from(std::env::args_os(), ResolvedConfig::connector)?;
    Ok(())
}

/// Runs the command line given by `args` using the connector built by `connector_for`.
///
/// Prints the help text and returns `Ok(None)` without touching the network when fewer
/// than two identifiers are given.
pub fn cli_from<I, T, C, F>(args: I, connector_for: F) -> AppResult<Option<BatchReport>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    C: Connector,
    F: FnOnce(&ResolvedConfig) -> C,
{
    let cmd = build_command();
    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches_from(normalize_args(args));

    let ids = positional_ids(&matches);
    if ids.len() < MIN_POSITIONAL_IDS {
        cmd_for_help
            .print_help()
            .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        return Ok(None);
    }

    let config = resolve_config(&matches)?;
    let connector = connector_for(&config);
    run_workflow(&connector, &config, &ids).map(Some)
}

/// Selects the mirror and format from `config`, then fetches `ids` through `connector`.
///
/// Region and format are checked before anything else, so a bad selector never reaches
/// the network.
pub fn run_workflow<C: Connector>(
    connector: &C,
    config: &ResolvedConfig,
    ids: &[String],
) -> AppResult<BatchReport> {
    let region: Region = config.region.parse()?;
    let format: FileFormat = config.format.parse()?;
    let endpoint = region.endpoint();

    info!(
        region = region.code(),
        host = endpoint.host(),
        entries = ids.len(),
        output_dir = %config.output_dir.display(),
        "Starting download"
    );

    let report = fetch_entries(
        connector,
        &endpoint,
        &config.credentials(),
        ids,
        format,
        &config.output_dir,
    )?;

    let failed: Vec<String> = report
        .failures()
        .map(|o| o.task.local_file.display().to_string())
        .collect();
    if failed.is_empty() {
        info!(written = report.written_count(), "All entries downloaded");
    } else {
        warn!(
            written = report.written_count(),
            failed = failed.len(),
            files = failed.join(", ").as_str(),
            "Some entries were not downloaded"
        );
    }

    Ok(report)
}
