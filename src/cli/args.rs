//! Command-line argument definitions.
//!
//! Defines the CLI surface with the clap derive API: a `search`
//! subcommand for terminal queries and an `export` subcommand for the
//! offline HTML preview. Mode exclusivity and required arguments are
//! enforced by clap before any data file is touched.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

use crate::constants::{DEFAULT_DATA_PATH, DEFAULT_OUTPUT_PATH};

/// Top-level arguments for the card shop tool.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "momotetsu-cards",
    version,
    about = "Search Momotetsu World card shop listings or export them as an offline HTML page",
    long_about = "Looks up which trading cards the card shops in Momotaro Dentetsu World sell, \
                  station by station. Queries match station or card names exactly but ignore \
                  letter case. The export command renders the whole dataset into a single \
                  self-contained HTML page with the same search built in, usable offline."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Query the dataset by station, by card, or list everything
    Search(SearchArgs),
    /// Generate the self-contained HTML preview page
    Export(ExportArgs),
}

/// The query mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode<'a> {
    /// Look up one station's cards.
    Station(&'a str),
    /// Look up the stations selling one card.
    Card(&'a str),
    /// List every listing in dataset order.
    Preview,
}

/// Arguments for the search command.
///
/// Exactly one of `--station`, `--card`, `--preview` must be given;
/// clap rejects zero or several with a usage error.
#[derive(Debug, Clone, Parser)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(false)
        .args(["station", "card", "preview"])
))]
pub struct SearchArgs {
    /// Dataset location
    #[arg(
        long = "data",
        value_name = "PATH",
        default_value = DEFAULT_DATA_PATH,
        help = "Path to the card shop JSON dataset"
    )]
    pub data: PathBuf,

    /// Station to look up
    #[arg(
        long = "station",
        value_name = "NAME",
        help = "Show the cards sold at this station (case-insensitive exact match)"
    )]
    pub station: Option<String>,

    /// Card to look up
    #[arg(
        long = "card",
        value_name = "NAME",
        help = "Show the stations selling this card (case-insensitive exact match)"
    )]
    pub card: Option<String>,

    /// List the whole dataset
    #[arg(long = "preview", help = "List every registered station and its cards")]
    pub preview: bool,

    /// Logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Quiet mode
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl SearchArgs {
    /// The selected query mode.
    ///
    /// clap guarantees exactly one mode flag was given, so the fallback
    /// arm is never reached in practice.
    pub fn mode(&self) -> QueryMode<'_> {
        if let Some(name) = &self.station {
            QueryMode::Station(name)
        } else if let Some(name) = &self.card {
            QueryMode::Card(name)
        } else {
            QueryMode::Preview
        }
    }

    /// Determine the log level from the verbosity flags.
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

/// Arguments for the export command.
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Dataset location
    #[arg(
        long = "data",
        value_name = "PATH",
        default_value = DEFAULT_DATA_PATH,
        help = "Path to the card shop JSON dataset"
    )]
    pub data: PathBuf,

    /// Where to write the page
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_PATH,
        help = "Path of the generated HTML file"
    )]
    pub output: PathBuf,

    /// Logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Quiet mode
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl ExportArgs {
    /// Determine the log level from the verbosity flags.
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
