//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use box_prices_lib::Rarity;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "box-prices")]
#[command(about = "Match free-text price listings to catalog image assets", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (per-asset match decisions)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to ./box-prices.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Price listing text file
    #[arg(long, global = true)]
    pub listing: Option<PathBuf>,

    /// Asset directory containing the rarity folders
    #[arg(long, global = true)]
    pub assets: Option<PathBuf>,

    /// Where to write the JSON price mapping
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Command to run (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Parse prices, match every asset, and write the mapping
    Run {
        /// Print the report and the mapping without writing it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Show every price parsed from the listing
    Prices,

    /// Show every asset found in the catalog, grouped by rarity
    Assets {
        /// Rarity folders to show (e.g., rares,epics); all when omitted
        #[arg(short, long, value_delimiter = ',')]
        rarity: Option<Vec<Rarity>>,
    },

    /// Show resolved paths and where each came from
    Config,
}
