//! box-prices CLI
//!
//! Turns a pasted price listing into a JSON price table keyed by the image
//! assets of the item catalog.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use box_prices_lib::settings::{Overrides, resolve_settings};

use cli_types::{Cli, Commands};
use commands::assets::run_assets;
use commands::config::run_config_show;
use commands::prices::run_prices;
use commands::run::run_match;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    if let Err(e) = dispatch(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), CliError> {
    let cwd = std::env::current_dir()?;
    let overrides = Overrides {
        config: cli.config,
        listing: cli.listing,
        assets: cli.assets,
        output: cli.output,
    };
    let settings = resolve_settings(&overrides, &cwd)?;

    match cli.command.unwrap_or(Commands::Run { dry_run: false }) {
        Commands::Run { dry_run } => run_match(&settings, dry_run),
        Commands::Prices => run_prices(&settings),
        Commands::Assets { rarity } => run_assets(&settings, rarity.as_deref()),
        Commands::Config => {
            run_config_show(&settings);
            Ok(())
        }
    }
}
