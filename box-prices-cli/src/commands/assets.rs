use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use box_prices_lib::settings::Settings;
use box_prices_lib::{Rarity, scan_assets};

use crate::error::CliError;

/// Print catalog assets, grouped by rarity folder. `only` limits the output
/// to the given rarities.
pub(crate) fn run_assets(settings: &Settings, only: Option<&[Rarity]>) -> Result<(), CliError> {
    let assets: Vec<_> = scan_assets(&settings.assets.path)?
        .into_iter()
        .filter(|a| only.is_none_or(|r| r.contains(&a.rarity)))
        .collect();

    for &rarity in Rarity::all() {
        if only.is_some_and(|r| !r.contains(&rarity)) {
            continue;
        }
        let names: Vec<&str> = assets
            .iter()
            .filter(|a| a.rarity == rarity)
            .map(|a| a.name.as_str())
            .collect();

        log::info!(
            "{} [{}] ({})",
            rarity.if_supports_color(Stdout, |t| t.bold()),
            rarity.dir_name().if_supports_color(Stdout, |t| t.cyan()),
            names.len(),
        );
        for name in names {
            log::info!("  {}", name);
        }
    }

    log::info!("");
    log::info!("Total: {} assets", assets.len());

    Ok(())
}
