use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use box_prices_lib::read_listing;
use box_prices_lib::settings::Settings;

use super::format_price;
use crate::error::CliError;

/// Print the parsed price table in listing order.
pub(crate) fn run_prices(settings: &Settings) -> Result<(), CliError> {
    let (prices, stats) = read_listing(&settings.listing.path)?;

    log::info!(
        "{} {}",
        "Prices from".if_supports_color(Stdout, |t| t.bold()),
        settings.listing.path.display(),
    );
    log::info!("");

    let width = prices.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in &prices {
        log::info!(
            "  {:<width$}  {}",
            entry.name,
            format_price(entry.price).if_supports_color(Stdout, |t| t.green()),
        );
    }

    log::info!("");
    log::info!(
        "{} prices from {} lines ({} headers, {} skipped, {} overwritten)",
        prices.len(),
        stats.lines,
        stats.headers,
        stats.malformed,
        stats.overwritten,
    );

    Ok(())
}
