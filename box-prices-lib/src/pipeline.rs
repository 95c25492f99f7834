//! End-to-end run: read the listing, scan the catalog, match.

use std::path::Path;

use box_prices_core::{ListingStats, PriceTable, parse_listing_detailed};

use crate::error::Error;
use crate::matcher::{MatchReport, match_assets};
use crate::scanner::{AssetEntry, scan_assets};

/// Everything produced by one run, before anything is written.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub prices: PriceTable,
    pub listing_stats: ListingStats,
    pub assets: Vec<AssetEntry>,
    pub report: MatchReport,
}

/// Read and parse the price listing at `path`.
pub fn read_listing(path: &Path) -> Result<(PriceTable, ListingStats), Error> {
    let raw = std::fs::read_to_string(path).map_err(|e| Error::read_listing(path, e))?;
    Ok(parse_listing_detailed(&raw))
}

/// Parse the listing, enumerate the catalog and match every asset.
///
/// The price table is complete before matching starts and is only read from
/// afterwards.
pub fn run(listing: &Path, asset_root: &Path) -> Result<RunOutput, Error> {
    let (prices, listing_stats) = read_listing(listing)?;
    log::debug!(
        "Listing: {} lines, {} headers, {} blank, {} skipped, {} overwritten",
        listing_stats.lines,
        listing_stats.headers,
        listing_stats.blank,
        listing_stats.malformed,
        listing_stats.overwritten,
    );

    let assets = scan_assets(asset_root)?;
    let report = match_assets(assets.iter().map(|a| a.name.as_str()), &prices);

    Ok(RunOutput {
        prices,
        listing_stats,
        assets,
        report,
    })
}
