//! Filesystem-facing half of box-prices: catalog scanning, matching, the
//! persisted mapping, and settings resolution.

pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod report;
pub mod scanner;
pub mod settings;

pub use box_prices_core::{PriceEntry, PriceTable, Rarity, normalize};
pub use error::Error;
pub use matcher::{
    AssetMatch, FUZZY_THRESHOLD, FuzzyCandidate, MatchOutcome, MatchReport, PriceMatcher,
    match_assets,
};
pub use pipeline::{RunOutput, read_listing, run};
pub use report::{FinalMapping, MatchSummary, to_json_pretty, write_final_mapping};
pub use scanner::{AssetEntry, IMAGE_EXTENSIONS, scan_assets};
pub use settings::{Overrides, Resolved, SettingSource, Settings, resolve_settings};
