//! Core types for box-prices: name normalization, rarity buckets, and the
//! price listing parser.
//!
//! Everything here is pure. Filesystem access lives in `box-prices-lib`.

pub mod listing;
pub mod normalize;
pub mod price_table;
pub mod rarity;

pub use listing::{
    ListingStats, ParsedLine, PriceLine, classify_line, parse_listing, parse_listing_detailed,
    parse_price_line,
};
pub use normalize::{normalize, tokens};
pub use price_table::{PriceEntry, PriceTable};
pub use rarity::{Rarity, RarityParseError};
