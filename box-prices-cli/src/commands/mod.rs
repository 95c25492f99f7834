pub(crate) mod assets;
pub(crate) mod config;
pub(crate) mod prices;
pub(crate) mod run;

/// Format a price the way listings write it.
pub(crate) fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
