//! Display-name normalization.
//!
//! Price listings and asset filenames spell the same item differently
//! ("Café Sword — Deluxe" vs `cafe_sword_deluxe.png`). Both sides are reduced
//! to the same canonical token string before they are compared.

use std::collections::BTreeSet;

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

/// Normalize a display name into a comparable join key.
///
/// Accents are stripped via canonical decomposition. Only nonspacing marks
/// are dropped; spacing and enclosing marks act as separators. Every run of
/// characters that are not ASCII letters or digits collapses to a single
/// space, and the result is trimmed and lower-cased.
///
/// ```
/// use box_prices_core::normalize::normalize;
///
/// assert_eq!(normalize("Café  Sword"), "cafe sword");
/// assert_eq!(normalize("--Ice_Shield--"), "ice shield");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;

    for c in name.nfd().filter(|&c| !is_nonspacing_mark(c)) {
        if c.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_space = true;
        }
    }

    out
}

fn is_nonspacing_mark(c: char) -> bool {
    get_general_category(c) == GeneralCategory::NonspacingMark
}

/// Split an already-normalized name into its set of distinct tokens.
pub fn tokens(normalized: &str) -> BTreeSet<&str> {
    normalized.split_whitespace().collect()
}
