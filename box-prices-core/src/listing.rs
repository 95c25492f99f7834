//! Parser for free-text price listings.
//!
//! Listings are pasted from marketplace pages and look roughly like:
//! ```text
//! UNCOMMON
//! 1. Fire Sword — $9.99
//! 2. Ice Shield ~US$15
//! RARES
//! 12. Golden Idol - $12.50
//! ```
//!
//! Each line yields at most one price. Lines that cannot be read are dropped
//! without failing the parse.

use crate::normalize::normalize;
use crate::price_table::PriceTable;
use crate::rarity::Rarity;

/// A successfully parsed price line.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLine {
    /// Item name as written in the listing, with ordinal and dashes removed.
    pub display_name: String,
    /// Normalized join key.
    pub name: String,
    pub price: f64,
}

/// What a single listing line turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// Empty or whitespace-only.
    Blank,
    /// A bare rarity section header ("RARES").
    Header(Rarity),
    /// A name/price pair.
    Price(PriceLine),
    /// No `$`, or an amount that is not a number.
    Malformed,
}

/// Counters collected while parsing a whole listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingStats {
    pub lines: usize,
    pub blank: usize,
    pub headers: usize,
    pub malformed: usize,
    /// Price lines whose name was already present; the later value won.
    pub overwritten: usize,
}

/// Parse a whole listing into a price table. Later duplicates overwrite
/// earlier ones.
pub fn parse_listing(raw: &str) -> PriceTable {
    parse_listing_detailed(raw).0
}

/// Like [`parse_listing`], but also reports how each line was handled.
pub fn parse_listing_detailed(raw: &str) -> (PriceTable, ListingStats) {
    let mut table = PriceTable::new();
    let mut stats = ListingStats::default();

    for (lineno, line) in split_lines(raw).into_iter().enumerate() {
        stats.lines += 1;
        match classify_line(line) {
            ParsedLine::Blank => stats.blank += 1,
            ParsedLine::Header(_) => stats.headers += 1,
            ParsedLine::Malformed => {
                log::trace!("skipping line {}: {:?}", lineno + 1, line.trim());
                stats.malformed += 1;
            }
            ParsedLine::Price(p) => {
                if table.insert(p.name, p.price).is_some() {
                    stats.overwritten += 1;
                }
            }
        }
    }

    (table, stats)
}

/// Parse one line, returning the price only when the line carries one.
///
/// ```
/// use box_prices_core::listing::parse_price_line;
///
/// let p = parse_price_line("3. Golden Idol - $12.50").unwrap();
/// assert_eq!(p.name, "golden idol");
/// assert_eq!(p.price, 12.50);
///
/// assert!(parse_price_line("RARES").is_none());
/// ```
pub fn parse_price_line(line: &str) -> Option<PriceLine> {
    match classify_line(line) {
        ParsedLine::Price(p) => Some(p),
        _ => None,
    }
}

/// Classify a single listing line.
pub fn classify_line(line: &str) -> ParsedLine {
    let line = line.trim();
    if line.is_empty() {
        return ParsedLine::Blank;
    }
    if let Some(rarity) = Rarity::from_header(line) {
        return ParsedLine::Header(rarity);
    }

    let line = strip_ordinal(line)
        .replace("US$", "$")
        .replace("us$", "$")
        .replace('~', "");

    // Split on the last '$' so stray symbols in the name stay in the name
    let Some((name_part, amount_part)) = line.rsplit_once('$') else {
        return ParsedLine::Malformed;
    };

    let Some(price) = parse_amount(amount_part) else {
        return ParsedLine::Malformed;
    };

    let display_name = name_part
        .replace(['\u{2014}', '\u{2013}', '-'], " ")
        .trim_matches(|c: char| c.is_whitespace() || is_dash(c))
        .to_string();

    ParsedLine::Price(PriceLine {
        name: normalize(&display_name),
        display_name,
        price,
    })
}

// ── Internal parsing ────────────────────────────────────────────────────────

/// Characters that end a listing line. `\r\n` counts as a single break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Split a listing into lines on every Unicode line boundary, not only `\n`.
///
/// Listings saved with bare `\r` endings or pasted with U+2028 separators
/// would otherwise collapse into one line. A trailing break does not produce
/// an extra empty line.
fn split_lines(raw: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = raw.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }
        lines.push(&raw[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < raw.len() {
        lines.push(&raw[start..]);
    }
    lines
}

/// Strip a leading "12." ordinal and any whitespace after it.
fn strip_ordinal(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    match rest.strip_prefix('.') {
        Some(after) => after.trim_start(),
        None => line,
    }
}

/// Keep only digits and decimal points, then read the result as a number.
fn parse_amount(amount: &str) -> Option<f64> {
    let cleaned: String = amount
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_dash(c: char) -> bool {
    matches!(c, '-' | '\u{2013}' | '\u{2014}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_on_every_line_boundary() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\u{2028}b\u{2029}c"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\u{0b}b\u{0c}c\u{85}d"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\u{1c}b\u{1d}c\u{1e}d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn split_lines_edges() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\r\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn strip_ordinal_variants() {
        assert_eq!(strip_ordinal("12. Item"), "Item");
        assert_eq!(strip_ordinal("3.Item"), "Item");
        assert_eq!(strip_ordinal("Item 3."), "Item 3.");
        assert_eq!(strip_ordinal("47 Ronin $3"), "47 Ronin $3");
        assert_eq!(strip_ordinal("9.99"), "99");
    }

    #[test]
    fn parse_amount_variants() {
        assert_eq!(parse_amount("9.99"), Some(9.99));
        assert_eq!(parse_amount(" 1,250.00 USD"), Some(1250.0));
        assert_eq!(parse_amount("5."), Some(5.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("."), None);
    }

    #[test]
    fn classify_blank_and_header() {
        assert_eq!(classify_line("   "), ParsedLine::Blank);
        assert_eq!(classify_line("Epics"), ParsedLine::Header(Rarity::Epics));
    }

    #[test]
    fn classify_missing_dollar_is_malformed() {
        assert_eq!(classify_line("1. Fire Sword 9.99"), ParsedLine::Malformed);
    }

    #[test]
    fn display_name_keeps_original_spelling() {
        let p = parse_price_line("7. Café Sword — $3").unwrap();
        assert_eq!(p.display_name, "Café Sword");
        assert_eq!(p.name, "cafe sword");
    }
}
