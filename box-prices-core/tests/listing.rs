use box_prices_core::listing::{parse_listing, parse_listing_detailed, parse_price_line};

#[test]
fn ordinal_and_hyphen_separator() {
    let p = parse_price_line("3. Golden Idol - $12.50").unwrap();
    assert_eq!(p.name, "golden idol");
    assert_eq!(p.price, 12.50);
}

#[test]
fn em_dash_separator() {
    let p = parse_price_line("1. Fire Sword — $9.99").unwrap();
    assert_eq!(p.name, "fire sword");
    assert_eq!(p.price, 9.99);
}

#[test]
fn en_dash_separator() {
    let p = parse_price_line("Frost Bow – $4").unwrap();
    assert_eq!(p.name, "frost bow");
    assert_eq!(p.price, 4.0);
}

#[test]
fn no_separator() {
    let p = parse_price_line("2. Ice Shield $15").unwrap();
    assert_eq!(p.name, "ice shield");
    assert_eq!(p.price, 15.0);
}

#[test]
fn us_dollar_prefix() {
    let p = parse_price_line("Dragon Egg — US$120").unwrap();
    assert_eq!(p.name, "dragon egg");
    assert_eq!(p.price, 120.0);

    let p = parse_price_line("Dragon Egg — us$7.5").unwrap();
    assert_eq!(p.price, 7.5);
}

#[test]
fn tilde_marks_approximate_price() {
    let p = parse_price_line("Old Map ~$3.20").unwrap();
    assert_eq!(p.name, "old map");
    assert_eq!(p.price, 3.20);

    let p = parse_price_line("Old Map $~3.20").unwrap();
    assert_eq!(p.price, 3.20);
}

#[test]
fn splits_on_last_dollar() {
    let p = parse_price_line("Bag of $ Coins - $2.25").unwrap();
    assert_eq!(p.name, "bag of coins");
    assert_eq!(p.price, 2.25);
}

#[test]
fn trailing_text_after_amount_is_ignored() {
    let p = parse_price_line("Lucky Charm $1.10 each").unwrap();
    assert_eq!(p.price, 1.10);
}

#[test]
fn thousands_separator_is_dropped() {
    let p = parse_price_line("Crown — $1,499.00").unwrap();
    assert_eq!(p.price, 1499.0);
}

#[test]
fn line_without_dollar_is_skipped() {
    assert!(parse_price_line("Fire Sword 9.99").is_none());
}

#[test]
fn unparseable_amount_is_skipped() {
    assert!(parse_price_line("Fire Sword $").is_none());
    assert!(parse_price_line("Fire Sword $TBD").is_none());
    assert!(parse_price_line("Fire Sword $1.2.3").is_none());
}

#[test]
fn header_lines_are_skipped_case_insensitively() {
    for header in ["RARES", "rares", "Uncommon", "  EPICS  ", "LeGeNdArIeS"] {
        assert!(parse_price_line(header).is_none(), "{header} produced a price");
    }
    let table = parse_listing("RARES\n");
    assert!(table.is_empty());
}

#[test]
fn header_word_inside_name_is_not_a_header() {
    let p = parse_price_line("Rares Pack $5").unwrap();
    assert_eq!(p.name, "rares pack");
}

#[test]
fn later_duplicate_wins() {
    let table = parse_listing("Fire Sword $1\nIce Shield $2\nfire-sword $3");
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("fire sword"), Some(3.0));
    assert_eq!(table.entries()[0].name, "fire sword");
}

#[test]
fn accents_fold_into_one_key() {
    let table = parse_listing("Café Lance $4\nCafe Lance $6");
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("cafe lance"), Some(6.0));
}

#[test]
fn stats_count_every_line() {
    let raw = "UNCOMMON\n\n1. Fire Sword — $9.99\nno price here\n2. Fire Sword $10\nRARES\n3. Bad $x";
    let (table, stats) = parse_listing_detailed(raw);
    assert_eq!(table.len(), 1);
    assert_eq!(stats.lines, 7);
    assert_eq!(stats.blank, 1);
    assert_eq!(stats.headers, 2);
    assert_eq!(stats.malformed, 2);
    assert_eq!(stats.overwritten, 1);
}

#[test]
fn mixed_listing_keeps_order() {
    let raw = "UNCOMMON\n1. Fire Sword — $9.99\nUNCOMMON\n2. Ice Shield $15";
    let table = parse_listing(raw);
    let names: Vec<&str> = table.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["fire sword", "ice shield"]);
    assert_eq!(table.get("fire sword"), Some(9.99));
    assert_eq!(table.get("ice shield"), Some(15.0));
}

#[test]
fn bare_carriage_returns_separate_lines() {
    let table = parse_listing("Fire Sword $1\rIce Shield $2");
    let entries: Vec<(&str, f64)> = table.iter().map(|e| (e.name.as_str(), e.price)).collect();
    assert_eq!(entries, vec![("fire sword", 1.0), ("ice shield", 2.0)]);
}

#[test]
fn unicode_line_separators_split_lines() {
    let table = parse_listing("RARES\u{2028}Fire Sword $1\u{2029}Ice Shield $2\u{85}Old Map $3");
    assert_eq!(table.len(), 3);
    assert_eq!(table.get("fire sword"), Some(1.0));
    assert_eq!(table.get("ice shield"), Some(2.0));
    assert_eq!(table.get("old map"), Some(3.0));
}

#[test]
fn crlf_counts_as_one_line_break() {
    let (table, stats) = parse_listing_detailed("UNCOMMON\r\nFire Sword $1\r\n");
    assert_eq!(table.len(), 1);
    assert_eq!(stats.lines, 2);
    assert_eq!(stats.blank, 0);
}
