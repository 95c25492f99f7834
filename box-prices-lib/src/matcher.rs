use std::collections::{BTreeSet, HashSet};

use box_prices_core::{PriceEntry, PriceTable, normalize, tokens};

use crate::report::{FinalMapping, MatchSummary};

/// Minimum token-overlap score for a fuzzy match to count.
pub const FUZZY_THRESHOLD: f64 = 0.5;

/// How an asset got (or did not get) its price.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Normalized asset name is a key of the price table
    Exact { price: f64 },
    /// Best token-overlap candidate scored at least [`FUZZY_THRESHOLD`]
    Fuzzy {
        price: f64,
        score: f64,
        /// Normalized name of the price entry that won
        price_name: String,
    },
    /// No exact key and no candidate above the threshold
    Unmatched,
}

impl MatchOutcome {
    pub fn price(&self) -> Option<f64> {
        match self {
            Self::Exact { price } | Self::Fuzzy { price, .. } => Some(*price),
            Self::Unmatched => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        !matches!(self, Self::Unmatched)
    }
}

/// The highest-scoring price entry for a fuzzy lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyCandidate<'a> {
    pub entry: &'a PriceEntry,
    pub score: f64,
}

/// A read-only view of a price table prepared for matching.
///
/// Token sets for every price entry are computed once up front, in table
/// order, so each asset lookup is a single pass over the table.
pub struct PriceMatcher<'a> {
    table: &'a PriceTable,
    /// Token set per entry, parallel to `table.entries()`
    entry_tokens: Vec<BTreeSet<&'a str>>,
}

impl<'a> PriceMatcher<'a> {
    pub fn new(table: &'a PriceTable) -> Self {
        let entry_tokens = table.iter().map(|e| tokens(&e.name)).collect();
        Self {
            table,
            entry_tokens,
        }
    }

    /// Match one asset name (as found on disk, not yet normalized).
    ///
    /// An exact key hit always wins; the fuzzy pass only runs without one.
    pub fn match_name(&self, asset_name: &str) -> MatchOutcome {
        let normalized = normalize(asset_name);

        if let Some(price) = self.table.get(&normalized) {
            return MatchOutcome::Exact { price };
        }

        match self.best_fuzzy(&normalized) {
            Some(candidate) if candidate.score >= FUZZY_THRESHOLD => MatchOutcome::Fuzzy {
                price: candidate.entry.price,
                score: candidate.score,
                price_name: candidate.entry.name.clone(),
            },
            _ => MatchOutcome::Unmatched,
        }
    }

    /// Find the price entry whose tokens are best covered by `normalized`.
    ///
    /// The score is `|asset ∩ entry| / |entry|`: the denominator is the price
    /// entry's token count, so a short entry fully contained in a long asset
    /// name scores 1.0. Entries without tokens are skipped. Ties go to the
    /// entry that comes first in table order. Returns `None` when nothing
    /// shares a token.
    pub fn best_fuzzy(&self, normalized: &str) -> Option<FuzzyCandidate<'a>> {
        let asset_tokens = tokens(normalized);
        let mut best: Option<FuzzyCandidate<'a>> = None;
        let mut best_score = 0.0;

        for (entry, entry_tokens) in self.table.iter().zip(&self.entry_tokens) {
            if entry_tokens.is_empty() {
                continue;
            }
            let shared = entry_tokens
                .iter()
                .filter(|t| asset_tokens.contains(**t))
                .count();
            let score = shared as f64 / entry_tokens.len() as f64;
            if score > best_score {
                best_score = score;
                best = Some(FuzzyCandidate { entry, score });
            }
        }

        best
    }
}

/// One asset and how it was priced.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetMatch {
    pub asset: String,
    pub outcome: MatchOutcome,
}

/// Result of matching a whole catalog against a price table.
#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    /// One entry per distinct asset name, in first-enumeration order
    pub matches: Vec<AssetMatch>,
    /// Number of entries in the price table
    pub price_count: usize,
    /// Number of assets enumerated, duplicates included
    pub asset_count: usize,
}

impl MatchReport {
    /// Names of assets left without a price, in enumeration order.
    pub fn unmatched(&self) -> impl Iterator<Item = &str> {
        self.matches
            .iter()
            .filter(|m| !m.outcome.is_matched())
            .map(|m| m.asset.as_str())
    }

    pub fn unmatched_count(&self) -> usize {
        self.unmatched().count()
    }

    pub fn exact_count(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| matches!(m.outcome, MatchOutcome::Exact { .. }))
            .count()
    }

    pub fn fuzzy_count(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| matches!(m.outcome, MatchOutcome::Fuzzy { .. }))
            .count()
    }

    /// The asset → price-or-null mapping that gets persisted.
    pub fn final_mapping(&self) -> FinalMapping {
        self.matches
            .iter()
            .map(|m| (m.asset.clone(), m.outcome.price()))
            .collect()
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            prices: self.price_count,
            assets: self.asset_count,
            unmatched: self.unmatched().map(str::to_string).collect(),
        }
    }
}

/// Match every asset name against `table`.
///
/// Each distinct name is matched once and keeps its first position; repeated
/// names (the same stem under two rarities, or `x.png` next to `x.jpg`) still
/// count toward `asset_count`.
pub fn match_assets<I, S>(assets: I, table: &PriceTable) -> MatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let matcher = PriceMatcher::new(table);
    let mut seen: HashSet<String> = HashSet::new();
    let mut report = MatchReport {
        price_count: table.len(),
        ..Default::default()
    };

    for asset in assets {
        let asset = asset.as_ref();
        report.asset_count += 1;
        if !seen.insert(asset.to_string()) {
            log::debug!("Duplicate asset name {asset:?}, keeping first");
            continue;
        }

        let outcome = matcher.match_name(asset);
        match &outcome {
            MatchOutcome::Exact { price } => log::debug!("{asset}: exact ${price}"),
            MatchOutcome::Fuzzy {
                price,
                score,
                price_name,
            } => log::debug!("{asset}: fuzzy ${price} via {price_name:?} (score {score:.2})"),
            MatchOutcome::Unmatched => log::debug!("{asset}: no match"),
        }

        report.matches.push(AssetMatch {
            asset: asset.to_string(),
            outcome,
        });
    }

    report
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
