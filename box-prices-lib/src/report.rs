//! The persisted asset → price mapping and the operator summary.

use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Error;

/// Asset name → price, or `None` when no price could be matched.
///
/// Serializes as a JSON object whose keys keep insertion order, with `null`
/// for unmatched assets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinalMapping {
    entries: Vec<(String, Option<f64>)>,
}

impl FinalMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Callers are expected to pass each asset once.
    pub fn push(&mut self, asset: impl Into<String>, price: Option<f64>) {
        self.entries.push((asset.into(), price));
    }

    /// `Some(None)` means the asset is present but unmatched.
    pub fn get(&self, asset: &str) -> Option<Option<f64>> {
        self.entries
            .iter()
            .find(|(name, _)| name == asset)
            .map(|(_, price)| *price)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.entries.iter().map(|(name, price)| (name.as_str(), *price))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Option<f64>)> for FinalMapping {
    fn from_iter<I: IntoIterator<Item = (S, Option<f64>)>>(iter: I) -> Self {
        let mut mapping = FinalMapping::new();
        for (asset, price) in iter {
            mapping.push(asset, price);
        }
        mapping
    }
}

impl Serialize for FinalMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, price) in &self.entries {
            map.serialize_entry(name, price)?;
        }
        map.end()
    }
}

/// Counts shown to the operator after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSummary {
    /// Entries in the parsed price table
    pub prices: usize,
    /// Assets enumerated from the catalog
    pub assets: usize,
    /// Assets without a price, in enumeration order
    pub unmatched: Vec<String>,
}

/// Render the mapping as pretty-printed JSON (2-space indent, UTF-8 names
/// kept verbatim, no trailing newline).
pub fn to_json_pretty(mapping: &FinalMapping) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(mapping)?)
}

/// Write the mapping to `path`, replacing whatever is there.
///
/// Writes a sibling temp file first and renames it into place, so a failed
/// write never leaves a half-written mapping behind.
pub fn write_final_mapping(path: &Path, mapping: &FinalMapping) -> Result<(), Error> {
    let json = to_json_pretty(mapping)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::write_output(path, e))?;
    }

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).map_err(|e| Error::write_output(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| Error::write_output(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FinalMapping {
        [
            ("fire_sword", Some(9.99)),
            ("Ice-Shield", Some(15.0)),
            ("Mystery Box", None),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn json_keeps_insertion_order_and_nulls() {
        let json = to_json_pretty(&sample()).unwrap();
        assert_eq!(
            json,
            "{\n  \"fire_sword\": 9.99,\n  \"Ice-Shield\": 15.0,\n  \"Mystery Box\": null\n}"
        );
    }

    #[test]
    fn json_keeps_accents_verbatim() {
        let mapping: FinalMapping = [("Épée Dorée", Some(2.5))].into_iter().collect();
        let json = to_json_pretty(&mapping).unwrap();
        assert!(json.contains("\"Épée Dorée\": 2.5"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn empty_mapping_is_empty_object() {
        assert_eq!(to_json_pretty(&FinalMapping::new()).unwrap(), "{}");
    }

    #[test]
    fn get_distinguishes_missing_from_unmatched() {
        let mapping = sample();
        assert_eq!(mapping.get("fire_sword"), Some(Some(9.99)));
        assert_eq!(mapping.get("Mystery Box"), Some(None));
        assert_eq!(mapping.get("nope"), None);
    }
}
