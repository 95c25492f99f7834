use std::collections::HashMap;

/// A single parsed price, keyed by normalized item name.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEntry {
    /// Normalized item name (see [`crate::normalize::normalize`]).
    pub name: String,
    /// Non-negative, finite price.
    pub price: f64,
}

/// Insertion-ordered map from normalized name to price.
///
/// Iteration follows first-insertion order. Re-inserting an existing name
/// updates the price in place without moving the entry, so fuzzy-match tie
/// breaks stay reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    /// Backing store, in first-insertion order
    entries: Vec<PriceEntry>,
    /// Normalized name → index into `entries`
    by_name: HashMap<String, usize>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a price. Returns the previous price if the name
    /// was already present.
    pub fn insert(&mut self, name: impl Into<String>, price: f64) -> Option<f64> {
        let name = name.into();
        if let Some(&idx) = self.by_name.get(&name) {
            let previous = self.entries[idx].price;
            self.entries[idx].price = price;
            return Some(previous);
        }

        self.by_name.insert(name.clone(), self.entries.len());
        self.entries.push(PriceEntry { name, price });
        None
    }

    /// Exact lookup by normalized name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.by_name.get(name).map(|&idx| self.entries[idx].price)
    }

    /// Entries in first-insertion order.
    pub fn entries(&self) -> &[PriceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PriceTable {
    type Item = &'a PriceEntry;
    type IntoIter = std::slice::Iter<'a, PriceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = PriceTable::new();
        for (name, price) in iter {
            table.insert(name, price);
        }
        table
    }
}
