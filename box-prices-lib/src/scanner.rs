//! Directory scanner for the asset catalog.
//!
//! The catalog is a base directory with one subdirectory per rarity:
//! ```text
//! box2/
//!   uncommon/fire_sword.png
//!   rares/Ice-Shield.jpg
//!   epics/
//!   legendaries/
//! ```
//! Every image file's stem is a candidate item name.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use box_prices_core::Rarity;

use crate::error::Error;

/// Image extensions recognized in the catalog (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// One image file found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// File stem, exactly as on disk (accents and casing preserved).
    pub name: String,
    /// Rarity subdirectory the file was found in.
    pub rarity: Rarity,
    pub path: PathBuf,
}

/// Scan all four rarity subdirectories of `root`, in catalog order.
///
/// A missing rarity subdirectory contributes no assets. A missing `root` is
/// an error, since it almost always means the tool ran from the wrong place.
pub fn scan_assets(root: &Path) -> Result<Vec<AssetEntry>, Error> {
    if !root.is_dir() {
        return Err(Error::asset_root_not_found(root));
    }

    let extensions = extension_set(IMAGE_EXTENSIONS);
    let mut assets = Vec::new();

    for &rarity in Rarity::all() {
        let folder = root.join(rarity.dir_name());
        if !folder.is_dir() {
            log::warn!(
                "No {} folder at {}, skipping",
                rarity.dir_name(),
                folder.display()
            );
            continue;
        }
        let found = scan_category(&folder, rarity, &extensions)?;
        log::debug!("{}: {} assets", rarity.dir_name(), found.len());
        assets.extend(found);
    }

    Ok(assets)
}

/// Scan a single rarity folder. Entries are sorted by path.
pub fn scan_category(
    folder: &Path,
    rarity: Rarity,
    extensions: &HashSet<String>,
) -> Result<Vec<AssetEntry>, Error> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(folder)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_matching_extension(p, extensions))
        .collect();
    paths.sort();

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            log::warn!("Skipping non-UTF-8 file name: {}", path.display());
            continue;
        };
        entries.push(AssetEntry { name, rarity, path });
    }

    Ok(entries)
}

/// Build a lowercase extension set.
pub fn extension_set(extensions: &[&str]) -> HashSet<String> {
    extensions.iter().map(|e| e.to_lowercase()).collect()
}

/// Check if a path has an extension in the allowed set.
fn has_matching_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.contains(&e.to_lowercase()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case() {
        let exts = extension_set(IMAGE_EXTENSIONS);
        assert!(has_matching_extension(Path::new("a/Sword.PNG"), &exts));
        assert!(has_matching_extension(Path::new("a/Sword.jpeg"), &exts));
        assert!(!has_matching_extension(Path::new("a/Sword.gif"), &exts));
        assert!(!has_matching_extension(Path::new("a/Sword"), &exts));
    }
}
