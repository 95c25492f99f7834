/// Rarity buckets of the item catalog.
///
/// The same four words serve as section headers in price listings and as
/// subdirectory names in the asset tree, so both the parser and the scanner
/// go through this enum instead of matching on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    Uncommon,
    Rares,
    Epics,
    Legendaries,
}

/// All rarities in catalog order.
const ALL_RARITIES: &[Rarity] = &[
    Rarity::Uncommon,
    Rarity::Rares,
    Rarity::Epics,
    Rarity::Legendaries,
];

impl Rarity {
    /// Lowercase name used both as a listing header and as a directory name.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Uncommon => "uncommon",
            Self::Rares => "rares",
            Self::Epics => "epics",
            Self::Legendaries => "legendaries",
        }
    }

    /// Human-readable label for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Uncommon => "Uncommon",
            Self::Rares => "Rare",
            Self::Epics => "Epic",
            Self::Legendaries => "Legendary",
        }
    }

    /// Returns the rarity if `line` is exactly a header word (case-insensitive).
    ///
    /// Only whole-line matches count: "Rares" is a header, "Rare sword" is not.
    pub fn from_header(line: &str) -> Option<Rarity> {
        let lower = line.trim().to_lowercase();
        ALL_RARITIES
            .iter()
            .copied()
            .find(|r| r.dir_name() == lower)
    }

    /// All four rarities, in catalog order.
    pub fn all() -> &'static [Rarity] {
        ALL_RARITIES
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Rarity`.
#[derive(Debug, Clone)]
pub struct RarityParseError(pub String);

impl std::fmt::Display for RarityParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown rarity: '{}'", self.0)
    }
}

impl std::error::Error for RarityParseError {}

impl std::str::FromStr for Rarity {
    type Err = RarityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::from_header(s).ok_or_else(|| RarityParseError(s.to_string()))
    }
}
