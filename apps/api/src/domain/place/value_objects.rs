use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use ts_rs::TS;

/// Fixed set of architectural styles a place can be tagged with.
///
/// Stored and serialized by display label (e.g. `"Indo-Islamic"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ArchitecturalStyle {
    Dravidian,
    Nagara,
    Vesara,
    #[serde(rename = "Indo-Islamic")]
    IndoIslamic,
    Colonial,
    Modern,
    Other,
    #[default]
    Unknown,
}

impl ArchitecturalStyle {
    pub const ALL: [ArchitecturalStyle; 8] = [
        Self::Dravidian,
        Self::Nagara,
        Self::Vesara,
        Self::IndoIslamic,
        Self::Colonial,
        Self::Modern,
        Self::Other,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dravidian => "Dravidian",
            Self::Nagara => "Nagara",
            Self::Vesara => "Vesara",
            Self::IndoIslamic => "Indo-Islamic",
            Self::Colonial => "Colonial",
            Self::Modern => "Modern",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ArchitecturalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchitecturalStyle {
    type Err = String;

    /// Case-insensitive; accepts `indo_islamic` and `indo islamic` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| format!("unknown architectural style `{}`", s.trim()))
    }
}
