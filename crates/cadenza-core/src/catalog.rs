//! Song catalog lookup.
//!
//! Parsers resolve song ids through the `SongCatalog` seam so callers can
//! back the lookup however they like. `InMemoryCatalog` is the shipped
//! implementation, loadable from a JSON file keyed by song id.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::Tier;
use crate::error::{Error, Result};

/// Song metadata held by a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Chart constant per tier. Tiers without a chart are absent.
    #[serde(default)]
    pub levels: HashMap<Tier, f64>,
}

impl SongEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_level(mut self, tier: Tier, level: f64) -> Self {
        self.levels.insert(tier, level);
        self
    }

    pub fn level(&self, tier: Tier) -> Option<f64> {
        self.levels.get(&tier).copied()
    }
}

/// Lookup seam used by the record parsers.
pub trait SongCatalog {
    fn lookup(&self, song_id: &str) -> Option<&SongEntry>;

    /// Like `lookup`, but a miss is an error.
    fn require(&self, song_id: &str) -> Result<&SongEntry> {
        self.lookup(song_id).ok_or_else(|| Error::CatalogMiss {
            song_id: song_id.to_string(),
        })
    }
}

/// Catalog backed by a `HashMap`, loadable from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    songs: HashMap<String, SongEntry>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, SongEntry)>) -> Self {
        Self {
            songs: entries.into_iter().collect(),
        }
    }

    /// Loads a catalog from a JSON file mapping song ids to entries.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let songs: HashMap<String, SongEntry> = serde_json::from_str(&content)?;
        Ok(Self { songs })
    }

    pub fn insert(&mut self, song_id: impl Into<String>, entry: SongEntry) {
        self.songs.insert(song_id.into(), entry);
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl SongCatalog for InMemoryCatalog {
    fn lookup(&self, song_id: &str) -> Option<&SongEntry> {
        self.songs.get(song_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_lookup_and_require() {
        let catalog = InMemoryCatalog::from_entries([(
            "amber.glow".to_string(),
            SongEntry::new("Amber Glow").with_level(Tier::In, 13.5),
        )]);

        assert_eq!(catalog.lookup("amber.glow").unwrap().title, "Amber Glow");
        assert!(catalog.lookup("missing").is_none());

        let err = catalog.require("missing").unwrap_err();
        assert!(matches!(err, Error::CatalogMiss { song_id } if song_id == "missing"));
    }

    #[test]
    fn test_entry_level() {
        let entry = SongEntry::new("Song")
            .with_level(Tier::Ez, 3.0)
            .with_level(Tier::At, 15.2);

        assert_eq!(entry.level(Tier::At), Some(15.2));
        assert_eq!(entry.level(Tier::Hd), None);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "amber.glow": {{
                    "title": "Amber Glow",
                    "artist": "Someone",
                    "levels": {{"EZ": 4.0, "IN": 13.5}}
                }},
                "rota-song": {{
                    "title": "Rota Song",
                    "levels": {{"IV": 12.3, "IV_Alpha": 13.0}}
                }}
            }}"#
        )
        .unwrap();

        let catalog = InMemoryCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let entry = catalog.lookup("amber.glow").unwrap();
        assert_eq!(entry.artist.as_deref(), Some("Someone"));
        assert_eq!(entry.level(Tier::In), Some(13.5));

        let entry = catalog.lookup("rota-song").unwrap();
        assert_eq!(entry.level(Tier::IvAlpha), Some(13.0));
    }
}
