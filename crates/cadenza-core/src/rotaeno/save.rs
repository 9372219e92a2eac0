use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Envelope of the cloud-save class query. The newest save is the first
/// (and only requested) entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CloudSaveResponse {
    pub results: Vec<CloudSaveEntry>,
}

impl CloudSaveResponse {
    /// Unwraps the envelope down to the save payload.
    pub fn into_save(self) -> Result<SaveData> {
        let entry = self
            .results
            .into_iter()
            .next()
            .ok_or(Error::EmptySaveResponse)?;
        Ok(entry.cloud_save.data.data)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudSaveEntry {
    #[serde(rename = "cloudSave")]
    pub cloud_save: CloudSave,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudSave {
    pub data: SaveDataEnvelope,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveDataEnvelope {
    pub data: SaveData,
}

/// The save proper. Sections the processing pipeline does not consume are
/// not modelled and deserialization ignores them; re-serializing therefore
/// drops them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub songs: SongSection,
    pub profile: Profile,
    /// Missing on accounts that never favorited a song.
    #[serde(rename = "FavoriteSong", default)]
    pub favorites: FavoriteSongs,
    #[serde(rename = "PlayerLevel")]
    pub player_level: PlayerLevel,
    /// Missing on fresh accounts; all counters read as zero.
    #[serde(rename = "playRecords", default)]
    pub play_stats: PlayStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongSection {
    /// Keyed by song id. Sorted map so processing order is stable.
    pub songs: BTreeMap<String, SongPlays>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongPlays {
    /// Keyed by tier name (`"I"` .. `"IV_Alpha"`). Left as strings so an
    /// unrecognized tier skips one chart instead of failing the parse.
    #[serde(default)]
    pub levels: BTreeMap<String, ChartPlay>,
}

/// One chart's standing. Missing fields read as a zero-score uncleared
/// play with no flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartPlay {
    #[serde(rename = "Score", default)]
    pub score: u32,
    #[serde(rename = "IsCleared", default)]
    pub is_cleared: bool,
    #[serde(rename = "Flag", default)]
    pub flag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "DisplayName")]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoriteSongs {
    #[serde(rename = "songIds", default)]
    pub song_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerLevel {
    #[serde(rename = "AccumXp")]
    pub accum_xp: i64,
}

/// Lifetime judgement and clear counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayStats {
    #[serde(rename = "TotalApp", default)]
    pub total_all_perfect_plus: u32,
    #[serde(rename = "TotalAp", default)]
    pub total_all_perfect: u32,
    #[serde(rename = "TotalFc", default)]
    pub total_full_combo: u32,
    #[serde(rename = "Miss", default)]
    pub miss: u64,
    #[serde(rename = "Good", default)]
    pub good: u64,
    #[serde(rename = "Perfect", default)]
    pub perfect: u64,
    #[serde(rename = "PerfectPlus", default)]
    pub perfect_plus: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_unwraps_first_entry() {
        let raw = r#"{
            "results": [{
                "cloudSave": {
                    "data": {
                        "data": {
                            "songs": {"songs": {}},
                            "profile": {"DisplayName": "player"},
                            "PlayerLevel": {"AccumXp": 420}
                        }
                    }
                }
            }]
        }"#;

        let response: CloudSaveResponse = serde_json::from_str(raw).unwrap();
        let save = response.into_save().unwrap();

        assert_eq!(save.profile.display_name, "player");
        assert_eq!(save.player_level.accum_xp, 420);
        assert!(save.favorites.song_ids.is_empty());
        assert_eq!(save.play_stats.total_full_combo, 0);
    }

    #[test]
    fn test_empty_results_is_an_error() {
        let response: CloudSaveResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(matches!(
            response.into_save(),
            Err(Error::EmptySaveResponse)
        ));
    }

    #[test]
    fn test_chart_play_fields() {
        let raw = r#"{
            "songs": {
                "songs": {
                    "a-song": {
                        "levels": {
                            "III": {"Score": 990123, "IsCleared": true, "Flag": "FC"},
                            "IV": {}
                        }
                    },
                    "bare-song": {}
                }
            },
            "profile": {"DisplayName": "x"},
            "PlayerLevel": {"AccumXp": 0},
            "playRecords": {"TotalFc": 12, "Perfect": 34567}
        }"#;

        let save: SaveData = serde_json::from_str(raw).unwrap();

        let plays = &save.songs.songs["a-song"].levels;
        assert_eq!(plays["III"].score, 990_123);
        assert!(plays["III"].is_cleared);
        assert_eq!(plays["III"].flag, "FC");

        // Empty chart object falls back to the zero play
        assert_eq!(plays["IV"].score, 0);
        assert!(!plays["IV"].is_cleared);
        assert_eq!(plays["IV"].flag, "");

        assert!(save.songs.songs["bare-song"].levels.is_empty());
        assert_eq!(save.play_stats.total_full_combo, 12);
        assert_eq!(save.play_stats.perfect, 34_567);
    }
}
