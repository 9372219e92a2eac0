use serde::Serialize;
use tracing::warn;

use crate::catalog::SongCatalog;
use crate::chart::Tier;
use crate::rating::{BestSelection, RatingAggregate, RatingModel, aggregate};
use crate::rotaeno::level::player_level;
use crate::rotaeno::save::{PlayStats, SaveData};
use crate::score::{ClearStatus, ScoreRecord};

/// Player-facing header assembled next to the score aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerInfo {
    pub display_name: String,
    pub rating: f64,
    pub exp: i64,
    pub level: f64,
    pub favorite_song_ids: Vec<String>,
    pub play_stats: PlayStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessedSave {
    pub player: PlayerInfo,
    pub scores: RatingAggregate,
}

/// Turns a parsed cloud save into rated records and the best-40 aggregate.
///
/// Charts the catalog cannot resolve (unknown song, unknown tier name, or
/// a tier with no difficulty on file) are logged and skipped; one stale
/// catalog entry never sinks the whole save.
pub fn process_save(save: SaveData, catalog: &dyn SongCatalog) -> ProcessedSave {
    let mut records = Vec::new();

    for (song_id, plays) in &save.songs.songs {
        let Some(info) = catalog.lookup(song_id) else {
            warn!(song_id = %song_id, "song missing from catalog, skipping");
            continue;
        };

        for (tier_name, play) in &plays.levels {
            let Ok(tier) = tier_name.parse::<Tier>() else {
                warn!(song_id = %song_id, tier = %tier_name, "unrecognized tier name, skipping");
                continue;
            };
            let Some(difficulty) = info.level(tier) else {
                warn!(song_id = %song_id, tier = %tier, "chart level missing from catalog, skipping");
                continue;
            };

            let chart =
                RatingModel::ScoreBrackets.chart_rating(play.score, None, difficulty, play.is_cleared);

            records.push(ScoreRecord {
                song_id: song_id.clone(),
                title: info.title.clone(),
                tier,
                difficulty,
                score: play.score,
                accuracy: None,
                cleared: play.is_cleared,
                status: ClearStatus::from_flag(&play.flag),
                favorite: save.favorites.song_ids.contains(song_id),
                rating: chart.rating,
                effective_rating: chart.rating,
                next_point_score: chart.next_point_score,
            });
        }
    }

    let scores = aggregate(records, BestSelection::BEST40);
    let level = player_level(save.player_level.accum_xp);

    ProcessedSave {
        player: PlayerInfo {
            display_name: save.profile.display_name,
            rating: scores.overall,
            exp: save.player_level.accum_xp,
            level,
            favorite_song_ids: save.favorites.song_ids,
            play_stats: save.play_stats,
        },
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryCatalog, SongEntry};
    use crate::rotaeno::save::CloudSaveResponse;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::from_entries([
            (
                "witches-dance".to_string(),
                SongEntry::new("Witches' Dance")
                    .with_level(Tier::Iii, 10.0)
                    .with_level(Tier::Iv, 13.5)
                    .with_level(Tier::IvAlpha, 14.0),
            ),
            (
                "chandelier".to_string(),
                SongEntry::new("Chandelier").with_level(Tier::I, 3.0),
            ),
        ])
    }

    fn save_from_json(raw: &str) -> SaveData {
        let response: CloudSaveResponse = serde_json::from_str(raw).unwrap();
        response.into_save().unwrap()
    }

    fn wrap(save_body: &str) -> String {
        format!(
            r#"{{"results": [{{"cloudSave": {{"data": {{"data": {save_body}}}}}}}]}}"#
        )
    }

    #[test]
    fn test_process_full_save() {
        let raw = wrap(
            r#"{
                "songs": {"songs": {
                    "witches-dance": {"levels": {
                        "IV": {"Score": 1000000, "IsCleared": true, "Flag": "FC"},
                        "III": {"Score": 985000, "IsCleared": true, "Flag": ""}
                    }},
                    "chandelier": {"levels": {
                        "I": {"Score": 1010000, "IsCleared": true, "Flag": "APP"}
                    }}
                }},
                "profile": {"DisplayName": "spinner"},
                "FavoriteSong": {"songIds": ["chandelier"]},
                "PlayerLevel": {"AccumXp": 360},
                "playRecords": {"TotalFc": 5}
            }"#,
        );

        let result = process_save(save_from_json(&raw), &catalog());

        assert_eq!(result.player.display_name, "spinner");
        assert_eq!(result.player.level, 4.0);
        assert_eq!(result.player.play_stats.total_full_combo, 5);
        assert_eq!(result.scores.records.len(), 3);

        let chandelier = result
            .scores
            .records
            .iter()
            .find(|r| r.song_id == "chandelier")
            .unwrap();
        assert_eq!(chandelier.status, ClearStatus::AllPerfect);
        assert!(chandelier.favorite);
        // Top bracket: difficulty + 3.7
        assert!((chandelier.rating - 6.7).abs() < 1e-9);

        let iv = result
            .scores
            .records
            .iter()
            .find(|r| r.tier == Tier::Iv)
            .unwrap();
        assert_eq!(iv.status, ClearStatus::FullCombo);
        assert!(!iv.favorite);
        assert!((iv.rating - 15.5).abs() < 1e-9);

        // Overall over [15.5, 11.25, 6.7] with fixed divisors
        let expected = (15.5 + 11.25 + 6.7) * 0.6 / 10.0;
        assert!((result.player.rating - expected).abs() < 1e-9);
        assert_eq!(result.player.rating, result.scores.overall);
    }

    #[test]
    fn test_unknown_song_and_tier_are_skipped() {
        let raw = wrap(
            r#"{
                "songs": {"songs": {
                    "witches-dance": {"levels": {
                        "V": {"Score": 1000000, "IsCleared": true, "Flag": ""},
                        "IV_Alpha": {"Score": 900000, "IsCleared": true, "Flag": ""}
                    }},
                    "never-heard-of-it": {"levels": {
                        "I": {"Score": 1000000, "IsCleared": true, "Flag": ""}
                    }}
                }},
                "profile": {"DisplayName": "spinner"},
                "PlayerLevel": {"AccumXp": 0}
            }"#,
        );

        let result = process_save(save_from_json(&raw), &catalog());

        // Only the IV_Alpha chart survives filtering
        assert_eq!(result.scores.records.len(), 1);
        assert_eq!(result.scores.records[0].tier, Tier::IvAlpha);
    }

    #[test]
    fn test_missing_catalog_level_is_skipped() {
        let raw = wrap(
            r#"{
                "songs": {"songs": {
                    "chandelier": {"levels": {
                        "II": {"Score": 1000000, "IsCleared": true, "Flag": ""}
                    }}
                }},
                "profile": {"DisplayName": "spinner"},
                "PlayerLevel": {"AccumXp": 0}
            }"#,
        );

        let result = process_save(save_from_json(&raw), &catalog());
        assert!(result.scores.records.is_empty());
        assert_eq!(result.scores.overall, 0.0);
    }

    #[test]
    fn test_uncleared_play_capped_in_output() {
        let raw = wrap(
            r#"{
                "songs": {"songs": {
                    "witches-dance": {"levels": {
                        "IV": {"Score": 1010000, "IsCleared": false, "Flag": ""}
                    }}
                }},
                "profile": {"DisplayName": "spinner"},
                "PlayerLevel": {"AccumXp": 0}
            }"#,
        );

        let result = process_save(save_from_json(&raw), &catalog());
        let record = &result.scores.records[0];
        assert!(!record.cleared);
        assert_eq!(record.rating, 6.0);
    }

    #[test]
    fn test_alternate_conflict_applied() {
        let raw = wrap(
            r#"{
                "songs": {"songs": {
                    "witches-dance": {"levels": {
                        "IV": {"Score": 1010000, "IsCleared": true, "Flag": ""},
                        "IV_Alpha": {"Score": 1010000, "IsCleared": true, "Flag": ""}
                    }}
                }},
                "profile": {"DisplayName": "spinner"},
                "PlayerLevel": {"AccumXp": 0}
            }"#,
        );

        let result = process_save(save_from_json(&raw), &catalog());

        let iv = result
            .scores
            .records
            .iter()
            .find(|r| r.tier == Tier::Iv)
            .unwrap();
        let alpha = result
            .scores
            .records
            .iter()
            .find(|r| r.tier == Tier::IvAlpha)
            .unwrap();

        // Alpha rates higher (14.0 + 3.7) and zeroes the standard chart
        assert_eq!(iv.effective_rating, 0.0);
        assert!((alpha.effective_rating - 17.7).abs() < 1e-9);
        assert!((result.scores.overall - 17.7 * 0.6 / 10.0).abs() < 1e-9);
    }
}
