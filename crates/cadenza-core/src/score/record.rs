use serde::{Deserialize, Serialize};

use crate::chart::Tier;
use crate::score::ClearStatus;

/// Chart identity: one song id can carry several tiers, and best-N selection
/// must not count the same chart twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartKey {
    pub song_id: String,
    pub tier: Tier,
}

/// One chart's parsed score together with its computed rating.
///
/// `accuracy` is only present for Phigros records; `next_point_score` only
/// for Rotaeno ones. `effective_rating` starts equal to `rating` and is the
/// value the alternate-chart conflict rule zeroes; aggregation and selection
/// read it, never `rating`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub song_id: String,
    pub title: String,
    pub tier: Tier,
    pub difficulty: f64,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f32>,
    pub cleared: bool,
    pub status: ClearStatus,
    pub favorite: bool,
    pub rating: f64,
    pub effective_rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_point_score: Option<f64>,
}

impl ScoreRecord {
    pub fn key(&self) -> ChartKey {
        ChartKey {
            song_id: self.song_id.clone(),
            tier: self.tier,
        }
    }
}
