use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::chart::Tier;
use crate::score::{ChartKey, ClearStatus, ScoreRecord};

/// Best-list shape: how many charts, and how many of the top slots are
/// reserved for all-perfect plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestSelection {
    pub target: usize,
    pub perfect_slots: usize,
}

impl BestSelection {
    /// Best-30 list with three AP slots.
    pub const BEST30: Self = Self {
        target: 30,
        perfect_slots: 3,
    };

    /// Best-40 list with three AP slots.
    pub const BEST40: Self = Self {
        target: 40,
        perfect_slots: 3,
    };
}

/// Result of one aggregation pass. Recomputed per call; nothing is kept
/// between saves.
#[derive(Debug, Clone, Serialize)]
pub struct RatingAggregate {
    pub overall: f64,
    pub best: Vec<ScoreRecord>,
    pub records: Vec<ScoreRecord>,
}

/// Zeroes the losing side when a song carries both the `IV` and `IV_Alpha`
/// charts. The alternate chart wins ties. Losers stay in the list with an
/// effective rating of 0.
pub fn resolve_alternate_conflicts(records: &mut [ScoreRecord]) {
    let mut by_song: HashMap<String, (Option<usize>, Option<usize>)> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        match record.tier {
            Tier::Iv => by_song.entry(record.song_id.clone()).or_default().0 = Some(i),
            Tier::IvAlpha => by_song.entry(record.song_id.clone()).or_default().1 = Some(i),
            _ => {}
        }
    }

    for (standard, alternate) in by_song.into_values() {
        if let (Some(standard), Some(alternate)) = (standard, alternate) {
            if records[alternate].effective_rating >= records[standard].effective_rating {
                records[standard].effective_rating = 0.0;
            } else {
                records[alternate].effective_rating = 0.0;
            }
        }
    }
}

/// Tiered mean over the sorted ratings: 60% weight on the top 10, 20% on the
/// next 10, 20% on the next 20. Divisors are fixed, so a thin record list
/// simply scores lower.
pub fn overall_rating(ratings: &[f64]) -> f64 {
    let mut sorted = ratings.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    slice_sum(&sorted, 0, 10) * 0.6 / 10.0
        + slice_sum(&sorted, 10, 20) * 0.2 / 10.0
        + slice_sum(&sorted, 20, 40) * 0.2 / 20.0
}

fn slice_sum(sorted: &[f64], start: usize, end: usize) -> f64 {
    let start = start.min(sorted.len());
    let end = end.min(sorted.len());
    sorted[start..end].iter().sum()
}

/// Picks the best-N list: up to `perfect_slots` all-perfect plays first,
/// then the highest remaining ratings, skipping charts already chosen.
/// Identity is [`ChartKey`], so the same chart never appears twice.
pub fn select_best(records: &[ScoreRecord], selection: BestSelection) -> Vec<ScoreRecord> {
    let mut sorted: Vec<&ScoreRecord> = records.iter().collect();
    // Stable sort keeps parse order between equal ratings
    sorted.sort_by(|a, b| b.effective_rating.total_cmp(&a.effective_rating));

    let mut chosen: Vec<&ScoreRecord> = Vec::with_capacity(selection.target);
    let mut taken: HashSet<ChartKey> = HashSet::new();

    for record in sorted
        .iter()
        .copied()
        .filter(|r| r.status == ClearStatus::AllPerfect)
    {
        if chosen.len() >= selection.perfect_slots {
            break;
        }
        if taken.insert(record.key()) {
            chosen.push(record);
        }
    }

    for record in sorted.iter().copied() {
        if chosen.len() >= selection.target {
            break;
        }
        if taken.insert(record.key()) {
            chosen.push(record);
        }
    }

    chosen.into_iter().cloned().collect()
}

/// Runs the full aggregation path over parsed records.
pub fn aggregate(mut records: Vec<ScoreRecord>, selection: BestSelection) -> RatingAggregate {
    resolve_alternate_conflicts(&mut records);

    let ratings: Vec<f64> = records.iter().map(|r| r.effective_rating).collect();
    let overall = overall_rating(&ratings);
    let best = select_best(&records, selection);

    RatingAggregate {
        overall,
        best,
        records,
    }
}
