use tracing::{debug, warn};

use crate::catalog::SongCatalog;
use crate::chart::Tier;
use crate::cursor::ByteCursor;
use crate::error::{Error, Result};
use crate::rating::RatingModel;
use crate::score::{ClearStatus, ScoreRecord};

/// Mask bit positions in a song block, lowest bit first.
const TIER_BITS: [Tier; 5] = [Tier::Ez, Tier::Hd, Tier::In, Tier::At, Tier::Legacy];

/// Parses a decrypted `gameRecord` payload into per-chart play records.
///
/// The payload opens with a varint song count, but the count is only
/// logged; consumption runs until the buffer is exhausted. Records come
/// out in parse order. Any cursor failure is reported as
/// [`Error::MalformedRecord`] with the byte offset where it happened.
pub fn parse_game_record(
    payload: Vec<u8>,
    catalog: &dyn SongCatalog,
    model: RatingModel,
) -> Result<Vec<ScoreRecord>> {
    let mut cursor = ByteCursor::new(payload);
    read_all_blocks(&mut cursor, catalog, model).map_err(|e| malformed_at(e, &cursor))
}

fn malformed_at(source: Error, cursor: &ByteCursor) -> Error {
    match source {
        e @ Error::MalformedRecord { .. } => e,
        other => Error::MalformedRecord {
            offset: cursor.position(),
            message: other.to_string(),
        },
    }
}

fn read_all_blocks(
    cursor: &mut ByteCursor,
    catalog: &dyn SongCatalog,
    model: RatingModel,
) -> Result<Vec<ScoreRecord>> {
    let declared = cursor.read_varint()?;
    let mut records = Vec::new();

    while cursor.remaining() > 0 {
        read_song_block(cursor, catalog, model, &mut records)?;
    }

    debug!(
        declared,
        parsed = records.len(),
        "game record payload consumed"
    );
    Ok(records)
}

fn read_song_block(
    cursor: &mut ByteCursor,
    catalog: &dyn SongCatalog,
    model: RatingModel,
    out: &mut Vec<ScoreRecord>,
) -> Result<()> {
    let key = cursor.read_string()?;
    let song_id = strip_chart_suffix(&key);

    // Reserved field between the key and the masks
    cursor.skip_varint(1)?;
    let tier_mask = cursor.read_u8()?;
    let combo_mask = cursor.read_u8()?;

    let entry = catalog.lookup(&song_id);
    if entry.is_none() {
        warn!(song_id = %song_id, "song missing from catalog, emitting bare records");
    }

    for (bit, &tier) in TIER_BITS.iter().enumerate() {
        if tier_mask & (1 << bit) == 0 {
            continue;
        }
        let score = cursor.read_u32()?;
        let accuracy = cursor.read_f32()?;

        let mut status = if combo_mask & (1 << bit) != 0 {
            ClearStatus::FullCombo
        } else {
            ClearStatus::None
        };
        if score >= 1_000_000 {
            status = ClearStatus::AllPerfect;
        }

        let difficulty = match entry.and_then(|e| e.level(tier)) {
            Some(level) => level,
            None => {
                if entry.is_some() {
                    warn!(song_id = %song_id, tier = %tier, "chart level missing from catalog");
                }
                0.0
            }
        };
        let title = entry.map(|e| e.title.clone()).unwrap_or_default();

        let chart = model.chart_rating(score, Some(accuracy), difficulty, true);

        out.push(ScoreRecord {
            song_id: song_id.clone(),
            title,
            tier,
            difficulty,
            score,
            accuracy: Some(accuracy),
            cleared: true,
            status,
            favorite: false,
            rating: chart.rating,
            effective_rating: chart.rating,
            next_point_score: chart.next_point_score,
        });
    }

    Ok(())
}

/// Song keys carry a trailing `.suffix` segment; the bare id is everything
/// before the last dot. A key without a dot yields an empty id.
fn strip_chart_suffix(key: &str) -> String {
    match key.rsplit_once('.') {
        Some((id, _)) => id.to_string(),
        None => String::new(),
    }
}
