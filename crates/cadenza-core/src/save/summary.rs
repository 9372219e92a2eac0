use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::chart::Tier;
use crate::cursor::ByteCursor;
use crate::error::Result;

/// Cleared / full-combo / all-perfect chart counts for one tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCounts {
    pub cleared: u16,
    pub full_combo: u16,
    pub all_perfect: u16,
}

/// The summary blob attached to each cloud-save entry.
///
/// This is what the server lists without downloading the full save: the
/// player's rating (`rks`), avatar, and per-tier clear counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSummary {
    pub save_version: u8,
    pub challenge_rank: u16,
    pub rks: f32,
    pub game_version: u32,
    pub avatar: String,
    /// Counts in save order; see [`SaveSummary::TIERS`].
    pub counts: [ClearCounts; 4],
}

impl SaveSummary {
    /// Tier order of the `counts` array.
    pub const TIERS: [Tier; 4] = [Tier::Ez, Tier::Hd, Tier::In, Tier::At];

    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut cur = ByteCursor::new(bytes.to_vec());

        let save_version = cur.read_u8()?;
        let challenge_rank = cur.read_u16()?;
        let rks = cur.read_f32()?;
        let game_version = cur.read_varint()?;
        let avatar = cur.read_string()?;

        let mut counts = [ClearCounts::default(); 4];
        for slot in &mut counts {
            slot.cleared = cur.read_u16()?;
            slot.full_combo = cur.read_u16()?;
            slot.all_perfect = cur.read_u16()?;
        }

        Ok(Self {
            save_version,
            challenge_rank,
            rks,
            game_version,
            avatar,
            counts,
        })
    }

    /// Parses the base64 form the server returns.
    pub fn from_base64(b64: &str) -> Result<Self> {
        let bytes = STANDARD.decode(b64)?;
        Self::parse(&bytes)
    }

    pub fn counts_for(&self, tier: Tier) -> Option<ClearCounts> {
        Self::TIERS
            .iter()
            .position(|t| *t == tier)
            .map(|i| self.counts[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_summary_bytes(rks: f32, avatar: &str) -> Vec<u8> {
        let mut cur = ByteCursor::new(Vec::new());
        cur.write_u8(3); // save version
        cur.write_u16(42); // challenge rank
        cur.write_f32(rks);
        cur.write_varint(180).unwrap(); // game version
        cur.write_string(avatar).unwrap();
        for base in [10u16, 20, 30, 40] {
            cur.write_u16(base); // cleared
            cur.write_u16(base / 2); // full combo
            cur.write_u16(base / 5); // all perfect
        }
        cur.into_inner()
    }

    #[test]
    fn test_parse_summary() {
        let bytes = build_summary_bytes(15.32, "avatar.stock");
        let summary = SaveSummary::parse(&bytes).unwrap();

        assert_eq!(summary.save_version, 3);
        assert_eq!(summary.challenge_rank, 42);
        assert_eq!(summary.rks, 15.32);
        assert_eq!(summary.game_version, 180);
        assert_eq!(summary.avatar, "avatar.stock");
        assert_eq!(
            summary.counts_for(Tier::In),
            Some(ClearCounts {
                cleared: 30,
                full_combo: 15,
                all_perfect: 6
            })
        );
        assert_eq!(summary.counts_for(Tier::Legacy), None);
    }

    #[test]
    fn test_from_base64() {
        use base64::Engine as _;
        let bytes = build_summary_bytes(9.5, "a");
        let b64 = base64::engine::general_purpose::STANDARD.encode(&bytes);

        let summary = SaveSummary::from_base64(&b64).unwrap();
        assert_eq!(summary.rks, 9.5);
        assert_eq!(summary.avatar, "a");
    }

    #[test]
    fn test_truncated_summary_fails() {
        let bytes = build_summary_bytes(9.5, "avatar");
        let result = SaveSummary::parse(&bytes[..bytes.len() - 4]);
        assert!(result.is_err());
    }
}
