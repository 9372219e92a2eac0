use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::save::{ClearCounts, SaveSummary};

/// Plaintext of the `user` save member: one version byte, then three
/// length-prefixed strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerPage {
    pub intro: String,
    pub avatar: String,
    pub background: String,
}

impl PlayerPage {
    pub fn parse(payload: Vec<u8>) -> Result<Self> {
        let mut cursor = ByteCursor::new(payload);
        cursor.read_u8()?;
        Ok(Self {
            intro: cursor.read_string()?,
            avatar: cursor.read_string()?,
            background: cursor.read_string()?,
        })
    }
}

/// Per-tier play counts keyed the way the game names its tiers.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PlayCounts {
    #[serde(rename = "EZ")]
    pub ez: ClearCounts,
    #[serde(rename = "HD")]
    pub hd: ClearCounts,
    #[serde(rename = "IN")]
    pub r#in: ClearCounts,
    #[serde(rename = "AT")]
    pub at: ClearCounts,
}

impl From<&SaveSummary> for PlayCounts {
    fn from(summary: &SaveSummary) -> Self {
        let [ez, hd, r#in, at] = summary.counts;
        Self { ez, hd, r#in, at }
    }
}

/// Player view assembled from the account name, the latest summary and the
/// decoded `user` member. The avatar comes from the summary; the copy in
/// the page lags behind on some accounts.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerProfile {
    pub display_name: String,
    pub rating: f32,
    pub avatar: String,
    pub background: String,
    pub intro: String,
    pub play_counts: PlayCounts,
}

impl PlayerProfile {
    pub fn assemble(display_name: String, summary: &SaveSummary, page: &PlayerPage) -> Self {
        Self {
            display_name,
            rating: summary.rks,
            avatar: summary.avatar.clone(),
            background: page.background.clone(),
            intro: page.intro.clone(),
            play_counts: PlayCounts::from(summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_payload() -> Vec<u8> {
        let mut cursor = ByteCursor::new(Vec::new());
        cursor.write_u8(0x03);
        cursor.write_string("hello there").unwrap();
        cursor.write_string("avatar.file").unwrap();
        cursor.write_string("chapter8").unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_parse_player_page() {
        let page = PlayerPage::parse(page_payload()).unwrap();
        assert_eq!(page.intro, "hello there");
        assert_eq!(page.avatar, "avatar.file");
        assert_eq!(page.background, "chapter8");
    }

    #[test]
    fn test_parse_truncated_page_fails() {
        let mut payload = page_payload();
        payload.truncate(4);
        assert!(PlayerPage::parse(payload).is_err());
    }

    #[test]
    fn test_assemble_prefers_summary_avatar() {
        let summary = SaveSummary {
            save_version: 1,
            challenge_rank: 345,
            rks: 14.5,
            game_version: 100,
            avatar: "summary.avatar".to_string(),
            counts: [ClearCounts::default(); 4],
        };
        let page = PlayerPage {
            intro: "intro".to_string(),
            avatar: "page.avatar".to_string(),
            background: "bg".to_string(),
        };

        let profile = PlayerProfile::assemble("player".to_string(), &summary, &page);
        assert_eq!(profile.avatar, "summary.avatar");
        assert_eq!(profile.background, "bg");
        assert_eq!(profile.rating, 14.5);
    }
}
