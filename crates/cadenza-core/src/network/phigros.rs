use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::network::HttpClient;
use crate::save::SaveSummary;

// Cloud-save service credentials shipped inside the game client.
const API_BASE: &str = "https://rak3ffdi.cloud.tds1.tapapis.cn";
const CLIENT_ID: &str = "rAK3FfdieFob2Nn8Am";
const CLIENT_KEY: &str = "Qr9AEqtuoSVS3zeD6iVbM4ZC0AtkJcQ89tywVyi0,,";

#[derive(Debug, Deserialize)]
struct UserMe {
    nickname: String,
}

#[derive(Debug, Deserialize)]
struct GameSaveResponse {
    results: Vec<GameSaveEntry>,
}

#[derive(Debug, Deserialize)]
struct GameSaveEntry {
    #[serde(rename = "createdAt")]
    created_at: String,
    #[serde(rename = "updatedAt")]
    updated_at: String,
    #[serde(rename = "gameFile")]
    game_file: GameFile,
    summary: String,
}

#[derive(Debug, Deserialize)]
struct GameFile {
    url: String,
    key: String,
}

/// One cloud-save listing: timestamps, where to fetch the archive, and the
/// decoded summary block.
#[derive(Debug, Clone)]
pub struct SummaryEntry {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub save_url: String,
    pub save_key: String,
    pub summary: SaveSummary,
}

impl TryFrom<GameSaveEntry> for SummaryEntry {
    type Error = Error;

    fn try_from(entry: GameSaveEntry) -> Result<Self> {
        Ok(Self {
            created_at: parse_timestamp(&entry.created_at)?,
            updated_at: parse_timestamp(&entry.updated_at)?,
            save_url: entry.game_file.url,
            save_key: entry.game_file.key,
            summary: SaveSummary::from_base64(&entry.summary)?,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::NetworkError(format!("Invalid timestamp {raw:?}: {e}")))
}

fn latest(summaries: Vec<SummaryEntry>) -> Option<SummaryEntry> {
    summaries.into_iter().max_by_key(|entry| entry.updated_at)
}

/// Session-scoped client for the binary-save game's cloud service.
pub struct PhigrosClient {
    http: HttpClient,
    session_token: String,
}

impl PhigrosClient {
    pub fn new(session_token: String) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(API_BASE.to_string())?,
            session_token,
        })
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("X-LC-Id", CLIENT_ID.to_string()),
            ("X-LC-Key", CLIENT_KEY.to_string()),
            ("X-LC-Session", self.session_token.clone()),
        ]
    }

    /// Account display name.
    pub async fn get_nickname(&self) -> Result<String> {
        let me: UserMe = self
            .http
            .get_json("1.1/users/me", &[], &self.headers())
            .await?;
        Ok(me.nickname)
    }

    /// Every cloud-save listing on the account.
    pub async fn get_summaries(&self) -> Result<Vec<SummaryEntry>> {
        let response: GameSaveResponse = self
            .http
            .get_json("1.1/classes/_GameSave", &[], &self.headers())
            .await?;

        response
            .results
            .into_iter()
            .map(SummaryEntry::try_from)
            .collect()
    }

    /// The most recently updated listing. The service occasionally keeps
    /// stale rows around, so ordering is by `updatedAt`, not list position.
    pub async fn latest_summary(&self) -> Result<SummaryEntry> {
        let summaries = self.get_summaries().await?;
        latest(summaries).ok_or(Error::EmptySaveResponse)
    }

    /// Raw save archive from the storage URL in a listing.
    pub async fn download_save(&self, save_url: &str) -> Result<Vec<u8>> {
        self.http.download(save_url).await
    }
}
