use std::time::{SystemTime, UNIX_EPOCH};

use md5::{Digest, Md5};
use serde::Deserialize;
use strum::{EnumString, IntoStaticStr};

use crate::error::Result;
use crate::network::HttpClient;
use crate::rotaeno::save::{CloudSaveResponse, SaveData};

struct AppCredentials {
    id: &'static str,
    key: &'static str,
}

// Per-region service credentials shipped inside the game client.
const CN_CREDENTIALS: AppCredentials = AppCredentials {
    id: "OLNEwJ5x64vEP7QNw2yt8heM-gzGzoHsz",
    key: "FT9iFE4DBdWG5je8bP7ieBcC",
};
const GLOBAL_CREDENTIALS: AppCredentials = AppCredentials {
    id: "wsNh5k0vbzxei1fsF0KC6dCG-MdYXbMMI",
    key: "0zRcDIygHhqGH3FAinANy0zC",
};

/// Which deployment of the service an account lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Region {
    Cn,
    Global,
}

impl Region {
    fn api_base(self) -> &'static str {
        match self {
            Region::Cn => "https://rotaeno.leancloud.indie.xd.com",
            Region::Global => "https://leanapi.rotaeno.com",
        }
    }

    fn credentials(self) -> &'static AppCredentials {
        match self {
            Region::Cn => &CN_CREDENTIALS,
            Region::Global => &GLOBAL_CREDENTIALS,
        }
    }
}

/// `md5(timestamp + key)` in lowercase hex, joined with the timestamp.
fn sign_header(key: &str, timestamp: u64) -> String {
    let mut hasher = Md5::new();
    hasher.update(format!("{timestamp}{key}"));
    format!("{},{}", hex::encode(hasher.finalize()), timestamp)
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[derive(Debug, Deserialize)]
struct UserMe {
    #[serde(rename = "objectId")]
    object_id: String,
}

/// Session-scoped client for the JSON-save game's cloud service.
pub struct RotaenoClient {
    http: HttpClient,
    region: Region,
    session_token: String,
}

impl RotaenoClient {
    pub fn new(region: Region, session_token: String) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(region.api_base().to_string())?,
            region,
            session_token,
        })
    }

    /// Signature is computed per request; the service rejects stale
    /// timestamps.
    fn headers(&self) -> Vec<(&'static str, String)> {
        let credentials = self.region.credentials();
        vec![
            ("X-LC-Id", credentials.id.to_string()),
            ("X-LC-Sign", sign_header(credentials.key, unix_timestamp())),
            ("X-LC-Session", self.session_token.clone()),
        ]
    }

    /// objectId of the account behind the session token.
    pub async fn get_object_id(&self) -> Result<String> {
        let me: UserMe = self
            .http
            .get_json("1.1/users/me", &[], &self.headers())
            .await?;
        Ok(me.object_id)
    }

    /// Newest cloud save for the given account.
    pub async fn get_cloud_save(&self, object_id: &str) -> Result<SaveData> {
        let pointer = serde_json::json!({
            "user": {
                "__type": "Pointer",
                "className": "_User",
                "objectId": object_id,
            }
        })
        .to_string();

        let response: CloudSaveResponse = self
            .http
            .get_json(
                "1.1/classes/CloudSave",
                &[("where", pointer.as_str())],
                &self.headers(),
            )
            .await?;

        response.into_save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sign_header_shape() {
        let signed = sign_header("sign-key", 1_756_200_000);
        assert_eq!(signed, "63bf26a8f5ae2e080dd4b81405fbf4bd,1756200000");
    }

    #[test]
    fn test_region_parse() {
        assert_eq!(Region::from_str("cn").unwrap(), Region::Cn);
        assert_eq!(Region::from_str("GLOBAL").unwrap(), Region::Global);
        assert!(Region::from_str("eu").is_err());
    }

    #[test]
    fn test_region_endpoints_differ() {
        assert_ne!(Region::Cn.api_base(), Region::Global.api_base());
        assert_ne!(
            Region::Cn.credentials().id,
            Region::Global.credentials().id
        );
    }
}
