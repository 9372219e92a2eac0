use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum ClearStatus {
    #[default]
    #[serde(rename = "NONE")]
    #[strum(serialize = "NONE")]
    None = 0,
    #[serde(rename = "FC")]
    #[strum(serialize = "FC")]
    FullCombo = 1,
    #[serde(rename = "AP")]
    #[strum(serialize = "AP")]
    AllPerfect = 2,
}

impl ClearStatus {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Maps a Rotaeno save flag to its status. `APP` (AP plus) counts as AP.
    pub fn from_flag(flag: &str) -> Self {
        match flag.to_ascii_uppercase().as_str() {
            "AP" | "APP" => Self::AllPerfect,
            "FC" => Self::FullCombo,
            _ => Self::None,
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ClearStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
