//! Chart tiers across both supported games.

use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

/// Difficulty tier of a chart.
///
/// One ladder covers both games: `EZ`..`Legacy` are the five Phigros slots
/// (in save bitmask order), `I`..`IV_Alpha` are the Rotaeno levels. Serialized
/// names match the labels the games use in their own save data.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Tier {
    #[serde(rename = "EZ")]
    #[strum(serialize = "EZ")]
    Ez = 0,
    #[serde(rename = "HD")]
    #[strum(serialize = "HD")]
    Hd = 1,
    #[serde(rename = "IN")]
    #[strum(serialize = "IN")]
    In = 2,
    #[serde(rename = "AT")]
    #[strum(serialize = "AT")]
    At = 3,
    #[serde(rename = "Legacy")]
    #[strum(serialize = "Legacy")]
    Legacy = 4,
    #[serde(rename = "I")]
    #[strum(serialize = "I")]
    I = 5,
    #[serde(rename = "II")]
    #[strum(serialize = "II")]
    Ii = 6,
    #[serde(rename = "III")]
    #[strum(serialize = "III")]
    Iii = 7,
    #[serde(rename = "IV")]
    #[strum(serialize = "IV")]
    Iv = 8,
    #[serde(rename = "IV_Alpha")]
    #[strum(serialize = "IV_Alpha")]
    IvAlpha = 9,
}

impl Tier {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Maps a bit index of the game record tier mask to its tier.
    pub fn from_phigros_bit(bit: u8) -> Option<Self> {
        if bit <= 4 { Self::from_repr(bit) } else { None }
    }

    /// Bit index in the game record tier mask, for Phigros tiers only.
    pub fn phigros_bit(&self) -> Option<u8> {
        self.is_phigros().then_some(*self as u8)
    }

    pub fn is_phigros(&self) -> bool {
        matches!(
            self,
            Self::Ez | Self::Hd | Self::In | Self::At | Self::Legacy
        )
    }

    pub fn is_rotaeno(&self) -> bool {
        !self.is_phigros()
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
