//! Cipher configuration for save decryption.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};

/// AES-256-CBC key baked into the game client.
const SAVE_KEY: [u8; 32] = [
    0xe8, 0x96, 0x9a, 0xd2, 0xa5, 0x40, 0x25, 0x9b, 0x97, 0x91, 0x90, 0x8b, 0x88, 0xe6, 0xbf,
    0x03, 0x1e, 0x6d, 0x21, 0x95, 0x6e, 0xfa, 0xd6, 0x8a, 0x50, 0xdd, 0x55, 0xd6, 0x7a, 0xb0,
    0x92, 0x4b,
];

const SAVE_IV: [u8; 16] = [
    0x2a, 0x4f, 0xf0, 0x8a, 0xc8, 0x0d, 0x63, 0x07, 0x00, 0x57, 0xc5, 0x95, 0x18, 0xc8, 0x32,
    0x53,
];

/// Key and IV pair used to decrypt save members.
///
/// The game ships one fixed pair; `CipherConfig::default()` is that pair.
/// Alternate pairs can be built from base64 for re-keyed save sources and
/// tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherConfig {
    pub key: [u8; 32],
    pub iv: [u8; 16],
}

impl CipherConfig {
    /// Builds a config from base64-encoded key and IV.
    pub fn from_base64(key: &str, iv: &str) -> Result<Self> {
        let key_bytes = STANDARD.decode(key)?;
        let iv_bytes = STANDARD.decode(iv)?;
        let key = key_bytes.as_slice().try_into().map_err(|_| {
            Error::ConfigParseError(format!(
                "cipher key must be 32 bytes, got {}",
                key_bytes.len()
            ))
        })?;
        let iv = iv_bytes.as_slice().try_into().map_err(|_| {
            Error::ConfigParseError(format!("cipher IV must be 16 bytes, got {}", iv_bytes.len()))
        })?;
        Ok(Self { key, iv })
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            key: SAVE_KEY,
            iv: SAVE_IV,
        }
    }
}
