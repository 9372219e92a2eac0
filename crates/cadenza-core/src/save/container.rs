use std::io::{Cursor, Read};

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};
use tracing::debug;
use zip::ZipArchive;

use crate::config::CipherConfig;
use crate::error::{Error, Result};

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Archive member holding the binary score records.
pub const GAME_RECORD_MEMBER: &str = "gameRecord";
/// Archive member holding the player page strings.
pub const USER_MEMBER: &str = "user";

/// Extracts one member from a raw save archive and decrypts it.
///
/// Every member starts with a one-byte save-format version; for
/// [`GAME_RECORD_MEMBER`] that byte must be `0x01`, other members skip it
/// unchecked. The remainder is AES-256-CBC ciphertext with PKCS#7 padding.
pub fn decode_member(raw_save: &[u8], member: &str, cipher: &CipherConfig) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(raw_save))?;

    let mut file = archive.by_name(member).map_err(|e| match e {
        zip::result::ZipError::FileNotFound => Error::MemberNotFound {
            name: member.to_string(),
        },
        other => Error::Archive(other),
    })?;

    let mut content = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut content)?;

    if member == GAME_RECORD_MEMBER {
        let found = content.first().copied().unwrap_or(0);
        if found != 0x01 {
            return Err(Error::InvalidRecordMarker { found });
        }
    }
    let ciphertext = content.get(1..).unwrap_or(&[]);

    let plaintext = Aes256CbcDec::new((&cipher.key).into(), (&cipher.iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::Padding)?;

    debug!(
        member,
        ciphertext_len = ciphertext.len(),
        plaintext_len = plaintext.len(),
        "decoded save member"
    );

    Ok(plaintext)
}
