//! Binary cloud-save pipeline.
//!
//! A raw save is a zip archive of versioned, AES-CBC-encrypted members.
//! This module walks the full path for the binary-save game:
//!
//! - `gameRecord` member -> [`parse_game_record`] -> [`ScoreRecord`]s
//! - `user` member -> [`PlayerPage`]
//! - records -> best-30 [`RatingAggregate`]

mod profile;
mod record;

pub use profile::*;
pub use record::*;

use crate::catalog::SongCatalog;
use crate::config::CipherConfig;
use crate::error::Result;
use crate::rating::{BestSelection, RatingAggregate, RatingModel, aggregate};
use crate::save::{GAME_RECORD_MEMBER, USER_MEMBER, decode_member};
use crate::score::ScoreRecord;

/// Decodes and parses the `gameRecord` member of a raw save archive.
pub fn decode_game_record(
    raw_save: &[u8],
    catalog: &dyn SongCatalog,
    cipher: &CipherConfig,
) -> Result<Vec<ScoreRecord>> {
    let plaintext = decode_member(raw_save, GAME_RECORD_MEMBER, cipher)?;
    parse_game_record(plaintext, catalog, RatingModel::Accuracy)
}

/// Decodes and parses the `user` member of a raw save archive.
pub fn decode_player_page(raw_save: &[u8], cipher: &CipherConfig) -> Result<PlayerPage> {
    let plaintext = decode_member(raw_save, USER_MEMBER, cipher)?;
    PlayerPage::parse(plaintext)
}

/// Runs the whole best-30 path over a raw save archive.
pub fn best30(
    raw_save: &[u8],
    catalog: &dyn SongCatalog,
    cipher: &CipherConfig,
) -> Result<RatingAggregate> {
    let records = decode_game_record(raw_save, catalog, cipher)?;
    Ok(aggregate(records, BestSelection::BEST30))
}
