//! # cadenza-core
//!
//! Core library for the cadenza rating toolkit.
//!
//! This crate provides:
//! - Binary save decoding (zip container, AES-CBC members, byte cursor)
//! - Record parsing for the binary and JSON cloud-save formats
//! - The two rating models plus conflict resolution and best-list aggregation
//! - Cloud service clients for both supported games

pub mod catalog;
pub mod chart;
pub mod config;
pub mod cursor;
pub mod error;
pub mod export;
pub mod network;
pub mod phigros;
pub mod rating;
pub mod rotaeno;
pub mod save;
pub mod score;

pub use catalog::{InMemoryCatalog, SongCatalog, SongEntry};
pub use chart::Tier;
pub use config::CipherConfig;
pub use cursor::{ByteCursor, VARINT_MAX};
pub use error::{Error, Result};
pub use export::{format_aggregate_console, format_record_summary};
pub use network::{HttpClient, PhigrosClient, Region, RotaenoClient, SummaryEntry};
pub use phigros::{
    PlayCounts, PlayerPage, PlayerProfile, best30, decode_game_record, decode_player_page,
    parse_game_record,
};
pub use rating::{BestSelection, ChartRating, RatingAggregate, RatingModel, aggregate};
pub use rotaeno::{PlayerInfo, ProcessedSave, player_level, process_save};
pub use save::{
    ClearCounts, GAME_RECORD_MEMBER, SaveSummary, USER_MEMBER, decode_member,
};
pub use score::{ChartKey, ClearStatus, ScoreRecord};
