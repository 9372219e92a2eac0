//! Score-related types shared by both game pipelines.
//!
//! - `ClearStatus` - clear flags (NONE, FC, AP)
//! - `ScoreRecord` - one chart's parsed score with its rating
//! - `ChartKey` - chart identity (song id + tier)

mod clear;
mod record;

pub use clear::*;
pub use record::*;
