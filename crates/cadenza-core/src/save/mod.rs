//! Encrypted cloud-save container handling.
//!
//! - `decode_member` - extract and decrypt one archive member
//! - `SaveSummary` - the base64 summary blob attached to each save entry
//! - `mock` - synthetic save builder for tests

mod container;
mod summary;

// Synthetic save builder for testing (always available for unit and integration tests)
#[doc(hidden)]
pub mod mock;

pub use container::{GAME_RECORD_MEMBER, USER_MEMBER, decode_member};
pub use summary::{ClearCounts, SaveSummary};
