//! Remote fetch boundary.
//!
//! Thin adapters over the two cloud-save services. No retries and no
//! caching here; failures propagate to the caller unchanged.

mod client;
mod phigros;
mod rotaeno;

pub use client::*;
pub use phigros::*;
pub use rotaeno::*;
