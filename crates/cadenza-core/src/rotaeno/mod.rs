//! JSON cloud-save pipeline.
//!
//! The cloud save for the spin game arrives as one large JSON document.
//! [`save`] models the slice of it the pipeline consumes, [`process_save`]
//! rates every chart and builds the best-40 aggregate, and [`player_level`]
//! converts accumulated XP to the display level.

mod level;
mod process;
pub mod save;

pub use level::*;
pub use process::*;
