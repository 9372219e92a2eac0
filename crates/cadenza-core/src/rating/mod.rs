//! Chart rating and player rating aggregation.
//!
//! - `RatingModel` - per-chart rating formula, selected per game
//! - `resolve_alternate_conflicts`, `overall_rating`, `select_best` - the
//!   shared aggregation path
//! - `RatingAggregate` - the recomputed-per-call result

mod aggregate;
mod model;

pub use aggregate::*;
pub use model::*;
