//! Broadcast scheduling domain models.
//!
//! Provides the core data types for lineup optimization: the
//! slot-dependent rating data ([`RatingMatrix`]) and the optimization
//! result ([`Lineup`]). The rating matrix is immutable once loaded;
//! lineups are produced only by the optimizer.

mod lineup;
mod ratings;

pub use lineup::{Lineup, SlotAssignment};
pub use ratings::RatingMatrix;
