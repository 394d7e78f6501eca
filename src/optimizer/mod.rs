//! Optimization drivers.
//!
//! Orchestrates the hybrid pipeline: exhaustive permutation search
//! seeds a GA refinement, and the driver assembles the final result.
//! Two mutually exclusive modes exist behind a shared GA core:
//!
//! - [`ScheduleOptimizer`]: rating maximization over a
//!   [`crate::models::RatingMatrix`] (fixed generation budget, no
//!   early stop)
//! - [`ConflictSolver`]: conflict minimization over slot labels
//!   (stops at zero conflicts, errors when the budget runs out)

mod conflict;
mod rating;

pub use conflict::{count_conflicts, ConflictSchedule, ConflictSolver};
pub use rating::{broadcast_day, OptimizedSchedule, ScheduleOptimizer};
