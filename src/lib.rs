//! Broadcast lineup optimization.
//!
//! Assigns a fixed set of TV programs to an ordered sequence of
//! broadcast slots to maximize total audience rating. The optimizer is
//! hybrid: an exhaustive permutation search fixes the best prefix, and
//! a genetic algorithm refines the assignment when the exhaustive
//! phase cannot cover every slot. A second mode minimizes pairwise
//! slot-label conflicts with the same GA core.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`models::RatingMatrix`],
//!   [`models::Lineup`]
//! - **`exhaustive`**: Lazy permutation enumeration and brute-force
//!   lineup search
//! - **`ga`**: Population management, genetic operators, and run
//!   configuration
//! - **`optimizer`**: The two drivers —
//!   [`optimizer::ScheduleOptimizer`] (rating maximization) and
//!   [`optimizer::ConflictSolver`] (conflict minimization)
//! - **`validation`**: Boundary checks for configuration and rating
//!   data
//!
//! # Example
//!
//! ```
//! use airsched::models::RatingMatrix;
//! use airsched::optimizer::ScheduleOptimizer;
//! use airsched::ga::GaConfig;
//!
//! let matrix = RatingMatrix::new()
//!     .with_program("News", vec![0.9, 0.4, 0.2])
//!     .with_program("Movie", vec![0.3, 0.8, 0.5])
//!     .with_program("Sports", vec![0.2, 0.5, 0.9]);
//!
//! let optimizer = ScheduleOptimizer::new(matrix, vec![20, 21, 22])
//!     .with_config(GaConfig::default().with_seed(42));
//! let result = optimizer.optimize().unwrap();
//!
//! for slot in &result.lineup.slots {
//!     println!("{:02}:00  {}  ({:.2})", slot.slot_label, slot.program, slot.rating);
//! }
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod exhaustive;
pub mod ga;
pub mod models;
pub mod optimizer;
pub mod validation;

pub use error::OptimizeError;
pub use models::{Lineup, RatingMatrix};
pub use optimizer::{ConflictSolver, OptimizedSchedule, ScheduleOptimizer};
