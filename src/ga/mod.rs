//! Genetic algorithm core.
//!
//! Implements the GA phase of the hybrid optimizer: population
//! management with elitist replacement, single-point crossover, and
//! pool-draw mutation, all behind a pluggable problem definition.
//!
//! # Submodules
//!
//! - [`problem`]: The [`GaProblem`] trait and objective direction
//! - [`config`]: Run parameters with boundary validation
//! - [`operators`]: Crossover and runtime-selectable mutation
//! - [`population`]: Scored candidates and generational turnover
//!
//! The two fitness strategies of the optimizer (rating maximization
//! and conflict minimization) are `GaProblem` implementations in
//! [`crate::optimizer`]; the machinery here is shared.
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

pub mod config;
pub mod operators;
pub mod population;
pub mod problem;

pub use config::GaConfig;
pub use operators::{per_gene_mutation, point_mutation, single_point_crossover, MutationKind};
pub use population::{Candidate, GenerationStats, Population};
pub use problem::{GaProblem, Objective};
