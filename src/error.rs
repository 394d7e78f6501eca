//! Optimizer error types.
//!
//! All failures surface before or during an optimization run as
//! [`OptimizeError`]. Configuration problems are collected into
//! `Vec<ValidationError>` by the [`crate::validation`] module and
//! wrapped here, so callers see every boundary violation at once.

use std::error::Error;
use std::fmt;

use crate::validation::ValidationError;

/// Errors raised by the optimization drivers.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// A rating was requested for a program/slot pair not covered by
    /// the rating matrix. Indicates bad input data; the run is aborted.
    MissingData {
        /// Program identifier that was looked up.
        program: String,
        /// Slot index that was out of range (or any index if the
        /// program itself is unknown).
        slot: usize,
    },
    /// Input too small for the configured operators (e.g., a lineup
    /// shorter than three slots cannot host a two-child crossover).
    DegenerateInput(String),
    /// One or more configuration values were out of range.
    InvalidConfig(Vec<ValidationError>),
    /// The conflict-minimization loop exhausted its generation budget
    /// without finding a conflict-free assignment.
    BudgetExhausted {
        /// Number of generations that were run.
        generations: u32,
        /// Best (lowest) conflict count observed.
        best_fitness: f64,
    },
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingData { program, slot } => {
                write!(f, "no rating for program '{program}' at slot {slot}")
            }
            Self::DegenerateInput(msg) => write!(f, "degenerate input: {msg}"),
            Self::InvalidConfig(errors) => {
                write!(f, "invalid configuration ({} issue(s)):", errors.len())?;
                for e in errors {
                    write!(f, " {};", e.message)?;
                }
                Ok(())
            }
            Self::BudgetExhausted {
                generations,
                best_fitness,
            } => write!(
                f,
                "no conflict-free schedule found within {generations} generations \
                 (best remaining conflicts: {best_fitness})"
            ),
        }
    }
}

impl Error for OptimizeError {}
