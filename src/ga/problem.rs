//! GA problem definition.
//!
//! A [`GaProblem`] supplies everything the population machinery needs
//! about a concrete optimization: the gene type, fitness evaluation,
//! the comparison direction, and how to draw fresh genetic material.
//! Selection, elitism, and termination all consult [`Objective`] so
//! the two modes can never be mixed within one run.

use rand::Rng;

/// Direction in which fitness improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Higher fitness is better (rating maximization).
    Maximize,
    /// Lower fitness is better (conflict minimization).
    Minimize,
}

impl Objective {
    /// Whether fitness `a` is strictly better than `b` under this
    /// objective.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Self::Maximize => a > b,
            Self::Minimize => a < b,
        }
    }
}

/// A GA-solvable optimization problem.
///
/// Implementations must keep `evaluate` pure: candidates are scored
/// independently and the population machinery assumes no shared
/// mutable state between evaluations.
pub trait GaProblem {
    /// Gene type; one chromosome is a `Vec<Self::Gene>`.
    type Gene: Clone;

    /// Comparison direction for fitness values.
    fn objective(&self) -> Objective;

    /// Scores a chromosome. Must not depend on evaluation order.
    fn evaluate(&self, genes: &[Self::Gene]) -> f64;

    /// The chromosome placed at index 0 when seeding a population.
    ///
    /// Rating mode returns the best exhaustive prefix unchanged;
    /// problems without a distinguished seed may return a random
    /// individual.
    fn seed_individual<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Self::Gene>;

    /// A fresh random chromosome for the rest of the initial
    /// population.
    fn random_individual<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Self::Gene>;

    /// A uniform draw from the gene pool, used by mutation.
    fn random_gene<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Gene;

    /// Fitness at which the run may stop early, if one exists.
    ///
    /// Conflict minimization returns `Some(0.0)`; rating maximization
    /// has no such target and runs its full generation budget.
    fn target_fitness(&self) -> Option<f64> {
        None
    }
}
