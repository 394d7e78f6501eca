//! Conflict-minimization driver.
//!
//! Assigns one slot label per task, drawn with replacement from a
//! fixed label pool, and evolves the assignment until no two tasks
//! collide on the same label. Fitness is the number of duplicate
//! collisions; zero is the optimum and stops the run immediately.
//!
//! A conflict-free assignment can be unreachable (more tasks than
//! labels), so the configured generation budget is a hard cap:
//! exhausting it is a reportable [`OptimizeError::BudgetExhausted`],
//! never an endless loop.

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::error::OptimizeError;
use crate::ga::{GaConfig, GaProblem, GenerationStats, MutationKind, Objective, Population};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Counts duplicate collisions in a label assignment.
///
/// A position collides when its value already occurred at an earlier
/// position; the first occurrence of each value is free.
pub fn count_conflicts(labels: &[u32]) -> usize {
    let mut seen = HashSet::new();
    labels.iter().filter(|&&label| !seen.insert(label)).count()
}

/// Result of a conflict-mode run.
#[derive(Debug, Clone)]
pub struct ConflictSchedule {
    /// Slot label per task, in task order.
    pub labels: Vec<u32>,
    /// Remaining collisions (always 0 on success).
    pub conflicts: usize,
    /// Generations run before the conflict-free candidate appeared.
    /// Zero means the seeded population already contained one.
    pub generations_run: u32,
    /// Best fitness after each generation.
    pub trace: Vec<GenerationStats>,
}

/// GA problem over slot labels; fitness is the collision count.
/// Lower is better, zero terminates.
struct LabelProblem {
    task_count: usize,
    pool: Vec<u32>,
}

impl GaProblem for LabelProblem {
    type Gene = u32;

    fn objective(&self) -> Objective {
        Objective::Minimize
    }

    fn evaluate(&self, genes: &[u32]) -> f64 {
        count_conflicts(genes) as f64
    }

    fn seed_individual<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u32> {
        // No distinguished seed in this mode
        self.random_individual(rng)
    }

    fn random_individual<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u32> {
        (0..self.task_count).map(|_| self.random_gene(rng)).collect()
    }

    fn random_gene<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        // Pool is validated non-empty before the run starts.
        self.pool.choose(rng).copied().unwrap_or_default()
    }

    fn target_fitness(&self) -> Option<f64> {
        Some(0.0)
    }
}

/// GA solver for conflict-free slot-label assignment.
///
/// # Example
/// ```
/// use airsched::optimizer::ConflictSolver;
/// use airsched::ga::GaConfig;
///
/// let solver = ConflictSolver::new(5, (0..10).collect())
///     .with_config(ConflictSolver::default_config().with_seed(42));
/// let schedule = solver.solve().unwrap();
/// assert_eq!(schedule.conflicts, 0);
/// ```
#[derive(Debug, Clone)]
pub struct ConflictSolver {
    task_count: usize,
    label_pool: Vec<u32>,
    config: GaConfig,
}

impl ConflictSolver {
    /// Creates a solver for `task_count` tasks over `label_pool`.
    pub fn new(task_count: usize, label_pool: Vec<u32>) -> Self {
        Self {
            task_count,
            label_pool,
            config: Self::default_config(),
        }
    }

    /// Default configuration for this mode: per-gene mutation over the
    /// label pool, otherwise the shared defaults.
    pub fn default_config() -> GaConfig {
        GaConfig::default().with_mutation_kind(MutationKind::PerGene)
    }

    /// Sets the GA configuration. `generations` acts as the hard
    /// termination cap.
    pub fn with_config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the convergence loop.
    ///
    /// # Errors
    /// - [`OptimizeError::InvalidConfig`] for out-of-range parameters,
    ///   zero tasks, or an empty label pool
    /// - [`OptimizeError::BudgetExhausted`] when no conflict-free
    ///   assignment appears within the generation cap
    pub fn solve(&self) -> Result<ConflictSchedule, OptimizeError> {
        let mut errors = self.config.validate().err().unwrap_or_default();
        if self.task_count < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSize,
                "task count must be at least 1",
            ));
        }
        if self.label_pool.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyItemSet,
                "slot label pool is empty",
            ));
        }
        if !errors.is_empty() {
            return Err(OptimizeError::InvalidConfig(errors));
        }

        let problem = LabelProblem {
            task_count: self.task_count,
            pool: self.label_pool.clone(),
        };
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let mut population = Population::seed(&problem, &self.config, &mut rng);
        let mut trace = Vec::new();

        let reached = |fitness: f64| {
            problem
                .target_fitness()
                .is_some_and(|target| fitness <= target)
        };

        // The seeded population may already contain a zero-conflict
        // candidate.
        if let Some(best) = population.best() {
            if reached(best.fitness) {
                return Ok(ConflictSchedule {
                    labels: best.genes.clone(),
                    conflicts: count_conflicts(&best.genes),
                    generations_run: 0,
                    trace,
                });
            }
        }

        let mut best_fitness = f64::INFINITY;
        for generation in 1..=self.config.generations {
            population.evolve(&problem, &self.config, &mut rng);
            let best = population
                .best()
                .ok_or_else(|| OptimizeError::DegenerateInput("population is empty".into()))?;
            best_fitness = best.fitness;
            trace.push(GenerationStats {
                generation,
                best_fitness,
            });
            if reached(best_fitness) {
                return Ok(ConflictSchedule {
                    labels: best.genes.clone(),
                    conflicts: count_conflicts(&best.genes),
                    generations_run: generation,
                    trace,
                });
            }
        }

        Err(OptimizeError::BudgetExhausted {
            generations: self.config.generations,
            best_fitness,
        })
    }
}
