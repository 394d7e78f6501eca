//! Rating-maximization driver.
//!
//! # Algorithm
//!
//! 1. Enumerate all permutations of the program set and keep the
//!    highest-rated prefix (brute-force phase).
//! 2. Seed a GA population from that prefix and run the configured
//!    generation budget — no early stop in this mode.
//! 3. Concatenate the exhaustive prefix with the GA best, trimmed to
//!    the remaining slot count, and assemble the final [`Lineup`].
//!
//! The GA works on program indices into the rating matrix, so fitness
//! evaluation is a dense array lookup with no string hashing inside
//! the generation loop.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::OptimizeError;
use crate::exhaustive;
use crate::ga::{GaConfig, GaProblem, GenerationStats, Objective, Population};
use crate::models::{Lineup, RatingMatrix};
use crate::validation;

/// Standard broadcast day slot labels: hourly slots 06:00-23:00.
pub fn broadcast_day() -> Vec<u32> {
    (6..24).collect()
}

/// Result of a rating-mode optimization run.
#[derive(Debug, Clone)]
pub struct OptimizedSchedule {
    /// Final lineup: exhaustive prefix plus GA-derived suffix.
    pub lineup: Lineup,
    /// Number of leading slots fixed by the brute-force phase.
    pub exhaustive_len: usize,
    /// Best fitness after each GA generation.
    pub trace: Vec<GenerationStats>,
}

/// GA problem over program indices; fitness is the total rating of
/// the lineup prefix. Higher is better.
struct RatingProblem {
    /// Rating rows indexed by program position in the matrix.
    ratings: Vec<Vec<f64>>,
    /// Best exhaustive prefix, as indices.
    seed: Vec<usize>,
}

impl GaProblem for RatingProblem {
    type Gene = usize;

    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn evaluate(&self, genes: &[usize]) -> f64 {
        // Row coverage is validated before the run starts.
        genes
            .iter()
            .enumerate()
            .map(|(slot, &program)| self.ratings[program][slot])
            .sum()
    }

    fn seed_individual<R: Rng + ?Sized>(&self, _rng: &mut R) -> Vec<usize> {
        self.seed.clone()
    }

    fn random_individual<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        // Random reordering of the seed prefix
        let mut genes = self.seed.clone();
        genes.shuffle(rng);
        genes
    }

    fn random_gene<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.ratings.len())
    }
}

/// Hybrid brute-force + GA lineup optimizer.
///
/// # Example
/// ```
/// use airsched::models::RatingMatrix;
/// use airsched::optimizer::ScheduleOptimizer;
/// use airsched::ga::GaConfig;
///
/// let matrix = RatingMatrix::new()
///     .with_program("News", vec![10.0, 1.0, 1.0])
///     .with_program("Movie", vec![1.0, 10.0, 1.0])
///     .with_program("Sports", vec![1.0, 1.0, 10.0]);
///
/// let optimizer = ScheduleOptimizer::new(matrix, vec![6, 7, 8])
///     .with_config(GaConfig::default().with_generations(20).with_seed(42));
/// let result = optimizer.optimize().unwrap();
/// assert_eq!(result.lineup.programs(), vec!["News", "Movie", "Sports"]);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleOptimizer {
    matrix: RatingMatrix,
    slot_labels: Vec<u32>,
    config: GaConfig,
}

impl ScheduleOptimizer {
    /// Creates an optimizer over `matrix` for the given slot labels.
    ///
    /// The number of labels defines the schedule horizon; labels are
    /// carried into the final lineup for display.
    pub fn new(matrix: RatingMatrix, slot_labels: Vec<u32>) -> Self {
        Self {
            matrix,
            slot_labels,
            config: GaConfig::default(),
        }
    }

    /// Sets the GA configuration.
    pub fn with_config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the full hybrid optimization.
    ///
    /// # Errors
    /// - [`OptimizeError::InvalidConfig`] for out-of-range parameters
    ///   or rating rows that do not cover the scored slots
    /// - [`OptimizeError::MissingData`] if a lookup escapes the
    ///   validated range (bad input data)
    pub fn optimize(&self) -> Result<OptimizedSchedule, OptimizeError> {
        self.config
            .validate()
            .map_err(OptimizeError::InvalidConfig)?;
        validation::validate_ratings(&self.matrix, self.slot_labels.len())
            .map_err(OptimizeError::InvalidConfig)?;

        let slot_count = self.slot_labels.len();

        // Brute-force phase
        let (prefix, _) = exhaustive::best_lineup(&self.matrix, slot_count)?;
        let remaining = slot_count - prefix.len();

        // GA refinement, seeded from the exhaustive best
        let programs = self.matrix.programs();
        let index_of: HashMap<&str, usize> = programs
            .iter()
            .enumerate()
            .map(|(i, p)| (p.as_str(), i))
            .collect();
        let problem = RatingProblem {
            ratings: programs
                .iter()
                .filter_map(|p| self.matrix.row(p).map(<[f64]>::to_vec))
                .collect(),
            seed: prefix.iter().map(|p| index_of[p.as_str()]).collect(),
        };

        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let mut population = Population::seed(&problem, &self.config, &mut rng);

        let mut trace = Vec::with_capacity(self.config.generations as usize);
        for generation in 1..=self.config.generations {
            population.evolve(&problem, &self.config, &mut rng);
            if let Some(best) = population.best() {
                trace.push(GenerationStats {
                    generation,
                    best_fitness: best.fitness,
                });
            }
        }

        let ga_best = population
            .best()
            .ok_or_else(|| OptimizeError::DegenerateInput("population is empty".into()))?;

        // Result assembly: exhaustive prefix ++ GA suffix
        let mut lineup = Lineup::new();
        for (slot, program) in prefix.iter().enumerate() {
            lineup.push(
                self.slot_labels[slot],
                program.as_str(),
                self.matrix.rating(program, slot)?,
            );
        }
        for (offset, &gene) in ga_best.genes.iter().take(remaining).enumerate() {
            let slot = prefix.len() + offset;
            let program = &programs[gene];
            lineup.push(
                self.slot_labels[slot],
                program.as_str(),
                self.matrix.rating(program, slot)?,
            );
        }

        Ok(OptimizedSchedule {
            lineup,
            exhaustive_len: prefix.len(),
            trace,
        })
    }
}
