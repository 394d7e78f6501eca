//! GA run parameters.
//!
//! All knobs live in one [`GaConfig`] value passed into the drivers —
//! never process-wide state. Bounds are checked by
//! [`crate::validation::validate_config`] before a run starts;
//! out-of-range values are rejected, not clamped.

use serde::{Deserialize, Serialize};

use crate::ga::operators::MutationKind;
use crate::validation::{self, ValidationResult};

/// Genetic algorithm configuration.
///
/// Defaults: 100 generations, population 50, crossover 0.8,
/// mutation 0.2, elitism 2.
///
/// # Example
/// ```
/// use airsched::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_generations(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Generation budget (≥ 1).
    pub generations: u32,
    /// Population size P, constant across generations (≥ 2).
    pub population_size: usize,
    /// Probability of crossover per pairing, in [0, 1].
    pub crossover_rate: f64,
    /// Mutation probability, in [0, 1]. Gates the whole chromosome for
    /// [`MutationKind::SinglePoint`], applies per position for
    /// [`MutationKind::PerGene`].
    pub mutation_rate: f64,
    /// Candidates carried unchanged into the next generation
    /// (1 ≤ elitism < population).
    pub elitism_size: usize,
    /// Mutation strategy.
    pub mutation: MutationKind,
    /// RNG seed for reproducible runs. `None` = entropy from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 50,
            crossover_rate: 0.8,
            mutation_rate: 0.2,
            elitism_size: 2,
            mutation: MutationKind::SinglePoint,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the generation budget.
    pub fn with_generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elitism size.
    pub fn with_elitism_size(mut self, size: usize) -> Self {
        self.elitism_size = size;
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation_kind(mut self, kind: MutationKind) -> Self {
        self.mutation = kind;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks all parameter bounds.
    pub fn validate(&self) -> ValidationResult {
        validation::validate_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GaConfig::default();
        assert_eq!(config.generations, 100);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.crossover_rate, 0.8);
        assert_eq!(config.mutation_rate, 0.2);
        assert_eq!(config.elitism_size, 2);
        assert_eq!(config.mutation, MutationKind::SinglePoint);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = GaConfig::default()
            .with_generations(10)
            .with_population_size(8)
            .with_crossover_rate(0.5)
            .with_mutation_rate(0.1)
            .with_elitism_size(1)
            .with_mutation_kind(MutationKind::PerGene)
            .with_seed(7);
        assert_eq!(config.generations, 10);
        assert_eq!(config.mutation, MutationKind::PerGene);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = GaConfig::default().with_seed(42);
        let json = serde_json::to_string(&config).unwrap();
        let back: GaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
