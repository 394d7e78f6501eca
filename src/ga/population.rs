//! Population management: seeding, selection, and elitist turnover.
//!
//! A [`Population`] owns the scored candidates of the current
//! generation. Replacement is unconditional turnover each cycle,
//! except for the elites carried over unchanged; population size is a
//! constant P every generation in both objective modes.
//!
//! # Invariant
//! Candidates are kept sorted best-first (per the problem's
//! [`Objective`]) between operations, so `candidates()[0]` is always
//! the incumbent best.

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ga::config::GaConfig;
use crate::ga::operators::single_point_crossover;
use crate::ga::problem::{GaProblem, Objective};

/// A chromosome tagged with its fitness.
#[derive(Debug, Clone)]
pub struct Candidate<G> {
    /// Gene sequence; position i denotes "this gene occupies slot i".
    pub genes: Vec<G>,
    /// Scalar fitness; direction of "better" is mode-dependent.
    pub fitness: f64,
}

/// One entry of the per-generation trace, suitable for progressive
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation counter, starting at 1.
    pub generation: u32,
    /// Best fitness in the population after this generation.
    pub best_fitness: f64,
}

/// A fixed-size population of scored candidates.
#[derive(Debug, Clone)]
pub struct Population<G> {
    candidates: Vec<Candidate<G>>,
    objective: Objective,
}

impl<G: Clone> Population<G> {
    /// Seeds a population of `config.population_size` candidates.
    ///
    /// Entry 0 is the problem's seed individual unchanged; the rest
    /// are fresh random individuals. Every entry is scored
    /// immediately and the population is sorted best-first.
    pub fn seed<P, R>(problem: &P, config: &GaConfig, rng: &mut R) -> Self
    where
        P: GaProblem<Gene = G>,
        R: Rng + ?Sized,
    {
        let mut candidates = Vec::with_capacity(config.population_size);

        let seed_genes = problem.seed_individual(rng);
        candidates.push(Candidate {
            fitness: problem.evaluate(&seed_genes),
            genes: seed_genes,
        });
        while candidates.len() < config.population_size {
            let genes = problem.random_individual(rng);
            candidates.push(Candidate {
                fitness: problem.evaluate(&genes),
                genes,
            });
        }

        let mut population = Self {
            candidates,
            objective: problem.objective(),
        };
        population.sort_by_objective();
        population
    }

    /// Sorts candidates best-first per the objective direction.
    ///
    /// The sort is stable, so ties keep their previous relative order
    /// and seeded runs are reproducible.
    pub fn sort_by_objective(&mut self) {
        match self.objective {
            Objective::Maximize => self.candidates.sort_by(|a, b| {
                b.fitness
                    .partial_cmp(&a.fitness)
                    .unwrap_or(Ordering::Equal)
            }),
            Objective::Minimize => self.candidates.sort_by(|a, b| {
                a.fitness
                    .partial_cmp(&b.fitness)
                    .unwrap_or(Ordering::Equal)
            }),
        }
    }

    /// Truncates to the better half of the population.
    pub fn select_survivors(&mut self) {
        let keep = self.candidates.len().div_ceil(2);
        self.candidates.truncate(keep);
    }

    /// Advances one generation.
    ///
    /// The top `elitism_size` candidates are carried unchanged; the
    /// remainder is bred from the surviving top half by uniform parent
    /// draws with replacement, crossover with probability
    /// `crossover_rate` (skips copy the parents verbatim), then the
    /// configured mutation. Offspring are scored on creation and the
    /// next generation replaces the current one at the same size P.
    pub fn evolve<P, R>(&mut self, problem: &P, config: &GaConfig, rng: &mut R)
    where
        P: GaProblem<Gene = G>,
        R: Rng + ?Sized,
    {
        let elite_count = config.elitism_size.min(self.candidates.len());
        let mut next: Vec<Candidate<G>> = self.candidates[..elite_count].to_vec();

        let survivor_count = self.candidates.len().div_ceil(2);
        let survivors = &self.candidates[..survivor_count];

        while next.len() < config.population_size {
            let parent1 = &survivors[rng.random_range(0..survivors.len())];
            let parent2 = &survivors[rng.random_range(0..survivors.len())];

            let (child1, child2) = if rng.random_bool(config.crossover_rate) {
                single_point_crossover(&parent1.genes, &parent2.genes, rng)
            } else {
                (parent1.genes.clone(), parent2.genes.clone())
            };

            for mut genes in [child1, child2] {
                if next.len() >= config.population_size {
                    break;
                }
                config
                    .mutation
                    .apply(problem, &mut genes, config.mutation_rate, rng);
                next.push(Candidate {
                    fitness: problem.evaluate(&genes),
                    genes,
                });
            }
        }

        self.candidates = next;
        self.sort_by_objective();
    }

    /// The incumbent best candidate.
    pub fn best(&self) -> Option<&Candidate<G>> {
        self.candidates.first()
    }

    /// All candidates, best-first.
    pub fn candidates(&self) -> &[Candidate<G>] {
        &self.candidates
    }

    /// Population size.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
