//! Genetic operators: crossover and mutation.
//!
//! Operators work on plain gene slices and return owned children, so
//! parents are never aliased into offspring — every boundary is a
//! value copy.
//!
//! Two mutation policies exist in this domain and both are preserved
//! behind [`MutationKind`]: the brute-force-seeded lineup optimizer
//! mutates exactly one random position per invocation, while the
//! conflict solver runs an independent Bernoulli trial per position.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ga::problem::GaProblem;

/// Mutation strategy, selectable at runtime via
/// [`crate::ga::GaConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    /// Replace exactly one uniformly chosen position per invocation.
    /// The configured mutation rate gates whether the invocation
    /// happens at all.
    SinglePoint,
    /// Replace each position independently with probability equal to
    /// the configured mutation rate.
    PerGene,
}

impl MutationKind {
    /// Applies this mutation policy to `genes` in place.
    ///
    /// `rate` is interpreted per policy: as an invocation gate for
    /// [`MutationKind::SinglePoint`], as a per-position probability
    /// for [`MutationKind::PerGene`].
    pub fn apply<P, R>(self, problem: &P, genes: &mut [P::Gene], rate: f64, rng: &mut R)
    where
        P: GaProblem,
        R: Rng + ?Sized,
    {
        match self {
            Self::SinglePoint => {
                if rng.random_bool(rate) {
                    point_mutation(problem, genes, rng);
                }
            }
            Self::PerGene => per_gene_mutation(problem, genes, rate, rng),
        }
    }
}

/// Single-point crossover producing two children.
///
/// The crossover point is uniform in `[1, len - 2]`, so each child
/// inherits a non-empty segment from both parents. Parents shorter
/// than 3 genes (or of unequal length) cannot host such a point;
/// the operator then degrades to verbatim copies instead of panicking
/// on an empty range.
pub fn single_point_crossover<G, R>(parent1: &[G], parent2: &[G], rng: &mut R) -> (Vec<G>, Vec<G>)
where
    G: Clone,
    R: Rng + ?Sized,
{
    if parent1.len() != parent2.len() || parent1.len() < 3 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let point = rng.random_range(1..parent1.len() - 1);
    let mut child1 = parent1[..point].to_vec();
    child1.extend_from_slice(&parent2[point..]);
    let mut child2 = parent2[..point].to_vec();
    child2.extend_from_slice(&parent1[point..]);
    (child1, child2)
}

/// Replaces one uniformly chosen position with a fresh pool draw.
///
/// May introduce duplicate genes in rating mode; duplicates are
/// accepted, not repaired.
pub fn point_mutation<P, R>(problem: &P, genes: &mut [P::Gene], rng: &mut R)
where
    P: GaProblem,
    R: Rng + ?Sized,
{
    if genes.is_empty() {
        return;
    }
    let position = rng.random_range(0..genes.len());
    genes[position] = problem.random_gene(rng);
}

/// Replaces each position independently with probability `rate`.
pub fn per_gene_mutation<P, R>(problem: &P, genes: &mut [P::Gene], rate: f64, rng: &mut R)
where
    P: GaProblem,
    R: Rng + ?Sized,
{
    for gene in genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = problem.random_gene(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::problem::Objective;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Minimal problem over genes 0..10 for operator tests.
    struct PoolProblem;

    impl GaProblem for PoolProblem {
        type Gene = u32;

        fn objective(&self) -> Objective {
            Objective::Minimize
        }

        fn evaluate(&self, _genes: &[u32]) -> f64 {
            0.0
        }

        fn seed_individual<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u32> {
            self.random_individual(rng)
        }

        fn random_individual<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u32> {
            (0..5).map(|_| self.random_gene(rng)).collect()
        }

        fn random_gene<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
            rng.random_range(0..10)
        }
    }

    #[test]
    fn test_crossover_preserves_length() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1: Vec<u32> = vec![1, 2, 3, 4, 5];
        let p2: Vec<u32> = vec![6, 7, 8, 9, 10];

        for _ in 0..50 {
            let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(c1.len(), 5);
            assert_eq!(c2.len(), 5);
        }
    }

    #[test]
    fn test_crossover_children_swap_suffixes() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1: Vec<u32> = vec![1, 1, 1, 1];
        let p2: Vec<u32> = vec![2, 2, 2, 2];

        let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
        // Each child starts with its template parent and ends with
        // the donor's suffix.
        assert_eq!(c1[0], 1);
        assert_eq!(*c1.last().unwrap(), 2);
        assert_eq!(c2[0], 2);
        assert_eq!(*c2.last().unwrap(), 1);
    }

    #[test]
    fn test_crossover_degenerate_length_copies_parents() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1: Vec<u32> = vec![1, 2];
        let p2: Vec<u32> = vec![3, 4];

        let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn test_crossover_unequal_length_copies_parents() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1: Vec<u32> = vec![1, 2, 3, 4];
        let p2: Vec<u32> = vec![5, 6, 7];

        let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn test_point_mutation_changes_one_position() {
        let mut rng = SmallRng::seed_from_u64(42);
        // Genes outside the pool so any replacement is visible
        let original: Vec<u32> = vec![100, 100, 100, 100, 100];

        let mut genes = original.clone();
        point_mutation(&PoolProblem, &mut genes, &mut rng);
        let changed = genes
            .iter()
            .zip(&original)
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_mutation_draws_from_pool() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut genes: Vec<u32> = vec![100; 8];

        per_gene_mutation(&PoolProblem, &mut genes, 1.0, &mut rng);
        // Every position replaced, and only with pool values
        assert!(genes.iter().all(|&g| g < 10));
    }

    #[test]
    fn test_per_gene_mutation_zero_rate_is_noop() {
        let mut rng = SmallRng::seed_from_u64(42);
        let original: Vec<u32> = vec![1, 2, 3];
        let mut genes = original.clone();

        per_gene_mutation(&PoolProblem, &mut genes, 0.0, &mut rng);
        assert_eq!(genes, original);
    }

    #[test]
    fn test_single_point_kind_gated_by_rate() {
        let mut rng = SmallRng::seed_from_u64(42);
        let original: Vec<u32> = vec![100; 5];
        let mut genes = original.clone();

        MutationKind::SinglePoint.apply(&PoolProblem, &mut genes, 0.0, &mut rng);
        assert_eq!(genes, original);

        MutationKind::SinglePoint.apply(&PoolProblem, &mut genes, 1.0, &mut rng);
        let changed = genes
            .iter()
            .zip(&original)
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
    }
}
