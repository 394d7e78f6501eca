//! Exhaustive permutation search (brute-force phase).
//!
//! Enumerates every ordering of the program set lazily and keeps the
//! one with the highest total rating. Exponential in the number of
//! programs — intended only for small program counts; the GA phase
//! covers whatever the exhaustive prefix leaves open.
//!
//! # Algorithm
//! Non-recursive Heap's algorithm: each step produces the next
//! permutation with a single swap, so enumeration allocates one clone
//! per yielded permutation and nothing else.
//!
//! # Reference
//! Heap (1963), "Permutations by Interchanges"

use crate::error::OptimizeError;
use crate::models::RatingMatrix;

/// Lazy iterator over all permutations of a fixed item set.
///
/// Yields exactly `n!` orderings, each a bijection of the input.
/// Output order is an implementation detail; completeness is the
/// contract.
///
/// # Example
/// ```
/// use airsched::exhaustive::permutations;
///
/// let all: Vec<Vec<u8>> = permutations(&[1, 2, 3]).collect();
/// assert_eq!(all.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    stack_pos: usize,
    first: bool,
    done: bool,
}

/// Creates a lazy permutation iterator over `items`.
pub fn permutations<T: Clone>(items: &[T]) -> Permutations<T> {
    Permutations {
        items: items.to_vec(),
        counters: vec![0; items.len()],
        stack_pos: 1,
        first: true,
        done: false,
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.items.clone());
        }

        let n = self.items.len();
        while self.stack_pos < n {
            let i = self.stack_pos;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.stack_pos = 1;
                return Some(self.items.clone());
            }
            self.counters[i] = 0;
            self.stack_pos += 1;
        }

        self.done = true;
        None
    }
}

/// Finds the permutation prefix with the highest total rating.
///
/// Every permutation of the full program set is scored over
/// `min(program_count, slot_count)` positions: when programs outnumber
/// slots the ordering is truncated at the slot horizon, and when slots
/// outnumber programs the prefix is scored over its own length and the
/// GA phase fills the remainder.
///
/// Ties keep the first permutation encountered.
///
/// # Errors
/// [`OptimizeError::MissingData`] if a scored (program, slot) pair is
/// not covered by the matrix. Callers that pre-validate with
/// [`crate::validation::validate_ratings`] will never hit this.
pub fn best_lineup(
    matrix: &RatingMatrix,
    slot_count: usize,
) -> Result<(Vec<String>, f64), OptimizeError> {
    if matrix.is_empty() {
        return Err(OptimizeError::DegenerateInput(
            "no programs to enumerate".into(),
        ));
    }

    let horizon = matrix.program_count().min(slot_count);
    let mut best: Option<(Vec<String>, f64)> = None;

    for perm in permutations(matrix.programs()) {
        let mut total = 0.0;
        for (slot, program) in perm.iter().take(horizon).enumerate() {
            total += matrix.rating(program, slot)?;
        }
        let better = match &best {
            Some((_, score)) => total > *score,
            None => true,
        };
        if better {
            let mut prefix = perm;
            prefix.truncate(horizon);
            best = Some((prefix, total));
        }
    }

    best.ok_or_else(|| OptimizeError::DegenerateInput("no programs to enumerate".into()))
}
