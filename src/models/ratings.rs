//! Slot-dependent rating data.
//!
//! A [`RatingMatrix`] maps each program to an ordered sequence of
//! rating values, one per slot index. It is loaded once before a run
//! and never mutated afterwards; every lookup during optimization must
//! hit a covered (program, slot) pair — absence is an input error, not
//! a silent zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;

/// Program-by-slot rating data.
///
/// Program order is preserved from insertion, so exhaustive enumeration
/// and seeded runs are reproducible for a given input.
///
/// # Example
/// ```
/// use airsched::models::RatingMatrix;
///
/// let matrix = RatingMatrix::new()
///     .with_program("News", vec![0.5, 0.8, 0.9])
///     .with_program("Movie", vec![0.7, 0.6, 0.4]);
///
/// assert_eq!(matrix.program_count(), 2);
/// assert_eq!(matrix.rating("News", 1).unwrap(), 0.8);
/// assert!(matrix.rating("News", 9).is_err());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingMatrix {
    /// Program IDs in insertion order.
    order: Vec<String>,
    /// Program ID → per-slot ratings.
    rows: HashMap<String, Vec<f64>>,
}

impl RatingMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a matrix from (program, ratings) rows.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut matrix = Self::new();
        for (program, ratings) in rows {
            matrix = matrix.with_program(program, ratings);
        }
        matrix
    }

    /// Adds a program with its per-slot ratings.
    ///
    /// Duplicate IDs are kept in the order list so that boundary
    /// validation can report them.
    pub fn with_program(mut self, program: impl Into<String>, ratings: Vec<f64>) -> Self {
        let program = program.into();
        self.order.push(program.clone());
        self.rows.insert(program, ratings);
        self
    }

    /// Rating of `program` at slot index `slot`.
    ///
    /// # Errors
    /// [`OptimizeError::MissingData`] if the program is unknown or the
    /// slot index is past the end of its rating row.
    pub fn rating(&self, program: &str, slot: usize) -> Result<f64, OptimizeError> {
        self.rows
            .get(program)
            .and_then(|row| row.get(slot))
            .copied()
            .ok_or_else(|| OptimizeError::MissingData {
                program: program.to_string(),
                slot,
            })
    }

    /// Program IDs in insertion order.
    pub fn programs(&self) -> &[String] {
        &self.order
    }

    /// Number of programs.
    pub fn program_count(&self) -> usize {
        self.order.len()
    }

    /// Whether the matrix has no programs.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Length of a program's rating row, if the program exists.
    pub fn row_len(&self, program: &str) -> Option<usize> {
        self.rows.get(program).map(Vec::len)
    }

    /// Full rating row of a program, if the program exists.
    pub fn row(&self, program: &str) -> Option<&[f64]> {
        self.rows.get(program).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> RatingMatrix {
        RatingMatrix::new()
            .with_program("News", vec![0.5, 0.8, 0.9])
            .with_program("Movie", vec![0.7, 0.6, 0.4])
            .with_program("Sports", vec![0.3, 0.9, 0.2])
    }

    #[test]
    fn test_rating_lookup() {
        let m = sample_matrix();
        assert_eq!(m.rating("News", 0).unwrap(), 0.5);
        assert_eq!(m.rating("Sports", 1).unwrap(), 0.9);
    }

    #[test]
    fn test_unknown_program_is_error() {
        let m = sample_matrix();
        let err = m.rating("Quiz", 0).unwrap_err();
        assert_eq!(
            err,
            OptimizeError::MissingData {
                program: "Quiz".into(),
                slot: 0
            }
        );
    }

    #[test]
    fn test_slot_out_of_range_is_error() {
        let m = sample_matrix();
        assert!(m.rating("News", 3).is_err());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let m = sample_matrix();
        assert_eq!(m.programs(), &["News", "Movie", "Sports"]);
    }

    #[test]
    fn test_from_rows() {
        let m = RatingMatrix::from_rows(vec![
            ("A", vec![1.0]),
            ("B", vec![2.0]),
        ]);
        assert_eq!(m.program_count(), 2);
        assert_eq!(m.rating("B", 0).unwrap(), 2.0);
    }

    #[test]
    fn test_row_len() {
        let m = sample_matrix();
        assert_eq!(m.row_len("News"), Some(3));
        assert_eq!(m.row_len("Quiz"), None);
    }

    #[test]
    fn test_json_round_trip() {
        let m = sample_matrix();
        let json = serde_json::to_string(&m).unwrap();
        let back: RatingMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back.programs(), m.programs());
        assert_eq!(back.rating("Movie", 2).unwrap(), 0.4);
    }
}
