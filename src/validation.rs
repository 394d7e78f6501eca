//! Boundary validation for optimizer inputs.
//!
//! Checks configuration values and rating data before optimization
//! starts. Detects:
//! - Rates outside [0, 1]
//! - Degenerate population / generation / elitism sizes
//! - Empty program sets and rating rows shorter than the slot horizon
//!
//! Out-of-range values are rejected with a descriptive error, never
//! silently clamped.

use std::collections::HashSet;

use crate::ga::GaConfig;
use crate::models::RatingMatrix;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A probability parameter is outside [0, 1].
    InvalidRate,
    /// A count parameter (generations, population, tasks, slots) is
    /// below its minimum.
    InvalidSize,
    /// Elitism size does not fit inside the population.
    ElitismTooLarge,
    /// No programs were provided.
    EmptyItemSet,
    /// Two programs share the same identifier.
    DuplicateId,
    /// A rating row does not cover the slot horizon.
    ShortRatingRow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates GA configuration bounds.
///
/// Checks:
/// 1. Generation count ≥ 1
/// 2. Population size ≥ 2
/// 3. Crossover rate ∈ [0, 1]
/// 4. Mutation rate ∈ [0, 1]
/// 5. 1 ≤ elitism size < population size
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &GaConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.generations < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSize,
            "generation count must be at least 1",
        ));
    }
    if config.population_size < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSize,
            format!(
                "population size must be at least 2, got {}",
                config.population_size
            ),
        ));
    }
    if !(0.0..=1.0).contains(&config.crossover_rate) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRate,
            format!(
                "crossover rate must be within [0, 1], got {}",
                config.crossover_rate
            ),
        ));
    }
    if !(0.0..=1.0).contains(&config.mutation_rate) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRate,
            format!(
                "mutation rate must be within [0, 1], got {}",
                config.mutation_rate
            ),
        ));
    }
    if config.elitism_size < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSize,
            "elitism size must be at least 1",
        ));
    } else if config.elitism_size >= config.population_size {
        errors.push(ValidationError::new(
            ValidationErrorKind::ElitismTooLarge,
            format!(
                "elitism size {} must be smaller than population size {}",
                config.elitism_size, config.population_size
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates rating data against a slot horizon.
///
/// Checks:
/// 1. At least one program
/// 2. No duplicate program IDs
/// 3. Every rating row covers the scored slot range
///
/// Run before the exhaustive phase so that every rating lookup during
/// optimization is known to succeed.
pub fn validate_ratings(matrix: &RatingMatrix, slot_count: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if matrix.program_count() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyItemSet,
            "rating matrix contains no programs",
        ));
    }
    if slot_count < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSize,
            "slot count must be at least 1",
        ));
    }

    let mut seen = HashSet::new();
    for program in matrix.programs() {
        if !seen.insert(program) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate program ID: {program}"),
            ));
        }
    }

    // The exhaustive prefix covers min(|programs|, slot_count) slots
    // and the GA suffix can extend the final lineup to at most twice
    // that (capped at the horizon), so rows must reach that far.
    let prefix_len = matrix.program_count().min(slot_count);
    let scored_len = (2 * prefix_len).min(slot_count);
    for program in matrix.programs() {
        let row_len = matrix.row_len(program).unwrap_or(0);
        if row_len < scored_len {
            errors.push(ValidationError::new(
                ValidationErrorKind::ShortRatingRow,
                format!(
                    "program '{program}' has {row_len} ratings, \
                     but {scored_len} slots are scored"
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::GaConfig;
    use crate::models::RatingMatrix;

    fn sample_matrix() -> RatingMatrix {
        RatingMatrix::new()
            .with_program("News", vec![0.5, 0.8, 0.9])
            .with_program("Movie", vec![0.7, 0.6, 0.4])
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&GaConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_generations() {
        let config = GaConfig::default().with_generations(0);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSize));
    }

    #[test]
    fn test_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSize));
    }

    #[test]
    fn test_rate_out_of_range() {
        let config = GaConfig::default()
            .with_crossover_rate(1.5)
            .with_mutation_rate(-0.1);
        let errors = validate_config(&config).unwrap_err();
        let rate_errors = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidRate)
            .count();
        assert_eq!(rate_errors, 2);
    }

    #[test]
    fn test_elitism_must_fit() {
        let config = GaConfig::default()
            .with_population_size(4)
            .with_elitism_size(4);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ElitismTooLarge));
    }

    #[test]
    fn test_elitism_zero_rejected() {
        let config = GaConfig::default().with_elitism_size(0);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSize));
    }

    #[test]
    fn test_valid_ratings() {
        assert!(validate_ratings(&sample_matrix(), 3).is_ok());
    }

    #[test]
    fn test_empty_matrix() {
        let errors = validate_ratings(&RatingMatrix::new(), 3).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyItemSet));
    }

    #[test]
    fn test_short_rating_row() {
        let matrix = RatingMatrix::new()
            .with_program("News", vec![0.5, 0.8, 0.9])
            .with_program("Movie", vec![0.7]);
        let errors = validate_ratings(&matrix, 3).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ShortRatingRow
                && e.message.contains("Movie")));
    }

    #[test]
    fn test_rows_cover_prefix_plus_suffix() {
        // 2 programs, 5 slots: the final lineup reaches 4 slots
        // (2 exhaustive + 2 GA), so 4 covered entries suffice.
        let matrix = RatingMatrix::new()
            .with_program("A", vec![1.0, 2.0, 3.0, 4.0])
            .with_program("B", vec![2.0, 1.0, 4.0, 3.0]);
        assert!(validate_ratings(&matrix, 5).is_ok());

        // 2 covered entries do not reach the GA suffix.
        let short = RatingMatrix::new()
            .with_program("A", vec![1.0, 2.0])
            .with_program("B", vec![2.0, 1.0]);
        let errors = validate_ratings(&short, 5).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ShortRatingRow));
    }

    #[test]
    fn test_zero_slots_rejected() {
        let errors = validate_ratings(&sample_matrix(), 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSize));
    }
}
