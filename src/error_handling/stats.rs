//! Failure tallies.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Per-category count of failed requests in one run.
///
/// Every `ErrorType` is present from construction, starting at zero.
#[derive(Debug, Clone)]
pub struct FailureStats {
    errors: HashMap<ErrorType, usize>,
}

impl FailureStats {
    /// All categories at zero.
    pub fn new() -> Self {
        let errors = ErrorType::iter().map(|error| (error, 0)).collect();
        FailureStats { errors }
    }

    /// Counts one more failure of category `error`.
    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    /// Failures counted for `error`.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    /// Failures across all categories.
    pub fn total_errors(&self) -> usize {
        self.errors.values().sum()
    }

    /// Non-zero categories in `ErrorType` declaration order.
    pub fn non_zero(&self) -> Vec<(ErrorType, usize)> {
        ErrorType::iter()
            .map(|error| (error, self.get_error_count(error)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}
