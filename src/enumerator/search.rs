use log::{info, warn};

use crate::combination::Enumeration;

use super::constants::DEFAULT_RESULT_CAP;
use super::errors::EnumeratorError;
use super::iter::Combinations;

/// Bounded enumerator for the letter combinations of a digit string.
///
/// Collects combinations in discovery order and stops globally once the
/// result cap is reached, abandoning every pending branch.
pub struct Enumerator {
    cap: usize,
}

impl Enumerator {
    /// Create an enumerator with the default result cap.
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_RESULT_CAP)
    }

    /// Create an enumerator that collects at most `cap` combinations.
    pub fn with_cap(cap: usize) -> Self {
        Self { cap }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Enumerate the letter combinations of `digits` in discovery order.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` contains any non-digit character. An
    /// empty string is valid and yields an empty enumeration.
    pub fn enumerate(&self, digits: &str) -> Result<Enumeration, EnumeratorError> {
        let mut search = Combinations::new(digits)?;

        let combinations: Vec<_> = search.by_ref().take(self.cap).collect();

        // Branches still pending after collection stopped mean more
        // combinations may exist beyond what was returned.
        let truncated = !search.is_exhausted();
        if truncated {
            warn!(
                "Stopped after {} combinations, abandoning the remaining search",
                combinations.len()
            );
        }

        info!(
            "Enumerated {} combinations (truncated: {})",
            combinations.len(),
            truncated
        );

        Ok(Enumeration {
            combinations,
            truncated,
        })
    }
}

impl Default for Enumerator {
    fn default() -> Self {
        Self::new()
    }
}
