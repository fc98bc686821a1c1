//! Lettercomb - A library for enumerating the letter spellings of digit strings
//!
//! A digit string can be decomposed into groups of one or two digits, with
//! each group value mapped to a letter (1 is 'A', 26 is 'Z'). This library
//! enumerates every such decomposition in a fixed depth-first order, bounded
//! by a hard result cap.

pub mod combination;
pub mod enumerator;
pub mod utils;

// Re-export the main public API
pub use combination::{Combination, Enumeration, Group};
pub use enumerator::{Combinations, Enumerator, EnumeratorError};
pub use utils::{UtilsError, validate_digit_string};

/// Enumerate the letter combinations of `digits`, collecting at most `cap`
/// results.
///
/// This is a convenience function that builds an enumerator with the given
/// cap and runs it once. Combinations arrive in discovery order: at each
/// position the one-digit group is tried before the two-digit group.
///
/// # Arguments
///
/// * `digits` - A string containing only ASCII digits (may be empty)
/// * `cap` - Maximum number of combinations to collect before stopping
///
/// # Returns
///
/// * `Ok(Enumeration)` - The ordered combinations plus a `truncated` flag
///   that is set when the search stopped at the cap
/// * `Err(EnumeratorError)` - If the input contains non-digit characters
///
/// # Errors
///
/// This function will return an error if the digit string contains any
/// non-digit characters. An empty string is valid and yields an empty
/// enumeration.
///
/// # Examples
///
/// ```
/// use lettercomb::enumerate_combinations;
///
/// // "11" spells "AA" (1 1) and "K" (11)
/// match enumerate_combinations("11", 50_000) {
///     Ok(enumeration) => {
///         for combination in &enumeration.combinations {
///             println!("{}", combination);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn enumerate_combinations(digits: &str, cap: usize) -> Result<Enumeration, EnumeratorError> {
    let enumerator = Enumerator::with_cap(cap);
    enumerator.enumerate(digits)
}
