use log::debug;

use crate::combination::{Combination, Group};
use crate::utils::validate_digit_string;

use super::errors::EnumeratorError;

/// One pending branch of the depth-first search: the next index to cover and
/// the groups chosen so far. Each branch owns its path, so siblings never
/// share mutable state.
#[derive(Debug, Clone)]
struct Frame {
    index: usize,
    groups: Vec<Group>,
}

/// Streaming depth-first enumeration of the letter combinations of a digit
/// string.
///
/// At each index the one-digit group is explored before the two-digit group,
/// so combinations arrive in a fixed, reproducible order that does not depend
/// on how many items the caller consumes.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    digits: &'a str,
    stack: Vec<Frame>,
}

impl<'a> Combinations<'a> {
    /// Start a search over `digits`.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` contains any non-digit character. An
    /// empty string is valid and yields no combinations.
    pub fn new(digits: &'a str) -> Result<Self, EnumeratorError> {
        validate_digit_string(digits)?;

        let mut stack = Vec::new();
        if !digits.is_empty() {
            stack.push(Frame {
                index: 0,
                groups: Vec::new(),
            });
        }

        debug!("Initialized combination search over {} digits", digits.len());

        Ok(Self { digits, stack })
    }

    /// Whether the search has no pending branches left.
    pub fn is_exhausted(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            if frame.index == self.digits.len() {
                return Some(Combination::from_groups(&frame.groups));
            }

            // Push the two-digit branch first so the one-digit branch is
            // popped and fully explored before it.
            if frame.index + 2 <= self.digits.len()
                && let Ok(group) = Group::from_digits(self.digits, frame.index, frame.index + 2)
            {
                let mut groups = frame.groups.clone();
                groups.push(group);
                self.stack.push(Frame {
                    index: frame.index + 2,
                    groups,
                });
            }

            if let Ok(group) = Group::from_digits(self.digits, frame.index, frame.index + 1) {
                let mut groups = frame.groups;
                groups.push(group);
                self.stack.push(Frame {
                    index: frame.index + 1,
                    groups,
                });
            }
        }
        None
    }
}
