use crate::utils::{UtilsError, group_value};

/// A run of one or two digits mapped to a single letter.
///
/// One-digit groups cover values 1-9 and two-digit groups cover 10-26, which
/// rules out both a lone zero and a leading-zero pair like "05". The stored
/// value is always in 1..=26.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    value: u8,
}

impl Group {
    /// Read the group covering `digits[start..end]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is out of bounds or the digits in it do
    /// not map to a letter.
    pub fn from_digits(digits: &str, start: usize, end: usize) -> Result<Self, UtilsError> {
        let value = group_value(digits, start, end)?;
        let width = end - start;
        let valid = match width {
            1 => (1..=9).contains(&value),
            2 => (10..=26).contains(&value),
            _ => false,
        };
        if !valid {
            return Err(UtilsError::InvalidGroup { value, width });
        }
        Ok(Self { value })
    }

    /// The group's numeric value, in 1..=26.
    pub fn value(self) -> u8 {
        self.value
    }

    /// The letter this group spells (1 is 'A', 26 is 'Z').
    pub fn letter(self) -> char {
        char::from(b'A' + self.value - 1)
    }
}
