use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parse the group value covering `digits[start..end]`.
///
/// Groups are at most two digits, so the value always fits in a `u8`.
///
/// # Errors
///
/// Returns an error if the provided indices are out of bounds or invalid,
/// or if the selected slice has a leading zero or cannot be parsed.
pub fn group_value(digits: &str, start: usize, end: usize) -> Result<u8, UtilsError> {
    debug!("Reading group digits[{}..{}] from '{}'", start, end, digits);

    if start >= digits.len() || end > digits.len() || start >= end {
        warn!(
            "Invalid range: start={}, end={}, length={}",
            start,
            end,
            digits.len()
        );
        return Err(UtilsError::InvalidRange {
            start,
            end,
            length: digits.len(),
        });
    }

    let slice = digits.get(start..end).ok_or(UtilsError::InvalidRange {
        start,
        end,
        length: digits.len(),
    })?;

    if slice.len() > 1 && slice.starts_with('0') {
        debug!("Rejecting group with leading zero: '{}'", slice);
        return Err(UtilsError::InvalidDigitString(slice.to_string()));
    }

    let value = slice
        .parse::<u8>()
        .map_err(|_| UtilsError::InvalidDigitString(slice.to_string()))?;
    debug!("Read group '{}' as {}", slice, value);
    Ok(value)
}
