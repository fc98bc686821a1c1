use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnumeratorError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] UtilsError),
}
