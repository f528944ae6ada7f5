use std::fmt;

use crate::idct::{BLOCK_SIZE, MAX_COEFFICIENT, MIN_COEFFICIENT};

/// Rejection of a coefficient buffer at the transform boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    InvalidLength { len: usize },
    /// Coefficient at `index` lies outside `MIN_COEFFICIENT..=MAX_COEFFICIENT`.
    OutOfRange { index: usize, value: i32 },
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::InvalidLength { len } => {
                write!(
                    f,
                    "invalid block length {}: an 8x8 block holds exactly {} coefficients",
                    len, BLOCK_SIZE
                )
            }
            BlockError::OutOfRange { index, value } => {
                write!(
                    f,
                    "coefficient {} at index {} is outside {}..={}",
                    value, index, MIN_COEFFICIENT, MAX_COEFFICIENT
                )
            }
        }
    }
}

impl std::error::Error for BlockError {}
