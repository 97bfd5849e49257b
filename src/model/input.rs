//! Validation of the array size and manual array controls.
//!
//! Both parsers are pure: they either return the accepted value or an
//! [`InputError`] describing why the input was refused.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Smallest accepted array length.
pub const MIN_ARRAY_SIZE: usize = 2;
/// Largest accepted array length.
pub const MAX_ARRAY_SIZE: usize = 50;

/// Inclusive range that seeded values must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min: u32,
    pub max: u32,
}

impl ValueBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= f64::from(self.min) && value <= f64::from(self.max)
    }
}

/// Parse the array size control.
///
/// Accepts an integer in `[MIN_ARRAY_SIZE, MAX_ARRAY_SIZE]`.
pub fn parse_array_size(input: &str) -> Result<usize, InputError> {
    let err = InputError::ArraySize {
        min: MIN_ARRAY_SIZE,
        max: MAX_ARRAY_SIZE,
    };
    let size: usize = input.trim().parse().map_err(|_| err.clone())?;
    if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
        return Err(err);
    }
    Ok(size)
}

/// Parse the manual array control.
///
/// The input is split on commas and each token trimmed. Tokens that do not
/// read as a number are skipped, so `"4, x, 9"` yields `[4, 9]`; an empty
/// token reads as 0. The remaining numbers must count at least two, at most
/// [`MAX_ARRAY_SIZE`], lie inside `bounds` and be whole.
pub fn parse_manual_array(input: &str, bounds: ValueBounds) -> Result<Vec<u32>, InputError> {
    let numbers: Vec<f64> = input.split(',').filter_map(read_number).collect();

    if numbers.len() < MIN_ARRAY_SIZE {
        return Err(InputError::TooFewValues {
            min: MIN_ARRAY_SIZE,
        });
    }
    if numbers.len() > MAX_ARRAY_SIZE {
        return Err(InputError::TooManyValues {
            max: MAX_ARRAY_SIZE,
        });
    }
    if numbers.iter().any(|&n| !bounds.contains(n)) {
        return Err(InputError::ValueOutOfRange {
            min: bounds.min,
            max: bounds.max,
        });
    }
    if numbers.iter().any(|n| n.fract() != 0.0) {
        return Err(InputError::NotWhole);
    }

    // Whole and inside a u32 range at this point
    Ok(numbers.into_iter().map(|n| n as u32).collect())
}

/// One comma separated token as a number, `None` when it is not one.
fn read_number(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() {
        return Some(0.0);
    }
    token.parse::<f64>().ok().filter(|n| !n.is_nan())
}
