// seedrand_core/src/error.rs

use thiserror::Error;

/// Rejected bounds passed to one of the `try_` range operations.
///
/// A failed validation never consumes a draw, so the stream is left exactly
/// where it was.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("empty integer range: [{min}, {max}) contains no values")]
    EmptyIntRange { min: i32, max: i32 },

    #[error("empty float range: [{min}, {max}) contains no values")]
    EmptyFloatRange { min: f64, max: f64 },

    #[error("float range bounds must be finite, got [{min}, {max})")]
    NonFiniteBound { min: f64, max: f64 },
}

/// Errors raised when restoring a generator from a raw register value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// Zero is a fixed point of the xorshift update; the stream would stall.
    #[error("generator state must be nonzero")]
    ZeroState,
}

impl RangeError {
    /// Checks that `[min, max)` holds at least one integer.
    pub fn check_int_range(min_inclusive: i32, max_exclusive: i32) -> Result<(), Self> {
        if max_exclusive <= min_inclusive {
            return Err(Self::EmptyIntRange {
                min: min_inclusive,
                max: max_exclusive,
            });
        }
        Ok(())
    }

    /// Checks that `[min, max)` has finite bounds and is not empty.
    pub fn check_float_range(min_inclusive: f64, max_exclusive: f64) -> Result<(), Self> {
        if !min_inclusive.is_finite() || !max_exclusive.is_finite() {
            return Err(Self::NonFiniteBound {
                min: min_inclusive,
                max: max_exclusive,
            });
        }
        if max_exclusive <= min_inclusive {
            return Err(Self::EmptyFloatRange {
                min: min_inclusive,
                max: max_exclusive,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_bounds() {
        let err = RangeError::check_int_range(3, 3).unwrap_err();
        assert_eq!(err.to_string(), "empty integer range: [3, 3) contains no values");

        let err = RangeError::check_float_range(0.0, f64::NAN).unwrap_err();
        assert!(err.to_string().starts_with("float range bounds must be finite"));

        assert!(RangeError::check_float_range(-1.5, -1.0).is_ok());
        assert_eq!(StateError::ZeroState.to_string(), "generator state must be nonzero");
    }
}
