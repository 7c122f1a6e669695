//! Range validation, run before any network activity.

use crate::error::RandomError;
use crate::types::Range;

/// Largest magnitude the service accepts for either bound.
pub const BOUND_LIMIT: i32 = 1_000_000_000;

pub const MSG_NOT_INTEGER: &str = "Both minimum and maximum values must be integers";
pub const MSG_MIN_GREATER_THAN_MAX: &str = "Minimum value cannot be greater than maximum value";
pub const MSG_OUT_OF_BOUNDS: &str = "Values must be between -1,000,000,000 and 1,000,000,000";

/// Validate a `(min, max)` pair as supplied by a host and turn it into a `Range`.
///
/// Checks run in a fixed order and the first failure is returned: integrality,
/// then ordering, then bounds. Pure; calling it repeatedly with the same
/// inputs yields the same result.
pub fn validate(min: f64, max: f64) -> Result<Range, RandomError> {
    if !is_integer(min) || !is_integer(max) {
        return Err(RandomError::InvalidInput(MSG_NOT_INTEGER.to_string()));
    }
    check_order_and_bounds(min, max)?;
    // In bounds and integral, so the casts are exact.
    Ok(Range::new_unchecked(min as i64, max as i64))
}

pub(crate) fn check_order_and_bounds<T>(min: T, max: T) -> Result<(), RandomError>
where
    T: PartialOrd + From<i32>,
{
    if min > max {
        return Err(RandomError::InvalidInput(MSG_MIN_GREATER_THAN_MAX.to_string()));
    }
    if min < T::from(-BOUND_LIMIT) || max > T::from(BOUND_LIMIT) {
        return Err(RandomError::InvalidInput(MSG_OUT_OF_BOUNDS.to_string()));
    }
    Ok(())
}

fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<Range, RandomError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn accepts_ordered_integers() {
        let range = validate(1.0, 100.0).unwrap();
        assert_eq!((range.min(), range.max()), (1, 100));
    }

    #[test]
    fn accepts_equal_bounds() {
        let range = validate(7.0, 7.0).unwrap();
        assert_eq!((range.min(), range.max()), (7, 7));
    }

    #[test]
    fn accepts_exact_limits() {
        let range = validate(-1_000_000_000.0, 1_000_000_000.0).unwrap();
        assert_eq!(range.min(), -1_000_000_000);
        assert_eq!(range.max(), 1_000_000_000);
    }

    #[test]
    fn rejects_fractional_min() {
        assert_eq!(message(validate(1.5, 100.0)), MSG_NOT_INTEGER);
    }

    #[test]
    fn rejects_fractional_max() {
        assert_eq!(message(validate(1.0, 99.9)), MSG_NOT_INTEGER);
    }

    #[test]
    fn rejects_nan_and_infinity() {
        assert_eq!(message(validate(f64::NAN, 1.0)), MSG_NOT_INTEGER);
        assert_eq!(message(validate(0.0, f64::INFINITY)), MSG_NOT_INTEGER);
        assert_eq!(message(validate(f64::NEG_INFINITY, 0.0)), MSG_NOT_INTEGER);
    }

    #[test]
    fn integrality_wins_over_ordering() {
        assert_eq!(message(validate(100.5, 1.0)), MSG_NOT_INTEGER);
    }

    #[test]
    fn rejects_reversed_range() {
        assert_eq!(message(validate(100.0, 1.0)), MSG_MIN_GREATER_THAN_MAX);
    }

    #[test]
    fn ordering_wins_over_bounds() {
        assert_eq!(
            message(validate(5_000_000_000.0, -5_000_000_000.0)),
            MSG_MIN_GREATER_THAN_MAX
        );
    }

    #[test]
    fn rejects_min_below_limit() {
        assert_eq!(message(validate(-1_000_000_001.0, 0.0)), MSG_OUT_OF_BOUNDS);
    }

    #[test]
    fn rejects_max_above_limit() {
        assert_eq!(message(validate(0.0, 1_000_000_001.0)), MSG_OUT_OF_BOUNDS);
    }

    #[test]
    fn errors_are_invalid_input() {
        assert!(matches!(validate(2.0, 1.0), Err(RandomError::InvalidInput(_))));
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(validate(3.0, 9.0), validate(3.0, 9.0));
        assert_eq!(validate(9.0, 3.0), validate(9.0, 3.0));
    }
}
