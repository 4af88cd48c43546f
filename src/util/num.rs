use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an `f64` into a `BigDecimal`.
///
/// The conversion goes through the shortest decimal representation that
/// round-trips to the same `f64`, so `0.1` becomes exactly `0.1` rather than
/// the full binary expansion.
///
/// ## Errors
/// Returns `RuntimeError::NotRepresentable` for `NaN` and infinities.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::{error::RuntimeError, util::num::from_f64};
///
/// assert_eq!(from_f64(0.1).unwrap(), BigDecimal::from_str("0.1").unwrap());
///
/// let err = from_f64(f64::NAN).unwrap_err();
/// assert!(matches!(err, RuntimeError::NotRepresentable { .. }));
/// ```
pub fn from_f64(value: f64) -> EvalResult<BigDecimal> {
    if !value.is_finite() {
        return Err(RuntimeError::NotRepresentable { value });
    }

    BigDecimal::from_str(&format!("{value:e}")).map_err(|_| RuntimeError::NotRepresentable { value })
}

/// Converts a `BigDecimal` into the nearest `f64`.
///
/// ## Errors
/// Returns `RuntimeError::OutOfFloatRange` if the magnitude does not fit in
/// an `f64`.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::{error::RuntimeError, util::num::to_f64};
///
/// let huge = BigDecimal::from_str("1E400").unwrap();
/// assert_eq!(to_f64(&huge).unwrap_err(), RuntimeError::OutOfFloatRange { value: huge });
/// ```
pub fn to_f64(value: &BigDecimal) -> EvalResult<f64> {
    value.to_f64()
         .filter(|f| f.is_finite())
         .ok_or_else(|| RuntimeError::OutOfFloatRange { value: value.clone() })
}

/// Returns the integer value of `value` if it has no fractional part.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::util::num::to_exact_integer;
/// use num_bigint::BigInt;
///
/// let five = BigDecimal::from_str("5.000").unwrap();
/// assert_eq!(to_exact_integer(&five), Some(BigInt::from(5)));
///
/// let half = BigDecimal::from_str("2.5").unwrap();
/// assert_eq!(to_exact_integer(&half), None);
/// ```
#[must_use]
pub fn to_exact_integer(value: &BigDecimal) -> Option<BigInt> {
    if value.is_integer() {
        Some(truncate_to_integer(value))
    } else {
        None
    }
}

/// Drops the fractional part of `value`, rounding toward zero.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::util::num::truncate_to_integer;
/// use num_bigint::BigInt;
///
/// let x = BigDecimal::from_str("-7.9").unwrap();
/// assert_eq!(truncate_to_integer(&x), BigInt::from(-7));
/// ```
#[must_use]
pub fn truncate_to_integer(value: &BigDecimal) -> BigInt {
    let (digits, _) = value.with_scale(0).into_bigint_and_exponent();
    digits
}

/// Returns `value` as an `i32` if it is an integer that fits.
#[must_use]
pub fn to_exact_i32(value: &BigDecimal) -> Option<i32> {
    to_exact_integer(value).and_then(|n| n.to_i32())
}

/// Wraps an exact integer as a decimal with scale zero.
#[must_use]
pub fn from_bigint(value: BigInt) -> BigDecimal {
    BigDecimal::new(value, 0)
}

/// Encodes a boolean as the decimal `1` or `0`.
#[must_use]
pub fn from_bool(value: bool) -> BigDecimal {
    if value { BigDecimal::one() } else { BigDecimal::zero() }
}

/// Counts the decimal digits of an integer's magnitude.
pub(crate) fn digit_count(value: &BigInt) -> u64 {
    value.magnitude().to_string().len() as u64
}
