use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult, util::num::digit_count};

/// Default number of significant digits, matching IEEE 754 decimal128.
pub const DEFAULT_PRECISION: u64 = 34;

/// Largest precision a context accepts.
pub const MAX_PRECISION: u64 = 1_000_000;

/// Precision and rounding applied to inexact decimal operations.
///
/// Addition, subtraction, multiplication and remainder are always exact. Only
/// operations whose result may not terminate (division, reciprocal powers)
/// or that are specified to round (`abs`) consult the context.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::util::context::DecimalContext;
///
/// let ctx = DecimalContext::with_precision(5).unwrap();
/// let third = ctx.divide(&1.into(), &3.into()).unwrap();
///
/// assert_eq!(third, BigDecimal::from_str("0.33333").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    precision: NonZeroU64,
    rounding:  RoundingMode,
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self { precision: NonZeroU64::new(DEFAULT_PRECISION).unwrap_or(NonZeroU64::MIN),
               rounding:  RoundingMode::HalfEven, }
    }
}

impl DecimalContext {
    /// Creates a context from an explicit precision and rounding mode.
    #[must_use]
    pub const fn new(precision: NonZeroU64, rounding: RoundingMode) -> Self {
        Self { precision,
               rounding }
    }

    /// Creates a half-even context with `precision` significant digits.
    ///
    /// Returns `None` for a precision of zero or above [`MAX_PRECISION`].
    #[must_use]
    pub fn with_precision(precision: u64) -> Option<Self> {
        NonZeroU64::new(precision).filter(|precision| precision.get() <= MAX_PRECISION)
                                  .map(|precision| Self { precision,
                                                          ..Self::default() })
    }

    /// Number of significant digits kept by [`DecimalContext::round`].
    #[must_use]
    pub const fn precision(&self) -> u64 {
        self.precision.get()
    }

    /// Rounding mode used when digits are discarded.
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Rounds `value` to the context precision and strips trailing
    /// fractional zeros.
    #[must_use]
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        if value.digits() <= self.precision() {
            return strip_fractional_zeros(value);
        }
        strip_fractional_zeros(&value.with_precision_round(self.precision, self.rounding))
    }

    /// Divides `lhs` by `rhs`, correctly rounded to the context precision.
    ///
    /// The quotient is computed on the underlying integers with enough extra
    /// digits to round once; a non-zero remainder is folded into a trailing
    /// sticky digit so ties are never misjudged.
    ///
    /// ## Errors
    /// - `RuntimeError::DivisionByZero` if `rhs` is zero.
    /// - `RuntimeError::ExponentOverflow` if the quotient's scale does not fit
    ///   in an `i64`.
    pub fn divide(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> EvalResult<BigDecimal> {
        if rhs.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        if lhs.is_zero() {
            return Ok(BigDecimal::zero());
        }

        let (numerator, lhs_scale) = lhs.as_bigint_and_exponent();
        let (denominator, rhs_scale) = rhs.as_bigint_and_exponent();

        let guard = self.precision() + digit_count(&denominator) + 2;
        let shift = guard.saturating_sub(digit_count(&numerator));

        let overflow = || RuntimeError::ExponentOverflow;
        let pow = u32::try_from(shift).map_err(|_| overflow())?;
        let mut scale = lhs_scale.checked_sub(rhs_scale)
                                 .and_then(|scale| scale.checked_add(i64::from(pow)))
                                 .ok_or_else(overflow)?;

        let scaled = numerator * BigInt::from(10).pow(pow);
        let mut quotient = &scaled / &denominator;
        let remainder = &scaled % &denominator;

        if !remainder.is_zero() {
            let sticky = if scaled.is_negative() == denominator.is_negative() { 1 } else { -1 };
            quotient = quotient * 10 + sticky;
            scale = scale.checked_add(1).ok_or_else(overflow)?;
        }

        Ok(self.round(&BigDecimal::new(quotient, scale)))
    }
}

/// Drops trailing zeros after the decimal point; integers keep scale zero.
fn strip_fractional_zeros(value: &BigDecimal) -> BigDecimal {
    let normalized = value.normalized();
    if normalized.as_bigint_and_exponent().1 < 0 {
        normalized.with_scale(0)
    } else {
        normalized
    }
}
