use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
    util::num::{from_bool, to_exact_integer},
};

/// Evaluates the argument and returns `1` if it is prime, `0` otherwise.
pub fn is_prime(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    let x = args[0].value(env)?;
    Ok(from_bool(is_prime_value(&x)?))
}

/// Tests a decimal for primality by trial division.
///
/// Non-integers are never prime. The sign is ignored, so `-7` counts as
/// prime, matching the test applied to its magnitude.
///
/// # Errors
/// Returns `PrimeTooLarge` for integers outside the `i32` range.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::interpreter::evaluator::function::prime::is_prime_value;
///
/// assert!(is_prime_value(&BigDecimal::from(97)).unwrap());
/// assert!(!is_prime_value(&BigDecimal::from(91)).unwrap());
/// assert!(!is_prime_value(&BigDecimal::from_str("7.5").unwrap()).unwrap());
/// ```
pub fn is_prime_value(value: &BigDecimal) -> EvalResult<bool> {
    let Some(n) = to_exact_integer(value) else {
        return Ok(false);
    };
    let n = n.to_i32()
             .ok_or_else(|| RuntimeError::PrimeTooLarge { value: value.clone() })?;

    Ok(trial_division(n.unsigned_abs()))
}

fn trial_division(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let n = u64::from(n);
    let mut divisor = 3u64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_primes() {
        let primes = (0..60).filter(|&n| trial_division(n)).collect::<Vec<_>>();
        assert_eq!(primes,
                   [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]);
    }

    #[test]
    fn largest_i32_prime() {
        assert!(is_prime_value(&BigDecimal::from(i32::MAX)).unwrap());
        assert!(is_prime_value(&BigDecimal::from(-7)).unwrap());
    }

    #[test]
    fn beyond_i32_is_an_error() {
        let err = is_prime_value(&BigDecimal::from(i64::from(i32::MAX) + 1)).unwrap_err();
        assert!(matches!(err, RuntimeError::PrimeTooLarge { .. }));
    }
}
