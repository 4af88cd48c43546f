/// Numeric conversion helpers.
///
/// This module provides conversions between `BigDecimal` and the other numeric
/// representations the evaluator needs: `f64` for the floating-point fallback
/// functions, `BigInt` for exact integer work, machine integers for shift
/// amounts and primality, and booleans encoded as `0`/`1`.
///
/// Conversions that can lose information return a `Result` or an `Option`
/// instead of silently rounding.
pub mod num;

/// The decimal precision and rounding context.
///
/// Every arithmetic operation that cannot be computed exactly (division,
/// reciprocal powers, `abs`) rounds through a [`context::DecimalContext`]. The
/// context is an ordinary value carried by the environment rather than global
/// state.
pub mod context;
