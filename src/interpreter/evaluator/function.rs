/// Floating-point built-in functions.
///
/// Trigonometric, hyperbolic, exponential and logarithmic functions computed
/// in `f64` and converted back to decimals, plus `random`.
pub mod builtin;
/// Exact arithmetic built-in functions.
///
/// `Plus`, `Subtract`, `Times`, `Divide`, `Mod`, `abs`, `power` and the
/// decimal rounding functions.
pub mod arithmetic;
/// Bitwise built-in functions on truncated integers.
pub mod bitwise;
/// Comparison built-in functions and logical `not`.
///
/// Results are encoded as the decimals `1` and `0`.
pub mod comparison;
/// The `define` assignment function.
pub mod define;
/// The `factorial` function, computed by binary splitting.
pub mod factorial;
/// The `is_prime` function.
pub mod prime;
/// The `sum` and `product` series functions.
///
/// Both bind the index variable `i` for the duration of the series.
pub mod series;

pub mod core;
