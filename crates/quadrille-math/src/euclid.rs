//! Euclidean GCD and floating-point LCM.

use num_traits::PrimInt;

/// Returns the greatest common divisor of `a` and `b` via the iterative
/// Euclidean algorithm.
///
/// The loop replaces `(a, b)` with `(b, a % b)` until `b` reaches zero and
/// returns the final `a`. `gcd(0, 0)` is `0` by convention.
///
/// # Sign convention
///
/// Rust's `%` truncates toward zero, so for negative operands the result
/// carries the sign of the operand that survives the final iteration rather
/// than being normalized to non-negative: `gcd(-4, 6) == 2` but
/// `gcd(4, -6) == -2`, and `gcd(a, 0) == a` for any `a`. Callers needing a
/// non-negative divisor should take the absolute value themselves.
///
/// # Examples
///
/// ```
/// use quadrille_math::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 13), 1);
/// assert_eq!(gcd(0, 5), 5);
/// assert_eq!(gcd(0, 0), 0);
/// ```
#[must_use]
pub fn gcd<T: PrimInt>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while b != T::zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Returns the least common multiple of `a` and `b` as a floating-point
/// value, computed as `(a * b) / gcd(a, b)`.
///
/// `lcm(0, 0)` is [`f64::NAN`]: the ratio is mathematically undefined, and
/// NaN is the documented sentinel rather than a misleading finite number.
/// The intermediate product `a * b` must be representable in `T`.
///
/// # Examples
///
/// ```
/// use quadrille_math::lcm;
///
/// assert_eq!(lcm(4, 6), 12.0);
/// assert_eq!(lcm(3, 5), 15.0);
/// assert_eq!(lcm(0, 7), 0.0);
/// assert!(lcm(0, 0).is_nan());
/// ```
#[must_use]
pub fn lcm<T: PrimInt>(a: T, b: T) -> f64 {
    let numerator = (a * b).to_f64().unwrap_or(f64::NAN);
    let denominator = gcd(a, b).to_f64().unwrap_or(f64::NAN);
    numerator / denominator
}
