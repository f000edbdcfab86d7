//! Strict whole-string numeric classifiers.
//!
//! These predicates never fail: input that does not parse is a normal
//! `false` result, not an error. Parsing is strict — the entire string must
//! be a valid literal, so trailing garbage, surrounding whitespace, and the
//! empty string all classify as `false`.

/// Returns whether the entire string parses as a 64-bit floating-point
/// value.
///
/// Uses the standard [`f64`] literal grammar, which accepts decimal and
/// exponent notation as well as the special values `inf` and `NaN`.
///
/// # Examples
///
/// ```
/// use quadrille_text::is_float_str;
///
/// assert!(is_float_str("3.14"));
/// assert!(is_float_str("-2e10"));
/// assert!(is_float_str("42"));
/// assert!(!is_float_str("abc"));
/// assert!(!is_float_str("3.14 "));
/// ```
#[must_use]
pub fn is_float_str(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

/// Returns whether the entire string parses as a base-10 64-bit signed
/// integer.
///
/// # Examples
///
/// ```
/// use quadrille_text::is_int_str;
///
/// assert!(is_int_str("42"));
/// assert!(is_int_str("-7"));
/// assert!(!is_int_str("42.0"));
/// assert!(!is_int_str("0x2a"));
/// ```
#[must_use]
pub fn is_int_str(s: &str) -> bool {
    s.parse::<i64>().is_ok()
}
