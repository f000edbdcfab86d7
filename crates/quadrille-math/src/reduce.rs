//! Additive and multiplicative reductions.

use num_traits::{One, Zero};

/// Returns the additive reduction of `values`, starting from the type's
/// zero value.
///
/// An empty input yields zero.
///
/// # Examples
///
/// ```
/// use quadrille_math::sum;
///
/// assert_eq!(sum([1, 2, 3]), 6);
/// assert_eq!(sum([0.5, 0.25]), 0.75);
/// assert_eq!(sum(Vec::<i64>::new()), 0);
/// ```
#[must_use]
pub fn sum<T, I>(values: I) -> T
where
    T: Zero,
    I: IntoIterator<Item = T>,
{
    values.into_iter().fold(T::zero(), |acc, value| acc + value)
}

/// Returns the multiplicative reduction of `values`, starting from the
/// type's one value.
///
/// An empty input yields one.
///
/// # Examples
///
/// ```
/// use quadrille_math::product;
///
/// assert_eq!(product([2, 3, 4]), 24);
/// assert_eq!(product(Vec::<i64>::new()), 1);
/// ```
#[must_use]
pub fn product<T, I>(values: I) -> T
where
    T: One,
    I: IntoIterator<Item = T>,
{
    values.into_iter().fold(T::one(), |acc, value| acc * value)
}
