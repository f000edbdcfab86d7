//! Numeric helpers for grid-based computational programs.
//!
//! This crate provides the small set of numeric routines such programs lean
//! on constantly: additive and multiplicative reductions generic over any
//! numeric element type, and the Euclidean GCD/LCM pair over primitive
//! integers. Genericity comes from the [`num-traits`] identity and integer
//! bounds rather than hand-rolled numeric traits.
//!
//! [`num-traits`]: https://docs.rs/num-traits
//!
//! # Examples
//!
//! ```
//! use quadrille_math::{gcd, lcm, product, sum};
//!
//! assert_eq!(sum([1, 2, 3, 4]), 10);
//! assert_eq!(product([1.5, 2.0]), 3.0);
//! assert_eq!(gcd(12, 18), 6);
//! assert_eq!(lcm(4, 6), 12.0);
//! ```

pub mod euclid;
pub mod reduce;

// Re-export commonly used functions
pub use self::{
    euclid::{gcd, lcm},
    reduce::{product, sum},
};
