//! Text-input utilities for grid-based computational programs.
//!
//! This crate covers the input side of small computational tools: reading a
//! plain-text file as an ordered sequence of lines, and classifying strings
//! by whether they parse as numeric literals.
//!
//! # Overview
//!
//! - [`lines`]: one-shot line-based file reading with
//!   [`read_lines`](lines::read_lines).
//! - [`classify`]: strict whole-string numeric classifiers
//!   [`is_int_str`](classify::is_int_str) and
//!   [`is_float_str`](classify::is_float_str).
//!
//! # Examples
//!
//! ```no_run
//! use quadrille_text::{is_int_str, read_lines};
//!
//! let lines = read_lines("input.txt")?;
//! let numbers: Vec<i64> = lines
//!     .iter()
//!     .filter(|line| is_int_str(line))
//!     .map(|line| line.parse().unwrap())
//!     .collect();
//! # Ok::<(), quadrille_text::ReadLinesError>(())
//! ```

pub mod classify;
pub mod lines;

// Re-export commonly used items
pub use self::{
    classify::{is_float_str, is_int_str},
    lines::{ReadLinesError, read_lines},
};
