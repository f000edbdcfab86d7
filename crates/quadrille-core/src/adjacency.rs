//! Fixed tables of relative coordinate offsets.
//!
//! These tables enumerate the step vectors from a cell to its neighbors.
//! They are `const` data, never mutated, and safe to read from any number
//! of threads. Apply an offset with [`Pos::translate`], or let
//! [`Grid::neighbors`](crate::Grid::neighbors) do the bounds filtering.

use crate::Pos;

/// A relative coordinate step, applied to a [`Pos`] via [`Pos::translate`].
pub type Offset = Pos<i64>;

/// The four orthogonal steps: up, down, left, right.
pub const ORTHOGONAL: [Offset; 4] = [
    Pos::new(-1, 0),
    Pos::new(1, 0),
    Pos::new(0, -1),
    Pos::new(0, 1),
];

/// All eight neighboring steps: the orthogonal four followed by the four
/// diagonals.
pub const ADJACENT: [Offset; 8] = [
    Pos::new(-1, 0),
    Pos::new(1, 0),
    Pos::new(0, -1),
    Pos::new(0, 1),
    Pos::new(-1, -1),
    Pos::new(-1, 1),
    Pos::new(1, -1),
    Pos::new(1, 1),
];
