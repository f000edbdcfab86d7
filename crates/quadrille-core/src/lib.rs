//! Core data structures for grid-based computational programs.
//!
//! This crate provides the spatial building blocks shared by programs that
//! operate on rectangular grids of arbitrary element type: puzzle solvers,
//! cellular automata, map-based searches, and similar small computational
//! tools.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Coordinates** - [`position`]: the two-component [`Pos`] value type
//!    with structural equality and componentwise translation.
//! 2. **Adjacency** - [`adjacency`]: fixed tables of relative offsets for
//!    enumerating orthogonal and diagonal neighbors.
//! 3. **Grids** - [`grid`]: the generic rectangular [`Grid`] container with
//!    bounds-checked access, row/column extraction, and linear search.
//!
//! # Examples
//!
//! ```
//! use quadrille_core::{Grid, Pos, adjacency};
//!
//! let mut grid = Grid::filled(3, 3, 0);
//! grid.set(1, 1, 9);
//!
//! // Row-major search with an injected equality predicate.
//! assert_eq!(grid.position_of(&9, |a, b| a == b), Some(Pos::new(1, 1)));
//!
//! // Enumerate the in-grid orthogonal neighbors of a corner cell.
//! let neighbors: Vec<_> = grid
//!     .neighbors(Pos::new(0, 0), &adjacency::ORTHOGONAL)
//!     .collect();
//! assert_eq!(neighbors, [Pos::new(1, 0), Pos::new(0, 1)]);
//! ```

pub mod adjacency;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{grid::Grid, position::Pos};
