//! Generic rectangular grid container.
//!
//! This module provides [`Grid`], a fixed-shape container of rows and
//! columns over an arbitrary element type, with bounds-checked access,
//! row/column extraction, and row-major linear search.
//!
//! # Coordinates
//!
//! Scalar accessors ([`Grid::at`], [`Grid::set`], [`Grid::row`],
//! [`Grid::col`]) take `usize` indices. Coordinate-based accessors take a
//! [`Pos<i64>`] so that out-of-grid probes, including ones with negative
//! components produced by adjacency arithmetic, can be expressed and
//! classified by [`Grid::contains_pos`] instead of failing.
//!
//! # Examples
//!
//! ```
//! use quadrille_core::{Grid, Pos};
//!
//! let mut grid = Grid::filled(2, 3, '.');
//! grid.set_pos(Pos::new(1, 2), '#');
//!
//! assert_eq!(grid.dims(), (2, 3));
//! assert_eq!(*grid.at(1, 2), '#');
//! assert_eq!(grid.row(0), ['.', '.', '.']);
//! assert_eq!(grid.col(2), ['.', '#']);
//! ```

use crate::Pos;

/// A fixed-shape rectangular container indexed by (row, column).
///
/// The backing structure is an ordered sequence of rows, each an ordered
/// sequence of columns. Dimensions are always derived from the current
/// shape of that structure, never stored separately.
///
/// # Rectangularity
///
/// Every row must have equal length. This invariant is a caller obligation
/// when constructing via [`Grid::from_rows`] and is never checked
/// automatically; row and column operations on a ragged grid produce
/// undefined results. [`Grid::filled`] always produces a rectangular grid.
///
/// # Copies, not views
///
/// [`Grid::row`] and [`Grid::col`] return fresh copies of the requested
/// line, not aliases into the grid. Mutating a returned vector never
/// affects the grid.
///
/// # Examples
///
/// ```
/// use quadrille_core::{Grid, Pos};
///
/// let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
///
/// assert_eq!(grid.dims(), (2, 3));
/// assert_eq!(*grid.at(0, 1), 2);
/// assert!(grid.contains_pos(Pos::new(1, 2)));
/// assert!(!grid.contains_pos(Pos::new(2, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    /// Wraps a fully formed rows-of-columns structure.
    ///
    /// The caller must guarantee that every row has equal length; this is
    /// not checked.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    /// Returns the grid dimensions as `(rows, columns)`.
    ///
    /// Dimensions are computed from the backing structure: the row count,
    /// and the length of the first row. An empty grid has dimensions
    /// `(0, 0)`; a grid whose first row is empty reports zero columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadrille_core::Grid;
    ///
    /// let grid = Grid::filled(4, 6, 0);
    /// assert_eq!(grid.dims(), (4, 6));
    ///
    /// let empty: Grid<u8> = Grid::from_rows(Vec::new());
    /// assert_eq!(empty.dims(), (0, 0));
    /// ```
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        let cols = self.rows.first().map_or(0, Vec::len);
        (self.rows.len(), cols)
    }

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> &T {
        &self.rows[row][col]
    }

    /// Writes `value` to the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.rows[row][col] = value;
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if either component of `pos` is negative or out of range.
    #[must_use]
    pub fn at_pos(&self, pos: Pos<i64>) -> &T {
        let (row, col) = Self::require_index(pos);
        &self.rows[row][col]
    }

    /// Writes `value` to the element at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if either component of `pos` is negative or out of range.
    pub fn set_pos(&mut self, pos: Pos<i64>, value: T) {
        let (row, col) = Self::require_index(pos);
        self.rows[row][col] = value;
    }

    /// Returns a reference to the element at `pos`, or `None` if `pos` is
    /// outside the grid.
    ///
    /// This is the non-panicking counterpart of [`Grid::at_pos`].
    ///
    /// # Examples
    ///
    /// ```
    /// use quadrille_core::{Grid, Pos};
    ///
    /// let grid = Grid::filled(2, 2, 'x');
    /// assert_eq!(grid.get(Pos::new(1, 1)), Some(&'x'));
    /// assert_eq!(grid.get(Pos::new(-1, 0)), None);
    /// assert_eq!(grid.get(Pos::new(2, 0)), None);
    /// ```
    #[must_use]
    pub fn get(&self, pos: Pos<i64>) -> Option<&T> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        self.rows.get(row)?.get(col)
    }

    /// Returns whether `pos` lies within the grid bounds.
    ///
    /// True iff `0 <= pos.row < rows` and `0 <= pos.col < columns`. Never
    /// panics; use this as a safe pre-check before indexed access.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadrille_core::{Grid, Pos};
    ///
    /// let grid = Grid::filled(3, 3, 0);
    /// assert!(grid.contains_pos(Pos::new(2, 2)));
    /// assert!(!grid.contains_pos(Pos::new(3, 0)));
    /// assert!(!grid.contains_pos(Pos::new(0, -1)));
    /// ```
    #[must_use]
    pub fn contains_pos(&self, pos: Pos<i64>) -> bool {
        let (rows, cols) = self.dims();
        let Ok(row) = usize::try_from(pos.row) else {
            return false;
        };
        let Ok(col) = usize::try_from(pos.col) else {
            return false;
        };
        row < rows && col < cols
    }

    /// Returns whether any element matches `value` per the supplied
    /// equality predicate.
    ///
    /// The scan runs in row-major order and short-circuits on the first
    /// match. The predicate is injected so that element types without a
    /// usable built-in equality (approximate floats, for example) can still
    /// be searched.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadrille_core::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
    /// let close = |a: &f64, b: &f64| (a - b).abs() < 1e-9;
    ///
    /// assert!(grid.contains_value(&0.3, close));
    /// assert!(!grid.contains_value(&0.5, close));
    /// ```
    #[must_use]
    pub fn contains_value(&self, value: &T, mut eq: impl FnMut(&T, &T) -> bool) -> bool {
        self.rows
            .iter()
            .any(|row| row.iter().any(|cell| eq(cell, value)))
    }

    /// Returns the coordinate of the first element matching `value` per the
    /// supplied equality predicate, in row-major order, or `None` if no
    /// element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadrille_core::{Grid, Pos};
    ///
    /// let mut grid = Grid::filled(3, 3, 0);
    /// grid.set(1, 1, 9);
    ///
    /// assert_eq!(grid.position_of(&9, |a, b| a == b), Some(Pos::new(1, 1)));
    /// assert_eq!(grid.position_of(&7, |a, b| a == b), None);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn position_of(&self, value: &T, mut eq: impl FnMut(&T, &T) -> bool) -> Option<Pos<i64>> {
        for (i, row) in self.rows.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if eq(cell, value) {
                    return Some(Pos::new(i as i64, j as i64));
                }
            }
        }
        None
    }

    /// Returns the in-grid neighbors of `pos` under the given offset table.
    ///
    /// Each offset is applied with [`Pos::translate`] and the results are
    /// filtered to positions inside the grid, preserving the table's order.
    /// `pos` itself does not need to be inside the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadrille_core::{Grid, Pos, adjacency};
    ///
    /// let grid = Grid::filled(3, 3, 0);
    ///
    /// // A corner has two orthogonal neighbors, an interior cell four.
    /// assert_eq!(grid.neighbors(Pos::new(0, 0), &adjacency::ORTHOGONAL).count(), 2);
    /// assert_eq!(grid.neighbors(Pos::new(1, 1), &adjacency::ORTHOGONAL).count(), 4);
    /// assert_eq!(grid.neighbors(Pos::new(1, 1), &adjacency::ADJACENT).count(), 8);
    /// ```
    pub fn neighbors<'a>(
        &'a self,
        pos: Pos<i64>,
        offsets: &'a [Pos<i64>],
    ) -> impl Iterator<Item = Pos<i64>> + 'a {
        offsets
            .iter()
            .map(move |&offset| pos.translate(offset))
            .filter(|&candidate| self.contains_pos(candidate))
    }

    fn require_index(pos: Pos<i64>) -> (usize, usize) {
        let (Ok(row), Ok(col)) = (usize::try_from(pos.row), usize::try_from(pos.col)) else {
            panic!("coordinate out of range: {pos}");
        };
        (row, col)
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a `rows` × `cols` grid with every cell set to `fill`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadrille_core::Grid;
    ///
    /// let grid = Grid::filled(2, 4, 7);
    /// assert_eq!(grid.dims(), (2, 4));
    /// assert!(grid.contains_value(&7, |a, b| a == b));
    /// ```
    #[must_use]
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows: vec![vec![fill; cols]; rows],
        }
    }

    /// Returns a copy of row `i`.
    ///
    /// The returned vector is independent of the grid; mutating it does not
    /// write through.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn row(&self, i: usize) -> Vec<T> {
        self.rows[i].clone()
    }

    /// Returns a copy of column `j`, synthesized by reading element `j`
    /// from every row.
    ///
    /// The returned vector is independent of the grid; mutating it does not
    /// write through.
    ///
    /// # Panics
    ///
    /// Panics if `j` is out of range for any row.
    #[must_use]
    pub fn col(&self, j: usize) -> Vec<T> {
        self.rows.iter().map(|row| row[j].clone()).collect()
    }
}
