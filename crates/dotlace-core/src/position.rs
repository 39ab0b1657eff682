//! Board coordinate types.

/// Number of rows and columns of the board.
pub const GRID_SIZE: u8 = 6;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// A board coordinate `(row, col)` with both components below
/// [`GRID_SIZE`].
///
/// Rows are numbered top to bottom, columns left to right. A `Position` is
/// guaranteed in-bounds at construction time, so everything indexed by it
/// can skip bounds checks.
///
/// # Examples
///
/// ```
/// use dotlace_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
///
/// // Out-of-bounds coordinates are rejected
/// assert_eq!(Position::try_new(6, 0), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing every board position in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_core::{CELL_COUNT, Position};
    ///
    /// assert_eq!(Position::ALL.len(), CELL_COUNT);
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[CELL_COUNT - 1], Position::new(5, 5));
    /// ```
    pub const ALL: [Self; CELL_COUNT] = {
        let mut all = [Self { row: 0, col: 0 }; CELL_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < CELL_COUNT {
            all[i] = Self {
                row: (i / GRID_SIZE as usize) as u8,
                col: (i % GRID_SIZE as usize) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new board position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`GRID_SIZE`].
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row, col }
    }

    /// Creates a new board position, returning `None` when either
    /// coordinate falls outside the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_core::Position;
    ///
    /// assert_eq!(Position::try_new(5, 5), Some(Position::new(5, 5)));
    /// assert_eq!(Position::try_new(0, 6), None);
    /// ```
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row index (0 at the top).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0 at the left).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns whether `other` is 4-directionally adjacent to this
    /// position (Manhattan distance exactly 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_core::Position;
    ///
    /// let pos = Position::new(2, 2);
    /// assert!(pos.is_adjacent(Position::new(1, 2)));
    /// assert!(pos.is_adjacent(Position::new(2, 3)));
    /// assert!(!pos.is_adjacent(pos)); // distance 0
    /// assert!(!pos.is_adjacent(Position::new(3, 3))); // diagonal
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);
        row_diff + col_diff == 1
    }

    /// Returns the position directly above, or `None` on the top row.
    #[must_use]
    pub const fn above(self) -> Option<Self> {
        if self.row == 0 {
            None
        } else {
            Some(Self {
                row: self.row - 1,
                col: self.col,
            })
        }
    }

    /// Returns an iterator over the in-bounds 4-directional neighbors of
    /// this position, in up, down, left, right order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_core::Position;
    ///
    /// // A corner has two neighbors, an interior cell four.
    /// assert_eq!(Position::new(0, 0).neighbors().count(), 2);
    /// assert_eq!(Position::new(2, 2).neighbors().count(), 4);
    /// ```
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        let Self { row, col } = self;
        [
            row.checked_sub(1).map(|row| (row, col)),
            Some((row + 1, col)),
            col.checked_sub(1).map(|col| (row, col)),
            Some((row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter_map(|(row, col)| Self::try_new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_accessors() {
        let pos = Position::new(1, 4);
        assert_eq!(pos.row(), 1);
        assert_eq!(pos.col(), 4);
        assert_eq!(format!("{pos}"), "(1, 4)");
    }

    #[test]
    fn test_try_new_bounds() {
        assert_eq!(Position::try_new(0, 0), Some(Position::new(0, 0)));
        assert_eq!(
            Position::try_new(GRID_SIZE - 1, GRID_SIZE - 1),
            Some(Position::new(GRID_SIZE - 1, GRID_SIZE - 1))
        );
        assert_eq!(Position::try_new(GRID_SIZE, 0), None);
        assert_eq!(Position::try_new(0, GRID_SIZE), None);
        assert_eq!(Position::try_new(u8::MAX, u8::MAX), None);
    }

    #[test]
    #[should_panic(expected = "row < GRID_SIZE && col < GRID_SIZE")]
    fn test_new_out_of_bounds_panics() {
        let _ = Position::new(GRID_SIZE, 0);
    }

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL.len(), CELL_COUNT);
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(pos.row()), i / usize::from(GRID_SIZE));
            assert_eq!(usize::from(pos.col()), i % usize::from(GRID_SIZE));
        }
    }

    #[test]
    fn test_adjacency() {
        let pos = Position::new(2, 2);
        for neighbor in pos.neighbors() {
            assert!(pos.is_adjacent(neighbor));
        }
        assert!(!pos.is_adjacent(pos));
        assert!(!pos.is_adjacent(Position::new(3, 3)));
        assert!(!pos.is_adjacent(Position::new(2, 4)));
        assert!(!pos.is_adjacent(Position::new(0, 2)));
    }

    #[test]
    fn test_above() {
        assert_eq!(Position::new(0, 3).above(), None);
        assert_eq!(Position::new(1, 3).above(), Some(Position::new(0, 3)));
        assert_eq!(Position::new(5, 0).above(), Some(Position::new(4, 0)));
    }

    #[test]
    fn test_neighbor_counts() {
        // corners
        assert_eq!(Position::new(0, 0).neighbors().count(), 2);
        assert_eq!(Position::new(5, 5).neighbors().count(), 2);
        // edges
        assert_eq!(Position::new(0, 3).neighbors().count(), 3);
        // interior
        assert_eq!(Position::new(3, 3).neighbors().count(), 4);
    }

    fn any_position() -> impl Strategy<Value = Position> {
        (0..GRID_SIZE, 0..GRID_SIZE).prop_map(|(row, col)| Position::new(row, col))
    }

    proptest! {
        #[test]
        fn prop_adjacency_is_symmetric(a in any_position(), b in any_position()) {
            prop_assert_eq!(a.is_adjacent(b), b.is_adjacent(a));
        }

        #[test]
        fn prop_neighbors_are_adjacent_and_in_bounds(pos in any_position()) {
            for neighbor in pos.neighbors() {
                prop_assert!(pos.is_adjacent(neighbor));
                prop_assert!(Position::try_new(neighbor.row(), neighbor.col()).is_some());
            }
        }
    }
}
