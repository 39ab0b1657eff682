//! Board-wide token storage.

use std::ops::{Index, IndexMut};

use crate::{CELL_COUNT, Color, GRID_SIZE, Position, Token};

/// The fixed [`GRID_SIZE`]×[`GRID_SIZE`] board of tokens.
///
/// Cells are stored in a flat array in row-major order and indexed by
/// [`Position`], which is bounds-checked at construction, so indexing never
/// fails. The grid is the single owner of every token; holders of a shared
/// reference get a read-only view of colors and selection flags.
///
/// # Examples
///
/// ```
/// use dotlace_core::{Color, Position, TokenGrid};
///
/// // Checkerboard of two colors
/// let grid = TokenGrid::from_fn(|pos| {
///     if (pos.row() + pos.col()) % 2 == 0 {
///         Color::Red
///     } else {
///         Color::Green
///     }
/// });
///
/// assert_eq!(grid[Position::new(0, 0)].color(), Color::Red);
/// assert_eq!(grid[Position::new(0, 1)].color(), Color::Green);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrid {
    /// Flat array of tokens, row-major order (`row * GRID_SIZE + col`).
    cells: [Token; CELL_COUNT],
}

impl TokenGrid {
    /// Builds a grid by asking `color` for the color of every cell, in
    /// row-major order. All tokens start unselected.
    #[must_use]
    pub fn from_fn(mut color: impl FnMut(Position) -> Color) -> Self {
        let mut cells = [Token::new(Color::Red); CELL_COUNT];
        for pos in Position::ALL {
            cells[Self::index_of(pos)] = Token::new(color(pos));
        }
        Self { cells }
    }

    /// Builds a grid from one array of colors per row.
    ///
    /// Handy for laying out exact board states in tests and examples.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_core::{Color, Position, TokenGrid};
    ///
    /// let grid = TokenGrid::from_rows([[Color::Blue; 6]; 6]);
    /// assert_eq!(grid[Position::new(5, 5)].color(), Color::Blue);
    /// ```
    #[must_use]
    pub fn from_rows(rows: [[Color; GRID_SIZE as usize]; GRID_SIZE as usize]) -> Self {
        Self::from_fn(|pos| rows[usize::from(pos.row())][usize::from(pos.col())])
    }

    /// Rewrites the color of every cell, in row-major order, leaving the
    /// selection flags untouched.
    pub fn fill_colors(&mut self, mut color: impl FnMut(Position) -> Color) {
        for pos in Position::ALL {
            self[pos].set_color(color(pos));
        }
    }

    /// Returns an iterator over all cells paired with their positions, in
    /// row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_core::{Color, TokenGrid};
    ///
    /// let grid = TokenGrid::from_fn(|_| Color::Yellow);
    /// assert!(grid.iter().all(|(_, token)| token.color() == Color::Yellow));
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Token)> {
        Position::ALL.iter().map(|&pos| (pos, &self[pos]))
    }

    /// Calculates the flat index of a position.
    const fn index_of(pos: Position) -> usize {
        pos.row() as usize * GRID_SIZE as usize + pos.col() as usize
    }
}

impl Index<Position> for TokenGrid {
    type Output = Token;

    fn index(&self, pos: Position) -> &Token {
        &self.cells[Self::index_of(pos)]
    }
}

impl IndexMut<Position> for TokenGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Token {
        &mut self.cells[Self::index_of(pos)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_visits_every_cell() {
        let mut seen = Vec::new();
        let grid = TokenGrid::from_fn(|pos| {
            seen.push(pos);
            Color::from_index((pos.row() + pos.col()) % Color::COUNT)
        });

        assert_eq!(seen, Position::ALL);
        for pos in Position::ALL {
            let expected = Color::from_index((pos.row() + pos.col()) % Color::COUNT);
            assert_eq!(grid[pos].color(), expected);
            assert!(!grid[pos].is_selected());
        }
    }

    #[test]
    fn test_from_rows_layout() {
        let mut rows = [[Color::Red; 6]; 6];
        rows[2][3] = Color::Purple;
        rows[5][0] = Color::Yellow;

        let grid = TokenGrid::from_rows(rows);
        assert_eq!(grid[Position::new(2, 3)].color(), Color::Purple);
        assert_eq!(grid[Position::new(5, 0)].color(), Color::Yellow);
        assert_eq!(grid[Position::new(0, 0)].color(), Color::Red);
    }

    #[test]
    fn test_index_mut_round_trip() {
        let mut grid = TokenGrid::from_fn(|_| Color::Red);
        let pos = Position::new(4, 1);

        grid[pos].set_color(Color::Blue);
        grid[pos].set_selected(true);

        assert_eq!(grid[pos].color(), Color::Blue);
        assert!(grid[pos].is_selected());

        // Neighbors are untouched
        assert_eq!(grid[Position::new(4, 2)].color(), Color::Red);
        assert!(!grid[Position::new(4, 2)].is_selected());
    }

    #[test]
    fn test_fill_colors_preserves_selection() {
        let mut grid = TokenGrid::from_fn(|_| Color::Red);
        let pos = Position::new(1, 1);
        grid[pos].set_selected(true);

        grid.fill_colors(|_| Color::Green);

        assert!(grid.iter().all(|(_, token)| token.color() == Color::Green));
        assert!(grid[pos].is_selected());
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = TokenGrid::from_fn(|_| Color::Red);
        let positions: Vec<_> = grid.iter().map(|(pos, _)| pos).collect();
        assert_eq!(positions, Position::ALL);
    }
}
