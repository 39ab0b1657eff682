//! The game-state engine.

use dotlace_core::{Color, GRID_SIZE, Position, Token, TokenGrid};
use log::{debug, trace};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::{ColumnDrop, EngineError, ResolveOutcome, SelectionOutcome};

/// Number of moves granted at the start of every game.
pub const INIT_MOVES: u32 = 10;

/// Game state for one Dotlace board: the token grid, the active selection
/// path, and the move/score counters.
///
/// The engine is a plain value: the presentation layer owns an instance
/// and passes `&mut` references into input-handling code. Multiple
/// independent games can coexist, and every board is reproducible from its
/// [`seed`](Self::seed).
///
/// A typical turn: the input layer maps touch/drag events to
/// [`select_token`](Self::select_token) calls, renders after each
/// [`SelectionOutcome`], and on release either calls
/// [`resolve`](Self::resolve) (when two or more tokens are linked) or
/// [`clear_selection`](Self::clear_selection).
///
/// # Examples
///
/// ```
/// use dotlace_game::{GridEngine, INIT_MOVES};
///
/// let engine = GridEngine::with_seed(42);
/// assert_eq!(engine.score(), 0);
/// assert_eq!(engine.moves_left(), INIT_MOVES);
/// assert!(!engine.is_game_over());
/// assert!(engine.selection().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GridEngine {
    grid: TokenGrid,
    /// Selection order is insertion order; entries are unique.
    selection: Vec<Position>,
    score: u32,
    moves_left: u32,
    rng: Pcg64Mcg,
    seed: u64,
}

impl GridEngine {
    /// Creates an engine with a freshly randomized board.
    ///
    /// The seed is drawn from the thread RNG and recorded, so even a
    /// "random" game can be reproduced via [`seed`](Self::seed) and
    /// [`with_seed`](Self::with_seed).
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Creates an engine whose board and refill sequence are fully
    /// determined by `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_game::GridEngine;
    ///
    /// let a = GridEngine::with_seed(7);
    /// let b = GridEngine::with_seed(7);
    /// assert_eq!(a.grid(), b.grid());
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let grid = TokenGrid::from_fn(|_| random_color(&mut rng));
        debug!("new board from seed {seed:#018x}");
        Self {
            grid,
            selection: Vec::new(),
            score: 0,
            moves_left: INIT_MOVES,
            rng,
            seed,
        }
    }

    /// Creates an engine starting from an explicit board layout, with the
    /// refill sequence determined by `seed`.
    ///
    /// Any selection flags set in `grid` are cleared; the engine starts
    /// with an empty selection and fresh counters. Intended for laying out
    /// exact board states in tests and tools.
    #[must_use]
    pub fn from_grid(mut grid: TokenGrid, seed: u64) -> Self {
        for pos in Position::ALL {
            grid[pos].set_selected(false);
        }
        Self {
            grid,
            selection: Vec::new(),
            score: 0,
            moves_left: INIT_MOVES,
            rng: Pcg64Mcg::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns a read-only view of the board.
    #[must_use]
    pub fn grid(&self) -> &TokenGrid {
        &self.grid
    }

    /// Returns the selection path in selection order.
    #[must_use]
    pub fn selection(&self) -> &[Position] {
        &self.selection
    }

    /// Returns the most recently selected position, if any.
    #[must_use]
    pub fn last_selected(&self) -> Option<Position> {
        self.selection.last().copied()
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns how many moves are left.
    #[must_use]
    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// Returns whether the game is over (no moves left).
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.moves_left == 0
    }

    /// Returns the seed this board was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the token at a raw coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if the coordinate does not
    /// address a cell on the board.
    pub fn token_at(&self, row: i32, col: i32) -> Result<&Token, EngineError> {
        let pos = position_from_raw(row, col)?;
        Ok(&self.grid[pos])
    }

    /// Attempts to select the token at a raw coordinate.
    ///
    /// This is the presentation-facing variant of
    /// [`select_token`](Self::select_token) for callers that map pointer
    /// events to grid coordinates without filtering them first. An
    /// out-of-range coordinate is a caller error and is reported
    /// distinctly, never conflated with a legitimate
    /// [`SelectionOutcome::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if the coordinate does not
    /// address a cell on the board.
    pub fn select_at(&mut self, row: i32, col: i32) -> Result<SelectionOutcome, EngineError> {
        let pos = position_from_raw(row, col)?;
        Ok(self.select_token(pos))
    }

    /// Attempts to select the token at `pos`, growing or backtracking the
    /// selection path.
    ///
    /// The rule, applied in order:
    ///
    /// 1. An empty selection accepts any token.
    /// 2. An unselected token is accepted iff it has the same color as and
    ///    is 4-adjacent to the last selected token.
    /// 3. An already-selected token backtracks the path one step iff it is
    ///    the second-to-last entry (sliding back over the previous token
    ///    undoes the most recent pick). Any other re-tap is rejected —
    ///    paths never self-intersect and cannot be cut short.
    ///
    /// `Rejected` outcomes mutate nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_core::{Color, Position, TokenGrid};
    /// use dotlace_game::GridEngine;
    ///
    /// let mut engine = GridEngine::from_grid(TokenGrid::from_fn(|_| Color::Red), 1);
    ///
    /// assert!(engine.select_token(Position::new(1, 1)).is_added());
    /// assert!(engine.select_token(Position::new(1, 2)).is_added());
    ///
    /// // Sliding back over (1, 1) undoes the pick of (1, 2).
    /// assert!(engine.select_token(Position::new(1, 1)).is_removed());
    /// assert_eq!(engine.selection(), [Position::new(1, 1)]);
    /// ```
    pub fn select_token(&mut self, pos: Position) -> SelectionOutcome {
        let outcome = match self.last_selected() {
            None => {
                self.push_selected(pos);
                SelectionOutcome::Added
            }
            Some(last) if !self.grid[pos].is_selected() => {
                if self.grid[last].color() == self.grid[pos].color() && last.is_adjacent(pos) {
                    self.push_selected(pos);
                    SelectionOutcome::Added
                } else {
                    SelectionOutcome::Rejected
                }
            }
            Some(_) => {
                // Already selected: only a single-step backtrack deselects.
                if self.second_to_last() == Some(pos) {
                    if let Some(undone) = self.selection.pop() {
                        self.grid[undone].set_selected(false);
                    }
                    SelectionOutcome::Removed
                } else {
                    SelectionOutcome::Rejected
                }
            }
        };
        trace!("select {pos}: {outcome:?}");
        outcome
    }

    /// Deselects every token and empties the selection path.
    ///
    /// Always succeeds; called by the input layer when a released path was
    /// too short to resolve.
    pub fn clear_selection(&mut self) {
        for pos in self.selection.drain(..) {
            self.grid[pos].set_selected(false);
        }
    }

    /// Resolves the current selection: clears the selected tokens, drops
    /// every column to fill the gaps, refills the vacated top cells with
    /// random colors, and updates the counters.
    ///
    /// A selection shorter than two tokens is a harmless no-op that still
    /// clears the selection, keeping the contract total: counters are
    /// untouched and the returned outcome
    /// [`is_noop`](ResolveOutcome::is_noop).
    ///
    /// Gravity is expressed as in-place color rewrites: selections are
    /// processed top of the grid first, and for each cleared cell every
    /// token above it in the column shifts down one row before the top
    /// cell takes a fresh random color. Processing in ascending-row order
    /// is what makes multiple gaps in one column compound correctly.
    ///
    /// Resolving with no moves left leaves the exhausted counter at zero;
    /// callers are expected to gate on [`is_game_over`](Self::is_game_over)
    /// instead.
    pub fn resolve(&mut self) -> ResolveOutcome {
        if self.selection.len() < 2 {
            self.clear_selection();
            return ResolveOutcome {
                removed: 0,
                score: self.score,
                moves_left: self.moves_left,
                columns: Vec::new(),
            };
        }

        // Top of the grid first: a cell must be shifted before anything
        // below it in the same column overwrites the colors above.
        let mut cleared = self.selection.clone();
        cleared.sort_unstable_by_key(|pos| pos.row());

        let mut columns: Vec<ColumnDrop> = Vec::new();
        for &pos in &cleared {
            let col = pos.col();
            for row in (1..=pos.row()).rev() {
                let above = self.grid[Position::new(row - 1, col)].color();
                self.grid[Position::new(row, col)].set_color(above);
            }
            self.grid[Position::new(0, col)].set_color(random_color(&mut self.rng));

            match columns.iter_mut().find(|drop| drop.col == col) {
                Some(drop) => drop.cleared_rows.push(pos.row()),
                None => columns.push(ColumnDrop {
                    col,
                    cleared_rows: vec![pos.row()],
                }),
            }
        }
        columns.sort_unstable_by_key(|drop| drop.col);

        #[expect(clippy::cast_possible_truncation)]
        let removed = cleared.len() as u32;
        self.score += removed;
        self.moves_left = self.moves_left.saturating_sub(1);
        self.clear_selection();

        debug!(
            "resolved {removed}-token path, score {}, {} moves left",
            self.score, self.moves_left
        );
        ResolveOutcome {
            removed,
            score: self.score,
            moves_left: self.moves_left,
            columns,
        }
    }

    /// Returns, for each column containing at least one selected token,
    /// the selected position closest to the bottom, in ascending column
    /// order.
    ///
    /// A pure read: presentation layers snapshot this before calling
    /// [`resolve`](Self::resolve) to seed fall animations, though the
    /// [`ResolveOutcome`] carries the same information.
    #[must_use]
    pub fn lowest_selected_per_column(&self) -> Vec<Position> {
        let mut lowest = Vec::new();
        for col in 0..GRID_SIZE {
            for row in (0..GRID_SIZE).rev() {
                let pos = Position::new(row, col);
                if self.grid[pos].is_selected() {
                    lowest.push(pos);
                    break;
                }
            }
        }
        lowest
    }

    /// Starts a new game: resets the counters, clears the selection, and
    /// re-randomizes every cell.
    ///
    /// Callable at any time; an in-progress selection is discarded.
    pub fn new_game(&mut self) {
        self.clear_selection();
        self.score = 0;
        self.moves_left = INIT_MOVES;
        let rng = &mut self.rng;
        self.grid.fill_colors(|_| random_color(rng));
        debug!("new game started");
    }

    fn push_selected(&mut self, pos: Position) {
        self.selection.push(pos);
        self.grid[pos].set_selected(true);
    }

    fn second_to_last(&self) -> Option<Position> {
        self.selection
            .len()
            .checked_sub(2)
            .map(|i| self.selection[i])
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn random_color(rng: &mut Pcg64Mcg) -> Color {
    Color::from_index(rng.random_range(0..Color::COUNT))
}

fn position_from_raw(row: i32, col: i32) -> Result<Position, EngineError> {
    u8::try_from(row)
        .ok()
        .zip(u8::try_from(col).ok())
        .and_then(|(row, col)| Position::try_new(row, col))
        .ok_or(EngineError::OutOfBounds { row, col })
}
