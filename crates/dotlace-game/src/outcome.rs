//! Outcome values returned by engine operations.
//!
//! The engine never calls back into its caller. Every observable state
//! transition is reported through the values in this module, which a
//! presentation layer interprets to drive rendering, sound, and animation.

/// Result of attempting to select one token.
///
/// `Added` and `Removed` report a mutation of the selection path (one
/// token appended or one token popped by backtracking); `Rejected` reports
/// that nothing changed. A feedback layer typically steps a sound pitch up
/// on `Added` and down on `Removed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// The token was appended to the selection path.
    Added,
    /// The touch did not change the selection.
    Rejected,
    /// The path backtracked one step and the last token was deselected.
    Removed,
}

/// Rows cleared from a single column during resolution.
///
/// Carries enough structure for a presentation layer to compute fall
/// distances without re-reading the board: every unselected token above a
/// cleared row falls by the number of cleared rows at or below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDrop {
    /// Column index.
    pub col: u8,
    /// Cleared row indices in this column, ascending (top of grid first).
    pub cleared_rows: Vec<u8>,
}

impl ColumnDrop {
    /// Number of tokens removed from this column.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.cleared_rows.len()
    }

    /// The lowest cleared row (largest row index, closest to the bottom).
    ///
    /// # Panics
    ///
    /// Panics if the drop record is empty; [`resolve`] never produces one.
    ///
    /// [`resolve`]: crate::GridEngine::resolve
    #[must_use]
    pub fn lowest_row(&self) -> u8 {
        *self
            .cleared_rows
            .last()
            .expect("a column drop records at least one cleared row")
    }
}

/// Summary of one resolution step.
///
/// Returned by [`GridEngine::resolve`](crate::GridEngine::resolve) so the
/// caller never needs to read stale pre-resolution board state: the
/// counters are the post-resolution values and [`columns`](Self::columns)
/// describes every column that changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Number of tokens removed (the selection length, 0 for a no-op).
    pub removed: u32,
    /// Score after this resolution.
    pub score: u32,
    /// Moves left after this resolution.
    pub moves_left: u32,
    /// Per-column clear records, ascending by column; empty for a no-op.
    pub columns: Vec<ColumnDrop>,
}

impl ResolveOutcome {
    /// Returns whether this resolution was the degenerate no-op on a
    /// selection shorter than two tokens.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.removed == 0
    }
}
