//! Engine error types.

/// Errors returned by the raw-coordinate engine entry points.
///
/// Illegal selection attempts (wrong color, non-adjacent, arbitrary
/// re-tap) are not errors: they are the normal
/// [`SelectionOutcome::Rejected`](crate::SelectionOutcome::Rejected)
/// outcome. An error here always indicates a caller bug, such as feeding
/// unfiltered pointer coordinates to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// The coordinate does not address a cell on the board.
    #[display("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Raw row index as supplied by the caller.
        row: i32,
        /// Raw column index as supplied by the caller.
        col: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EngineError::OutOfBounds { row: -1, col: 6 };
        assert_eq!(format!("{err}"), "coordinate (-1, 6) is outside the board");
    }
}
