//! The per-cell token record.

use crate::Color;

/// One colored token of the board.
///
/// A token is a passive record: it has no identity of its own beyond the
/// grid slot that holds it. The selection path refers to tokens by
/// [`Position`](crate::Position), and all mutation goes through the grid,
/// so the `selected` flag always mirrors selection membership.
///
/// # Examples
///
/// ```
/// use dotlace_core::{Color, Token};
///
/// let token = Token::new(Color::Red);
/// assert_eq!(token.color(), Color::Red);
/// assert!(!token.is_selected());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    color: Color,
    selected: bool,
}

impl Token {
    /// Creates an unselected token with the given color.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            selected: false,
        }
    }

    /// Returns the color of this token.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns whether this token is part of the active selection path.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Replaces the color of this token.
    ///
    /// Resolution moves colors, not tokens: a falling column is expressed
    /// as a sequence of color rewrites on fixed slots.
    pub const fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets or clears the selection flag of this token.
    pub const fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_unselected() {
        for color in Color::ALL {
            let token = Token::new(color);
            assert_eq!(token.color(), color);
            assert!(!token.is_selected());
        }
    }

    #[test]
    fn test_mutators() {
        let mut token = Token::new(Color::Red);

        token.set_color(Color::Blue);
        assert_eq!(token.color(), Color::Blue);

        token.set_selected(true);
        assert!(token.is_selected());
        token.set_selected(false);
        assert!(!token.is_selected());

        // Recoloring does not touch the selection flag
        token.set_selected(true);
        token.set_color(Color::Yellow);
        assert!(token.is_selected());
    }
}
