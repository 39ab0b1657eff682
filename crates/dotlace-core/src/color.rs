//! Token palette representation.

/// A token color from the fixed five-color palette.
///
/// This enum provides type-safe representation of the palette, preventing
/// out-of-palette values at compile time. The palette size is a build-time
/// constant ([`Color::COUNT`]); engine code treats colors as opaque indices
/// and only ever compares them for equality.
///
/// # Examples
///
/// ```
/// use dotlace_core::Color;
///
/// let color = Color::Green;
/// assert_eq!(color.index(), 1);
///
/// // Create from a palette index
/// let color = Color::from_index(3);
/// assert_eq!(color, Color::Purple);
///
/// // Iterate over the whole palette
/// for color in Color::ALL {
///     assert!(color.index() < Color::COUNT);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[repr(u8)]
pub enum Color {
    /// Palette index 0.
    #[display("red")]
    Red = 0,
    /// Palette index 1.
    #[display("green")]
    Green = 1,
    /// Palette index 2.
    #[display("blue")]
    Blue = 2,
    /// Palette index 3.
    #[display("purple")]
    Purple = 3,
    /// Palette index 4.
    #[display("yellow")]
    Yellow = 4,
}

impl Color {
    /// Number of colors in the palette.
    pub const COUNT: u8 = 5;

    /// Array containing every palette color in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_core::Color;
    ///
    /// assert_eq!(Color::ALL.len(), usize::from(Color::COUNT));
    /// assert_eq!(Color::ALL[0], Color::Red);
    /// assert_eq!(Color::ALL[4], Color::Yellow);
    /// ```
    pub const ALL: [Self; 5] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Yellow,
    ];

    /// Creates a color from a palette index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Color::COUNT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_core::Color;
    ///
    /// assert_eq!(Color::from_index(0), Color::Red);
    /// assert_eq!(Color::from_index(4), Color::Yellow);
    /// ```
    ///
    /// ```should_panic
    /// use dotlace_core::Color;
    ///
    /// // This will panic
    /// let _ = Color::from_index(5);
    /// ```
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        match Self::try_from_index(index) {
            Some(color) => color,
            None => panic!("Invalid palette index: {index}"),
        }
    }

    /// Creates a color from a palette index, returning `None` when the
    /// index is outside the palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_core::Color;
    ///
    /// assert_eq!(Color::try_from_index(2), Some(Color::Blue));
    /// assert_eq!(Color::try_from_index(5), None);
    /// ```
    #[must_use]
    pub const fn try_from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Red),
            1 => Some(Self::Green),
            2 => Some(Self::Blue),
            3 => Some(Self::Purple),
            4 => Some(Self::Yellow),
            _ => None,
        }
    }

    /// Returns the palette index of this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotlace_core::Color;
    ///
    /// assert_eq!(Color::Red.index(), 0);
    /// assert_eq!(Color::Yellow.index(), 4);
    /// ```
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        // from_index and index() round-trip for boundary values
        assert_eq!(Color::from_index(0), Color::Red);
        assert_eq!(Color::from_index(4), Color::Yellow);
        assert_eq!(Color::Red.index(), 0);
        assert_eq!(Color::Yellow.index(), 4);

        // ALL constant covers the palette in index order
        assert_eq!(Color::ALL.len(), usize::from(Color::COUNT));
        for (i, color) in Color::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(color.index()), i);
            assert_eq!(Color::from_index(color.index()), color);
        }

        // Display trait
        assert_eq!(format!("{}", Color::Red), "red");
        assert_eq!(format!("{}", Color::Purple), "purple");
    }

    #[test]
    fn test_try_from_index_rejects_out_of_palette() {
        assert_eq!(Color::try_from_index(Color::COUNT), None);
        assert_eq!(Color::try_from_index(u8::MAX), None);
    }

    #[test]
    #[should_panic(expected = "Invalid palette index: 5")]
    fn test_from_index_five_panics() {
        let _ = Color::from_index(5);
    }
}
