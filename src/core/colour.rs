//! Peg colours
//!
//! The fixed six-colour palette that codes are built from.

use std::fmt;

/// A single peg colour from the fixed palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Pink,
    Red,
    Green,
    Blue,
    Purple,
    Yellow,
}

impl Colour {
    /// The full palette, in canonical order
    pub const PALETTE: [Self; 6] = [
        Self::Pink,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Yellow,
    ];

    /// Number of colours in the palette
    pub const COUNT: usize = Self::PALETTE.len();

    /// Parse a colour from its lowercase-insensitive name
    ///
    /// Returns `None` for anything outside the palette.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Colour;
    ///
    /// assert_eq!(Colour::from_name("red"), Some(Colour::Red));
    /// assert_eq!(Colour::from_name("YELLOW"), Some(Colour::Yellow));
    /// assert_eq!(Colour::from_name("mauve"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pink" => Some(Self::Pink),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "purple" => Some(Self::Purple),
            "yellow" => Some(Self::Yellow),
            _ => None,
        }
    }

    /// The colour's lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
        }
    }

    /// Position of this colour in the canonical palette order (0-5)
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_six_distinct_colours() {
        assert_eq!(Colour::COUNT, 6);
        for (i, colour) in Colour::PALETTE.iter().enumerate() {
            assert_eq!(colour.index(), i);
        }
    }

    #[test]
    fn from_name_round_trips_palette() {
        for colour in Colour::PALETTE {
            assert_eq!(Colour::from_name(colour.name()), Some(colour));
        }
    }

    #[test]
    fn from_name_case_insensitive() {
        assert_eq!(Colour::from_name("Red"), Some(Colour::Red));
        assert_eq!(Colour::from_name("PURPLE"), Some(Colour::Purple));
        assert_eq!(Colour::from_name("pInK"), Some(Colour::Pink));
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(Colour::from_name("orange"), None);
        assert_eq!(Colour::from_name(""), None);
        assert_eq!(Colour::from_name("re d"), None);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(format!("{}", Colour::Blue), "blue");
        assert_eq!(format!("{}", Colour::Yellow), "yellow");
    }
}
