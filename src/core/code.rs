//! Code representation
//!
//! A Code is an ordered sequence of exactly four palette colours.
//! Duplicates are allowed.

use super::Colour;
use rand::Rng;
use std::fmt;

/// Number of pegs in a code
pub const CODE_LENGTH: usize = 4;

/// A validated four-colour code
///
/// Construction and parsing enforce length and palette membership, so a
/// `Code` value is always legal input for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Colour; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidColour(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} colours, got {len}")
            }
            Self::InvalidColour(name) => write!(f, "Unknown colour: {name}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Total number of possible codes (6^4 = 1296)
    pub const TOTAL: usize = Colour::COUNT.pow(CODE_LENGTH as u32);

    /// Create a Code from a fixed-size peg array
    ///
    /// The array type already guarantees the length, so this cannot fail.
    #[inline]
    #[must_use]
    pub const fn from_pegs(pegs: [Colour; CODE_LENGTH]) -> Self {
        Self(pegs)
    }

    /// Create a Code from a slice of colours
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if the slice is not exactly
    /// `CODE_LENGTH` colours long.
    pub fn new(colours: &[Colour]) -> Result<Self, CodeError> {
        let pegs: [Colour; CODE_LENGTH] = colours
            .try_into()
            .map_err(|_| CodeError::InvalidLength(colours.len()))?;
        Ok(Self(pegs))
    }

    /// Parse a code from whitespace-separated colour names
    ///
    /// # Errors
    /// Returns `CodeError::InvalidColour` for any name outside the palette,
    /// or `CodeError::InvalidLength` if there are not exactly four names.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, CodeError};
    ///
    /// let code = Code::parse("red green blue pink").unwrap();
    /// assert_eq!(code.to_string(), "red green blue pink");
    ///
    /// assert!(matches!(
    ///     Code::parse("red green blue"),
    ///     Err(CodeError::InvalidLength(3))
    /// ));
    /// assert!(matches!(
    ///     Code::parse("red green blue mauve"),
    ///     Err(CodeError::InvalidColour(_))
    /// ));
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let colours = input
            .split_whitespace()
            .map(|name| {
                Colour::from_name(name).ok_or_else(|| CodeError::InvalidColour(name.to_string()))
            })
            .collect::<Result<Vec<Colour>, CodeError>>()?;
        Self::new(&colours)
    }

    /// Generate a random code from an injected entropy source
    ///
    /// Each peg is sampled independently and uniformly from the palette, so
    /// duplicates occur naturally.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pegs = [Colour::Pink; CODE_LENGTH];
        for peg in &mut pegs {
            *peg = Colour::PALETTE[rng.random_range(0..Colour::COUNT)];
        }
        Self(pegs)
    }

    /// Decode a code from its index in the full enumeration (0..`TOTAL`)
    ///
    /// Treats the index as a base-6 number, one digit per peg.
    ///
    /// # Panics
    /// Panics in debug mode if `index >= TOTAL`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::TOTAL, "code index out of range");
        let mut pegs = [Colour::Pink; CODE_LENGTH];
        let mut rest = index;
        for peg in &mut pegs {
            *peg = Colour::PALETTE[rest % Colour::COUNT];
            rest /= Colour::COUNT;
        }
        Self(pegs)
    }

    /// Enumerate every possible code (the full Cartesian product)
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::TOTAL).map(Self::from_index)
    }

    /// Get the pegs as a fixed-size array
    #[inline]
    #[must_use]
    pub const fn colours(&self) -> &[Colour; CODE_LENGTH] {
        &self.0
    }

    /// Get the colour at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= `CODE_LENGTH`
    #[inline]
    #[must_use]
    pub const fn colour_at(&self, position: usize) -> Colour {
        self.0[position]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pegs = self.0.iter();
        if let Some(first) = pegs.next() {
            write!(f, "{first}")?;
        }
        for peg in pegs {
            write!(f, " {peg}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
