//! Feedback scoring
//!
//! Feedback for a guess is a pair of peg counts:
//! - "perfect" pegs: right colour in the right position
//! - "exists" pegs: right colour in the wrong position, multiplicity-limited
//!
//! Their sum never exceeds the code length.

use super::code::{CODE_LENGTH, Code};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback pegs for a Mastermind guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    perfect: u8,
    exists: u8,
}

impl Feedback {
    /// All pegs perfect (the guess equals the secret)
    pub const PERFECT: Self = Self {
        perfect: CODE_LENGTH as u8,
        exists: 0,
    };

    /// Create feedback from raw peg counts
    ///
    /// # Panics
    /// Panics in debug mode if `perfect + exists` exceeds the code length.
    #[inline]
    #[must_use]
    pub const fn new(perfect: u8, exists: u8) -> Self {
        debug_assert!(
            perfect + exists <= CODE_LENGTH as u8,
            "peg counts exceed code length"
        );
        Self { perfect, exists }
    }

    /// Number of right-colour, right-position pegs
    #[inline]
    #[must_use]
    pub const fn perfect(self) -> u8 {
        self.perfect
    }

    /// Number of right-colour, wrong-position pegs
    #[inline]
    #[must_use]
    pub const fn exists(self) -> u8 {
        self.exists
    }

    /// Check if every peg is perfect
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.perfect == CODE_LENGTH as u8
    }

    /// Score a guess against the secret code
    ///
    /// This implements the standard Mastermind rules, including proper
    /// handling of duplicate colours.
    ///
    /// # Algorithm
    /// 1. First pass: count exact position matches and consume those pegs
    /// 2. Second pass: per colour, the unconsumed overlap is
    ///    `min(remaining in guess, remaining in secret)`; sum over colours
    ///
    /// The min rule is what stops a colour appearing twice in the guess but
    /// once in the secret from earning two "exists" pegs.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("red red green blue").unwrap();
    /// let guess = Code::parse("red green red blue").unwrap();
    ///
    /// let feedback = Feedback::score(&secret, &guess);
    /// assert_eq!(feedback.perfect(), 2);
    /// assert_eq!(feedback.exists(), 2);
    /// ```
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        let mut perfect = 0u8;
        let mut secret_left: FxHashMap<_, u8> = FxHashMap::default();
        let mut guess_left: FxHashMap<_, u8> = FxHashMap::default();

        // First pass: exact matches consume both pegs
        for i in 0..CODE_LENGTH {
            let (s, g) = (secret.colour_at(i), guess.colour_at(i));
            if s == g {
                perfect += 1;
            } else {
                *secret_left.entry(s).or_insert(0) += 1;
                *guess_left.entry(g).or_insert(0) += 1;
            }
        }

        // Second pass: per-colour overlap of the unconsumed pegs
        let exists = guess_left
            .iter()
            .map(|(colour, &count)| count.min(*secret_left.get(colour).unwrap_or(&0)))
            .sum();

        Self { perfect, exists }
    }

    /// Check whether a hypothetical secret would have produced this feedback
    ///
    /// This is the consistency predicate the solver filters with: candidate
    /// `c` survives a turn iff `score(c, guess)` equals the observed
    /// feedback.
    #[inline]
    #[must_use]
    pub fn explains(self, candidate: &Code, guess: &Code) -> bool {
        Self::score(candidate, guess) == self
    }

    /// Parse feedback from a string like "2 1", "21", "●●○" or "bbw"
    ///
    /// Accepts:
    /// - two digits (perfect then exists), optionally separated by spaces
    /// - a peg string using '●'/'b' for perfect and '○'/'w' for exists
    ///
    /// Returns `None` for anything else, or if the counts exceed the code
    /// length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("2 1").unwrap();
    /// let f2 = Feedback::from_str("●●○").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        let digits: Vec<u8> = compact
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .unwrap_or_default();

        let (perfect, exists) = if digits.len() == 2 {
            (digits[0], digits[1])
        } else {
            let mut perfect = 0u8;
            let mut exists = 0u8;
            for ch in compact.chars() {
                match ch {
                    '●' | 'b' | 'B' => perfect += 1,
                    '○' | 'w' | 'W' => exists += 1,
                    _ => return None,
                }
            }
            (perfect, exists)
        };

        if perfect + exists <= CODE_LENGTH as u8 {
            Some(Self { perfect, exists })
        } else {
            None
        }
    }
}

impl fmt::Display for Feedback {
    /// Renders as pegs: '●' per perfect, '○' per exists, '·' per miss
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let misses = CODE_LENGTH as u8 - self.perfect - self.exists;
        for _ in 0..self.perfect {
            write!(f, "●")?;
        }
        for _ in 0..self.exists {
            write!(f, "○")?;
        }
        for _ in 0..misses {
            write!(f, "·")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    #[test]
    fn perfect_constant() {
        assert_eq!(Feedback::PERFECT.perfect(), 4);
        assert_eq!(Feedback::PERFECT.exists(), 0);
        assert!(Feedback::PERFECT.is_perfect());
    }

    #[test]
    fn score_identical_codes_is_perfect() {
        for s in ["red red red red", "pink red green blue", "blue blue pink yellow"] {
            let c = code(s);
            assert_eq!(Feedback::score(&c, &c), Feedback::PERFECT);
        }
    }

    #[test]
    fn score_disjoint_colours_is_zero() {
        // secret=[pink,pink,pink,pink], guess=[red,red,red,red]
        let secret = code("pink pink pink pink");
        let guess = code("red red red red");
        assert_eq!(Feedback::score(&secret, &guess), Feedback::new(0, 0));
    }

    #[test]
    fn score_duplicate_colours_use_min_rule() {
        // secret=[red,red,green,blue], guess=[red,green,red,blue]
        // Positions 0 and 3 perfect; the remaining red and green each
        // overlap once.
        let secret = code("red red green blue");
        let guess = code("red green red blue");
        assert_eq!(Feedback::score(&secret, &guess), Feedback::new(2, 2));
    }

    #[test]
    fn score_correct_multiset_wrong_positions() {
        // secret=[pink,red,green,blue], guess=[blue,green,red,pink]
        let secret = code("pink red green blue");
        let guess = code("blue green red pink");
        assert_eq!(Feedback::score(&secret, &guess), Feedback::new(0, 4));
    }

    #[test]
    fn score_overcounting_guard() {
        // Guess holds two yellows, secret only one (non-perfectly placed):
        // at most one exists peg for yellow.
        let secret = code("yellow pink pink pink");
        let guess = code("pink yellow yellow blue");
        let feedback = Feedback::score(&secret, &guess);
        assert_eq!(feedback.perfect(), 0);
        // one for yellow, one for pink
        assert_eq!(feedback.exists(), 2);
    }

    #[test]
    fn score_peg_total_never_exceeds_code_length() {
        // Sampled sweep over the code space
        let codes: Vec<Code> = Code::all().step_by(37).collect();
        for secret in &codes {
            for guess in &codes {
                let f = Feedback::score(secret, guess);
                assert!(f.perfect() + f.exists() <= 4);
            }
        }
    }

    #[test]
    fn score_perfect_count_is_symmetric() {
        // Swapping secret and guess preserves both peg counts
        let codes: Vec<Code> = Code::all().step_by(53).collect();
        for a in &codes {
            for b in &codes {
                let ab = Feedback::score(a, b);
                let ba = Feedback::score(b, a);
                assert_eq!(ab.perfect(), ba.perfect());
                assert_eq!(
                    ab.perfect() + ab.exists(),
                    ba.perfect() + ba.exists()
                );
            }
        }
    }

    #[test]
    fn explains_matches_rescoring() {
        let guess = code("red green blue yellow");
        let secret = code("green red blue pink");
        let observed = Feedback::score(&secret, &guess);

        assert!(observed.explains(&secret, &guess));
        assert!(!Feedback::PERFECT.explains(&secret, &guess));
    }

    #[test]
    fn from_str_digit_forms() {
        assert_eq!(Feedback::from_str("2 1"), Some(Feedback::new(2, 1)));
        assert_eq!(Feedback::from_str("21"), Some(Feedback::new(2, 1)));
        assert_eq!(Feedback::from_str("40"), Some(Feedback::PERFECT));
        assert_eq!(Feedback::from_str("00"), Some(Feedback::new(0, 0)));
    }

    #[test]
    fn from_str_peg_forms() {
        assert_eq!(Feedback::from_str("●●○"), Some(Feedback::new(2, 1)));
        assert_eq!(Feedback::from_str("bbw"), Some(Feedback::new(2, 1)));
        assert_eq!(Feedback::from_str(""), Some(Feedback::new(0, 0)));
    }

    #[test]
    fn from_str_rejects_invalid() {
        assert_eq!(Feedback::from_str("3 2"), None); // sum > 4
        assert_eq!(Feedback::from_str("x"), None);
        assert_eq!(Feedback::from_str("123"), None); // three digits
        assert_eq!(Feedback::from_str("●●●●●"), None); // five pegs
    }

    #[test]
    fn display_renders_pegs() {
        assert_eq!(Feedback::new(2, 1).to_string(), "●●○·");
        assert_eq!(Feedback::new(0, 0).to_string(), "····");
        assert_eq!(Feedback::PERFECT.to_string(), "●●●●");
    }
}
