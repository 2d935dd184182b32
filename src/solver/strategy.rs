//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. A strategy only
//! picks which surviving candidate to play next; the consistency filtering
//! itself lives in the engine.

use crate::core::Code;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A policy for selecting the next guess from the surviving candidates
pub trait Strategy {
    /// Select a guess from the candidate set
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&mut self, candidates: &'a [Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Uniform random sample from the candidates (default)
    Random(RandomStrategy),
    /// Deterministic first candidate in enumeration order
    First(FirstCandidateStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&mut self, candidates: &'a [Code]) -> Option<&'a Code> {
        match self {
            Self::Random(s) => s.select_guess(candidates),
            Self::First(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random" (default), "first". A seed, when given,
    /// makes the random strategy reproducible.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "first" => Self::First(FirstCandidateStrategy),
            _ => Self::Random(seed.map_or_else(RandomStrategy::new, RandomStrategy::seeded)),
        }
    }
}

/// Uniform random selection from the candidates
///
/// The reference policy. The entropy source is injected at construction so
/// runs can be replayed from a seed.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a strategy drawing from operating-system entropy
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible strategy from a seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&mut self, candidates: &'a [Code]) -> Option<&'a Code> {
        candidates.choose(&mut self.rng)
    }
}

/// Deterministic selection of the first surviving candidate
///
/// Useful where a run must be fully reproducible without threading a seed
/// through, e.g. exhaustive sweeps.
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess<'a>(&mut self, candidates: &'a [Code]) -> Option<&'a Code> {
        candidates.first()
    }
}
