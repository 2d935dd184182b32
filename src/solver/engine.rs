//! Deductive codebreaker
//!
//! The solver owns the set of codes still consistent with every observed
//! feedback and narrows it after each turn. It never regrows: if the
//! feedback it was fed is truthful, the true secret stays in the set until
//! it is the only member left.

use super::strategy::Strategy;
use crate::core::{Code, Colour, Feedback};
use std::fmt;

/// Fixed opening guess: two colour pairs
///
/// Played on the first turn, when every code is still a candidate and one
/// guess is as consistent as another.
const OPENING: Code = Code::from_pegs([Colour::Pink, Colour::Pink, Colour::Red, Colour::Red]);

/// Error type for solver misuse and invariant violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// `observe` or `next_guess` called before `initialize`
    Uninitialized,
    /// Every candidate has been ruled out
    ///
    /// Unreachable when the observed feedback is truthful; hitting it means
    /// the feedback was wrong or scoring and filtering disagree. Callers
    /// should abort the automated path, not guess blindly.
    EmptyCandidateSet,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Solver used before initialize()"),
            Self::EmptyCandidateSet => write!(
                f,
                "No candidates remain: observed feedback is contradictory"
            ),
        }
    }
}

impl std::error::Error for SolverError {}

/// Deductive Mastermind solver
///
/// Maintains the candidate set and delegates guess selection to a strategy.
/// Each game needs its own instance; nothing is shared between games.
pub struct Solver<S: Strategy> {
    strategy: S,
    /// `None` until `initialize`; afterwards only ever shrinks
    candidates: Option<Vec<Code>>,
}

impl<S: Strategy> Solver<S> {
    /// Create an uninitialized solver with the given selection strategy
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            candidates: None,
        }
    }

    /// Populate the candidate set with every possible code
    ///
    /// For the 6-colour, 4-peg game that is 6^4 = 1296 candidates.
    /// Reinitializing an in-use solver starts a fresh game.
    pub fn initialize(&mut self) {
        self.candidates = Some(Code::all().collect());
    }

    /// Whether `initialize` has been called
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.candidates.is_some()
    }

    /// The surviving candidates (empty slice before `initialize`)
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        self.candidates.as_deref().unwrap_or_default()
    }

    /// Number of surviving candidates
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates().len()
    }

    /// Narrow the candidate set with one turn's feedback
    ///
    /// Keeps exactly the candidates that, as the secret, would have produced
    /// `feedback` for `guess`. This single predicate subsumes all the
    /// zero-hit / all-exists / all-perfect special cases, and filtering is a
    /// set intersection, so observing the same turn twice changes nothing.
    ///
    /// # Errors
    /// Returns `SolverError::Uninitialized` if called before `initialize`.
    pub fn observe(&mut self, guess: &Code, feedback: Feedback) -> Result<(), SolverError> {
        let candidates = self
            .candidates
            .as_mut()
            .ok_or(SolverError::Uninitialized)?;
        candidates.retain(|candidate| feedback.explains(candidate, guess));
        Ok(())
    }

    /// Select the next guess from the surviving candidates
    ///
    /// The first turn plays the fixed two-pair opening; later turns defer to
    /// the strategy. With one survivor left, that survivor is the secret.
    ///
    /// # Errors
    /// - `SolverError::Uninitialized` before `initialize`
    /// - `SolverError::EmptyCandidateSet` if nothing survives; this is a
    ///   fatal consistency violation, not a recoverable condition
    pub fn next_guess(&mut self) -> Result<Code, SolverError> {
        let Some(candidates) = &self.candidates else {
            return Err(SolverError::Uninitialized);
        };

        if candidates.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }

        // Untouched set means turn 1
        if candidates.len() == Code::TOTAL {
            return Ok(OPENING);
        }

        if candidates.len() == 1 {
            return Ok(candidates[0]);
        }

        self.strategy
            .select_guess(candidates)
            .copied()
            .ok_or(SolverError::EmptyCandidateSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{FirstCandidateStrategy, RandomStrategy};

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    fn ready_solver() -> Solver<FirstCandidateStrategy> {
        let mut solver = Solver::new(FirstCandidateStrategy);
        solver.initialize();
        solver
    }

    #[test]
    fn starts_uninitialized() {
        let mut solver = Solver::new(FirstCandidateStrategy);

        assert!(!solver.is_ready());
        assert_eq!(solver.candidate_count(), 0);
        assert_eq!(solver.next_guess(), Err(SolverError::Uninitialized));
        assert_eq!(
            solver.observe(&code("red red red red"), Feedback::new(0, 0)),
            Err(SolverError::Uninitialized)
        );
    }

    #[test]
    fn initialize_populates_full_candidate_set() {
        let solver = ready_solver();

        assert!(solver.is_ready());
        assert_eq!(solver.candidate_count(), 1296);
    }

    #[test]
    fn first_guess_is_the_fixed_opening() {
        let mut solver = ready_solver();
        assert_eq!(solver.next_guess().unwrap(), code("pink pink red red"));
    }

    #[test]
    fn perfect_feedback_pins_the_guess() {
        let mut solver = ready_solver();
        let guess = code("red green blue yellow");

        solver.observe(&guess, Feedback::PERFECT).unwrap();

        assert_eq!(solver.candidate_count(), 1);
        assert_eq!(solver.next_guess().unwrap(), guess);
    }

    #[test]
    fn observe_keeps_only_consistent_candidates() {
        let mut solver = ready_solver();
        let secret = code("purple red red blue");
        let guess = code("pink pink red red");

        solver
            .observe(&guess, Feedback::score(&secret, &guess))
            .unwrap();

        assert!(solver.candidates().contains(&secret));
        for candidate in solver.candidates() {
            assert_eq!(
                Feedback::score(candidate, &guess),
                Feedback::score(&secret, &guess)
            );
        }
    }

    #[test]
    fn observe_is_idempotent() {
        let mut solver = ready_solver();
        let guess = code("pink pink red red");
        let feedback = Feedback::new(1, 1);

        solver.observe(&guess, feedback).unwrap();
        let after_once: Vec<Code> = solver.candidates().to_vec();

        solver.observe(&guess, feedback).unwrap();
        assert_eq!(solver.candidates(), after_once.as_slice());
    }

    #[test]
    fn candidate_set_only_shrinks() {
        let mut solver = ready_solver();
        let secret = code("blue yellow pink green");
        let mut previous = solver.candidate_count();

        for _ in 0..10 {
            let guess = solver.next_guess().unwrap();
            if guess == secret {
                break;
            }
            solver
                .observe(&guess, Feedback::score(&secret, &guess))
                .unwrap();
            assert!(solver.candidate_count() <= previous);
            previous = solver.candidate_count();
        }
    }

    #[test]
    fn true_secret_survives_every_observation() {
        // Play full games against a spread of secrets with truthful
        // feedback; the secret must stay in the set until found.
        for secret in Code::all().step_by(97) {
            let mut solver = Solver::new(RandomStrategy::seeded(11));
            solver.initialize();

            loop {
                let guess = solver.next_guess().unwrap();
                if guess == secret {
                    break;
                }
                solver
                    .observe(&guess, Feedback::score(&secret, &guess))
                    .unwrap();
                assert!(solver.candidates().contains(&secret));
            }
        }
    }

    #[test]
    fn contradictory_feedback_empties_the_set() {
        let mut solver = ready_solver();
        let guess = code("red red red red");

        // No code both contains a red and contains no red
        solver.observe(&guess, Feedback::new(0, 0)).unwrap();
        solver.observe(&guess, Feedback::new(1, 0)).unwrap();

        assert_eq!(solver.candidate_count(), 0);
        assert_eq!(solver.next_guess(), Err(SolverError::EmptyCandidateSet));
    }

    #[test]
    fn reinitialize_starts_a_fresh_game() {
        let mut solver = ready_solver();
        let guess = code("pink pink red red");
        solver.observe(&guess, Feedback::new(2, 0)).unwrap();
        assert!(solver.candidate_count() < 1296);

        solver.initialize();
        assert_eq!(solver.candidate_count(), 1296);
    }
}
