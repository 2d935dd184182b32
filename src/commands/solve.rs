//! Code solving command
//!
//! Runs the deductive solver against a known secret and returns the guess
//! path.

use crate::core::{Code, Feedback};
use crate::solver::{Solver, Strategy};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_turns: 10,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub turns: Vec<GuessStep>,
    pub secret: String,
}

/// A single turn in the solution path
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret code with the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not four valid palette colours
/// - The solver hits an empty candidate set (a consistency violation)
pub fn solve_code<S: Strategy>(
    config: SolveConfig,
    solver: &mut Solver<S>,
) -> Result<SolveResult, String> {
    let secret = Code::parse(&config.secret).map_err(|e| format!("Invalid secret code: {e}"))?;

    solver.initialize();
    let mut turns: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_turns {
        let candidates_before = solver.candidate_count();

        let guess = solver.next_guess().map_err(|e| e.to_string())?;
        let feedback = Feedback::score(&secret, &guess);

        solver.observe(&guess, feedback).map_err(|e| e.to_string())?;
        let candidates_after = solver.candidate_count();

        turns.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });

        if feedback.is_perfect() {
            return Ok(SolveResult {
                success: true,
                turns,
                secret: config.secret,
            });
        }
    }

    // Turn limit reached
    Ok(SolveResult {
        success: false,
        turns,
        secret: config.secret,
    })
}
