//! Benchmark command
//!
//! Measures solver performance across a batch of random secrets.

use crate::core::{Code, Feedback};
use crate::solver::{Solver, StrategyType};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Turn cap per game; consistency filtering resolves well inside this
const MAX_TURNS: usize = 10;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Play one full game against `secret`, returning the number of turns taken
///
/// Returns `None` if the solver errors, which with truthful feedback means a
/// scoring/filtering bug.
fn play_game(strategy_name: &str, seed: u64, secret: &Code) -> Option<usize> {
    let mut solver = Solver::new(StrategyType::from_name(strategy_name, Some(seed)));
    solver.initialize();

    for turn in 1..=MAX_TURNS {
        let guess = solver.next_guess().ok()?;
        let feedback = Feedback::score(secret, &guess);

        if feedback.is_perfect() {
            return Some(turn);
        }
        solver.observe(&guess, feedback).ok()?;
    }

    None
}

/// Run a benchmark over `count` random secrets
///
/// The secret sequence and every per-game strategy are derived from `seed`,
/// so a benchmark run is fully reproducible.
#[must_use]
pub fn run_benchmark(strategy_name: &str, count: usize, seed: u64) -> BenchmarkResult {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for game in 0..count {
        let secret = Code::random(&mut rng);
        let turns = play_game(strategy_name, seed.wrapping_add(game as u64), &secret)
            .unwrap_or(MAX_TURNS + 1);

        total_turns += turns;
        min_turns = min_turns.min(turns);
        max_turns = max_turns.max(turns);
        *distribution.entry(turns).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let average_turns = if count > 0 {
        total_turns as f64 / count as f64
    } else {
        0.0
    };
    let codes_per_second = if duration.as_secs_f64() > 0.0 {
        count as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    BenchmarkResult {
        total_codes: count,
        total_turns,
        average_turns,
        min_turns: if count > 0 { min_turns } else { 0 },
        max_turns,
        distribution,
        duration,
        codes_per_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_solves_every_game() {
        let result = run_benchmark("random", 20, 42);

        assert_eq!(result.total_codes, 20);
        // Every game resolves inside the cap
        assert!(result.max_turns <= MAX_TURNS);
        assert!(result.min_turns >= 1);
        assert_eq!(result.distribution.values().sum::<usize>(), 20);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let a = run_benchmark("random", 10, 7);
        let b = run_benchmark("random", 10, 7);

        assert_eq!(a.total_turns, b.total_turns);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_handles_zero_games() {
        let result = run_benchmark("random", 0, 1);

        assert_eq!(result.total_codes, 0);
        assert!((result.average_turns - 0.0).abs() < f64::EPSILON);
        assert_eq!(result.min_turns, 0);
    }

    #[test]
    fn first_strategy_benchmark_solves_games_too() {
        let result = run_benchmark("first", 15, 3);

        assert!(result.max_turns <= MAX_TURNS);
        assert!(result.average_turns >= 1.0);
    }
}
