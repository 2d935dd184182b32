//! Test all codes - comprehensive solver evaluation
//!
//! Runs the solver against every possible secret and generates statistics.

use crate::core::{Code, Feedback};
use crate::solver::{Solver, StrategyType};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Turn cap per game
const MAX_TURNS: usize = 10;

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: String,
    pub num_turns: usize,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub turn_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_turns: f64,
    pub max_turns: usize,
    pub min_turns: usize,
    pub worst_codes: Vec<(String, usize)>,
}

/// Run the solver on every possible secret (or a limited subset)
///
/// Games are independent, so they run in parallel, each with its own solver
/// instance. Per-game strategies derive from `seed`, keeping the sweep
/// reproducible.
#[must_use]
pub fn run_test_all(strategy_name: &str, limit: Option<usize>, seed: u64) -> TestAllStatistics {
    let secrets: Vec<Code> = Code::all().take(limit.unwrap_or(Code::TOTAL)).collect();

    println!("Testing {} codes...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<CodeTestResult> = secrets
        .par_iter()
        .enumerate()
        .map(|(idx, secret)| {
            let mut solver = Solver::new(StrategyType::from_name(
                strategy_name,
                Some(seed.wrapping_add(idx as u64)),
            ));
            solver.initialize();

            let mut num_turns = 0;
            let mut success = false;

            for turn in 1..=MAX_TURNS {
                num_turns = turn;
                let Ok(guess) = solver.next_guess() else {
                    break;
                };
                let feedback = Feedback::score(secret, &guess);

                if feedback.is_perfect() {
                    success = true;
                    break;
                }
                if solver.observe(&guess, feedback).is_err() {
                    break;
                }
            }

            pb.inc(1);

            CodeTestResult {
                secret: secret.to_string(),
                num_turns,
                success,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    // Calculate statistics
    let solved_count = results.iter().filter(|r| r.success).count();
    let failed_count = results.len() - solved_count;

    let mut turn_distribution: HashMap<usize, usize> = HashMap::new();
    for result in results.iter().filter(|r| r.success) {
        *turn_distribution.entry(result.num_turns).or_insert(0) += 1;
    }

    let total_turns: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_turns)
        .sum();
    let average_turns = if solved_count > 0 {
        total_turns as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_turns = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_turns)
        .max()
        .unwrap_or(0);

    let min_turns = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_turns)
        .min()
        .unwrap_or(0);

    let mut worst_codes: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.success)
        .filter(|r| r.num_turns >= 6)
        .map(|r| (r.secret.clone(), r.num_turns))
        .collect();
    worst_codes.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved_count,
        failed: failed_count,
        turn_distribution,
        total_time,
        average_turns,
        max_turns,
        min_turns,
        worst_codes,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    // Overall performance
    println!("\n{}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_codes as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_codes as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average turns:       {}",
        format!("{:.3}", stats.average_turns)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per code:       {:.2}ms",
        stats.total_time.as_millis() as f64 / stats.total_codes as f64
    );

    // Turn distribution
    println!("\n{}", "Turn Distribution".bright_cyan().bold());
    let max_count = *stats.turn_distribution.values().max().unwrap_or(&1);
    for turns in 1..=stats.max_turns.max(1) {
        let count = stats.turn_distribution.get(&turns).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (*count * 40 / max_count).max(usize::from(*count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {turns} turns: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    // Worst cases
    if !stats.worst_codes.is_empty() {
        println!("\n{}", "Hardest Codes (6+ turns)".yellow().bold());
        for (secret, turns) in stats.worst_codes.iter().take(5) {
            println!("  {} ({} turns)", secret.yellow(), turns);
        }
    }

    // Range summary
    println!("\n{}", "Range".bright_cyan().bold());
    println!("  Best case:  {} turns", stats.min_turns);
    println!("  Worst case: {} turns", stats.max_turns);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_limited_sweep_solves_everything() {
        let stats = run_test_all("first", Some(60), 0);

        assert_eq!(stats.total_codes, 60);
        assert_eq!(stats.solved, 60);
        assert_eq!(stats.failed, 0);
        assert!(stats.min_turns >= 1);
        assert!(stats.max_turns <= MAX_TURNS);
        assert_eq!(stats.turn_distribution.values().sum::<usize>(), 60);
    }

    #[test]
    fn test_all_average_within_range() {
        let stats = run_test_all("random", Some(40), 9);

        assert!(stats.average_turns >= 1.0);
        assert!(stats.average_turns <= MAX_TURNS as f64);
    }
}
