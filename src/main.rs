//! Mastermind Solver - CLI
//!
//! Play Mastermind at the terminal, or let the deductive solver break codes
//! for you.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, print_test_all_statistics, run_assist, run_benchmark, run_play, run_test_all,
        solve_code,
    },
    output::{print_benchmark_result, print_solve_result},
    solver::{Solver, StrategyType},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind feedback scorer and deductive solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: random (default), first
    #[arg(short, long, global = true, default_value = "random")]
    strategy: String,

    /// Seed for reproducible secrets and guess selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play as the codebreaker against a random secret (default)
    Play,

    /// Suggest guesses for a game played elsewhere
    Assist,

    /// Solve a specific secret code, e.g. "red green blue pink"
    Solve {
        /// The secret code as four colour names
        code: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Test the solver on ALL 1296 possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(cli.seed).map_err(|e| anyhow::anyhow!(e)),
        Commands::Assist => {
            let mut solver = Solver::new(StrategyType::from_name(&cli.strategy, cli.seed));
            run_assist(&mut solver).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { code, verbose } => {
            let mut solver = Solver::new(StrategyType::from_name(&cli.strategy, cli.seed));
            let result =
                solve_code(SolveConfig::new(code), &mut solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random secrets...");
            let result = run_benchmark(&cli.strategy, count, cli.seed.unwrap_or(0));
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => {
            let stats = run_test_all(&cli.strategy, limit, cli.seed.unwrap_or(0));
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}
