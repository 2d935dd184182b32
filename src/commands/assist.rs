//! Interactive assistant mode
//!
//! Suggests guesses for a game played elsewhere; the user types back the
//! feedback they received after each turn.

use crate::core::{Code, Feedback};
use crate::output::formatters::coloured_code;
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive assistant mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// solver cannot provide a valid guess.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist<S: Strategy>(solver: &mut Solver<S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Mastermind Solver - Assistant Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses; after each one, enter the feedback you got:\n");
    println!("  - Two digits: perfect then exists, e.g. '2 1' or '21'");
    println!("  - Or pegs: '●'/'b' per perfect, '○'/'w' per exists, e.g. '●●○' or 'bbw'");
    println!("  - Or type 'win' if the guess was the code!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last turn\n");

    solver.initialize();
    let mut history: Vec<(Code, Feedback)> = Vec::new();
    let mut turn = 1;

    loop {
        if solver.candidate_count() == 0 {
            println!("\nNo candidates remain! Some feedback must have been incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.as_str() {
                "undo" => {
                    if history.pop().is_some() {
                        turn -= 1;
                        replay(solver, &history);
                        println!("Undone! Back to turn {turn}\n");
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                "new" => {
                    history.clear();
                    turn = 1;
                    solver.initialize();
                    println!("\nNew game started!\n");
                }
                _ => {}
            }
            continue;
        }

        let candidates_count = solver.candidate_count();
        let guess = solver.next_guess().map_err(|e| e.to_string())?;

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {candidates_count} candidates remaining");
        println!("────────────────────────────────────────────────────────────");

        println!("\nSuggested guess: {}", coloured_code(&guess));

        // Show the survivors once the set is small
        if candidates_count <= 10 {
            println!("\nRemaining candidates:");
            for candidate in solver.candidates().iter().take(10) {
                println!("  • {}", coloured_code(candidate));
            }
        }
        println!();

        // Get feedback
        let feedback = loop {
            let input = get_user_input("Enter feedback (digits/pegs, 'win', or command)")?
                .to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    turn = 0; // Will be incremented to 1
                    solver.initialize();
                    println!("\nNew game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        turn -= 2; // Will be incremented back
                        replay(solver, &history);
                        println!("Undone!\n");
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" | "solved" => {
                    break Some(Feedback::PERFECT);
                }
                _ => {
                    if let Some(feedback) = Feedback::from_str(&input) {
                        break Some(feedback);
                    }
                    println!("{} Use two digits, pegs, or 'win'\n", "Invalid feedback!".red());
                }
            }
        };

        if let Some(feedback) = feedback {
            history.push((guess, feedback));
            solver.observe(&guess, feedback).map_err(|e| e.to_string())?;

            if feedback.is_perfect() {
                println!(
                    "\n{} Code {} found in {turn} {}!\n",
                    "Solved!".bright_green().bold(),
                    coloured_code(&guess),
                    if turn == 1 { "turn" } else { "turns" }
                );

                println!("Guess history:");
                for (i, (code, fb)) in history.iter().enumerate() {
                    println!("  {}. {} {}", i + 1, coloured_code(code), fb);
                }
                println!();

                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        history.clear();
                        turn = 0;
                        solver.initialize();
                        println!("\nNew game started!\n");
                    }
                    _ => {
                        println!("\nThanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }

        turn += 1;
    }
}

/// Rebuild the candidate set from a (possibly truncated) history
///
/// The set only ever shrinks, so undo means replaying the surviving turns
/// from a fresh initialization.
fn replay<S: Strategy>(solver: &mut Solver<S>, history: &[(Code, Feedback)]) {
    solver.initialize();
    for (guess, feedback) in history {
        // Cannot fail: the solver was just initialized
        let _ = solver.observe(guess, *feedback);
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
