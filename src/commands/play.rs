//! Playable game mode
//!
//! The computer is the codemaker; the human breaks the code at the prompt.
//! Input is legalised here, before anything reaches the scorer, and illegal
//! guesses re-prompt without costing a turn.

use crate::core::{Code, Colour, Feedback};
use crate::output::formatters::{coloured_code, coloured_name};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Turns the codebreaker gets before the game is lost
const TURN_LIMIT: usize = 12;

/// Run the playable game mode
///
/// A seed, when given, makes the secret reproducible.
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(seed: Option<u64>) -> Result<(), String> {
    print_rules();

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let secret = Code::random(&mut rng);

    for turn in 1..=TURN_LIMIT {
        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}/{TURN_LIMIT}");

        // Re-prompt until the guess is legal; the scorer only sees valid codes
        let guess = loop {
            let input = get_user_input("Your guess")?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!(
                        "\nThe code was: {}. Thanks for playing!\n",
                        coloured_code(&secret)
                    );
                    return Ok(());
                }
                _ => match Code::parse(&input) {
                    Ok(guess) => break guess,
                    Err(e) => println!("{} {e}\n", "Invalid guess:".red()),
                },
            }
        };

        let feedback = Feedback::score(&secret, &guess);
        println!(
            "  {}  {}",
            coloured_code(&guess),
            feedback.to_string().bold()
        );

        if feedback.is_perfect() {
            println!(
                "\n{} You cracked {} in {turn} {}!\n",
                "Solved!".bright_green().bold(),
                coloured_code(&secret),
                if turn == 1 { "turn" } else { "turns" }
            );
            return Ok(());
        }
    }

    println!(
        "\n{} The code was: {}\n",
        "Out of turns.".red().bold(),
        coloured_code(&secret)
    );
    Ok(())
}

fn print_rules() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Mastermind - Codebreaker Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I've picked a secret code of four colours. Possible colours:");
    print!(" ");
    for colour in Colour::PALETTE {
        print!(" {}", coloured_name(colour));
    }
    println!("\n");
    println!("Type your guess as four colour names separated by spaces,");
    println!("e.g. 'red green blue pink'. Duplicates are allowed.\n");
    println!("After each guess you get feedback pegs:");
    println!("  ● right colour in the right position");
    println!("  ○ right colour in the wrong position");
    println!("  · no match\n");
    println!("You have {TURN_LIMIT} turns. Type 'quit' to give up.\n");
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
