//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a whole word per line.

use crate::game::{GameState, MAX_GUESSES};
use crate::output::{print_game_over, print_keyboard, print_row};
use crate::session::DailySession;
use crate::storage::KeyValueStore;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: KeyValueStore>(session: &mut DailySession<S>) -> io::Result<()> {
    let stdin = io::stdin();
    play_lines(session, &mut stdin.lock())
}

/// Drive `session` from `input`, one command or guess per line
///
/// Stops at end of input, on `quit`, or when the player declines another
/// practice round.
///
/// # Errors
///
/// Returns an error if reading `input` or flushing stdout fails.
pub fn play_lines<S: KeyValueStore, R: BufRead>(
    session: &mut DailySession<S>,
    input: &mut R,
) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Daily - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Puzzle #{} for {}. Guess the five-letter word in {MAX_GUESSES} tries.",
        session.puzzle_number(),
        session.date()
    );
    if !session.is_official() {
        println!(
            "{}",
            "You already finished today's puzzle; this round is practice.".yellow()
        );
    }
    println!("Commands: 'quit' to exit, 'keys' to show the keyboard\n");

    loop {
        if session.state().is_terminal() {
            print_game_over(session);

            let Some(answer) = read_line("Practice again? (yes/no)", input)? else {
                return Ok(());
            };
            match answer.to_lowercase().as_str() {
                "yes" | "y" if session.practice() => {
                    println!("\n🔄 Practice round started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let turn = session.engine().guesses_used() + 1;
        let Some(line) = read_line(&format!("Guess {turn}/{MAX_GUESSES}"), input)? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "keys" | "k" => print_keyboard(session.keyboard()),
            _ => match session.submit(&line) {
                Ok(row) => {
                    print_row(turn, &row);
                    if session.state() == GameState::Playing {
                        print_keyboard(session.keyboard());
                    }
                }
                Err(err) => println!("❌ {err}\n"),
            },
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
