//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, keyboard_lines};
use crate::commands::{ScoreResult, TodayInfo};
use crate::core::{GuessRow, KeyboardStatusMap};
use crate::game::{GameState, MAX_GUESSES};
use crate::session::DailySession;
use crate::stats::Stats;
use crate::storage::KeyValueStore;
use colored::Colorize;

/// Print one scored row with its turn number
pub fn print_row(turn: usize, row: &GuessRow) {
    println!(
        "  {} {}  {}",
        format!("{turn}.").bright_black(),
        colored_row(row),
        row.to_emoji()
    );
}

/// Print the on-screen keyboard
pub fn print_keyboard(keyboard: &KeyboardStatusMap) {
    println!();
    for line in keyboard_lines(keyboard) {
        println!("  {line}");
    }
    println!();
}

/// Print cumulative stats with the guess distribution
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Played:          {}", stats.played);
    println!(
        "   Win %:           {}",
        format!("{:.0}", stats.win_percentage()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.streak.to_string().green());
    println!("   Max streak:      {}", stats.max_streak.to_string().yellow());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}

/// Print today's puzzle details
pub fn print_today(info: &TodayInfo, reveal: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle {} for {}",
        format!("#{}", info.puzzle_number).bright_yellow().bold(),
        info.date
    );
    println!("{}", "─".repeat(60).cyan());
    println!("  Rotation:  {} words", info.word_count);
    println!(
        "  Status:    {}",
        if info.solved {
            "finished today".green()
        } else {
            "not played yet".yellow()
        }
    );
    if reveal {
        println!("  Answer:    {}", info.target.bright_white().bold());
    }
}

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\nTarget: {}", result.target.bright_yellow().bold());
    print_row(1, &result.row);
    if result.row.is_solved() {
        println!("{}", "✅ Exact match".green().bold());
    } else {
        println!(
            "   {} correct, {} present",
            result.row.count_correct(),
            result.row.count_present()
        );
    }
}

/// Print the end-of-game banner, share text and stats
pub fn print_game_over<S: KeyValueStore>(session: &DailySession<S>) {
    let engine = session.engine();
    let guesses = engine.guesses_used();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match engine.state() {
        GameState::Won => {
            let praise = match guesses {
                1 => "🏆 Genius!",
                2 => "⭐ Magnificent!",
                3 => "💫 Impressive!",
                4 => "✨ Splendid!",
                5 => "👍 Great!",
                _ => "😅 Phew!",
            };
            println!("  {}", praise.bright_green().bold());
            println!(
                "  Solved in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
        }
        GameState::Lost => {
            println!("  {}", "❌ Out of guesses".red().bold());
            println!(
                "  The word was {}",
                engine.target().text().bright_white().bold()
            );
        }
        GameState::Playing => {
            println!(
                "  {} of {MAX_GUESSES} guesses left",
                engine.remaining_guesses()
            );
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n{}\n", session.share_text());
    print_stats(session.stats());
}
