//! Wordle Daily - CLI
//!
//! Daily word puzzle with TUI and line-based modes.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_daily::{
    commands::{load_stats, run_simple, score_words, today_info},
    output::{print_score_result, print_stats, print_today},
    puzzle::PuzzleSelector,
    session::DailySession,
    stats::StatsStore,
    storage::FileStore,
    wordlists::{DAILY_WORDS, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily five-letter word puzzle in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle date as YYYY-MM-DD (default: today, local time)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// File holding stats and the solved-today flag
    #[arg(short, long, global = true, default_value = "wordle_daily.json")]
    store: PathBuf,

    /// Wordlist: 'daily' (default, built in) or path to file
    #[arg(short = 'w', long, global = true, default_value = "daily")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type one word per line)
    Simple,

    /// Show today's puzzle number and whether it is finished
    Today {
        /// Also print the answer
        #[arg(long)]
        reveal: bool,
    },

    /// Show cumulative statistics
    Stats {
        /// Wipe statistics and the solved-today flag first
        #[arg(long)]
        reset: bool,
    },

    /// Score one guess against a chosen target
    Score {
        /// The target word
        target: String,

        /// The guess to score
        guess: String,
    },
}

/// Build the selector for the -w flag
fn load_selector(wordlist: &str) -> Result<PuzzleSelector> {
    let selector = match wordlist {
        "daily" => PuzzleSelector::new(DAILY_WORDS)?,
        path => {
            let words =
                load_from_file(path).with_context(|| format!("reading word list {path}"))?;
            PuzzleSelector::new(words).with_context(|| format!("word list {path}"))?
        }
    };
    Ok(selector)
}

fn open_store(path: &Path) -> Result<FileStore> {
    FileStore::open(path).with_context(|| format!("opening store {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, &cli.store, date),
        Commands::Simple => run_simple_command(&cli.wordlist, &cli.store, date),
        Commands::Today { reveal } => run_today_command(&cli.wordlist, &cli.store, date, reveal),
        Commands::Stats { reset } => run_stats_command(&cli.store, reset),
        Commands::Score { target, guess } => {
            let result = score_words(&target, &guess)?;
            print_score_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(wordlist: &str, store: &Path, date: NaiveDate) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let selector = load_selector(wordlist)?;
    let session = DailySession::new(open_store(store)?, &selector, date)?;

    let session = run_tui(App::new(session))?;
    if session.state().is_terminal() {
        println!("{}", session.share_text());
    }
    Ok(())
}

fn run_simple_command(wordlist: &str, store: &Path, date: NaiveDate) -> Result<()> {
    let selector = load_selector(wordlist)?;
    let mut session = DailySession::new(open_store(store)?, &selector, date)?;
    run_simple(&mut session)?;
    Ok(())
}

fn run_today_command(wordlist: &str, store: &Path, date: NaiveDate, reveal: bool) -> Result<()> {
    let selector = load_selector(wordlist)?;
    let stats_store = StatsStore::new(open_store(store)?);
    let info = today_info(&selector, &stats_store, date)?;
    print_today(&info, reveal);
    Ok(())
}

fn run_stats_command(store: &Path, reset: bool) -> Result<()> {
    let mut stats_store = StatsStore::new(open_store(store)?);
    let stats = load_stats(&mut stats_store, reset)?;
    print_stats(&stats);
    Ok(())
}
