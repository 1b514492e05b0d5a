//! Wordle - CLI
//!
//! Word-guessing game with TUI and text modes, 4 to 8 letter words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{SimulateConfig, check_guess, run_simple, run_simulation},
    game::{DEFAULT_WORD_LENGTH, GameConfig, Session},
    output::{print_check_result, print_simulation_result},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in six attempts (4 to 8 letters)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length, 4 to 8
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Word list file, one word per line (default: bundled list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Accept any guess of the right length, not only words from the list
    #[arg(long, global = true)]
    no_dictionary: bool,

    /// Seed for reproducible secret selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl Cli {
    /// The chosen subcommand, defaulting to Play mode
    fn take_command(&mut self) -> Commands {
        self.command.take().unwrap_or(Commands::Play)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode without TUI
    Simple,

    /// Show the feedback for one guess against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guess to evaluate
        guess: String,
    },

    /// Play many games with a random guesser and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();
    let command = cli.take_command();

    match command {
        Commands::Check { secret, guess } => {
            let result = check_guess(&secret, &guess)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Simulate { count } => {
            let config = game_config(cli.length, cli.no_dictionary)?;
            let source = WordSource::load_or_fallback(cli.wordlist.as_deref());
            run_simulate_command(&source, &config, count, cli.seed)
        }
        Commands::Play => {
            let session = new_session(&cli)?;
            run_play_command(session)
        }
        Commands::Simple => {
            let mut session = new_session(&cli)?;
            run_simple(&mut session, io::stdin().lock(), io::stdout().lock())
        }
    }
}

fn game_config(length: usize, no_dictionary: bool) -> Result<GameConfig> {
    let config = GameConfig::new(length).context("Invalid --length")?;
    Ok(config.with_dictionary(!no_dictionary))
}

fn new_session(cli: &Cli) -> Result<Session> {
    let config = game_config(cli.length, cli.no_dictionary)?;
    let source = WordSource::load_or_fallback(cli.wordlist.as_deref());
    info!("Word pool ready: {} words", source.len());
    Ok(Session::new(source, config, cli.seed))
}

fn run_simulate_command(
    source: &WordSource,
    config: &GameConfig,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    println!(
        "Simulating {count} games with {}-letter words...",
        config.word_length
    );

    let config = SimulateConfig {
        games: count,
        word_length: config.word_length,
        max_attempts: config.max_attempts,
        seed: seed.unwrap_or_else(rand::random),
        show_progress: true,
    };
    let result = run_simulation(source, &config)?;
    print_simulation_result(&result);
    Ok(())
}

fn run_play_command(session: Session) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn no_subcommand_defaults_to_play() {
        let mut cli = parse(&["wordle_game"]);
        assert!(matches!(cli.take_command(), Commands::Play));
        assert_eq!(cli.length, DEFAULT_WORD_LENGTH);
        assert!(!cli.no_dictionary);
        assert_eq!(cli.seed, None);

        // Global options stay readable after the command is taken
        let session = new_session(&cli).unwrap();
        assert_eq!(session.word_length(), DEFAULT_WORD_LENGTH);
    }

    #[test]
    fn check_takes_secret_and_guess() {
        let mut cli = parse(&["wordle_game", "check", "casa", "sapo"]);
        let Commands::Check { secret, guess } = cli.take_command() else {
            panic!("expected check");
        };
        assert_eq!((secret.as_str(), guess.as_str()), ("casa", "sapo"));
    }

    #[test]
    fn global_options_after_subcommand() {
        let mut cli = parse(&[
            "wordle_game",
            "simple",
            "-l",
            "7",
            "--no-dictionary",
            "--seed",
            "42",
            "-w",
            "words.txt",
        ]);
        assert!(matches!(cli.take_command(), Commands::Simple));
        assert_eq!(cli.length, 7);
        assert!(cli.no_dictionary);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.wordlist, Some(PathBuf::from("words.txt")));

        let config = game_config(cli.length, cli.no_dictionary).unwrap();
        assert!(!config.validate_dictionary);
    }

    #[test]
    fn simulate_count_defaults() {
        let mut cli = parse(&["wordle_game", "simulate"]);
        assert!(matches!(cli.take_command(), Commands::Simulate { count: 1000 }));

        let mut cli = parse(&["wordle_game", "simulate", "-n", "25"]);
        assert!(matches!(cli.take_command(), Commands::Simulate { count: 25 }));
    }

    #[test]
    fn unsupported_length_is_rejected() {
        let cli = parse(&["wordle_game", "--length", "9"]);
        assert!(new_session(&cli).is_err());
        assert!(Cli::try_parse_from(["wordle_game", "check", "casa"]).is_err());
    }
}
