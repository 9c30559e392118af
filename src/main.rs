use clap::{Parser, ValueEnum};
use gallows::config::{ConfigStore, FileConfigStore};
use gallows::difficulty::{Difficulty, DifficultyController, StatsSnapshot};
use gallows::round::{GuessOutcome, Round, RoundStatus, HANGMAN_PARTS};
use gallows::session::Session;
use gallows::words::WordBank;
use std::error::Error;
use std::io::{self, BufRead, Write};

/// terminal hangman with adaptive difficulty
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal hangman that watches how you play: win often with few guesses and the word pool steps up a tier, struggle and it steps back down. A letter-frequency guesser can play rounds for you or whisper hints."
)]
pub struct Cli {
    /// let the frequency guesser play every round instead of reading guesses from stdin
    #[clap(short = 'a', long)]
    auto: bool,

    /// number of rounds to play before exiting (auto mode defaults to 10)
    #[clap(short = 'r', long)]
    rounds: Option<usize>,

    /// starting difficulty tier; the controller still adapts from there
    #[clap(short = 't', long, value_enum)]
    tier: Option<StartTier>,

    /// word bank to draw words from
    #[clap(short = 'b', long)]
    bank: Option<String>,

    /// print the final stats snapshot as json
    #[clap(long)]
    json: bool,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum StartTier {
    Easy,
    Medium,
    Hard,
}

impl StartTier {
    fn as_difficulty(&self) -> Difficulty {
        match self {
            StartTier::Easy => Difficulty::Easy,
            StartTier::Medium => Difficulty::Medium,
            StartTier::Hard => Difficulty::Hard,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = FileConfigStore::new().load();

    let bank_name = cli.bank.clone().unwrap_or_else(|| config.bank.clone());
    let bank = WordBank::new(bank_name);

    let controller = match cli.tier {
        Some(tier) => DifficultyController::with_difficulty(tier.as_difficulty()),
        None => DifficultyController::new(),
    };
    let mut session = Session::with_controller(controller, bank);

    let rounds = cli.rounds.or(config.rounds);
    if cli.auto || config.auto {
        run_auto(&mut session, rounds.unwrap_or(10));
    } else {
        run_interactive(&mut session, rounds)?;
    }

    print_stats(&session.controller.stats(), cli.json)?;
    Ok(())
}

fn run_auto(session: &mut Session, rounds: usize) {
    for n in 1..=rounds {
        let tier = session.controller.current_difficulty();
        session.start_round();

        let mut played = String::new();
        while let Some(letter) = session.auto_guess() {
            played.push(letter);
        }

        if let Some(round) = session.round.as_ref() {
            let verdict = match round.status {
                RoundStatus::Won => "won",
                _ => "lost",
            };
            println!(
                "round {n} [{tier}] {verdict} {} in {} guesses ({played})",
                round.word,
                round.guess_count()
            );
        }
    }
}

fn run_interactive(
    session: &mut Session,
    rounds: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut completed = 0usize;

    'rounds: loop {
        let tier = session.controller.current_difficulty();
        session.start_round();

        if let Some(round) = session.round.as_ref() {
            println!();
            println!(
                "new round [{tier}]: {} letters, {HANGMAN_PARTS} misses allowed",
                round.word.chars().count()
            );
        }

        loop {
            match session.round.as_ref() {
                Some(round) if !round.is_over() => print_round_state(round),
                _ => break,
            }

            print!("guess a letter (? hint, q quit): ");
            io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break 'rounds,
            };
            let input = line.trim();

            if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
                break 'rounds;
            }
            if input == "?" {
                match session.suggest() {
                    Some(hint) => println!("hint: try {hint}"),
                    None => println!("the guesser is out of letters"),
                }
                continue;
            }

            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => {
                    let letter = c.to_ascii_uppercase();
                    match session.guess(letter) {
                        Some(GuessOutcome::Hit) => println!("hit!"),
                        Some(GuessOutcome::Miss) => println!("miss"),
                        Some(GuessOutcome::Repeat) => println!("already tried {letter}"),
                        None => break 'rounds,
                    }
                }
                _ => println!("enter a single letter"),
            }
        }

        if let Some(round) = session.round.as_ref() {
            match round.status {
                RoundStatus::Won => println!(
                    "you won! {} in {} guesses",
                    round.word,
                    round.guess_count()
                ),
                RoundStatus::Lost => println!("out of misses, the word was {}", round.word),
                RoundStatus::Playing => {}
            }
        }

        completed += 1;
        if let Some(limit) = rounds {
            if completed >= limit {
                break;
            }
        }
    }

    Ok(())
}

fn print_round_state(round: &Round) {
    let tried: String = round.guessed.iter().collect();
    println!(
        "  {}   tried [{}] misses left {}",
        round.pattern(),
        tried,
        round.misses_remaining()
    );
}

fn print_stats(snapshot: &StatsSnapshot, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!();
    println!("games played: {}", snapshot.games_played);
    println!("wins: {} ({:.1}%)", snapshot.total_wins, snapshot.win_rate);
    println!("average guesses: {:.1}", snapshot.average_guesses);
    println!("next difficulty: {}", snapshot.difficulty);
    Ok(())
}
