mod console;

use crate::console::Console;
use clap::Parser;
use clap::Subcommand;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use word_guess::*;

/// A word-guessing game for the terminal: play it yourself, watch a solver
/// play, gather solver statistics, or search the dictionary by clues.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains the dictionary, with one word on each
    /// line.
    words_file: Option<PathBuf>,

    /// Skip blank and comment lines in the dictionary, and require all words
    /// to have the same length.
    #[arg(long)]
    lenient: bool,

    /// The character that marks a comment line when loading leniently.
    #[arg(long, default_value_t = '#')]
    comment_char: char,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a round yourself (the default).
    Play(PlayArgs),
    /// Watch the solver play a single round.
    Solve {
        /// Use this dictionary word as the target instead of a random one.
        #[arg(long)]
        target: Option<String>,
        /// Seed for the target draw and the solver's guesses.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run many solver rounds and print guess-count statistics.
    Stats {
        /// The number of rounds to play.
        #[arg(short = 'n', long = "games", default_value_t = 100)]
        games: u32,
        /// Base seed for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the dictionary words consistent with the given clues.
    Find {
        /// Clues as GUESS=HINT pairs, e.g. 'GHOST=???_?'.
        #[arg(required = true, value_parser = parse_clue_arg)]
        clues: Vec<Clue>,
    },
}

#[derive(clap::Args, Debug)]
struct PlayArgs {
    /// Accept guesses that are not in the dictionary.
    #[arg(long)]
    allow_any_guess: bool,

    /// Do not list the letters known to be absent after each miss.
    #[arg(long)]
    hide_absent: bool,

    /// The text shown when asking for a guess.
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Seed for the target draw.
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for PlayArgs {
    fn default() -> PlayArgs {
        PlayArgs {
            allow_any_guess: false,
            hide_absent: false,
            prompt: String::from("> "),
            seed: None,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(error) = run(args) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), GameError> {
    let mode = if args.lenient {
        LoadMode::Lenient {
            comment_char: args.comment_char,
        }
    } else {
        LoadMode::Strict
    };
    let words = load_dictionary(args.words_file.as_deref(), mode)?;
    debug!(
        "loaded {} words of length {}",
        words.len(),
        words.word_length()
    );

    match args.command.unwrap_or_default() {
        Command::Play(play_args) => play_rounds(&words, &play_args),
        Command::Solve { target, seed } => solve_round(&words, target, seed),
        Command::Stats { games, seed } => print_trial_stats(&words, games, seed),
        Command::Find { clues } => find_words(&words, &clues),
    }
}

impl Default for Command {
    fn default() -> Command {
        Command::Play(PlayArgs::default())
    }
}

/// Runs interactive rounds until the player declines to continue.
fn play_rounds(words: &WordList, args: &PlayArgs) -> Result<(), GameError> {
    let mut console = Console::from_stdio();
    let mut rng = new_rng(args.seed);
    loop {
        let target = choose_target(words, &mut rng)?;
        play_one_round(&mut console, words, &target, args)?;
        if !console.prompt_yes_no("Play again?", Some(true))? {
            return Ok(());
        }
    }
}

fn play_one_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    words: &WordList,
    target: &str,
    args: &PlayArgs,
) -> Result<(), GameError> {
    let length = target.chars().count();
    console.write_line(format!(
        "Guess the word: '{}' ({} letters).",
        "*".repeat(length),
        length
    ))?;
    console.write_line("(Input is converted to uppercase.)")?;
    console.write_line(
        "Hints: ! = letter in the right spot, ? = letter in the wrong spot, \
         _ = letter not part of the word.",
    )?;

    let mut tracker = LetterTracker::new();
    let mut num_guesses = 0;
    loop {
        num_guesses += 1;
        let guess = loop {
            let input = console.prompt_word(&args.prompt, length)?;
            if !args.allow_any_guess && !words.contains(&input) {
                console.write_line("Word is not part of the dictionary!")?;
                continue;
            }
            break input;
        };
        tracker.record(&guess, target);
        let hint = score_guess(&guess, target)?;
        if hint.is_full_match() {
            console.write_line(&hint)?;
            console.write_line(win_message(num_guesses))?;
            return Ok(());
        }
        if args.hide_absent {
            console.write_line(&hint)?;
        } else {
            let absent: Vec<String> = tracker.absent().map(String::from).collect();
            console.write_line(format!("{}   out: {}", hint, absent.join(", ")))?;
        }
    }
}

fn win_message(num_guesses: u32) -> String {
    match num_guesses {
        1 => String::from("Woah, first try! Way too much luck!"),
        2 => String::from("Very nice! Only two guesses needed."),
        3..=6 => format!("Nice! You got it after {num_guesses} tries."),
        _ => format!("You got it! It took you {num_guesses} tries."),
    }
}

/// Plays one automated round and prints the solver's path to the target.
fn solve_round(
    words: &WordList,
    target: Option<String>,
    seed: Option<u64>,
) -> Result<(), GameError> {
    let mut rng = new_rng(seed);
    let target: Arc<str> = match target {
        Some(word) => {
            let word = word.to_uppercase();
            if !words.contains(&word) {
                eprintln!("Error: the word '{word}' is not in the dictionary.");
                process::exit(1);
            }
            Arc::from(word)
        }
        None => choose_target(words, &mut rng)?,
    };
    debug!("solving for '{target}'");

    let summary = play_game_with_guesser(&target, RandomGuesser::with_rng(words, rng))?;
    for clue in &summary.transcript {
        println!("{}  {}", clue.guess(), clue.hint());
    }
    println!("Solved it! It took me {} guesses.", summary.num_guesses());
    Ok(())
}

fn print_trial_stats(words: &WordList, games: u32, seed: Option<u64>) -> Result<(), GameError> {
    debug!("running {games} solver rounds");
    let stats = run_auto_trials(words, games, seed)?;

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    for (num_guesses, num_games) in &stats.games_per_guess_count {
        println!("|{num_guesses}|{num_games}|");
    }
    println!();
    println!("total number of games: {}", stats.num_trials);
    println!(
        "arithmetic mean of guesses: {:.2} +/- {:.2}",
        stats.mean_guesses, stats.std_dev
    );
    println!(
        "best / worst number of guesses: {} / {}",
        stats.best, stats.worst
    );
    Ok(())
}

fn find_words(words: &WordList, clues: &[Clue]) -> Result<(), GameError> {
    let matches = find_matching_words(words, clues);
    match matches.as_slice() {
        [] => println!("No words found matching the given criteria."),
        [only] => println!("Only one word matches the given criteria: {only}"),
        all => {
            println!("Following words match the given criteria:");
            let list: Vec<&str> = all.iter().map(|word| word.as_ref()).collect();
            println!("{}", list.join(", "));
        }
    }
    Ok(())
}

fn parse_clue_arg(arg: &str) -> Result<Clue, String> {
    let (guess, hint) = arg
        .split_once('=')
        .ok_or_else(|| String::from("clues must look like GUESS=HINT"))?;
    let hint = hint.parse::<Hint>().map_err(|error| error.to_string())?;
    Clue::new(guess.to_uppercase(), hint).map_err(|error| error.to_string())
}

fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
