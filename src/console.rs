//! Interactive console driver: prompts, retry loops and result rendering.
//!
//! All game decisions live in [`Game`]; this module only reads lines,
//! prints feedback and spends tries on the player's behalf for hints.

use std::io::{self, Write};

use log::debug;
use rand::Rng;

use crate::common::{GameStatus, GuessStatus};
use crate::config::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::dictionary::Dictionary;
use crate::game::Game;

const BANNER: &str = r"
          }   {         ___
          (o o)        (o o)
   /-------\ /          \ /-------\
  / | BULL |O            O| COW  | \
 *  |-,--- |              |------|  *
    ^      ^              ^      ^
";

/// Parse a requested word length, accepting only values the dictionary
/// range supports. Malformed numbers and out-of-range values are both
/// `None`; the caller re-prompts.
pub fn parse_word_length(input: &str) -> Option<usize> {
    let length: usize = input.trim().parse().ok()?;
    (MIN_WORD_LENGTH..=MAX_WORD_LENGTH)
        .contains(&length)
        .then_some(length)
}

/// Whether a replay answer means "play again".
pub fn wants_replay(input: &str) -> bool {
    matches!(input.trim().chars().next(), Some('y' | 'Y'))
}

/// Read one trimmed line from stdin. `None` means end of input.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_intro() {
    println!("Welcome to Bulls and Cows, a fun word game.");
    println!("{}", BANNER);
}

fn print_rules(word_length: usize) {
    println!(
        "Great! Can you guess what {} long isogram I am thinking of?",
        word_length
    );
    println!("An isogram is a word without any repeated letters.");
    println!("A bull is a correct letter in the correct position.");
    println!("A cow is a correct letter in the wrong position.");
    println!("If you are stuck, type ? to sacrifice a try for a hint. Good luck!\n");
}

/// Prompt for a word length until the player names one the dictionary can
/// serve, starting a round on the game. `None` means stdin closed.
fn prompt_round<R: Rng>(
    game: &mut Game,
    dictionary: &Dictionary,
    rng: &mut R,
) -> io::Result<Option<()>> {
    loop {
        print!(
            "Please enter the length of the word you would like to use ({}-{}): ",
            MIN_WORD_LENGTH, MAX_WORD_LENGTH
        );
        io::stdout().flush()?;
        let Some(line) = read_line()? else {
            return Ok(None);
        };
        let Some(length) = parse_word_length(&line) else {
            println!(
                "Not a valid word length. It must be between {} and {} inclusive.\n",
                MIN_WORD_LENGTH, MAX_WORD_LENGTH
            );
            continue;
        };
        match game.reset(rng, dictionary, length) {
            Ok(()) => {
                debug!("hidden word is {}", game.hidden_word());
                return Ok(Some(()));
            }
            Err(e) => println!("{}. Please pick another length.\n", e),
        }
    }
}

/// Reveal one random letter of the hidden word at the cost of a try.
/// Refused on the final try, which has to be a guess.
fn give_hint<R: Rng>(game: &mut Game, rng: &mut R) {
    if game.current_try() == game.max_tries() {
        println!("Come on! Your last try has to be a guess.\n");
        return;
    }
    let index = rng.random_range(0..game.hidden_word_length());
    if let Some(letter) = game.letter_at(index) {
        println!("The letter in position {} is: {}\n", index + 1, letter);
    }
    game.increment_try();
}

/// Keep prompting until the player enters a scorable guess. `None` means
/// stdin closed.
fn prompt_valid_guess<R: Rng>(game: &mut Game, rng: &mut R) -> io::Result<Option<String>> {
    let mut status = GuessStatus::Invalid;
    let mut guess = String::new();
    while status != GuessStatus::Ok {
        print!(
            "Try {} of {}. Enter your guess: ",
            game.current_try(),
            game.max_tries()
        );
        io::stdout().flush()?;
        let Some(line) = read_line()? else {
            return Ok(None);
        };
        guess = line;
        status = game.check_guess(&guess);
        match status {
            GuessStatus::Hint => give_hint(game, rng),
            GuessStatus::NotIsogram => {
                println!("Please enter a word without repeating letters.\n");
            }
            GuessStatus::NotLowercase => {
                println!("Please enter all lowercase letters.\n");
            }
            GuessStatus::WrongLength => {
                println!(
                    "Please enter a {} letter word.\n",
                    game.hidden_word_length()
                );
            }
            GuessStatus::Ok | GuessStatus::Invalid => {}
        }
    }
    Ok(Some(guess))
}

/// Play a single round to completion. Returns `false` if stdin closed.
fn play_round<R: Rng>(game: &mut Game, rng: &mut R) -> io::Result<bool> {
    while game.status() == GameStatus::InProgress {
        let Some(guess) = prompt_valid_guess(game, rng)? else {
            return Ok(false);
        };
        let count = game.submit_valid_guess(&guess);
        println!("Bulls = {}. Cows = {}\n", count.bulls, count.cows);
    }
    Ok(true)
}

fn print_summary(game: &Game) {
    if game.is_won() {
        println!("WELL DONE - YOU WIN!");
    } else {
        println!("Better luck next time!");
    }
    println!("The hidden word was {}.", game.hidden_word());
}

/// Run the interactive game loop until the player declines a replay or
/// stdin closes.
pub fn run<R: Rng>(dictionary: &Dictionary, rng: &mut R) -> io::Result<()> {
    let mut game = Game::new();
    loop {
        print_intro();
        if prompt_round(&mut game, dictionary, rng)?.is_none() {
            return Ok(());
        }
        print_rules(game.hidden_word_length());
        if !play_round(&mut game, rng)? {
            return Ok(());
        }
        print_summary(&game);

        print!("Do you want to play again with a new hidden word (y/n)? ");
        io::stdout().flush()?;
        match read_line()? {
            Some(answer) if wants_replay(&answer) => continue,
            _ => return Ok(()),
        }
    }
}
