//! Core game session: hidden word, try counter, guess checking, scoring.

use alloc::string::String;

use rand::Rng;

use crate::common::{BullCowCount, GameError, GameStatus, GuessStatus};
use crate::config::HINT_SENTINEL;
use crate::dictionary::Dictionary;
use crate::isogram::has_repeated_letter;

/// Try budget for a hidden word of `word_length` letters:
/// `ceil(4 * (ln(len) + (len - 4)))`. Longer words get disproportionately
/// more tries. Uses `libm` so the budget is available without `std`.
pub fn max_tries_for(word_length: usize) -> u32 {
    let len = word_length as f64;
    libm::ceil(4.0 * (libm::log(len) + (len - 4.0))) as u32
}

/// One game session. Owns the current round's hidden word, try counter and
/// win flag; the caller owns the `Game` value itself and the dictionary it
/// draws from.
///
/// A round runs from [`Game::reset`] until either a winning guess or the
/// caller observing that `current_try` has passed `max_tries`. The engine
/// records wins only; it never transitions to lost on its own.
pub struct Game {
    hidden_word: String,
    current_try: u32,
    max_tries: u32,
    game_won: bool,
}

impl Game {
    /// Create a session with no round started. Call [`Game::reset`] before
    /// submitting guesses.
    pub fn new() -> Self {
        Self {
            hidden_word: String::new(),
            current_try: 0,
            max_tries: 0,
            game_won: false,
        }
    }

    /// Start a new round: draw a hidden word of `word_length` from the
    /// dictionary, reset the try counter to 1 and clear the win flag.
    pub fn reset<R: Rng>(
        &mut self,
        rng: &mut R,
        dictionary: &Dictionary,
        word_length: usize,
    ) -> Result<(), GameError> {
        let word = dictionary.word_of_length(rng, word_length)?;
        self.hidden_word = String::from(word);
        self.current_try = 1;
        self.max_tries = max_tries_for(word_length);
        self.game_won = false;
        Ok(())
    }

    /// Try the player is currently on, starting at 1 for a fresh round.
    pub fn current_try(&self) -> u32 {
        self.current_try
    }

    /// Spend a try without scoring a guess. Used by the driver when the
    /// player consumes a hint.
    pub fn increment_try(&mut self) {
        self.current_try += 1;
    }

    /// Try budget for the current round.
    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// The word being guessed. Drivers reveal it when the round ends.
    pub fn hidden_word(&self) -> &str {
        &self.hidden_word
    }

    pub fn hidden_word_length(&self) -> usize {
        self.hidden_word.len()
    }

    /// Letter of the hidden word at `index`, for hint reveals.
    pub fn letter_at(&self, index: usize) -> Option<char> {
        self.hidden_word.as_bytes().get(index).map(|&b| b as char)
    }

    /// Whether the current round has been won.
    pub fn is_won(&self) -> bool {
        self.game_won
    }

    /// Derived round status. `Lost` means the try counter has passed the
    /// budget without a win.
    pub fn status(&self) -> GameStatus {
        if self.game_won {
            GameStatus::Won
        } else if self.current_try > self.max_tries {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Classify a candidate guess without scoring it.
    ///
    /// Checks run in strict priority order: the hint sentinel wins over
    /// everything, then the repeat check, then lowercase, then length. A
    /// too-long guess with a repeated letter therefore reports
    /// `NotIsogram`, not `WrongLength`.
    pub fn check_guess(&self, guess: &str) -> GuessStatus {
        if guess == HINT_SENTINEL {
            GuessStatus::Hint
        } else if has_repeated_letter(guess) {
            GuessStatus::NotIsogram
        } else if !guess.chars().all(|ch| ch.is_ascii_lowercase()) {
            GuessStatus::NotLowercase
        } else if guess.len() != self.hidden_word.len() {
            GuessStatus::WrongLength
        } else {
            GuessStatus::Ok
        }
    }

    /// Score a guess that already classified as [`GuessStatus::Ok`].
    ///
    /// Spends a try, then compares every hidden/guess position pair:
    /// matching letters count a bull on the same position, a cow
    /// otherwise. The pairwise comparison would double-count a letter
    /// repeated in the hidden word; hidden words are always isograms, so
    /// that case cannot occur.
    pub fn submit_valid_guess(&mut self, guess: &str) -> BullCowCount {
        self.current_try += 1;

        let hidden = self.hidden_word.as_bytes();
        let guess = guess.as_bytes();
        let mut count = BullCowCount::default();
        for (hidden_pos, hidden_ch) in hidden.iter().enumerate() {
            for (guess_pos, guess_ch) in guess.iter().enumerate() {
                if hidden_ch == guess_ch {
                    if hidden_pos == guess_pos {
                        count.bulls += 1;
                    } else {
                        count.cows += 1;
                    }
                }
            }
        }

        if count.bulls as usize == hidden.len() {
            self.game_won = true;
        }
        count
    }
}
