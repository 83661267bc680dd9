//! Common types for Bulls and Cows: guess classification, scores, errors.

use core::fmt;

/// Classification of a candidate guess, checked before any scoring happens.
///
/// The console loop starts from `Invalid` and keeps prompting until the
/// engine classifies a guess as `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessStatus {
    /// Guess passed every check and may be scored.
    Ok,
    /// Guess length differs from the hidden word length.
    WrongLength,
    /// Guess contains a repeated (case-folded) character.
    NotIsogram,
    /// Guess contains a character outside `a-z`.
    NotLowercase,
    /// Guess is the `?` sentinel asking for a letter reveal.
    Hint,
    /// No classification has been made yet.
    Invalid,
}

/// Bulls and cows scored for a single valid guess.
///
/// A bull is a letter matching the hidden word in identity and position;
/// a cow matches in identity only. `bulls + cows` never exceeds the
/// hidden word length while hidden words are isograms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BullCowCount {
    pub bulls: u32,
    pub cows: u32,
}

/// Current status of a round, derived from the session state.
///
/// The engine only ever records a win; `Lost` is inferred from the try
/// counter exceeding the try budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Errors returned by in-play operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The dictionary holds no isograms of the requested length.
    NoWordsAvailable { length: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoWordsAvailable { length } => {
                write!(f, "no isograms of length {} in the dictionary", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
