/// Shortest word length a player may request. The dictionary curator uses
/// the same bound when filtering the raw word list.
pub const MIN_WORD_LENGTH: usize = 5;

/// Longest word length a player may request.
pub const MAX_WORD_LENGTH: usize = 15;

/// Guess input that asks for a letter reveal instead of being scored.
pub const HINT_SENTINEL: &str = "?";
