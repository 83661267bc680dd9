#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;
mod config;
mod dictionary;
mod game;
mod isogram;

#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
pub mod curator;
#[cfg(feature = "std")]
mod logging;

pub use common::{BullCowCount, GameError, GameStatus, GuessStatus};
pub use config::{HINT_SENTINEL, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
#[cfg(feature = "std")]
pub use curator::{curate, generate, write_dictionary, CurateReport};
#[cfg(feature = "std")]
pub use dictionary::LoadError;
pub use dictionary::{format_summary, parse_summary, Dictionary};
pub use game::{max_tries_for, Game};
pub use isogram::{has_repeated_letter, is_isogram};
#[cfg(feature = "std")]
pub use logging::init_logging;
