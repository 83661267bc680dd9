use bullcow::{max_tries_for, Dictionary, Game, GameError, GameStatus, GuessStatus};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Single-entry dictionary pins the hidden word for deterministic tests.
fn fixed_game(word: &str) -> Game {
    let dict = Dictionary::from_words(vec![word.to_string()]);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = Game::new();
    game.reset(&mut rng, &dict, word.len()).unwrap();
    game
}

#[test]
fn test_try_budget_formula() {
    // ceil(4 * (ln(len) + (len - 4))), natural log
    assert_eq!(max_tries_for(5), 11);
    assert_eq!(max_tries_for(6), 16);
    assert_eq!(max_tries_for(7), 20);
    assert_eq!(max_tries_for(15), 55);
}

#[test]
fn test_reset_starts_round() {
    let game = fixed_game("abode");
    assert_eq!(game.current_try(), 1);
    assert_eq!(game.max_tries(), max_tries_for(5));
    assert_eq!(game.hidden_word(), "abode");
    assert_eq!(game.hidden_word_length(), 5);
    assert!(!game.is_won());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_reset_unavailable_length() {
    let dict = Dictionary::from_words(vec!["abode".to_string()]);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = Game::new();
    let err = game.reset(&mut rng, &dict, 9).unwrap_err();
    assert_eq!(err, GameError::NoWordsAvailable { length: 9 });
}

#[test]
fn test_reset_twice_keeps_requested_length() {
    let words = ["abode", "chime", "crown", "fight", "glare"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let dict = Dictionary::from_words(words);
    let mut rng = SmallRng::seed_from_u64(99);
    let mut game = Game::new();
    for _ in 0..20 {
        game.reset(&mut rng, &dict, 5).unwrap();
        assert_eq!(game.hidden_word_length(), 5);
    }
}

#[test]
fn test_guess_checks_run_in_priority_order() {
    let game = fixed_game("abode");

    // the hint sentinel wins over every other failure it would trigger
    assert_eq!(game.check_guess("?"), GuessStatus::Hint);
    // repeated letters beat the length check, even on a too-long guess
    assert_eq!(game.check_guess("aabbccdd"), GuessStatus::NotIsogram);
    // a repeated non-letter is still a repeat
    assert_eq!(game.check_guess("??"), GuessStatus::NotIsogram);
    // case-folded repeat reports NotIsogram before NotLowercase
    assert_eq!(game.check_guess("Aah"), GuessStatus::NotIsogram);
    // uppercase without repeats falls through to the lowercase check
    assert_eq!(game.check_guess("Crown"), GuessStatus::NotLowercase);
    assert_eq!(game.check_guess("abcd!"), GuessStatus::NotLowercase);
    // lowercase isogram of the wrong length
    assert_eq!(game.check_guess("abcdef"), GuessStatus::WrongLength);
    // and a scorable guess
    assert_eq!(game.check_guess("crown"), GuessStatus::Ok);
}

#[test]
fn test_perfect_guess_wins() {
    let mut game = fixed_game("abode");
    let count = game.submit_valid_guess("abode");
    assert_eq!(count.bulls, 5);
    assert_eq!(count.cows, 0);
    assert!(game.is_won());
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.current_try(), 2);
}

#[test]
fn test_derangement_scores_all_cows() {
    // rotating an isogram left by one leaves no letter in place
    let mut game = fixed_game("abode");
    let count = game.submit_valid_guess("bodea");
    assert_eq!(count.bulls, 0);
    assert_eq!(count.cows, 5);
    assert!(!game.is_won());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_disjoint_guess_scores_nothing() {
    let mut game = fixed_game("abode");
    let count = game.submit_valid_guess("jumpy");
    assert_eq!(count.bulls, 0);
    assert_eq!(count.cows, 0);
}

#[test]
fn test_partial_overlap_scoring() {
    let mut game = fixed_game("abode");
    // shares a (bull, position 0) and d/e (cows)
    let count = game.submit_valid_guess("acred");
    assert_eq!(count.bulls, 1);
    assert_eq!(count.cows, 2);
}

#[test]
fn test_each_submission_spends_a_try() {
    let mut game = fixed_game("abode");
    for try_before in 1..=3 {
        assert_eq!(game.current_try(), try_before);
        game.submit_valid_guess("crown");
    }
    assert_eq!(game.current_try(), 4);
}

#[test]
fn test_hint_support_surface() {
    let mut game = fixed_game("abode");
    assert_eq!(game.letter_at(0), Some('a'));
    assert_eq!(game.letter_at(4), Some('e'));
    assert_eq!(game.letter_at(5), None);

    // the driver spends the try itself when a hint is consumed
    game.increment_try();
    assert_eq!(game.current_try(), 2);
}

#[test]
fn test_round_is_lost_when_budget_runs_out() {
    let mut game = fixed_game("abode");
    let budget = game.max_tries();
    for _ in 0..budget {
        assert_eq!(game.status(), GameStatus::InProgress);
        game.submit_valid_guess("crown");
    }
    assert_eq!(game.current_try(), budget + 1);
    assert_eq!(game.status(), GameStatus::Lost);
    assert!(!game.is_won());
}

#[test]
fn test_winning_on_the_last_try_beats_losing() {
    let mut game = fixed_game("abode");
    let budget = game.max_tries();
    for _ in 1..budget {
        game.submit_valid_guess("crown");
    }
    assert_eq!(game.current_try(), budget);
    game.submit_valid_guess("abode");
    assert_eq!(game.status(), GameStatus::Won);
}
