use gallows::difficulty::{Difficulty, DifficultyController};
use gallows::guesser::FrequencyGuesser;
use gallows::round::{Round, RoundStatus};
use gallows::session::Session;
use gallows::words::WordBank;

// Drive one word to completion with the frequency guesser against a bare
// round, then report the outcome, the way the binary's auto mode does.
fn play_auto_round(controller: &mut DifficultyController, word: &str) -> RoundStatus {
    let mut round = Round::new(word.to_string());
    let mut guesser = FrequencyGuesser::new(word.chars().count());

    while !round.is_over() {
        guesser.update_pattern(&round.pattern());
        match guesser.guess_letter() {
            Some(letter) => {
                round.guess(letter);
            }
            None => break,
        }
    }

    controller.update_stats(round.status == RoundStatus::Won, round.guess_count());
    round.status
}

#[test]
fn frequency_guesser_wins_vowel_heavy_words_and_tier_steps_up() {
    let mut controller = DifficultyController::new();

    // TEA falls to the first three guesses (E, T, A) every time
    for _ in 0..3 {
        assert_eq!(play_auto_round(&mut controller, "TEA"), RoundStatus::Won);
    }

    // winRate 100, average 3 guesses: Easy steps to Medium
    assert_eq!(controller.current_difficulty(), Difficulty::Medium);
    let stats = controller.stats();
    assert_eq!(stats.win_rate, 100.0);
    assert_eq!(stats.average_guesses, 3.0);

    // One more qualifying win escalates to Hard
    play_auto_round(&mut controller, "TEA");
    assert_eq!(controller.current_difficulty(), Difficulty::Hard);
}

#[test]
fn rare_letter_words_defeat_the_guesser_and_tier_steps_down() {
    let mut controller = DifficultyController::with_difficulty(Difficulty::Hard);

    // JAZZY: E, T, O, I, N, S all miss before the pattern completes
    for _ in 0..3 {
        assert_eq!(play_auto_round(&mut controller, "JAZZY"), RoundStatus::Lost);
    }
    assert_eq!(controller.current_difficulty(), Difficulty::Medium);

    play_auto_round(&mut controller, "JAZZY");
    assert_eq!(controller.current_difficulty(), Difficulty::Easy);

    // Easy is the floor
    play_auto_round(&mut controller, "JAZZY");
    assert_eq!(controller.current_difficulty(), Difficulty::Easy);
}

#[test]
fn session_over_the_embedded_bank_keeps_controller_invariants() {
    let bank = WordBank::new("standard".to_string());
    let mut session = Session::new(bank);

    for expected_games in 1..=12u32 {
        session.start_round();
        while session.auto_guess().is_some() {}

        let round = session.round.as_ref().unwrap();
        assert!(round.is_over(), "auto play must finish every round");

        let stats = session.controller.stats();
        assert_eq!(stats.games_played, expected_games);
        assert!(stats.total_wins <= stats.games_played);
        assert!((0.0..=100.0).contains(&stats.win_rate));
        assert!(stats.average_guesses >= 1.0);
        assert!(stats.average_guesses <= 26.0);
    }
}

#[test]
fn guesser_reset_survives_a_second_round_on_the_same_instance() {
    let mut guesser = FrequencyGuesser::new(3);

    // First word: burn a few letters
    let mut first = Round::new("TEA".to_string());
    while !first.is_over() {
        let letter = guesser.guess_letter().unwrap();
        first.guess(letter);
    }
    assert_eq!(first.status, RoundStatus::Won);

    // Reuse for a new word after reset: the full order comes back
    guesser.reset();
    guesser.update_pattern("____");
    assert_eq!(guesser.guess_letter(), Some('E'));
    assert_eq!(guesser.guess_letter(), Some('T'));
}
