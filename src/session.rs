use crate::difficulty::DifficultyController;
use crate::guesser::FrequencyGuesser;
use crate::round::{GuessOutcome, Round, RoundStatus};
use crate::words::WordBank;

/// Ties one controller, one word bank, and the active round together.
///
/// Owns the round lifecycle the driver runs: tier lookup, word pick,
/// guess application, and the single outcome report per completed round.
#[derive(Debug)]
pub struct Session {
    pub controller: DifficultyController,
    bank: WordBank,
    pub round: Option<Round>,
    guesser: Option<FrequencyGuesser>,
    reported: bool,
}

impl Session {
    pub fn new(bank: WordBank) -> Self {
        Self::with_controller(DifficultyController::new(), bank)
    }

    pub fn with_controller(controller: DifficultyController, bank: WordBank) -> Self {
        Self {
            controller,
            bank,
            round: None,
            guesser: None,
            reported: false,
        }
    }

    /// Begin a round at the controller's current tier. The previous round,
    /// finished or not, is discarded along with its guesser.
    pub fn start_round(&mut self) {
        let tier = self.controller.current_difficulty();
        let word = self.bank.pick(tier);

        self.guesser = Some(FrequencyGuesser::new(word.chars().count()));
        self.round = Some(Round::new(word));
        self.reported = false;
    }

    /// Apply a guess to the active round, reporting the outcome to the
    /// controller the moment the round ends. `None` when no round is active.
    pub fn guess(&mut self, letter: char) -> Option<GuessOutcome> {
        let round = self.round.as_mut()?;
        let outcome = round.guess(letter);

        if round.is_over() && !self.reported {
            let won = round.status == RoundStatus::Won;
            self.controller.update_stats(won, round.guess_count());
            self.reported = true;
        }

        Some(outcome)
    }

    /// Let the frequency guesser take one turn: sync its pattern, draw its
    /// letter, apply it. `None` when the round is over, absent, or the
    /// guesser has exhausted the alphabet.
    pub fn auto_guess(&mut self) -> Option<char> {
        if self.round.as_ref().map_or(true, |r| r.is_over()) {
            return None;
        }

        let pattern = self.round.as_ref()?.pattern();
        let guesser = self.guesser.as_mut()?;
        guesser.update_pattern(&pattern);

        let letter = guesser.guess_letter()?;
        self.guess(letter);
        Some(letter)
    }

    /// Peek at what the guesser would play next, without applying it.
    ///
    /// The suggestion is drawn from the guesser's own used-letter set,
    /// which does not see letters guessed through `guess` directly, so a
    /// hint can repeat a letter the player already tried.
    pub fn suggest(&mut self) -> Option<char> {
        let pattern = self.round.as_ref()?.pattern();
        let guesser = self.guesser.as_mut()?;
        guesser.update_pattern(&pattern);
        guesser.guess_letter()
    }
}
