use serde::Serialize;

/// Word-pool tiers offered to the player, easiest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

/// Owned copy of the controller's state, safe to hand to display code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub games_played: u32,
    pub total_wins: u32,
    pub average_guesses: f64,
    pub win_rate: f64,
    pub difficulty: Difficulty,
}

/// Tracks session performance and picks the tier for the next round.
///
/// One instance per session. Only `update_stats` mutates it; the driver
/// calls it exactly once per completed round.
#[derive(Debug, Default)]
pub struct DifficultyController {
    games_played: u32,
    total_wins: u32,
    average_guesses: f64,
    win_rate: f64,
    difficulty: Difficulty,
}

impl DifficultyController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a pinned tier instead of Easy.
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Record a completed round and re-evaluate the tier.
    pub fn update_stats(&mut self, won: bool, guess_count: usize) {
        self.games_played += 1;
        if won {
            self.total_wins += 1;
        }

        // Exact incremental mean over all rounds so far, wins and losses alike
        self.average_guesses = (self.average_guesses * (self.games_played - 1) as f64
            + guess_count as f64)
            / self.games_played as f64;

        self.win_rate = (self.total_wins as f64 / self.games_played as f64) * 100.0;

        self.adjust_difficulty();
    }

    fn adjust_difficulty(&mut self) {
        if self.games_played < 3 {
            // Need minimum games to adjust
            return;
        }

        if self.win_rate > 70.0 && self.average_guesses < 8.0 {
            self.difficulty = if self.difficulty == Difficulty::Easy {
                Difficulty::Medium
            } else {
                Difficulty::Hard
            };
        } else if self.win_rate < 30.0 || self.average_guesses > 12.0 {
            self.difficulty = if self.difficulty == Difficulty::Hard {
                Difficulty::Medium
            } else {
                Difficulty::Easy
            };
        }
    }

    pub fn current_difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            games_played: self.games_played,
            total_wins: self.total_wins,
            average_guesses: self.average_guesses,
            win_rate: self.win_rate,
            difficulty: self.difficulty,
        }
    }
}
