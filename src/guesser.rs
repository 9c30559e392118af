use itertools::Itertools;
use std::collections::HashSet;

/// Relative frequency of each letter in English text, in percent.
///
/// Alphabetical order; tied values (C/U, M/W, G/Y, J/X) resolve
/// alphabetically under the stable sort in `guess_letter`.
pub const LETTER_FREQUENCY: [(char, f64); 26] = [
    ('A', 8.2),
    ('B', 1.5),
    ('C', 2.8),
    ('D', 4.3),
    ('E', 12.7),
    ('F', 2.2),
    ('G', 2.0),
    ('H', 6.1),
    ('I', 7.0),
    ('J', 0.15),
    ('K', 0.8),
    ('L', 4.0),
    ('M', 2.4),
    ('N', 6.7),
    ('O', 7.5),
    ('P', 1.9),
    ('Q', 0.10),
    ('R', 6.0),
    ('S', 6.3),
    ('T', 9.1),
    ('U', 2.8),
    ('V', 1.0),
    ('W', 2.4),
    ('X', 0.15),
    ('Y', 2.0),
    ('Z', 0.07),
];

/// Proposes letters in descending English-frequency order, never repeating.
///
/// Tracks its own used-letter set, independent of whatever the round has
/// seen through other guess paths. One instance per word; `reset` reuses it.
#[derive(Debug)]
pub struct FrequencyGuesser {
    used_letters: HashSet<char>,
    pattern: String,
}

impl FrequencyGuesser {
    pub fn new(word_length: usize) -> Self {
        Self {
            used_letters: HashSet::new(),
            pattern: "_".repeat(word_length),
        }
    }

    /// Store the latest reveal verbatim. Selection does not consult it.
    pub fn update_pattern(&mut self, new_pattern: &str) {
        self.pattern = new_pattern.to_string();
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The most frequent letter not yet proposed, or `None` once all 26
    /// have been used. The returned letter is marked used before returning.
    pub fn guess_letter(&mut self) -> Option<char> {
        let guess = LETTER_FREQUENCY
            .iter()
            .filter(|(letter, _)| !self.used_letters.contains(letter))
            .sorted_by(|a, b| b.1.partial_cmp(&a.1).unwrap())
            .map(|(letter, _)| *letter)
            .next();

        if let Some(letter) = guess {
            self.used_letters.insert(letter);
        }

        guess
    }

    /// Clear the used-letter set so the instance can serve a new word.
    pub fn reset(&mut self) {
        self.used_letters.clear();
    }
}
