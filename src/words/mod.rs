use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;

use crate::difficulty::Difficulty;
use include_dir::{include_dir, Dir};
use std::error::Error;

static BANK_DIR: Dir = include_dir!("src/words");

/// A tiered pool of words to guess at, loaded from an embedded JSON file.
#[derive(Deserialize, Clone, Debug)]
pub struct WordBank {
    pub name: String,
    pub easy: Vec<String>,
    pub medium: Vec<String>,
    pub hard: Vec<String>,
}

impl WordBank {
    pub fn new(file_name: String) -> Self {
        read_bank_from_file(format!("{}.json", file_name)).unwrap()
    }

    pub fn tier_words(&self, tier: Difficulty) -> &[String] {
        match tier {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Random word from the given tier. Word content is the caller's
    /// problem; the bank does not validate it.
    pub fn pick(&self, tier: Difficulty) -> String {
        let mut rng = rand::thread_rng();

        self.tier_words(tier)
            .choose(&mut rng)
            .expect("word bank tier is empty")
            .clone()
    }
}

fn read_bank_from_file(file_name: String) -> Result<WordBank, Box<dyn Error>> {
    let file = BANK_DIR.get_file(file_name).expect("Word bank not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    let bank = from_str(file_as_str).expect("Unable to deserialize word bank json");

    Ok(bank)
}
