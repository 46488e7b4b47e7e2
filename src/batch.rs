//! Many independent sessions at once.
//!
//! Each pair gets its own table, so sessions run in parallel with no shared
//! state. Results come back in input order.

use std::io::Read;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{MatchResult, Searcher};
use crate::error::BatchError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub text: String,
    pub pattern: String,
}

impl Pair {
    pub fn new(text: impl Into<String>, pattern: impl Into<String>) -> Self {
        Pair {
            text: text.into(),
            pattern: pattern.into(),
        }
    }
}

/// Read `text,pattern` rows (with a header line) from CSV.
pub fn read_pairs<R: Read>(reader: R) -> Result<Vec<Pair>, BatchError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let pairs = rdr
        .deserialize()
        .collect::<Result<Vec<Pair>, csv::Error>>()?;
    debug!(rows = pairs.len(), "read batch input");
    Ok(pairs)
}

pub fn search_pairs(searcher: &Searcher, pairs: &[Pair]) -> Result<Vec<MatchResult>, BatchError> {
    pairs
        .par_iter()
        .enumerate()
        .map(|(row, pair)| {
            searcher
                .search(&pair.text, &pair.pattern)
                .map_err(|source| BatchError::Search { row, source })
        })
        .collect()
}

/// A pair with the outcome it should produce.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub text: &'static str,
    pub pattern: &'static str,
    pub expect_found: bool,
}

const fn sample(text: &'static str, pattern: &'static str, expect_found: bool) -> Sample {
    Sample {
        text,
        pattern,
        expect_found,
    }
}

/// Built-in sample set used by the `demo` command.
pub const SAMPLES: &[Sample] = &[
    sample("TRUSTHARDTOOTHAMAZING", "tooth", true),
    sample("WE HOLD THESE TRUTHS TO BE SELF-EVIDENT", "TRUTH", true),
    sample("THIS IS SOME TEST", "TEST", true),
    sample("You must be the change you wish to see in the world. -Mahatma Gandhi", "be", true),
    sample(
        "Spread love everywhere you go. Let no one ever come to you without leaving happier. -Mother Teresa",
        "without",
        true,
    ),
    sample(
        "Darkness cannot drive out darkness: only light can do that. Hate cannot drive out hate: only love can do that. -Martin Luther King Jr.",
        "light",
        true,
    ),
    sample("The only thing we have to fear is fear itself. -Franklin D. Roosevelt", "fear", true),
    sample(
        "Spread love everywhere you go. Let no one ever come to you without leaving happier. -Mother Teresa",
        "Teresa",
        true,
    ),
    sample("Well done is better than well said. -Benjamin Franklin", "better", true),
    sample(
        "The best and most beautiful things in the world cannot be seen or even touched - they must be felt with the heart. -Helen Keller",
        "beautiful",
        true,
    ),
    sample("It is during our darkest moments that we must focus to see the light. -Aristotle", "darkest", true),
    sample(
        "Do not go where the path may lead, go instead where there is no path and leave a trail. -Ralph Waldo Emerson",
        "trail",
        true,
    ),
    sample("Be yourself; everyone else is already taken. -Oscar Wilde", "yourself", true),
    sample("a", "a", true),
    sample("abc", "z", false),
    sample("aaaaa", "aa", true),
    sample("empty", "", false),
    sample("", "notempty", false),
    sample("The quick brown fox jumps over the lazy dog", "cat", false),
    sample("FFFFFFFFFFFFFFF", "G", false),
    sample("PatternAtTheEndEnd", "End", true),
    sample("Multiple instances found in this instance", "instance", true),
    sample("123456789", "10", false),
];

pub fn sample_pairs() -> Vec<Pair> {
    SAMPLES.iter().map(|s| Pair::new(s.text, s.pattern)).collect()
}
