//! Vocabulary rounds: hear a word, pick its picture
//!
//! The English game filters its catalog by level category. The first-words
//! game cycles through its whole list before repeating a word. Both show the
//! target picture among three pictures of other words.

use rand::Rng;
use serde::Serialize;

use super::options::OPTION_COUNT;
use super::random::{pick, shuffle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Word {
    pub word: &'static str,
    pub emoji: &'static str,
    /// Empty for catalogs without categories
    pub category: &'static str,
}

const fn word(word: &'static str, emoji: &'static str, category: &'static str) -> Word {
    Word {
        word,
        emoji,
        category,
    }
}

pub static ENGLISH_WORDS: &[Word] = &[
    word("Dog", "🐶", "animals"),
    word("Cat", "🐱", "animals"),
    word("Bird", "🐦", "animals"),
    word("Fish", "🐟", "animals"),
    word("Lion", "🦁", "animals"),
    word("Apple", "🍎", "food"),
    word("Banana", "🍌", "food"),
    word("Orange", "🍊", "food"),
    word("Red", "🔴", "colors"),
    word("Blue", "🔵", "colors"),
    word("Green", "🟢", "colors"),
    word("Yellow", "🟡", "colors"),
    word("One", "1️⃣", "numbers"),
    word("Two", "2️⃣", "numbers"),
    word("Three", "3️⃣", "numbers"),
    word("Sun", "☀️", "nature"),
    word("Moon", "🌙", "nature"),
    word("Star", "⭐", "nature"),
    word("House", "🏠", "objects"),
    word("Car", "🚗", "objects"),
];

pub static FIRST_WORDS: &[Word] = &[
    word("בָּנָנָה", "🍌", ""),
    word("תַּפּוּחַ", "🍎", ""),
    word("כֶּלֶב", "🐶", ""),
    word("חָתוּל", "🐱", ""),
    word("שֶׁמֶשׁ", "☀️", ""),
    word("יָרֵחַ", "🌙", ""),
    word("כּוֹכָב", "⭐", ""),
    word("פֶּרַח", "🌸", ""),
    word("דָּג", "🐟", ""),
    word("צִפּוֹר", "🐦", ""),
    word("בַּיִת", "🏠", ""),
    word("עֵץ", "🌳", ""),
    word("גֶּשֶׁם", "🌧️", ""),
    word("לֵב", "❤️", ""),
    word("אַרְיֵה", "🦁", ""),
];

/// One English level: the categories it draws from, all when empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyLevel {
    pub name: &'static str,
    pub categories: &'static [&'static str],
}

impl VocabularyLevel {
    pub fn includes(&self, word: &Word) -> bool {
        self.categories.is_empty() || self.categories.contains(&word.category)
    }
}

pub static ENGLISH_LEVELS: &[VocabularyLevel] = &[
    VocabularyLevel {
        name: "חיות",
        categories: &["animals"],
    },
    VocabularyLevel {
        name: "צבעים ומספרים",
        categories: &["colors", "numbers"],
    },
    VocabularyLevel {
        name: "הכל!",
        categories: &[],
    },
];

/// Level for a 0-based index, clamped to the last level
pub fn english_level(level: usize) -> &'static VocabularyLevel {
    let last = ENGLISH_LEVELS.len() - 1;
    &ENGLISH_LEVELS[level.min(last)]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRound {
    pub word: Word,
    /// Pictures to choose from, `word.emoji` among them
    pub options: Vec<&'static str>,
}

impl WordRound {
    pub fn is_correct(&self, emoji: &str) -> bool {
        self.word.emoji == emoji
    }
}

/// The target picture plus up to three pictures of other catalog words,
/// shuffled
pub fn word_options<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &[Word],
    target: &Word,
) -> Vec<&'static str> {
    let others: Vec<&'static str> = catalog
        .iter()
        .filter(|w| w.emoji != target.emoji)
        .map(|w| w.emoji)
        .collect();

    let mut options: Vec<&'static str> = shuffle(rng, &others)
        .into_iter()
        .take(OPTION_COUNT - 1)
        .collect();
    options.push(target.emoji);
    shuffle(rng, &options)
}

/// English round for a 0-based level. Distractors come from the whole
/// catalog, not only the level's categories.
pub fn generate_english_round<R: Rng + ?Sized>(rng: &mut R, level: usize) -> Option<WordRound> {
    let config = english_level(level);
    let available: Vec<&Word> = ENGLISH_WORDS.iter().filter(|w| config.includes(w)).collect();
    let word = **pick(rng, &available)?;

    Some(WordRound {
        options: word_options(rng, ENGLISH_WORDS, &word),
        word,
    })
}

/// Draws words without repeats until the catalog is used up, then starts
/// over
#[derive(Debug, Clone)]
pub struct WordCycle {
    catalog: &'static [Word],
    used: Vec<&'static str>,
}

impl Default for WordCycle {
    fn default() -> Self {
        Self::new(FIRST_WORDS)
    }
}

impl WordCycle {
    pub fn new(catalog: &'static [Word]) -> Self {
        Self {
            catalog,
            used: Vec::new(),
        }
    }

    /// Words shown since the last restart
    pub fn used(&self) -> &[&'static str] {
        &self.used
    }

    pub fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<WordRound> {
        let mut available: Vec<&Word> = self
            .catalog
            .iter()
            .filter(|w| !self.used.contains(&w.word))
            .collect();
        if available.is_empty() {
            tracing::debug!("All {} words shown, starting over", self.catalog.len());
            self.used.clear();
            available = self.catalog.iter().collect();
        }

        let word = **pick(rng, &available)?;
        self.used.push(word.word);

        Some(WordRound {
            options: word_options(rng, self.catalog, &word),
            word,
        })
    }
}
