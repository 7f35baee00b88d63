//! Round content for the games
//!
//! Every generator takes the random source as an argument. Pass
//! `rand::thread_rng()` in the app and a seeded `ChaCha8Rng` in tests.

mod arithmetic;
mod comparison;
mod deck;
mod feeding;
mod options;
mod random;
mod sequence;
mod sorting;
mod vocabulary;

pub use arithmetic::{
    ArithmeticConfig, JUNIOR_MATH, MATH_CHALLENGE_LEVELS, Operator, Question, generate_question,
    math_challenge_level,
};
pub use comparison::{COMPARISON_MAX, ComparisonQuestion, generate_comparison};
pub use deck::{Card, CardSide, DeckKind, PAIRS_PER_DECK, build_deck, deck_pairs};
pub use feeding::{
    ANIMALS, Animal, FEED_TARGET_MAX, FOOD_ON_PLATE, FeedOutcome, FeedingRound,
    generate_feeding_round,
};
pub use options::{NARROW_SPREAD, OPTION_COUNT, WIDE_SPREAD, generate_options};
pub use random::{pick, random_int, shuffle};
pub use sequence::{
    SequencePuzzle, SequenceTemplate, VISIBLE_TERMS, generate_sequence, generate_sequence_from,
    sequence_templates,
};
pub use sorting::{
    SORTER_GAME_ID, SORTING_LEVELS, SortBin, SortItem, SortingLevel, SortingRound,
    generate_sorting_round, sorting_level, sorting_unlock_after,
};
pub use vocabulary::{
    ENGLISH_LEVELS, ENGLISH_WORDS, FIRST_WORDS, VocabularyLevel, Word, WordCycle, WordRound,
    english_level, generate_english_round, word_options,
};
