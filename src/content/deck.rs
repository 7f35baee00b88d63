//! Memory-game decks
//!
//! Each content pair becomes two single-sided cards sharing a pair id. The
//! deck is shuffled uniformly before it is dealt.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::random::shuffle;

/// Pairs on one board
pub const PAIRS_PER_DECK: usize = 6;

const EMOJI_PAIRS: &[(&str, &str)] = &[
    ("🦁", "🦁"),
    ("🐘", "🐘"),
    ("🦊", "🦊"),
    ("🐼", "🐼"),
    ("🦄", "🦄"),
    ("🐸", "🐸"),
];

const WORD_PAIRS: &[(&str, &str)] = &[
    ("🦁", "אריה"),
    ("🐘", "פיל"),
    ("🦊", "שועל"),
    ("🐼", "פנדה"),
    ("🦄", "חד קרן"),
    ("🐸", "צפרדע"),
];

const MATH_PAIRS: &[(&str, &str)] = &[
    ("1+1", "2"),
    ("2+2", "4"),
    ("3+2", "5"),
    ("4+1", "5"),
    ("2+3", "5"),
    ("1+4", "5"),
];

/// Largest addend used when topping up math pairs
const MATH_ADDEND_MAX: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckKind {
    /// Identical pictures
    Emoji,
    /// Picture and its word
    Word,
    /// Sum and its result
    Math,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSide {
    Front,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Unique within the deck, e.g. `"3-a"`
    pub id: String,
    pub content: String,
    pub pair_id: usize,
    pub side: CardSide,
}

impl Card {
    /// Two different cards of the same pair
    pub fn matches(&self, other: &Card) -> bool {
        self.pair_id == other.pair_id && self.id != other.id
    }
}

/// Content pairs for `kind`, before shuffling
pub fn deck_pairs<R: Rng + ?Sized>(rng: &mut R, kind: DeckKind) -> Vec<(String, String)> {
    match kind {
        DeckKind::Emoji => owned_pairs(EMOJI_PAIRS),
        DeckKind::Word => owned_pairs(WORD_PAIRS),
        DeckKind::Math => math_pairs(rng),
    }
}

fn owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .take(PAIRS_PER_DECK)
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

/// Math pairs with distinct results so every result card has one partner
fn math_pairs<R: Rng + ?Sized>(rng: &mut R) -> Vec<(String, String)> {
    let mut used_results = HashSet::new();
    let mut pairs = Vec::with_capacity(PAIRS_PER_DECK);

    for (expr, result) in MATH_PAIRS {
        if pairs.len() >= PAIRS_PER_DECK {
            break;
        }
        if used_results.insert(result.to_string()) {
            pairs.push((expr.to_string(), result.to_string()));
        }
    }

    // Sums of 1..=5 give 9 distinct results, enough for a full board
    while pairs.len() < PAIRS_PER_DECK {
        let a = rng.gen_range(1..=MATH_ADDEND_MAX);
        let b = rng.gen_range(1..=MATH_ADDEND_MAX);
        let result = (a + b).to_string();
        if used_results.insert(result.clone()) {
            pairs.push((format!("{a}+{b}"), result));
        }
    }

    pairs
}

/// Build a shuffled deck of `kind`
pub fn build_deck<R: Rng + ?Sized>(rng: &mut R, kind: DeckKind) -> Vec<Card> {
    let pairs = deck_pairs(rng, kind);
    let mut cards = Vec::with_capacity(pairs.len() * 2);
    for (pair_id, (front, back)) in pairs.into_iter().enumerate() {
        cards.push(Card {
            id: format!("{pair_id}-a"),
            content: front,
            pair_id,
            side: CardSide::Front,
        });
        cards.push(Card {
            id: format!("{pair_id}-b"),
            content: back,
            pair_id,
            side: CardSide::Back,
        });
    }
    shuffle(rng, &cards)
}
