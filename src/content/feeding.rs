//! Feeding rounds: give an animal exactly the number of treats it asks for

use rand::Rng;
use serde::Serialize;

use super::random::pick;

/// Largest number of treats an animal asks for
pub const FEED_TARGET_MAX: u32 = 5;

/// Treats on the plate at the start of a round
pub const FOOD_ON_PLATE: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Animal {
    pub emoji: &'static str,
    pub name: &'static str,
    pub food: &'static str,
}

pub static ANIMALS: &[Animal] = &[
    Animal {
        emoji: "🦁",
        name: "אריה",
        food: "🍖",
    },
    Animal {
        emoji: "🐘",
        name: "פיל",
        food: "🥜",
    },
    Animal {
        emoji: "🐰",
        name: "ארנב",
        food: "🥕",
    },
    Animal {
        emoji: "🐵",
        name: "קוף",
        food: "🍌",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedOutcome {
    /// Still wants more
    Hungry,
    /// Fed exactly the target
    Full,
    /// Fed too much, the round is lost
    Overfed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedingRound {
    pub animal: Animal,
    pub target: u32,
    pub food_on_plate: u32,
}

impl FeedingRound {
    pub fn outcome(&self, fed: u32) -> FeedOutcome {
        match fed.cmp(&self.target) {
            std::cmp::Ordering::Less => FeedOutcome::Hungry,
            std::cmp::Ordering::Equal => FeedOutcome::Full,
            std::cmp::Ordering::Greater => FeedOutcome::Overfed,
        }
    }
}

pub fn generate_feeding_round<R: Rng + ?Sized>(rng: &mut R) -> FeedingRound {
    let animal = pick(rng, ANIMALS).copied().unwrap_or(ANIMALS[0]);
    FeedingRound {
        animal,
        target: rng.gen_range(1..=FEED_TARGET_MAX),
        food_on_plate: FOOD_ON_PLATE,
    }
}
