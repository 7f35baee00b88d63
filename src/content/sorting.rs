//! Sorting rounds: drop each item into the bin it belongs to

use rand::Rng;
use serde::Serialize;

use super::random::shuffle;

/// Game id used when unlocking sorting levels
pub const SORTER_GAME_ID: &str = "sorter";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortBin {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortItem {
    pub id: &'static str,
    pub emoji: &'static str,
    /// Id of the bin the item belongs in
    pub bin: &'static str,
}

impl SortItem {
    pub fn belongs_in(&self, bin_id: &str) -> bool {
        self.bin == bin_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortingLevel {
    pub name: &'static str,
    pub bins: &'static [SortBin],
    pub items: &'static [SortItem],
}

const fn bin(id: &'static str, name: &'static str, emoji: &'static str) -> SortBin {
    SortBin { id, name, emoji }
}

const fn item(id: &'static str, emoji: &'static str, bin: &'static str) -> SortItem {
    SortItem { id, emoji, bin }
}

pub static SORTING_LEVELS: &[SortingLevel] = &[
    SortingLevel {
        name: "צבעים",
        bins: &[bin("red", "אדום", "🔴"), bin("blue", "כחול", "🔵")],
        items: &[
            item("1", "🍎", "red"),
            item("2", "🍓", "red"),
            item("3", "❤️", "red"),
            item("4", "🧢", "blue"),
            item("5", "🐳", "blue"),
            item("6", "💙", "blue"),
        ],
    },
    SortingLevel {
        name: "צורות",
        bins: &[bin("circle", "עיגול", "⭕"), bin("square", "ריבוע", "⬜")],
        items: &[
            item("1", "🔴", "circle"),
            item("2", "🟠", "circle"),
            item("3", "⚽", "circle"),
            item("4", "📦", "square"),
            item("5", "🎁", "square"),
            item("6", "📱", "square"),
        ],
    },
    SortingLevel {
        name: "חיות",
        bins: &[bin("land", "יבשה", "🌳"), bin("sea", "ים", "🌊")],
        items: &[
            item("1", "🦁", "land"),
            item("2", "🐘", "land"),
            item("3", "🐕", "land"),
            item("4", "🐠", "sea"),
            item("5", "🐙", "sea"),
            item("6", "🐳", "sea"),
        ],
    },
];

/// Level for a 0-based index, clamped to the last level
pub fn sorting_level(level: usize) -> &'static SortingLevel {
    let last = SORTING_LEVELS.len() - 1;
    &SORTING_LEVELS[level.min(last)]
}

/// Level number (1-based) unlocked by finishing the 0-based `level`
pub fn sorting_unlock_after(level: usize) -> u32 {
    u32::try_from(level).unwrap_or(u32::MAX).saturating_add(2)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortingRound {
    pub name: &'static str,
    pub bins: &'static [SortBin],
    /// Items in the order they are handed out
    pub items: Vec<SortItem>,
}

impl SortingRound {
    /// Item `item_id` dropped into `bin_id`. `None` for an unknown item.
    pub fn check(&self, item_id: &str, bin_id: &str) -> Option<bool> {
        self.items
            .iter()
            .find(|i| i.id == item_id)
            .map(|i| i.belongs_in(bin_id))
    }
}

/// Shuffled round for a 0-based level
pub fn generate_sorting_round<R: Rng + ?Sized>(rng: &mut R, level: usize) -> SortingRound {
    let config = sorting_level(level);
    SortingRound {
        name: config.name,
        bins: config.bins,
        items: shuffle(rng, config.items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_levels_are_consistent() {
        for level in SORTING_LEVELS {
            for item in level.items {
                assert!(
                    level.bins.iter().any(|b| item.belongs_in(b.id)),
                    "{} has no bin in {}",
                    item.emoji,
                    level.name
                );
            }
        }
    }

    #[test]
    fn test_round_is_permutation_of_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let round = generate_sorting_round(&mut rng, 2);
        assert_eq!(round.name, "חיות");

        let mut ids: Vec<_> = round.items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_check_drop() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let round = generate_sorting_round(&mut rng, 0);
        assert_eq!(round.check("1", "red"), Some(true));
        assert_eq!(round.check("1", "blue"), Some(false));
        assert_eq!(round.check("99", "red"), None);
    }

    #[test]
    fn test_level_clamp_and_unlock() {
        assert_eq!(sorting_level(7).name, "חיות");
        assert_eq!(sorting_unlock_after(0), 2);
        assert_eq!(sorting_unlock_after(2), 4);
    }
}
