//! XP rewards for the individual games

/// XP rewards for various answers
pub struct XpRewards;

impl XpRewards {
    /// Correct "bigger / smaller / equal" answer
    pub const COMPARISON: u32 = 15;

    /// Correct next-number-in-sequence answer
    pub const SEQUENCE: u32 = 20;

    /// Matched pair in the memory game
    pub const MEMORY_MATCH: u32 = 20;

    /// Bonus for clearing a whole memory board
    pub const MEMORY_BOARD: u32 = 50;

    /// Item dropped into the right bin
    pub const SORTING_ITEM: u32 = 10;

    /// Bonus for finishing a sorting level
    pub const SORTING_LEVEL: u32 = 50;

    /// Correct first-word answer
    pub const FIRST_WORD: u32 = 15;

    /// Correct answers needed before the math challenge moves up a level
    pub const LEVEL_UP_EVERY: u32 = 5;

    /// Math challenge: grows with level (0-based) and current streak
    pub fn math_challenge(level: u32, streak: u32) -> u32 {
        Self::level_streak_reward(10, level, streak)
    }

    /// English words: grows with level (0-based) and current streak
    pub fn english(level: u32, streak: u32) -> u32 {
        Self::level_streak_reward(15, level, streak)
    }

    /// Junior math: 20 XP, minus 5 per wrong try, never below 10
    pub fn junior_math(errors: u32) -> u32 {
        20u32.saturating_sub(errors.saturating_mul(5)).max(10)
    }

    /// Feeding game: bigger counts pay more
    pub fn feeding(target_count: u32) -> u32 {
        10u32.saturating_add(target_count.saturating_mul(5))
    }

    fn level_streak_reward(base: u32, level: u32, streak: u32) -> u32 {
        base.saturating_add(level.saturating_mul(5)).saturating_add(streak.saturating_mul(2))
    }

    /// Whether `answered` correct answers should move the math challenge from
    /// `level` (0-based) to the next of `level_count` levels
    pub fn should_level_up(answered: u32, level: usize, level_count: usize) -> bool {
        answered > 0 && answered % Self::LEVEL_UP_EVERY == 0 && level + 1 < level_count
    }
}
