//! Bigger / smaller / equal questions ("the hungry alligator")

use std::cmp::Ordering;

use rand::Rng;
use serde::Serialize;

/// Default upper bound for both numbers
pub const COMPARISON_MAX: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonQuestion {
    pub left: u32,
    pub right: u32,
}

impl ComparisonQuestion {
    pub fn answer(&self) -> Ordering {
        self.left.cmp(&self.right)
    }

    /// The sign a player has to pick: `<`, `>` or `=`
    pub fn symbol(&self) -> &'static str {
        match self.answer() {
            Ordering::Less => "<",
            Ordering::Greater => ">",
            Ordering::Equal => "=",
        }
    }
}

/// Two independent numbers in `1..=max`
pub fn generate_comparison<R: Rng + ?Sized>(rng: &mut R, max: u32) -> ComparisonQuestion {
    let max = max.max(1);
    ComparisonQuestion {
        left: rng.gen_range(1..=max),
        right: rng.gen_range(1..=max),
    }
}
