//! Multiple-choice answer options

use rand::Rng;

use super::random::shuffle;

/// Options shown for every question, including the correct one
pub const OPTION_COUNT: usize = 4;

/// Offset range used by the math challenge
pub const WIDE_SPREAD: u32 = 5;

/// Offset range used by junior math
pub const NARROW_SPREAD: u32 = 3;

/// Random draws before falling back to the nearest unused values
const MAX_ATTEMPTS: usize = 1_000;

/// Build [`OPTION_COUNT`] distinct, non-negative options around `answer` in a
/// random order.
///
/// Distractors are `answer` plus a random offset in `-spread..=spread`,
/// clamped to the `u32` range. Near zero with a small spread there may not
/// be enough candidates, so after a bounded number of draws the remaining slots are
/// filled with the closest unused values above the answer.
pub fn generate_options<R: Rng + ?Sized>(rng: &mut R, answer: u32, spread: u32) -> Vec<u32> {
    let mut options = vec![answer];
    let spread = i64::from(spread);

    let mut attempts = 0;
    while options.len() < OPTION_COUNT && attempts < MAX_ATTEMPTS && spread > 0 {
        attempts += 1;
        let offset = rng.gen_range(-spread..=spread);
        let candidate = (i64::from(answer) + offset).clamp(0, i64::from(u32::MAX)) as u32;
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    let fallback = (answer.saturating_add(1)..=u32::MAX).chain((0..answer).rev());
    for candidate in fallback {
        if options.len() >= OPTION_COUNT {
            break;
        }
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    shuffle(rng, &options)
}
