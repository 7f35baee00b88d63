//! "What comes next?" number sequences

use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

use super::random::{pick, shuffle};

/// Terms shown before the missing one
pub const VISIBLE_TERMS: u32 = 4;

/// Wrong options per puzzle
const DISTRACTORS: usize = 3;

/// Start range and step of an arithmetic progression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceTemplate {
    pub start: RangeInclusive<u32>,
    pub step: u32,
}

/// Built-in progressions: count by 1, 2, 3, 5 and 10
pub fn sequence_templates() -> Vec<SequenceTemplate> {
    vec![
        SequenceTemplate { start: 1..=5, step: 1 },
        SequenceTemplate { start: 0..=5, step: 2 },
        SequenceTemplate { start: 0..=3, step: 3 },
        SequenceTemplate { start: 1..=5, step: 5 },
        SequenceTemplate { start: 0..=3, step: 10 },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequencePuzzle {
    pub terms: Vec<u32>,
    pub step: u32,
    pub answer: u32,
    /// Answer plus distractors, shuffled
    pub options: Vec<u32>,
}

/// Generate a puzzle from the built-in templates
pub fn generate_sequence<R: Rng + ?Sized>(rng: &mut R) -> SequencePuzzle {
    generate_sequence_from(rng, &sequence_templates())
}

/// Generate a puzzle from `templates` (a count-by-one sequence if empty).
///
/// Distractors are `answer ± k * step` for `k` in `1..=3`, kept only when
/// non-negative.
pub fn generate_sequence_from<R: Rng + ?Sized>(
    rng: &mut R,
    templates: &[SequenceTemplate],
) -> SequencePuzzle {
    let fallback = SequenceTemplate { start: 1..=5, step: 1 };
    let template = pick(rng, templates).unwrap_or(&fallback);
    let step = template.step.max(1);
    let start = rng.gen_range(template.start.clone());

    let terms: Vec<u32> = (0..VISIBLE_TERMS).map(|i| start + step * i).collect();
    let answer = start + step * VISIBLE_TERMS;

    // answer - k*step >= start >= 0 for k <= 3, so there are always enough
    let mut wrong: Vec<u32> = Vec::with_capacity(DISTRACTORS);
    while wrong.len() < DISTRACTORS {
        let k = rng.gen_range(-3i64..=3);
        let candidate = i64::from(answer) + k * i64::from(step);
        if k == 0 || candidate < 0 {
            continue;
        }
        let candidate = candidate as u32;
        if !wrong.contains(&candidate) {
            wrong.push(candidate);
        }
    }

    let mut options = vec![answer];
    options.extend(wrong);

    SequencePuzzle {
        terms,
        step,
        answer,
        options: shuffle(rng, &options),
    }
}
