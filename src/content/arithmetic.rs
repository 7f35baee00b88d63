//! Arithmetic question generation
//!
//! Subtraction and division pick the answer first and derive the left
//! operand, so results are never negative and division is always exact.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// `None` for a negative difference, a zero divisor or an inexact quotient
    pub fn apply(&self, left: u32, right: u32) -> Option<u32> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Subtract => left.checked_sub(right),
            Self::Multiply => left.checked_mul(right),
            Self::Divide => {
                if right == 0 || left % right != 0 {
                    None
                } else {
                    Some(left / right)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Largest second operand for products and quotients, so the derived
/// operand still fits in a `u32`
const PRODUCT_FACTOR_MAX: u32 = u16::MAX as u32;

/// Difficulty of one arithmetic level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticConfig {
    pub name: &'static str,
    /// Upper bound for operands (and for derived answers/quotients)
    pub max_operand: u32,
    /// Upper bound for the second operand, `max_operand` when unset
    pub second_max: Option<u32>,
    /// Operators with their relative weights
    pub operators: &'static [(Operator, u32)],
    /// Subtraction never takes away more than the answer
    pub subtrahend_within_answer: bool,
}

impl ArithmeticConfig {
    pub fn has_operator(&self, operator: Operator) -> bool {
        self.operators
            .iter()
            .any(|(op, weight)| *op == operator && *weight > 0)
    }

    /// Operand bounds for `operator`, shrunk so the derived operand cannot
    /// overflow
    fn bounds(&self, operator: Operator) -> (u32, u32) {
        let first = self.max_operand.max(1);
        let second = self.second_max.unwrap_or(self.max_operand).max(1);
        match operator {
            Operator::Add | Operator::Subtract => {
                let second = second.min(u32::MAX / 2);
                (first.min(u32::MAX - second), second)
            }
            Operator::Multiply | Operator::Divide => {
                let second = second.min(PRODUCT_FACTOR_MAX);
                (first.min(u32::MAX / second), second)
            }
        }
    }
}

/// Math challenge levels, easiest first
pub static MATH_CHALLENGE_LEVELS: &[ArithmeticConfig] = &[
    ArithmeticConfig {
        name: "קל",
        max_operand: 10,
        second_max: None,
        operators: &[(Operator::Add, 1), (Operator::Subtract, 1)],
        subtrahend_within_answer: false,
    },
    ArithmeticConfig {
        name: "בינוני",
        max_operand: 20,
        second_max: None,
        operators: &[(Operator::Add, 1), (Operator::Subtract, 1)],
        subtrahend_within_answer: false,
    },
    ArithmeticConfig {
        name: "כפל",
        max_operand: 10,
        second_max: None,
        operators: &[(Operator::Multiply, 1)],
        subtrahend_within_answer: false,
    },
    ArithmeticConfig {
        name: "חילוק",
        max_operand: 10,
        second_max: None,
        operators: &[(Operator::Divide, 1)],
        subtrahend_within_answer: false,
    },
    ArithmeticConfig {
        name: "מאתגר",
        max_operand: 100,
        second_max: None,
        operators: &[
            (Operator::Add, 1),
            (Operator::Subtract, 1),
            (Operator::Multiply, 1),
        ],
        subtrahend_within_answer: false,
    },
];

/// Picture-counting math for the younger zone: mostly addition, and a
/// subtraction never leaves a "take away more than you have" picture
pub static JUNIOR_MATH: ArithmeticConfig = ArithmeticConfig {
    name: "חשבון",
    max_operand: 5,
    second_max: Some(5),
    operators: &[(Operator::Add, 7), (Operator::Subtract, 3)],
    subtrahend_within_answer: true,
};

/// Level config for a 0-based level index, clamped to the hardest level
pub fn math_challenge_level(level: usize) -> &'static ArithmeticConfig {
    let last = MATH_CHALLENGE_LEVELS.len() - 1;
    &MATH_CHALLENGE_LEVELS[level.min(last)]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub num1: u32,
    pub num2: u32,
    pub operator: Operator,
    pub answer: u32,
}

impl Question {
    pub fn is_correct(&self, answer: u32) -> bool {
        self.answer == answer
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = ?", self.num1, self.operator, self.num2)
    }
}

/// Generate one question for `config`.
///
/// The operator is drawn by weight. Operand bounds are shrunk when needed so
/// sums and products always fit in a `u32`.
pub fn generate_question<R: Rng + ?Sized>(rng: &mut R, config: &ArithmeticConfig) -> Question {
    let operator = config
        .operators
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(op, _)| *op)
        .unwrap_or(Operator::Add);
    let (max, second_max) = config.bounds(operator);

    let (num1, num2, answer) = match operator {
        Operator::Add => {
            let a = rng.gen_range(1..=max);
            let b = rng.gen_range(1..=second_max);
            (a, b, a + b)
        }
        Operator::Subtract => {
            let answer = rng.gen_range(1..=max);
            let subtrahend_max = if config.subtrahend_within_answer {
                second_max.min(answer)
            } else {
                second_max
            };
            let subtrahend = rng.gen_range(1..=subtrahend_max);
            (answer + subtrahend, subtrahend, answer)
        }
        Operator::Multiply => {
            let a = rng.gen_range(1..=max);
            let b = rng.gen_range(1..=second_max);
            (a, b, a * b)
        }
        Operator::Divide => {
            let divisor = rng.gen_range(1..=second_max);
            let quotient = rng.gen_range(1..=max);
            (divisor * quotient, divisor, quotient)
        }
    };

    Question {
        num1,
        num2,
        operator,
        answer,
    }
}
