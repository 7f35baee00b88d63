//! Property tests for the round generators

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lomdim::content::{
    ArithmeticConfig, DeckKind, ENGLISH_LEVELS, FEED_TARGET_MAX, MATH_CHALLENGE_LEVELS,
    OPTION_COUNT, Operator, SORTING_LEVELS, WordCycle, build_deck, english_level,
    generate_english_round, generate_feeding_round, generate_options, generate_question,
    generate_sequence, generate_sorting_round, math_challenge_level, sorting_level,
};

proptest! {
    #[test]
    fn division_is_always_exact(seed in any::<u64>(), max in 1u32..200) {
        let config = ArithmeticConfig {
            name: "test",
            max_operand: max,
            second_max: None,
            operators: &[(Operator::Divide, 1)],
            subtrahend_within_answer: false,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let q = generate_question(&mut rng, &config);
        prop_assert_eq!(q.num1, q.num2 * q.answer);
        prop_assert_eq!(q.num1 % q.num2, 0);
    }

    #[test]
    fn large_operands_stay_consistent(
        seed in any::<u64>(),
        max in 60_000u32..=u32::MAX,
        op in prop::sample::select(vec![
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ]),
    ) {
        let operators: &'static [(Operator, u32)] = match op {
            Operator::Add => &[(Operator::Add, 1)],
            Operator::Subtract => &[(Operator::Subtract, 1)],
            Operator::Multiply => &[(Operator::Multiply, 1)],
            Operator::Divide => &[(Operator::Divide, 1)],
        };
        let config = ArithmeticConfig {
            name: "large",
            max_operand: max,
            second_max: None,
            operators,
            subtrahend_within_answer: false,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let q = generate_question(&mut rng, &config);
        prop_assert_eq!(q.operator, op);
        prop_assert_eq!(q.operator.apply(q.num1, q.num2), Some(q.answer));
    }

    #[test]
    fn subtraction_never_negative(seed in any::<u64>(), level in 0usize..MATH_CHALLENGE_LEVELS.len()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let q = generate_question(&mut rng, math_challenge_level(level));
        prop_assert_eq!(q.operator.apply(q.num1, q.num2), Some(q.answer));
    }

    #[test]
    fn question_options_include_answer(seed in any::<u64>(), level in 0usize..5) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let q = generate_question(&mut rng, math_challenge_level(level));
        let options = generate_options(&mut rng, q.answer, 5);
        prop_assert_eq!(options.len(), OPTION_COUNT);
        prop_assert!(options.contains(&q.answer));
    }

    #[test]
    fn sequence_options_are_distinct(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let puzzle = generate_sequence(&mut rng);
        let mut options = puzzle.options.clone();
        options.sort_unstable();
        options.dedup();
        prop_assert_eq!(options.len(), 4);
        prop_assert!(puzzle.options.contains(&puzzle.answer));
    }

    #[test]
    fn english_rounds_match_level(seed in any::<u64>(), level in 0usize..ENGLISH_LEVELS.len()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let round = generate_english_round(&mut rng, level).unwrap();
        prop_assert!(english_level(level).includes(&round.word));
        prop_assert_eq!(round.options.len(), OPTION_COUNT);
        prop_assert_eq!(round.options.iter().filter(|o| **o == round.word.emoji).count(), 1);
    }

    #[test]
    fn first_words_cycle_without_repeats(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cycle = WordCycle::default();
        let mut seen = Vec::new();
        for _ in 0..10 {
            let round = cycle.next_round(&mut rng).unwrap();
            prop_assert!(!seen.contains(&round.word.word));
            seen.push(round.word.word);
        }
    }

    #[test]
    fn sorting_rounds_deal_every_item(seed in any::<u64>(), level in 0usize..SORTING_LEVELS.len()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let round = generate_sorting_round(&mut rng, level);
        let mut dealt = round.items.clone();
        dealt.sort_by_key(|item| item.id);
        prop_assert_eq!(dealt.as_slice(), sorting_level(level).items);
    }

    #[test]
    fn feeding_targets_in_range(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let round = generate_feeding_round(&mut rng);
        prop_assert!((1..=FEED_TARGET_MAX).contains(&round.target));
    }

    #[test]
    fn decks_are_complete(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for kind in [DeckKind::Emoji, DeckKind::Word, DeckKind::Math] {
            let deck = build_deck(&mut rng, kind);
            let mut ids: Vec<_> = deck.iter().map(|c| c.id.clone()).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), deck.len());
        }
    }
}

#[test]
fn test_same_seed_same_round() {
    let a = generate_question(&mut ChaCha8Rng::seed_from_u64(9), math_challenge_level(4));
    let b = generate_question(&mut ChaCha8Rng::seed_from_u64(9), math_challenge_level(4));
    assert_eq!(a, b);
}
