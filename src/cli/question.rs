//! Question command: print one generated round

use anyhow::{Result, anyhow};
use clap::ValueEnum;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lomdim::content::{
    COMPARISON_MAX, DeckKind, JUNIOR_MATH, NARROW_SPREAD, WIDE_SPREAD, WordCycle, WordRound,
    build_deck, english_level, generate_comparison, generate_english_round,
    generate_feeding_round, generate_options, generate_question, generate_sequence,
    generate_sorting_round, math_challenge_level,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum QuestionKind {
    /// Math challenge question at --level (0-based)
    Math,
    /// Junior addition/subtraction
    Junior,
    /// Next number in a sequence
    Sequence,
    /// Bigger, smaller or equal
    Compare,
    /// Memory board with picture pairs
    Memory,
    /// Memory board with picture/word pairs
    Words,
    /// Memory board with sums and results
    Sums,
    /// English word at --level, pick its picture
    English,
    /// First Hebrew word, pick its picture
    FirstWord,
    /// Items to sort into bins at --level
    Sorting,
    /// How many treats to feed an animal
    Feeding,
}

fn print_word_round(round: &WordRound) {
    println!("{}", round.word.word);
    println!("Options: {}", round.options.join(" "));
    println!("Answer: {}", round.word.emoji);
}

pub fn question_command(kind: QuestionKind, level: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    match kind {
        QuestionKind::Math => {
            let config = math_challenge_level(level);
            let question = generate_question(&mut rng, config);
            let options = generate_options(&mut rng, question.answer, WIDE_SPREAD);
            println!("[{}] {}", config.name, question);
            println!("Options: {:?}", options);
            println!("Answer: {}", question.answer);
        }
        QuestionKind::Junior => {
            let question = generate_question(&mut rng, &JUNIOR_MATH);
            let options = generate_options(&mut rng, question.answer, NARROW_SPREAD);
            println!("{}", question);
            println!("Options: {:?}", options);
            println!("Answer: {}", question.answer);
        }
        QuestionKind::Sequence => {
            let puzzle = generate_sequence(&mut rng);
            let shown: Vec<String> = puzzle.terms.iter().map(u32::to_string).collect();
            println!("{}, ?", shown.join(", "));
            println!("Options: {:?}", puzzle.options);
            println!("Answer: {}", puzzle.answer);
        }
        QuestionKind::Compare => {
            let question = generate_comparison(&mut rng, COMPARISON_MAX);
            println!("{} _ {}", question.left, question.right);
            println!("Answer: {}", question.symbol());
        }
        QuestionKind::Memory | QuestionKind::Words | QuestionKind::Sums => {
            let deck_kind = match kind {
                QuestionKind::Words => DeckKind::Word,
                QuestionKind::Sums => DeckKind::Math,
                _ => DeckKind::Emoji,
            };
            let deck = build_deck(&mut rng, deck_kind);
            println!("Board ({} cards):", deck.len());
            for row in deck.chunks(4) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|card| format!("{:>4} {:<9}", card.id, card.content))
                    .collect();
                println!("  {}", cells.join(" | "));
            }
        }
        QuestionKind::English => {
            let round = generate_english_round(&mut rng, level)
                .ok_or_else(|| anyhow!("No words for level {}", level))?;
            println!("[{}]", english_level(level).name);
            print_word_round(&round);
        }
        QuestionKind::FirstWord => {
            let round = WordCycle::default()
                .next_round(&mut rng)
                .ok_or_else(|| anyhow!("Word list is empty"))?;
            print_word_round(&round);
        }
        QuestionKind::Sorting => {
            let round = generate_sorting_round(&mut rng, level);
            println!("[{}]", round.name);
            for bin in round.bins {
                let items: Vec<&str> = round
                    .items
                    .iter()
                    .filter(|item| item.belongs_in(bin.id))
                    .map(|item| item.emoji)
                    .collect();
                println!("  {} {}: {}", bin.emoji, bin.name, items.join(" "));
            }
            let order: Vec<&str> = round.items.iter().map(|item| item.emoji).collect();
            println!("Items: {}", order.join(" "));
        }
        QuestionKind::Feeding => {
            let round = generate_feeding_round(&mut rng);
            println!(
                "Feed {} {} {} x {}",
                round.animal.emoji, round.animal.name, round.animal.food, round.target
            );
            println!("Food on plate: {}", round.food_on_plate);
        }
    }
    Ok(())
}
