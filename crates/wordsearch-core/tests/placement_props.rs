use proptest::prelude::*;
use proptest::sample::subsequence;

use wordsearch_core::{
    dedup_words, initial_dimension, render, Direction, DirectionSet, Generator, GeneratorConfig,
    IntersectBias, Position, Puzzle, Word, KEY_BLANK,
};

// ===================
// Strategies
// ===================

/// Words over a small alphabet so that crossings are common
fn word_strategy() -> impl Strategy<Value = Word> {
    "[A-E]{1,6}".prop_map(|s| Word::new(s).unwrap())
}

fn word_list_strategy() -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec(word_strategy(), 1..=5)
}

fn directions_strategy() -> impl Strategy<Value = DirectionSet> {
    subsequence(Direction::ALL.to_vec(), 1..=8).prop_map(|dirs| DirectionSet::new(dirs).unwrap())
}

fn bias_strategy() -> impl Strategy<Value = IntersectBias> {
    prop_oneof![
        Just(IntersectBias::Avoid),
        Just(IntersectBias::Random),
        Just(IntersectBias::Prefer),
    ]
}

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (directions_strategy(), 2usize..=5, bias_strategy()).prop_map(
        |(directions, size_factor, intersect_bias)| GeneratorConfig {
            directions,
            size_factor,
            intersect_bias,
            max_dimension: None,
        },
    )
}

// ===================
// Property Test Functions
// ===================

/// Every word reads along an allowed direction from some cell.
fn check_every_word_readable(puzzle: &Puzzle, words: &[Word]) -> Result<(), TestCaseError> {
    prop_assert!(puzzle.verify_words(words).is_empty());
    for word in words {
        prop_assert!(
            puzzle.grid.locate(word, puzzle.directions.as_slice()).is_some(),
            "{} not found in\n{}",
            word,
            puzzle.grid
        );
    }
    Ok(())
}

/// Each occupied cell agrees with every placement through it, and nothing else is occupied.
fn check_no_corruption(puzzle: &Puzzle) -> Result<(), TestCaseError> {
    let mut covered: Vec<Position> = Vec::new();
    for placed in &puzzle.placements {
        for (pos, letter) in placed.cells() {
            prop_assert_eq!(puzzle.grid.get(pos), Some(letter));
            covered.push(pos);
        }
    }
    for pos in puzzle.grid.positions() {
        if puzzle.grid.get(pos).is_some() {
            prop_assert!(covered.contains(&pos));
        }
    }
    Ok(())
}

/// The key shows placed letters and blanks, nothing else.
fn check_key_round_trip(puzzle: &Puzzle) -> Result<(), TestCaseError> {
    let mut rng = rand::thread_rng();
    let key = render(&puzzle.grid, false, &mut rng);
    let rows: Vec<Vec<char>> = key
        .lines()
        .map(|line| line.chars().step_by(2).collect())
        .collect();
    prop_assert_eq!(rows.len(), puzzle.dim());
    for pos in puzzle.grid.positions() {
        let shown = rows[pos.y][pos.x];
        match puzzle.grid.get(pos) {
            Some(letter) => prop_assert_eq!(shown, letter),
            None => prop_assert_eq!(shown, KEY_BLANK),
        }
    }
    Ok(())
}

// ===================
// Property Tests
// ===================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generated_puzzles_are_complete(words in word_list_strategy(), config in config_strategy(), seed in any::<u64>()) {
        let puzzle = Generator::seeded(config, seed).generate(&words).unwrap();
        check_every_word_readable(&puzzle, &words)?;
        check_no_corruption(&puzzle)?;
        check_key_round_trip(&puzzle)?;
    }

    #[test]
    fn dimension_never_shrinks(words in word_list_strategy(), config in config_strategy(), seed in any::<u64>()) {
        // The engine sizes the grid after collapsing duplicates
        let start = initial_dimension(&dedup_words(&words), config.size_factor);
        let puzzle = Generator::seeded(config, seed).generate(&words).unwrap();
        prop_assert_eq!(puzzle.initial_dimension, start);
        prop_assert!(puzzle.dim() >= start);
    }

    #[test]
    fn same_seed_same_puzzle(words in word_list_strategy(), config in config_strategy(), seed in any::<u64>()) {
        let a = Generator::seeded(config.clone(), seed).generate(&words).unwrap();
        let b = Generator::seeded(config, seed).generate(&words).unwrap();
        prop_assert_eq!(a, b);
    }
}
