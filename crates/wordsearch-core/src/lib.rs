//! Word search puzzle engine.
//!
//! Places a list of words into a square grid of letters with a randomized
//! backtracking search, growing the grid when no arrangement fits, and renders
//! the result as a puzzle (random filler) and an answer key (blank filler).
//!
//! ```
//! use wordsearch_core::{Generator, RenderStyle};
//!
//! let mut generator = Generator::with_seed(7);
//! let puzzle = generator.generate_strs(&["CAT", "DOG"]).unwrap();
//! assert!(puzzle.verify().is_empty());
//!
//! let key = puzzle.render_key(&RenderStyle::default());
//! assert_eq!(key.lines().count(), puzzle.dim());
//! ```

pub mod direction;
pub mod generator;
pub mod grid;
pub mod progress;
pub mod puzzle;
pub mod render;
pub mod word;

pub use direction::{Difficulty, Direction, DirectionError, DirectionSet};
pub use generator::{
    initial_dimension, place, GenerateError, Generator, GeneratorConfig, IntersectBias,
    SIZE_FACTOR_DEFAULT,
};
pub use grid::{Grid, Position};
pub use progress::{CancelToken, PlacementObserver, ProgressFn};
pub use puzzle::{PlacedWord, Puzzle, VerifyIssue};
pub use render::{render, render_key, RenderStyle, KEY_BLANK};
pub use word::{dedup_words, parse_word_list, Word, WordError, ALPHABET};
