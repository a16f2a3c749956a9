use crate::render::{self, RenderStyle};
use crate::{Direction, DirectionSet, Grid, Position, Word};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where a word ended up in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: Word,
    pub origin: Position,
    pub direction: Direction,
}

impl PlacedWord {
    /// Cells covered by the word paired with the letter each one holds.
    ///
    /// Positions are computed without bounds checks; a placement returned by the
    /// generator always lies inside its grid.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.word.chars().enumerate().map(move |(i, ch)| {
            let x = self.origin.x as i64 + self.direction.dx as i64 * i as i64;
            let y = self.origin.y as i64 + self.direction.dy as i64 * i as i64;
            (Position::new(x as usize, y as usize), ch)
        })
    }
}

/// Problems found by [`Puzzle::verify`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyIssue {
    /// The word cannot be read at its recorded placement
    Misplaced(Word),
    /// The placement uses a direction outside the configured set
    DisallowedDirection(Word, Direction),
    /// The word has no placement record
    Missing(Word),
}

/// A finished grid with the placement of every word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Vec<PlacedWord>,
    pub directions: DirectionSet,
    /// The dimension the search started from, before any growth
    pub initial_dimension: usize,
}

impl Puzzle {
    pub fn dim(&self) -> usize {
        self.grid.dim()
    }

    /// Look up the placement of a word
    pub fn placement(&self, word: &Word) -> Option<&PlacedWord> {
        self.placements.iter().find(|p| &p.word == word)
    }

    /// Check every placement against the grid and the direction set
    pub fn verify(&self) -> Vec<VerifyIssue> {
        let mut issues = Vec::new();
        for placed in &self.placements {
            if !self.directions.contains(placed.direction) {
                issues.push(VerifyIssue::DisallowedDirection(
                    placed.word.clone(),
                    placed.direction,
                ));
            }
            let read = self
                .grid
                .read(placed.origin, placed.direction, placed.word.len());
            if read.as_deref() != Some(placed.word.as_str()) {
                issues.push(VerifyIssue::Misplaced(placed.word.clone()));
            }
        }
        issues
    }

    /// Same as [`Puzzle::verify`], plus a check that every word in `words` was placed
    pub fn verify_words(&self, words: &[Word]) -> Vec<VerifyIssue> {
        let mut issues = self.verify();
        for word in words {
            if self.placement(word).is_none() {
                issues.push(VerifyIssue::Missing(word.clone()));
            }
        }
        issues
    }

    /// The puzzle text, empty cells filled with random letters
    pub fn render_puzzle<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        render::render(&self.grid, true, rng)
    }

    /// The answer key text
    pub fn render_key(&self, style: &RenderStyle) -> String {
        render::render_key(self, style)
    }
}
