//! Text rendering of finished grids.
//!
//! Output is one line per row, cells separated by single spaces. The grid is
//! rendered in the frame it was built in: row `y` is line `y`.

use crate::{Grid, Position, Puzzle, ALPHABET};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Placeholder for empty cells in the plain answer key
pub const KEY_BLANK: char = ' ';

/// How the answer key is drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Character printed for cells no word passes through
    pub blank: char,
    /// Lowercase every letter except the first letter of each word
    pub mark_starts: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            blank: KEY_BLANK,
            mark_starts: false,
        }
    }
}

/// A uniformly random filler letter
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    let letters = ALPHABET.as_bytes();
    letters[rng.gen_range(0..letters.len())] as char
}

/// Render a grid.
///
/// With `fill` every empty cell gets an independent random letter; without it
/// empty cells become [`KEY_BLANK`]. The grid is never modified.
pub fn render<R: Rng + ?Sized>(grid: &Grid, fill: bool, rng: &mut R) -> String {
    render_cells(grid, |_, cell| match cell {
        Some(ch) => ch,
        None if fill => random_letter(&mut *rng),
        None => KEY_BLANK,
    })
}

/// Render the answer key of a puzzle using `style`
pub fn render_key(puzzle: &Puzzle, style: &RenderStyle) -> String {
    let starts: Vec<Position> = puzzle.placements.iter().map(|p| p.origin).collect();
    render_cells(&puzzle.grid, |pos, cell| match cell {
        Some(ch) if style.mark_starts && !starts.contains(&pos) => ch.to_ascii_lowercase(),
        Some(ch) => ch,
        None => style.blank,
    })
}

fn render_cells(grid: &Grid, mut draw: impl FnMut(Position, Option<char>) -> char) -> String {
    let mut out = String::with_capacity(grid.dim() * grid.dim() * 2);
    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        for (x, &cell) in row.iter().enumerate() {
            if x > 0 {
                out.push(' ');
            }
            out.push(draw(Position::new(x, y), cell));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, DirectionSet, PlacedWord, Word};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn puzzle() -> Puzzle {
        let mut grid = Grid::new(3);
        let placed = PlacedWord {
            word: Word::new("HEY").unwrap(),
            origin: Position::new(0, 1),
            direction: Direction::RIGHT,
        };
        for (pos, ch) in placed.cells() {
            grid.set(pos, ch);
        }
        Puzzle {
            grid,
            placements: vec![placed],
            directions: DirectionSet::easy(),
            initial_dimension: 3,
        }
    }

    #[test]
    fn test_render_key_blanks() {
        let puzzle = puzzle();
        let mut rng = StdRng::seed_from_u64(1);
        let key = render(&puzzle.grid, false, &mut rng);
        assert_eq!(key, "     \nH E Y\n     ");
        assert_eq!(puzzle.render_key(&RenderStyle::default()), key);
    }

    #[test]
    fn test_render_fill_keeps_letters() {
        let puzzle = puzzle();
        let mut rng = StdRng::seed_from_u64(7);
        let text = render(&puzzle.grid, true, &mut rng);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "H E Y");
        for line in &lines {
            let cells: Vec<&str> = line.split(' ').collect();
            assert_eq!(cells.len(), 3);
            for cell in cells {
                assert_eq!(cell.len(), 1);
                assert!(ALPHABET.contains(cell));
            }
        }
    }

    #[test]
    fn test_render_does_not_mutate() {
        let puzzle = puzzle();
        let before = puzzle.grid.clone();
        let mut rng = StdRng::seed_from_u64(3);
        let _ = render(&puzzle.grid, true, &mut rng);
        assert_eq!(puzzle.grid, before);
    }

    #[test]
    fn test_render_key_marks_starts() {
        let puzzle = puzzle();
        let style = RenderStyle {
            blank: '·',
            mark_starts: true,
        };
        assert_eq!(puzzle.render_key(&style), "· · ·\nH e y\n· · ·");
    }

    #[test]
    fn test_render_empty_grid() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(render(&Grid::new(0), true, &mut rng), "");
    }
}
