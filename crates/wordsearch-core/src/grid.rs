use crate::{Direction, Word};
use serde::{Deserialize, Serialize};

/// A cell coordinate. `x` is the column, `y` the row; origin is top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A square grid of letters and empty cells.
///
/// Cells are stored row-major in a single owned buffer; clones are fully
/// independent snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    dim: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty `dim x dim` grid
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![None; dim * dim],
        }
    }

    /// Edge length
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.dim && pos.y < self.dim
    }

    /// Letter at `pos`, `None` if empty or outside the grid
    pub fn get(&self, pos: Position) -> Option<char> {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    /// Write a letter. Positions outside the grid are ignored.
    pub fn set(&mut self, pos: Position, letter: char) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.cells[idx] = Some(letter);
        }
    }

    /// Number of cells holding a letter
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True when no cell holds a letter
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        // chunks() panics on 0, and a 0x0 grid has no rows anyway
        self.cells.chunks(self.dim.max(1))
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let dim = self.dim;
        (0..dim).flat_map(move |y| (0..dim).map(move |x| Position::new(x, y)))
    }

    /// Move `n` steps from `pos`; `None` when the result leaves the grid
    pub fn step(&self, pos: Position, direction: Direction, n: usize) -> Option<Position> {
        let n = i64::try_from(n).ok()?;
        let x = pos.x as i64 + direction.dx as i64 * n;
        let y = pos.y as i64 + direction.dy as i64 * n;
        if x < 0 || y < 0 {
            return None;
        }
        let next = Position::new(x as usize, y as usize);
        self.contains(next).then_some(next)
    }

    /// Read `len` letters along a line. `None` if the line leaves the grid or crosses an empty cell.
    pub fn read(&self, origin: Position, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| self.step(origin, direction, i).and_then(|p| self.get(p)))
            .collect()
    }

    /// Find a start and direction along which `word` can be read
    pub fn locate(&self, word: &Word, directions: &[Direction]) -> Option<(Position, Direction)> {
        let first = word.chars().next()?;
        self.positions()
            .filter(|&pos| self.get(pos) == Some(first))
            .find_map(|pos| {
                directions
                    .iter()
                    .find(|&&dir| self.read(pos, dir, word.len()).as_deref() == Some(word.as_str()))
                    .map(|&dir| (pos, dir))
            })
    }

    fn index(&self, pos: Position) -> usize {
        pos.y * self.dim + pos.x
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|c| c.unwrap_or('.').to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
