use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building directions or direction sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionError {
    #[error("direction (0, 0) does not move")]
    Zero,

    #[error("direction ({dx}, {dy}) is not a unit step")]
    NotUnit { dx: i32, dy: i32 },

    #[error("direction set is empty")]
    EmptySet,
}

/// A unit step along which a word's letters are laid out.
///
/// `dx` is positive to the right, `dy` is positive downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const UP_RIGHT: Direction = Direction { dx: 1, dy: -1 };
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };
    pub const DOWN_RIGHT: Direction = Direction { dx: 1, dy: 1 };
    pub const DOWN: Direction = Direction { dx: 0, dy: 1 };
    pub const DOWN_LEFT: Direction = Direction { dx: -1, dy: 1 };
    pub const LEFT: Direction = Direction { dx: -1, dy: 0 };
    pub const UP_LEFT: Direction = Direction { dx: -1, dy: -1 };
    pub const UP: Direction = Direction { dx: 0, dy: -1 };

    /// All eight steps, clockwise from up-right
    pub const ALL: [Direction; 8] = [
        Direction::UP_RIGHT,
        Direction::RIGHT,
        Direction::DOWN_RIGHT,
        Direction::DOWN,
        Direction::DOWN_LEFT,
        Direction::LEFT,
        Direction::UP_LEFT,
        Direction::UP,
    ];

    /// Create a direction, rejecting non-unit and zero steps
    pub fn new(dx: i32, dy: i32) -> Result<Self, DirectionError> {
        if dx == 0 && dy == 0 {
            return Err(DirectionError::Zero);
        }
        if !(-1..=1).contains(&dx) || !(-1..=1).contains(&dy) {
            return Err(DirectionError::NotUnit { dx, dy });
        }
        Ok(Self { dx, dy })
    }

    /// The step pointing the opposite way
    pub fn reversed(&self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match (self.dx, self.dy) {
            (1, -1) => "up-right",
            (1, 0) => "right",
            (1, 1) => "down-right",
            (0, 1) => "down",
            (-1, 1) => "down-left",
            (-1, 0) => "left",
            (-1, -1) => "up-left",
            (0, -1) => "up",
            _ => return write!(f, "({}, {})", self.dx, self.dy),
        };
        write!(f, "{}", name)
    }
}

/// Preset direction sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Forward-reading directions only
    #[default]
    Easy,
    /// All eight directions, including backwards ones
    Hard,
}

impl Difficulty {
    pub fn directions(&self) -> DirectionSet {
        match self {
            Difficulty::Easy => DirectionSet::easy(),
            Difficulty::Hard => DirectionSet::hard(),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A non-empty, duplicate-free, ordered set of directions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Direction>", into = "Vec<Direction>")]
pub struct DirectionSet {
    directions: Vec<Direction>,
}

impl DirectionSet {
    /// Build a set from caller-supplied directions, dropping repeats
    pub fn new(directions: impl IntoIterator<Item = Direction>) -> Result<Self, DirectionError> {
        let mut unique: Vec<Direction> = Vec::new();
        for direction in directions {
            let direction = Direction::new(direction.dx, direction.dy)?;
            if !unique.contains(&direction) {
                unique.push(direction);
            }
        }
        if unique.is_empty() {
            return Err(DirectionError::EmptySet);
        }
        Ok(Self { directions: unique })
    }

    /// The first four steps of [`Direction::ALL`]: up-right through down
    pub fn easy() -> Self {
        Self {
            directions: Direction::ALL[..4].to_vec(),
        }
    }

    /// Every direction in [`Direction::ALL`]
    pub fn hard() -> Self {
        Self {
            directions: Direction::ALL.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.directions.contains(&direction)
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.directions.iter().copied()
    }

    pub fn as_slice(&self) -> &[Direction] {
        &self.directions
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::easy()
    }
}

impl TryFrom<Vec<Direction>> for DirectionSet {
    type Error = DirectionError;

    fn try_from(directions: Vec<Direction>) -> Result<Self, Self::Error> {
        Self::new(directions)
    }
}

impl From<DirectionSet> for Vec<Direction> {
    fn from(set: DirectionSet) -> Self {
        set.directions
    }
}
