use crate::progress::PlacementObserver;
use crate::{dedup_words, Direction, DirectionSet, Grid, PlacedWord, Position, Puzzle, Word, WordError};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;
use thiserror::Error;

/// Default ratio of grid cells to word letters
pub const SIZE_FACTOR_DEFAULT: usize = 4;

/// Errors returned by the placement engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("size factor must be at least 1")]
    ZeroSizeFactor,

    #[error("no arrangement fits within the maximum dimension of {limit}")]
    DimensionLimit { limit: usize },

    #[error("generation cancelled")]
    Cancelled,
}

/// How candidate placements are ordered with respect to crossing other words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntersectBias {
    /// Prefer placements that share the fewest cells with placed words
    Avoid,
    /// No preference; take the first candidate in random order
    #[default]
    Random,
    /// Prefer placements that share the most cells with placed words
    Prefer,
}

impl std::fmt::Display for IntersectBias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntersectBias::Avoid => write!(f, "avoid"),
            IntersectBias::Random => write!(f, "random"),
            IntersectBias::Prefer => write!(f, "prefer"),
        }
    }
}

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directions words may be laid along
    pub directions: DirectionSet,
    /// Target ratio of grid cells to word letters, used for the starting size
    pub size_factor: usize,
    /// Ordering preference for crossings
    pub intersect_bias: IntersectBias,
    /// Give up instead of growing past this edge length
    pub max_dimension: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::easy()
    }
}

impl GeneratorConfig {
    pub fn easy() -> Self {
        Self {
            directions: DirectionSet::easy(),
            size_factor: SIZE_FACTOR_DEFAULT,
            intersect_bias: IntersectBias::Random,
            max_dimension: None,
        }
    }

    pub fn hard() -> Self {
        Self {
            directions: DirectionSet::hard(),
            ..Self::easy()
        }
    }
}

/// Starting edge length: `max(ceil(sqrt(letters * size_factor)), longest word)`
pub fn initial_dimension(words: &[Word], size_factor: usize) -> usize {
    let letters: usize = words.iter().map(Word::len).sum();
    let longest = words.iter().map(Word::len).max().unwrap_or(0);
    ceil_sqrt(letters.saturating_mul(size_factor)).max(longest)
}

fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.saturating_mul(root) < n {
        root += 1;
    }
    while root > 0 && (root - 1) * (root - 1) >= n {
        root -= 1;
    }
    root
}

/// Place `words` into a grid along `directions`.
///
/// Thin wrapper over [`Generator`] for callers that only need the grid.
pub fn place<R: Rng + ?Sized>(
    words: &[Word],
    directions: &DirectionSet,
    size_factor: usize,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    let config = GeneratorConfig {
        directions: directions.clone(),
        size_factor,
        ..GeneratorConfig::default()
    };
    let mut generator = Generator::with_rng(config, rng);
    Ok(generator.generate(words)?.grid)
}

/// A start cell plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Candidate {
    origin: Position,
    direction: Direction,
}

/// Working state for one backtracking run at a fixed dimension
struct Search {
    grid: Grid,
    /// `snapshots[k]` is the grid as it was just before word `k` was written
    snapshots: Vec<Grid>,
    placements: Vec<PlacedWord>,
    /// Per word, candidates already committed from the current frontier
    tried: Vec<HashSet<Candidate>>,
    index: usize,
}

impl Search {
    fn new(dim: usize, word_count: usize) -> Self {
        Self {
            grid: Grid::new(dim),
            snapshots: Vec::with_capacity(word_count),
            placements: Vec::with_capacity(word_count),
            tried: vec![HashSet::new(); word_count],
            index: 0,
        }
    }

    fn commit(&mut self, word: &Word, candidate: Candidate) {
        self.snapshots.push(self.grid.clone());
        for (i, letter) in word.chars().enumerate() {
            if let Some(pos) = self.grid.step(candidate.origin, candidate.direction, i) {
                self.grid.set(pos, letter);
            }
        }
        self.tried[self.index].insert(candidate);
        self.placements.push(PlacedWord {
            word: word.clone(),
            origin: candidate.origin,
            direction: candidate.direction,
        });
        self.index += 1;
    }

    /// Undo the most recent placement. Returns false when nothing is placed.
    fn backtrack(&mut self) -> bool {
        self.tried[self.index].clear();
        match self.snapshots.pop() {
            Some(previous) => {
                self.grid = previous;
                self.placements.pop();
                self.index -= 1;
                true
            }
            None => false,
        }
    }
}

/// Word search placement engine
pub struct Generator<R = StdRng> {
    config: GeneratorConfig,
    rng: R,
}

impl Default for Generator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<StdRng> {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::seeded(GeneratorConfig::default(), seed)
    }

    /// Custom configuration plus a fixed seed
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Generator<R> {
    /// Use a caller-supplied random source
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The random source, e.g. for rendering filler with the same stream
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Generate a puzzle from raw strings, validating each one first
    pub fn generate_strs<S: AsRef<str>>(&mut self, words: &[S]) -> Result<Puzzle, GenerateError> {
        let words = words
            .iter()
            .map(|w| Word::new(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.generate(&words)
    }

    /// Place every word, growing the grid until an arrangement exists
    pub fn generate(&mut self, words: &[Word]) -> Result<Puzzle, GenerateError> {
        self.generate_with(words, &mut ())
    }

    /// Like [`Generator::generate`], reporting to and polling `observer`
    pub fn generate_with<O: PlacementObserver + ?Sized>(
        &mut self,
        words: &[Word],
        observer: &mut O,
    ) -> Result<Puzzle, GenerateError> {
        if self.config.size_factor == 0 {
            return Err(GenerateError::ZeroSizeFactor);
        }

        let words = dedup_words(words);
        let total = words.len();
        let initial = initial_dimension(&words, self.config.size_factor);

        if words.is_empty() {
            return Ok(self.finish(Grid::new(0), Vec::new(), initial));
        }

        let mut dim = initial;
        self.check_limit(dim)?;
        debug!(dim = dim, words = total, bias:% = self.config.intersect_bias; "Starting placement");

        let mut search = Search::new(dim, total);
        while search.index < total {
            if observer.is_cancelled() {
                debug!(placed = search.index; "Placement cancelled");
                return Err(GenerateError::Cancelled);
            }

            let word = &words[search.index];
            match self.find_candidate(&search.grid, word, &search.tried[search.index]) {
                Some(candidate) => search.commit(word, candidate),
                None => {
                    if search.backtrack() {
                        trace!(index = search.index; "Backtracking");
                    } else {
                        dim += 1;
                        self.check_limit(dim)?;
                        debug!(dim = dim; "No arrangement fits, growing grid");
                        search = Search::new(dim, total);
                        observer.on_grow(dim);
                    }
                }
            }

            observer.on_step(search.index, total);
        }

        debug!(dim = dim, initial = initial; "Placement complete");
        Ok(self.finish(search.grid, search.placements, initial))
    }

    fn finish(&self, grid: Grid, placements: Vec<PlacedWord>, initial: usize) -> Puzzle {
        Puzzle {
            grid,
            placements,
            directions: self.config.directions.clone(),
            initial_dimension: initial,
        }
    }

    fn check_limit(&self, dim: usize) -> Result<(), GenerateError> {
        match self.config.max_dimension {
            Some(limit) if dim > limit => Err(GenerateError::DimensionLimit { limit }),
            _ => Ok(()),
        }
    }

    /// Pick the next untried candidate for `word`, honouring the intersection bias
    fn find_candidate(
        &mut self,
        grid: &Grid,
        word: &Word,
        tried: &HashSet<Candidate>,
    ) -> Option<Candidate> {
        let mut origins: Vec<Position> = grid.positions().collect();
        self.shuffle(&mut origins);
        let mut directions = self.config.directions.as_slice().to_vec();

        if self.config.intersect_bias == IntersectBias::Random {
            for origin in origins {
                self.shuffle(&mut directions);
                for &direction in &directions {
                    let candidate = Candidate { origin, direction };
                    if !tried.contains(&candidate) && intersections(grid, word, candidate).is_some() {
                        return Some(candidate);
                    }
                }
            }
            return None;
        }

        let mut feasible: Vec<(Candidate, usize)> = Vec::new();
        for origin in origins {
            self.shuffle(&mut directions);
            for &direction in &directions {
                let candidate = Candidate { origin, direction };
                if tried.contains(&candidate) {
                    continue;
                }
                if let Some(count) = intersections(grid, word, candidate) {
                    feasible.push((candidate, count));
                }
            }
        }

        // Stable sorts keep the shuffled order among equal counts
        if self.config.intersect_bias == IntersectBias::Prefer {
            feasible.sort_by_key(|&(_, count)| Reverse(count));
        } else {
            feasible.sort_by_key(|&(_, count)| count);
        }
        feasible.first().map(|&(candidate, _)| candidate)
    }

    /// Shuffle a slice using the generator's random source
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }
}

/// Number of cells `word` would share with placed letters, or `None` if it
/// leaves the grid or collides with a different letter
fn intersections(grid: &Grid, word: &Word, candidate: Candidate) -> Option<usize> {
    // Reject early if the far end is off the grid
    grid.step(candidate.origin, candidate.direction, word.len().saturating_sub(1))?;

    let mut shared = 0;
    for (i, letter) in word.chars().enumerate() {
        let pos = grid.step(candidate.origin, candidate.direction, i)?;
        match grid.get(pos) {
            None => {}
            Some(existing) if existing == letter => shared += 1,
            Some(_) => return None,
        }
    }
    Some(shared)
}
