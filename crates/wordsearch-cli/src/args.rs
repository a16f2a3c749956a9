//! Command-line argument definitions.
//!
//! Flags left unset fall back to the configuration file, then to built-in
//! defaults.

use clap::{Parser, ValueEnum};
use wordsearch_core::IntersectBias;

/// Intersection bias as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BiasArg {
    Avoid,
    Random,
    Prefer,
}

impl From<BiasArg> for IntersectBias {
    fn from(bias: BiasArg) -> Self {
        match bias {
            BiasArg::Avoid => IntersectBias::Avoid,
            BiasArg::Random => IntersectBias::Random,
            BiasArg::Prefer => IntersectBias::Prefer,
        }
    }
}

/// Generate word search puzzles
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Words to put into the puzzle, or '-' to read them from stdin
    pub words: Vec<String>,

    /// Use all eight directions, including backwards ones
    #[arg(short = 'H', long, conflicts_with = "use_easy")]
    pub use_hard: bool,

    /// Use forward-reading directions only, even if the config asks for hard
    #[arg(short = 'E', long)]
    pub use_easy: bool,

    /// Starting ratio of grid cells to word letters (grows as necessary)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=99))]
    pub size_factor: Option<u16>,

    /// Bias toward or against word intersections
    #[arg(short = 'b', long, value_enum)]
    pub intersect_bias: Option<BiasArg>,

    /// Also print the answer key
    #[arg(short, long)]
    pub answers: bool,

    /// Don't print decoration lines around puzzle and key
    #[arg(short = 'd', long)]
    pub no_decorate: bool,

    /// Seed for reproducible puzzles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Abort generation after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Fail instead of growing the grid past this edge length
    #[arg(long)]
    pub max_dimension: Option<usize>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
