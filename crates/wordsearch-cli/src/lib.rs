//! CLI logic for the word search generator.
//!
//! Reads the word list (arguments or stdin), merges flags with the
//! configuration file, runs the placement engine on a worker thread and prints
//! the puzzle and optional answer key.

pub mod config;

mod args;

pub use args::{Args, BiasArg};

use std::io::{self, Read, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use log::{debug, info, trace, warn};
use serde::Serialize;
use thiserror::Error;

use wordsearch_core::{
    dedup_words, parse_word_list, CancelToken, Difficulty, GenerateError, Generator,
    GeneratorConfig, PlacedWord, ProgressFn, Puzzle, RenderStyle, Word, WordError,
};

use config::{AppConfig, ConfigError};

/// Errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid word list: {0}")]
    Word(#[from] WordError),

    #[error("Generation failed: {0}")]
    Generate(#[from] GenerateError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No words given; pass words as arguments or '-' to read stdin")]
    NoWords,

    #[error("Generator thread panicked")]
    WorkerPanicked,
}

/// Fully resolved options for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub answers: bool,
    pub decorate: bool,
    pub key_style: RenderStyle,
    pub seed: Option<u64>,
    pub json: bool,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Command-line flags win over the configuration file
    pub fn resolve(args: &Args, config: &AppConfig) -> Self {
        let difficulty = if args.use_hard {
            Difficulty::Hard
        } else if args.use_easy || !config.use_hard {
            Difficulty::Easy
        } else {
            Difficulty::Hard
        };
        let generator = GeneratorConfig {
            directions: difficulty.directions(),
            size_factor: args
                .size_factor
                .map_or(config.size_factor, usize::from),
            intersect_bias: args
                .intersect_bias
                .map_or(config.intersect_bias, Into::into),
            max_dimension: args.max_dimension.or(config.max_dimension),
        };

        Self {
            generator,
            answers: args.answers || config.answers,
            decorate: config.decorate && !args.no_decorate,
            key_style: RenderStyle {
                blank: config.key_blank,
                mark_starts: config.mark_starts,
            },
            seed: args.seed,
            json: args.json,
            timeout: args.timeout.map(Duration::from_secs),
        }
    }
}

/// JSON output shape
#[derive(Debug, Serialize)]
struct Report<'a> {
    dimension: usize,
    initial_dimension: usize,
    puzzle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    placements: &'a [PlacedWord],
}

/// Run the CLI against the process stdin and stdout
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Invalid or missing words
/// - Generation failures (timeout, dimension limit)
/// - I/O errors while reading stdin or writing output
pub fn run(args: &Args) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(args, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the CLI with explicit input and output streams
pub fn execute(args: &Args, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let settings = Settings::resolve(args, &app_config);
    debug!(settings:? = settings; "Resolved settings");

    let words = read_words(&args.words, input)?;
    if words.is_empty() {
        return Err(CliError::NoWords);
    }
    info!(words = words.len(); "Generating puzzle");

    let (puzzle, mut generator) = generate(&settings, words)?;
    info!(dimension = puzzle.dim(), initial = puzzle.initial_dimension; "Puzzle generated");

    let text = puzzle.render_puzzle(generator.rng_mut());
    let key = settings
        .answers
        .then(|| puzzle.render_key(&settings.key_style));

    if settings.json {
        let report = Report {
            dimension: puzzle.dim(),
            initial_dimension: puzzle.initial_dimension,
            puzzle: text,
            key,
            placements: &puzzle.placements,
        };
        serde_json::to_writer_pretty(&mut *output, &report)?;
        writeln!(output)?;
    } else {
        write_text(output, &text, key.as_deref(), settings.decorate)?;
    }

    output.flush()?;
    Ok(())
}

/// Collect words from arguments, or from `input` when the only argument is `-`
pub fn read_words(raw: &[String], input: &mut dyn Read) -> Result<Vec<Word>, CliError> {
    if raw.len() == 1 && raw[0] == "-" {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        return Ok(parse_word_list(&text)?);
    }

    let words = raw
        .iter()
        .map(|w| Word::normalize(w))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(dedup_words(&words))
}

/// Run the engine on a worker thread, cancelling it if the timeout passes
fn generate(settings: &Settings, words: Vec<Word>) -> Result<(Puzzle, Generator), CliError> {
    let mut generator = match settings.seed {
        Some(seed) => Generator::seeded(settings.generator.clone(), seed),
        None => Generator::with_config(settings.generator.clone()),
    };

    let token = CancelToken::new();
    let worker_token = token.clone();
    let (done_tx, done_rx) = mpsc::channel();

    let handle = thread::Builder::new()
        .name("generator".to_string())
        .spawn(move || {
            let mut observer = ProgressFn::new(|placed, total| {
                trace!(placed = placed, total = total; "Placement progress");
            })
            .with_cancel(worker_token);
            let result = generator.generate_with(&words, &mut observer);
            // The receiver may already be gone
            let _ = done_tx.send(());
            result.map(|puzzle| (puzzle, generator))
        })?;

    if let Some(limit) = settings.timeout {
        if let Err(mpsc::RecvTimeoutError::Timeout) = done_rx.recv_timeout(limit) {
            warn!(seconds = limit.as_secs(); "Timed out, cancelling generation");
            token.cancel();
        }
    }

    let result = handle.join().map_err(|_| CliError::WorkerPanicked)?;
    Ok(result?)
}

/// Plain text output, optionally framed with rules
fn write_text(
    output: &mut dyn Write,
    puzzle: &str,
    key: Option<&str>,
    decorate: bool,
) -> io::Result<()> {
    if decorate {
        writeln!(output, "--- Puzzle ---")?;
        writeln!(output, "{}", puzzle)?;
        writeln!(output, "--------------")?;
        if let Some(key) = key {
            writeln!(output, "- Answer Key -")?;
            writeln!(output, "{}", key)?;
            writeln!(output, "--------------")?;
        }
    } else {
        writeln!(output, "{}", puzzle)?;
        if let Some(key) = key {
            // One blank line between puzzle and key
            writeln!(output, "\n{}", key)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordsearch_core::{DirectionSet, IntersectBias};

    fn args(words: &[&str]) -> Args {
        Args {
            words: words.iter().map(|w| w.to_string()).collect(),
            log_level: "off".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_read_words_from_args() {
        let words = read_words(&args(&["cat", "Dog", "CAT"]).words, &mut io::empty()).unwrap();
        let words: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_read_words_from_stdin() {
        let mut input = "apple\nbanana cherry\n\napple".as_bytes();
        let words = read_words(&args(&["-"]).words, &mut input).unwrap();
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_read_words_rejects_invalid() {
        let err = read_words(&args(&["ice cream"]).words, &mut io::empty()).unwrap_err();
        assert!(matches!(err, CliError::Word(WordError::InvalidCharacter { ch: ' ', .. })));
    }

    #[test]
    fn test_settings_flags_override_config() {
        let config = AppConfig {
            size_factor: 7,
            intersect_bias: IntersectBias::Avoid,
            ..AppConfig::default()
        };
        let mut cli = args(&["cat"]);
        let settings = Settings::resolve(&cli, &config);
        assert_eq!(settings.generator.size_factor, 7);
        assert_eq!(settings.generator.intersect_bias, IntersectBias::Avoid);
        assert_eq!(settings.generator.directions, DirectionSet::easy());
        assert!(settings.decorate);

        cli.size_factor = Some(2);
        cli.intersect_bias = Some(BiasArg::Prefer);
        cli.use_hard = true;
        cli.no_decorate = true;
        let settings = Settings::resolve(&cli, &config);
        assert_eq!(settings.generator.size_factor, 2);
        assert_eq!(settings.generator.intersect_bias, IntersectBias::Prefer);
        assert_eq!(settings.generator.directions, DirectionSet::hard());
        assert!(!settings.decorate);
    }

    #[test]
    fn test_settings_easy_flag_overrides_hard_config() {
        let config = AppConfig {
            use_hard: true,
            max_dimension: Some(30),
            ..AppConfig::default()
        };
        let mut cli = args(&["cat"]);
        let settings = Settings::resolve(&cli, &config);
        assert_eq!(settings.generator.directions, DirectionSet::hard());
        assert_eq!(settings.generator.max_dimension, Some(30));

        cli.use_easy = true;
        cli.max_dimension = Some(12);
        let settings = Settings::resolve(&cli, &config);
        assert_eq!(settings.generator.directions, DirectionSet::easy());
        assert_eq!(settings.generator.max_dimension, Some(12));
    }

    /// Distinct words spelled from the index in base 26
    fn many_words(count: usize, len: usize) -> Vec<Word> {
        (0..count)
            .map(|mut n| {
                let text: String = (0..len)
                    .map(|_| {
                        let ch = (b'A' + (n % 26) as u8) as char;
                        n /= 26;
                        ch
                    })
                    .collect();
                Word::new(text).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_timeout_cancels_generation() {
        let mut settings = Settings::resolve(&args(&[]), &AppConfig::default());
        settings.seed = Some(1);
        settings.timeout = Some(Duration::ZERO);

        let result = generate(&settings, many_words(400, 8));
        assert!(matches!(
            result,
            Err(CliError::Generate(GenerateError::Cancelled))
        ));
    }

    #[test]
    fn test_write_text_decorated() {
        let mut out = Vec::new();
        write_text(&mut out, "A B\nC D", Some("A  \n  D"), true).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "--- Puzzle ---\nA B\nC D\n--------------\n- Answer Key -\nA  \n  D\n--------------\n"
        );
    }

    #[test]
    fn test_write_text_plain() {
        let mut out = Vec::new();
        write_text(&mut out, "A B\nC D", Some("A  \n  D"), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A B\nC D\n\nA  \n  D\n");

        let mut out = Vec::new();
        write_text(&mut out, "A", None, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A\n");
    }
}
