//! Basic example of using the word search engine

use wordsearch_core::{parse_word_list, Generator, GeneratorConfig, IntersectBias, RenderStyle};

fn main() {
    // Normalize free text the way a front end would
    let words = match parse_word_list("rust cargo crate borrow trait lifetime") {
        Ok(words) => words,
        Err(err) => {
            eprintln!("Bad word list: {}", err);
            return;
        }
    };

    println!("Generating a hard puzzle for {} words...\n", words.len());
    let config = GeneratorConfig {
        intersect_bias: IntersectBias::Prefer,
        ..GeneratorConfig::hard()
    };
    let mut generator = Generator::with_config(config);
    let puzzle = match generator.generate(&words) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Generation failed: {}", err);
            return;
        }
    };

    println!("Puzzle ({0}x{0}):", puzzle.dim());
    println!("{}\n", puzzle.render_puzzle(generator.rng_mut()));

    println!("Answer key:");
    let style = RenderStyle {
        blank: '·',
        mark_starts: true,
    };
    println!("{}\n", puzzle.render_key(&style));

    // Where did everything go?
    for placed in &puzzle.placements {
        println!("{:<10} at {} going {}", placed.word.as_str(), placed.origin, placed.direction);
    }

    if puzzle.dim() > puzzle.initial_dimension {
        println!(
            "\nGrid grew from {} to {} to fit every word",
            puzzle.initial_dimension,
            puzzle.dim()
        );
    }
}
