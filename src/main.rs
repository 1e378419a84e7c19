//! Bredogen Text Generation Pipeline
//!
//! Corpus-driven random text generation for Cyrillic texts. Indexes a
//! plain-text corpus and generates word salad, random sentences and
//! paragraphs, or coherent text stitched from verbatim corpus lines.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod coherent;
mod index;
mod lexical;
mod lookup;
mod random;
mod salad;
mod sentence;
mod source;

use index::CorpusIndex;

#[derive(Parser)]
#[command(name = "bredogen")]
#[command(about = "Corpus-driven random text generation for Cyrillic texts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate statistically random text from the corpus vocabulary
    Generate {
        /// Path to the corpus file (one sentence-bearing line per line)
        #[arg(long)]
        corpus: PathBuf,

        /// Number of words to generate
        #[arg(long, default_value = "600")]
        length: usize,

        /// Group words into random-length sentences
        #[arg(long)]
        sentences: bool,

        /// Group output into random-length paragraphs
        #[arg(long)]
        paragraphs: bool,
    },

    /// Stitch verbatim corpus lines into coherent text
    Coherent {
        /// Path to the corpus file
        #[arg(long)]
        corpus: PathBuf,

        /// Minimum number of words to emit (maximum 30000)
        #[arg(long, default_value = "600")]
        length: usize,
    },

    /// Reconstruct the corpus from the index (integrity check)
    Restore {
        /// Path to the corpus file
        #[arg(long)]
        corpus: PathBuf,
    },

    /// Print corpus index statistics
    Stats {
        /// Path to the corpus file
        #[arg(long)]
        corpus: PathBuf,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_index(corpus: &Path) -> Result<CorpusIndex, Box<dyn std::error::Error>> {
    let lines = source::read_lines(corpus)?;
    Ok(CorpusIndex::build(lines)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            corpus,
            length,
            sentences,
            paragraphs,
        } => {
            let index = load_index(&corpus)?;
            let text = index.build_random_text(length, sentences, paragraphs)?;
            println!("{text}");
        }

        Commands::Coherent { corpus, length } => {
            let index = load_index(&corpus)?;
            let text = index.build_coherent_text(length)?;
            println!("{text}");
        }

        Commands::Restore { corpus } => {
            let index = load_index(&corpus)?;
            print!("{}", index.restore_text());
        }

        Commands::Stats { corpus, json } => {
            let index = load_index(&corpus)?;
            let stats = index.stats();

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("=== Corpus Statistics ===");
                println!("Lines: {}", stats.lines);
                println!("Vocabulary words: {}", stats.vocabulary_words);
                println!("Word references: {}", stats.word_references);
                println!("Capitalized marks: {}", stats.capitalized_marks);
                println!("Trailing symbols: {}", stats.trailing_symbols);
            }
        }
    }

    Ok(())
}
