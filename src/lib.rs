//! Bredogen Text Generation Library
//!
//! Corpus-driven random text generation for Cyrillic texts. A plain-text
//! corpus is indexed once into an immutable vocabulary plus per-line
//! token records; three read-only generators then produce word salad,
//! sentence/paragraph text, or "coherent" text stitched from verbatim
//! corpus lines.
//!
//! # Example
//!
//! ```no_run
//! use bredogen::prelude::*;
//! use std::path::Path;
//!
//! // Read the corpus and build the index
//! let lines = read_lines(Path::new("texts/corpus.txt")).unwrap();
//! let index = CorpusIndex::build(lines).unwrap();
//!
//! // Random sentences grouped into paragraphs
//! let text = index.build_random_text(600, true, true).unwrap();
//! println!("{text}");
//!
//! // Whole corpus lines stitched together
//! let coherent = index.build_coherent_text(200).unwrap();
//! println!("{coherent}");
//! ```

pub mod coherent;
pub mod index;
pub mod lexical;
pub mod lookup;
pub mod random;
pub mod salad;
pub mod sentence;
pub mod source;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::index::{
        CorpusIndex, GenerateError, IndexError, IndexStats, LineEntry, MAX_COHERENT_LENGTH,
    };
    pub use crate::lexical::{
        capitalize, collate, is_capitalized, is_cyrillic_word, split_trailing_symbol,
        trim_edge_symbols, SplitToken,
    };
    pub use crate::lookup::find;
    pub use crate::source::{read_lines, SourceError};
}

// Re-export commonly used types at the crate root
pub use index::{CorpusIndex, GenerateError, IndexError, IndexStats, MAX_COHERENT_LENGTH};
pub use source::SourceError;
