//! Corpus index construction and the public generation entry points.
//!
//! [`CorpusIndex::build`] runs the two-pass indexer over raw corpus lines
//! and produces the immutable data model: a collation-sorted vocabulary
//! plus one [`LineEntry`] per input line. Generators only ever read the
//! index, so a built index may be shared freely.

use crate::lexical;
use crate::lookup;
use crate::{coherent, salad, sentence};
use rand::Rng;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Upper bound accepted by [`CorpusIndex::build_coherent_text`].
pub const MAX_COHERENT_LENGTH: usize = 30_000;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("corpus contains no admissible words")]
    EmptyCorpus,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("requested length {requested} exceeds the maximum of {max}")]
    LengthTooLarge { requested: usize, max: usize },
    #[error("requested length must be at least 1")]
    ZeroLength,
}

/// Per-line token record: vocabulary references in original order, the
/// positions whose surface form was capitalized, and the punctuation
/// symbol that followed each position, if any.
///
/// Positions are relative to the line's reference sequence, not to the
/// raw token stream; tokens dropped by script classification or a lookup
/// miss leave no gap.
#[derive(Debug, Clone, Default)]
pub struct LineEntry {
    word_refs: Vec<usize>,
    capitalized: BTreeSet<usize>,
    symbol_after: HashMap<usize, char>,
}

impl LineEntry {
    /// Vocabulary positions referenced by this line, in line order.
    pub fn word_refs(&self) -> &[usize] {
        &self.word_refs
    }

    /// Whether the word at `pos` in the reference sequence was
    /// capitalized in the source line.
    pub fn is_capitalized(&self, pos: usize) -> bool {
        self.capitalized.contains(&pos)
    }

    /// The punctuation symbol recorded after `pos`, if any.
    pub fn symbol_after(&self, pos: usize) -> Option<char> {
        self.symbol_after.get(&pos).copied()
    }

    /// Replay the line into surface tokens: vocabulary word, original
    /// capitalization, trailing symbol appended.
    pub fn render_tokens(&self, words: &[String]) -> Vec<String> {
        self.word_refs
            .iter()
            .enumerate()
            .map(|(pos, &word_index)| {
                let mut token = if self.capitalized.contains(&pos) {
                    lexical::capitalize(&words[word_index])
                } else {
                    words[word_index].clone()
                };
                if let Some(symbol) = self.symbol_after.get(&pos) {
                    token.push(*symbol);
                }
                token
            })
            .collect()
    }
}

/// Summary counters for a built index.
#[derive(Debug, Serialize)]
pub struct IndexStats {
    pub lines: usize,
    pub vocabulary_words: usize,
    pub word_references: usize,
    pub capitalized_marks: usize,
    pub trailing_symbols: usize,
}

/// The immutable corpus index: vocabulary + per-line token records.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    words: Vec<String>,
    lines: Vec<LineEntry>,
}

impl CorpusIndex {
    /// Build an index from raw corpus lines.
    ///
    /// Pass 1 collects the vocabulary: every whitespace token is split
    /// from its trailing punctuation, trimmed of edge symbols, and
    /// admitted lower-cased if its core is Cyrillic. The collected set is
    /// sorted by Russian collation. Pass 2 re-scans each line and records
    /// vocabulary references, capitalization marks, and trailing symbols.
    ///
    /// A token whose normalized form misses the vocabulary lookup is
    /// dropped from that line without error. A corpus that admits no
    /// words at all is rejected.
    pub fn build<I, S>(source_lines: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw_lines: Vec<String> = source_lines
            .into_iter()
            .map(|line| line.as_ref().to_owned())
            .collect();

        // Pass 1: vocabulary
        let mut seen: BTreeSet<String> = BTreeSet::new();
        for line in &raw_lines {
            for token in line.split_whitespace() {
                let split = lexical::split_trailing_symbol(token);
                let core = lexical::trim_edge_symbols(split.text);
                if lexical::is_cyrillic_word(core) {
                    seen.insert(core.to_lowercase());
                }
            }
        }

        let mut words: Vec<String> = seen.into_iter().collect();
        words.sort_by(|a, b| lexical::collate(a, b));
        if words.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }

        // Pass 2: per-line references
        let mut lines = Vec::with_capacity(raw_lines.len());
        for line in &raw_lines {
            let mut entry = LineEntry::default();
            for token in line.split_whitespace() {
                let split = lexical::split_trailing_symbol(token);
                let core = lexical::trim_edge_symbols(split.text);
                if !lexical::is_cyrillic_word(core) {
                    continue;
                }
                let Some(word_index) = lookup::find(&words, &core.to_lowercase()) else {
                    // Lookup miss: drop the token, keep the line aligned.
                    continue;
                };
                let pos = entry.word_refs.len();
                entry.word_refs.push(word_index);
                if lexical::is_capitalized(core) {
                    entry.capitalized.insert(pos);
                }
                if let Some(symbol) = split.symbol {
                    entry.symbol_after.insert(pos, symbol);
                }
            }
            lines.push(entry);
        }

        Ok(Self { words, lines })
    }

    /// The collation-sorted, lower-cased vocabulary.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Per-line token records, one per input line.
    pub fn lines(&self) -> &[LineEntry] {
        &self.lines
    }

    /// Summary counters for reporting.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            lines: self.lines.len(),
            vocabulary_words: self.words.len(),
            word_references: self.lines.iter().map(|l| l.word_refs.len()).sum(),
            capitalized_marks: self.lines.iter().map(|l| l.capitalized.len()).sum(),
            trailing_symbols: self.lines.iter().map(|l| l.symbol_after.len()).sum(),
        }
    }

    /// Generate random text from the vocabulary.
    ///
    /// With `use_sentences` the words are grouped into capitalized,
    /// punctuated sentences; otherwise plain word salad. `use_paragraphs`
    /// composes with either mode and inserts random-length paragraph
    /// breaks.
    pub fn build_random_text(
        &self,
        text_length: usize,
        use_sentences: bool,
        use_paragraphs: bool,
    ) -> Result<String, GenerateError> {
        self.build_random_text_with(&mut rand::rng(), text_length, use_sentences, use_paragraphs)
    }

    /// [`build_random_text`](Self::build_random_text) with a caller-owned RNG.
    pub fn build_random_text_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        text_length: usize,
        use_sentences: bool,
        use_paragraphs: bool,
    ) -> Result<String, GenerateError> {
        if use_sentences {
            if text_length == 0 {
                return Err(GenerateError::ZeroLength);
            }
            Ok(sentence::generate(self, rng, text_length, use_paragraphs))
        } else {
            Ok(salad::generate(self, rng, text_length, use_paragraphs))
        }
    }

    /// Stitch whole corpus lines into coherent text of at least `length`
    /// words. Rejects requests above [`MAX_COHERENT_LENGTH`].
    pub fn build_coherent_text(&self, length: usize) -> Result<String, GenerateError> {
        self.build_coherent_text_with(&mut rand::rng(), length)
    }

    /// [`build_coherent_text`](Self::build_coherent_text) with a
    /// caller-owned RNG.
    pub fn build_coherent_text_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<String, GenerateError> {
        coherent::generate(self, rng, length)
    }

    /// Reconstruct the corpus from the index, one line per input line.
    ///
    /// Lossy by construction: only admitted words survive, case is
    /// restored from the capitalization marks, and each token keeps its
    /// recorded trailing symbol.
    pub fn restore_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            for token in line.render_tokens(&self.words) {
                out.push_str(&token);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}
