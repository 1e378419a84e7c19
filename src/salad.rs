//! Word-salad generation: uniform draws from the vocabulary, joined with
//! spaces, with optional paragraph breaks.

use crate::index::CorpusIndex;
use crate::random;
use rand::Rng;

/// Produce `text_length` words drawn with replacement from the
/// vocabulary.
///
/// The draw range is `[0, len - 1)`, so the last vocabulary word is
/// never selected; that quirk is part of the observable distribution and
/// is kept as is. With paragraphs enabled, a run length in `[40, 200)`
/// is sampled and a line break is appended to the word ending each run.
pub fn generate<R: Rng + ?Sized>(
    index: &CorpusIndex,
    rng: &mut R,
    text_length: usize,
    paragraphs: bool,
) -> String {
    let words = index.words();
    let mut out = String::new();
    let mut run = random::draw(rng, 200, 40);

    for i in 0..text_length {
        if i > 0 && !out.ends_with('\n') {
            out.push(' ');
        }
        let word_index = random::draw(rng, words.len().saturating_sub(1), 0);
        out.push_str(&words[word_index]);

        if paragraphs {
            if run == 0 {
                out.push('\n');
                run = random::draw(rng, 200, 40);
            } else {
                run -= 1;
            }
        }
    }

    out
}
