//! Sentence and paragraph generation: random word runs sealed into
//! capitalized sentences by drawn punctuation marks.

use crate::index::CorpusIndex;
use crate::lexical;
use crate::random;
use rand::Rng;
use std::collections::HashSet;

/// Literal multiset of sentence punctuation; duplicated entries encode
/// relative frequency, heavily biased toward periods.
const PUNCTUATION_TABLE: [char; 24] = [
    '.', ',', '?', '.', '?', ',', ',', '.', '.', '.', '.', '.', '.', '!', '!', '.', ';', ':',
    '.', ',', '.', ',', ',', '.',
];

fn is_end_mark(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

/// Generate at least `text_length` words grouped into sentences.
///
/// Word runs of length `[3, 20)` accumulate into a pending sentence
/// buffer. A drawn end mark (`.`, `?`, `!`) seals the buffer into a
/// capitalized sentence; a non-terminal mark is appended to the buffer's
/// last word and accumulation continues into the same sentence. The word
/// budget is checked at run boundaries only, so the output may overshoot
/// `text_length` by up to 19 words.
pub fn generate<R: Rng + ?Sized>(
    index: &CorpusIndex,
    rng: &mut R,
    text_length: usize,
    paragraphs: bool,
) -> String {
    let words = index.words();
    let mut sentences: Vec<String> = Vec::new();
    let mut buffer: Vec<String> = Vec::new();
    let mut total_words = 0;

    while total_words < text_length {
        let run = random::draw(rng, 20, 3);
        for _ in 0..run {
            let word_index = random::draw(rng, words.len().saturating_sub(1), 0);
            buffer.push(words[word_index].clone());
        }
        total_words += run;

        let mark = PUNCTUATION_TABLE[random::draw(rng, PUNCTUATION_TABLE.len(), 0)];
        if is_end_mark(mark) {
            let mut sealed = lexical::capitalize(&buffer.join(" "));
            sealed.push(mark);
            sentences.push(sealed);
            buffer.clear();
        } else if let Some(last) = buffer.last_mut() {
            last.push(mark);
        }
    }

    // A run chain still pending when the budget is reached becomes the
    // final sentence; a trailing non-terminal mark turns into the period.
    if !buffer.is_empty() {
        let mut sealed = buffer.join(" ");
        if sealed.ends_with([',', ';', ':']) {
            sealed.pop();
        }
        sealed.push('.');
        sentences.push(lexical::capitalize(&sealed));
    }

    let splits = if paragraphs {
        paragraph_splits(rng, sentences.len())
    } else {
        HashSet::new()
    };

    let mut out = String::new();
    for (i, sentence) in sentences.iter().enumerate() {
        out.push_str(sentence);
        if i + 1 < sentences.len() {
            out.push(if splits.contains(&i) { '\n' } else { ' ' });
        }
    }
    out
}

/// Compute paragraph split points once over the final sentence count:
/// runs of `[2, 6)` sentences accumulate until the remaining budget is
/// smaller than the next drawn run. A split after sentence `i` replaces
/// the following space with a line break.
fn paragraph_splits<R: Rng + ?Sized>(rng: &mut R, sentence_count: usize) -> HashSet<usize> {
    let mut splits = HashSet::new();
    let mut consumed = 0;
    loop {
        let run = random::draw(rng, 6, 2);
        if sentence_count - consumed < run {
            break;
        }
        consumed += run;
        splits.insert(consumed - 1);
    }
    splits
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_index() -> CorpusIndex {
        CorpusIndex::build([
            "привет мир снова и снова",
            "велик ли мир",
            "ёжик в тумане идёт домой",
        ])
        .unwrap()
    }

    #[test]
    fn test_word_count_within_overshoot_bound() {
        let index = test_index();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = generate(&index, &mut rng, 100, false);
            let count = out.split_whitespace().count();
            assert!((100..120).contains(&count), "count {count} out of bound");
        }
    }

    #[test]
    fn test_sentences_start_uppercase() {
        let index = test_index();
        let mut rng = StdRng::seed_from_u64(11);
        let out = generate(&index, &mut rng, 300, false);
        for sentence in out.split_inclusive(['.', '?', '!']) {
            let trimmed = sentence.trim_start();
            if trimmed.is_empty() {
                continue;
            }
            assert!(
                lexical::is_capitalized(trimmed),
                "sentence not capitalized: {trimmed:?}"
            );
        }
    }

    #[test]
    fn test_sentences_end_with_marks() {
        let index = test_index();
        let mut rng = StdRng::seed_from_u64(12);
        let out = generate(&index, &mut rng, 200, false);
        assert!(out.ends_with(['.', '?', '!']));
        assert!(!out.ends_with([',', ';', ':']));
    }

    #[test]
    fn test_paragraph_mode_breaks_between_sentences() {
        let index = test_index();
        let mut rng = StdRng::seed_from_u64(13);
        let out = generate(&index, &mut rng, 600, true);
        assert!(out.contains('\n'));
        for part in out.split('\n') {
            assert!(!part.is_empty(), "no double breaks expected");
            assert!(part.ends_with(['.', '?', '!']));
        }
    }

    #[test]
    fn test_paragraph_splits_respect_budget() {
        let mut rng = StdRng::seed_from_u64(14);
        let splits = paragraph_splits(&mut rng, 10);
        for &i in &splits {
            assert!(i < 10);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let index = test_index();
        let a = generate(&index, &mut StdRng::seed_from_u64(21), 150, true);
        let b = generate(&index, &mut StdRng::seed_from_u64(21), 150, true);
        assert_eq!(a, b);
    }
}
