//! Ordered lookup: exact-match binary search over the collation-sorted
//! vocabulary.

use crate::lexical::collate;

/// Find the position of `target` in a vocabulary sorted by
/// [`collate`](crate::lexical::collate).
///
/// The search comparator must match the sort comparator; ordinal
/// comparison would misplace `ё` and corrupt lookups. `target` is
/// expected to be case-normalized already. Returns `None` on a miss.
pub fn find(words: &[String], target: &str) -> Option<usize> {
    words.binary_search_by(|word| collate(word, target)).ok()
}
