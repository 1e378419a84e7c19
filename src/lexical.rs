//! Lexical utilities: script classification, punctuation handling,
//! capitalization, and Russian collation ordering.
//!
//! Everything here is a pure function over surface tokens. The indexer
//! applies these in a fixed order: trailing-punctuation split, then edge
//! symbol trim, then script classification on the remaining core.

use std::cmp::Ordering;

/// Punctuation that may follow a word and is recorded in the line index.
const TRAILING_SYMBOLS: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Symbols stripped from token edges before script classification.
/// Digits are handled separately in [`is_edge_symbol`].
const EDGE_SYMBOLS: [char; 20] = [
    '.', ',', '!', '?', ';', ':', '*', '%', '-', '_', '[', ']', '{', '}', '(', ')', '"', '\'',
    '«', '»',
];

/// A surface token split into its text and an optional trailing
/// punctuation symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitToken<'a> {
    pub text: &'a str,
    pub symbol: Option<char>,
}

/// Check whether a character is one of the recorded trailing symbols.
pub fn is_trailing_symbol(c: char) -> bool {
    TRAILING_SYMBOLS.contains(&c)
}

fn is_edge_symbol(c: char) -> bool {
    c.is_ascii_digit() || EDGE_SYMBOLS.contains(&c)
}

/// Detach a single trailing punctuation symbol from a token.
///
/// Only the final character is considered; `"мир."` splits into
/// `("мир", Some('.'))` while `"мир.."` keeps one inner dot.
pub fn split_trailing_symbol(token: &str) -> SplitToken<'_> {
    match token.chars().next_back() {
        Some(c) if is_trailing_symbol(c) => SplitToken {
            text: &token[..token.len() - c.len_utf8()],
            symbol: Some(c),
        },
        _ => SplitToken {
            text: token,
            symbol: None,
        },
    }
}

/// Strip at most one edge symbol from each end of a token.
///
/// Applied once per end, not recursively, so `"((слово))"` keeps one
/// layer of parentheses and fails script classification.
pub fn trim_edge_symbols(token: &str) -> &str {
    let mut core = token;
    if let Some(first) = core.chars().next() {
        if is_edge_symbol(first) {
            core = &core[first.len_utf8()..];
        }
    }
    if let Some(last) = core.chars().next_back() {
        if is_edge_symbol(last) {
            core = &core[..core.len() - last.len_utf8()];
        }
    }
    core
}

/// A word is admissible iff it is non-empty and every character lies in
/// the Cyrillic block (U+0400..=U+04FF).
pub fn is_cyrillic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| ('\u{0400}'..='\u{04FF}').contains(&c))
}

/// A token is capitalized iff its first character, uppercased, equals
/// itself.
pub fn is_capitalized(token: &str) -> bool {
    match token.chars().next() {
        Some(first) => {
            let mut upper = first.to_uppercase();
            upper.next() == Some(first) && upper.next().is_none()
        }
        None => false,
    }
}

/// Uppercase the first character, leaving the remainder unchanged.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collation rank of a single character in Russian alphabetical order.
///
/// Code point order is almost alphabetical for the Cyrillic block, except
/// that `ё` (U+0451) must rank between `е` and `ж`. Ranks are spaced by
/// two to leave the odd slot for it. Characters outside the Russian core
/// sort after it by code point.
fn collation_key(c: char) -> u32 {
    match c {
        'ё' => 11,
        'Ё' => 11,
        'а'..='я' => (c as u32 - 'а' as u32) * 2,
        'А'..='Я' => (c as u32 - 'А' as u32) * 2,
        _ => 0x1000 + c as u32,
    }
}

/// Locale-aware string comparison for Cyrillic words.
///
/// Byte order would put `ё` after `я`; both the vocabulary sort and the
/// binary search must use this comparator or lookups silently corrupt.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars().map(collation_key).cmp(b.chars().map(collation_key))
}
