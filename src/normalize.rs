//! Word normalization module
//!
//! Maps a raw dictionary word to its canonical anagram signature: punctuation
//! stripped, accents folded to their base letter, lower-cased, characters
//! sorted. Two words are anagrams iff their signatures are equal.

use std::fmt;

/// Characters that are pure punctuation/separators in word lists.
/// Removed entirely, not replaced by a space.
const PUNCTUATION: &[char] = &['\'', '"', ' ', '.', '&', '-'];

/// Canonical anagram key: sorted, lower-case, accent-stripped characters.
///
/// Ordering and hashing go through the inner string, so signatures sort
/// lexicographically and work directly as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    /// Compute the signature of a raw word.
    ///
    /// Steps, in order: strip punctuation, fold accented variants to their
    /// base letter, lower-case, sort by code point. Characters not covered
    /// by the fold table pass through unchanged; an orthographic mismatch
    /// between two spellings of "the same" word is accepted behavior.
    pub fn of(word: &str) -> Self {
        let mut chars: Vec<char> = word
            .chars()
            .filter(|c| !PUNCTUATION.contains(c))
            .map(fold_accent)
            .flat_map(char::to_lowercase)
            .collect();
        chars.sort_unstable();
        Signature(chars.into_iter().collect())
    }

    /// Wrap an already-normalized string without re-deriving it.
    /// Only test code and the grouper's internal bookkeeping need this.
    #[cfg(test)]
    pub(crate) fn raw(s: &str) -> Self {
        Signature(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Signature length in characters (not bytes): the anagram word length.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_char(&self, c: char) -> bool {
        self.0.contains(c)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fold known accented letter variants to their unaccented base letter.
/// Fixed table, both cases; anything else is returned as-is.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'å' | 'Á' | 'À' | 'Ä' | 'Â' | 'Å' => 'a',
        'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'ø' | 'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Ø' => 'o',
        'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'u',
        'ñ' | 'Ñ' => 'n',
        'ç' | 'Ç' => 'c',
        other => other,
    }
}
