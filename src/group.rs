//! Anagram grouping module
//!
//! Partitions the corpus by signature: every word lands in the bucket for
//! its normalized character combination, so each bucket is one anagram
//! solution candidate.

use crate::normalize::Signature;
use ahash::RandomState;
use hashbrown::HashMap;

/// Signature-keyed anagram groups.
///
/// Members keep the order they were inserted in; the loader contract hands
/// us a deduplicated, sorted corpus, so members end up sorted too. The map
/// itself is unordered; `iter_sorted` gives a deterministic view.
pub struct AnagramGroups {
    groups: HashMap<Signature, Vec<String>, RandomState>,
}

impl AnagramGroups {
    /// Group a word sequence by signature.
    ///
    /// The input must already be deduplicated; this pass never drops or
    /// merges words, it only buckets them.
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut groups: HashMap<Signature, Vec<String>, RandomState> =
            HashMap::with_hasher(RandomState::new());

        for word in words {
            let signature = Signature::of(&word);
            groups.entry(signature).or_default().push(word);
        }

        Self { groups }
    }

    /// Number of distinct signatures.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, signature: &Signature) -> Option<&[String]> {
        self.groups.get(signature).map(Vec::as_slice)
    }

    /// Groups sorted lexicographically by signature, for deterministic
    /// output order.
    pub fn iter_sorted(&self) -> Vec<(&Signature, &[String])> {
        let mut entries: Vec<_> = self
            .groups
            .iter()
            .map(|(sig, members)| (sig, members.as_slice()))
            .collect();
        entries.sort_unstable_by_key(|(sig, _)| *sig);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_groups_anagrams_together() {
        let groups = AnagramGroups::build(corpus(&["pot", "pots", "spot", "stop", "tops"]));

        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups.get(&Signature::raw("opst")).unwrap(),
            &["pots", "spot", "stop", "tops"]
        );
        assert_eq!(groups.get(&Signature::raw("opt")).unwrap(), &["pot"]);
    }

    #[test]
    fn test_member_order_follows_input() {
        let groups = AnagramGroups::build(corpus(&["tops", "pots", "stop"]));
        assert_eq!(
            groups.get(&Signature::raw("opst")).unwrap(),
            &["tops", "pots", "stop"]
        );
    }

    #[test]
    fn test_mixed_case_and_accents_share_a_bucket() {
        let groups = AnagramGroups::build(corpus(&["Léon", "Noel", "lone"]));
        assert_eq!(
            groups.get(&Signature::raw("elno")).unwrap(),
            &["Léon", "Noel", "lone"]
        );
    }

    #[test]
    fn test_iter_sorted_is_lexicographic() {
        let groups = AnagramGroups::build(corpus(&["tops", "pot", "ab", "ba"]));
        let sigs: Vec<&str> = groups
            .iter_sorted()
            .iter()
            .map(|(sig, _)| sig.as_str())
            .collect();
        assert_eq!(sigs, vec!["ab", "opst", "opt"]);
    }

    #[test]
    fn test_empty_corpus() {
        let groups = AnagramGroups::build(Vec::new());
        assert!(groups.is_empty());
    }
}
