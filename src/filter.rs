//! Group filtering module
//!
//! Decides per anagram group whether it is emitted. Five independent
//! predicates: target signature, member count bounds, signature length,
//! required characters, excluded characters. A qualifying group is always
//! emitted whole.

use crate::normalize::Signature;
use std::collections::HashSet;
use thiserror::Error;

/// Default member count bounds: an anagram solution needs at least two
/// words, and nothing real exceeds a hundred.
pub const DEFAULT_MIN_COUNT: usize = 2;
pub const DEFAULT_MAX_COUNT: usize = 100;

/// Invalid filter configuration, rejected before any word is processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum group size {min} exceeds maximum {max}")]
    MinAboveMax { min: usize, max: usize },
    #[error("character '{0}' is both included and excluded; no group can match")]
    IncludeExcludeConflict(char),
}

/// Immutable filter configuration, built once from the command line.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    /// Empty signature means no target constraint.
    target: Signature,
    min_count: usize,
    max_count: usize,
    /// 0 means unconstrained.
    exact_length: usize,
    required: HashSet<char>,
    forbidden: HashSet<char>,
}

impl FilterCriteria {
    /// Build criteria from raw option values.
    ///
    /// `target_words` are the non-flag arguments, concatenated and normalized
    /// into the target signature. The min count default drops from 2 to 1
    /// when any target word is given: a single existing word matching an
    /// arbitrary, possibly fictitious, combination is still a valid hit.
    /// An explicit `--min` is never adjusted.
    pub fn new(
        target_words: &[String],
        min_count: Option<usize>,
        max_count: Option<usize>,
        exact_length: Option<usize>,
        required: &str,
        forbidden: &str,
    ) -> Result<Self, ConfigError> {
        let default_min = if target_words.iter().any(|w| !w.is_empty()) {
            1
        } else {
            DEFAULT_MIN_COUNT
        };
        let min_count = min_count.unwrap_or(default_min);
        let max_count = max_count.unwrap_or(DEFAULT_MAX_COUNT);

        if min_count > max_count {
            return Err(ConfigError::MinAboveMax {
                min: min_count,
                max: max_count,
            });
        }

        // Character set arguments go through the same normalization as words,
        // so "-I É" matches signatures containing 'e'. Order is irrelevant.
        let required: HashSet<char> = Signature::of(required).as_str().chars().collect();
        let forbidden: HashSet<char> = Signature::of(forbidden).as_str().chars().collect();
        if let Some(&c) = required.intersection(&forbidden).next() {
            return Err(ConfigError::IncludeExcludeConflict(c));
        }

        let target = Signature::of(&target_words.concat());

        Ok(Self {
            target,
            min_count,
            max_count,
            exact_length: exact_length.unwrap_or(0),
            required,
            forbidden,
        })
    }

    /// The normalized target signature (empty when unconstrained).
    pub fn target(&self) -> &Signature {
        &self.target
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Decide whether the group with this signature and member count is
    /// emitted. Pure and stateless; groups are judged independently.
    pub fn matches(&self, signature: &Signature, member_count: usize) -> bool {
        if !self.target.is_empty() && signature != &self.target {
            return false;
        }
        if member_count < self.min_count || member_count > self.max_count {
            return false;
        }
        if self.exact_length != 0 && signature.char_len() != self.exact_length {
            return false;
        }
        self.required.iter().all(|&c| signature.contains_char(c))
            && !self.forbidden.iter().any(|&c| signature.contains_char(c))
    }
}
