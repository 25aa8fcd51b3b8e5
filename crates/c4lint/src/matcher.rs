//! Matching of system names against a reference vocabulary.
//!
//! Exact matching is case-insensitive. Near misses are ranked with a
//! Ratcliff/Obershelp similarity ratio: twice the number of characters in
//! the recursively found longest common blocks, divided by the total length
//! of both strings. Ranking has no score floor, so a non-exact name always
//! gets suggestions when the vocabulary is not empty.

use std::collections::HashSet;

/// Result of checking a candidate name against the vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub enum NameMatch {
    /// The name appears in the vocabulary, ignoring case.
    Exact,
    /// No exact match, but the best suggestion reaches the similarity threshold.
    Close(Vec<String>),
    /// No exact match and nothing reaches the similarity threshold.
    Unknown(Vec<String>),
}

/// A reference vocabulary of known system names.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    names: Vec<String>,
    lowered: HashSet<String>,
    max_suggestions: usize,
    threshold: f64,
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl NameMatcher {
    /// Creates a matcher over `names` with three suggestions and a 0.6 threshold.
    pub fn new(names: Vec<String>) -> Self {
        let lowered = names.iter().map(|name| name.to_lowercase()).collect();
        Self {
            names,
            lowered,
            max_suggestions: 3,
            threshold: 0.6,
        }
    }

    /// Sets the maximum number of suggestions returned.
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    /// Sets the ratio at or above which a near miss is [`NameMatch::Close`].
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns `true` if the vocabulary has no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The vocabulary, in the order it was given.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` if `candidate` appears in the vocabulary, ignoring case.
    pub fn is_known(&self, candidate: &str) -> bool {
        self.lowered.contains(&candidate.to_lowercase())
    }

    /// Ranks the vocabulary by similarity to `candidate`, best first.
    ///
    /// Ties keep vocabulary order. At most `max_suggestions` entries are
    /// returned.
    pub fn rank(&self, candidate: &str) -> Vec<(&str, f64)> {
        let mut scored: Vec<(&str, f64)> = self
            .names
            .iter()
            .map(|name| (name.as_str(), similarity(candidate, name)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.max_suggestions);
        scored
    }

    /// Ranked suggestions for `candidate`, best first.
    pub fn suggest(&self, candidate: &str) -> Vec<String> {
        self.rank(candidate)
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Checks `candidate` against the vocabulary.
    pub fn check(&self, candidate: &str) -> NameMatch {
        if self.is_known(candidate) {
            return NameMatch::Exact;
        }

        let ranked = self.rank(candidate);
        let close = ranked
            .first()
            .is_some_and(|(_, score)| *score >= self.threshold);
        let suggestions = ranked
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect();

        if close {
            NameMatch::Close(suggestions)
        } else {
            NameMatch::Unknown(suggestions)
        }
    }
}

/// Case-insensitive similarity ratio of two strings, in `0.0..=1.0`.
///
/// Two empty strings are identical and score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Number of characters in the matching blocks of `a` and `b`.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let (start_a, start_b, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_characters(&a[..start_a], &b[..start_b])
        + matching_characters(&a[start_a + len..], &b[start_b + len..])
}

/// Longest common contiguous block as `(start_a, start_b, len)`.
///
/// The earliest block in `a` wins among equally long ones.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb { previous[j] + 1 } else { 0 };
            let len = current[j + 1];
            if len > best.2 {
                best = (i + 1 - len, j + 1 - len, len);
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    best
}
