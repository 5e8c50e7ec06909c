//! Normalized similarity and the token-pair matcher.
//!
//! Two cheap pre-filters run before the O(m*n) DP (the fast-join trick):
//! token pairs with no character in common score 0 without touching the
//! table, and substring containment scores 1 immediately. Only the genuinely
//! ambiguous pairs pay for the full distance computation.

use crate::distance::edit_distance;
use crate::types::{EditWeights, Match, MatchError};

/// Normalized edit distance: `1 - distance(a, b) / max(chars(a), chars(b))`.
///
/// Fails with [`MatchError::EmptyTokens`] when both inputs are empty, since
/// the longer length is zero. Tokenization never produces empty tokens, so
/// hitting this from the matching pipeline means a precondition was skipped.
///
/// The result is NOT clamped: it can drop below zero when the distance
/// exceeds the longer string's length (heavy transposition weighting does
/// this). Callers that need a strict `[0, 1]` bound must clamp themselves.
pub fn normalized_similarity(a: &str, b: &str, weights: &EditWeights) -> Result<f64, MatchError> {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return Err(MatchError::EmptyTokens);
    }
    Ok(1.0 - edit_distance(a, b, weights) / longest as f64)
}

/// Score a single token pair, gated by `threshold`.
///
/// Policy, in order, short-circuiting:
/// 1. no character in common -> 0.0 (skips the DP entirely);
/// 2. one token is a substring of the other -> 1.0;
/// 3. otherwise the normalized similarity.
///
/// A score below `threshold` is reported as 0.0, but the [`Match`] record is
/// still returned rather than omitted; callers filter on the score.
pub fn fuzzy_match(a: &str, b: &str, threshold: f64, weights: &EditWeights) -> Match {
    let score = pair_score(a, b, weights);
    if score >= threshold {
        Match::new(a, b, score)
    } else {
        Match::new(a, b, 0.0)
    }
}

fn pair_score(a: &str, b: &str, weights: &EditWeights) -> f64 {
    if !shares_any_char(a, b) {
        // Also catches empty tokens, which keeps normalized_similarity's
        // non-empty precondition intact.
        return 0.0;
    }
    if a.contains(b) || b.contains(a) {
        return 1.0;
    }
    let longest = a.chars().count().max(b.chars().count());
    1.0 - edit_distance(a, b, weights) / longest as f64
}

/// Do the two tokens share at least one character?
fn shares_any_char(a: &str, b: &str) -> bool {
    a.chars().any(|c| b.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> EditWeights {
        EditWeights::default()
    }

    #[test]
    fn disjoint_character_sets_short_circuit_to_zero() {
        let m = fuzzy_match("cat", "dog", 0.3, &unit());
        assert_eq!(m.score, 0.0);
    }

    #[test]
    fn substring_short_circuits_to_one() {
        assert_eq!(fuzzy_match("cat", "catalog", 0.3, &unit()).score, 1.0);
        // Either direction.
        assert_eq!(fuzzy_match("catalog", "cat", 0.3, &unit()).score, 1.0);
    }

    #[test]
    fn kitten_sitting_normalized() {
        // Levenshtein distance 3 over the longer length 7.
        let m = fuzzy_match("kitten", "sitting", 0.3, &unit());
        assert!((m.score - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
    }

    #[test]
    fn below_threshold_reports_zero_but_still_returns_the_pair() {
        let m = fuzzy_match("kitten", "sitting", 0.9, &unit());
        assert_eq!(m.query, "kitten");
        assert_eq!(m.target, "sitting");
        assert_eq!(m.score, 0.0);
    }

    #[test]
    fn identical_tokens_score_one() {
        // Caught by the substring rule before the DP runs.
        assert_eq!(fuzzy_match("same", "same", 0.3, &unit()).score, 1.0);
    }

    #[test]
    fn empty_tokens_never_reach_the_normalizer() {
        assert_eq!(fuzzy_match("", "", 0.0, &unit()).score, 0.0);
        assert_eq!(fuzzy_match("", "abc", 0.0, &unit()).score, 0.0);
    }

    #[test]
    fn normalizer_rejects_two_empty_tokens() {
        assert_eq!(
            normalized_similarity("", "", &unit()).unwrap_err(),
            MatchError::EmptyTokens
        );
    }

    #[test]
    fn normalizer_is_unclamped_under_heavy_transposition() {
        // Every path from "ab" to "ba" costs at least 4 here, which exceeds
        // the length 2, so the score goes negative. Preserved, not clamped.
        let w = EditWeights::new(3.0, 3.0, 3.0, 4.0).unwrap();
        let score = normalized_similarity("ab", "ba", &w).unwrap();
        assert!(score < 0.0);
    }

    #[test]
    fn normalized_score_bounded_for_unit_weights() {
        for (a, b) in [("abc", "xbc"), ("abcdef", "az"), ("a", "bcdefg")] {
            let score = normalized_similarity(a, b, &unit()).unwrap();
            assert!((0.0..=1.0).contains(&score), "{} vs {} -> {}", a, b, score);
        }
    }
}
