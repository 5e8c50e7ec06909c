//! Document-level aggregation and ranking.

use crate::similarity::fuzzy_match;
use crate::tokenize::{tokenize, tokenize_all};
use crate::types::{EditWeights, Match};

/// Score every document against the query and rank the results.
///
/// Each document's score is the sum of [`fuzzy_match`] scores over the full
/// query-token x document-token cross product. Sums are never normalized by
/// token-set size, so longer documents can out-score shorter ones on token
/// count alone.
///
/// The returned matches are sorted by score descending; the sort is stable,
/// so documents with equal scores keep their input order. Zero-score
/// documents are computed but suppressed from the result.
pub fn rank_documents(
    query: &str,
    documents: &[String],
    threshold: f64,
    weights: &EditWeights,
) -> Vec<Match> {
    let query_tokens = tokenize(query);
    let mut matches: Vec<Match> = tokenize_all(documents)
        .iter()
        .zip(documents)
        .map(|(doc_tokens, document)| {
            let mut doc_score = 0.0;
            for query_token in &query_tokens {
                for doc_token in doc_tokens {
                    doc_score += fuzzy_match(query_token, doc_token, threshold, weights).score;
                }
            }
            Match::new(query, document.as_str(), doc_score)
        })
        .collect();

    // Stable descending sort; total_cmp is safe because scores are sums of
    // finite non-negative terms.
    matches.sort_by(|x, y| y.score.total_cmp(&x.score));
    matches.retain(|m| m.score != 0.0);
    matches
}
