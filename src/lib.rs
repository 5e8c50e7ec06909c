//! Weighted fuzzy token matching and document ranking.
//!
//! This crate computes approximate similarity between strings with a
//! weighted Levenshtein / Damerau-Levenshtein edit distance and uses it to
//! rank documents by how well their tokens match a query's tokens. The
//! matching strategy follows the fast-join family of token-based similarity
//! joins: cheap short-circuit rules filter out clearly-matching and
//! clearly-non-matching token pairs before any O(m*n) DP work runs.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     ┌────────────────┐     ┌──────────────┐
//! │  distance.rs  │◀────│ similarity.rs  │◀────│   rank.rs    │
//! │(edit_distance)│     │ (fuzzy_match,  │     │ (rank_       │
//! │               │     │  normalized_   │     │  documents)  │
//! │               │     │  similarity)   │     │              │
//! └───────────────┘     └────────────────┘     └──────────────┘
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                         types.rs                         │
//! │   (EditOp, WeightedEdit, EditWeights, Match, TokenSet)   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! `tokenize.rs` feeds `rank.rs` with lower-cased whitespace token sets.
//!
//! # Usage
//!
//! ```
//! use tokmatch::{rank_documents, EditWeights};
//!
//! let documents = vec![
//!     "the quick fox jumps".to_string(),
//!     "lazy dog sleeps".to_string(),
//! ];
//! let weights = EditWeights::default();
//! let ranked = rank_documents("quick brown fox", &documents, 0.3, &weights);
//! assert_eq!(ranked[0].target, "the quick fox jumps");
//! ```

mod distance;
mod rank;
mod similarity;
mod tokenize;
mod types;

// Re-exports for public API
pub use distance::edit_distance;
pub use rank::rank_documents;
pub use similarity::{fuzzy_match, normalized_similarity};
pub use tokenize::{tokenize, tokenize_all};
pub use types::{EditOp, EditWeights, Match, MatchError, TokenSet, WeightedEdit};
