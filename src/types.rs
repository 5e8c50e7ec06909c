//! The building blocks of the fuzzy matcher.
//!
//! These types define how edit operations, weight configurations, and match
//! results fit together. Everything here is a plain value type: the expensive
//! work lives in `distance` and `rank`, which consume these.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **EditWeights**: every weight is finite and `>= 0`. Enforced once at
//!   construction; the distance engine relies on it to keep DP costs totally
//!   ordered (no NaN ever enters the table).
//! - **Match**: `score` is `0.0` or a value that passed the caller's
//!   threshold gate. Document-level scores are unbounded sums, token-level
//!   scores lie in `[0, 1]`.
//! - **TokenSet**: no empty tokens, no duplicates. Ordered iteration keeps
//!   float summation deterministic across runs.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A set of lower-cased whitespace-delimited tokens.
///
/// `BTreeSet` rather than `HashSet`: document scores are float sums over
/// token pairs, and ordered iteration is what makes reruns bit-identical.
pub type TokenSet = BTreeSet<String>;

/// The elementary edit operations of the weighted DP.
///
/// Carries no payload; used only to select among DP transitions. `Transpose`
/// is only ever considered when the configured transposition weight is
/// positive (Damerau-Levenshtein mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditOp {
    Equal,
    Substitute,
    Insert,
    Delete,
    Transpose,
}

/// One DP cell: the operation that produced it and the accumulated cost.
///
/// Transient per distance computation; the table is discarded once the
/// final cost is read out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdit {
    pub op: EditOp,
    pub cost: f64,
}

/// Cost configuration for the distance engine.
///
/// A transposition weight of exactly zero degenerates the engine to plain
/// Levenshtein distance: the transposition transition is never considered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditWeights {
    pub substitution: f64,
    pub insertion: f64,
    pub deletion: f64,
    pub transposition: f64,
}

impl EditWeights {
    /// Build a validated weight configuration.
    ///
    /// Every weight must be finite and non-negative; NaN and infinities are
    /// rejected alongside negative values so the DP cost order stays total.
    pub fn new(
        substitution: f64,
        insertion: f64,
        deletion: f64,
        transposition: f64,
    ) -> Result<Self, MatchError> {
        for (name, value) in [
            ("substitution", substitution),
            ("insertion", insertion),
            ("deletion", deletion),
            ("transposition", transposition),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidWeight { name, value });
            }
        }
        Ok(EditWeights {
            substitution,
            insertion,
            deletion,
            transposition,
        })
    }

    /// Is the transposition transition enabled?
    #[inline]
    pub fn transposes(&self) -> bool {
        self.transposition > 0.0
    }
}

impl Default for EditWeights {
    /// Unit costs for substitution, insertion, deletion; transposition off.
    fn default() -> Self {
        EditWeights {
            substitution: 1.0,
            insertion: 1.0,
            deletion: 1.0,
            transposition: 0.0,
        }
    }
}

/// A scored pairing of a query string (or token) against a target.
///
/// Produced at two levels: token-level by [`fuzzy_match`] (score in `[0,1]`)
/// and document-level by [`rank_documents`] (score is an unbounded
/// non-negative sum).
///
/// [`fuzzy_match`]: crate::fuzzy_match
/// [`rank_documents`]: crate::rank_documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub query: String,
    pub target: String,
    pub score: f64,
}

impl Match {
    pub fn new(query: impl Into<String>, target: impl Into<String>, score: f64) -> Self {
        Match {
            query: query.into(),
            target: target.into(),
            score,
        }
    }
}

impl fmt::Display for Match {
    /// The CLI line format: `(query, target, score)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.query, self.target, self.score)
    }
}

/// Errors surfaced by the matching pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchError {
    /// A weight failed construction validation (negative, NaN, or infinite).
    InvalidWeight { name: &'static str, value: f64 },
    /// The normalizer was handed two empty tokens, so the longer length is
    /// zero and the score is undefined. Tokenization never emits empty
    /// tokens, so reaching this means a caller bypassed the tokenizer.
    EmptyTokens,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidWeight { name, value } => {
                write!(f, "{} weight must be finite and >= 0, got {}", name, value)
            }
            MatchError::EmptyTokens => {
                write!(f, "cannot normalize the distance of two empty tokens")
            }
        }
    }
}

impl std::error::Error for MatchError {}
