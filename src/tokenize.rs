//! Whitespace tokenization into ordered token sets.

use crate::types::TokenSet;

/// Split a string into a set of lower-cased whitespace-delimited tokens.
///
/// `split_whitespace` never yields empty tokens, and the set drops
/// duplicates, so the two TokenSet invariants hold by construction.
pub fn tokenize(input: &str) -> TokenSet {
    input
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Tokenize a batch of documents, one token set per input, order preserved.
pub fn tokenize_all(inputs: &[String]) -> Vec<TokenSet> {
    inputs.iter().map(|input| tokenize(input)).collect()
}
