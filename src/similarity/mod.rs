//! Fuzzy similarity between skill tokens and skill sets.
//!
//! - [`levenshtein`] - bounded, approximate edit distance
//! - [`scorer`] - token grades, best-match aggregation and explanations

pub mod levenshtein;
pub mod scorer;

pub use levenshtein::bounded_distance;
pub use scorer::{
    SimilarityBreakdown, TokenMatch, explain_similarity, skill_similarity, token_similarity,
};
