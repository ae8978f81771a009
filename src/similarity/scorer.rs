//! Token and skill-set similarity.
//!
//! [`token_similarity`] grades a single pair of tokens on a fixed scale;
//! [`skill_similarity`] averages, over the desired tokens, the best grade
//! each one gets against the offered tokens.

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::TokenSet;
use crate::similarity::levenshtein::bounded_distance;

/// Similarity of identical tokens.
pub const EXACT_MATCH: f64 = 1.0;
/// Similarity when one token is a prefix of the other.
pub const PREFIX_MATCH: f64 = 0.7;
/// Similarity at edit distance 1.
pub const ONE_EDIT: f64 = 0.6;
/// Similarity at edit distance 2.
pub const TWO_EDITS: f64 = 0.5;
/// Both tokens must be at least this many characters for the prefix rule.
pub const MIN_PREFIX_LEN: usize = 3;

/// Grade how closely an offered token matches a desired token.
///
/// Returns one of `1.0`, `0.7`, `0.6`, `0.5` or `0.0`. The rules are tried
/// in order: exact match, prefix match, then bounded edit distance.
///
/// # Examples
///
/// ```
/// use skillmatch::similarity::token_similarity;
///
/// assert_eq!(token_similarity("python", "python"), 1.0);
/// assert_eq!(token_similarity("pyth", "python"), 0.7);
/// assert_eq!(token_similarity("kotlin", "kotin"), 0.6);
/// assert_eq!(token_similarity("rust", "java"), 0.0);
/// ```
pub fn token_similarity(desired: &str, offered: &str) -> f64 {
    if desired == offered {
        return EXACT_MATCH;
    }

    let desired_len = desired.chars().count();
    let offered_len = offered.chars().count();
    if desired_len >= MIN_PREFIX_LEN
        && offered_len >= MIN_PREFIX_LEN
        && (desired.starts_with(offered) || offered.starts_with(desired))
    {
        return PREFIX_MATCH;
    }

    match bounded_distance(desired, offered) {
        Some(1) => ONE_EDIT,
        Some(2) => TWO_EDITS,
        _ => 0.0,
    }
}

/// Best match of `token` among `offered`, with its grade.
fn best_match<'a>(token: &str, offered: &'a TokenSet) -> Option<(&'a str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for candidate in offered {
        let score = token_similarity(token, candidate);
        let better = match best {
            None => score > 0.0,
            // Ties go to the lexicographically smaller token.
            Some((current, current_score)) => {
                score > current_score || (score == current_score && candidate.as_str() < current)
            }
        };
        if better {
            best = Some((candidate.as_str(), score));
            if score == EXACT_MATCH {
                break;
            }
        }
    }
    best
}

/// Similarity of an offered skill set to a desired skill set, in `[0, 1]`.
///
/// Each desired token contributes its best grade against the offered
/// tokens; the sum is divided by the number of desired tokens. Desired
/// tokens with no match still count in the denominator, so the measure is
/// not symmetric. Either side empty scores 0.
pub fn skill_similarity(desired: &TokenSet, offered: &TokenSet) -> f64 {
    if desired.is_empty() || offered.is_empty() {
        return 0.0;
    }

    let total: f64 = desired
        .iter()
        .map(|token| {
            offered
                .iter()
                .map(|candidate| token_similarity(token, candidate))
                .fold(0.0, f64::max)
        })
        .sum();

    (total / desired.len() as f64).min(1.0)
}

/// How one desired token was matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMatch {
    pub desired: String,
    /// Best offered token, absent when nothing scored above zero.
    pub offered: Option<String>,
    pub similarity: f64,
}

/// Per-token account of a [`skill_similarity`] score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityBreakdown {
    /// One entry per desired token, sorted by token.
    pub matches: Vec<TokenMatch>,
    /// Same value [`skill_similarity`] returns for the same sets.
    pub score: f64,
}

impl SimilarityBreakdown {
    /// Desired tokens that found no match at all.
    pub fn unmatched(&self) -> impl Iterator<Item = &str> {
        self.matches
            .iter()
            .filter(|m| m.offered.is_none())
            .map(|m| m.desired.as_str())
    }
}

/// Explain a [`skill_similarity`] score token by token.
pub fn explain_similarity(desired: &TokenSet, offered: &TokenSet) -> SimilarityBreakdown {
    let mut tokens: Vec<&String> = desired.iter().collect();
    tokens.sort_unstable();

    let matches = tokens
        .into_iter()
        .map(|token| match best_match(token, offered) {
            Some((best, similarity)) => TokenMatch {
                desired: token.clone(),
                offered: Some(best.to_string()),
                similarity,
            },
            None => TokenMatch {
                desired: token.clone(),
                offered: None,
                similarity: 0.0,
            },
        })
        .collect();

    SimilarityBreakdown {
        matches,
        score: skill_similarity(desired, offered),
    }
}
