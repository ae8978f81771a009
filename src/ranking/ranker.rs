//! Candidate scoring and ordering.
//!
//! A candidate's score is a weighted sum of how well its skills cover the
//! desired skills and its normalized rating:
//!
//! ```text
//! score = skill_weight * skill_similarity(desired, offered)
//!       + rating_weight * clamp(rating / max_rating, 0, 1)
//! ```
//!
//! When the desired input has no phrases at all, the score is the
//! normalized rating alone.
//!
//! Results are ordered by score (descending), with scores closer than
//! `score_epsilon` treated as equal, then by rating (descending), then by
//! creation time (newest first), then by input position.

use std::sync::Arc;

use crate::analysis::synonym::SynonymTable;
use crate::analysis::tokenizer::{SkillInput, SkillTokenizer, TokenSet, split_phrases};
use crate::error::{Result, SkillMatchError};
use crate::ranking::candidate::{Candidate, RankedResult};
use crate::ranking::config::RankingConfig;
use crate::ranking::source::CandidateSource;
use crate::similarity::scorer::{SimilarityBreakdown, explain_similarity, skill_similarity};

/// Scores and orders candidates against desired skills.
///
/// # Examples
///
/// ```
/// use skillmatch::ranking::{Candidate, Ranker};
///
/// let ranker = Ranker::default();
/// let candidates = vec![
///     Candidate::new("a", vec!["Go".to_string()]).with_rating(5.0),
///     Candidate::new("b", vec!["Rust".to_string()]).with_rating(3.0),
/// ];
///
/// let ranked = ranker.rank(&"rust".into(), candidates);
/// assert_eq!(ranked[0].candidate.id, "b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankingConfig,
    tokenizer: SkillTokenizer,
}

impl Ranker {
    /// Create a ranker with a validated configuration and the built-in
    /// synonym table.
    pub fn new(config: RankingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Ranker {
            config,
            tokenizer: SkillTokenizer::default(),
        })
    }

    /// Use a different synonym table for both query and candidate skills.
    pub fn with_synonyms(mut self, synonyms: Arc<SynonymTable>) -> Self {
        self.tokenizer = SkillTokenizer::new(synonyms);
        self
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &SkillTokenizer {
        &self.tokenizer
    }

    /// Desired tokens, or `None` when the input has no phrases and scoring
    /// falls back to rating only.
    fn desired_tokens(&self, desired: &SkillInput) -> Option<TokenSet> {
        let phrases = split_phrases(desired);
        if phrases.is_empty() {
            None
        } else {
            Some(self.tokenizer.tokenize_phrases(&phrases))
        }
    }

    fn offered_tokens(&self, candidate: &Candidate) -> TokenSet {
        self.tokenizer.tokenize_phrases(&candidate.skills)
    }

    fn score_with(&self, desired: Option<&TokenSet>, candidate: &Candidate) -> f64 {
        let rating = self.config.normalize_rating(candidate.rating_or_zero());

        let score = match desired {
            None => rating,
            Some(tokens) => {
                let similarity = skill_similarity(tokens, &self.offered_tokens(candidate));
                self.config.skill_weight * similarity + self.config.rating_weight * rating
            }
        };

        score.clamp(0.0, 1.0)
    }

    /// Score one candidate in `[0, 1]`.
    pub fn score_profile(&self, desired: &SkillInput, candidate: &Candidate) -> f64 {
        self.score_with(self.desired_tokens(desired).as_ref(), candidate)
    }

    /// Per-token account of how a candidate's skills cover the desired
    /// skills. Empty when the desired input has no phrases.
    pub fn explain(&self, desired: &SkillInput, candidate: &Candidate) -> SimilarityBreakdown {
        let desired = self.desired_tokens(desired).unwrap_or_default();
        explain_similarity(&desired, &self.offered_tokens(candidate))
    }

    /// Score every candidate and return them all, best first.
    ///
    /// No candidate is dropped or merged; the output has one entry per
    /// input candidate.
    pub fn rank<I>(&self, desired: &SkillInput, candidates: I) -> Vec<RankedResult>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let desired_tokens = self.desired_tokens(desired);
        match &desired_tokens {
            Some(tokens) => log::debug!("ranking against {} desired tokens", tokens.len()),
            None => log::debug!("empty desired skills, ranking by rating only"),
        }

        let results: Vec<RankedResult> = candidates
            .into_iter()
            .map(|candidate| {
                let score = self.score_with(desired_tokens.as_ref(), &candidate);
                RankedResult::new(candidate, score)
            })
            .collect();

        log::debug!("scored {} candidates", results.len());
        self.order(results)
    }

    /// Fetch candidates from `source` and rank them.
    ///
    /// A failing source yields `CandidatesUnavailable` and no results; a
    /// source with no candidates yields `Ok` with an empty list. Failures
    /// are not retried here.
    pub fn rank_from_source<S>(&self, desired: &SkillInput, source: &S) -> Result<Vec<RankedResult>>
    where
        S: CandidateSource + ?Sized,
    {
        let candidates = source.fetch_candidates().map_err(|e| {
            log::warn!("candidate source failed: {e}");
            match e {
                SkillMatchError::CandidatesUnavailable(_) => e,
                other => SkillMatchError::candidates_unavailable(other.to_string()),
            }
        })?;

        Ok(self.rank(desired, candidates))
    }

    /// Put already-scored results into ranking order.
    ///
    /// Results are sorted by exact score, then cut into runs anchored at
    /// their highest score: a run takes every following result within
    /// `score_epsilon` of that anchor. Inside a run, order is decided by
    /// rating, creation time and input position; runs keep their score
    /// order. No result is ever placed before one that beats it by more
    /// than the epsilon.
    pub fn order(&self, results: Vec<RankedResult>) -> Vec<RankedResult> {
        let epsilon = self.config.score_epsilon;
        let mut indexed: Vec<(usize, RankedResult)> = results.into_iter().enumerate().collect();

        indexed.sort_by(|(_, a), (_, b)| b.score.total_cmp(&a.score));

        let len = indexed.len();
        let mut start = 0;
        for end in 1..=len {
            if end == len || indexed[start].1.score - indexed[end].1.score > epsilon {
                indexed[start..end]
                    .sort_by(|(ia, a), (ib, b)| a.cmp_tie_break(b).then_with(|| ia.cmp(ib)));
                start = end;
            }
        }

        indexed.into_iter().map(|(_, result)| result).collect()
    }
}

/// Score one candidate with the default configuration and synonym table.
pub fn score_profile<I: Into<SkillInput>>(desired: I, candidate: &Candidate) -> f64 {
    Ranker::default().score_profile(&desired.into(), candidate)
}

/// Rank candidates with the default configuration and synonym table.
pub fn rank_candidates<I, C>(desired: I, candidates: C) -> Vec<RankedResult>
where
    I: Into<SkillInput>,
    C: IntoIterator<Item = Candidate>,
{
    Ranker::default().rank(&desired.into(), candidates)
}
