//! Candidate ranking.
//!
//! - [`candidate`] - candidate profiles and ranked results
//! - [`config`] - weights and tolerances
//! - [`ranker`] - scoring and the tie-break chain
//! - [`source`] - where candidates come from

pub mod candidate;
pub mod config;
pub mod ranker;
pub mod source;

pub use candidate::{Candidate, RankedResult};
pub use config::RankingConfig;
pub use ranker::{Ranker, rank_candidates, score_profile};
pub use source::{CandidateSource, FileCandidateSource};
