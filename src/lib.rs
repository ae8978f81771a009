//! # skillmatch
//!
//! Skill-aware matching and ranking of candidate profiles.
//!
//! ## Features
//!
//! - Comma-separated or list skill input, normalized into token sets
//! - Alias expansion through a synonym table (`js` also matches `javascript`)
//! - Typo-tolerant token similarity with a bounded edit distance
//! - Ranking by weighted skill coverage and rating, with stable tie-breaks
//!
//! ```
//! use skillmatch::{Candidate, rank_candidates};
//!
//! let candidates = vec![
//!     Candidate::new("ana", vec!["Python".into(), "Django".into()]).with_rating(4.0),
//!     Candidate::new("bo", vec!["JavaScript".into()]).with_rating(5.0),
//! ];
//!
//! let ranked = rank_candidates("python", candidates);
//! assert_eq!(ranked[0].candidate.id, "ana");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod ranking;
pub mod similarity;

pub use analysis::{SkillInput, SynonymTable, TokenSet, tokenize_skills};
pub use error::{Result, SkillMatchError};
pub use ranking::{Candidate, RankedResult, Ranker, RankingConfig, rank_candidates, score_profile};
pub use similarity::{skill_similarity, token_similarity};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
