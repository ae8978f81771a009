//! Text analysis for skill matching.
//!
//! Splits skill input into phrases, normalizes phrases into tokens and
//! expands aliases through a synonym table.

pub mod synonym;
pub mod tokenizer;

// Re-export commonly used types
pub use synonym::SynonymTable;
pub use tokenizer::{
    SkillInput, SkillTokenizer, TokenSet, normalize, split_phrases, tokenize_skills,
};
