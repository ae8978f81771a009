//! Skill tokenizer.
//!
//! Turns free-text skill input (`"React, TypeScript"`) or a list of skill
//! phrases into a set of lowercase word tokens, expanded with synonyms.
//!
//! The pipeline is:
//!
//! 1. [`split_phrases`] - split text on commas (or take list elements),
//!    trim, drop empty phrases
//! 2. [`normalize`] - lowercase, replace non-word characters with spaces,
//!    split on whitespace
//! 3. union all tokens into a [`TokenSet`]
//! 4. add the tokens of each alias's canonical phrase (one level only)
//!
//! # Examples
//!
//! ```
//! use skillmatch::analysis::tokenizer::tokenize_skills;
//!
//! let tokens = tokenize_skills("React, TypeScript");
//! assert!(tokens.contains("react"));
//! assert!(tokens.contains("typescript"));
//! assert_eq!(tokens.len(), 2);
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::synonym::SynonymTable;

/// A set of normalized skill tokens. Iteration order is not significant.
pub type TokenSet = AHashSet<String>;

/// Anything that is neither a Unicode word character nor whitespace.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern compiles"));

/// Skill input as supplied by a caller: comma-separated text or a list of
/// phrases.
///
/// Deserializes from either a JSON string or a JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillInput {
    /// Comma-separated skill phrases, e.g. `"rust, machine learning"`.
    Text(String),
    /// One skill phrase per element.
    List(Vec<String>),
}

impl Default for SkillInput {
    fn default() -> Self {
        SkillInput::Text(String::new())
    }
}

impl From<&str> for SkillInput {
    fn from(text: &str) -> Self {
        SkillInput::Text(text.to_string())
    }
}

impl From<String> for SkillInput {
    fn from(text: String) -> Self {
        SkillInput::Text(text)
    }
}

impl From<&String> for SkillInput {
    fn from(text: &String) -> Self {
        SkillInput::Text(text.clone())
    }
}

impl From<Vec<String>> for SkillInput {
    fn from(phrases: Vec<String>) -> Self {
        SkillInput::List(phrases)
    }
}

impl From<&[String]> for SkillInput {
    fn from(phrases: &[String]) -> Self {
        SkillInput::List(phrases.to_vec())
    }
}

impl From<Vec<&str>> for SkillInput {
    fn from(phrases: Vec<&str>) -> Self {
        SkillInput::List(phrases.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for SkillInput {
    fn from(phrases: &[&str]) -> Self {
        SkillInput::List(phrases.iter().map(|p| p.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SkillInput {
    fn from(phrases: [&str; N]) -> Self {
        SkillInput::List(phrases.iter().map(|p| p.to_string()).collect())
    }
}

/// Split skill input into trimmed, non-empty phrases.
///
/// This is the only place phrase boundaries are decided; the tokenizer and
/// the ranker's empty-query check both go through it.
pub fn split_phrases(input: &SkillInput) -> Vec<String> {
    let raw: Box<dyn Iterator<Item = &str> + '_> = match input {
        SkillInput::Text(text) => Box::new(text.split(',')),
        SkillInput::List(phrases) => Box::new(phrases.iter().map(String::as_str)),
    };

    raw.map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize one phrase into word tokens.
///
/// Lowercases, replaces every character that is not a word character or
/// whitespace with a space, then splits on whitespace. Order is preserved
/// and duplicates are kept.
pub fn normalize(phrase: &str) -> Vec<String> {
    let lowered = phrase.trim().to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Tokenizer bound to a synonym table.
#[derive(Debug, Clone)]
pub struct SkillTokenizer {
    synonyms: Arc<SynonymTable>,
}

impl Default for SkillTokenizer {
    fn default() -> Self {
        Self::new(SynonymTable::builtin())
    }
}

impl SkillTokenizer {
    /// Create a tokenizer that expands with the given table.
    pub fn new(synonyms: Arc<SynonymTable>) -> Self {
        SkillTokenizer { synonyms }
    }

    /// The synonym table used for expansion.
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Tokenize caller input into an expanded token set.
    pub fn tokenize(&self, input: &SkillInput) -> TokenSet {
        self.tokenize_phrases(&split_phrases(input))
    }

    /// Tokenize already-split phrases into an expanded token set.
    pub fn tokenize_phrases<S: AsRef<str>>(&self, phrases: &[S]) -> TokenSet {
        let tokens: TokenSet = phrases
            .iter()
            .flat_map(|phrase| normalize(phrase.as_ref()))
            .collect();
        self.expand(tokens)
    }

    /// Add the canonical tokens of every alias present in `tokens`.
    ///
    /// Only the tokens passed in are looked up, so canonical tokens are
    /// never expanded a second time.
    pub fn expand(&self, mut tokens: TokenSet) -> TokenSet {
        if self.synonyms.is_empty() {
            return tokens;
        }

        let additions: Vec<String> = tokens
            .iter()
            .filter_map(|token| self.synonyms.canonical(token))
            .flat_map(normalize)
            .collect();
        tokens.extend(additions);
        tokens
    }
}

/// Tokenize skill input with the built-in synonym table.
///
/// Never fails: empty or punctuation-only input yields an empty set.
pub fn tokenize_skills<I: Into<SkillInput>>(input: I) -> TokenSet {
    SkillTokenizer::default().tokenize(&input.into())
}
