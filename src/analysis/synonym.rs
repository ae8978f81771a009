//! Synonym table for skill alias expansion.
//!
//! Maps an alias token (`"js"`, `"k8s"`) to its canonical phrase
//! (`"javascript"`, `"kubernetes"`). Expansion is one level: the canonical
//! phrase is normalized into tokens and added next to the alias, and those
//! tokens are never looked up again.
//!
//! The built-in table is constructed once per process and shared by
//! reference; it is never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use skillmatch::analysis::synonym::SynonymTable;
//!
//! let table = SynonymTable::builtin();
//! assert_eq!(table.canonical("ml"), Some("machine learning"));
//! assert_eq!(table.canonical("rust"), None);
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use ahash::AHashMap;

use crate::analysis::tokenizer::normalize;
use crate::error::{Result, SkillMatchError};

/// Built-in aliases, keyed by normalized token.
pub const DEFAULT_SYNONYMS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("golang", "go"),
    ("rb", "ruby"),
    ("reactjs", "react"),
    ("nodejs", "node"),
    ("vuejs", "vue"),
    ("nextjs", "next"),
    ("postgres", "postgresql"),
    ("psql", "postgresql"),
    ("mongo", "mongodb"),
    ("db", "database"),
    ("sql", "structured query language"),
    ("k8s", "kubernetes"),
    ("aws", "amazon web services"),
    ("gcp", "google cloud platform"),
    ("ci", "continuous integration"),
    ("cd", "continuous delivery"),
    ("ml", "machine learning"),
    ("dl", "deep learning"),
    ("ai", "artificial intelligence"),
    ("nlp", "natural language processing"),
    ("cv", "computer vision"),
    ("llm", "large language model"),
    ("ui", "user interface"),
    ("ux", "user experience"),
    ("qa", "quality assurance"),
    ("seo", "search engine optimization"),
    ("pm", "project management"),
    ("api", "application programming interface"),
];

static BUILTIN: LazyLock<Arc<SynonymTable>> = LazyLock::new(|| {
    let entries = DEFAULT_SYNONYMS
        .iter()
        .map(|&(alias, canonical)| (alias.to_string(), canonical.to_string()))
        .collect();
    Arc::new(SynonymTable { entries })
});

/// Read-only mapping from alias tokens to canonical phrases.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: AHashMap<String, String>,
}

impl SynonymTable {
    /// The process-wide built-in table.
    pub fn builtin() -> Arc<SynonymTable> {
        Arc::clone(&BUILTIN)
    }

    /// An empty table, which disables expansion.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from `(alias, canonical)` pairs.
    ///
    /// Aliases are normalized the same way skill text is, and each must
    /// normalize to exactly one token, otherwise the lookup could never
    /// fire. Canonical phrases must contain at least one token.
    pub fn from_pairs<I, A, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, C)>,
        A: AsRef<str>,
        C: AsRef<str>,
    {
        let mut entries = AHashMap::new();

        for (alias, canonical) in pairs {
            let alias = alias.as_ref();
            let canonical = canonical.as_ref();

            let mut alias_tokens = normalize(alias);
            if alias_tokens.len() != 1 {
                return Err(SkillMatchError::synonym(format!(
                    "alias '{alias}' must be a single token"
                )));
            }
            if normalize(canonical).is_empty() {
                return Err(SkillMatchError::synonym(format!(
                    "canonical phrase for '{alias}' has no tokens"
                )));
            }

            if let Some(key) = alias_tokens.pop() {
                entries.insert(key, canonical.to_string());
            }
        }

        Ok(SynonymTable { entries })
    }

    /// Load a table from a JSON object file.
    ///
    /// ```json
    /// { "js": "javascript", "ml": "machine learning" }
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SkillMatchError::synonym(format!(
                "Failed to read synonym file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let pairs: HashMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            SkillMatchError::synonym(format!(
                "Failed to parse synonym JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let table = Self::from_pairs(pairs)?;
        log::debug!(
            "loaded {} synonym entries from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Canonical phrase for an alias token, if any.
    pub fn canonical(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
