//! Candidate sources.
//!
//! The ranking core never loads profiles itself; a [`CandidateSource`]
//! supplies them. A source that fails reports
//! [`SkillMatchError::CandidatesUnavailable`], which callers can tell apart
//! from a successful fetch of zero candidates.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SkillMatchError};
use crate::ranking::candidate::Candidate;

/// Something that can hand over the current candidate catalog.
pub trait CandidateSource {
    /// Fetch all candidates. Implementations do not retry.
    fn fetch_candidates(&self) -> Result<Vec<Candidate>>;
}

impl CandidateSource for Vec<Candidate> {
    fn fetch_candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.clone())
    }
}

impl CandidateSource for [Candidate] {
    fn fetch_candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.to_vec())
    }
}

/// Candidates stored in a JSON file, either as one array or as JSON Lines.
///
/// ```no_run
/// use skillmatch::ranking::{CandidateSource, FileCandidateSource};
///
/// let source = FileCandidateSource::new("profiles.jsonl");
/// let candidates = source.fetch_candidates().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileCandidateSource {
    path: PathBuf,
}

impl FileCandidateSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileCandidateSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable<E: std::fmt::Display>(&self, what: &str, error: E) -> SkillMatchError {
        SkillMatchError::candidates_unavailable(format!(
            "{} '{}': {}",
            what,
            self.path.display(),
            error
        ))
    }
}

impl CandidateSource for FileCandidateSource {
    fn fetch_candidates(&self) -> Result<Vec<Candidate>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| self.unavailable("failed to read", e))?;

        let candidates = if content.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Candidate>>(&content)
                .map_err(|e| self.unavailable("failed to parse", e))?
        } else {
            let mut candidates = Vec::new();
            for (line_num, line) in content.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let candidate = serde_json::from_str::<Candidate>(line).map_err(|e| {
                    self.unavailable(&format!("failed to parse line {} of", line_num + 1), e)
                })?;
                candidates.push(candidate);
            }
            candidates
        };

        log::info!(
            "loaded {} candidates from {}",
            candidates.len(),
            self.path.display()
        );
        Ok(candidates)
    }
}
