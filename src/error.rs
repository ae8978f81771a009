//! Error types for the skillmatch library.
//!
//! Tokenization and scoring never fail: malformed text degrades to empty
//! token sets and zero scores. Errors only come from the edges of the
//! crate, such as a candidate source that cannot deliver, a bad
//! configuration file, or a malformed synonym table.
//!
//! # Examples
//!
//! ```
//! use skillmatch::error::{Result, SkillMatchError};
//!
//! fn fetch() -> Result<()> {
//!     Err(SkillMatchError::candidates_unavailable("profile store offline"))
//! }
//!
//! match fetch() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for skillmatch operations.
#[derive(Error, Debug)]
pub enum SkillMatchError {
    /// I/O errors (reading candidate, config or synonym files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The collaborator supplying candidates failed.
    ///
    /// Distinct from an empty candidate list, which is a successful fetch.
    #[error("Candidates unavailable: {0}")]
    CandidatesUnavailable(String),

    /// Ranking configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Synonym table could not be built
    #[error("Synonym error: {0}")]
    Synonym(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SkillMatchError.
pub type Result<T> = std::result::Result<T, SkillMatchError>;

impl SkillMatchError {
    /// Create a new candidates-unavailable error.
    pub fn candidates_unavailable<S: Into<String>>(msg: S) -> Self {
        SkillMatchError::CandidatesUnavailable(msg.into())
    }

    /// Create a new invalid config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SkillMatchError::InvalidConfig(msg.into())
    }

    /// Create a new synonym error.
    pub fn synonym<S: Into<String>>(msg: S) -> Self {
        SkillMatchError::Synonym(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SkillMatchError::Other(msg.into())
    }

    /// Whether this error came from the candidate collaborator.
    pub fn is_candidates_unavailable(&self) -> bool {
        matches!(self, SkillMatchError::CandidatesUnavailable(_))
    }
}
