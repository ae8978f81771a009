//! Ranking configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillMatchError};

/// Weights and tolerances used when scoring and ordering candidates.
///
/// The defaults give `0.7 * skill similarity + 0.3 * rating / 5`, with
/// scores closer than `0.001` treated as equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Weight of the skill similarity term.
    pub skill_weight: f64,
    /// Weight of the normalized rating term.
    pub rating_weight: f64,
    /// Rating that normalizes to 1.0.
    pub max_rating: f64,
    /// Scores within this distance fall through to the tie-breakers.
    pub score_epsilon: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            skill_weight: 0.7,
            rating_weight: 0.3,
            max_rating: 5.0,
            score_epsilon: 0.001,
        }
    }
}

impl RankingConfig {
    /// Load a configuration from a JSON file. Missing fields keep their
    /// defaults. The result is validated.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: RankingConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the weights form a convex combination and the scale and
    /// tolerance are usable, so every score stays in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("skill_weight", self.skill_weight),
            ("rating_weight", self.rating_weight),
            ("score_epsilon", self.score_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SkillMatchError::config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if (self.skill_weight + self.rating_weight - 1.0).abs() > 1e-9 {
            return Err(SkillMatchError::config(format!(
                "skill_weight + rating_weight must equal 1, got {}",
                self.skill_weight + self.rating_weight
            )));
        }

        if !self.max_rating.is_finite() || self.max_rating <= 0.0 {
            return Err(SkillMatchError::config(format!(
                "max_rating must be positive, got {}",
                self.max_rating
            )));
        }

        Ok(())
    }

    /// Rating mapped onto `[0, 1]`.
    pub fn normalize_rating(&self, rating: f64) -> f64 {
        (rating / self.max_rating).clamp(0.0, 1.0)
    }
}
