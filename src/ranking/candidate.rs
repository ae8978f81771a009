//! Candidate profiles and ranked results.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A profile to be ranked, supplied by the caller.
///
/// ```
/// use skillmatch::ranking::Candidate;
///
/// let candidate: Candidate = serde_json::from_str(
///     r#"{"id": "u1", "skills": ["Rust", "Go"], "rating": 4.5, "created_at": "2024-05-01T12:00:00Z"}"#,
/// ).unwrap();
/// assert_eq!(candidate.skills.len(), 2);
/// assert_eq!(candidate.rating_or_zero(), 4.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Candidate {
    /// Create a candidate with no rating and no creation time.
    pub fn new<S: Into<String>>(id: S, skills: Vec<String>) -> Self {
        Candidate {
            id: id.into(),
            skills,
            rating: None,
            created_at: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Rating with absent or non-finite values read as 0.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.filter(|r| r.is_finite()).unwrap_or(0.0)
    }

    /// Creation time with an absent value read as the Unix epoch.
    pub fn created_at_or_epoch(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Accepts an RFC 3339 string; anything else decodes to `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => match text.parse::<DateTime<Utc>>() {
            Ok(timestamp) => Some(timestamp),
            Err(e) => {
                log::warn!("ignoring unparseable created_at '{text}': {e}");
                None
            }
        },
        Some(other) => {
            log::warn!("ignoring non-string created_at {other}");
            None
        }
    })
}

/// A candidate paired with its score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub candidate: Candidate,
    pub score: f64,
}

impl RankedResult {
    pub fn new(candidate: Candidate, score: f64) -> Self {
        RankedResult { candidate, score }
    }

    /// Order by the secondary keys only: rating, then recency, both
    /// descending.
    pub(crate) fn cmp_tie_break(&self, other: &Self) -> Ordering {
        other
            .candidate
            .rating_or_zero()
            .total_cmp(&self.candidate.rating_or_zero())
            .then_with(|| {
                other
                    .candidate
                    .created_at_or_epoch()
                    .cmp(&self.candidate.created_at_or_epoch())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults_for_missing_fields() {
        let candidate: Candidate = serde_json::from_str(r#"{"id": "u1"}"#).unwrap();
        assert!(candidate.skills.is_empty());
        assert_eq!(candidate.rating_or_zero(), 0.0);
        assert_eq!(candidate.created_at_or_epoch(), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_unparseable_timestamp_is_dropped() {
        let candidate: Candidate =
            serde_json::from_str(r#"{"id": "u1", "created_at": "last tuesday"}"#).unwrap();
        assert_eq!(candidate.created_at, None);

        let candidate: Candidate =
            serde_json::from_str(r#"{"id": "u1", "created_at": 1714564800}"#).unwrap();
        assert_eq!(candidate.created_at, None);

        let candidate: Candidate =
            serde_json::from_str(r#"{"id": "u1", "created_at": null}"#).unwrap();
        assert_eq!(candidate.created_at, None);
    }

    #[test]
    fn test_timestamp_with_offset() {
        let candidate: Candidate =
            serde_json::from_str(r#"{"id": "u1", "created_at": "2024-05-01T14:00:00+02:00"}"#)
                .unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(candidate.created_at, Some(expected));
    }

    #[test]
    fn test_non_finite_rating_reads_as_zero() {
        let candidate = Candidate::new("u1", vec![]).with_rating(f64::NAN);
        assert_eq!(candidate.rating_or_zero(), 0.0);
    }

    #[test]
    fn test_tie_break_order() {
        let older = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let high = RankedResult::new(Candidate::new("a", vec![]).with_rating(4.0), 0.5);
        let low = RankedResult::new(Candidate::new("b", vec![]).with_rating(2.0), 0.5);
        assert_eq!(high.cmp_tie_break(&low), Ordering::Less);

        let old = RankedResult::new(
            Candidate::new("c", vec![]).with_rating(3.0).with_created_at(older),
            0.5,
        );
        let new = RankedResult::new(
            Candidate::new("d", vec![]).with_rating(3.0).with_created_at(newer),
            0.5,
        );
        assert_eq!(new.cmp_tie_break(&old), Ordering::Less);

        let undated = RankedResult::new(Candidate::new("e", vec![]).with_rating(3.0), 0.5);
        assert_eq!(old.cmp_tie_break(&undated), Ordering::Less);
        assert_eq!(undated.cmp_tie_break(&undated.clone()), Ordering::Equal);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let candidate = Candidate::new("u1", vec!["rust".to_string()]);
        let json = serde_json::to_string(&candidate).unwrap();
        assert_eq!(json, r#"{"id":"u1","skills":["rust"]}"#);
    }
}
