//! Bounded edit distance for short skill tokens.
//!
//! Skill matching only needs to know whether two tokens are 0, 1, 2 or
//! "more than 2" edits apart, so instead of filling a full distance matrix
//! this module decides the answer from the length difference:
//!
//! - equal lengths: count mismatched positions (substitutions only)
//! - lengths differ by 1: the shorter token must be the longer one with a
//!   single character deleted, or differ from the longer one's prefix in at
//!   most one position
//! - lengths differ by 2: the shorter token must be the longer one with two
//!   characters deleted
//! - anything else is more than 2
//!
//! This is an approximation of Levenshtein distance. It never reports a
//! distance above the true one for deletions-only pairs, but it ignores
//! mixed edits on equal-length tokens (`"abcd"` vs `"bcda"` is 2 edits, yet
//! reported as more than 2) and the prefix rule can under-report
//! (`"abc"` vs `"abxd"` is 2 edits, reported as 1). Token grades depend on
//! these exact answers.

/// Largest distance this module reports.
pub const MAX_DISTANCE: usize = 2;

/// Approximate edit distance between two tokens.
///
/// Returns `Some(d)` with `d <= MAX_DISTANCE`, or `None` when the tokens are
/// further apart than that. Lengths are measured in characters.
///
/// # Examples
///
/// ```
/// use skillmatch::similarity::levenshtein::bounded_distance;
///
/// assert_eq!(bounded_distance("react", "react"), Some(0));
/// assert_eq!(bounded_distance("react", "raect"), Some(2));
/// assert_eq!(bounded_distance("node", "nodes"), Some(1));
/// assert_eq!(bounded_distance("go", "python"), None);
/// ```
pub fn bounded_distance(a: &str, b: &str) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let (longer, shorter) = if a.len() >= b.len() {
        (&a, &b)
    } else {
        (&b, &a)
    };

    match longer.len() - shorter.len() {
        0 => substitution_distance(longer, shorter),
        1 => {
            if deletes_into(longer, shorter, 1) || prefix_mismatches(longer, shorter) <= 1 {
                Some(1)
            } else {
                None
            }
        }
        2 => deletes_into(longer, shorter, 2).then_some(2),
        _ => None,
    }
}

/// Count mismatched positions of two equal-length tokens, giving up once
/// the count passes `MAX_DISTANCE`.
fn substitution_distance(a: &[char], b: &[char]) -> Option<usize> {
    let mut mismatches = 0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            mismatches += 1;
            if mismatches > MAX_DISTANCE {
                return None;
            }
        }
    }
    Some(mismatches)
}

/// Whether `shorter` is obtained from `longer` by deleting characters,
/// skipping at most `max_skips` characters of `longer` along the way.
///
/// Single greedy pass: a character of `longer` is consumed whenever it
/// matches the next pending character of `shorter`, otherwise it is skipped.
fn deletes_into(longer: &[char], shorter: &[char], max_skips: usize) -> bool {
    let mut matched = 0;
    let mut skips = 0;

    for &ch in longer {
        if matched == shorter.len() {
            break;
        }
        if ch == shorter[matched] {
            matched += 1;
        } else {
            skips += 1;
            if skips > max_skips {
                return false;
            }
        }
    }

    matched == shorter.len()
}

/// Mismatched positions between `shorter` and the same-length prefix of
/// `longer`.
fn prefix_mismatches(longer: &[char], shorter: &[char]) -> usize {
    longer
        .iter()
        .zip(shorter)
        .filter(|(x, y)| x != y)
        .count()
}
