use chrono::{DateTime, TimeZone, Utc};

use skillmatch::analysis::tokenize_skills;
use skillmatch::error::Result;
use skillmatch::ranking::{Candidate, RankedResult, Ranker, RankingConfig};
use skillmatch::similarity::{skill_similarity, token_similarity};
use skillmatch::{TokenSet, rank_candidates, score_profile};

const EPSILON: f64 = 0.001;

fn at(year: i32, month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap()
}

fn profile(id: &str, skills: &[&str], rating: f64) -> Candidate {
    Candidate::new(id, skills.iter().map(|s| s.to_string()).collect()).with_rating(rating)
}

fn ids(results: &[RankedResult]) -> Vec<&str> {
    results.iter().map(|r| r.candidate.id.as_str()).collect()
}

fn tokens(items: &[&str]) -> TokenSet {
    items.iter().map(|s| s.to_string()).collect()
}

/// A may precede B when it scores clearly higher, or scores tie and it wins
/// on rating, or ratings tie too and it is at least as recent.
fn may_precede(a: &RankedResult, b: &RankedResult) -> bool {
    if a.score > b.score + EPSILON {
        return true;
    }
    if (a.score - b.score).abs() > EPSILON {
        return false;
    }
    let (ra, rb) = (a.candidate.rating_or_zero(), b.candidate.rating_or_zero());
    if ra != rb {
        return ra > rb;
    }
    a.candidate.created_at_or_epoch() >= b.candidate.created_at_or_epoch()
}

/// Scores are either exactly equal or at least 0.05 apart.
fn team_catalog() -> Vec<Candidate> {
    vec![
        profile("go-junior", &["Go"], 1.0),
        profile("rust-only-2020", &["Rust"], 4.0).with_created_at(at(2020, 6)),
        profile("full-match", &["Rust", "Python", "SQL"], 5.0),
        profile("rust-only-top", &["Rust"], 5.0),
        profile("python-2024", &["Python"], 4.0).with_created_at(at(2024, 3)),
        profile("rust-only-2024", &["Rust"], 4.0).with_created_at(at(2024, 3)),
        profile("go-unrated", &["Go"], 0.0),
        Candidate::new("no-skills", vec![]),
    ]
}

#[test]
fn tokenizes_comma_separated_skills() {
    assert_eq!(
        tokenize_skills("React, TypeScript"),
        tokens(&["react", "typescript"])
    );
}

#[test]
fn synonym_expansion_keeps_alias() {
    let expanded = tokenize_skills("js");
    assert!(expanded.contains("js"));
    assert!(expanded.contains("javascript"));
}

#[test]
fn token_similarity_grades() {
    assert_eq!(token_similarity("python", "python"), 1.0);
    assert_eq!(token_similarity("react", "react"), 1.0);
    assert_eq!(token_similarity("python", "pyth"), 0.7);
    assert_eq!(token_similarity("kotlin", "kotin"), 0.6);
    assert_eq!(token_similarity("python", "pyhton"), 0.5);
    assert_eq!(token_similarity("python", "java"), 0.0);
}

#[test]
fn skill_similarity_bounds() {
    assert_eq!(skill_similarity(&tokens(&[]), &tokens(&["python"])), 0.0);
    assert_eq!(skill_similarity(&tokens(&["python"]), &tokens(&[])), 0.0);

    let half = skill_similarity(&tokens(&["python", "react"]), &tokens(&["python"]));
    assert!((half - 0.5).abs() < 1e-9);
}

#[test]
fn scores_stay_in_unit_range() {
    let mut catalog = team_catalog();
    catalog.push(profile("over-rated", &["Rust"], 12.0));
    catalog.push(profile("negative", &["Rust"], -4.0));
    catalog.push(profile("nan", &["Rust"], f64::NAN));

    for query in ["rust, python", "", "k8s, ml, js", "#"] {
        for candidate in &catalog {
            let score = score_profile(query, candidate);
            assert!(
                (0.0..=1.0).contains(&score),
                "{query:?} scored {} at {score}",
                candidate.id
            );
        }
    }
}

#[test]
fn ranking_follows_score_then_rating_then_recency() {
    let ranked = rank_candidates("rust, python", team_catalog());

    assert_eq!(
        ids(&ranked),
        vec![
            "full-match",
            "rust-only-top",
            "python-2024",
            "rust-only-2024",
            "rust-only-2020",
            "go-junior",
            "go-unrated",
            "no-skills",
        ]
    );
}

#[test]
fn ranking_is_monotonic_for_every_pair() {
    let ranked = rank_candidates("rust, python", team_catalog());

    for (i, a) in ranked.iter().enumerate() {
        for b in &ranked[i + 1..] {
            assert!(
                may_precede(a, b),
                "{} ({}) ranked before {} ({})",
                a.candidate.id,
                a.score,
                b.candidate.id,
                b.score
            );
        }
    }
}

/// Every combination of 0-4 matching skills and ratings 0.00-5.00 in
/// 0.01 steps, so neighbouring scores are far closer than the epsilon.
fn dense_catalog() -> Vec<Candidate> {
    const MATCHING: [&str; 4] = ["Rust", "Go", "Python", "Java"];

    let mut catalog = Vec::new();
    for matched in 0..=MATCHING.len() {
        for step in 0..=500u32 {
            catalog.push(profile(
                &format!("k{matched}-r{step}"),
                &MATCHING[..matched],
                f64::from(step) / 100.0,
            ));
        }
    }
    catalog
}

#[test]
fn dense_catalog_never_ranks_a_clearly_better_score_lower() {
    let ranked = rank_candidates("rust, go, python, java", dense_catalog());
    assert_eq!(ranked.len(), 5 * 501);

    assert_eq!(ranked[0].candidate.id, "k4-r500");
    assert!((ranked[0].score - 1.0).abs() < 1e-9);
    assert_eq!(ranked.last().map(|r| r.candidate.id.as_str()), Some("k0-r0"));

    // Track the lowest score seen so far; nothing later may beat it by
    // more than the epsilon.
    let mut lowest = f64::INFINITY;
    for (position, result) in ranked.iter().enumerate() {
        assert!(
            result.score <= lowest + EPSILON + 1e-12,
            "{} ({}) at position {position} ranked below a score of {lowest}",
            result.candidate.id,
            result.score
        );
        lowest = lowest.min(result.score);
    }

    let position = |id: &str| ranked.iter().position(|r| r.candidate.id == id);
    assert!(position("k4-r0") < position("k0-r500"));
}

#[test]
fn identical_candidates_keep_input_order() {
    let created = at(2023, 9);
    let catalog: Vec<Candidate> = (0..6)
        .map(|i| profile(&format!("twin-{i}"), &["Rust"], 3.0).with_created_at(created))
        .collect();

    let ranked = rank_candidates("rust", catalog);
    assert_eq!(
        ids(&ranked),
        vec!["twin-0", "twin-1", "twin-2", "twin-3", "twin-4", "twin-5"]
    );
}

#[test]
fn empty_query_ranks_by_rating() {
    let ranked = rank_candidates(
        "",
        vec![
            profile("five", &["Rust"], 5.0),
            profile("zero", &["Rust"], 0.0),
            profile("three", &["Rust"], 3.0),
        ],
    );
    assert_eq!(ids(&ranked), vec!["five", "three", "zero"]);
    assert_eq!(ranked[0].score, 1.0);
    assert_eq!(ranked[2].score, 0.0);
}

#[test]
fn retokenizing_joined_tokens_loses_nothing() {
    for input in [
        "JS, Node.js, Machine Learning",
        "k8s, AWS, c++",
        "UX/UI design, SEO",
        "",
    ] {
        let first = tokenize_skills(input);
        let joined = first.iter().cloned().collect::<Vec<_>>().join(", ");
        let second = tokenize_skills(joined.as_str());
        assert!(first.is_subset(&second), "{input:?}: {first:?} vs {second:?}");
    }
}

#[test]
fn typos_still_rank_above_unrelated_profiles() {
    let ranked = rank_candidates(
        "python, kubernetes",
        vec![
            profile("designer", &["Figma", "Sketch"], 5.0),
            profile("typo", &["Pyhton", "K8s"], 2.0),
        ],
    );
    assert_eq!(ids(&ranked), vec!["typo", "designer"]);
}

#[test]
fn custom_weights_change_the_order() -> Result<()> {
    let catalog = vec![
        profile("skilled", &["Rust"], 1.0),
        profile("popular", &["Java"], 5.0),
    ];

    let default_order = rank_candidates("rust", catalog.clone());
    assert_eq!(ids(&default_order), vec!["skilled", "popular"]);

    let ranker = Ranker::new(RankingConfig {
        skill_weight: 0.2,
        rating_weight: 0.8,
        ..Default::default()
    })?;
    let rating_heavy = ranker.rank(&"rust".into(), catalog);
    assert_eq!(ids(&rating_heavy), vec!["popular", "skilled"]);
    Ok(())
}
