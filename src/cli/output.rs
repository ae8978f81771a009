//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SkillMatchArgs};
use crate::error::Result;
use crate::ranking::RankedResult;
use crate::similarity::SimilarityBreakdown;

/// One printed row of a ranking.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub id: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<SimilarityBreakdown>,
}

impl RankedEntry {
    pub fn new(rank: usize, result: RankedResult) -> Self {
        let candidate = result.candidate;
        RankedEntry {
            rank,
            id: candidate.id,
            score: result.score,
            rating: candidate.rating,
            created_at: candidate.created_at.map(|t| t.to_rfc3339()),
            skills: candidate.skills,
            breakdown: None,
        }
    }
}

/// Result structure for the rank command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankResults {
    pub query: String,
    pub results: Vec<RankedEntry>,
    pub total_candidates: usize,
    pub duration_ms: u64,
}

/// Result structure for the tokenize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub input: String,
    pub phrases: Vec<String>,
    pub tokens: Vec<String>,
}

/// Result structure for the similarity command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub desired: String,
    pub offered: String,
    pub breakdown: SimilarityBreakdown,
}

/// Anything the CLI can print.
pub trait Report: Serialize {
    /// Print in human-readable form.
    fn print_human(&self, args: &SkillMatchArgs);
}

/// Output a result in the specified format.
pub fn output_result<T: Report>(message: &str, result: &T, args: &SkillMatchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_human(message, result, args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Report>(message: &str, result: &T, args: &SkillMatchArgs) {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    result.print_human(args);
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SkillMatchArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl Report for RankResults {
    fn print_human(&self, args: &SkillMatchArgs) {
        println!("Ranking Results:");
        println!("════════════════");

        if self.results.is_empty() {
            println!();
            println!("No candidates.");
        }

        for entry in &self.results {
            println!();
            println!("{}. {} (Score: {:.3})", entry.rank, entry.id, entry.score);
            println!("─────────────");
            println!("skills: {}", format_list(&entry.skills));
            if let Some(rating) = entry.rating {
                println!("rating: {rating}");
            }
            if let Some(created_at) = &entry.created_at {
                println!("created_at: {created_at}");
            }
            if let Some(breakdown) = &entry.breakdown {
                print_breakdown(breakdown);
            }
        }

        println!();
        println!(
            "Showing {} of {} candidates",
            self.results.len(),
            self.total_candidates
        );
        if args.verbosity() > 0 {
            println!("Ranking time: {}ms", self.duration_ms);
        }
    }
}

impl Report for TokenizeResult {
    fn print_human(&self, _args: &SkillMatchArgs) {
        println!("phrases: {}", format_list(&self.phrases));
        println!("tokens: {}", format_list(&self.tokens));
    }
}

impl Report for SimilarityResult {
    fn print_human(&self, _args: &SkillMatchArgs) {
        println!("Similarity: {:.3}", self.breakdown.score);
        print_breakdown(&self.breakdown);
    }
}

/// Print per-token matches, one per line.
fn print_breakdown(breakdown: &SimilarityBreakdown) {
    for token_match in &breakdown.matches {
        match &token_match.offered {
            Some(offered) => println!(
                "  {} -> {} ({:.1})",
                token_match.desired, offered, token_match.similarity
            ),
            None => println!("  {} -> (none)", token_match.desired),
        }
    }
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
