//! Command line argument parsing for the skillmatch CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// skillmatch - rank candidate profiles against desired skills
#[derive(Parser, Debug, Clone)]
#[command(name = "skillmatch")]
#[command(about = "Rank candidate profiles against a desired-skills query")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SkillMatchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SkillMatchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank candidates from a file against desired skills
    Rank(RankArgs),

    /// Show the token set for skill input
    Tokenize(TokenizeArgs),

    /// Score how well offered skills cover desired skills
    Similarity(SimilarityArgs),
}

/// Arguments for ranking
#[derive(Parser, Debug, Clone)]
pub struct RankArgs {
    /// Candidate file (JSON array or JSON Lines)
    #[arg(value_name = "CANDIDATES_FILE")]
    pub candidates_file: PathBuf,

    /// Desired skills, comma-separated
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Maximum number of results to print (all candidates are ranked)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Ranking configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Synonym table file (JSON object of alias to canonical phrase)
    #[arg(short, long, value_name = "SYNONYMS_FILE")]
    pub synonyms: Option<PathBuf>,

    /// Include a per-token match breakdown for each result
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Skill input, comma-separated
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Synonym table file (JSON object of alias to canonical phrase)
    #[arg(short, long, value_name = "SYNONYMS_FILE")]
    pub synonyms: Option<PathBuf>,

    /// Disable synonym expansion
    #[arg(long, conflicts_with = "synonyms")]
    pub no_synonyms: bool,
}

/// Arguments for the similarity command
#[derive(Parser, Debug, Clone)]
pub struct SimilarityArgs {
    /// Desired skills, comma-separated
    #[arg(value_name = "DESIRED")]
    pub desired: String,

    /// Offered skills, comma-separated
    #[arg(value_name = "OFFERED")]
    pub offered: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
