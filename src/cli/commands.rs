//! Command implementations for the skillmatch CLI.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::{SkillInput, SkillTokenizer, SynonymTable, split_phrases};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::ranking::{FileCandidateSource, Ranker, RankingConfig};
use crate::similarity::explain_similarity;

/// Execute a CLI command.
pub fn execute_command(args: SkillMatchArgs) -> Result<()> {
    match &args.command {
        Command::Rank(rank_args) => rank(rank_args.clone(), &args),
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args.clone(), &args),
        Command::Similarity(similarity_args) => similarity(similarity_args.clone(), &args),
    }
}

/// Rank candidates from a file.
fn rank(args: RankArgs, cli_args: &SkillMatchArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            log::info!("loading ranking config from {}", path.display());
            RankingConfig::load_from_file(path)?
        }
        None => RankingConfig::default(),
    };

    let mut ranker = Ranker::new(config)?;
    if let Some(path) = &args.synonyms {
        ranker = ranker.with_synonyms(load_synonyms(path)?);
    }

    let desired = SkillInput::from(args.query.as_str());
    let source = FileCandidateSource::new(&args.candidates_file);

    let start_time = Instant::now();
    let ranked = ranker.rank_from_source(&desired, &source)?;
    let duration = start_time.elapsed();

    let total_candidates = ranked.len();
    let limit = args.limit.unwrap_or(total_candidates);

    let results = ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, result)| {
            let breakdown = args
                .explain
                .then(|| ranker.explain(&desired, &result.candidate));
            let mut entry = RankedEntry::new(i + 1, result);
            entry.breakdown = breakdown;
            entry
        })
        .collect();

    output_result(
        "Candidates ranked",
        &RankResults {
            query: args.query,
            results,
            total_candidates,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Show the token set for some skill input.
fn tokenize(args: TokenizeArgs, cli_args: &SkillMatchArgs) -> Result<()> {
    let synonyms = if args.no_synonyms {
        Arc::new(SynonymTable::empty())
    } else {
        match &args.synonyms {
            Some(path) => load_synonyms(path)?,
            None => SynonymTable::builtin(),
        }
    };
    let tokenizer = SkillTokenizer::new(synonyms);

    let input = SkillInput::from(args.input.as_str());
    let mut tokens: Vec<String> = tokenizer.tokenize(&input).into_iter().collect();
    tokens.sort();

    output_result(
        "Skill input tokenized",
        &TokenizeResult {
            phrases: split_phrases(&input),
            input: args.input,
            tokens,
        },
        cli_args,
    )
}

/// Compare desired and offered skills.
fn similarity(args: SimilarityArgs, cli_args: &SkillMatchArgs) -> Result<()> {
    let tokenizer = SkillTokenizer::default();
    let desired = tokenizer.tokenize(&args.desired.as_str().into());
    let offered = tokenizer.tokenize(&args.offered.as_str().into());

    output_result(
        "Similarity computed",
        &SimilarityResult {
            breakdown: explain_similarity(&desired, &offered),
            desired: args.desired,
            offered: args.offered,
        },
        cli_args,
    )
}

fn load_synonyms(path: &Path) -> Result<Arc<SynonymTable>> {
    log::info!("loading synonym table from {}", path.display());
    Ok(Arc::new(SynonymTable::load_from_file(path)?))
}
