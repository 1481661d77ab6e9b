//! Build command implementation.
//!
//! The build command:
//! 1. Fetches and decodes the companies source
//! 2. Builds the company hierarchy
//! 3. Fetches and decodes the travels source
//! 4. Rolls travel prices up the hierarchy
//! 5. Writes the tree as JSON (and optionally echoes it)

use super::models::BuildArgs;
use super::timing::StageTimer;
use crate::aggregator::{apply_all, CostReport};
use crate::hierarchy::{build_with_report, BuildReport, CompanyTree};
use crate::output::{tree_to_string, write_tree};
use crate::parser::{decode_companies, decode_travels};
use crate::source::{ByteSource, SourceClient};
use anyhow::{Context, Result};
use log::{debug, info, warn};

/// Everything produced by a pipeline run
#[derive(Debug)]
pub struct PipelineOutcome {
    pub tree: CompanyTree,
    pub build_report: BuildReport,
    pub cost_report: CostReport,
}

/// Execute the build command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Source fetch failures
/// * Malformed JSON in either source
/// * No root company (or no companies at all)
/// * File write errors
pub fn execute_build(args: BuildArgs) -> Result<()> {
    let mut timer = StageTimer::new(args.timings);

    info!("Companies source: {}", args.companies_source);
    info!("Travels source: {}", args.travels_source);

    let client = SourceClient::with_timeout(args.timeout).context("Failed to create HTTP client")?;

    let outcome = run_pipeline(&client, &args, &mut timer)?;

    write_tree(&outcome.tree, &args.output_json).context("Failed to write company tree JSON")?;
    info!("✓ Company tree written to: {}", args.output_json.display());

    if args.echo {
        let json = tree_to_string(&outcome.tree).context("Failed to render company tree")?;
        println!("JSON OUTPUT:");
        println!("{}", json);
    }

    print_summary(&outcome);

    timer.print_total();
    info!("Build completed in {:.2}s", timer.total().as_secs_f64());

    Ok(())
}

/// Fetch, decode, build and aggregate using any byte source
///
/// **Public** - the whole batch minus file output, usable with in-memory sources
pub fn run_pipeline(
    source: &dyn ByteSource,
    args: &BuildArgs,
    timer: &mut StageTimer,
) -> Result<PipelineOutcome> {
    info!("Fetching companies...");
    let raw_companies = source
        .fetch(&args.companies_source)
        .with_context(|| format!("Failed to fetch companies from {}", args.companies_source))?;
    timer.lap("retrieving companies JSON");

    let companies = decode_companies(&raw_companies).context("Failed to decode companies")?;
    let (mut tree, build_report) =
        build_with_report(&companies).context("Failed to build company hierarchy")?;
    timer.lap("building companies tree");

    debug!(
        "Hierarchy: {} companies, depth {}",
        tree.len(),
        tree.depth()
    );

    info!("Fetching travels...");
    let raw_travels = source
        .fetch(&args.travels_source)
        .with_context(|| format!("Failed to fetch travels from {}", args.travels_source))?;
    timer.lap("retrieving travels JSON");

    let travels = decode_travels(&raw_travels).context("Failed to decode travels")?;
    timer.lap("building travels array");

    let cost_report = apply_all(&mut tree, &travels);
    timer.lap("adding travels to companies");

    Ok(PipelineOutcome {
        tree,
        build_report,
        cost_report,
    })
}

/// Report dropped records and the rolled-up total
///
/// **Private** - internal helper for execute_build
fn print_summary(outcome: &PipelineOutcome) {
    let root = outcome.tree.root_node();

    println!(
        "Root {} ({}): {} companies, total cost {:.2}",
        root.id,
        root.name,
        outcome.tree.len(),
        root.cost
    );

    if outcome.build_report.dropped() > 0 {
        warn!(
            "{} company records were not attached",
            outcome.build_report.dropped()
        );
        println!("  {}", outcome.build_report.summary());
    }

    if !outcome.cost_report.unresolved.is_empty() {
        warn!(
            "{} travels reference unknown companies",
            outcome.cost_report.unresolved.len()
        );
        println!("  {}", outcome.cost_report.summary());
    }
}

/// Validate build arguments
///
/// **Public** - can be called before execute_build for early validation
pub fn validate_args(args: &BuildArgs) -> Result<()> {
    if args.companies_source.trim().is_empty() {
        anyhow::bail!("Companies source cannot be empty");
    }

    if args.travels_source.trim().is_empty() {
        anyhow::bail!("Travels source cannot be empty");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.timeout.is_zero() {
        anyhow::bail!("Timeout must be greater than 0");
    }

    Ok(())
}
