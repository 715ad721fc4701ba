//! `tessera`: solve a sliding-tile puzzle and compare search strategies.

use std::fs;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tessera_harness::cli::Cli;
use tessera_harness::policy::comparison_lineup;
use tessera_harness::report::{
    append_comparison_table, run_report_json, write_run_report, ComparisonTable,
    COMPARISON_FILE_NAME,
};
use tessera_harness::runner::{run_comparison, run_search};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let problem = cli.problem().context("invalid puzzle")?;
    if !problem.is_solvable() {
        warn!("goal is not reachable from the start board; the search will exhaust");
    }

    let config = cli.policy_config();
    let selection = cli.selection();
    let record = run_search(&problem, selection, &config)
        .with_context(|| format!("{} search failed", selection.label()))?;

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;
    let report_path = write_run_report(&cli.output_dir, &record)?;
    info!(path = %report_path.display(), "run report written");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&run_report_json(&record))?);
    } else {
        println!(
            "{}: {} (cost {}, depth {}, {} nodes expanded)",
            selection.label(),
            record.termination,
            record.path_cost,
            record.depth,
            record.nodes_expanded
        );
    }

    if cli.no_compare {
        return Ok(());
    }

    let mut table = ComparisonTable::new();
    table.push(&record);
    let remaining: Vec<_> = comparison_lineup()
        .into_iter()
        .filter(|other| *other != selection)
        .collect();
    run_comparison(&problem, &remaining, &config, &mut table).context("comparison run failed")?;

    let table_path = cli.output_dir.join(COMPARISON_FILE_NAME);
    append_comparison_table(&table_path, &table)?;
    info!(path = %table_path.display(), rows = table.len(), "comparison table appended");
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&table.to_json())?);
    }
    Ok(())
}
