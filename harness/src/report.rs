//! Run reports and the comparison table.
//!
//! Text renderings are what the CLI writes to disk; the JSON renderings are
//! for machine consumers and carry the digests as well. Neither rendering
//! is hashed, so float timings are fine here.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tessera_search::trace::TerminationReason;

use crate::heuristics::HeuristicKind;
use crate::policy::RunSelection;
use crate::runner::RunRecord;

/// File the comparison table is appended to.
pub const COMPARISON_FILE_NAME: &str = "output.txt";

const BANNER: &str = "******************************";
const TABLE_RULE: &str =
    "------------------------------------------------------------------------------";
const NO_HEURISTIC: &str = "N/A";

/// Error writing a report to disk.
#[derive(Debug)]
pub enum ReportError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "writing {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Report file name for a selection: `output_<strategy>[_<heuristic>].txt`.
#[must_use]
pub fn output_file_name(selection: &RunSelection) -> String {
    match selection.heuristic() {
        Some(h) => format!("output_{}_{h}.txt", selection.strategy().name()),
        None => format!("output_{}.txt", selection.strategy().name()),
    }
}

/// Render the per-run text report.
#[must_use]
pub fn render_run_report(record: &RunRecord) -> String {
    let path: Vec<String> = record
        .trace
        .iter()
        .map(|entry| format!("[State: {:?}    Action: {}]", entry.state.rows(), entry.step))
        .collect();

    let mut out = String::new();
    out.push_str(&format!("{} Search Algorithm:\n", record.selection.label()));
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!("Solution Path:\n{}\n", path.join("\n")));
    if record.termination != TerminationReason::GoalReached {
        out.push_str(&format!("No solution: {}\n", record.termination));
    }
    out.push_str(&format!("Path Cost: {}\n", record.path_cost));
    out.push_str(&format!("Depth: {}\n", record.depth));
    out.push_str(&format!(
        "Time Taken: {:.4} seconds\n",
        record.elapsed.as_secs_f64()
    ));
    out.push_str(&format!("Nodes Expanded: {}\n", record.nodes_expanded));
    out.push_str(BANNER);
    out.push('\n');
    out
}

/// JSON rendering of a run (summary, actions and digests; not the trace).
#[must_use]
pub fn run_report_json(record: &RunRecord) -> serde_json::Value {
    let actions: Vec<&str> = record.actions.iter().map(|mv| mv.name()).collect();
    serde_json::json!({
        "algorithm": record.selection.strategy().label(),
        "strategy": record.selection.strategy().name(),
        "heuristic": record.selection.heuristic().map(HeuristicKind::name),
        "termination": record.termination.tag(),
        "actions": actions,
        "path_cost": record.path_cost,
        "depth": record.depth,
        "nodes_expanded": record.nodes_expanded,
        "duplicates_suppressed": record.duplicates_suppressed,
        "frontier_high_water": record.frontier_high_water,
        "trace_len": record.trace.len(),
        "time_taken_secs": record.elapsed.as_secs_f64(),
        "trace_digest": record.trace_digest.as_str(),
        "policy_digest": record.policy_digest.as_str(),
    })
}

/// One comparison table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub algorithm: String,
    pub heuristic: Option<String>,
    pub path_cost: i64,
    pub depth: usize,
    pub time_taken_secs: f64,
    pub nodes_expanded: u64,
}

impl From<&RunRecord> for ComparisonRow {
    fn from(record: &RunRecord) -> Self {
        Self {
            algorithm: record.selection.strategy().label().to_string(),
            heuristic: record
                .selection
                .heuristic()
                .map(|h| h.name().to_string()),
            path_cost: record.path_cost,
            depth: record.depth,
            time_taken_secs: record.elapsed.as_secs_f64(),
            nodes_expanded: record.nodes_expanded,
        }
    }
}

/// Results collected across runs, in the order they were pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTable {
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &RunRecord) {
        self.rows.push(ComparisonRow::from(record));
    }

    #[must_use]
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fixed-width text table, preceded by a blank line so successive
    /// appends to the same file stay separated.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("\nSearch Algorithms Comparison Table:\n");
        out.push_str(
            "Algorithm | Heuristic | Path Cost | Depth     | Time Taken | Nodes Expanded\n",
        );
        out.push_str(TABLE_RULE);
        out.push('\n');
        for row in &self.rows {
            let time = format!("{:.4} sec", row.time_taken_secs);
            out.push_str(&format!(
                "{:<9} | {:<9} | {:<9} | {:<9} | {:<9} | {:<9}\n",
                row.algorithm,
                row.heuristic.as_deref().unwrap_or(NO_HEURISTIC),
                row.path_cost,
                row.depth,
                time,
                row.nodes_expanded,
            ));
        }
        out.push_str(TABLE_RULE);
        out.push('\n');
        out
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let rows: Vec<serde_json::Value> = self
            .rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "algorithm": row.algorithm,
                    "heuristic": row.heuristic,
                    "path_cost": row.path_cost,
                    "depth": row.depth,
                    "time_taken_secs": row.time_taken_secs,
                    "nodes_expanded": row.nodes_expanded,
                })
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}

/// Write the run report into `dir`, replacing any previous report for the
/// same selection. Returns the path written.
///
/// # Errors
///
/// Returns [`ReportError::Io`] on any filesystem failure.
pub fn write_run_report(dir: &Path, record: &RunRecord) -> Result<PathBuf, ReportError> {
    let path = dir.join(output_file_name(&record.selection));
    fs::write(&path, render_run_report(record)).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Append the rendered table to `path`, creating the file if needed.
///
/// # Errors
///
/// Returns [`ReportError::Io`] on any filesystem failure.
pub fn append_comparison_table(path: &Path, table: &ComparisonTable) -> Result<(), ReportError> {
    let io_err = |source: std::io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    file.write_all(table.render().as_bytes()).map_err(io_err)
}
