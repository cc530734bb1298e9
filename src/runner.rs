// src/runner.rs
//
// Batch Orchestrator: roster in, result table out. Strictly sequential: one
// row at a time, one lookup per row, fixed pause after each row.

use std::path::Path;
use std::thread;

use crate::{
    config::options::FetchOptions,
    data::{ResultRow, ResultTable},
    fetcher::{self, Lookup, StatsSource},
    progress::Progress,
    roster::{self, Roster, RosterError},
};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Error processing file: {0}")]
    Roster(#[from] RosterError),

    #[error("No data was collected!")]
    NoData,
}

/// What a finished batch produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub table: ResultTable,
    /// Rows whose lookup returned numbers.
    pub found: usize,
    /// Rows that got a zeroed tally (and a warning).
    pub warnings: usize,
}

/// Walk the roster in order. Every row yields exactly one `ResultRow`,
/// whatever the lookup outcome.
pub fn run_batch(
    roster: &Roster,
    source: &dyn StatsSource,
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    let total = roster.len();
    logf!("Run: Begin rows={} with_username={}", total, roster.with_username());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut summary = RunSummary {
        table: ResultTable::with_capacity(total),
        ..RunSummary::default()
    };

    for (i, student) in roster.records.iter().enumerate() {
        let username = student.username.as_deref();
        let shown = username.unwrap_or("");

        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching data for {} ({}/{})", student.name, i + 1, total));
        }

        let lookup = fetcher::fetch(source, username);

        if let Lookup::Failed(reason) = &lookup {
            if let Some(p) = progress.as_deref_mut() {
                p.error(&format!("Error fetching data for {shown}: {reason}"));
            }
        }

        let tally = lookup.tally();
        if tally.is_some() {
            summary.found += 1;
        } else {
            summary.warnings += 1;
            logw!("Run: row {} ({}) → {:?}", i + 1, student.name, lookup);
            if let Some(p) = progress.as_deref_mut() {
                p.warn(&format!("Failed to fetch stats for {} (Username: {shown})", student.name));
            }
        }
        summary.table.push(ResultRow::new(student, tally));

        if let Some(p) = progress.as_deref_mut() {
            p.advance(i + 1, total);
        }

        if !opts.pause.is_zero() {
            thread::sleep(opts.pause); // be polite
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    logf!(
        "Run: Done rows={} found={} warnings={}",
        summary.table.len(), summary.found, summary.warnings
    );
    summary
}

/// Completed-state gate: an empty table is the "no data" error.
pub fn finish(summary: RunSummary) -> Result<ResultTable, RunError> {
    if summary.table.is_empty() {
        loge!("Run: No data was collected");
        return Err(RunError::NoData);
    }
    Ok(summary.table)
}

/// Read the roster, run the batch, gate on emptiness. Input errors halt
/// before any lookup.
pub fn run_file(
    path: &Path,
    source: &dyn StatsSource,
    opts: &FetchOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<ResultTable, RunError> {
    let roster = roster::read_path(path).inspect_err(|e| loge!("Run: {e}"))?;
    finish(run_batch(&roster, source, opts, progress))
}
