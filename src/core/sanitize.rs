// src/core/sanitize.rs
use crate::config::consts::MISSING_MARKERS;

/// True for blank cells and spreadsheet-style "no value" markers.
pub fn is_missing(cell: &str) -> bool {
    let t = cell.trim();
    t.is_empty() || MISSING_MARKERS.contains(&t)
}

/// Username cell → `Some(trimmed)` or `None` when missing.
pub fn username_cell(cell: &str) -> Option<String> {
    if is_missing(cell) { None } else { Some(cell.trim().to_string()) }
}
