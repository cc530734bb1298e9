// src/file.rs

use std::{
    error::Error,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, TimeZone};

use crate::config::consts::{EXPORT_EXT, EXPORT_PREFIX, EXPORT_STAMP_FMT};
use crate::config::options::ExportOptions;
use crate::data::ResultTable;

/// `leetcode_stats_<YYYYMMDD_HHMM>.csv` for the given instant.
pub fn export_file_name<Tz>(at: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}{}.{}", EXPORT_PREFIX, at.format(EXPORT_STAMP_FMT), EXPORT_EXT)
}

/// Header row + one record per result row, to any writer.
pub fn write_table<W: Write>(w: W, table: &ResultTable) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(w);
    out.write_record(ResultTable::headers())?;
    for row in table.rows() {
        out.write_record(row.cells())?;
    }
    out.flush()?;
    Ok(())
}

/// Same bytes as the exported file, for clipboard copy.
pub fn to_csv_string(table: &ResultTable) -> Result<String, Box<dyn Error>> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, table)?;
    Ok(String::from_utf8(buf)?)
}

/// Write `table` to `path`, creating parent directories. Returns the path.
pub fn write_results(path: &Path, table: &ResultTable) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = fs::File::create(path)?; // truncate/overwrite
    write_table(file, table)?;
    Ok(path.to_path_buf())
}

/// Write into the configured output directory under `file_name`.
pub fn write_export(
    export: &ExportOptions,
    file_name: &str,
    table: &ResultTable,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.path_for(file_name);
    let written = write_results(&path, table)?;
    logf!("Export: Wrote rows={} → {}", table.len(), written.display());
    Ok(written)
}

/// CLI `--out`: empty → default name in cwd; a directory (existing, or
/// hinted by a trailing separator) → default name inside it; else the file.
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, Box<dyn Error>> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}
