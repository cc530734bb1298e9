// src/roster.rs
//! Student roster input.
//!
//! Reads a CSV with at least the `ROLL NUM`, `NAME` and `LEETCODE USERNAME`
//! columns (exact, case-sensitive labels; any other columns are ignored).
//! Roll numbers and names pass through verbatim. Username cells that are
//! blank or hold a "no value" marker (`NaN`, `N/A`, ...) become `None`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::config::consts::{COL_NAME, COL_ROLL, COL_USERNAME, REQUIRED_COLUMNS};
use crate::core::sanitize::username_cell;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("cannot read {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("file is empty (no header row)")]
    NoHeader,

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRecord {
    pub roll_num: String,
    pub name: String,
    pub username: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    pub records: Vec<StudentRecord>,
}

impl Roster {
    #[inline] pub fn len(&self) -> usize { self.records.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn with_username(&self) -> usize {
        self.records.iter().filter(|r| r.username.is_some()).count()
    }
}

/// Column positions of the three required fields.
struct Columns {
    roll: usize,
    name: usize,
    username: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, RosterError> {
        if headers.is_empty() || headers.iter().all(str::is_empty) {
            return Err(RosterError::NoHeader);
        }

        let find = |label: &str| headers.iter().position(|h| h == label);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| find(**c).is_none())
            .map(|c| s!(*c))
            .collect();
        if !missing.is_empty() {
            return Err(RosterError::MissingColumns(missing));
        }

        // all three present, checked above
        Ok(Self {
            roll: find(COL_ROLL).unwrap_or_default(),
            name: find(COL_NAME).unwrap_or_default(),
            username: find(COL_USERNAME).unwrap_or_default(),
        })
    }
}

pub fn read_path(path: &Path) -> Result<Roster, RosterError> {
    let file = File::open(path).map_err(|source| RosterError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let roster = read_from(file)?;
    logf!("Roster: Loaded {} (rows={})", path.display(), roster.len());
    Ok(roster)
}

pub fn read_bytes(bytes: &[u8]) -> Result<Roster, RosterError> {
    read_from(bytes)
}

pub fn read_from<R: Read>(reader: R) -> Result<Roster, RosterError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let cols = Columns::locate(rdr.headers()?)?;

    let mut records = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let cell = |ix: usize| rec.get(ix).unwrap_or("");
        records.push(StudentRecord {
            roll_num: s!(cell(cols.roll)),
            name: s!(cell(cols.name)),
            username: username_cell(cell(cols.username)),
        });
    }

    Ok(Roster { records })
}
