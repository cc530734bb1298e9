// src/data.rs
//
// Result-side data: per-user tallies, flattened output rows and the ordered
// table the batch builds up.
//
// - StatTally: accepted-submission counts by difficulty. The total is derived,
//              never stored, so it can't drift from the three tiers.
// - ResultRow: one roster row plus its tally (zeros when the lookup failed).
// - ResultTable: rows in roster order, one per input row.

use crate::config::consts::OUTPUT_HEADERS;
use crate::roster::StudentRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatTally {
    easy: u32,
    medium: u32,
    hard: u32,
}

impl StatTally {
    pub fn new(easy: u32, medium: u32, hard: u32) -> Self {
        Self { easy, medium, hard }
    }

    #[inline] pub fn easy(&self) -> u32 { self.easy }
    #[inline] pub fn medium(&self) -> u32 { self.medium }
    #[inline] pub fn hard(&self) -> u32 { self.hard }

    pub fn total(&self) -> u32 {
        self.easy.saturating_add(self.medium).saturating_add(self.hard)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub roll_num: String,
    pub name: String,
    /// Empty when the roster cell was blank/missing.
    pub username: String,
    pub tally: StatTally,
}

impl ResultRow {
    pub fn new(student: &StudentRecord, tally: Option<StatTally>) -> Self {
        Self {
            roll_num: student.roll_num.clone(),
            name: student.name.clone(),
            username: student.username.clone().unwrap_or_default(),
            tally: tally.unwrap_or_default(),
        }
    }

    /// Cells in `OUTPUT_HEADERS` order.
    pub fn cells(&self) -> Vec<String> {
        cells![
            self.roll_num,
            self.name,
            self.username,
            self.tally.easy(),
            self.tally.medium(),
            self.tally.hard(),
            self.tally.total(),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn with_capacity(n: usize) -> Self {
        Self { rows: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn headers() -> &'static [&'static str] {
        &OUTPUT_HEADERS
    }

    #[inline] pub fn rows(&self) -> &[ResultRow] { &self.rows }
    #[inline] pub fn len(&self) -> usize { self.rows.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn ncols(&self) -> usize {
        OUTPUT_HEADERS.len()
    }

    /// Rows with at least one solved problem.
    pub fn nonzero_count(&self) -> usize {
        self.rows.iter().filter(|r| r.tally.total() > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(username: Option<&str>) -> StudentRecord {
        StudentRecord {
            roll_num: s!("21CS001"),
            name: s!("Ada"),
            username: username.map(String::from),
        }
    }

    #[test]
    fn total_is_sum_of_tiers() {
        let t = StatTally::new(5, 3, 1);
        assert_eq!(t.total(), 9);
        assert_eq!(StatTally::default().total(), 0);
    }

    #[test]
    fn total_saturates_instead_of_wrapping() {
        let t = StatTally::new(u32::MAX, 1, 1);
        assert_eq!(t.total(), u32::MAX);
    }

    #[test]
    fn missing_tally_zeroes_row() {
        let row = ResultRow::new(&student(None), None);
        assert_eq!(row.cells(), vec!["21CS001", "Ada", "", "0", "0", "0", "0"]);
    }

    #[test]
    fn cells_follow_output_headers() {
        let row = ResultRow::new(&student(Some("ada_l")), Some(StatTally::new(5, 3, 1)));
        let cells = row.cells();
        assert_eq!(cells.len(), ResultTable::headers().len());
        assert_eq!(cells, vec!["21CS001", "Ada", "ada_l", "5", "3", "1", "9"]);
    }
}
