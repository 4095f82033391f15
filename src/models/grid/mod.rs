// Grid module
// Derived cells, the weekday-major matrix and month axis labels

use chrono::NaiveDate;
use serde::Serialize;

/// One day's fully resolved rendering data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub date: NaiveDate,
    pub value: f64,
    pub color: String,
    /// Inside the caller's explicit range. Always false for month/year views,
    /// where the concept does not apply.
    pub in_range: bool,
    /// Whether a click on this cell is reported
    pub clickable: bool,
    /// Zero-based month of `date`
    pub month: u32,
}

/// Weekday-major matrix of cells.
///
/// `rows()[d][w]` is weekday `d` (0 = Sunday) of week column `w`. A non-empty
/// matrix always has exactly 7 rows of equal length.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct GridMatrix {
    rows: Vec<Vec<Cell>>,
}

impl GridMatrix {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Transpose chronological week columns into weekday rows.
    pub(crate) fn from_week_columns(columns: Vec<[Cell; 7]>) -> Self {
        if columns.is_empty() {
            return Self::empty();
        }

        let mut rows: Vec<Vec<Cell>> = (0..7).map(|_| Vec::with_capacity(columns.len())).collect();
        for column in columns {
            for (row, cell) in rows.iter_mut().zip(column) {
                row.push(cell);
            }
        }
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, weekday: usize) -> Option<&[Cell]> {
        self.rows.get(weekday).map(Vec::as_slice)
    }

    pub fn week_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, weekday: usize, column: usize) -> Option<&Cell> {
        self.rows.get(weekday)?.get(column)
    }

    /// The 7 cells of one week column, Sunday first.
    pub fn column(&self, column: usize) -> Option<Vec<&Cell>> {
        if column >= self.week_count() {
            return None;
        }
        Some(self.rows.iter().map(|row| &row[column]).collect())
    }

    /// Cells in chronological order.
    pub fn iter_days(&self) -> impl Iterator<Item = &Cell> + '_ {
        (0..self.week_count()).flat_map(move |column| self.rows.iter().map(move |row| &row[column]))
    }

    pub fn find(&self, date: NaiveDate) -> Option<&Cell> {
        let first = self.cell(0, 0)?;
        let offset = (date - first.date).num_days();
        if offset < 0 {
            return None;
        }
        let offset = offset as usize;
        self.cell(offset % 7, offset / 7)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.cell(0, 0).map(|cell| cell.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        let last_column = self.week_count().checked_sub(1)?;
        self.cell(6, last_column).map(|cell| cell.date)
    }
}

/// Axis annotation marking where a month begins in the column sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLabel {
    /// Zero-based month
    pub month: u32,
    pub label: &'static str,
    pub week_column_index: usize,
}
