//! The 3d4 encounter table.
//!
//! Rows 3-16 are every total a 3d4 roll can produce once it has been shifted
//! by the alarm level. Each row holds four labels, one per value of the first
//! die.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{AeError, AeResult};

/// Lowest row of the table.
pub const FIRST_ROW: i32 = 3;
/// Highest row of the table.
pub const LAST_ROW: i32 = 16;
/// Number of columns per row.
pub const COLUMNS: usize = 4;
/// Label used for empty defaults and out-of-range rolls.
pub const UNEVENTFUL: &str = "Uneventful";

/// A mapping from row (3-16) to four encounter-type labels.
///
/// Serializes as a JSON object keyed by row number, matching the shape the
/// host stores it in:
///
/// ```text
/// { "3": ["Uneventful", "Ambush", "Patrol", "Uneventful"], ... }
/// ```
///
/// Deserializing goes through [`EncounterTable::from_value`], so the same
/// row and label checks apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncounterTable {
    rows: BTreeMap<i32, [String; COLUMNS]>,
}

impl<'de> Deserialize<'de> for EncounterTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl Default for EncounterTable {
    fn default() -> Self {
        let rows = (FIRST_ROW..=LAST_ROW)
            .map(|row| (row, std::array::from_fn(|_| UNEVENTFUL.to_string())))
            .collect();
        Self { rows }
    }
}

impl EncounterTable {
    /// Build a table from complete rows, rejecting any missing row or
    /// blank label.
    pub fn from_rows(rows: BTreeMap<i32, [String; COLUMNS]>) -> AeResult<Self> {
        for row in FIRST_ROW..=LAST_ROW {
            let Some(labels) = rows.get(&row) else {
                return Err(AeError::MalformedRow { row });
            };
            if labels.iter().any(|l| l.trim().is_empty()) {
                return Err(AeError::MalformedRow { row });
            }
        }
        let rows = rows
            .into_iter()
            .filter(|(row, _)| (FIRST_ROW..=LAST_ROW).contains(row))
            .collect();
        Ok(Self { rows })
    }

    /// Validate an arbitrary JSON value as an encounter table.
    ///
    /// Every row 3-16 must be present (keyed by its decimal string) as an
    /// array of exactly four non-empty strings. The first offending row is
    /// reported. Keys outside the row range are ignored.
    pub fn from_value(value: &Value) -> AeResult<Self> {
        let obj = value.as_object().ok_or(AeError::NotAnObject)?;
        let mut rows = BTreeMap::new();

        for row in FIRST_ROW..=LAST_ROW {
            let labels = obj
                .get(&row.to_string())
                .and_then(Value::as_array)
                .filter(|cells| cells.len() == COLUMNS)
                .ok_or(AeError::MalformedRow { row })?;

            let mut parsed: [String; COLUMNS] = Default::default();
            for (slot, cell) in parsed.iter_mut().zip(labels) {
                match cell.as_str() {
                    Some(s) if !s.trim().is_empty() => *slot = s.to_string(),
                    _ => return Err(AeError::MalformedRow { row }),
                }
            }
            rows.insert(row, parsed);
        }

        Ok(Self { rows })
    }

    /// The label at `row`, column `col` (1-based), if the cell exists.
    pub fn get(&self, row: i32, col: usize) -> Option<&str> {
        if !(1..=COLUMNS).contains(&col) {
            return None;
        }
        self.rows.get(&row).map(|labels| labels[col - 1].as_str())
    }

    /// Replace the label of an existing cell.
    ///
    /// The label is trimmed; blank labels and cells outside the table are
    /// rejected.
    pub fn set(&mut self, cell: CellRef, label: &str) -> AeResult<()> {
        let trimmed = label.trim();
        if !cell.in_range() {
            return Err(AeError::CellOutOfRange {
                row: cell.row,
                col: cell.col,
            });
        }
        if trimmed.is_empty() {
            return Err(AeError::EmptyCell {
                row: cell.row,
                col: cell.col,
            });
        }
        let labels = self
            .rows
            .entry(cell.row)
            .or_insert_with(|| std::array::from_fn(|_| UNEVENTFUL.to_string()));
        labels[cell.col - 1] = trimmed.to_string();
        Ok(())
    }

    /// Iterate rows in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = (i32, &[String; COLUMNS])> {
        self.rows.iter().map(|(row, labels)| (*row, labels))
    }

    /// Every distinct label in the table, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .rows
            .values()
            .flat_map(|row| row.iter().map(String::as_str))
            .collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> AeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A reference to one table cell, with a 1-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellRef {
    /// Table row.
    pub row: i32,
    /// Table column (1-4).
    pub col: usize,
}

impl CellRef {
    /// Create a cell reference.
    pub fn new(row: i32, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the cell lies inside rows 3-16 and columns 1-4.
    pub fn in_range(&self) -> bool {
        (FIRST_ROW..=LAST_ROW).contains(&self.row) && (1..=COLUMNS).contains(&self.col)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for CellRef {
    type Err = AeError;

    /// Parse a form key of the shape `<row>-<col>`, e.g. `"7-2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AeError::InvalidCellKey(s.to_string());
        let (row, col) = s.trim().split_once('-').ok_or_else(invalid)?;
        let row = row.parse::<i32>().map_err(|_| invalid())?;
        let col = col.parse::<usize>().map_err(|_| invalid())?;
        Ok(Self { row, col })
    }
}
