use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A single spreadsheet cell as the store hands it back.
///
/// Sheets are loosely typed: an identifier column may come back as `3` in one
/// row and `"3"` in the next, so comparisons between cells go through
/// [`Cell::loosely_eq`] rather than `==`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Cell {
    /// Returns `true` for text cells holding nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Text(s) if s.trim().is_empty())
    }

    /// Returns the numeric reading of this cell, if it has one.
    ///
    /// Text is read after trimming; blank text has no numeric reading.
    /// Booleans read as `1` and `0`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Number(n) => n.as_f64(),
            Cell::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
    }

    /// Equality that tolerates a string/number mismatch.
    ///
    /// Two texts compare exactly, two numbers compare by value. Mixed pairs
    /// compare by numeric reading, so `"3"`, `" 3 "` and `3.0` all equal `3`.
    /// A blank cell never equals anything.
    pub fn loosely_eq(&self, other: &Cell) -> bool {
        if self.is_blank() || other.is_blank() {
            return false;
        }
        match (self, other) {
            (Cell::Text(a), Cell::Text(b)) => a == b,
            (Cell::Bool(a), Cell::Bool(b)) => a == b,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_owned())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Text(String::new())
    }
}

/// Reads a cell that may be `null`, treating it as blank.
pub(crate) fn null_as_blank<'de, D: Deserializer<'de>>(de: D) -> Result<Cell, D::Error> {
    Ok(Option::<Cell>::deserialize(de)?.unwrap_or_default())
}

impl From<u64> for Cell {
    fn from(n: u64) -> Self {
        Cell::Number(n.into())
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n.into())
    }
}

/// Formats an optional attribute, falling back to `N/A` when it is missing or blank.
pub fn or_na(cell: Option<&Cell>) -> String {
    match cell {
        Some(cell) if !cell.is_blank() => cell.to_string(),
        _ => "N/A".to_owned(),
    }
}
