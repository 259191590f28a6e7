use crate::utils::error::{Result, StampError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date stamp convention used on product labels: `YYYY.MM.DD` with literal
/// dots. Every textual rendering of a date in this crate goes through this
/// format.
pub const STAMP_FORMAT: &str = "%Y.%m.%d";

/// Renders a date in the `YYYY.MM.DD` label convention.
pub fn format_stamp(date: NaiveDate) -> String {
    date.format(STAMP_FORMAT).to_string()
}

/// Parses a `YYYY.MM.DD` stamp back into a calendar date.
pub fn parse_stamp(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), STAMP_FORMAT).map_err(|source| {
        StampError::DateFormat {
            value: value.to_string(),
            source,
        }
    })
}

/// A shelf-life value exactly as it appears in the product catalog: either a
/// bare integer (month count) or a string (digit-only month count, or a
/// `d`/`D`-prefixed day count like `"d120"`).
///
/// Untagged so catalog files can write `6` and `"d120"` side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawShelfLife {
    Number(i64),
    Text(String),
}

impl From<i64> for RawShelfLife {
    fn from(n: i64) -> Self {
        RawShelfLife::Number(n)
    }
}

impl From<&str> for RawShelfLife {
    fn from(s: &str) -> Self {
        RawShelfLife::Text(s.to_string())
    }
}

impl fmt::Display for RawShelfLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawShelfLife::Number(n) => write!(f, "{}", n),
            RawShelfLife::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// A normalized shelf life: unit plus magnitude.
///
/// `Months` carries whatever the catalog said, including zero or negative
/// counts; the month shifter accepts those and shifts backward. `Days` is
/// validated to be at least 1, but only when the day path runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "unit", content = "amount", rename_all = "lowercase")]
pub enum ShelfLife {
    Months(i64),
    Days(i64),
}

impl fmt::Display for ShelfLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShelfLife::Months(n) => write!(f, "{} months", n),
            ShelfLife::Days(n) => write!(f, "{} days", n),
        }
    }
}

/// The outcome of one stamp calculation: the inputs that produced it, the
/// normalized shelf life, and the computed target date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampReport {
    pub product: String,
    pub manufactured: NaiveDate,
    pub shelf_life: ShelfLife,
    pub target: NaiveDate,
}

impl StampReport {
    /// Machine-readable rendering. Dates use the stamp convention, not ISO,
    /// since downstream consumers key off the label format.
    pub fn to_json(&self) -> serde_json::Value {
        let (unit, amount) = match self.shelf_life {
            ShelfLife::Months(n) => ("months", n),
            ShelfLife::Days(n) => ("days", n),
        };
        serde_json::json!({
            "product": self.product,
            "manufactured": format_stamp(self.manufactured),
            "shelf_life": { "unit": unit, "amount": amount },
            "target": format_stamp(self.target),
        })
    }
}
