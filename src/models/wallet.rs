use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::intelligence::Classification;

// ---------------------------------------------------------------------------
// ResultRow
// ---------------------------------------------------------------------------

/// One classified address. Field names are the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "地址")]
    pub address: String,
    #[serde(rename = "类型")]
    pub classification: Classification,
}

impl ResultRow {
    pub fn new(address: impl Into<String>, classification: Classification) -> Self {
        Self {
            address: address.into(),
            classification,
        }
    }
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.address, self.classification.label())
    }
}

// ---------------------------------------------------------------------------
// ResultTable
// ---------------------------------------------------------------------------

/// Append-only, input-ordered table of classified addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows per classification. Every classification is present,
    /// with zero when no row carries it.
    pub fn counts(&self) -> HashMap<Classification, usize> {
        let mut counts: HashMap<Classification, usize> =
            Classification::ALL.into_iter().map(|c| (c, 0)).collect();
        for row in &self.rows {
            *counts.entry(row.classification).or_default() += 1;
        }
        counts
    }
}

impl From<Vec<ResultRow>> for ResultTable {
    fn from(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }
}

impl IntoIterator for ResultTable {
    type Item = ResultRow;
    type IntoIter = std::vec::IntoIter<ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
