//! Typed sample containers
//!
//! A [`Sample`] is a flat sequence of finite reals; NaN and ±Inf are removed
//! when it is built, never carried around. A [`Table`] maps column names to
//! [`Column`]s, of which only numeric ones can become samples.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A cleaned, ordered numeric sample
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    values: Vec<f64>,
    /// Number of non-finite values dropped while cleaning
    removed: usize,
}

impl Sample {
    /// Build a sample, dropping NaN and infinite values
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut removed = 0;
        let values = values
            .into_iter()
            .filter(|x| {
                let keep = x.is_finite();
                if !keep {
                    removed += 1;
                }
                keep
            })
            .collect();
        Self { values, removed }
    }

    /// Parse textual values into a sample
    ///
    /// Every entry must parse as a number ("nan" and "inf" are accepted and
    /// then cleaned out); anything else is a [`Error::TypeMismatch`].
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        let parsed = raw
            .iter()
            .map(|s| {
                let s = s.as_ref();
                s.trim()
                    .parse::<f64>()
                    .map_err(|_| Error::type_mismatch("numeric value", format!("{s:?}")))
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(Self::from_values(parsed))
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of non-finite values removed during cleaning
    pub fn removed(&self) -> usize {
        self.removed
    }

    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Sorted copy of the values
    pub fn sorted(&self) -> Vec<f64> {
        crate::utils::sorted(&self.values)
    }

    /// Distinct values in ascending order
    pub fn unique(&self) -> Vec<f64> {
        let mut sorted = self.sorted();
        sorted.dedup();
        sorted
    }

    /// Number of distinct values
    pub fn unique_count(&self) -> usize {
        crate::utils::unique_count(&self.values)
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

impl From<&[f64]> for Sample {
    fn from(values: &[f64]) -> Self {
        Self::from_values(values.iter().copied())
    }
}

impl TryFrom<&Column> for Sample {
    type Error = Error;

    fn try_from(column: &Column) -> Result<Self> {
        match column {
            Column::Numeric(values) => Ok(Self::from(values.as_slice())),
            Column::Text(_) => Err(Error::type_mismatch("numeric column", column.type_name())),
        }
    }
}

/// A single table column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    /// Real-valued column; may contain NaN/±Inf until cleaned
    Numeric(Vec<f64>),
    /// Non-numeric column, skipped by numeric operations
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "numeric",
            Self::Text(_) => "text",
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Self::Numeric(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Self::Text(values)
    }
}

/// Named columns in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<(String, Column)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column, replacing an existing one with the same name in place
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Self {
        self.insert(name, column);
        self
    }

    /// Insert or replace a column
    pub fn insert(&mut self, name: impl Into<String>, column: impl Into<Column>) {
        let name = name.into();
        let column = column.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = column,
            None => self.columns.push((name, column)),
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Cleaned sample of a numeric column
    pub fn sample(&self, name: &str) -> Result<Sample> {
        let column = self
            .column(name)
            .ok_or_else(|| Error::InvalidInput(format!("no column named {name:?}")))?;
        Sample::try_from(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Numeric columns only, in insertion order
    pub fn numeric_columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .filter_map(|(n, c)| c.as_numeric().map(|v| (n.as_str(), v)))
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
