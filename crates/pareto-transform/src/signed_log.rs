//! Sign-preserving logarithm
//!
//! `y = sign(x) · log_b(|x| + 1)` for the named bases, so zero maps to zero
//! and the transform is monotone over the whole real line.

use pareto_core::{Column, Error, Result, Table};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Logarithm base of [`signed_log`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum LogBase {
    /// `log2(|x| + 1)`
    Two,
    /// `ln(|x| + 1)`
    Zero,
    /// `log10(|x| + 1)`
    #[default]
    Ten,
    /// `ln|x|` without offset
    Natural,
    /// `ln|x|` scaled by `ln b`
    Custom(f64),
}

impl fmt::Display for LogBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogBase::Two => write!(f, "Two"),
            LogBase::Zero => write!(f, "Zero"),
            LogBase::Ten => write!(f, "Ten"),
            LogBase::Natural => write!(f, "Natural"),
            LogBase::Custom(b) => write!(f, "{b}"),
        }
    }
}

impl FromStr for LogBase {
    type Err = Error;

    /// Accepts `Two`, `Zero`, `Ten`, `Natural` (any case) or a number
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "two" => Ok(LogBase::Two),
            "zero" => Ok(LogBase::Zero),
            "ten" => Ok(LogBase::Ten),
            "natural" => Ok(LogBase::Natural),
            _ => s
                .parse::<f64>()
                .map(LogBase::Custom)
                .map_err(|_| Error::InvalidParameter(format!("unknown log base '{s}'"))),
        }
    }
}

/// −1, 0 or 1; NaN stays NaN
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// Signed logarithm of every value
///
/// A custom base that is not a usable logarithm base (non-finite, ≤ 0 or 1)
/// or data containing an exact zero fall back to [`LogBase::Ten`].
pub fn signed_log(data: &[f64], base: LogBase) -> Vec<f64> {
    let base = match base {
        LogBase::Custom(b) if !custom_base_usable(b, data) => {
            debug!(base = b, "falling back to log10(|x| + 1)");
            LogBase::Ten
        }
        other => other,
    };

    data.iter()
        .map(|&x| {
            let magnitude = match base {
                LogBase::Two => (x.abs() + 1.0).log2(),
                LogBase::Zero => x.abs().ln_1p(),
                LogBase::Ten => (x.abs() + 1.0).log10(),
                LogBase::Natural => x.abs().ln(),
                LogBase::Custom(b) => x.abs().ln() / b.ln() * b.ln(),
            };
            sign(x) * magnitude
        })
        .collect()
}

fn custom_base_usable(b: f64, data: &[f64]) -> bool {
    b.is_finite() && b > 0.0 && b != 1.0 && !data.iter().any(|&x| x == 0.0)
}

/// Signed logarithm with the base given by name
///
/// Unknown names fall back to [`LogBase::Ten`].
pub fn signed_log_named(data: &[f64], base: &str) -> Vec<f64> {
    let base = base.parse::<LogBase>().unwrap_or_else(|err| {
        debug!(%err, "falling back to log10(|x| + 1)");
        LogBase::Ten
    });
    signed_log(data, base)
}

/// Signed logarithm of every numeric column; text columns pass through
pub fn signed_log_table(table: &Table, base: LogBase) -> Table {
    let mut out = Table::new();
    for (name, column) in table.columns() {
        match column.as_numeric() {
            Some(values) => out.insert(name, signed_log(values, base)),
            None => out.insert(name, column.clone()),
        }
    }
    out
}

/// Signed logarithm of one numeric column
pub fn signed_log_column(column: &Column, base: LogBase) -> Result<Vec<f64>> {
    column
        .as_numeric()
        .map(|values| signed_log(values, base))
        .ok_or_else(|| Error::type_mismatch("numeric column", column.type_name()))
}
