//! Chart-shape projection of aggregate results.
//!
//! This module reshapes ([`Stats`], daily breakdown) into the minimal record
//! set a given chart shape needs:
//!
//! - [`ChartShape::Bar`] / [`ChartShape::Line`] - one time-series point per
//!   daily bucket, date order preserved (the projection is identical for both)
//! - [`ChartShape::Pie`] - exactly two slices, PR vs Direct, derived from the
//!   totals alone
//!
//! [`ChartRecord`] serializes untagged, so a JSON consumer distinguishes the
//! encodings by field presence (`total`/`pr`/`direct` vs `value`).

use serde::{Deserialize, Serialize};

use crate::aggregate::{DailyCounts, Stats};

/// Slice labels for the proportion projection.
const PR_SLICE: &str = "PR Messages";
const DIRECT_SLICE: &str = "Direct Messages";

/// The chart shapes a caller can request.
///
/// `Line` is projected identically to `Bar`; it is part of the data model
/// even though the default selector only offers Bar and Pie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ChartShape {
    /// Per-day stacked totals.
    #[default]
    Bar,

    /// Per-day totals as a trend line.
    Line,

    /// PR vs Direct proportion.
    Pie,
}

impl std::fmt::Display for ChartShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartShape::Bar => write!(f, "Bar"),
            ChartShape::Line => write!(f, "Line"),
            ChartShape::Pie => write!(f, "Pie"),
        }
    }
}

impl std::str::FromStr for ChartShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bar" => Ok(ChartShape::Bar),
            "line" => Ok(ChartShape::Line),
            "pie" => Ok(ChartShape::Pie),
            _ => Err(format!(
                "Unknown chart shape: '{}'. Expected one of: bar, line, pie",
                s
            )),
        }
    }
}

/// One chart-ready record.
///
/// Computed fresh on every projection; never mutated, always fully replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChartRecord {
    /// One daily bucket of a time-series shape.
    Series {
        /// ISO calendar date label.
        name: String,
        total: u64,
        pr: u64,
        direct: u64,
    },

    /// One slice of the proportion shape.
    Slice {
        /// Slice label.
        name: String,
        value: u64,
    },
}

/// Projects aggregate results into chart-ready records for `shape`.
///
/// Bar and Line pass the daily breakdown through one-to-one; Pie derives two
/// slices from `stats` and ignores `daily` entirely.
///
/// # Example
///
/// ```
/// use chatscope::aggregate::Stats;
/// use chatscope::chart::{project, ChartRecord, ChartShape};
///
/// let stats = Stats { total_messages: 10, pr_messages: 4, direct_messages: 6 };
/// let records = project(&stats, &[], ChartShape::Pie);
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(
///     records[0],
///     ChartRecord::Slice { name: "PR Messages".into(), value: 4 }
/// );
/// ```
pub fn project(stats: &Stats, daily: &[DailyCounts], shape: ChartShape) -> Vec<ChartRecord> {
    match shape {
        ChartShape::Bar | ChartShape::Line => daily
            .iter()
            .map(|bucket| ChartRecord::Series {
                name: bucket.date.format("%Y-%m-%d").to_string(),
                total: bucket.total,
                pr: bucket.pr,
                direct: bucket.direct,
            })
            .collect(),
        ChartShape::Pie => vec![
            ChartRecord::Slice {
                name: PR_SLICE.to_string(),
                value: stats.pr_messages,
            },
            ChartRecord::Slice {
                name: DIRECT_SLICE.to_string(),
                value: stats.direct_messages,
            },
        ],
    }
}
