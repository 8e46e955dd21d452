//! Period selection and admission windows.
//!
//! This module defines:
//! - [`Period`] - the closed set of reporting periods
//! - [`Window`] - the admission instant-range derived from a period
//!
//! A window is recomputed from an explicit `now` instant on every evaluation;
//! nothing here reads the clock, so period resolution is a pure function and
//! testable with fixed instants.
//!
//! # Window Rules
//!
//! | Period | Window |
//! |--------|--------|
//! | All Time | unbounded, filtering bypassed |
//! | Last 7 / 30 / 90 Days | `now − N days` upward, exact duration |
//! | This Month | local midnight of day 1 of the current month, upward |
//! | Last Month | day 1 of the previous month through local midnight of its last day, **closed** |
//!
//! Calendar boundaries use the local calendar of the evaluating process;
//! message timestamps are compared as UTC instants.
//!
//! # Example
//!
//! ```
//! use chatscope::period::{Period, Window};
//! use chrono::{Local, TimeZone, Utc};
//!
//! let now = Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let window = Window::resolve(Period::Last7Days, now);
//!
//! assert!(window.admits(now.with_timezone(&Utc)));
//! ```

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// The reporting periods a caller can select.
///
/// This is a closed enumeration; the exhaustive `match` in
/// [`Window::resolve`] replaces the epoch-start fallback a stringly-typed
/// selector would need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Period {
    /// Every message, regardless of age.
    #[default]
    #[serde(rename = "all-time")]
    #[cfg_attr(feature = "cli", value(name = "all-time"))]
    AllTime,

    /// Messages from the last 7 days (exact duration, not calendar days).
    #[serde(rename = "last-7-days")]
    #[cfg_attr(feature = "cli", value(name = "last-7-days"))]
    Last7Days,

    /// Messages from the last 30 days.
    #[serde(rename = "last-30-days")]
    #[cfg_attr(feature = "cli", value(name = "last-30-days"))]
    Last30Days,

    /// Messages from the last 90 days.
    #[serde(rename = "last-90-days")]
    #[cfg_attr(feature = "cli", value(name = "last-90-days"))]
    Last90Days,

    /// Messages since the first day of the current month.
    #[serde(rename = "this-month")]
    #[cfg_attr(feature = "cli", value(name = "this-month"))]
    ThisMonth,

    /// Messages within the previous calendar month. The only period with
    /// an upper bound.
    #[serde(rename = "last-month")]
    #[cfg_attr(feature = "cli", value(name = "last-month"))]
    LastMonth,
}

impl Period {
    /// All selectable periods, in display order.
    pub fn all() -> [Period; 6] {
        [
            Period::AllTime,
            Period::Last7Days,
            Period::Last30Days,
            Period::Last90Days,
            Period::ThisMonth,
            Period::LastMonth,
        ]
    }

    /// Returns all supported period names.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "all-time",
            "last-7-days",
            "last-30-days",
            "last-90-days",
            "this-month",
            "last-month",
        ]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::AllTime => write!(f, "All Time"),
            Period::Last7Days => write!(f, "Last 7 Days"),
            Period::Last30Days => write!(f, "Last 30 Days"),
            Period::Last90Days => write!(f, "Last 90 Days"),
            Period::ThisMonth => write!(f, "This Month"),
            Period::LastMonth => write!(f, "Last Month"),
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all-time" | "all" => Ok(Period::AllTime),
            "last-7-days" | "7d" => Ok(Period::Last7Days),
            "last-30-days" | "30d" => Ok(Period::Last30Days),
            "last-90-days" | "90d" => Ok(Period::Last90Days),
            "this-month" => Ok(Period::ThisMonth),
            "last-month" => Ok(Period::LastMonth),
            _ => Err(format!(
                "Unknown period: '{}'. Expected one of: {}",
                s,
                Period::all_names().join(", ")
            )),
        }
    }
}

/// The admission instant-range derived from a [`Period`].
///
/// Open-ended windows admit everything at or after their lower bound
/// (future-dated messages pass); the Last Month window is closed on both
/// ends, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// No bounds; every message is admitted.
    Unbounded,

    /// Admits timestamps at or after the bound.
    From(DateTime<Utc>),

    /// Admits timestamps within the closed range `[lower, upper]`.
    Between(DateTime<Utc>, DateTime<Utc>),
}

impl Window {
    /// Resolves the admission window for `period` as of `now`.
    ///
    /// `now` is deliberately a parameter: both the report pipeline and the
    /// export pipeline must resolve their windows from the same instant so
    /// their admitted sets never diverge.
    pub fn resolve(period: Period, now: DateTime<Local>) -> Self {
        match period {
            Period::AllTime => Window::Unbounded,
            Period::Last7Days => Window::From(days_back(now, 7)),
            Period::Last30Days => Window::From(days_back(now, 30)),
            Period::Last90Days => Window::From(days_back(now, 90)),
            Period::ThisMonth => Window::From(local_midnight(first_of_month(now.date_naive()))),
            Period::LastMonth => {
                // Day 1 and pred() of a day-1 date always exist.
                let first_this = first_of_month(now.date_naive());
                let last_prev = first_this.pred_opt().unwrap();
                let first_prev = first_of_month(last_prev);
                Window::Between(local_midnight(first_prev), local_midnight(last_prev))
            }
        }
    }

    /// Returns `true` if a message with timestamp `ts` falls inside this window.
    pub fn admits(&self, ts: DateTime<Utc>) -> bool {
        match self {
            Window::Unbounded => true,
            Window::From(lower) => ts >= *lower,
            Window::Between(lower, upper) => *lower <= ts && ts <= *upper,
        }
    }

    /// Returns `true` if this window filters anything at all.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, Window::Unbounded)
    }
}

fn days_back(now: DateTime<Local>, days: i64) -> DateTime<Utc> {
    (now - TimeDelta::days(days)).with_timezone(&Utc)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 is valid for every month.
    date.with_day(1).unwrap()
}

/// Local midnight of `date` as a UTC instant.
fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    naive
        .and_local_timezone(Local)
        .earliest()
        // Midnight erased by a DST gap: the day starts an hour later.
        .or_else(|| (naive + TimeDelta::hours(1)).and_local_timezone(Local).earliest())
        .map_or_else(|| Utc.from_utc_datetime(&naive), |dt| dt.with_timezone(&Utc))
}
