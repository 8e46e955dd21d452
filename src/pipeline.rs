//! The end-to-end aggregation pipeline.
//!
//! `raw messages → admission window → filter → daily aggregation`, with a
//! separate projection step for chart-ready records. Every invocation is a
//! pure function of `(messages, period, now)`: nothing is cached between
//! calls and the inputs are never mutated, so repeated runs at the same
//! instant are identical and concurrent runs over the same collection are
//! safe.
//!
//! Both consumers of the admitted set - the report here and the CSV export -
//! go through the same [`admitted`] function, so summary totals and detail
//! rows can never diverge.
//!
//! # Example
//!
//! ```
//! use chatscope::pipeline::{chart_data, run};
//! use chatscope::{ChartShape, Message, Period, TextEntity};
//! use chrono::{Local, TimeZone};
//!
//! let now = Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let messages = vec![
//!     Message::new(1, (now - chrono::TimeDelta::days(1)).with_timezone(&chrono::Utc))
//!         .with_entity(TextEntity::new("link", "https://example.com/pull/7")),
//! ];
//!
//! let report = run(&messages, Period::Last7Days, now);
//! assert_eq!(report.stats.pr_messages, 1);
//!
//! let records = chart_data(&report, ChartShape::Pie);
//! assert_eq!(records.len(), 2);
//! ```

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::aggregate::{DailyCounts, Stats, aggregate};
use crate::chart::{ChartRecord, ChartShape, project};
use crate::message::Message;
use crate::period::{Period, Window};

/// The aggregated result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Collection-wide totals over the admitted set.
    pub stats: Stats,

    /// Per-day breakdown, ascending by calendar date.
    pub daily: Vec<DailyCounts>,
}

impl Report {
    /// Returns `true` if the period admitted no messages.
    ///
    /// Consumers should render an explicit "no data" state for this case;
    /// it is never an error.
    pub fn is_empty(&self) -> bool {
        self.stats.total_messages == 0
    }
}

/// Filters `messages` through the admission window for `(period, now)`,
/// preserving the original relative order.
///
/// This is the single filter both the report pipeline and the export use.
pub fn admitted<'a>(
    messages: &'a [Message],
    period: Period,
    now: DateTime<Local>,
) -> Vec<&'a Message> {
    let window = Window::resolve(period, now);
    messages
        .iter()
        .filter(|msg| window.admits(msg.timestamp))
        .collect()
}

/// Runs the full pipeline: filter by period, then aggregate per day.
///
/// Recomputes from scratch over the full admitted set on every call; there
/// is no incremental update path. `now` must come from the caller so that
/// one logical user action resolves every window from a single instant.
pub fn run(messages: &[Message], period: Period, now: DateTime<Local>) -> Report {
    let selected = admitted(messages, period, now);
    let (stats, daily) = aggregate(selected.into_iter());
    Report { stats, daily }
}

/// Projects a report into chart-ready records for `shape`.
pub fn chart_data(report: &Report, shape: ChartShape) -> Vec<ChartRecord> {
    project(&report.stats, &report.daily, shape)
}
