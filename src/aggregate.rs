//! Daily aggregation of admitted messages.
//!
//! A single pass over the admitted set classifies each message and counts it
//! into a per-local-calendar-day bucket plus the collection-wide totals.
//! The accumulator is a `BTreeMap` keyed by calendar date, so the returned
//! breakdown is date-ascending regardless of input order.
//!
//! # Invariants
//!
//! - `stats.total_messages == stats.pr_messages + stats.direct_messages`
//! - every bucket: `total == pr + direct`
//! - `stats.total_messages == Σ bucket.total`
//!
//! # Example
//!
//! ```
//! use chatscope::aggregate::aggregate;
//! use chatscope::{Message, TextEntity};
//! use chrono::{TimeZone, Utc};
//!
//! let messages = vec![
//!     Message::new(1, Utc.with_ymd_and_hms(2024, 6, 14, 9, 0, 0).unwrap())
//!         .with_entity(TextEntity::new("link", "https://example.com/pull/1")),
//!     Message::new(2, Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap()),
//! ];
//!
//! let (stats, daily) = aggregate(messages.iter());
//! assert_eq!(stats.total_messages, 2);
//! assert_eq!(stats.pr_messages, 1);
//! assert_eq!(daily.len(), 2);
//! ```

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::message::{Classification, Message};

/// Collection-wide totals over the admitted set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Total admitted messages.
    pub total_messages: u64,
    /// Messages classified as PR (link-bearing).
    pub pr_messages: u64,
    /// Messages classified as Direct.
    pub direct_messages: u64,
}

/// Per-calendar-day counters.
///
/// The date is the message's **local** calendar day, no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCounts {
    /// Local calendar date of the bucket.
    pub date: NaiveDate,
    /// All messages on this day.
    pub total: u64,
    /// PR messages on this day.
    pub pr: u64,
    /// Direct messages on this day.
    pub direct: u64,
}

/// Aggregates admitted messages into totals and a date-sorted daily breakdown.
///
/// Single pass, `O(n)` time, `O(d)` auxiliary space for `d` distinct days.
/// An empty input yields zeroed [`Stats`] and an empty breakdown.
pub fn aggregate<'a, I>(messages: I) -> (Stats, Vec<DailyCounts>)
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut stats = Stats::default();
    let mut by_day: BTreeMap<NaiveDate, (u64, u64, u64)> = BTreeMap::new();

    for msg in messages {
        let classification = msg.classification();

        stats.total_messages += 1;
        match classification {
            Classification::Pr => stats.pr_messages += 1,
            Classification::Direct => stats.direct_messages += 1,
        }

        let date = msg.timestamp.with_timezone(&Local).date_naive();
        let (total, pr, direct) = by_day.entry(date).or_default();
        *total += 1;
        match classification {
            Classification::Pr => *pr += 1,
            Classification::Direct => *direct += 1,
        }
    }

    let daily = by_day
        .into_iter()
        .map(|(date, (total, pr, direct))| DailyCounts {
            date,
            total,
            pr,
            direct,
        })
        .collect();

    (stats, daily)
}
