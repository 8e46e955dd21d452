//! # Chatscope
//!
//! A Rust library for turning Telegram Desktop chat exports into
//! time-windowed message statistics, chart-ready data and CSV exports.
//!
//! ## Overview
//!
//! Chatscope ingests a Telegram JSON export and runs a pure, deterministic
//! pipeline over it:
//!
//! 1. **Period resolution** — a named period ([`Period`]) plus an explicit
//!    `now` instant become an admission window
//! 2. **Filtering** — messages outside the window are dropped, order preserved
//! 3. **Classification** — each message is PR (link-bearing) or Direct
//! 4. **Daily aggregation** — per-local-calendar-day counters plus totals
//! 5. **Projection** — reshaping into the records a chart shape needs
//!
//! Every stage is side-effect-free; the clock is always an explicit
//! parameter, so results are reproducible at a fixed instant.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatscope::prelude::*;
//! use chrono::Local;
//!
//! fn main() -> Result<()> {
//!     let export = ingest::parse_file("result.json".as_ref())?;
//!
//!     let report = run(&export.messages, Period::Last30Days, Local::now());
//!     println!("{} messages, {} with links",
//!         report.stats.total_messages, report.stats.pr_messages);
//!
//!     for record in chart_data(&report, ChartShape::Pie) {
//!         println!("{record:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`ingest`] — Telegram JSON parsing and boundary validation
//! - [`message`] — [`Message`], [`TextEntity`], [`Classification`]
//! - [`period`] — [`Period`] options and [`Window`](period::Window) resolution
//! - [`aggregate`] — [`Stats`](aggregate::Stats), daily buckets, the aggregator
//! - [`chart`] — [`ChartShape`], [`ChartRecord`](chart::ChartRecord), projection
//! - [`pipeline`] — [`run`](pipeline::run), [`chart_data`](pipeline::chart_data),
//!   the shared admission filter
//! - [`export`] — CSV writers (requires the `csv-export` feature)
//! - [`cli`] — CLI argument types (requires the `cli` feature)
//! - [`error`] — Unified error types ([`ChatscopeError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod aggregate;
pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
#[cfg(feature = "csv-export")]
pub mod export;
pub mod ingest;
pub mod message;
pub mod period;
pub mod pipeline;

// Re-export the main types at the crate root for convenience
pub use chart::ChartShape;
pub use error::{ChatscopeError, Result};
pub use message::{Classification, Message, TextEntity};
pub use period::Period;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatscope::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{Classification, Message, TextEntity};

    // Error types
    pub use crate::error::{ChatscopeError, Result};

    // Ingestion
    pub use crate::ingest::{self, ChatExport};

    // Period selection
    pub use crate::period::{Period, Window};

    // Aggregation
    pub use crate::aggregate::{DailyCounts, Stats, aggregate};

    // Chart projection
    pub use crate::chart::{ChartRecord, ChartShape, project};

    // Pipeline entry points
    pub use crate::pipeline::{Report, admitted, chart_data, run};

    // CSV export
    #[cfg(feature = "csv-export")]
    pub use crate::export::{export_csv, to_messages_csv, to_summary_csv};
}
