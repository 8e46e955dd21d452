//! CSV export writers.
//!
//! Two artifacts per export, mirroring the two sheets of a spreadsheet
//! workbook:
//!
//! - **Summary**: the selected period, the three stat totals, then the daily
//!   breakdown table (`Date,Total,PR,Direct`)
//! - **Messages**: one row per admitted message
//!   (`ID,Date,From,Text,Type,Photo`)
//!
//! The message rows are re-derived through the same
//! [`admitted`](crate::pipeline::admitted) filter and the same `now` instant
//! as the summary, so the two artifacts always agree.
//!
//! Each artifact has a `write_*` (to file) and `to_*` (to `String`) variant.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatscope::export::export_csv;
//! use chatscope::{Message, Period};
//! use chrono::Local;
//!
//! # fn main() -> chatscope::Result<()> {
//! let messages: Vec<Message> = vec![];
//! let (summary, rows) = export_csv(&messages, Period::Last7Days, Local::now(), "mychat".as_ref())?;
//! println!("wrote {} and {}", summary.display(), rows.display());
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::aggregate::{DailyCounts, Stats};
use crate::error::Result;
use crate::message::Message;
use crate::period::Period;
use crate::pipeline::{admitted, run};

/// Placeholder for an absent sender.
const NO_SENDER: &str = "N/A";

/// Writes the summary artifact to `output_path`.
pub fn write_summary_csv(
    output_path: &Path,
    period: Period,
    stats: &Stats,
    daily: &[DailyCounts],
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = summary_writer(file);
    write_summary(&mut writer, period, stats, daily)?;
    writer.flush()?;
    Ok(())
}

/// Renders the summary artifact as a CSV string.
pub fn to_summary_csv(period: Period, stats: &Stats, daily: &[DailyCounts]) -> Result<String> {
    let mut writer = summary_writer(Vec::new());
    write_summary(&mut writer, period, stats, daily)?;
    let buf = writer.into_inner().map_err(|e| io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(buf)?)
}

/// Writes the per-message artifact to `output_path`.
pub fn write_messages_csv(output_path: &Path, messages: &[&Message]) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::Writer::from_writer(file);
    write_messages(&mut writer, messages)?;
    writer.flush()?;
    Ok(())
}

/// Renders the per-message artifact as a CSV string.
pub fn to_messages_csv(messages: &[&Message]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_messages(&mut writer, messages)?;
    let buf = writer.into_inner().map_err(|e| io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(buf)?)
}

/// Runs the pipeline and writes both artifacts next to `base`.
///
/// `base` is the path stem; the artifacts land at
/// `{base}_{Period_With_Underscores}_summary.csv` and `..._messages.csv`.
/// Returns the two written paths. The single `now` instant drives both the
/// summary totals and the message rows.
pub fn export_csv(
    messages: &[Message],
    period: Period,
    now: DateTime<Local>,
    base: &Path,
) -> Result<(PathBuf, PathBuf)> {
    let report = run(messages, period, now);
    let selected = admitted(messages, period, now);

    let summary_path = artifact_path(base, period, "summary");
    let messages_path = artifact_path(base, period, "messages");

    write_summary_csv(&summary_path, period, &report.stats, &report.daily)?;
    write_messages_csv(&messages_path, &selected)?;

    Ok((summary_path, messages_path))
}

/// Builds `{base}_{Period_With_Underscores}_{kind}.csv`.
fn artifact_path(base: &Path, period: Period, kind: &str) -> PathBuf {
    let stem = base.to_string_lossy();
    let period_tag = period.to_string().replace(' ', "_");
    PathBuf::from(format!("{stem}_{period_tag}_{kind}.csv"))
}

// The summary mixes two-column stat lines with the four-column breakdown
// table, so its writer must accept records of unequal length.
fn summary_writer<W: io::Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().flexible(true).from_writer(inner)
}

fn write_summary<W: io::Write>(
    writer: &mut csv::Writer<W>,
    period: Period,
    stats: &Stats,
    daily: &[DailyCounts],
) -> Result<()> {
    writer.write_record(["Period", &period.to_string()])?;
    writer.write_record(["Total Messages", &stats.total_messages.to_string()])?;
    writer.write_record(["PR Messages (with URLs)", &stats.pr_messages.to_string()])?;
    writer.write_record(["Direct Messages (no URLs)", &stats.direct_messages.to_string()])?;
    writer.write_record([""])?;
    writer.write_record(["Daily Breakdown", ""])?;
    writer.write_record(["Date", "Total", "PR", "Direct"])?;

    for bucket in daily {
        writer.write_record([
            bucket.date.format("%Y-%m-%d").to_string(),
            bucket.total.to_string(),
            bucket.pr.to_string(),
            bucket.direct.to_string(),
        ])?;
    }

    Ok(())
}

fn write_messages<W: io::Write>(writer: &mut csv::Writer<W>, messages: &[&Message]) -> Result<()> {
    writer.write_record(["ID", "Date", "From", "Text", "Type", "Photo"])?;

    for msg in messages {
        writer.write_record([
            msg.id.to_string(),
            msg.timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            msg.from.clone().unwrap_or_else(|| NO_SENDER.to_string()),
            msg.full_text(),
            msg.classification().to_string(),
            if msg.has_photo() { "Yes" } else { "No" }.to_string(),
        ])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::TextEntity;
    use chrono::{NaiveDate, TimeZone, Utc};
    use tempfile::tempdir;

    fn sample_stats() -> Stats {
        Stats {
            total_messages: 3,
            pr_messages: 1,
            direct_messages: 2,
        }
    }

    fn sample_daily() -> Vec<DailyCounts> {
        vec![DailyCounts {
            date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
            total: 3,
            pr: 1,
            direct: 2,
        }]
    }

    #[test]
    fn test_summary_csv_content() {
        let summary = to_summary_csv(Period::Last7Days, &sample_stats(), &sample_daily()).unwrap();
        assert!(summary.contains("Period,Last 7 Days"));
        assert!(summary.contains("Total Messages,3"));
        assert!(summary.contains("PR Messages (with URLs),1"));
        assert!(summary.contains("Direct Messages (no URLs),2"));
        assert!(summary.contains("Date,Total,PR,Direct"));
        assert!(summary.contains("2024-06-14,3,1,2"));
    }

    #[test]
    fn test_messages_csv_content() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 14, 9, 30, 0).unwrap();
        let pr = Message::new(1, ts)
            .with_from("Alice")
            .with_entity(TextEntity::new("link", "https://example.com/pull/1"));
        let direct = Message::new(2, ts).with_photo("photos/p.jpg");

        let rows = to_messages_csv(&[&pr, &direct]).unwrap();
        assert!(rows.contains("ID,Date,From,Text,Type,Photo"));
        assert!(rows.contains("https://example.com/pull/1"));
        assert!(rows.contains("PR"));
        assert!(rows.contains("Direct"));
        // Missing sender gets the placeholder; photo flag is Yes/No.
        assert!(rows.contains("N/A"));
        assert!(rows.contains("Yes"));
        assert!(rows.contains("No"));
    }

    #[test]
    fn test_message_date_is_local_format() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 14, 9, 30, 0).unwrap();
        let msg = Message::new(1, ts).with_from("Alice");
        let rows = to_messages_csv(&[&msg]).unwrap();
        let expected = ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string();
        assert!(rows.contains(&expected));
    }

    #[test]
    fn test_export_csv_writes_both_artifacts() {
        let dir = tempdir().unwrap();
        let now = Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let messages = vec![
            Message::new(1, (now - chrono::TimeDelta::days(1)).with_timezone(&Utc))
                .with_from("Alice")
                .with_entity(TextEntity::new("plain", "hello")),
        ];

        let base = dir.path().join("mychat");
        let (summary_path, messages_path) =
            export_csv(&messages, Period::Last7Days, now, &base).unwrap();

        assert!(summary_path.ends_with("mychat_Last_7_Days_summary.csv"));
        assert!(messages_path.ends_with("mychat_Last_7_Days_messages.csv"));

        let summary = std::fs::read_to_string(&summary_path).unwrap();
        assert!(summary.contains("Total Messages,1"));
        let rows = std::fs::read_to_string(&messages_path).unwrap();
        assert!(rows.contains("Alice"));
    }

    #[test]
    fn test_export_csv_summary_and_rows_agree() {
        let dir = tempdir().unwrap();
        let now = Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

        // One inside the window, one outside.
        let messages = vec![
            Message::new(1, (now - chrono::TimeDelta::days(1)).with_timezone(&Utc)),
            Message::new(2, (now - chrono::TimeDelta::days(40)).with_timezone(&Utc)),
        ];

        let base = dir.path().join("chat");
        let (summary_path, messages_path) =
            export_csv(&messages, Period::Last30Days, now, &base).unwrap();

        let summary = std::fs::read_to_string(&summary_path).unwrap();
        assert!(summary.contains("Total Messages,1"));

        let rows = std::fs::read_to_string(&messages_path).unwrap();
        // Header plus exactly one data row.
        assert_eq!(rows.lines().count(), 2);
    }

    #[test]
    fn test_empty_export() {
        let summary = to_summary_csv(Period::AllTime, &Stats::default(), &[]).unwrap();
        assert!(summary.contains("Total Messages,0"));

        let rows = to_messages_csv(&[]).unwrap();
        assert_eq!(rows.lines().count(), 1);
    }
}
