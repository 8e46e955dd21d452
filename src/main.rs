//! # chatscope CLI
//!
//! Command-line interface for the chatscope library.

use std::process;

use clap::Parser as ClapParser;

use chatscope::aggregate::{DailyCounts, Stats};
use chatscope::chart::ChartRecord;
use chatscope::cli::Args;
use chatscope::export::export_csv;
use chatscope::pipeline::{chart_data, run};
use chatscope::{ChartShape, ChatscopeError, Period, ingest};

use chrono::Local;
use serde::Serialize;

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// JSON payload for `--json` mode.
#[derive(Serialize)]
struct JsonReport<'a> {
    chat: Option<&'a str>,
    period: Period,
    chart: ChartShape,
    stats: Stats,
    daily: &'a [DailyCounts],
    chart_data: &'a [ChartRecord],
}

fn run_cli() -> Result<(), ChatscopeError> {
    let args = <Args as ClapParser>::parse();

    // One instant per invocation: the report, the chart records and the
    // CSV export all resolve their windows from this.
    let now = Local::now();

    let export = ingest::parse_file(&args.input)?;
    let report = run(&export.messages, args.period, now);
    let records = chart_data(&report, args.chart);

    if args.json {
        let payload = JsonReport {
            chat: export.name.as_deref(),
            period: args.period,
            chart: args.chart,
            stats: report.stats,
            daily: &report.daily,
            chart_data: &records,
        };
        let rendered = serde_json::to_string_pretty(&payload).map_err(ChatscopeError::Json)?;
        println!("{rendered}");
    } else {
        print_report(&args, &export, &report, &records);
    }

    if let Some(ref base) = args.export {
        let (summary_path, messages_path) =
            export_csv(&export.messages, args.period, now, base)?;
        if !args.json {
            println!();
            println!("💾 Exported:");
            println!("   {}", summary_path.display());
            println!("   {}", messages_path.display());
        }
    }

    Ok(())
}

fn print_report(
    args: &Args,
    export: &ingest::ChatExport,
    report: &chatscope::pipeline::Report,
    records: &[ChartRecord],
) {
    println!("📊 chatscope v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if let Some(ref name) = export.name {
        println!("💬 Chat:    {}", name);
    }
    println!("📂 Input:   {}", args.input.display());
    println!("📅 Period:  {}", args.period);
    println!("📈 Chart:   {}", args.chart);
    println!();

    if report.is_empty() {
        println!("ℹ️  No messages in {} - nothing to report.", args.period);
        return;
    }

    println!("📊 Summary:");
    println!("   Total messages:   {}", report.stats.total_messages);
    println!("   PR (with URLs):   {}", report.stats.pr_messages);
    println!("   Direct (no URLs): {}", report.stats.direct_messages);

    println!();
    println!("🗓️  Daily breakdown:");
    println!("   {:<12} {:>7} {:>7} {:>7}", "Date", "Total", "PR", "Direct");
    for bucket in &report.daily {
        println!(
            "   {:<12} {:>7} {:>7} {:>7}",
            bucket.date.format("%Y-%m-%d"),
            bucket.total,
            bucket.pr,
            bucket.direct
        );
    }

    if args.chart == ChartShape::Pie {
        println!();
        println!("🥧 Proportion:");
        for record in records {
            if let ChartRecord::Slice { name, value } = record {
                println!("   {:<16} {}", name, value);
            }
        }
    }
}
