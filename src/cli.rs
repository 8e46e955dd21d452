//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the CLI argument structure. The enums it
//! selects over - [`Period`] and [`ChartShape`] - live in the core modules
//! and derive `ValueEnum` there, so they stay usable outside of CLI context:
//!
//! ```rust
//! use chatscope::{ChartShape, Period};
//!
//! let period: Period = "last-7-days".parse().unwrap();
//! println!("Period: {}", period); // "Last 7 Days"
//! let shape = ChartShape::Pie;
//! println!("Shape: {}", shape); // "Pie"
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::chart::ChartShape;
use crate::period::Period;

/// Compute time-windowed statistics, chart data and CSV exports
/// from a Telegram chat export.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscope")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatscope result.json
    chatscope result.json --period last-7-days
    chatscope result.json --period last-month --chart pie
    chatscope result.json --json
    chatscope result.json --period this-month --export mychat")]
pub struct Args {
    /// Path to the Telegram JSON export
    pub input: PathBuf,

    /// Reporting period
    #[arg(short, long, value_enum, default_value = "all-time")]
    pub period: Period,

    /// Chart shape for the projected records
    #[arg(short, long, value_enum, default_value = "bar")]
    pub chart: ChartShape,

    /// Print the report and chart records as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Write summary and message CSVs next to this path stem
    #[arg(short, long, value_name = "BASE")]
    pub export: Option<PathBuf>,
}
