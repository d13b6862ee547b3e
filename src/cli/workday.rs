//! Workday reconciliation arguments

use std::path::PathBuf;

use clap::Parser;

use super::common::OutputFormat;

/// Arguments for 'compare-workday'
#[derive(Parser, Debug)]
pub struct CompareWorkdayArgs {
    /// Zendesk export with Email and Organization columns
    #[arg(short = 'z', long)]
    pub zendesk_file: PathBuf,

    /// Workday report with an "Email Address" column
    #[arg(short = 'w', long)]
    pub workday_file: PathBuf,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}
