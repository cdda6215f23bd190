use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use riverflow_analysis::AnalysisKind;

/// River discharge statistics for gauging stations.
#[derive(Parser)]
#[command(
    name = "riverflow",
    version,
    about = "River discharge statistics: extremes, seasonal peaks, trends, floods and dry periods"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Load the input files and list their stations.
    Stations(StationsArgs),
    /// Run one analysis, or the whole catalog, over the selected stations.
    Analyze(AnalyzeArgs),
}

/// Arguments shared by every subcommand that loads data.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Path to TOML configuration file [default: riverflow.toml if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input CSV file; replaces `[input].files` from config. Repeatable.
    #[arg(short, long = "input")]
    pub inputs: Vec<PathBuf>,
}

/// Arguments for the `stations` subcommand.
#[derive(clap::Args)]
pub struct StationsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Analysis to run (trend, maxflow, avgflow, stddev, minflow, count,
    /// sumflow, season, monthly_avg, mann_kendall, flood, dry).
    #[arg(short, long, required_unless_present = "all", conflicts_with = "all")]
    pub kind: Option<AnalysisKind>,

    /// Run every analysis in catalog order.
    #[arg(long)]
    pub all: bool,

    /// Station to analyse; replaces `[selection].stations`. Repeatable.
    #[arg(short, long = "station")]
    pub stations: Vec<String>,

    /// First day of the window (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day of the window (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Export format: csv, geojson or none.
    #[arg(long)]
    pub export: Option<String>,

    /// Directory for exported files.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Write chart series for trend, sumflow and monthly_avg.
    #[arg(long)]
    pub charts: bool,

    /// Spread per-station work across threads.
    #[arg(long)]
    pub parallel: bool,
}
