use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// File Synchronization Planner
///
/// Decide, per file, whether to upload, delete remotely, or do nothing
#[derive(Parser, Debug)]
#[command(name = "syncplan")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan actions for local files against a remote manifest
    Plan(PlanArgs),

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Local files to consider, relative to --root
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory the file and manifest paths are relative to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Remote manifest (TOML, or JSON with a .json extension)
    #[arg(long, value_name = "PATH")]
    pub remote: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Per-file listing and summary
    Text,
    /// Pretty-printed JSON
    Json,
}
