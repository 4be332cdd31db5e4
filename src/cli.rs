use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
}

#[derive(Parser)]
#[command(name = "ticket-triage")]
#[command(about = "Deterministic multi-signal urgency scoring and ranking for support tickets")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress bars and non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score each ticket in a batch and show score, level and reasons
    Classify(ClassifyArgs),

    /// Reorder a ticket batch by descending urgency
    Rank(RankArgs),

    /// Initialize a triage.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Ticket batch file (JSON array), or "-" for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Output format (defaults to the configured one)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Hide the per-signal reason lines in table output
    #[arg(long)]
    pub no_reasons: bool,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Ticket batch file (JSON array), or "-" for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Output format (defaults to the configured one)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Hide the score/level columns and print the bare ranked ids
    #[arg(long)]
    pub no_scores: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory for the generated triage.toml
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the completion file into this directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print the completion script to stdout instead
    #[arg(long)]
    pub stdout: bool,
}
