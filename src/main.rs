use anyhow::Result;
use clap::Parser;
use ticket_triage::cli::{AppContext, Cli, Commands};
use ticket_triage::infra::config::load_config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Opt-in diagnostics via TRIAGE_LOG (e.g. TRIAGE_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TRIAGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    let config = load_config()?;

    match cli.command {
        Commands::Classify(args) => ticket_triage::cli_ext::classify_cmd::run(args, &ctx, &config),
        Commands::Rank(args) => ticket_triage::cli_ext::rank_cmd::run(args, &ctx, &config),
        Commands::Init(args) => ticket_triage::infra::config::init(args, &ctx),
        Commands::Completions(args) => ticket_triage::completion::run(args),
    }
}
