//! CLI handler for the `classify` subcommand.
//!
//! Sources a ticket batch from a file or stdin, runs the scoring engine and
//! renders results as a table or JSON. All I/O lives here; the core stays
//! pure.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use owo_colors::OwoColorize;
use tabled::{Table, Tabled};
use tracing::instrument;

use crate::cli::{AppContext, ClassifyArgs, OutputFormat};
use crate::core::rank::classify_batch;
use crate::core::ticket::{TicketInput, UrgencyLevel, UrgencyResult};
use crate::infra::config::Config;
use crate::infra::io::{load_tickets, parse_tickets};

/// One table row of classification output.
#[derive(Tabled)]
struct ResultRow
{
    #[tabled(rename = "Ticket")]
    id: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Reasons")]
    reasons: String,
}

/// Read a batch from the path, treating "-" as stdin.
pub fn read_batch(path: &Path) -> Result<Vec<TicketInput>>
{
    if path == Path::new("-")
    {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read ticket JSON from stdin")?;

        return parse_tickets(&buf).context("decode ticket JSON from stdin");
    }

    Ok(load_tickets(path)?)
}

/// Pick the effective output format: CLI flag wins over config.
pub fn effective_format(
    flag: Option<OutputFormat>,
    config: &Config,
) -> OutputFormat
{
    flag.unwrap_or(
        match config
            .output
            .format
            .as_str()
        {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        },
    )
}

/// Colorize a level label for terminal output.
pub fn paint_level(
    level: UrgencyLevel,
    no_color: bool,
) -> String
{
    if no_color
    {
        return level
            .as_str()
            .to_string();
    }

    match level
    {
        UrgencyLevel::High => level
            .as_str()
            .red()
            .bold()
            .to_string(),
        UrgencyLevel::Medium => level
            .as_str()
            .yellow()
            .to_string(),
        UrgencyLevel::Low => level
            .as_str()
            .green()
            .to_string(),
    }
}

fn result_row(
    result: &UrgencyResult,
    show_reasons: bool,
    no_color: bool,
) -> ResultRow
{
    let reasons = if show_reasons
    {
        result
            .reasons
            .iter()
            .join("; ")
    }
    else
    {
        String::new()
    };

    ResultRow {
        id: result
            .ticket_id
            .clone(),
        score: format!("{:.2}", result.score),
        level: paint_level(result.level, no_color),
        reasons,
    }
}

/// Run the `classify` command end-to-end.
#[instrument(skip(args, ctx, config))]
pub fn run(
    args: ClassifyArgs,
    ctx: &AppContext,
    config: &Config,
) -> Result<()>
{
    let tickets = read_batch(&args.input)?;
    let results = classify_batch(&tickets);

    match effective_format(args.format, config)
    {
        OutputFormat::Json =>
        {
            let json =
                serde_json::to_string_pretty(&results).context("encode results as JSON")?;
            println!("{json}");
        }

        OutputFormat::Table =>
        {
            let show_reasons = !args.no_reasons
                && config
                    .output
                    .show_reasons;
            let rows: Vec<ResultRow> = results
                .iter()
                .map(|result| result_row(result, show_reasons, ctx.no_color))
                .collect();

            println!("{}", Table::new(rows));

            if !ctx.quiet
            {
                eprintln!("{} tickets classified", results.len());
            }
        }
    }

    Ok(())
}
