//! CLI handler for the `rank` subcommand.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tabled::{Table, Tabled};
use tracing::instrument;

use crate::cli::{AppContext, OutputFormat, RankArgs};
use crate::cli_ext::classify_cmd::{effective_format, paint_level, read_batch};
use crate::core::rank::{rank_by_urgency, rank_with_scores};
use crate::core::ticket::{TicketInput, UrgencyResult};
use crate::infra::config::Config;

/// One table row of ranked output.
#[derive(Tabled)]
struct RankRow
{
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Ticket")]
    id: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Level")]
    level: String,
}

enum RankOutput
{
    Bare(Vec<TicketInput>),
    Scored(Vec<(TicketInput, UrgencyResult)>),
}

/// Run the `rank` command end-to-end.
#[instrument(skip(args, ctx, config))]
pub fn run(
    args: RankArgs,
    ctx: &AppContext,
    config: &Config,
) -> Result<()>
{
    let tickets = read_batch(&args.input)?;

    // Spinner for large batches; scoring itself reports no progress
    let spinner = (!ctx.quiet
        && tickets.len()
            >= config
                .rank
                .progress_threshold)
        .then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| {
                    ProgressStyle::default_spinner()
                }),
            );
            pb.set_message(format!("scoring {} tickets", tickets.len()));
            pb.enable_steady_tick(std::time::Duration::from_millis(80));
            pb
        });

    let show_scores = !args.no_scores
        && config
            .rank
            .show_scores;

    let output = if show_scores
    {
        RankOutput::Scored(rank_with_scores(tickets))
    }
    else
    {
        RankOutput::Bare(rank_by_urgency(tickets))
    };

    if let Some(pb) = spinner
    {
        pb.finish_and_clear();
    }

    match (effective_format(args.format, config), output)
    {
        (OutputFormat::Json, RankOutput::Bare(ranked)) =>
        {
            let json = serde_json::to_string_pretty(&ranked).context("encode ranked tickets")?;
            println!("{json}");
        }

        (OutputFormat::Json, RankOutput::Scored(scored)) =>
        {
            let results: Vec<_> = scored
                .iter()
                .map(|(_, result)| result)
                .collect();
            let json = serde_json::to_string_pretty(&results).context("encode ranked results")?;
            println!("{json}");
        }

        (OutputFormat::Table, RankOutput::Bare(ranked)) =>
        {
            for ticket in &ranked
            {
                println!("{}", ticket.id);
            }
        }

        (OutputFormat::Table, RankOutput::Scored(scored)) =>
        {
            let rows: Vec<RankRow> = scored
                .iter()
                .enumerate()
                .map(|(i, (ticket, result))| RankRow {
                    position: i + 1,
                    id: ticket
                        .id
                        .clone(),
                    score: format!("{:.2}", result.score),
                    level: paint_level(result.level, ctx.no_color),
                })
                .collect();

            println!("{}", Table::new(rows));
        }
    }

    Ok(())
}
