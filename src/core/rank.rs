//! Batch ranking by urgency score.
//!
//! Classification of one ticket never depends on another, so the batch is
//! scored with a rayon fan-out and only the final sort runs single-threaded.

use rayon::prelude::*;
use tracing::debug;

use crate::core::classify::classify;
use crate::core::ticket::{TicketInput, UrgencyResult};

/// Reorder tickets by descending urgency score.
///
/// Equal scores keep their original relative order (stable sort). The
/// internally computed results are discarded: callers get back the bare
/// ticket records, and anyone who wants the scores alongside uses
/// [`rank_with_scores`] instead.
pub fn rank_by_urgency(tickets: Vec<TicketInput>) -> Vec<TicketInput>
{
    rank_with_scores(tickets)
        .into_iter()
        .map(|(ticket, _)| ticket)
        .collect()
}

/// Rank a batch and keep each ticket paired with its result.
pub fn rank_with_scores(tickets: Vec<TicketInput>) -> Vec<(TicketInput, UrgencyResult)>
{
    // Parallel score pass; collect preserves input order, which the stable
    // sort below relies on for tie-breaking.
    let results = classify_batch(&tickets);

    debug!(tickets = tickets.len(), "ranked batch");

    let mut scored: Vec<(TicketInput, UrgencyResult)> = tickets
        .into_iter()
        .zip(results)
        .collect();

    scored.sort_by(|a, b| {
        b.1.score
            .total_cmp(&a.1.score)
    });

    scored
}

/// Classify every ticket in a batch, preserving input order.
pub fn classify_batch(tickets: &[TicketInput]) -> Vec<UrgencyResult>
{
    tickets
        .par_iter()
        .map(classify)
        .collect()
}

#[cfg(test)]
mod tests
{
    use chrono::Utc;

    use super::*;

    fn ticket(
        id: &str,
        description: &str,
        is_urgent: bool,
    ) -> TicketInput
    {
        TicketInput {
            id: id.to_string(),
            description: description.to_string(),
            tags: Vec::new(),
            is_urgent,
            created_at: Utc::now(),
        }
    }

    fn ids(tickets: &[TicketInput]) -> Vec<&str>
    {
        tickets
            .iter()
            .map(|t| t.id.as_str())
            .collect()
    }

    #[test]
    fn orders_by_descending_score()
    {
        let batch = vec![
            ticket("calm", "quisiera renovar mi licencia anual", false),
            ticket("hot", "pedidos urgentes, usuarios bloqueados", true),
            ticket("warm", "tengo problemas con las impresoras", true),
        ];

        let ranked = rank_by_urgency(batch);
        assert_eq!(ids(&ranked), vec!["hot", "warm", "calm"]);
    }

    #[test]
    fn equal_scores_keep_input_order()
    {
        // Three textually different tickets with identical scores (flag only)
        let batch = vec![
            ticket("first", "renovacion de carnet", true),
            ticket("second", "cambio de horario del taller", true),
            ticket("third", "alta de casilla nueva", true),
        ];

        let ranked = rank_by_urgency(batch);
        assert_eq!(ids(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn output_is_a_permutation_of_the_input()
    {
        let batch = vec![
            ticket("a", "pedidos urgentes, usuarios bloqueados", false),
            ticket("b", "", false),
            ticket("c", "tengo problemas con las impresoras", false),
            ticket("d", "hay temas urgentes pendientes", true),
        ];

        let mut before: Vec<String> = batch
            .iter()
            .map(|t| t.id.clone())
            .collect();
        let ranked = rank_by_urgency(batch);
        let mut after: Vec<String> = ranked
            .iter()
            .map(|t| t.id.clone())
            .collect();

        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn classify_batch_preserves_input_order()
    {
        let batch = vec![
            ticket("a", "quisiera renovar mi licencia anual", false),
            ticket("b", "pedidos urgentes, usuarios bloqueados", true),
        ];

        let results = classify_batch(&batch);
        assert_eq!(results[0].ticket_id, "a");
        assert_eq!(results[1].ticket_id, "b");
        assert!(results[1].score > results[0].score);
    }
}
