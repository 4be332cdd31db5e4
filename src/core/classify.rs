//! Urgency aggregation: one ticket in, one scored result out.

use tracing::{debug, instrument};

use crate::core::signals::{
    Signal,
    historical_signal,
    keyword_signal,
    manual_flag_signal,
    tag_signal,
    time_pattern_signal,
};
use crate::core::ticket::{TicketInput, UrgencyLevel, UrgencyResult};

/// Classify a single ticket.
///
/// Runs the five signals against the immutable ticket, sums their
/// contributions, collects the reasons of the signals that fired (in the
/// fixed order keyword, time, tag, manual flag, historical similarity), and
/// derives the level from the score bands. Pure and total: the same ticket
/// always produces the identical result, and no input can make it fail.
#[instrument(level = "debug", skip(ticket), fields(ticket_id = %ticket.id))]
pub fn classify(ticket: &TicketInput) -> UrgencyResult
{
    let full_text = ticket.full_text();

    // Signals are independent; only the reporting order below is fixed.
    let signals: [Signal; 5] = [
        keyword_signal(&full_text),
        time_pattern_signal(&ticket.description),
        tag_signal(&ticket.tags),
        manual_flag_signal(ticket.is_urgent),
        historical_signal(&full_text),
    ];

    let mut score = 0.0;
    let mut reasons = Vec::new();

    for signal in signals
    {
        score += signal.points;

        if let Some(reason) = signal.reason
        {
            reasons.push(reason);
        }
    }

    let level = UrgencyLevel::from_score(score);

    debug!(score, level = level.as_str(), reasons = reasons.len(), "classified ticket");

    UrgencyResult { ticket_id: ticket.id.clone(), score, level, reasons }
}
