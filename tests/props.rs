//! Property tests for the scoring and ranking invariants.

use chrono::{TimeZone, Utc};
use proptest::collection::vec;
use proptest::prelude::*;
use ticket_triage::{TicketInput, classify, rank_by_urgency};

fn arb_ticket() -> impl Strategy<Value = TicketInput>
{
    (
        "[a-z0-9-]{1,12}",
        // Free text mixing Spanish lexicon words, accents and noise
        "[a-záéíóúñ0-9 .,!?]{0,80}",
        vec("[a-záéíóúñ-]{0,16}", 0..4),
        any::<bool>(),
    )
        .prop_map(|(id, description, tags, is_urgent)| TicketInput {
            id,
            description,
            tags,
            is_urgent,
            created_at: Utc
                .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
                .unwrap(),
        })
}

proptest! {
    #[test]
    fn score_is_never_negative(ticket in arb_ticket())
    {
        let result = classify(&ticket);
        prop_assert!(result.score >= 0.0, "negative score {}", result.score);
    }

    #[test]
    fn manual_flag_floors_the_score_at_five(mut ticket in arb_ticket())
    {
        ticket.is_urgent = true;
        let result = classify(&ticket);
        prop_assert!(result.score >= 5.0, "flagged ticket scored {}", result.score);
    }

    #[test]
    fn classification_is_deterministic(ticket in arb_ticket())
    {
        prop_assert_eq!(classify(&ticket), classify(&ticket));
    }

    #[test]
    fn level_matches_the_band_rule(ticket in arb_ticket())
    {
        let result = classify(&ticket);
        let expected = if result.score >= 8.0 { "high" }
            else if result.score >= 4.0 { "medium" }
            else { "low" };
        prop_assert_eq!(result.level.as_str(), expected);
    }

    #[test]
    fn ranking_permutes_without_loss(batch in vec(arb_ticket(), 0..24))
    {
        let mut before: Vec<String> = batch.iter().map(|t| t.id.clone()).collect();
        let ranked = rank_by_urgency(batch);
        let mut after: Vec<String> = ranked.iter().map(|t| t.id.clone()).collect();

        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn ranking_is_monotonically_decreasing(batch in vec(arb_ticket(), 0..24))
    {
        let ranked = rank_by_urgency(batch);
        let scores: Vec<f64> = ranked.iter().map(|t| classify(t).score).collect();

        for pair in scores.windows(2)
        {
            prop_assert!(pair[0] >= pair[1], "out of order: {:?}", scores);
        }
    }

    #[test]
    fn reason_count_never_exceeds_signal_count(ticket in arb_ticket())
    {
        let result = classify(&ticket);
        prop_assert!(result.reasons.len() <= 5);
    }
}
