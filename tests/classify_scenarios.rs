//! End-to-end scoring scenarios against the public API.

use chrono::{TimeZone, Utc};
use ticket_triage::{TicketInput, UrgencyLevel, classify};

fn ticket(
    id: &str,
    description: &str,
    tags: &[&str],
    is_urgent: bool,
) -> TicketInput
{
    TicketInput {
        id: id.to_string(),
        description: description.to_string(),
        tags: tags
            .iter()
            .map(|t| t.to_string())
            .collect(),
        is_urgent,
        created_at: Utc
            .with_ymd_and_hms(2025, 3, 10, 9, 0, 0)
            .unwrap(),
    }
}

#[test]
fn manual_flag_alone_yields_medium_five()
{
    let r = classify(&ticket("T-1", "quisiera renovar mi licencia anual", &[], true));

    assert_eq!(r.ticket_id, "T-1");
    assert_eq!(r.score, 5.0);
    assert_eq!(r.level, UrgencyLevel::Medium);
    assert_eq!(r.reasons, vec!["user marked as urgent (5 pts)".to_string()]);
}

#[test]
fn one_high_keyword_alone_stays_low()
{
    let r = classify(&ticket("T-2", "hay temas urgentes pendientes", &[], false));

    assert_eq!(r.score, 3.0);
    assert_eq!(r.level, UrgencyLevel::Low);
    assert_eq!(r.reasons.len(), 1);
}

#[test]
fn medium_keyword_and_technical_term_with_flag_is_medium_seven()
{
    let r = classify(&ticket("T-3", "tengo problemas con las impresoras", &[], true));

    assert_eq!(r.score, 7.0);
    assert_eq!(r.level, UrgencyLevel::Medium);
}

#[test]
fn two_high_keywords_with_flag_cross_into_high()
{
    let r = classify(&ticket("T-4", "pedidos urgentes, usuarios bloqueados", &[], true));

    assert_eq!(r.score, 11.0);
    assert_eq!(r.level, UrgencyLevel::High);
}

#[test]
fn exact_historical_phrase_match_reports_full_similarity()
{
    // Tokenizes to exactly {error, critico, servidor, caido}; the unaccented
    // spellings keep the accented high-band keywords out of play, leaving
    // "error" (+1.5), "servidor" (+0.5) and the similarity bonus (+2.0)
    let r = classify(&ticket("T-5", "critico? caido; servidor error", &[], false));

    assert!((r.score - 4.0).abs() < 1e-9, "score was {}", r.score);
    assert!(
        r.reasons
            .contains(&"similar to historical urgent tickets (1.00 sim)".to_string()),
        "reasons: {:?}",
        r.reasons
    );
}

#[test]
fn time_patterns_stack_per_pattern()
{
    // "3 horas sin poder" and "desde ayer" and "todo el día" fire separately
    let r = classify(&ticket(
        "T-6",
        "llevo 3 horas sin poder imprimir, desde ayer anda mal, todo el día perdido",
        &[],
        false,
    ));

    assert!(
        r.reasons
            .iter()
            .any(|reason| reason.contains("prolonged time span (6 pts)")),
        "reasons: {:?}",
        r.reasons
    );
}

#[test]
fn tags_feed_both_the_keyword_and_tag_signals()
{
    // The tag text joins the keyword haystack ("urgente" +3) and the tag
    // vocabulary scan (+3)
    let r = classify(&ticket("T-7", "revisar cuenta de correo", &["urgentes"], false));

    assert_eq!(r.score, 6.0);
    assert_eq!(r.reasons.len(), 2);
}

#[test]
fn low_band_keywords_cannot_drag_the_total_negative()
{
    let r = classify(&ticket("T-8", "duda sin prisa para cuando pueda", &[], false));

    assert_eq!(r.score, 0.0);
    assert_eq!(r.level, UrgencyLevel::Low);
    assert!(r.reasons.is_empty());
}

#[test]
fn whitespace_only_description_is_harmless()
{
    let r = classify(&ticket("T-9", "   \t  ", &[], false));

    assert_eq!(r.score, 0.0);
    assert!(r.reasons.is_empty());
}

#[test]
fn results_are_bit_identical_across_calls()
{
    let t = ticket(
        "T-10",
        "urgente!! el servidor está caído desde ayer y no puedo trabajar",
        &["critico", "problema"],
        true,
    );

    let first = classify(&t);
    let second = classify(&t);
    assert_eq!(first, second);
}
