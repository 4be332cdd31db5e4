//! The five independent urgency signals.
//!
//! Every signal is a stateless, total function from a slice of the ticket to
//! a non-negative point contribution plus an optional human-readable reason.
//! Signals never observe one another, so the aggregator may run them in any
//! order (or in parallel) as long as it reports reasons in the fixed
//! enumeration order.

use crate::core::lexicon::{
    HISTORICAL_URGENT,
    KEYWORD_MATCHER,
    MEDIUM_TAGS,
    TIME_PATTERNS,
    URGENT_TAGS,
};
use crate::core::similarity::cosine_similarity;

/// One signal's contribution: points plus an optional rationale line.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal
{
    /// Points added to the aggregate score, always >= 0
    pub points: f64,
    /// Rationale line, present only when the signal wants to be reported
    pub reason: Option<String>,
}

impl Signal
{
    fn none() -> Self
    {
        Self { points: 0.0, reason: None }
    }
}

/// Keyword lexicon scan over description + tags.
///
/// The banded keyword weights may sum below zero when low-urgency words
/// dominate; the result is floored at 0 here, locally, before aggregation.
pub fn keyword_signal(full_text: &str) -> Signal
{
    let points = KEYWORD_MATCHER
        .score(full_text)
        .max(0.0);

    if points > 0.0
    {
        Signal { points, reason: Some(format!("urgency keywords in text ({points} pts)")) }
    }
    else
    {
        Signal::none()
    }
}

/// Prolonged-time expressions in the raw description.
///
/// Patterns are evaluated independently; a description matching several
/// patterns collects +2 for each one.
pub fn time_pattern_signal(description: &str) -> Signal
{
    let points = TIME_PATTERNS
        .iter()
        .filter(|pattern| pattern.is_match(description))
        .count() as f64
        * 2.0;

    if points > 0.0
    {
        Signal { points, reason: Some(format!("mentions a prolonged time span ({points} pts)")) }
    }
    else
    {
        Signal::none()
    }
}

/// Per-tag vocabulary check.
///
/// Each tag falls into at most one band: the urgent vocabulary (+3) is
/// checked first and short-circuits the medium one (+1.5). Containment is
/// substring-based on the lowercased tag, like the keyword signal.
pub fn tag_signal(tags: &[String]) -> Signal
{
    let mut points = 0.0;

    for tag in tags
    {
        let tag = tag.to_lowercase();

        if URGENT_TAGS
            .iter()
            .any(|vocab| tag.contains(vocab))
        {
            points += 3.0;
        }
        else if MEDIUM_TAGS
            .iter()
            .any(|vocab| tag.contains(vocab))
        {
            points += 1.5;
        }
    }

    if points > 0.0
    {
        Signal { points, reason: Some(format!("tags indicate urgency ({points} pts)")) }
    }
    else
    {
        Signal::none()
    }
}

/// Fixed +5 when the reporter flagged the ticket urgent by hand.
pub fn manual_flag_signal(is_urgent: bool) -> Signal
{
    if is_urgent
    {
        Signal { points: 5.0, reason: Some("user marked as urgent (5 pts)".to_string()) }
    }
    else
    {
        Signal::none()
    }
}

/// Reporting threshold for the historical-similarity signal.
const SIMILARITY_REPORT_THRESHOLD: f64 = 0.3;

/// Cosine similarity against the canonical historically urgent phrases.
///
/// Contributes `2 x max similarity` to the score unconditionally, but only
/// surfaces a reason above the 0.3 threshold. A faint resemblance still
/// moves the score, silently; that asymmetry is intentional.
pub fn historical_signal(full_text: &str) -> Signal
{
    let max_similarity = HISTORICAL_URGENT
        .iter()
        .map(|phrase| cosine_similarity(full_text, phrase))
        .fold(0.0, f64::max);

    let reason = (max_similarity > SIMILARITY_REPORT_THRESHOLD)
        .then(|| format!("similar to historical urgent tickets ({max_similarity:.2} sim)"));

    Signal { points: max_similarity * 2.0, reason }
}
