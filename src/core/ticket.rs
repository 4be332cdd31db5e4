//! Ticket data model shared by the scoring engine and the CLI.
//!
//! `TicketInput` is an immutable snapshot supplied by whatever system stores
//! tickets; the engine never mutates it. `UrgencyResult` is built fresh on
//! every classification and never persisted here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable ticket snapshot entering the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketInput
{
    /// Opaque ticket identifier
    pub id: String,
    /// Free-text problem description
    pub description: String,
    /// Tag list as entered; duplicates allowed, order preserved
    #[serde(default)]
    pub tags: Vec<String>,
    /// Reporter flagged the ticket urgent by hand
    #[serde(default)]
    pub is_urgent: bool,
    /// Creation timestamp; carried through but not consumed by scoring
    pub created_at: DateTime<Utc>,
}

impl TicketInput
{
    /// Lowercased description plus space-joined tags.
    ///
    /// This is the exact haystack the keyword and historical-similarity
    /// signals match against. The single separating space is kept even for
    /// an empty tag list.
    pub fn full_text(&self) -> String
    {
        format!("{} {}", self.description, self.tags.join(" ")).to_lowercase()
    }
}

/// Discrete urgency band derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel
{
    High,
    Medium,
    Low,
}

impl UrgencyLevel
{
    /// Band rule: `score >= 8` high, `score >= 4` medium, else low.
    pub fn from_score(score: f64) -> Self
    {
        if score >= 8.0
        {
            Self::High
        }
        else if score >= 4.0
        {
            Self::Medium
        }
        else
        {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str
    {
        match self
        {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Outcome of classifying one ticket.
///
/// Holds a copy of the ticket id rather than a reference back to the input,
/// so results can outlive the batch they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyResult
{
    /// Copy of the input ticket id
    pub ticket_id: String,
    /// Aggregate urgency score, always >= 0
    pub score: f64,
    /// Band derived from `score`
    pub level: UrgencyLevel,
    /// One human-readable line per signal that fired, in signal order
    pub reasons: Vec<String>,
}
