//! **ticket-triage** - Deterministic multi-signal urgency scoring for support tickets
//!
//! A ticket's free text, tags and manual-urgent flag are turned into a numeric
//! urgency score, a discrete level and a rationale trail by five independent
//! heuristic signals. A companion ranker reorders whole batches by that score.
//! Scoring is pure and total: no I/O, no shared mutable state, no failure
//! modes.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Scoring engine - pure, deterministic, parallelizable
pub mod core {
    /// Ticket snapshot and result types
    pub mod ticket;
    pub use ticket::{TicketInput, UrgencyLevel, UrgencyResult};

    /// Tokenizer and bag-of-words cosine similarity
    pub mod similarity;
    pub use similarity::{cosine_similarity, tokenize};

    /// Fixed keyword/tag lexicons, time patterns and reference phrases
    pub mod lexicon;

    /// The five independent urgency signals
    pub mod signals;

    /// Signal aggregation into one scored result per ticket
    pub mod classify;
    pub use classify::classify;

    /// Batch ranking by descending urgency
    pub mod rank;
    pub use rank::{classify_batch, rank_by_urgency, rank_with_scores};
}

/// CLI command handlers - all terminal rendering and file I/O lives here
pub mod cli_ext {
    /// `classify` subcommand: score a batch and render results
    pub mod classify_cmd;

    /// `rank` subcommand: reorder a batch by urgency
    pub mod rank_cmd;
}

/// Infrastructure - configuration and ticket-file input
pub mod infra {
    /// Configuration management with TOML support
    pub mod config;
    // `self::` disambiguates from the config crate itself
    pub use self::config::{Config, init as config_init, load_config};

    /// Memory-mapped file I/O and JSON batch decoding
    pub mod io;
    pub use self::io::{FileContent, TicketFileError, load_tickets, parse_tickets, read_file_smart};
}

// Strategic re-exports for clean consumption
pub use cli::{AppContext, Cli, Commands};
pub use crate::core::{
    TicketInput,
    UrgencyLevel,
    UrgencyResult,
    classify,
    classify_batch,
    rank_by_urgency,
    rank_with_scores,
};
pub use infra::{Config, load_config, load_tickets};
