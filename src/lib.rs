//! Chat Distance: scores two-party conversations for conversational distance
//!
//! Every message is scored on arrival (short reply, no question, avoidance phrase).
//! A session aggregates those scores into a bounded distance percentage and a
//! per-participant breakdown, each with feedback lines.

pub mod core;
pub mod error;
pub mod types;

pub use error::DistanceError;

// =============================================================================
// PENALTY WEIGHTS
// =============================================================================

/// Penalty for a one-word reply without a question mark
pub const PENALTY_SHORT_REPLY: u32 = 1;

/// Penalty for a message that contains no question mark
pub const PENALTY_NO_QUESTION: u32 = 2;

/// Penalty for a message that uses an avoidance phrase
pub const PENALTY_AVOIDANCE: u32 = 3;

/// Highest penalty a single message can receive (1 + 2 + 3)
pub const MAX_MESSAGE_PENALTY: u32 = PENALTY_SHORT_REPLY + PENALTY_NO_QUESTION + PENALTY_AVOIDANCE;

/// Upper bound of the distance percentage
pub const MAX_DISTANCE: f64 = 100.0;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Phrase list read by the CLI when no path is given
pub const DEFAULT_PHRASE_FILE: &str = "avoid.txt";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
