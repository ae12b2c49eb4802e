//! Known conversation participants

use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};

/// The participants that receive per-participant aggregation.
///
/// Senders are free-form strings; only the labels listed here are recognized.
/// Messages from any other sender are stored but never counted per participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    A,
    B,
}

impl Participant {
    /// Report order: first participant, then second
    pub const ALL: [Participant; 2] = [Participant::A, Participant::B];

    /// Recognize a sender label (exact, case-sensitive)
    pub fn from_sender(sender: &str) -> Option<Self> {
        match sender {
            "A" => Some(Participant::A),
            "B" => Some(Participant::B),
            _ => None,
        }
    }

    /// Sender label as typed by the user
    pub fn label(&self) -> &'static str {
        match self {
            Participant::A => "A",
            Participant::B => "B",
        }
    }

    /// Position in [`Participant::ALL`], used to index per-participant counters
    pub fn index(&self) -> usize {
        match self {
            Participant::A => 0,
            Participant::B => 1,
        }
    }

    /// Terminal color for this participant's label
    pub fn color(&self) -> Color {
        match self {
            Participant::A => Color::Cyan,
            Participant::B => Color::Magenta,
        }
    }

    /// Label painted in the participant's color
    pub fn colored_label(&self) -> String {
        self.label().color(self.color()).bold().to_string()
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
