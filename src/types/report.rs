//! Session and per-participant reports, with their text rendering

use std::fmt::Write as _;

use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};

use crate::types::{DistanceCause, FeedbackCode, Participant};

/// Text shown when a session has no messages
pub const NO_MESSAGES_NOTICE: &str = "No messages have been entered.";

/// One non-zero cause and how often it occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseCount {
    pub cause: DistanceCause,
    pub count: usize,
}

/// Aggregate numbers for a non-empty session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_messages: usize,
    pub total_penalty: u64,
    pub max_possible: u64,
    /// Distance percentage, clamped to 0.0-100.0 and rounded to one decimal
    /// the way it is displayed
    pub distance: f64,
    /// Only the causes with a non-zero count, in fixed order
    pub causes: Vec<CauseCount>,
    pub feedback: Vec<FeedbackCode>,
}

impl SessionSummary {
    /// Count for a cause, 0 when it did not occur
    pub fn cause_count(&self, cause: DistanceCause) -> usize {
        self.causes
            .iter()
            .find(|c| c.cause == cause)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

/// Whole-session report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionReport {
    /// No messages yet; nothing was computed
    Empty,
    Analyzed(SessionSummary),
}

impl SessionReport {
    pub fn is_empty(&self) -> bool {
        matches!(self, SessionReport::Empty)
    }

    pub fn summary(&self) -> Option<&SessionSummary> {
        match self {
            SessionReport::Empty => None,
            SessionReport::Analyzed(summary) => Some(summary),
        }
    }

    /// Render with terminal colors
    pub fn to_terminal_string(&self) -> String {
        self.render(true)
    }

    fn render(&self, color: bool) -> String {
        let summary = match self {
            SessionReport::Empty => return format!("{}\n", NO_MESSAGES_NOTICE),
            SessionReport::Analyzed(summary) => summary,
        };

        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", paint("======== Conversation Distance ========", Color::White, color, true));
        let _ = writeln!(out, "{:<15}: {}", "Total messages", summary.total_messages);
        let _ = writeln!(
            out,
            "{:<15}: {}",
            "Distance",
            paint(&format!("{:.1} %", summary.distance), distance_color(summary.distance), color, true)
        );

        let _ = writeln!(out);
        let _ = writeln!(out, "[ Causes ]");
        for cause in &summary.causes {
            let _ = writeln!(out, "- {:<14}: {}", cause.cause.label(), cause.count);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "[ Feedback ]");
        for feedback in &summary.feedback {
            let _ = writeln!(out, "- {}", paint(feedback.message(), Color::Yellow, color, false));
        }
        out
    }
}

impl std::fmt::Display for SessionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Breakdown for one known participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantReport {
    pub participant: Participant,
    pub total: usize,
    /// Messages whose content contains `?`
    pub question_count: usize,
    pub score_sum: u32,
    pub short_count: usize,
    /// Stored avoidance counter for this participant
    pub avoid_count: u32,
    pub feedback: Vec<FeedbackCode>,
}

impl ParticipantReport {
    fn render(&self, color: bool) -> String {
        let label = if color {
            self.participant.colored_label()
        } else {
            self.participant.label().to_string()
        };

        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "====== [{}] Participant Analysis ======", label);
        let _ = writeln!(out, "{:<15}: {}", "Total messages", self.total);
        let _ = writeln!(out, "{:<15}: {}", "Questions asked", self.question_count);
        let _ = writeln!(out, "{:<15}: {}", "Score total", self.score_sum);
        let _ = writeln!(out, "{:<15}: {}", "Short replies", self.short_count);
        let _ = writeln!(out, "{:<15}: {}", "Avoidance", self.avoid_count);
        let _ = writeln!(out, "[ Feedback ]");
        for feedback in &self.feedback {
            let tone = if feedback.is_positive() { Color::Green } else { Color::Yellow };
            let _ = writeln!(out, "- {}", paint(feedback.message(), tone, color, false));
        }
        out
    }
}

impl std::fmt::Display for ParticipantReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// One block per known participant, in [`Participant::ALL`] order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerUserReport {
    pub participants: Vec<ParticipantReport>,
}

impl PerUserReport {
    pub fn get(&self, participant: Participant) -> Option<&ParticipantReport> {
        self.participants.iter().find(|r| r.participant == participant)
    }

    /// Render with terminal colors
    pub fn to_terminal_string(&self) -> String {
        self.participants.iter().map(|r| r.render(true)).collect()
    }
}

impl std::fmt::Display for PerUserReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for report in &self.participants {
            write!(f, "{}", report)?;
        }
        Ok(())
    }
}

fn paint(text: &str, tone: Color, color: bool, bold: bool) -> String {
    match (color, bold) {
        (false, _) => text.to_string(),
        (true, false) => text.color(tone).to_string(),
        (true, true) => text.color(tone).bold().to_string(),
    }
}

fn distance_color(distance: f64) -> Color {
    if distance < 34.0 {
        Color::Green
    } else if distance < 67.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}
