//! Core types for Chat Distance

mod participant;
mod phrases;
mod message;
mod feedback;
mod report;

pub use participant::Participant;
pub use phrases::{AvoidancePhraseSet, tokenize};
pub use message::{Message, MessageScore};
pub use feedback::{FeedbackCode, DistanceCause};
pub use report::{
    SessionReport, SessionSummary, CauseCount, ParticipantReport, PerUserReport,
    NO_MESSAGES_NOTICE,
};
