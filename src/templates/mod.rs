//! Template tables - plan text keyed by goal, band and trend

pub mod diet;
pub mod workout;

/// Full-width semicolon, as the client renders notes
pub const NOTE_SEPARATOR: &str = "；";

pub fn join_notes(notes: &[&str]) -> String {
    notes.join(NOTE_SEPARATOR)
}
