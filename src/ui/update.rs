//! Pure command application: (TodoList, Command) → Outcome.
//!
//! Fully testable without a terminal. The prompt flows own input
//! acquisition and index validation; by the time a Command arrives here
//! any index it carries is in range, so the only failure left is blank
//! text.

use crate::list::TodoList;

use super::state::{Command, Outcome};

/// Apply a gathered command to the list, producing the outcome to report.
pub fn apply(list: &mut TodoList, command: Command) -> Outcome {
    match command {
        Command::Add { text } => match list.add(&text) {
            Ok(stored) => Outcome::Added { text: stored },
            Err(_) => Outcome::AddRejected,
        },
        Command::Update { index, text } => match list.update(index, &text) {
            Ok(()) => Outcome::Updated,
            Err(_) => Outcome::UpdateRejected,
        },
        Command::Delete { index } => Outcome::Deleted {
            text: list.delete(index),
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
