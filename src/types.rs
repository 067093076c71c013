//! Domain types for todo-cli.

use thiserror::Error;

// ============================================================================
// ENTRIES
// ============================================================================

/// A single todo entry.
///
/// Carries only its display text. Position in the list is the only
/// identity an entry has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Display text. Non-empty and trimmed — the list operations
    /// enforce this before an item is ever constructed.
    pub text: String,
}

impl TodoItem {
    /// Construct an item from already-validated text.
    pub fn new(text: impl Into<String>) -> Self {
        TodoItem { text: text.into() }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Input validation failures. These are the only two error kinds in the
/// program; both are reported at the point of occurrence and abandon at
/// most the current attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Blank or whitespace-only text where an item was required.
    #[error("input cannot be empty")]
    EmptyInput,

    /// Index input that is not an integer or falls outside `[1, len]`.
    /// The message doubles as the inline re-prompt text.
    #[error("Please enter a valid index.")]
    InvalidIndex,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_item_holds_text() {
        let item = TodoItem::new("Buy milk");
        assert_eq!(item.text, "Buy milk");
    }

    #[test]
    fn invalid_index_message_is_the_reprompt_text() {
        assert_eq!(
            ValidationError::InvalidIndex.to_string(),
            "Please enter a valid index."
        );
    }

    #[test]
    fn empty_input_has_a_message() {
        assert_eq!(
            ValidationError::EmptyInput.to_string(),
            "input cannot be empty"
        );
    }
}
