//! List semantics: ordered storage and the mutating operations.
//!
//! Pure functions — no I/O, easily testable. The interactive layer
//! gathers input and calls in here; all validation rules live here.

use crate::types::{TodoItem, ValidationError};

// ============================================================================
// INDEX SELECTION
// ============================================================================

/// Parse a user-entered 1-based index against a list of `len` entries.
///
/// Accepts every integer in `[1, len]` and returns the 0-based position.
/// Rejects non-integer input, zero, negatives, and anything past the end.
/// Shared by the update and delete flows.
pub fn select_index(raw: &str, len: usize) -> Result<usize, ValidationError> {
    let parsed: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidIndex)?;

    if parsed < 1 || parsed > len as i64 {
        return Err(ValidationError::InvalidIndex);
    }

    Ok((parsed - 1) as usize)
}

// ============================================================================
// THE LIST
// ============================================================================

/// An ordered, in-memory todo list.
///
/// Insertion order is the display and addressing order. Every stored text
/// is non-empty after trimming; there is no size limit and no
/// deduplication. The list lives for one session and is never persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Create an empty list.
    pub fn new() -> Self {
        TodoList::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only view of the entries, in display order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Append a new entry from raw user input.
    ///
    /// The input is trimmed first; blank input is rejected without
    /// mutation. On success returns the text as stored, for the
    /// confirmation message.
    pub fn add(&mut self, raw: &str) -> Result<String, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        self.items.push(TodoItem::new(trimmed));
        Ok(trimmed.to_string())
    }

    /// Overwrite the text of the entry at `index` (0-based, already
    /// validated via [`select_index`]).
    ///
    /// The new text is trimmed first; blank input is rejected without
    /// mutation. Entry position is preserved — only the text changes.
    pub fn update(&mut self, index: usize, raw: &str) -> Result<(), ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        self.items[index].text = trimmed.to_string();
        Ok(())
    }

    /// Remove the entry at `index` (0-based, already validated via
    /// [`select_index`]), closing the gap. Returns the removed text for
    /// the confirmation message.
    pub fn delete(&mut self, index: usize) -> String {
        self.items.remove(index).text
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(texts: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for text in texts {
            list.add(text).expect("non-empty test fixture");
        }
        list
    }

    // --- add ---

    #[test]
    fn add_appends_in_order() {
        let list = populated(&["Buy milk", "Call Bob", "Water plants"]);
        let texts: Vec<&str> = list.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Buy milk", "Call Bob", "Water plants"]);
    }

    #[test]
    fn add_trims_surrounding_whitespace() {
        let mut list = TodoList::new();
        let stored = list.add("  Buy milk  ").unwrap();
        assert_eq!(stored, "Buy milk");
        assert_eq!(list.items()[0].text, "Buy milk");
    }

    #[test]
    fn add_rejects_empty_input() {
        let mut list = TodoList::new();
        assert_eq!(list.add(""), Err(ValidationError::EmptyInput));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn add_rejects_whitespace_only_input() {
        let mut list = populated(&["Buy milk"]);
        assert_eq!(list.add("   "), Err(ValidationError::EmptyInput));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_allows_duplicates() {
        let list = populated(&["Buy milk", "Buy milk"]);
        assert_eq!(list.len(), 2);
    }

    // --- update ---

    #[test]
    fn update_changes_only_the_target_entry() {
        let mut list = populated(&["Buy milk", "Call Bob", "Water plants"]);
        list.update(1, "Call Alice").unwrap();

        let texts: Vec<&str> = list.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Buy milk", "Call Alice", "Water plants"]);
    }

    #[test]
    fn update_trims_new_text() {
        let mut list = populated(&["Buy milk"]);
        list.update(0, "  Buy oat milk  ").unwrap();
        assert_eq!(list.items()[0].text, "Buy oat milk");
    }

    #[test]
    fn update_rejects_empty_text_without_mutation() {
        let mut list = populated(&["Buy milk"]);
        assert_eq!(list.update(0, "  "), Err(ValidationError::EmptyInput));
        assert_eq!(list.items()[0].text, "Buy milk");
    }

    // --- delete ---

    #[test]
    fn delete_removes_exactly_one_and_shifts_left() {
        let mut list = populated(&["Buy milk", "Call Bob", "Water plants"]);
        let removed = list.delete(1);

        assert_eq!(removed, "Call Bob");
        let texts: Vec<&str> = list.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Buy milk", "Water plants"]);
    }

    #[test]
    fn delete_first_entry_shifts_all() {
        let mut list = populated(&["Buy milk", "Call Bob"]);
        let removed = list.delete(0);

        assert_eq!(removed, "Buy milk");
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].text, "Call Bob");
    }

    #[test]
    fn delete_last_entry_leaves_rest_untouched() {
        let mut list = populated(&["Buy milk", "Call Bob"]);
        let removed = list.delete(1);

        assert_eq!(removed, "Call Bob");
        assert_eq!(list.items()[0].text, "Buy milk");
    }

    // --- select_index ---

    #[test]
    fn select_index_accepts_every_position_in_range() {
        for n in 1..=5 {
            let raw = n.to_string();
            assert_eq!(select_index(&raw, 5), Ok(n - 1));
        }
    }

    #[test]
    fn select_index_rejects_zero() {
        assert_eq!(select_index("0", 3), Err(ValidationError::InvalidIndex));
    }

    #[test]
    fn select_index_rejects_negative() {
        assert_eq!(select_index("-2", 3), Err(ValidationError::InvalidIndex));
    }

    #[test]
    fn select_index_rejects_past_the_end() {
        assert_eq!(select_index("4", 3), Err(ValidationError::InvalidIndex));
    }

    #[test]
    fn select_index_rejects_non_numeric() {
        assert_eq!(select_index("two", 3), Err(ValidationError::InvalidIndex));
        assert_eq!(select_index("2abc", 3), Err(ValidationError::InvalidIndex));
        assert_eq!(select_index("1.5", 3), Err(ValidationError::InvalidIndex));
        assert_eq!(select_index("", 3), Err(ValidationError::InvalidIndex));
    }

    #[test]
    fn select_index_rejects_everything_on_empty_list() {
        assert_eq!(select_index("1", 0), Err(ValidationError::InvalidIndex));
    }

    #[test]
    fn select_index_tolerates_surrounding_whitespace() {
        assert_eq!(select_index(" 2 ", 3), Ok(1));
    }
}
