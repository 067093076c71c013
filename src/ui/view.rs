//! Pure rendering: map list state and outcomes to styled text.
//!
//! Every function is (data) → String, no I/O. The run loop prints the
//! returned strings verbatim; each already carries its trailing blank
//! line, so callers use `print!`, never `println!`.

use crate::list::TodoList;

use super::state::{Notice, Outcome};
use super::theme;

/// The startup banner, shown once. Trailing blank line included.
const WELCOME_BANNER: &str = "
    ███████╗ ██████╗███████╗███╗   ██╗██╗   ██╗
    ██╔════╝██╔════╝██╔════╝████╗  ██║██║   ██║
    ███████╗██║     █████╗  ██╔██╗ ██║██║   ██║
    ╚════██║██║     ██╔══╝  ██║╚██╗██║██║   ██║
    ███████║╚██████╗███████╗██║ ╚████║╚██████╔╝
    ╚══════╝ ╚═════╝╚══════╝╚═╝  ╚═══╝ ╚═════╝

Welcome to Todo List App!
";

// ============================================================================
// RENDERING
// ============================================================================

/// The one-time welcome banner.
pub fn banner() -> String {
    format!("{}\n", theme::banner().apply_to(WELCOME_BANNER))
}

/// Numbered (1-based) listing of the current entries, or the empty
/// notice. Header, rows, then a blank line.
pub fn render_list(list: &TodoList) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        theme::header().apply_to("Your Todo List:")
    ));

    if list.is_empty() {
        out.push_str(&format!(
            "{}\n\n",
            theme::empty().apply_to("No items in the todo list.")
        ));
    } else {
        for (position, item) in list.items().iter().enumerate() {
            let row = format!("{}. {}", position + 1, item.text);
            out.push_str(&format!("{}\n", theme::item().apply_to(row)));
        }
        out.push('\n');
    }

    out
}

/// Success/failure line for an applied command.
pub fn feedback(outcome: &Outcome) -> String {
    let line = match outcome {
        Outcome::Added { text } => theme::success()
            .apply_to(format!("'{}' added to the todo list.", text)),
        Outcome::AddRejected => theme::failure()
            .apply_to("Todo item cannot be empty.".to_string()),
        Outcome::Updated => theme::success()
            .apply_to("Todo item updated.".to_string()),
        Outcome::UpdateRejected => theme::failure()
            .apply_to("New todo item cannot be empty.".to_string()),
        Outcome::Deleted { text } => theme::success()
            .apply_to(format!("'{}' deleted from the todo list.", text)),
    };

    format!("{}\n\n", line)
}

/// Flow-level notice line.
pub fn notice(notice: &Notice) -> String {
    let text = match notice {
        Notice::NothingToUpdate => "No items to update.",
        Notice::NothingToDelete => "No items to delete.",
        Notice::Exiting => "Exiting Todo List App...",
    };

    format!("{}\n\n", theme::notice().apply_to(text))
}

// ============================================================================
// TESTS
// ============================================================================
