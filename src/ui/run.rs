//! Effects boundary: the prompt loop.
//!
//! This is the only module with side effects. It wires the pure layers
//! (list, state, update, view) to the real terminal via dialoguer
//! prompts and stdout printing. Kept minimal — all intelligence lives
//! in the pure layers.
//!
//! Two retry scopes exist and stay independent: the main menu re-offers
//! its four actions after every flow, while invalid index input is
//! re-asked in place by the prompt's own validator.

use dialoguer::{Input, Select};
use tracing::debug;

use crate::list::{TodoList, select_index};

use super::state::{Command, MenuAction, Notice};
use super::theme;
use super::update::apply;
use super::view;

// ============================================================================
// SESSION LOOP
// ============================================================================

/// Run one interactive session: banner, menu loop, final render.
///
/// Returns when the user picks Exit. Prompt I/O failures (lost terminal,
/// closed stdin) propagate to the caller.
pub fn run() -> dialoguer::Result<()> {
    let mut todos = TodoList::new();

    print!("{}", view::banner());

    loop {
        let action = prompt_menu()?;
        debug!(?action, "menu action selected");

        match action {
            MenuAction::Add => add_flow(&mut todos)?,
            MenuAction::Update => update_flow(&mut todos)?,
            MenuAction::Delete => delete_flow(&mut todos)?,
            MenuAction::Exit => {
                print!("{}", view::notice(&Notice::Exiting));
                break;
            }
        }
    }

    // Final unconditional render before the process ends.
    print!("{}", view::render_list(&todos));
    Ok(())
}

// ============================================================================
// PROMPTS
// ============================================================================

/// Present the four-way main menu and return the chosen action.
fn prompt_menu() -> dialoguer::Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    let chosen = Select::with_theme(&theme::prompt_theme())
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuAction::ALL[chosen])
}

/// Free-text prompt. Empty input passes through — the blank check
/// belongs to the list operations, which report it as a styled failure.
fn prompt_text(prompt: &str) -> dialoguer::Result<String> {
    Input::with_theme(&theme::prompt_theme())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
}

/// Index prompt with in-place retry: the validator re-asks the same
/// question until the input parses and falls inside `[1, len]`.
fn prompt_index(prompt: &str, len: usize) -> dialoguer::Result<usize> {
    let raw: String = Input::with_theme(&theme::prompt_theme())
        .with_prompt(prompt)
        .validate_with(|input: &String| select_index(input, len).map(|_| ()))
        .interact_text()?;

    Ok(select_index(&raw, len).expect("accepted by the prompt validator"))
}

// ============================================================================
// FLOWS
// ============================================================================

fn add_flow(todos: &mut TodoList) -> dialoguer::Result<()> {
    let text = prompt_text("Enter a new todo item:")?;

    let outcome = apply(todos, Command::Add { text });
    debug!(?outcome, len = todos.len(), "add flow finished");
    print!("{}", view::feedback(&outcome));
    Ok(())
}

fn update_flow(todos: &mut TodoList) -> dialoguer::Result<()> {
    if todos.is_empty() {
        print!("{}", view::notice(&Notice::NothingToUpdate));
        return Ok(());
    }

    print!("{}", view::render_list(todos));
    let index = prompt_index("Enter the index of the todo item to update:", todos.len())?;
    let text = prompt_text("Enter the new value for the todo item:")?;

    let outcome = apply(todos, Command::Update { index, text });
    debug!(?outcome, index, "update flow finished");
    print!("{}", view::feedback(&outcome));
    Ok(())
}

fn delete_flow(todos: &mut TodoList) -> dialoguer::Result<()> {
    if todos.is_empty() {
        print!("{}", view::notice(&Notice::NothingToDelete));
        return Ok(());
    }

    print!("{}", view::render_list(todos));
    let index = prompt_index("Enter the index of the todo item to delete:", todos.len())?;

    let outcome = apply(todos, Command::Delete { index });
    debug!(?outcome, len = todos.len(), "delete flow finished");
    print!("{}", view::feedback(&outcome));
    Ok(())
}
