//! Color semantics for the interactive session.
//!
//! Centralized style definitions — consumed by the rendering layer and
//! the prompt builders for visual consistency.
//!
//! Color semantics:
//! - Green: success (banner, add/delete confirmations)
//! - Yellow: headers and notices (list header, empty-list notices, exit)
//! - Cyan: list entries
//! - Red: rejected input
//! - Blue: prompts
//! - Bright black: de-emphasized (the empty-list line)

use console::Style;
use dialoguer::theme::ColorfulTheme;

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Welcome banner — green.
pub fn banner() -> Style {
    Style::new().green()
}

/// List header ("Your Todo List:") — yellow.
pub fn header() -> Style {
    Style::new().yellow()
}

/// A numbered list entry — cyan.
pub fn item() -> Style {
    Style::new().cyan()
}

/// The empty-list line — de-emphasized gray.
pub fn empty() -> Style {
    Style::new().black().bright()
}

/// Successful add/update/delete confirmation — green.
pub fn success() -> Style {
    Style::new().green()
}

/// Rejected (blank) input — red.
pub fn failure() -> Style {
    Style::new().red()
}

/// Flow notices: empty-list short-circuits and the exit message — yellow.
pub fn notice() -> Style {
    Style::new().yellow()
}

// ============================================================================
// PROMPT THEME
// ============================================================================

/// Theme for every dialoguer prompt: blue prompt text, red inline
/// validation errors.
pub fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_style: Style::new().blue(),
        error_style: Style::new().red(),
        ..ColorfulTheme::default()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(style: Style, text: &str) -> String {
        style.apply_to(text).force_styling(true).to_string()
    }

    #[test]
    fn semantic_styles_emit_expected_colors() {
        assert!(painted(banner(), "x").contains("\u{1b}[32m")); // green
        assert!(painted(header(), "x").contains("\u{1b}[33m")); // yellow
        assert!(painted(item(), "x").contains("\u{1b}[36m")); // cyan
        assert!(painted(failure(), "x").contains("\u{1b}[31m")); // red
        assert!(painted(empty(), "x").contains("\u{1b}[90m")); // bright black
    }

    #[test]
    fn notices_share_the_header_color() {
        assert_eq!(painted(notice(), "x"), painted(header(), "x"));
    }

    #[test]
    fn prompts_are_blue() {
        let theme = prompt_theme();
        let rendered = theme
            .prompt_style
            .apply_to("x")
            .force_styling(true)
            .to_string();
        assert!(rendered.contains("\u{1b}[34m")); // blue
    }
}
