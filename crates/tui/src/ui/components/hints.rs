use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn table() -> Vec<KeyHint> {
    vec![
        KeyHint::new("↑↓", "select"),
        KeyHint::new("a", "add"),
        KeyHint::new("e", "edit"),
        KeyHint::new("d", "delete"),
        KeyHint::new("c", "clear all"),
        KeyHint::new("s", "save"),
        KeyHint::new("l", "load"),
        KeyHint::new("q", "quit"),
    ]
}

pub fn form() -> Vec<KeyHint> {
    vec![
        KeyHint::new("Tab", "next"),
        KeyHint::new("↑↓", "category"),
        KeyHint::new("Enter", "ok"),
        KeyHint::new("Esc", "cancel"),
    ]
}

pub fn confirm() -> Vec<KeyHint> {
    vec![KeyHint::new("y", "yes"), KeyHint::new("n", "no")]
}

pub fn prompt() -> Vec<KeyHint> {
    vec![KeyHint::new("Enter", "ok"), KeyHint::new("Esc", "cancel")]
}
