//! Text rendering of todos and lists.

use serde::{Deserialize, Serialize};

/// Rendering configuration.
///
/// The default style produces `---- <name> ----` headers and `[X]` / `[ ]`
/// checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Rule placed on both sides of the list name in the header.
    pub header_rule: String,

    /// Checkbox marker for a done todo.
    pub done_marker: char,

    /// Checkbox marker for a todo that is not done.
    pub undone_marker: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            header_rule: "----".to_string(),
            done_marker: 'X',
            undone_marker: ' ',
        }
    }
}

impl RenderStyle {
    /// Builder method to set the header rule.
    pub fn with_header_rule(mut self, rule: impl Into<String>) -> Self {
        self.header_rule = rule.into();
        self
    }

    /// Builder method to set both checkbox markers.
    pub fn with_markers(mut self, done: char, undone: char) -> Self {
        self.done_marker = done;
        self.undone_marker = undone;
        self
    }

    /// Render one item line, e.g. `[X] Buy milk`.
    pub fn line(&self, title: &str, done: bool) -> String {
        let marker = if done {
            self.done_marker
        } else {
            self.undone_marker
        };
        format!("[{}] {}", marker, title)
    }

    /// Render a list header, e.g. `---- Today's Todos ----`.
    pub fn header(&self, name: &str) -> String {
        format!("{rule} {name} {rule}", rule = self.header_rule)
    }
}
