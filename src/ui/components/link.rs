//! Link primitive
//!
//! A labelled navigable target. Terminals cannot follow links, so the
//! rendered form is the label followed by the target in muted text.

use ratatui::text::{Line, Span};
use serde::{Deserialize, Serialize};

use crate::ui::theme::Theme;

use super::node::{Node, Role};

/// A link descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Presentation node for this link; `key` identifies it among siblings
    pub fn to_node(&self, key: &str) -> Node {
        Node::new("a")
            .with_role(Role::Link)
            .with_attribute("href", self.href.as_str())
            .with_attribute("data-key", key)
            .with_text(self.label.as_str())
    }

    pub fn to_line(&self, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.label.clone(), theme.link_style()),
            Span::raw(" "),
            Span::styled(format!("<{}>", self.href), theme.muted_style()),
        ])
    }
}
