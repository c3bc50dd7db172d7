//! Logo primitive
//!
//! Image sources cannot be drawn in a terminal cell grid; the logo is shown
//! as its alternative text in the supplied style.

use ratatui::{style::Style, text::Line};

use super::node::{Node, Role};

#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub src: String,
    pub alt: String,
    pub style: Style,
}

impl Logo {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn to_node(&self) -> Node {
        Node::new("img")
            .with_role(Role::Img)
            .with_attribute("src", self.src.as_str())
            .with_attribute("alt", self.alt.as_str())
    }

    pub fn to_line(&self) -> Line<'static> {
        Line::styled(self.alt.clone(), self.style)
    }
}
