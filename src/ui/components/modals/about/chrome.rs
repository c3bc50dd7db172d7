//! Dialog chrome: root node and terminal drawing
//!
//! The same composed sections are turned into a presentation [`Node`] tree
//! (for assistive tooling, instrumentation and tests) and drawn onto a
//! ratatui [`Frame`] as a centred overlay.

use crossterm::event::KeyCode;
use indexmap::IndexMap;
use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Clear, Paragraph, Widget, Wrap,
    },
    Frame,
};
use tracing::debug;

use crate::ui::{
    components::node::{Node, Role},
    theme::Theme,
};

use super::content::Section;

/// Stable identifying class of the dialog root
pub const BLOCK_CLASS: &str = "c4p--about-modal";
/// Present on the root only while the dialog is visible
pub const VISIBLE_CLASS: &str = "is-visible";
/// Present on the root while the body content overflows
pub const SCROLL_CLASS: &str = "c4p--about-modal--scroll-content";
/// Accessible label of the link list
pub const LINKS_LABEL: &str = "Links";

const CLOSE_GLYPH: &str = "[x]";
/// Fill symbol for cells the paragraph never wrote
const UNWRITTEN: &str = "\u{1}";

fn element_class(element: &str) -> String {
    format!("{}__{}", BLOCK_CLASS, element)
}

/// Rendering state of the dialog frame
#[derive(Debug, Clone)]
pub struct DialogChrome {
    width_percent: u16,
    height_percent: u16,
    /// Screen area of the close control from the last draw
    close_area: Option<Rect>,
    scroll: u16,
    max_scroll: u16,
    page_height: u16,
    overflowing: bool,
}

impl DialogChrome {
    pub fn new(width_percent: u16, height_percent: u16) -> Self {
        Self {
            width_percent: width_percent.clamp(1, 100),
            height_percent: height_percent.clamp(1, 100),
            close_area: None,
            scroll: 0,
            max_scroll: 0,
            page_height: 0,
            overflowing: false,
        }
    }

    pub fn close_area(&self) -> Option<Rect> {
        self.close_area
    }

    pub fn is_overflowing(&self) -> bool {
        self.overflowing
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    /// Whether a screen cell belongs to the close control
    pub fn hits_close(&self, column: u16, row: u16) -> bool {
        self.close_area.map_or(false, |area| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })
    }

    /// Forget screen geometry once the dialog is hidden
    pub fn reset(&mut self) {
        self.close_area = None;
        self.scroll = 0;
        self.max_scroll = 0;
        self.overflowing = false;
    }

    /// Handle a scrolling key. Returns true if the key was consumed.
    pub fn scroll(&mut self, key: KeyCode) -> bool {
        if !self.overflowing {
            return false;
        }
        let page = self.page_height.max(1);
        self.scroll = match key {
            KeyCode::Up => self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll.saturating_add(1).min(self.max_scroll),
            KeyCode::PageUp => self.scroll.saturating_sub(page),
            KeyCode::PageDown => self.scroll.saturating_add(page).min(self.max_scroll),
            KeyCode::Home => 0,
            KeyCode::End => self.max_scroll,
            _ => return false,
        };
        true
    }

    /// Build the root presentation node.
    ///
    /// Role and managed classes always win over caller-supplied values.
    pub fn build_root(
        &self,
        visible: bool,
        sections: &[Section],
        close_label: &str,
        class_name: Option<&str>,
        attributes: &IndexMap<String, String>,
    ) -> Node {
        let mut root = Node::new("div")
            .with_role(Role::Presentation)
            .with_class(BLOCK_CLASS)
            .with_attribute("aria-modal", "true");

        if let Some(class_name) = class_name {
            for class in class_name.split_whitespace() {
                if class != VISIBLE_CLASS && class != SCROLL_CLASS {
                    root.add_class(class);
                }
            }
        }
        if visible {
            root.add_class(VISIBLE_CLASS);
        }
        if self.overflowing {
            root.add_class(SCROLL_CLASS);
        }

        let rejected = root.merge_attributes(attributes);
        if !rejected.is_empty() {
            debug!(?rejected, "ignoring pass-through attributes managed by the dialog");
        }

        let mut close = Node::new("button")
            .with_role(Role::Button)
            .with_class(element_class("close"));
        if !close_label.is_empty() {
            close = close
                .with_attribute("aria-label", close_label)
                .with_attribute("title", close_label);
        }

        let mut body = Node::new("div")
            .with_class(element_class("body"))
            .with_children(sections.iter().map(section_node));
        if self.overflowing {
            let label = sections
                .iter()
                .find_map(|section| match section {
                    Section::Title(title) => Some(title.as_str()),
                    _ => None,
                })
                .unwrap_or("About");
            body = body
                .with_attribute("tabindex", "0")
                .with_attribute("aria-label", label);
        }

        root.with_child(close).with_child(body)
    }

    /// Draw the dialog. Returns true if the overflow state changed.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        sections: &[Section],
        close_label: &str,
        theme: &Theme,
    ) -> bool {
        let modal_area = centered_rect(self.width_percent, self.height_percent, area);

        frame.render_widget(Clear, modal_area);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style());
        if !close_label.is_empty() {
            block = block.title(
                Title::from(Span::styled(
                    format!(" Esc: {} ", close_label),
                    theme.muted_style(),
                ))
                .position(Position::Bottom)
                .alignment(Alignment::Right),
            );
        }
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        self.close_area = close_control_area(modal_area);
        if let Some(close_area) = self.close_area {
            frame.render_widget(
                Paragraph::new(Span::styled(CLOSE_GLYPH, theme.close_style())),
                close_area,
            );
        }

        let lines = section_lines(sections, theme);
        let total = wrapped_height(&lines, inner.width);
        let visible_rows = inner.height as usize;
        let overflowing = total > visible_rows;

        self.page_height = inner.height;
        self.max_scroll = total.saturating_sub(visible_rows).min(u16::MAX as usize) as u16;
        self.scroll = self.scroll.min(self.max_scroll);

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, inner);

        let changed = overflowing != self.overflowing;
        self.overflowing = overflowing;
        changed
    }
}

impl Default for DialogChrome {
    fn default() -> Self {
        Self::new(60, 60)
    }
}

fn section_node(section: &Section) -> Node {
    match section {
        Section::Title(title) => Node::new("h2")
            .with_role(Role::Heading)
            .with_class(element_class("title"))
            .with_text(title.as_str()),
        Section::Logo(logo) => logo.to_node().with_class(element_class("logo")),
        Section::Body(text) => Node::new("div")
            .with_class(element_class("content"))
            .with_text(text.as_str()),
        Section::GeneralText(text) => Node::new("p")
            .with_class(element_class("general-text"))
            .with_text(text.as_str()),
        Section::Links(links) => Node::new("ul")
            .with_role(Role::List)
            .with_class(element_class("links-container"))
            .with_attribute("aria-label", LINKS_LABEL)
            .with_children(links.iter().enumerate().map(|(index, link)| {
                Node::new("li")
                    .with_role(Role::ListItem)
                    .with_child(link.to_node(&format!("link-{}", index)))
            })),
        Section::Copyright(text) => Node::new("p")
            .with_class(element_class("copyright-text"))
            .with_text(text.as_str()),
        Section::Version(text) => Node::new("p")
            .with_class(element_class("version-number"))
            .with_text(text.as_str()),
        Section::AdditionalInfo(group) => Node::new("section")
            .with_role(Role::Group)
            .with_class(element_class("additional-info"))
            .with_attribute("aria-label", group.label.as_str())
            .with_child(
                Node::new("h3")
                    .with_role(Role::Heading)
                    .with_text(group.label.as_str()),
            )
            .with_child(
                Node::new("div")
                    .with_class(element_class("additional-info-content"))
                    .with_text(group.content.as_str()),
            ),
    }
}

fn text_lines(text: &str, style: ratatui::style::Style) -> impl Iterator<Item = Line<'static>> + '_ {
    text.lines().map(move |line| Line::styled(line.to_string(), style))
}

/// Terminal lines for the composed sections, one blank line between sections
pub fn section_lines(sections: &[Section], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        match section {
            Section::Title(title) => lines.push(Line::styled(title.clone(), theme.title_style())),
            Section::Logo(logo) => lines.push(logo.to_line()),
            Section::Body(text) => lines.extend(text_lines(text, theme.text_style())),
            Section::GeneralText(text) => {
                let style = theme.styles.emphasis.fg(theme.colors.foreground);
                lines.extend(text_lines(text, style));
            }
            Section::Links(links) => lines.extend(links.iter().map(|link| link.to_line(theme))),
            Section::Copyright(text) | Section::Version(text) => {
                lines.extend(text_lines(text, theme.muted_style()));
            }
            Section::AdditionalInfo(group) => {
                lines.push(Line::styled(group.label.clone(), theme.heading_style()));
                lines.extend(text_lines(&group.content, theme.text_style()));
            }
        }
    }

    lines
}

/// Rows needed to show `lines` wrapped at `width`
fn wrapped_height(lines: &[Line], width: u16) -> usize {
    if width == 0 {
        return lines.len();
    }
    lines.iter().map(|line| line_rows(line, width)).sum()
}

/// Rows one line occupies in a word-wrapped paragraph of `width` columns.
///
/// The line is drawn into a scratch buffer with the same wrapping the dialog
/// body uses; the last row holding a written cell gives the height.
fn line_rows(line: &Line, width: u16) -> usize {
    let max_rows = (u16::MAX / width).max(1) as usize;
    let height = line.width().clamp(1, max_rows) as u16;
    let area = Rect::new(0, 0, width, height);

    let mut unwritten = Cell::default();
    unwritten.set_symbol(UNWRITTEN);
    let mut buffer = Buffer::filled(area, &unwritten);
    Paragraph::new(line.clone())
        .wrap(Wrap { trim: false })
        .render(area, &mut buffer);

    (0..area.height)
        .rev()
        .find(|&y| (0..area.width).any(|x| buffer.get(x, y).symbol() != UNWRITTEN))
        .map_or(1, |y| y as usize + 1)
}

/// Close control sits on the top border, right-aligned
fn close_control_area(modal_area: Rect) -> Option<Rect> {
    let glyph_width = CLOSE_GLYPH.len() as u16;
    if modal_area.width < glyph_width + 4 || modal_area.height == 0 {
        return None;
    }
    Some(Rect::new(
        modal_area.x + modal_area.width - glyph_width - 2,
        modal_area.y,
        glyph_width,
        1,
    ))
}

/// Calculate centered rectangle for the dialog
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::{link::Link, modals::about::content::InfoGroup};

    fn build(chrome: &DialogChrome, visible: bool, sections: &[Section]) -> Node {
        chrome.build_root(visible, sections, "Close", None, &IndexMap::new())
    }

    #[test]
    fn test_visible_class_tracks_visibility() {
        let chrome = DialogChrome::default();
        let shown = build(&chrome, true, &[]);
        let hidden = build(&chrome, false, &[]);

        for root in [&shown, &hidden] {
            assert!(root.has_class(BLOCK_CLASS));
            assert_eq!(root.role(), Some(Role::Presentation));
        }
        assert!(shown.has_class(VISIBLE_CLASS));
        assert!(!hidden.has_class(VISIBLE_CLASS));
    }

    #[test]
    fn test_caller_cannot_force_managed_classes() {
        let chrome = DialogChrome::default();
        let root = chrome.build_root(false, &[], "Close", Some("mine is-visible"), &IndexMap::new());
        assert!(root.has_class("mine"));
        assert!(!root.has_class(VISIBLE_CLASS));
    }

    #[test]
    fn test_close_control_labelled() {
        let chrome = DialogChrome::default();
        let root = build(&chrome, true, &[]);
        let close = root.find_by_label("Close").expect("close control");
        assert_eq!(close.role(), Some(Role::Button));

        let unlabeled = chrome.build_root(true, &[], "", None, &IndexMap::new());
        let button = unlabeled.find_by_role(Role::Button).expect("button");
        assert_eq!(button.label(), None);
    }

    #[test]
    fn test_section_nodes() {
        let chrome = DialogChrome::default();
        let sections = vec![
            Section::Title("Product".into()),
            Section::Links(vec![Link::new("A", "https://a"), Link::new("B", "https://b")]),
            Section::AdditionalInfo(InfoGroup::new("APIs", "REST")),
        ];
        let root = build(&chrome, true, &sections);

        assert_eq!(root.find_by_role(Role::Heading).and_then(Node::text), Some("Product"));
        let list = root.find_by_label(LINKS_LABEL).expect("link list");
        let hrefs: Vec<String> = list
            .find_all_by_role(Role::Link)
            .iter()
            .filter_map(|link| link.attribute("href"))
            .collect();
        assert_eq!(hrefs, vec!["https://a", "https://b"]);
        let group = root.find_by_label("APIs").expect("group");
        assert_eq!(group.role(), Some(Role::Group));
        assert!(group.find_by_text("REST").is_some());
    }

    #[test]
    fn test_wrapped_height() {
        let lines = vec![Line::raw("abcdef"), Line::raw(""), Line::raw("abc")];
        assert_eq!(wrapped_height(&lines, 3), 4);
        assert_eq!(wrapped_height(&lines, 10), 3);
    }

    #[test]
    fn test_wrapped_height_breaks_at_words() {
        let line = Line::raw("aaaaaaaaaaaa bbbbbbbbbbbb cccccccccccc");
        assert_eq!(wrapped_height(&[line.clone()], 22), 3);
        assert_eq!(wrapped_height(&[line], 40), 1);
    }

    #[test]
    fn test_root_is_modal_for_assistive_tooling() {
        let chrome = DialogChrome::default();
        let attributes = IndexMap::from([("aria-modal".to_string(), "false".to_string())]);
        let root = chrome.build_root(true, &[], "Close", None, &attributes);
        assert_eq!(root.attribute("aria-modal").as_deref(), Some("true"));
    }

    #[test]
    fn test_reset_clears_overflow() {
        let mut chrome = DialogChrome::default();
        chrome.overflowing = true;
        chrome.max_scroll = 4;
        chrome.scroll = 2;

        chrome.reset();
        assert!(!chrome.is_overflowing());
        assert_eq!(chrome.scroll_offset(), 0);
        let root = build(&chrome, false, &[Section::Title("Product".into())]);
        assert!(!root.has_class(SCROLL_CLASS));
    }

    #[test]
    fn test_scroll_ignored_without_overflow() {
        let mut chrome = DialogChrome::default();
        assert!(!chrome.scroll(KeyCode::Down));
        assert_eq!(chrome.scroll_offset(), 0);
    }
}
