//! About dialog
//!
//! Presents branding, legal and version information. Visibility is driven by
//! the owner's `open` signal; every dismissal goes through the owner's close
//! guard, which may veto it.
//!
//! ```no_run
//! use about_modal::ui::components::modals::about::{AboutModal, AboutModalProps};
//!
//! let mut modal = AboutModal::mount(
//!     AboutModalProps::new("Close")
//!         .open(true)
//!         .title("Product")
//!         .content("Hello")
//!         .on_close(|| false),
//! );
//! modal.click_control("Close");
//! assert!(modal.is_visible());
//! ```

pub mod chrome;
pub mod close;
pub mod content;
pub mod controller;

pub use chrome::{DialogChrome, BLOCK_CLASS, SCROLL_CLASS, VISIBLE_CLASS};
pub use close::{CloseDecision, CloseGuard, CloseOutcome, CloseVetoProtocol};
pub use content::{compose, AboutContent, InfoGroup, Section, SectionKind};
pub use controller::{DialogState, ModalController};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use indexmap::IndexMap;
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info, warn};

use crate::{
    error::AppResult,
    ui::{
        components::{
            link::Link,
            logo::Logo,
            node::{Node, NodeRef, RootHandle},
        },
        theme::Theme,
    },
};

use super::{Modal, ModalResult};

/// Name under which developer tooling identifies the dialog
pub const DISPLAY_NAME: &str = "AboutModal";

/// Owner-supplied inputs of an [`AboutModal`].
///
/// `G` is the close guard type; it defaults to a plain function pointer so
/// props without a guard need no annotation.
pub struct AboutModalProps<G = fn() -> bool> {
    pub open: bool,
    pub on_close: Option<G>,
    pub close_icon_description: String,
    pub content: AboutContent,
    pub class_name: Option<String>,
    pub node_ref: Option<NodeRef>,
    pub attributes: IndexMap<String, String>,
    pub width_percent: u16,
    pub height_percent: u16,
}

impl AboutModalProps {
    pub fn new(close_icon_description: impl Into<String>) -> Self {
        Self {
            open: false,
            on_close: None,
            close_icon_description: close_icon_description.into(),
            content: AboutContent::default(),
            class_name: None,
            node_ref: None,
            attributes: IndexMap::new(),
            width_percent: 60,
            height_percent: 60,
        }
    }
}

impl<G> AboutModalProps<G> {
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Install a close guard, replacing any previous one
    pub fn on_close<H: CloseGuard>(self, guard: H) -> AboutModalProps<H> {
        AboutModalProps {
            open: self.open,
            on_close: Some(guard),
            close_icon_description: self.close_icon_description,
            content: self.content,
            class_name: self.class_name,
            node_ref: self.node_ref,
            attributes: self.attributes,
            width_percent: self.width_percent,
            height_percent: self.height_percent,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.content.title = Some(title.into());
        self
    }

    pub fn logo(mut self, logo: Logo) -> Self {
        self.content.logo = Some(logo);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content.content = Some(content.into());
        self
    }

    pub fn general_text(mut self, text: impl Into<String>) -> Self {
        self.content.general_text = Some(text.into());
        self
    }

    pub fn copyright_text(mut self, text: impl Into<String>) -> Self {
        self.content.copyright_text = Some(text.into());
        self
    }

    pub fn version_number(mut self, version: impl Into<String>) -> Self {
        self.content.version_number = Some(version.into());
        self
    }

    pub fn link(mut self, link: Link) -> Self {
        self.content.links.push(link);
        self
    }

    pub fn links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.content.links.extend(links);
        self
    }

    pub fn additional_info(mut self, label: impl Into<String>, content: impl Into<String>) -> Self {
        self.content
            .additional_info
            .push(InfoGroup::new(label, content));
        self
    }

    pub fn with_content(mut self, content: AboutContent) -> Self {
        self.content = content;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Pass-through attribute for the root node (test ids, instrumentation)
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn size(mut self, width_percent: u16, height_percent: u16) -> Self {
        self.width_percent = width_percent;
        self.height_percent = height_percent;
        self
    }
}

/// A mounted About dialog
pub struct AboutModal<G = fn() -> bool> {
    controller: ModalController,
    protocol: CloseVetoProtocol<G>,
    close_icon_description: String,
    content: AboutContent,
    sections: Vec<Section>,
    class_name: Option<String>,
    attributes: IndexMap<String, String>,
    chrome: DialogChrome,
    root: RootHandle,
}

impl<G: CloseGuard> AboutModal<G> {
    pub const DISPLAY_NAME: &'static str = DISPLAY_NAME;

    /// Mount the dialog and bind the caller's node ref, if any, to its root
    pub fn mount(props: AboutModalProps<G>) -> Self {
        if props.close_icon_description.trim().is_empty() {
            warn!("about modal mounted without a close icon description; the close control has no accessible label");
        }

        let sections = compose(&props.content);
        let chrome = DialogChrome::new(props.width_percent, props.height_percent);
        let controller = ModalController::new(props.open);
        let root = RootHandle::new(chrome.build_root(
            controller.is_visible(),
            &sections,
            &props.close_icon_description,
            props.class_name.as_deref(),
            &props.attributes,
        ));

        if let Some(node_ref) = &props.node_ref {
            node_ref.bind(root.clone());
        }

        debug!(
            id = %root.id(),
            open = props.open,
            sections = sections.len(),
            "about modal mounted"
        );

        Self {
            controller,
            protocol: CloseVetoProtocol::new(props.on_close),
            close_icon_description: props.close_icon_description,
            content: props.content,
            sections,
            class_name: props.class_name,
            attributes: props.attributes,
            chrome,
            root,
        }
    }

    /// Observe the owner's `open` signal
    pub fn set_open(&mut self, open: bool) {
        if self.controller.sync_open(open) {
            if !open {
                self.chrome.reset();
            }
            self.refresh_root();
        }
    }

    pub fn set_on_close(&mut self, guard: Option<G>) {
        self.protocol.set_guard(guard);
    }

    pub fn set_content(&mut self, content: AboutContent) {
        if content == self.content {
            return;
        }
        self.sections = compose(&content);
        self.content = content;
        self.refresh_root();
    }

    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    pub fn state(&self) -> DialogState {
        self.controller.state()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn close_icon_description(&self) -> &str {
        &self.close_icon_description
    }

    /// Handle to the root resource; stable for the dialog's lifetime
    pub fn root(&self) -> &RootHandle {
        &self.root
    }

    /// Snapshot of the current root node
    pub fn root_node(&self) -> Node {
        self.root.snapshot()
    }

    /// Ask the dialog to close. The guard runs once; hidden dialogs ignore
    /// the request without consulting it.
    pub fn request_close(&mut self) -> CloseOutcome {
        if !self.controller.is_visible() {
            return CloseOutcome::Closed;
        }

        let outcome = self.protocol.attempt();
        if self.controller.apply(outcome) {
            info!("about modal closed");
            self.chrome.reset();
            self.refresh_root();
        }
        outcome
    }

    /// Activate the control whose accessible label is `label`.
    ///
    /// Returns `None` when no control carries that label.
    pub fn click_control(&mut self, label: &str) -> Option<CloseOutcome> {
        if label.is_empty() || label != self.close_icon_description {
            return None;
        }
        Some(self.request_close())
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.controller.is_visible() {
            return;
        }

        let overflow_changed = self.chrome.render(
            frame,
            area,
            &self.sections,
            &self.close_icon_description,
            theme,
        );
        if overflow_changed {
            debug!(overflowing = self.chrome.is_overflowing(), "about modal overflow changed");
            self.refresh_root();
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> ModalResult {
        if !self.controller.is_visible() {
            return ModalResult::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left)
                if self.chrome.hits_close(mouse.column, mouse.row) =>
            {
                self.request_close().into()
            }
            MouseEventKind::ScrollDown => {
                self.chrome.scroll(KeyCode::Down);
                ModalResult::None
            }
            MouseEventKind::ScrollUp => {
                self.chrome.scroll(KeyCode::Up);
                ModalResult::None
            }
            _ => ModalResult::None,
        }
    }

    fn refresh_root(&self) {
        self.root.replace(self.chrome.build_root(
            self.controller.is_visible(),
            &self.sections,
            &self.close_icon_description,
            self.class_name.as_deref(),
            &self.attributes,
        ));
    }
}

impl From<CloseOutcome> for ModalResult {
    fn from(outcome: CloseOutcome) -> Self {
        match outcome {
            CloseOutcome::Closed => ModalResult::Closed,
            CloseOutcome::Vetoed => ModalResult::Vetoed,
        }
    }
}

impl<G: CloseGuard> Modal for AboutModal<G> {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        AboutModal::render(self, frame, area, theme);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> AppResult<ModalResult> {
        // Repeats and releases belong to the press that started them
        if !self.controller.is_visible() || key.kind != KeyEventKind::Press {
            return Ok(ModalResult::None);
        }

        match key.code {
            KeyCode::Esc => Ok(self.request_close().into()),
            code => {
                self.chrome.scroll(code);
                Ok(ModalResult::None)
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> AppResult<ModalResult> {
        Ok(AboutModal::handle_mouse_event(self, mouse))
    }

    fn is_open(&self) -> bool {
        self.controller.is_visible()
    }

    fn close(&mut self) -> ModalResult {
        self.request_close().into()
    }
}
