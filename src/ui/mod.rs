//! User Interface module
//!
//! The host screen and the About dialog drawn over it. The host owns the
//! dialog's `open` signal (in [`AppState`]) and a close guard that vetoes
//! closing while the lock is on.

pub mod components;
#[cfg(feature = "devtools")]
pub mod devtools;
pub mod theme;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::sync::atomic::Ordering;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::{
    app::{
        events::AppEvent,
        state::{AppState, NotificationLevel},
    },
    config::Config,
    error::AppResult,
};
use components::{
    modals::{about::DISPLAY_NAME, AboutModal, AboutModalProps, Modal, ModalResult},
    node::NodeRef,
};
use theme::Theme;

/// Close guard type used by the host
pub type HostGuard = Box<dyn FnMut() -> bool + Send>;

/// Main UI renderer
pub struct UI {
    /// Current theme
    theme: Theme,
    /// Application name shown in the header
    app_name: String,
    /// The About dialog
    about: AboutModal<HostGuard>,
    /// Handle to the dialog's root node
    about_ref: NodeRef,
}

impl UI {
    /// Create a new UI instance
    pub fn new(config: &Config, state: &AppState, events: UnboundedSender<AppEvent>) -> AppResult<Self> {
        debug!("Initializing UI with theme: {}", config.ui.theme);

        let theme = Theme::load(&config.ui.theme)?;
        let about_ref = NodeRef::new();

        let locked = state.close_lock_flag();
        let guard: HostGuard = Box::new(move || {
            let vetoed = locked.load(Ordering::SeqCst);
            let event = AppEvent::CloseAttempted {
                vetoed,
                timestamp: Utc::now(),
            };
            if events.send(event).is_err() {
                debug!("event channel closed; close attempt not reported");
            }
            !vetoed
        });

        let props = AboutModalProps::new(config.about.close_icon_description.as_str())
            .open(state.about_open())
            .with_content(config.about.to_content())
            .class_name("host-about")
            .attribute("data-testid", "about-modal")
            .size(config.ui.modal_width_percent, config.ui.modal_height_percent)
            .node_ref(about_ref.clone())
            .on_close(guard);
        let about = AboutModal::mount(props);

        #[cfg(feature = "devtools")]
        if config.ui.devtools {
            devtools::tag_root(&about_ref, DISPLAY_NAME);
        }

        info!("{} ready ({} sections)", DISPLAY_NAME, about.sections().len());

        Ok(Self {
            theme,
            app_name: config.app.name.clone(),
            about,
            about_ref,
        })
    }

    pub fn about(&self) -> &AboutModal<HostGuard> {
        &self.about
    }

    pub fn about_ref(&self) -> &NodeRef {
        &self.about_ref
    }

    /// Whether input should go to the dialog first
    pub fn modal_open(&self) -> bool {
        self.about.is_open()
    }

    /// Hand the owner's current `open` signal to the dialog
    pub fn sync(&mut self, state: &AppState) {
        self.about.set_open(state.about_open());
    }

    /// Render the entire UI
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let size = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Key hints
                Constraint::Length(1), // Status line
            ])
            .split(size);

        self.render_header(frame, chunks[0]);
        self.render_hints(frame, chunks[1], state);
        self.render_status(frame, chunks[2], state);

        self.about.render(frame, size, &self.theme);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::styled(self.app_name.clone(), self.theme.title_style())).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border_style()),
        );
        frame.render_widget(header, area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lock = if state.is_close_locked() { "on" } else { "off" };
        let hint = |key: &'static str, text: String| {
            Line::from(vec![
                Span::styled(format!(" {:<4}", key), self.theme.close_style()),
                Span::styled(text, self.theme.text_style()),
            ])
        };

        let lines = vec![
            hint("a", "open the About dialog".to_string()),
            hint("l", format!("lock closing (currently {})", lock)),
            hint("Esc", "close the dialog".to_string()),
            hint("q", "quit".to_string()),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(notification) = state.latest_notification() else {
            return;
        };
        let style = match notification.level {
            NotificationLevel::Info => self.theme.muted_style(),
            NotificationLevel::Warning => self.theme.error_style(),
        };
        let text = format!(
            "{} {}",
            notification.timestamp.format("%H:%M:%S"),
            notification.message
        );
        frame.render_widget(Paragraph::new(Line::styled(text, style)), area);
    }

    /// Handle key events. Returns true if the key was consumed.
    pub fn handle_key_event(&mut self, key: KeyEvent, state: &mut AppState) -> AppResult<bool> {
        if key.code == KeyCode::Char('l') {
            let locked = state.toggle_close_lock();
            state.notify(
                NotificationLevel::Info,
                if locked { "Closing locked" } else { "Closing unlocked" },
            );
            return Ok(true);
        }

        if self.about.is_open() {
            let result = Modal::handle_key_event(&mut self.about, key)?;
            self.apply_modal_result(result, state);
            return Ok(true);
        }

        match key.code {
            KeyCode::Char('a') => {
                state.set_about_open(true);
                self.sync(state);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, state: &mut AppState) -> AppResult<()> {
        let result = Modal::handle_mouse_event(&mut self.about, mouse)?;
        self.apply_modal_result(result, state);
        Ok(())
    }

    /// The dialog lays itself out on every frame; only the size is recorded.
    pub fn handle_resize(&mut self, width: u16, height: u16, state: &mut AppState) {
        state.ui_state.terminal_size = (width, height);
    }

    fn apply_modal_result(&mut self, result: ModalResult, state: &mut AppState) {
        match result {
            ModalResult::Closed => {
                state.set_about_open(false);
                self.sync(state);
            }
            ModalResult::Vetoed => {
                state.notify(NotificationLevel::Warning, "Close vetoed: closing is locked");
            }
            ModalResult::None => {}
        }
    }
}
