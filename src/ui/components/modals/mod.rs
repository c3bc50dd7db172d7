//! Modal components
//!
//! Overlays drawn above the host screen. They receive input before the host
//! does while they are open.

pub mod about;

pub use about::{AboutModal, AboutModalProps};

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

use crate::{error::AppResult, ui::theme::Theme};

/// Trait for modal components
pub trait Modal {
    /// Render the modal
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Handle key events
    fn handle_key_event(&mut self, key: KeyEvent) -> AppResult<ModalResult>;

    /// Handle mouse events
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> AppResult<ModalResult>;

    /// Check if modal is open
    fn is_open(&self) -> bool;

    /// Programmatic close; subject to the same rules as a user close
    fn close(&mut self) -> ModalResult;
}

/// Result from modal interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResult {
    /// No action taken
    None,
    /// Modal was closed
    Closed,
    /// A close attempt was refused
    Vetoed,
}
