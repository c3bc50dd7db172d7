//! Application event system
//!
//! Components report what happened through an unbounded tokio channel; the
//! main loop drains it between frames and updates the application state.

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::error::{AppError, AppResult};

/// Event handler for inter-component communication
pub struct EventHandler {
    /// Sender for application events
    event_sender: mpsc::UnboundedSender<AppEvent>,
    /// Receiver for application events
    event_receiver: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();

        Self {
            event_sender,
            event_receiver,
        }
    }

    /// Send an event to the application
    pub fn send_event(&self, event: AppEvent) -> AppResult<()> {
        self.event_sender
            .send(event)
            .map_err(|_| AppError::state("Failed to send application event"))?;
        Ok(())
    }

    /// Try to receive an event (non-blocking)
    pub fn try_receive_event(&mut self) -> Option<AppEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Get a cloned sender for components
    pub fn get_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_sender.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The About dialog's close guard was consulted
    CloseAttempted {
        vetoed: bool,
        timestamp: DateTime<Utc>,
    },

    /// Terminal was resized
    Resized { width: u16, height: u16 },

    /// Application shutdown requested
    Shutdown,
}
