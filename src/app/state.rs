//! Application state management
//!
//! Single source of truth for the host screen: whether the owner wants the
//! About dialog open, whether closing it is currently locked, and the
//! notifications shown in the status line.

use chrono::{DateTime, Utc};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Maximum notifications kept for the status line
const MAX_NOTIFICATIONS: usize = 20;

/// Central application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application lifecycle state
    pub app_state: AppLifecycleState,
    /// Owner-side state of the About dialog
    pub about_state: AboutState,
    /// UI state
    pub ui_state: UIState,
    /// Notifications for the status line
    pub notifications: Vec<Notification>,
}

impl AppState {
    pub fn new(open_about: bool) -> Self {
        Self {
            app_state: AppLifecycleState::default(),
            about_state: AboutState::new(open_about),
            ui_state: UIState::default(),
            notifications: Vec::new(),
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        matches!(self.app_state.lifecycle, LifecyclePhase::Quitting)
    }

    /// Set the quit flag
    pub fn set_should_quit(&mut self, should_quit: bool) {
        if should_quit {
            self.app_state.lifecycle = LifecyclePhase::Quitting;
            self.app_state.quit_requested_at = Some(Utc::now());
        }
    }

    pub fn set_running(&mut self) {
        if self.app_state.lifecycle == LifecyclePhase::Starting {
            self.app_state.lifecycle = LifecyclePhase::Running;
        }
    }

    /// The `open` signal handed to the dialog
    pub fn about_open(&self) -> bool {
        self.about_state.open
    }

    pub fn set_about_open(&mut self, open: bool) {
        self.about_state.open = open;
    }

    pub fn is_close_locked(&self) -> bool {
        self.about_state.close_locked.load(Ordering::SeqCst)
    }

    /// Toggle the close lock; returns the new value
    pub fn toggle_close_lock(&mut self) -> bool {
        let locked = !self.is_close_locked();
        self.about_state.close_locked.store(locked, Ordering::SeqCst);
        locked
    }

    /// Shared flag read by the dialog's close guard
    pub fn close_lock_flag(&self) -> Arc<AtomicBool> {
        self.about_state.close_locked.clone()
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification {
            message: message.into(),
            level,
            timestamp: Utc::now(),
        });
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let overflow = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..overflow);
        }
    }

    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Application lifecycle state
#[derive(Debug, Clone)]
pub struct AppLifecycleState {
    pub lifecycle: LifecyclePhase,
    pub started_at: DateTime<Utc>,
    pub quit_requested_at: Option<DateTime<Utc>>,
}

impl Default for AppLifecycleState {
    fn default() -> Self {
        Self {
            lifecycle: LifecyclePhase::Starting,
            started_at: Utc::now(),
            quit_requested_at: None,
        }
    }
}

/// Application lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Starting,
    Running,
    Quitting,
}

/// Owner-side state of the About dialog
#[derive(Debug, Clone)]
pub struct AboutState {
    /// Desired visibility
    pub open: bool,
    /// While set, the close guard vetoes every close attempt
    pub close_locked: Arc<AtomicBool>,
    /// Close attempts seen by the guard
    pub close_attempts: u32,
    pub vetoed_attempts: u32,
}

impl AboutState {
    fn new(open: bool) -> Self {
        Self {
            open,
            close_locked: Arc::new(AtomicBool::new(false)),
            close_attempts: 0,
            vetoed_attempts: 0,
        }
    }
}

/// UI state management
#[derive(Debug, Clone)]
pub struct UIState {
    pub terminal_size: (u16, u16),
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            terminal_size: (80, 24),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_lock_is_shared() {
        let mut state = AppState::new(true);
        let flag = state.close_lock_flag();

        assert!(state.toggle_close_lock());
        assert!(flag.load(Ordering::SeqCst));
        assert!(!state.toggle_close_lock());
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_notifications_are_bounded() {
        let mut state = AppState::default();
        for i in 0..(MAX_NOTIFICATIONS + 5) {
            state.notify(NotificationLevel::Info, format!("n{}", i));
        }
        assert_eq!(state.notifications.len(), MAX_NOTIFICATIONS);
        assert_eq!(
            state.latest_notification().map(|n| n.message.as_str()),
            Some(format!("n{}", MAX_NOTIFICATIONS + 4).as_str())
        );
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        state.set_running();
        assert!(!state.should_quit());
        state.set_should_quit(true);
        assert!(state.should_quit());
        assert!(state.app_state.quit_requested_at.is_some());
    }
}
