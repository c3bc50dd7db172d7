//! Application core module
//!
//! Terminal setup, the main event loop and application state.

pub mod events;
pub mod state;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    ui::UI,
};
use events::{AppEvent, EventHandler};
use state::{AppState, NotificationLevel};

/// Main application struct
///
/// Owns the terminal lifecycle, the event loop, the application state and
/// the UI with its About dialog.
pub struct App {
    /// Application state
    state: AppState,
    /// Event handler for component events
    event_handler: EventHandler,
    /// UI renderer
    ui: UI,
    /// Application configuration
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> AppResult<Self> {
        let init_start = Instant::now();

        info!("Initializing {}", config.app.name);

        let state = AppState::new(config.about.open_on_start);
        let event_handler = EventHandler::new();
        let ui = UI::new(&config, &state, event_handler.get_sender())?;

        debug!("Application initialized in {:?}", init_start.elapsed());

        Ok(Self {
            state,
            event_handler,
            ui,
            config,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn ui(&self) -> &UI {
        &self.ui
    }

    /// Run the main application loop
    pub async fn run(mut self) -> AppResult<()> {
        info!("Starting application main loop");

        self.setup_terminal()?;

        let result = self.main_loop().await;

        self.cleanup_terminal()?;

        result
    }

    /// Setup terminal for TUI
    fn setup_terminal(&self) -> AppResult<()> {
        enable_raw_mode().map_err(|e| AppError::Terminal(format!("failed to enable raw mode: {}", e)))?;
        let mut stdout = std::io::stdout();
        if self.config.ui.enable_mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        Ok(())
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal(&self) -> AppResult<()> {
        disable_raw_mode()?;
        let mut stdout = std::io::stdout();
        if self.config.ui.enable_mouse {
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
        } else {
            execute!(stdout, LeaveAlternateScreen)?;
        }
        Ok(())
    }

    /// Main application event loop
    async fn main_loop(&mut self) -> AppResult<()> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal = Terminal::new(backend)?;
        self.state.set_running();

        info!("Entering main application loop");

        loop {
            terminal.draw(|f| {
                self.ui.render(f, &self.state);
            })?;

            self.handle_events()?;
            self.process_events();

            if self.state.should_quit() {
                info!("Application quit requested");
                break;
            }

            sleep(Duration::from_millis(1)).await;
        }

        Ok(())
    }

    /// Handle one terminal input event, if any is pending
    pub fn handle_events(&mut self) -> AppResult<bool> {
        if !event::poll(Duration::from_millis(50))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('q') {
                    info!("Quit requested by user");
                    self.event_handler.send_event(AppEvent::Shutdown)?;
                } else if !self.ui.handle_key_event(key, &mut self.state)? && key.code == KeyCode::Esc {
                    self.event_handler.send_event(AppEvent::Shutdown)?;
                }
            }
            Event::Mouse(mouse) => {
                self.ui.handle_mouse_event(mouse, &mut self.state)?;
            }
            Event::Resize(width, height) => {
                self.event_handler
                    .send_event(AppEvent::Resized { width, height })?;
            }
            _ => {}
        }

        Ok(true)
    }

    /// Drain component events
    pub fn process_events(&mut self) {
        while let Some(event) = self.event_handler.try_receive_event() {
            self.handle_app_event(event);
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CloseAttempted { vetoed, timestamp } => {
                let about = &mut self.state.about_state;
                about.close_attempts += 1;
                if vetoed {
                    about.vetoed_attempts += 1;
                    warn!("About dialog close vetoed at {}", timestamp);
                } else {
                    debug!("About dialog close allowed at {}", timestamp);
                    self.state
                        .notify(NotificationLevel::Info, "About dialog closed");
                }
            }
            AppEvent::Resized { width, height } => {
                debug!("Terminal resized to {}x{}", width, height);
                self.ui.handle_resize(width, height, &mut self.state);
            }
            AppEvent::Shutdown => {
                debug!("Shutdown requested");
                self.state.set_should_quit(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn test_close_attempts_are_counted() {
        let mut app = App::new(Config::default()).expect("app");
        assert!(app.ui.modal_open());

        app.ui
            .handle_key_event(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE), &mut app.state)
            .unwrap();
        app.ui
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &mut app.state)
            .unwrap();
        app.process_events();

        assert_eq!(app.state.about_state.close_attempts, 1);
        assert_eq!(app.state.about_state.vetoed_attempts, 1);
        assert!(app.ui.modal_open());
    }

    #[test]
    fn test_resize_is_recorded() {
        let mut app = App::new(Config::default()).expect("app");
        app.event_handler
            .send_event(AppEvent::Resized {
                width: 120,
                height: 40,
            })
            .unwrap();
        app.process_events();
        assert_eq!(app.state.ui_state.terminal_size, (120, 40));
    }
}
