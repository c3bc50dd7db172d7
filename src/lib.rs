//! About Modal - terminal About dialog
//!
//! An "About" dialog for terminal applications presenting branding, legal
//! and version information, with a veto-able close protocol and a
//! presentation node tree for assistive tooling and tests.
//!
//! # Architecture
//!
//! - **Presentation Layer**: the dialog, its node tree and primitives (ratatui)
//! - **Application Layer**: host state and event loop
//! - **Infrastructure Layer**: configuration, logging, errors

pub mod app;
pub mod config;
pub mod error;
pub mod ui;

pub use app::App;
pub use error::{AppError, AppResult};

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// Log levels come from `RUST_LOG`, falling back to `default_filter`. With a
/// `log_file`, output goes to that file so it does not draw over the TUI.
pub fn initialize_logging(default_filter: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()?;
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .try_init()?;
        }
    }

    Ok(())
}
