//! Configuration management module
//!
//! Provides layered configuration with:
//! - TOML configuration files (user directory, then working directory)
//! - Environment variable overrides (`ABOUT_MODAL__SECTION__KEY`)
//! - Validation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    ui::components::{
        link::Link,
        logo::Logo,
        modals::about::{AboutContent, InfoGroup},
    },
};

/// Local configuration file name
pub const CONFIG_FILE_NAME: &str = "about-modal.toml";
/// Environment variable prefix
pub const ENV_PREFIX: &str = "ABOUT_MODAL";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// UI configuration
    pub ui: UIConfig,
    /// Content of the About dialog
    pub about: AboutConfig,
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Layers, lowest priority first:
    /// 1. ~/.config/about-modal/config.toml
    /// 2. ./about-modal.toml
    /// 3. `ABOUT_MODAL__*` environment variables
    pub fn load() -> AppResult<Self> {
        info!("Loading application configuration");

        let mut files = Vec::new();
        if let Some(user_path) = Self::get_user_config_path() {
            files.push(user_path);
        }
        files.push(PathBuf::from(CONFIG_FILE_NAME));

        Self::from_sources(&files, Self::environment())
    }

    /// Build configuration from explicit files and an environment source.
    ///
    /// Missing files are skipped.
    pub fn from_sources(files: &[PathBuf], environment: config::Environment) -> AppResult<Self> {
        let mut builder = config::Config::builder();
        for path in files {
            debug!("Adding configuration source: {}", path.display());
            builder = builder.add_source(config::File::from(path.as_path()).required(false));
        }

        let config: Config = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Environment source for `ABOUT_MODAL__SECTION__KEY` variables
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration from a specific file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from: {}", path.display());

        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let path = path.as_ref();
        debug!("Saving configuration to: {}", path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::application(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content).await?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> AppResult<()> {
        debug!("Validating configuration");

        for (name, value) in [
            ("modal_width_percent", self.ui.modal_width_percent),
            ("modal_height_percent", self.ui.modal_height_percent),
        ] {
            if !(20..=100).contains(&value) {
                return Err(AppError::application(format!(
                    "{} must be between 20 and 100",
                    name
                )));
            }
        }

        if self.about.close_icon_description.trim().is_empty() {
            return Err(AppError::application(
                "close_icon_description must not be empty",
            ));
        }

        debug!("Configuration validation passed");
        Ok(())
    }

    /// Get user configuration file path
    fn get_user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("about-modal");
            path.push("config.toml");
            path
        })
    }

    /// Directory for the log file written while the TUI owns the terminal
    pub fn log_dir() -> PathBuf {
        dirs::state_dir()
            .or_else(dirs::cache_dir)
            .unwrap_or_else(std::env::temp_dir)
            .join("about-modal")
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application name
    pub name: String,
    /// Log filter used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "About Modal".to_string(),
            log_level: if cfg!(debug_assertions) {
                "debug"
            } else {
                "info"
            }
            .to_string(),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    /// Theme name
    pub theme: String,
    /// Enable mouse support
    pub enable_mouse: bool,
    /// Dialog width as a percentage of the terminal
    pub modal_width_percent: u16,
    /// Dialog height as a percentage of the terminal
    pub modal_height_percent: u16,
    /// Tag the dialog root for developer tooling
    pub devtools: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            enable_mouse: true,
            modal_width_percent: 60,
            modal_height_percent: 60,
            devtools: cfg!(debug_assertions),
        }
    }
}

/// Logo source for the About dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoConfig {
    pub src: String,
    pub alt: String,
}

/// Content of the About dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    /// Show the dialog as soon as the application starts
    pub open_on_start: bool,
    /// Accessible label of the close control
    pub close_icon_description: String,
    pub title: Option<String>,
    pub logo: Option<LogoConfig>,
    pub content: Option<String>,
    pub general_text: Option<String>,
    pub copyright_text: Option<String>,
    pub version_number: Option<String>,
    pub links: Vec<Link>,
    pub additional_info: Vec<InfoGroup>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        let mut links = Vec::new();
        let repository = env!("CARGO_PKG_REPOSITORY");
        if !repository.is_empty() {
            links.push(Link::new("Source code", repository));
        }

        Self {
            open_on_start: true,
            close_icon_description: "Close".to_string(),
            title: Some(env!("CARGO_PKG_NAME").to_string()),
            logo: None,
            content: Some(env!("CARGO_PKG_DESCRIPTION").to_string()),
            general_text: None,
            copyright_text: Some(format!("Licensed under {}", env!("CARGO_PKG_LICENSE"))),
            version_number: Some(format!("Version {}", env!("CARGO_PKG_VERSION"))),
            links,
            additional_info: Vec::new(),
        }
    }
}

impl AboutConfig {
    /// Dialog content described by this configuration
    pub fn to_content(&self) -> AboutContent {
        AboutContent {
            title: self.title.clone(),
            logo: self
                .logo
                .as_ref()
                .map(|logo| Logo::new(logo.src.as_str(), logo.alt.as_str())),
            content: self.content.clone(),
            general_text: self.general_text.clone(),
            links: self.links.clone(),
            copyright_text: self.copyright_text.clone(),
            version_number: self.version_number.clone(),
            additional_info: self.additional_info.clone(),
        }
    }
}
