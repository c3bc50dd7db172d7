//! Theme system for UI styling
//!
//! Provides consistent styling for the host screen and the About dialog,
//! with built-in default, dark and light themes.

use ratatui::style::{Color, Modifier, Style};

use crate::error::{AppError, AppResult};

/// UI theme containing all style definitions
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Color scheme
    pub colors: ColorScheme,
    /// Text styles
    pub styles: StyleScheme,
}

impl Theme {
    /// Load a theme by name
    pub fn load(theme_name: &str) -> AppResult<Self> {
        match theme_name {
            "default" => Ok(Self::default_theme()),
            "dark" => Ok(Self::dark_theme()),
            "light" => Ok(Self::light_theme()),
            other => Err(AppError::application(format!("Unknown theme: {}", other))),
        }
    }

    /// Default theme (terminal colors with blue accents)
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            colors: ColorScheme {
                background: Color::Reset,
                foreground: Color::White,
                primary: Color::Blue,
                accent: Color::Yellow,
                error: Color::Red,
                info: Color::Cyan,
                muted: Color::DarkGray,
            },
            styles: StyleScheme::default(),
        }
    }

    /// Dark theme with softer colors
    pub fn dark_theme() -> Self {
        Self {
            name: "dark".to_string(),
            colors: ColorScheme {
                background: Color::Black,
                foreground: Color::Rgb(220, 220, 220),
                primary: Color::Rgb(100, 149, 237),
                accent: Color::Rgb(255, 215, 0),
                error: Color::Rgb(220, 20, 60),
                info: Color::Rgb(135, 206, 235),
                muted: Color::Rgb(105, 105, 105),
            },
            styles: StyleScheme::default(),
        }
    }

    /// Light theme for bright terminals
    pub fn light_theme() -> Self {
        Self {
            name: "light".to_string(),
            colors: ColorScheme {
                background: Color::White,
                foreground: Color::Black,
                primary: Color::Rgb(0, 100, 200),
                accent: Color::Rgb(200, 150, 0),
                error: Color::Rgb(200, 0, 0),
                info: Color::Rgb(0, 100, 200),
                muted: Color::Rgb(120, 120, 120),
            },
            styles: StyleScheme::default(),
        }
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.colors.primary)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.colors.foreground)
    }

    pub fn title_style(&self) -> Style {
        self.styles.heading1.fg(self.colors.foreground)
    }

    pub fn heading_style(&self) -> Style {
        self.styles.heading2.fg(self.colors.primary)
    }

    pub fn link_style(&self) -> Style {
        self.styles.link.fg(self.colors.info)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }

    /// Style for the dialog close control
    pub fn close_style(&self) -> Style {
        Style::default()
            .fg(self.colors.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.colors.error)
            .add_modifier(Modifier::BOLD)
    }
}

/// Color scheme for themes
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub accent: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
}

/// Style scheme for text formatting
#[derive(Debug, Clone)]
pub struct StyleScheme {
    pub heading1: Style,
    pub heading2: Style,
    pub emphasis: Style,
    pub link: Style,
}

impl Default for StyleScheme {
    fn default() -> Self {
        Self {
            heading1: Style::default().add_modifier(Modifier::BOLD),
            heading2: Style::default().add_modifier(Modifier::BOLD),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            link: Style::default().add_modifier(Modifier::UNDERLINED),
        }
    }
}
