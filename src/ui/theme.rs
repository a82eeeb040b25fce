//! Theme system for UI styling
//!
//! Provides consistent styling across the modal views with support
//! for multiple themes and easy customization.

use std::path::PathBuf;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ViewError, ViewResult};

/// UI theme containing all style definitions
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Color scheme
    pub colors: ColorScheme,
}

impl Theme {
    /// Load a theme by name
    ///
    /// Unknown names are looked up as custom theme files; when no file
    /// exists the default theme is returned.
    pub fn load(theme_name: &str) -> ViewResult<Self> {
        match theme_name {
            "default" => Ok(Self::default_theme()),
            "dark" => Ok(Self::dark_theme()),
            "light" => Ok(Self::light_theme()),
            _ => Self::load_custom_theme(theme_name).or_else(|_| Ok(Self::default_theme())),
        }
    }

    /// Default theme (dark with blue accents)
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            colors: ColorScheme {
                background: Color::Reset,
                foreground: Color::White,
                primary: Color::Blue,
                secondary: Color::Cyan,
                accent: Color::Yellow,
                success: Color::Green,
                error: Color::Red,
                muted: Color::DarkGray,
            },
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
                secondary: Color::Rgb(72, 209, 204),
                accent: Color::Rgb(255, 215, 0),
                success: Color::Rgb(50, 205, 50),
                error: Color::Rgb(220, 20, 60),
                muted: Color::Rgb(105, 105, 105),
            },
        }
    }

    /// Light theme for better visibility
    pub fn light_theme() -> Self {
        Self {
            name: "light".to_string(),
            colors: ColorScheme {
                background: Color::White,
                foreground: Color::Black,
                primary: Color::Rgb(0, 100, 200),
                secondary: Color::Rgb(0, 150, 150),
                accent: Color::Rgb(200, 150, 0),
                success: Color::Rgb(0, 150, 0),
                error: Color::Rgb(200, 0, 0),
                muted: Color::Rgb(120, 120, 120),
            },
        }
    }

    /// Load a custom theme from `<config_dir>/modalview/themes/<name>.toml`
    fn load_custom_theme(theme_name: &str) -> ViewResult<Self> {
        let path = Self::custom_theme_path(theme_name).ok_or_else(|| {
            ViewError::config("No user configuration directory available")
        })?;
        debug!("Loading custom theme from: {}", path.display());

        let content = std::fs::read_to_string(&path)?;
        let file: ThemeFile = toml::from_str(&content)
            .map_err(|e| ViewError::config(format!("Failed to parse theme file: {}", e)))?;

        Ok(Self {
            name: theme_name.to_string(),
            colors: file.colors,
        })
    }

    /// Path of a custom theme file, if a config directory exists
    fn custom_theme_path(theme_name: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("modalview");
            path.push("themes");
            path.push(format!("{}.toml", theme_name));
            path
        })
    }

    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }

    /// Get style for the container border while the modal has focus
    pub fn container_border_style(&self) -> Style {
        Style::default().fg(self.colors.primary)
    }

    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.colors.foreground)
    }

    /// Get style for the header title
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.colors.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for the overlay behind the container
    pub fn overlay_style(&self) -> Style {
        Style::default().fg(self.colors.muted).bg(self.colors.background)
    }

    /// Get style for an idle footer button
    pub fn button_style(&self) -> Style {
        Style::default().fg(self.colors.primary)
    }

    /// Get style for the selected footer button
    pub fn button_selected_style(&self) -> Style {
        Style::default()
            .fg(self.colors.background)
            .bg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for error messages
    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.colors.error)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for muted/disabled text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Color scheme for themes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

/// On-disk representation of a custom theme
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
    colors: ColorScheme,
}
