//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PAINT_SECTION__KEY`)
//!
//! Every field has a built-in default, so a missing config directory yields
//! the stock 500x400 "Painting" window.

use figment::{Figment, providers::{Format, Toml, Env}};
use paintbrush_core::{BrushSettings, Color, Key, MovementBindings, Palette};
use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use std::path::Path;

use crate::session::SessionSettings;

/// Largest accepted window or brush side, in pixels
pub const MAX_DIMENSION: u32 = 16_384;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Brush configuration
    #[serde(default)]
    pub brush: BrushConfig,
    /// Frame loop configuration
    #[serde(default)]
    pub session: SessionConfig,
    /// Key bindings for movement and quitting
    #[serde(default)]
    pub input: InputConfig,
    /// Color keys, in palette order
    #[serde(default = "default_palette")]
    pub palette: Vec<PaletteEntry>,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            brush: BrushConfig::default(),
            session: SessionConfig::default(),
            input: InputConfig::default(),
            palette: default_palette(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PAINT_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // PAINT_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("PAINT_").split("__"));

        let config: Self = figment.extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the frame loop cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::invalid("window size must be non-zero"));
        }
        if self.brush.width == 0 || self.brush.height == 0 {
            return Err(ConfigError::invalid("brush size must be non-zero"));
        }
        let sides = [
            self.window.width,
            self.window.height,
            self.brush.width,
            self.brush.height,
        ];
        if sides.iter().any(|&side| side > MAX_DIMENSION) {
            return Err(ConfigError::invalid(format!(
                "window and brush sides must be at most {} pixels",
                MAX_DIMENSION
            )));
        }
        if self.brush.speed <= 0 {
            return Err(ConfigError::invalid("brush speed must be positive"));
        }
        if self.session.frame_rate == 0 {
            return Err(ConfigError::invalid("frame rate must be non-zero"));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::invalid("palette must contain at least one color"));
        }

        let mut palette_keys = HashSet::new();
        for entry in &self.palette {
            if !palette_keys.insert(entry.key) {
                return Err(ConfigError::invalid(format!(
                    "palette key '{}' is bound twice",
                    entry.key
                )));
            }
        }

        let movement = self.input.movement_bindings().keys();
        let unique: HashSet<Key> = movement.iter().copied().collect();
        if unique.len() != movement.len() {
            return Err(ConfigError::invalid("movement keys must be distinct"));
        }

        if !self.palette.iter().any(|e| e.color == self.brush.initial_color) {
            return Err(ConfigError::invalid(format!(
                "initial brush color '{}' is not in the palette",
                self.brush.initial_color
            )));
        }

        Ok(())
    }

    /// Build brush construction parameters
    pub fn to_brush_settings(&self) -> BrushSettings {
        BrushSettings {
            width: self.brush.width,
            height: self.brush.height,
            speed: self.brush.speed,
            initial_color: self.brush.initial_color,
            movement: self.input.movement_bindings(),
            palette: Palette::new(self.palette.iter().map(|e| (e.key, e.color)).collect()),
        }
    }

    /// Build frame loop parameters
    pub fn to_session_settings(&self) -> SessionSettings {
        SessionSettings {
            frame_rate_cap: self.session.frame_rate,
            background_color: self.session.background_color,
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Painting".to_string(),
            width: 500,
            height: 400,
            vsync: true,
        }
    }
}

/// Brush configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Brush width in pixels
    pub width: u32,
    /// Brush height in pixels
    pub height: u32,
    /// Movement speed (pixels per frame)
    pub speed: i32,
    /// Starting color (must be in the palette)
    pub initial_color: Color,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            speed: paintbrush_core::DEFAULT_SPEED,
            initial_color: Color::RED,
        }
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Frame rate cap
    pub frame_rate: u32,
    /// Color the canvas is cleared to once at startup
    pub background_color: Color,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            background_color: Color::BLACK,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    /// Optional key that closes the program (unset: only the window close does)
    pub quit_key: Option<Key>,
}

impl Default for InputConfig {
    fn default() -> Self {
        let movement = MovementBindings::default();
        Self {
            up: movement.up,
            down: movement.down,
            left: movement.left,
            right: movement.right,
            quit_key: None,
        }
    }
}

impl InputConfig {
    pub fn movement_bindings(&self) -> MovementBindings {
        MovementBindings {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
        }
    }
}

/// One palette binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub key: Key,
    pub color: Color,
}

fn default_palette() -> Vec<PaletteEntry> {
    Palette::default()
        .iter()
        .map(|(key, color)| PaletteEntry { key, color })
        .collect()
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
