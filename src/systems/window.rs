//! Window management system
//!
//! Creates the fixed-size painting window.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::Window,
};
use crate::config::WindowConfig;

/// Owns the application window
pub struct WindowSystem {
    window: Arc<Window>,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let attrs = Self::attributes(config);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        log::info!(
            "Created window '{}' ({}x{})",
            config.title,
            config.width,
            config.height
        );

        Ok(Self { window })
    }

    /// Window attributes for `config`: fixed logical size, not resizable
    pub fn attributes(config: &WindowConfig) -> winit::window::WindowAttributes {
        Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
            .with_resizable(false)
    }

    /// Get window reference (for surface creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_from_config() {
        // Can't create a real window without an event loop
        let attrs = WindowSystem::attributes(&WindowConfig::default());
        assert_eq!(attrs.title, "Painting");
        assert!(!attrs.resizable);
        assert_eq!(
            attrs.inner_size,
            Some(winit::dpi::LogicalSize::new(500, 400).into())
        );
    }

    #[test]
    fn test_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
