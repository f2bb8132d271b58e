//! Configuration types for Strata diagram rendering.
//!
//! This module provides the configuration structures that control how
//! diagrams are generated. All types implement [`serde::Deserialize`] for
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`Canvas`] - Default canvas size for diagrams that do not set their own.
//!
//! There is no style section: every diagram uses the fixed
//! [`Theme`](crate::theme::Theme).
//!
//! # Example
//!
//! ```
//! # use strata::config::AppConfig;
//! let config: AppConfig = toml::from_str("[canvas]\nwidth = 1600").unwrap();
//! assert_eq!(config.canvas().width(), 1600);
//! assert_eq!(config.canvas().height(), 800);
//! ```

use serde::Deserialize;

use crate::semantic::Canvas;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: Canvas,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified default canvas.
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas }
    }

    /// Returns the default canvas for diagrams that do not specify one.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.canvas(), Canvas::new(1200, 800));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.canvas(), Canvas::default());
    }

    #[test]
    fn test_canvas_section() {
        let config: AppConfig = toml::from_str("[canvas]\nwidth = 800\nheight = 600").unwrap();
        assert_eq!(config.canvas(), Canvas::new(800, 600));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[style]\nbackground_color = \"red\"");
        assert!(result.is_err());
    }
}
