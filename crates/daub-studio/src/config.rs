use std::path::PathBuf;

use daub_engine::coords::Vec2;
use daub_engine::dot::DEFAULT_PEAK_ALPHA;
use daub_engine::logging::LoggingConfig;
use daub_engine::paint::{Rgb, Rgba};

/// Output path override.
pub const OUTPUT_ENV: &str = "DAUB_OUTPUT";
/// Log filter override, `env_logger` syntax.
pub const LOG_ENV: &str = "DAUB_LOG";

/// Startup configuration of the studio.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub title: String,
    pub canvas_size: Vec2,
    pub background: Rgba,
    pub initial_color: Rgb,
    pub initial_radius: u32,
    pub peak_alpha: f64,
    /// Distance of the panel's outer left edge and top from the canvas corner.
    pub panel_inset: Vec2,
    pub output: PathBuf,
    pub logging: LoggingConfig,
}

impl StudioConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = var(OUTPUT_ENV).filter(|p| !p.is_empty()) {
            self.output = PathBuf::from(path);
        }
        if let Some(filter) = var(LOG_ENV).filter(|f| !f.is_empty()) {
            self.logging = LoggingConfig::with_filter(filter);
        }
        self
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "Painter".to_string(),
            canvas_size: Vec2::new(900.0, 800.0),
            background: Rgba::from_hex(0xFFFFFF),
            initial_color: Rgb::BLUE,
            initial_radius: 60,
            peak_alpha: DEFAULT_PEAK_ALPHA,
            panel_inset: Vec2::new(10.0, 10.0),
            output: PathBuf::from("painter.png"),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = StudioConfig::default();
        assert_eq!(c.title, "Painter");
        assert_eq!(c.canvas_size, Vec2::new(900.0, 800.0));
        assert_eq!(c.initial_color, Rgb::new(0, 0, 255));
        assert_eq!(c.initial_radius, 60);
        assert_eq!(c.peak_alpha, 0.2);
    }

    #[test]
    fn overrides_apply_when_set() {
        let c = StudioConfig::default().with_overrides(|key| match key {
            OUTPUT_ENV => Some("out/dots.png".to_string()),
            LOG_ENV => Some("daub_ui=debug".to_string()),
            _ => None,
        });
        assert_eq!(c.output, PathBuf::from("out/dots.png"));
        assert_eq!(c.logging.env_filter.as_deref(), Some("daub_ui=debug"));
    }

    #[test]
    fn empty_overrides_are_ignored() {
        let c = StudioConfig::default().with_overrides(|_| Some(String::new()));
        assert_eq!(c.output, PathBuf::from("painter.png"));
        assert!(c.logging.env_filter.is_none());
    }
}
