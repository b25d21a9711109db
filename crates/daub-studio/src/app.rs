use anyhow::ensure;

use daub_engine::coords::Vec2;
use daub_engine::dot::GradientDotRenderer;
use daub_engine::raster::Surface;
use daub_engine::scene::{Canvas, DrawList};
use daub_ui::event::{EventResult, UiEvent};
use daub_ui::SettingsPanel;

use crate::config::StudioConfig;

/// Largest canvas edge, in pixels.
pub const MAX_CANVAS_SIDE: f32 = 16384.0;

/// The painting window: a canvas of stamped dots with the settings panel on top.
pub struct Studio {
    config: StudioConfig,
    canvas: DrawList,
    panel: SettingsPanel,
    renderer: GradientDotRenderer,
}

impl Studio {
    pub fn new(config: StudioConfig) -> anyhow::Result<Self> {
        let size = config.canvas_size;
        let side = 1.0..=MAX_CANVAS_SIDE;
        ensure!(
            size.is_finite() && side.contains(&size.x) && side.contains(&size.y),
            "canvas size must be between 1x1 and {MAX_CANVAS_SIDE}x{MAX_CANVAS_SIDE}, got {}x{}",
            size.x,
            size.y,
        );

        let mut panel = SettingsPanel::new(config.initial_color, config.initial_radius);
        let bounds = panel.bounds();
        panel.place(Vec2::new(config.panel_inset.x - bounds.min().x, config.panel_inset.y));

        log::info!(
            "studio: \"{}\" {}x{}, brush {:?} radius {}",
            config.title,
            size.x,
            size.y,
            config.initial_color,
            config.initial_radius,
        );

        Ok(Self {
            renderer: GradientDotRenderer::new(config.peak_alpha),
            config,
            canvas: DrawList::new(),
            panel,
        })
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn panel(&self) -> &SettingsPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut SettingsPanel {
        &mut self.panel
    }

    /// Number of dots stamped so far.
    pub fn dot_count(&self) -> usize {
        self.canvas.len()
    }

    /// Canvas center in pixels.
    pub fn center(&self) -> Vec2 {
        self.config.canvas_size * 0.5
    }

    // ── painting ──────────────────────────────────────────────────────────

    /// Stamps one dot at `location` with the panel's current brush.
    pub fn paint_dot(&mut self, location: Vec2) {
        let brush = self.panel.brush_options();
        let dot = self.renderer.render(Vec2::zero(), &brush);
        self.canvas.add(dot.into(), location);
    }

    /// Routes input to the panel.
    pub fn handle_event(&mut self, event: &UiEvent) -> EventResult {
        self.panel.on_event(event)
    }

    /// Composites dots and panel into a fresh surface.
    pub fn render(&self) -> Surface {
        let size = self.config.canvas_size;
        let mut surface = Surface::new(size.x as u32, size.y as u32, self.config.background);

        let mut frame = self.canvas.clone();
        self.panel.paint(&mut frame);
        surface.composite(&mut frame);
        surface
    }

    /// Renders and writes the configured output file.
    pub fn save(&self) -> anyhow::Result<()> {
        self.render().save_png(&self.config.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daub_engine::paint::Rgb;
    use daub_ui::event::Key;
    use daub_ui::sync::FieldId;

    fn small() -> StudioConfig {
        StudioConfig { canvas_size: Vec2::new(300.0, 260.0), ..StudioConfig::default() }
    }

    #[test]
    fn panel_sits_inside_left_margin() {
        let studio = Studio::new(StudioConfig::default()).unwrap();
        assert_eq!(studio.panel().origin(), Vec2::new(63.0, 10.0));
        let first_label = studio.panel().labels().next().unwrap().1;
        assert_eq!(first_label.min().x, 10.0);
    }

    #[test]
    fn rejects_empty_canvas() {
        let config = StudioConfig { canvas_size: Vec2::new(0.0, 10.0), ..StudioConfig::default() };
        assert!(Studio::new(config).is_err());
    }

    #[test]
    fn rejects_oversized_canvas() {
        let wide = StudioConfig { canvas_size: Vec2::new(100_000.0, 10.0), ..StudioConfig::default() };
        assert!(Studio::new(wide).is_err());
        let tall = StudioConfig { canvas_size: Vec2::new(10.0, MAX_CANVAS_SIDE + 1.0), ..StudioConfig::default() };
        assert!(Studio::new(tall).is_err());

        let edge = StudioConfig { canvas_size: Vec2::new(MAX_CANVAS_SIDE, 1.0), ..StudioConfig::default() };
        assert!(Studio::new(edge).is_ok());
    }

    #[test]
    fn default_dot_is_stamped_at_center() {
        let mut studio = Studio::new(StudioConfig::default()).unwrap();
        studio.paint_dot(studio.center());

        let surface = studio.render();
        let c = surface.pixel(450, 400).unwrap();
        // 20% blue over white.
        assert_eq!(c.a, 255);
        assert_eq!(c.b, 255);
        assert!((203..=205).contains(&c.r), "red {}", c.r);

        assert_eq!(surface.pixel(450 + 61, 400), Some(studio.config().background));
    }

    #[test]
    fn dots_use_the_brush_at_stamp_time() {
        let mut studio = Studio::new(small()).unwrap();
        studio.paint_dot(Vec2::new(250.0, 50.0));

        let radius = studio.panel().field_rect(FieldId::Radius).unwrap();
        studio.handle_event(&UiEvent::Click { pos: radius.center() });
        studio.handle_event(&UiEvent::KeyPress { key: Key::Backspace });
        assert_eq!(studio.panel().brush_options().radius(), 6);

        studio.paint_dot(Vec2::new(250.0, 200.0));
        assert_eq!(studio.dot_count(), 2);

        let surface = studio.render();
        // Second dot is radius 6: 20px from its center is untouched.
        assert_eq!(surface.pixel(270, 200), Some(studio.config().background));
        assert_ne!(surface.pixel(270, 50), Some(studio.config().background));
    }

    #[test]
    fn panel_paints_over_dots() {
        let mut studio = Studio::new(small()).unwrap();
        studio.panel_mut().set_color(Rgb::new(255, 0, 0));
        let swatch_center = Vec2::new(113.0, 60.0);
        studio.paint_dot(swatch_center);

        let c = studio.render().pixel(113, 60).unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (255, 0, 0, 255));
    }

    #[test]
    fn render_does_not_consume_canvas() {
        let mut studio = Studio::new(small()).unwrap();
        studio.paint_dot(studio.center());
        studio.render();
        assert_eq!(studio.dot_count(), 1);
    }
}
