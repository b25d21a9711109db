use std::path::Path;

use anyhow::Context;
use image::{ImageFormat, RgbaImage};

use crate::coords::{Rect, Vec2};
use crate::paint::{Paint, Rgba};
use crate::scene::{CircleCmd, DrawCmd, DrawList, RectCmd};

/// Premultiplied RGBA pixel buffer the compositor paints into.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl Surface {
    /// Creates a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        let bg = background.to_premul();
        Self {
            width,
            height,
            pixels: vec![bg; width as usize * height as usize],
        }
    }

    /// Paints every command of `draw_list` in paint order.
    pub fn composite(&mut self, draw_list: &mut DrawList) {
        let mut painted = 0usize;
        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Rect(cmd) => self.fill_rect(cmd),
                DrawCmd::Circle(cmd) => self.fill_circle(cmd),
            }
            painted += 1;
        }
        log::debug!("raster: composited {painted} draw items");
    }

    /// Straight-alpha color of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| to_straight_u8(self.pixels[self.index(x, y)]))
    }

    /// Converts the buffer into a straight-alpha image.
    pub fn image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = to_straight_u8(self.pixels[self.index(x, y)]);
            image::Rgba([c.r, c.g, c.b, c.a])
        })
    }

    /// Writes the surface to `path` as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.image()
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("writing canvas to {}", path.display()))?;
        log::info!("raster: wrote {}x{} canvas to {}", self.width, self.height, path.display());
        Ok(())
    }

    // ── shapes ────────────────────────────────────────────────────────────

    fn fill_rect(&mut self, cmd: &RectCmd) {
        let rect = cmd.rect.normalized();
        if rect.is_empty() || !rect.is_finite() {
            return;
        }
        if !paint_is_usable(&cmd.paint) {
            return;
        }

        let border = cmd.border.as_ref().filter(|b| b.width > 0.0);
        self.for_each_pixel_in(rect, |p| {
            if !rect.contains(p) {
                return None;
            }
            if let Some(b) = border {
                let inset = (p.x - rect.min().x)
                    .min(rect.max().x - p.x)
                    .min(p.y - rect.min().y)
                    .min(rect.max().y - p.y);
                if inset < b.width {
                    return Some(b.color.to_premul());
                }
            }
            Some(sample(&cmd.paint, p))
        });
    }

    fn fill_circle(&mut self, cmd: &CircleCmd) {
        if cmd.radius <= 0.0 || !cmd.center.is_finite() {
            return;
        }
        if !paint_is_usable(&cmd.paint) {
            return;
        }

        let border = cmd.border.as_ref().filter(|b| b.width > 0.0);
        self.for_each_pixel_in(cmd.bounds(), |p| {
            let d = p.distance(cmd.center);
            if d >= cmd.radius {
                return None;
            }
            match border {
                Some(b) if d >= cmd.radius - b.width => Some(b.color.to_premul()),
                _ => Some(sample(&cmd.paint, p)),
            }
        });
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Blends `shade(pixel_center)` over every pixel overlapped by `bounds`.
    fn for_each_pixel_in(&mut self, bounds: Rect, mut shade: impl FnMut(Vec2) -> Option<[f32; 4]>) {
        let x0 = bounds.min().x.floor().max(0.0) as u32;
        let y0 = bounds.min().y.floor().max(0.0) as u32;
        let x1 = (bounds.max().x.ceil().max(0.0) as u32).min(self.width);
        let y1 = (bounds.max().y.ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if let Some(src) = shade(p) {
                    let i = self.index(x, y);
                    self.pixels[i] = source_over(src, self.pixels[i]);
                }
            }
        }
    }
}

#[inline]
fn sample(paint: &Paint, p: Vec2) -> [f32; 4] {
    super::sample_paint(paint, p)
}

fn paint_is_usable(paint: &Paint) -> bool {
    match paint {
        Paint::Solid(_) => true,
        Paint::RadialGradient(g) if g.is_valid() => true,
        Paint::RadialGradient(g) => {
            log::warn!("raster: skipping malformed radial gradient ({} stops)", g.stops.len());
            false
        }
    }
}

#[inline]
fn source_over(src: [f32; 4], dst: [f32; 4]) -> [f32; 4] {
    let inv = 1.0 - src[3];
    core::array::from_fn(|i| src[i] + dst[i] * inv)
}

fn to_straight_u8(c: [f32; 4]) -> Rgba {
    let a = c[3].clamp(0.0, 1.0);
    if a <= 0.0 {
        return Rgba::transparent();
    }
    let ch = |v: f32| ((v / a).clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba::new(ch(c[0]), ch(c[1]), ch(c[2]), (a * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dot::render_dot;
    use crate::paint::{ColorStop, RadialGradient, Rgb};
    use crate::scene::{Border, Canvas, ZIndex};

    // ── dots ──────────────────────────────────────────────────────────────

    #[test]
    fn dot_peaks_at_center_and_vanishes_at_edge() {
        let mut list = DrawList::new();
        let dot = render_dot(Vec2::zero(), Rgb::BLUE, 60, 0.2);
        list.add(dot.into(), Vec2::new(100.0, 100.0));

        let mut surface = Surface::new(200, 200, Rgba::transparent());
        surface.composite(&mut list);

        let center = surface.pixel(100, 100).unwrap();
        assert_eq!(center.rgb(), Rgb::BLUE);
        assert!((50..=51).contains(&center.a), "center alpha {}", center.a);

        assert_eq!(surface.pixel(161, 100).unwrap().a, 0);
        assert_eq!(surface.pixel(100, 39).unwrap().a, 0);
        assert!(surface.pixel(130, 100).unwrap().a < center.a);
    }

    #[test]
    fn zero_radius_dot_paints_nothing() {
        let mut list = DrawList::new();
        list.add(render_dot(Vec2::zero(), Rgb::BLUE, 0, 1.0).into(), Vec2::new(5.0, 5.0));

        let mut surface = Surface::new(10, 10, Rgba::from_hex(0xFFFFFF));
        surface.composite(&mut list);
        assert_eq!(surface.pixel(5, 5), Some(Rgba::from_hex(0xFFFFFF)));
    }

    #[test]
    fn dot_blends_over_white() {
        let mut list = DrawList::new();
        list.add(render_dot(Vec2::zero(), Rgb::BLUE, 20, 1.0).into(), Vec2::new(20.0, 20.0));

        let mut surface = Surface::new(40, 40, Rgba::from_hex(0xFFFFFF));
        surface.composite(&mut list);

        let c = surface.pixel(20, 20).unwrap();
        assert_eq!(c.a, 255);
        assert_eq!(c.b, 255);
        assert!(c.r < 10);
    }

    #[test]
    fn malformed_gradient_is_skipped() {
        let mut list = DrawList::new();
        let bad = RadialGradient::new(Vec2::new(5.0, 5.0), 5.0, vec![ColorStop::new(0.0, Rgba::from_hex(0xFF0000))]);
        list.push_circle(ZIndex::CANVAS, Vec2::new(5.0, 5.0), 5.0, bad.into(), None);

        let mut surface = Surface::new(10, 10, Rgba::transparent());
        surface.composite(&mut list);
        assert_eq!(surface.pixel(5, 5), Some(Rgba::transparent()));
    }

    // ── rects ─────────────────────────────────────────────────────────────

    #[test]
    fn bordered_rect_paints_ring_and_fill() {
        let mut list = DrawList::new();
        list.push_rect(
            ZIndex::OVERLAY,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Paint::solid(Rgba::from_hex(0xFFFFFF)),
            Some(Border::new(1.0, Rgba::from_hex(0x000000))),
        );

        let mut surface = Surface::new(10, 10, Rgba::transparent());
        surface.composite(&mut list);

        assert_eq!(surface.pixel(0, 5), Some(Rgba::from_hex(0x000000)));
        assert_eq!(surface.pixel(5, 5), Some(Rgba::from_hex(0xFFFFFF)));
    }

    #[test]
    fn overlay_paints_above_canvas_regardless_of_insertion() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex::OVERLAY, Rect::new(0.0, 0.0, 4.0, 4.0), Paint::solid(Rgba::from_hex(0xFF0000)), None);
        list.push_rect(ZIndex::CANVAS, Rect::new(0.0, 0.0, 4.0, 4.0), Paint::solid(Rgba::from_hex(0x00FF00)), None);

        let mut surface = Surface::new(4, 4, Rgba::transparent());
        surface.composite(&mut list);
        assert_eq!(surface.pixel(1, 1), Some(Rgba::from_hex(0xFF0000)));
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let surface = Surface::new(2, 2, Rgba::transparent());
        assert_eq!(surface.pixel(2, 0), None);
        assert_eq!(surface.image().dimensions(), (2, 2));
    }
}
