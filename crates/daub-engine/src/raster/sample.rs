use crate::coords::Vec2;
use crate::paint::{ColorStop, Paint, RadialGradient};

/// Evaluates `paint` at `point`, returning premultiplied `[r, g, b, a]`.
pub fn sample_paint(paint: &Paint, point: Vec2) -> [f32; 4] {
    match paint {
        Paint::Solid(c) => c.to_premul(),
        Paint::RadialGradient(g) => sample_radial(g, point),
    }
}

fn sample_radial(g: &RadialGradient, point: Vec2) -> [f32; 4] {
    let d = point.distance(g.center);
    // Degenerate extent: everything past the center pads to the last stop.
    let t = if g.radius > 0.0 { d / g.radius } else if d > 0.0 { 1.0 } else { 0.0 };
    sample_stops(&g.stops, t)
}

/// Linear interpolation between stops in premultiplied space, pad spread.
fn sample_stops(stops: &[ColorStop], t: f32) -> [f32; 4] {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0.0; 4];
    };

    if t <= first.offset {
        return first.color.to_premul();
    }
    if t >= last.offset {
        return last.color.to_premul();
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t > b.offset {
            continue;
        }
        let span = b.offset - a.offset;
        if span <= 0.0 {
            return b.color.to_premul();
        }
        let f = (t - a.offset) / span;
        let ca = a.color.to_premul();
        let cb = b.color.to_premul();
        return core::array::from_fn(|i| ca[i] + (cb[i] - ca[i]) * f);
    }

    last.color.to_premul()
}
