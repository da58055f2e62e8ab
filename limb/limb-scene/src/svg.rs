//! SVG attribute formatting.
//!
//! Numbers use Rust's shortest round-trip formatting, so whole values print
//! without a fractional part (`290`, not `290.0`). Negative zero prints as `0`.

use limb_types::{Point2, Vector2};

/// Normalize `-0.0` so it prints as `0`.
fn num(value: f64) -> f64 {
    value + 0.0
}

/// Path `d` attribute for an open polyline: `M x0 y0 L x1 y1 …`.
///
/// An empty slice yields an empty string, which SVG renders as nothing.
#[must_use]
pub fn path_data(points: &[Point2<f64>]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{command} {} {}", num(p.x), num(p.y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `transform` attribute rotating by `degrees` around `center`.
#[must_use]
pub fn rotate(degrees: f64, center: &Point2<f64>) -> String {
    format!(
        "rotate({} {} {})",
        num(degrees),
        num(center.x),
        num(center.y)
    )
}

/// `transform` attribute translating by `offset`.
#[must_use]
pub fn translate(offset: &Vector2<f64>) -> String {
    format!("translate({}, {})", num(offset.x), num(offset.y))
}
