//! Driving points on the crank circle.

use limb_types::{CrankConfig, PhasePair, Point2, Vector2};

/// Point at `angle` on the circle of `radius` around `center`.
#[must_use]
pub fn project(center: &Point2<f64>, radius: f64, angle: f64) -> Point2<f64> {
    let (sin, cos) = angle.sin_cos();
    center + Vector2::new(cos, sin) * radius
}

/// Pedal position for one crank angle.
#[must_use]
pub fn driving_point(crank: &CrankConfig, angle: f64) -> Point2<f64> {
    project(&crank.center, crank.radius, angle)
}

/// Front and back pedal positions for one frame.
#[must_use]
pub fn driving_points(crank: &CrankConfig, phases: PhasePair) -> (Point2<f64>, Point2<f64>) {
    (
        driving_point(crank, phases.front),
        driving_point(crank, phases.back),
    )
}
