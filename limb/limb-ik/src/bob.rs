//! Slow vertical oscillation of the anchor.

use limb_types::{BobConfig, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Evaluates a [`BobConfig`] over time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bob {
    config: BobConfig,
}

impl Bob {
    /// Wrap a bob configuration.
    #[must_use]
    pub const fn new(config: BobConfig) -> Self {
        Self { config }
    }

    /// Vertical displacement at `t`.
    #[must_use]
    pub fn offset_y(&self, t: f64) -> f64 {
        (t * self.config.angular_frequency).sin() * self.config.amplitude
    }

    /// Displacement vector at `t`. The x component is always zero.
    #[must_use]
    pub fn offset(&self, t: f64) -> Vector2<f64> {
        Vector2::new(0.0, self.offset_y(t))
    }

    /// Anchor position at `t` for a given rest position.
    #[must_use]
    pub fn anchor(&self, rest: &Point2<f64>, t: f64) -> Point2<f64> {
        rest + self.offset(t)
    }
}

impl From<BobConfig> for Bob {
    fn from(config: BobConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_peak_and_rest() {
        let bob = Bob::new(BobConfig::default());
        assert_eq!(bob.offset_y(0.0), 0.0);
        // Quarter period of sin(t * 0.005) is at t = π / 0.01.
        assert_relative_eq!(bob.offset_y(PI / 0.01), 4.0, epsilon = 1e-12);
        assert_relative_eq!(bob.offset_y(3.0 * PI / 0.01), -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_anchor_moves_vertically_only() {
        let bob = Bob::from(BobConfig::default());
        let rest = Point2::new(290.0, 195.0);
        let moved = bob.anchor(&rest, 123.0);
        assert_eq!(moved.x, rest.x);
        assert!((moved.y - rest.y).abs() <= 4.0);
    }

    #[test]
    fn test_none_is_still() {
        let bob = Bob::new(BobConfig::none());
        for t in [0.0, 17.0, 1e6] {
            assert_eq!(bob.offset(t), Vector2::zeros());
        }
    }
}
