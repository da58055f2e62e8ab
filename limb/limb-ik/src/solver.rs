//! Analytic two-bone inverse kinematics.
//!
//! Given an anchor `A`, a target `P` and two rigid segments `L1`, `L2`, the
//! joint `J` satisfies `|A − J| = L1` and `|J − P| = L2`. Two such points
//! exist whenever `|L1 − L2| < |P − A| < L1 + L2`; a [`BendDirection`]
//! picks one of them.

use limb_types::{BendDirection, ChainConfig, Point2, ReachPolicy, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of solving a chain for one target.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IkSolution {
    /// Position of the intermediate joint.
    pub joint: Point2<f64>,
    /// The target was beyond `L1 + L2` and the [`ReachPolicy`] placed the
    /// joint instead of the law of cosines.
    pub stretched: bool,
}

/// A chain of two rigid segments hinged at a single joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoBoneChain {
    upper: f64,
    lower: f64,
}

impl TwoBoneChain {
    /// Create a chain with segment lengths `upper` (anchor→joint) and
    /// `lower` (joint→target).
    ///
    /// # Errors
    ///
    /// Returns an error if either length is not positive and finite.
    pub fn new(upper: f64, lower: f64) -> limb_types::Result<Self> {
        Self::from_config(&ChainConfig::new(upper, lower))
    }

    /// Create a chain from its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either length is not positive and finite.
    pub fn from_config(config: &ChainConfig) -> limb_types::Result<Self> {
        config.validate()?;
        Ok(Self {
            upper: config.upper_length,
            lower: config.lower_length,
        })
    }

    /// Anchor→joint length.
    #[must_use]
    pub const fn upper_length(&self) -> f64 {
        self.upper
    }

    /// Joint→target length.
    #[must_use]
    pub const fn lower_length(&self) -> f64 {
        self.lower
    }

    /// Longest anchor-to-target distance the rigid chain spans.
    #[must_use]
    pub fn reach(&self) -> f64 {
        self.upper + self.lower
    }

    /// Whether `target` is within rigid reach of `anchor`.
    #[must_use]
    pub fn reaches(&self, anchor: &Point2<f64>, target: &Point2<f64>) -> bool {
        nalgebra::distance(anchor, target) <= self.reach()
    }

    /// Solve for the joint position.
    ///
    /// Out-of-reach targets never fail: `policy` decides where the joint
    /// goes and the solution is flagged `stretched`. Within reach, the angle
    /// at the anchor comes from the law of cosines with its cosine clamped to
    /// `[-1, 1]`, so targets on the reach boundary (or closer than
    /// `|L1 − L2|`) produce a straight or fully folded chain rather than NaN.
    ///
    /// `anchor` and `target` must not coincide; the direction from one to the
    /// other is undefined there. Rig validation rules this configuration out.
    #[must_use]
    pub fn solve(
        &self,
        anchor: &Point2<f64>,
        target: &Point2<f64>,
        bend: BendDirection,
        policy: ReachPolicy,
    ) -> IkSolution {
        let delta = target - anchor;
        let d = delta.norm();
        debug_assert!(d > 0.0, "IK target coincides with anchor");

        let reach = self.reach();
        if d > reach {
            let ratio = match policy {
                ReachPolicy::SoftStretch => self.upper / reach,
                ReachPolicy::ClampToBoundary => self.upper / d,
            };
            return IkSolution {
                joint: anchor + delta * ratio,
                stretched: true,
            };
        }

        let cos_alpha = ((self.upper * self.upper + d * d - self.lower * self.lower)
            / (2.0 * self.upper * d))
            .clamp(-1.0, 1.0);
        let alpha = cos_alpha.acos();
        let base = delta.y.atan2(delta.x);
        let angle = bend.sign().mul_add(alpha, base);

        let (sin, cos) = angle.sin_cos();
        IkSolution {
            joint: anchor + Vector2::new(cos, sin) * self.upper,
            stretched: false,
        }
    }
}

/// Z component of `a × b`.
#[must_use]
pub fn cross(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rider_chain() -> TwoBoneChain {
        TwoBoneChain::new(135.0, 135.0).unwrap()
    }

    #[test]
    fn test_rejects_bad_lengths() {
        assert!(TwoBoneChain::new(0.0, 1.0).is_err());
        assert!(TwoBoneChain::new(1.0, -1.0).is_err());
        assert!(TwoBoneChain::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_pedal_at_bottom_dead_center() {
        let chain = rider_chain();
        let a = Point2::new(290.0, 195.0);
        let p = Point2::new(343.0, 432.0);
        let d = nalgebra::distance(&a, &p);
        assert_relative_eq!(d, 242.854, epsilon = 1e-3);
        assert!(chain.reaches(&a, &p));

        let sol = chain.solve(&a, &p, BendDirection::Clockwise, ReachPolicy::SoftStretch);
        assert!(!sol.stretched);
        assert_relative_eq!(nalgebra::distance(&a, &sol.joint), 135.0, epsilon = 1e-9);
        assert_relative_eq!(nalgebra::distance(&sol.joint, &p), 135.0, epsilon = 1e-9);

        // Clockwise in y-up terms: J sits on the negative side of A→P.
        assert!(cross(&(p - a), &(sol.joint - a)) < 0.0);
        // On screen (y down) that is in front of the line, towards +x.
        let on_line_x = a.x + (p.x - a.x) * (sol.joint.y - a.y) / (p.y - a.y);
        assert!(sol.joint.x > on_line_x);
    }

    #[test]
    fn test_bend_directions_mirror() {
        let chain = rider_chain();
        let a = Point2::new(290.0, 195.0);
        let p = Point2::new(343.0, 432.0);
        let cw = chain.solve(&a, &p, BendDirection::Clockwise, ReachPolicy::SoftStretch);
        let ccw = chain.solve(&a, &p, BendDirection::CounterClockwise, ReachPolicy::SoftStretch);

        assert!(cross(&(p - a), &(ccw.joint - a)) > 0.0);
        // The two solutions are reflections across A→P, so their midpoint is on it.
        let mid = nalgebra::center(&cw.joint, &ccw.joint);
        assert_relative_eq!(cross(&(p - a), &(mid - a)), 0.0, epsilon = 1e-8);
        assert_relative_eq!(
            nalgebra::distance(&ccw.joint, &p),
            135.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_exact_reach_is_straight() {
        let chain = TwoBoneChain::new(4.0, 6.0).unwrap();
        let a = Point2::origin();
        let p = Point2::new(6.0, 8.0);

        for bend in [BendDirection::Clockwise, BendDirection::CounterClockwise] {
            let sol = chain.solve(&a, &p, bend, ReachPolicy::SoftStretch);
            assert!(!sol.stretched);
            assert_relative_eq!(sol.joint, Point2::new(2.4, 3.2), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_soft_stretch() {
        let chain = TwoBoneChain::new(1.0, 3.0).unwrap();
        let a = Point2::new(1.0, 1.0);
        let p = Point2::new(11.0, 1.0);
        assert!(!chain.reaches(&a, &p));

        let sol = chain.solve(&a, &p, BendDirection::Clockwise, ReachPolicy::SoftStretch);
        assert!(sol.stretched);
        // L1 / (L1 + L2) = 0.25 of the way.
        assert_relative_eq!(sol.joint, Point2::new(3.5, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_clamp_to_boundary() {
        let chain = TwoBoneChain::new(1.0, 3.0).unwrap();
        let a = Point2::new(1.0, 1.0);
        let p = Point2::new(11.0, 1.0);

        let sol = chain.solve(&a, &p, BendDirection::Clockwise, ReachPolicy::ClampToBoundary);
        assert!(sol.stretched);
        assert_relative_eq!(sol.joint, Point2::new(2.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(nalgebra::distance(&a, &sol.joint), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_too_close_folds() {
        // |L1 − L2| = 2 > d = 1: no exact solution, the chain folds back on itself.
        let chain = TwoBoneChain::new(1.0, 3.0).unwrap();
        let a = Point2::origin();
        let p = Point2::new(1.0, 0.0);
        let sol = chain.solve(&a, &p, BendDirection::Clockwise, ReachPolicy::SoftStretch);
        assert!(!sol.stretched);
        assert!(sol.joint.x.is_finite() && sol.joint.y.is_finite());
        assert_relative_eq!(sol.joint, Point2::new(-1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let chain = rider_chain();
        let a = Point2::new(290.0, 191.3);
        let p = Point2::new(401.2, 380.7);
        let first = chain.solve(&a, &p, BendDirection::Clockwise, ReachPolicy::SoftStretch);
        let second = chain.solve(&a, &p, BendDirection::Clockwise, ReachPolicy::SoftStretch);
        assert_eq!(first, second);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn solution_serialization() {
        let solution = rider_chain().solve(
            &Point2::new(290.0, 195.0),
            &Point2::new(343.0, 432.0),
            BendDirection::Clockwise,
            ReachPolicy::SoftStretch,
        );

        let json = serde_json::to_string(&solution).unwrap();
        let parsed: IkSolution = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, solution);
    }
}
