//! Per-frame pose snapshots.
//!
//! A pose is recomputed from the clock every tick and handed to the
//! rendering layer by value. Nothing here carries state between frames.

use std::f64::consts::PI;

use nalgebra::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the two paired limbs a pose belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LimbSide {
    /// Limb driven at phase `θ`.
    Front,
    /// Limb driven at phase `θ + π`.
    Back,
}

impl LimbSide {
    /// Both sides in draw order (back limb is painted first).
    pub const DRAW_ORDER: [Self; 2] = [Self::Back, Self::Front];

    /// Phase offset relative to the front limb.
    #[must_use]
    pub const fn phase_offset(self) -> f64 {
        match self {
            Self::Front => 0.0,
            Self::Back => PI,
        }
    }

    /// The paired side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

impl std::fmt::Display for LimbSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
        }
    }
}

/// Crank angles of both limbs for one frame, in radians.
///
/// Angles are not wrapped; `back` is always `front + π`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhasePair {
    /// Front limb angle.
    pub front: f64,
    /// Back limb angle.
    pub back: f64,
}

impl PhasePair {
    /// Build a pair from the front angle.
    #[must_use]
    pub fn from_front(front: f64) -> Self {
        Self {
            front,
            back: front + PI,
        }
    }

    /// Angle of the given side.
    #[must_use]
    pub const fn get(&self, side: LimbSide) -> f64 {
        match side {
            LimbSide::Front => self.front,
            LimbSide::Back => self.back,
        }
    }
}

/// Solved pose of one limb: anchor → joint → driving point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LimbPose {
    /// Which limb this is.
    pub side: LimbSide,
    /// Proximal end (hip).
    pub anchor: Point2<f64>,
    /// Intermediate joint (knee).
    pub joint: Point2<f64>,
    /// Distal end on the driving circle (pedal).
    pub driver: Point2<f64>,
    /// The target was out of reach and the reach policy placed the joint.
    pub stretched: bool,
}

impl LimbPose {
    /// The three polyline vertices in path order.
    #[must_use]
    pub const fn polyline(&self) -> [Point2<f64>; 3] {
        [self.anchor, self.joint, self.driver]
    }

    /// Rendered length of the anchor→joint segment.
    #[must_use]
    pub fn upper_length(&self) -> f64 {
        nalgebra::distance(&self.anchor, &self.joint)
    }

    /// Rendered length of the joint→driver segment.
    #[must_use]
    pub fn lower_length(&self) -> f64 {
        nalgebra::distance(&self.joint, &self.driver)
    }
}

/// A wheel spinning in step with the crank.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WheelPose {
    /// Rotation center.
    pub center: Point2<f64>,
    /// Rotation in degrees, unwrapped.
    pub rotation_degrees: f64,
}

/// Everything the renderer needs for one frame of the rider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiderPose {
    /// Elapsed time this pose was computed for.
    pub time: f64,
    /// Crank angles.
    pub phases: PhasePair,
    /// Translation applied to the rider's body group (the bob).
    pub body_offset: Vector2<f64>,
    /// Crank rotation center; cranks run from here to each driver.
    pub crank_center: Point2<f64>,
    /// Limb poses in [`LimbSide::DRAW_ORDER`].
    pub limbs: [LimbPose; 2],
    /// One entry per configured wheel.
    pub wheels: Vec<WheelPose>,
}

impl RiderPose {
    /// Pose of the given limb.
    #[must_use]
    pub fn limb(&self, side: LimbSide) -> &LimbPose {
        match side {
            LimbSide::Back => &self.limbs[0],
            LimbSide::Front => &self.limbs[1],
        }
    }

    /// Front limb pose.
    #[must_use]
    pub fn front(&self) -> &LimbPose {
        self.limb(LimbSide::Front)
    }

    /// Back limb pose.
    #[must_use]
    pub fn back(&self) -> &LimbPose {
        self.limb(LimbSide::Back)
    }

    /// Whether any limb fell back to the reach policy this frame.
    #[must_use]
    pub fn any_stretched(&self) -> bool {
        self.limbs.iter().any(|l| l.stretched)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn limb(side: LimbSide, x: f64) -> LimbPose {
        LimbPose {
            side,
            anchor: Point2::new(0.0, 0.0),
            joint: Point2::new(3.0, 4.0),
            driver: Point2::new(x, 4.0),
            stretched: false,
        }
    }

    #[test]
    fn test_phase_pair() {
        let pair = PhasePair::from_front(0.25);
        assert_relative_eq!(pair.back - pair.front, PI);
        assert_eq!(pair.get(LimbSide::Front), 0.25);
        assert_eq!(pair.get(LimbSide::Back), pair.back);
    }

    #[test]
    fn test_side_offsets() {
        assert_eq!(LimbSide::Front.phase_offset(), 0.0);
        assert_eq!(LimbSide::Back.phase_offset(), PI);
        assert_eq!(LimbSide::Front.opposite(), LimbSide::Back);
        assert_eq!(LimbSide::DRAW_ORDER[0], LimbSide::Back);
    }

    #[test]
    fn test_limb_lengths() {
        let pose = limb(LimbSide::Front, 10.0);
        assert_relative_eq!(pose.upper_length(), 5.0);
        assert_relative_eq!(pose.lower_length(), 7.0);
        assert_eq!(pose.polyline()[1], Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_rider_limb_lookup() {
        let pose = RiderPose {
            time: 0.0,
            phases: PhasePair::from_front(0.0),
            body_offset: Vector2::zeros(),
            crank_center: Point2::origin(),
            limbs: [limb(LimbSide::Back, 1.0), limb(LimbSide::Front, 2.0)],
            wheels: Vec::new(),
        };
        assert_eq!(pose.front().side, LimbSide::Front);
        assert_eq!(pose.back().driver.x, 1.0);
        assert!(!pose.any_stretched());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rider_pose_serialization() {
        let pose = RiderPose {
            time: 1_234.5,
            phases: PhasePair::from_front(7.407),
            body_offset: Vector2::new(0.0, -3.25),
            crank_center: Point2::new(375.0, 400.0),
            limbs: [
                limb(LimbSide::Back, 343.0),
                LimbPose {
                    stretched: true,
                    ..limb(LimbSide::Front, 407.0)
                },
            ],
            wheels: vec![WheelPose {
                center: Point2::new(200.0, 400.0),
                rotation_degrees: 424.4,
            }],
        };

        let json = serde_json::to_string(&pose).unwrap();
        assert!(json.contains("\"Front\""));

        let parsed: RiderPose = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pose);
        assert!(parsed.front().stretched);
    }
}
