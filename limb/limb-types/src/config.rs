//! Configuration types for a pedalling rig.
//!
//! A rig is supplied once at setup and is immutable afterwards. Defaults
//! reproduce the showcase scene: an 800×600 SVG viewport with y pointing
//! down and time measured in milliseconds.

use nalgebra::Point2;

use crate::error::{LimbError, Segment};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The circle traced by the driving points (the pedal path).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrankConfig {
    /// Center of rotation (bottom bracket).
    pub center: Point2<f64>,
    /// Crank arm length.
    pub radius: f64,
}

impl Default for CrankConfig {
    fn default() -> Self {
        Self {
            center: Point2::new(375.0, 400.0),
            radius: 32.0,
        }
    }
}

impl CrankConfig {
    /// Create a crank configuration.
    #[must_use]
    pub const fn new(center: Point2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Validate the crank.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(LimbError::InvalidRadius(self.radius));
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(LimbError::invalid_config("crank center must be finite"));
        }
        Ok(())
    }
}

/// Segment lengths of a two-bone chain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainConfig {
    /// Anchor to joint length (L1).
    pub upper_length: f64,
    /// Joint to driving point length (L2).
    pub lower_length: f64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            upper_length: 135.0,
            lower_length: 135.0,
        }
    }
}

impl ChainConfig {
    /// Create a chain configuration.
    #[must_use]
    pub const fn new(upper_length: f64, lower_length: f64) -> Self {
        Self {
            upper_length,
            lower_length,
        }
    }

    /// Maximum anchor-to-target distance the rigid chain can span.
    #[must_use]
    pub fn reach(&self) -> f64 {
        self.upper_length + self.lower_length
    }

    /// Validate both segment lengths.
    pub fn validate(&self) -> crate::Result<()> {
        for (segment, value) in [
            (Segment::Upper, self.upper_length),
            (Segment::Lower, self.lower_length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LimbError::invalid_segment(segment, value));
            }
        }
        Ok(())
    }
}

/// Vertical oscillation of the anchor ("gentle bob" of the rider's body).
///
/// The offset at time `t` is `amplitude * sin(t * angular_frequency)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BobConfig {
    /// Peak vertical displacement.
    pub amplitude: f64,
    /// Radians per time unit.
    pub angular_frequency: f64,
}

impl Default for BobConfig {
    fn default() -> Self {
        Self {
            amplitude: 4.0,
            angular_frequency: 0.005,
        }
    }
}

impl BobConfig {
    /// A bob that never moves the anchor.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            amplitude: 0.0,
            angular_frequency: 0.0,
        }
    }

    /// Validate the oscillation parameters.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(LimbError::invalid_bob(format!(
                "amplitude {} must be finite and non-negative",
                self.amplitude
            )));
        }
        if !self.angular_frequency.is_finite() {
            return Err(LimbError::invalid_bob(format!(
                "angular frequency {} must be finite",
                self.angular_frequency
            )));
        }
        Ok(())
    }
}

/// Which of the two IK elbow solutions a limb uses.
///
/// With `β` the direction from anchor to target and `α` the law-of-cosines
/// angle at the anchor, `Clockwise` places the joint at angle `β − α` and
/// `CounterClockwise` at `β + α`. In y-up orientation `Clockwise` yields
/// `cross(P − A, J − A) <= 0`. In a y-down screen space the same solution
/// appears mirrored, which for a rider facing +x is "knee forward".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BendDirection {
    /// Final angle `β − α`.
    #[default]
    Clockwise,
    /// Final angle `β + α`.
    CounterClockwise,
}

impl BendDirection {
    /// Sign applied to `α`.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Clockwise => -1.0,
            Self::CounterClockwise => 1.0,
        }
    }

    /// The other solution.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// `true` is the conventional "flip" flag and maps to [`BendDirection::Clockwise`].
impl From<bool> for BendDirection {
    fn from(flip: bool) -> Self {
        if flip {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }
}

/// What to do when the target is beyond the chain's reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReachPolicy {
    /// Place the joint on the anchor→target line at `L1 / (L1 + L2)` of the
    /// way, letting both segments stretch proportionally.
    #[default]
    SoftStretch,
    /// Place the joint at distance `L1` along the anchor→target line, leaving
    /// the lower segment to absorb the overshoot.
    ClampToBoundary,
}

/// Complete description of a pedalling rig.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RigConfig {
    /// Rest position of the anchor (hip), before bobbing.
    pub hip: Point2<f64>,
    /// Driving circle.
    pub crank: CrankConfig,
    /// Segment lengths shared by both limbs.
    pub chain: ChainConfig,
    /// Crank angular speed, radians per time unit. Zero parks the rig.
    pub angular_speed: f64,
    /// Anchor oscillation.
    pub bob: BobConfig,
    /// Knee convention for the front limb.
    pub front_bend: BendDirection,
    /// Knee convention for the back limb.
    pub back_bend: BendDirection,
    /// Centers of the wheels that spin with the crank.
    pub wheel_centers: Vec<Point2<f64>>,
    /// Over-extension fallback.
    pub reach_policy: ReachPolicy,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            hip: Point2::new(290.0, 195.0),
            crank: CrankConfig::default(),
            chain: ChainConfig::default(),
            angular_speed: 0.006,
            bob: BobConfig::default(),
            front_bend: BendDirection::Clockwise,
            back_bend: BendDirection::Clockwise,
            wheel_centers: vec![Point2::new(200.0, 400.0), Point2::new(550.0, 400.0)],
            reach_policy: ReachPolicy::SoftStretch,
        }
    }
}

impl RigConfig {
    /// Set the anchor rest position.
    #[must_use]
    pub fn with_hip(mut self, hip: Point2<f64>) -> Self {
        self.hip = hip;
        self
    }

    /// Set the driving circle.
    #[must_use]
    pub fn with_crank(mut self, crank: CrankConfig) -> Self {
        self.crank = crank;
        self
    }

    /// Set the segment lengths.
    #[must_use]
    pub fn with_chain(mut self, chain: ChainConfig) -> Self {
        self.chain = chain;
        self
    }

    /// Set the crank angular speed.
    #[must_use]
    pub fn with_angular_speed(mut self, angular_speed: f64) -> Self {
        self.angular_speed = angular_speed;
        self
    }

    /// Set the anchor oscillation.
    #[must_use]
    pub fn with_bob(mut self, bob: BobConfig) -> Self {
        self.bob = bob;
        self
    }

    /// Disable the anchor oscillation.
    #[must_use]
    pub fn without_bob(mut self) -> Self {
        self.bob = BobConfig::none();
        self
    }

    /// Set the knee convention for both limbs.
    #[must_use]
    pub fn with_bend(mut self, bend: BendDirection) -> Self {
        self.front_bend = bend;
        self.back_bend = bend;
        self
    }

    /// Replace the wheel centers.
    #[must_use]
    pub fn with_wheels(mut self, wheel_centers: Vec<Point2<f64>>) -> Self {
        self.wheel_centers = wheel_centers;
        self
    }

    /// Set the over-extension fallback.
    #[must_use]
    pub fn with_reach_policy(mut self, reach_policy: ReachPolicy) -> Self {
        self.reach_policy = reach_policy;
        self
    }

    /// Gap between the path swept by the bobbing anchor and the driving
    /// circle.
    ///
    /// The anchor moves on a vertical segment `hip ± amplitude`. A positive
    /// value means no point of that segment lies on the circle, so the chain
    /// target can never coincide with the anchor.
    #[must_use]
    pub fn anchor_clearance(&self) -> f64 {
        let amplitude = self.bob.amplitude.abs();
        let top = self.hip.y - amplitude;
        let bottom = self.hip.y + amplitude;
        let c = self.crank.center;
        let dx = self.hip.x - c.x;

        let nearest_y = c.y.clamp(top, bottom);
        let d_min = dx.hypot(nearest_y - c.y);
        let d_max = dx.hypot(top - c.y).max(dx.hypot(bottom - c.y));

        (d_min - self.crank.radius).max(self.crank.radius - d_max)
    }

    /// Validate the whole rig.
    pub fn validate(&self) -> crate::Result<()> {
        if !(self.hip.x.is_finite() && self.hip.y.is_finite()) {
            return Err(LimbError::invalid_config("hip position must be finite"));
        }
        self.crank.validate()?;
        self.chain.validate()?;
        self.bob.validate()?;

        if !self.angular_speed.is_finite() {
            return Err(LimbError::InvalidAngularSpeed(self.angular_speed));
        }

        if let Some(index) = self
            .wheel_centers
            .iter()
            .position(|w| !(w.x.is_finite() && w.y.is_finite()))
        {
            return Err(LimbError::invalid_config(format!(
                "wheel {index} center must be finite"
            )));
        }

        let clearance = self.anchor_clearance();
        if clearance <= 0.0 {
            return Err(LimbError::AnchorOnDrivingCircle { clearance });
        }

        Ok(())
    }
}
