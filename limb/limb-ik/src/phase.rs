//! Crank phase as a function of elapsed time.

use limb_types::{LimbSide, PhasePair};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maps elapsed time to crank angles.
///
/// The front angle is `t * ω`; the back angle trails by exactly `π` so the two
/// driving points stay diametrically opposite. Angles are never wrapped:
/// trigonometric periodicity takes care of that downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseDriver {
    angular_speed: f64,
}

impl PhaseDriver {
    /// Create a driver turning at `angular_speed` radians per time unit.
    #[must_use]
    pub const fn new(angular_speed: f64) -> Self {
        Self { angular_speed }
    }

    /// Radians per time unit.
    #[must_use]
    pub const fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    /// Front limb angle at `t`.
    #[must_use]
    pub fn front(&self, t: f64) -> f64 {
        t * self.angular_speed
    }

    /// Back limb angle at `t`.
    #[must_use]
    pub fn back(&self, t: f64) -> f64 {
        self.angle(LimbSide::Back, t)
    }

    /// Angle of the given limb at `t`.
    #[must_use]
    pub fn angle(&self, side: LimbSide, t: f64) -> f64 {
        self.front(t) + side.phase_offset()
    }

    /// Both angles at `t`.
    #[must_use]
    pub fn at(&self, t: f64) -> PhasePair {
        PhasePair::from_front(self.front(t))
    }

    /// Wheel rotation in degrees at `t`, following the front crank.
    #[must_use]
    pub fn wheel_degrees(&self, t: f64) -> f64 {
        self.front(t).to_degrees()
    }
}
