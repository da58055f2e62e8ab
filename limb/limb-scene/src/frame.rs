//! Render snapshots and the per-tick driver.

use limb_ik::{FrameClock, LimbAnimator};
use limb_types::{LimbPose, LimbSide, Point2, RiderPose, RigConfig, Vector2};

use crate::error::SceneResult;
use crate::parallax::{StreakConfig, StreakLayer};
use crate::svg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Attributes for one leg with its crank arm and pedal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegFrame {
    /// Which leg.
    pub side: LimbSide,
    /// `d` of the hip → knee → pedal path.
    pub path: String,
    /// Free end of the crank arm (`x2`, `y2`); the arm starts at the crank center.
    pub crank_end: Point2<f64>,
    /// `transform` of the pedal shape.
    pub pedal_transform: String,
    /// The leg was over-extended this frame.
    pub stretched: bool,
}

impl LegFrame {
    fn from_pose(limb: &LimbPose) -> Self {
        Self {
            side: limb.side,
            path: svg::path_data(&limb.polyline()),
            crank_end: limb.driver,
            pedal_transform: svg::translate(&limb.driver.coords),
            stretched: limb.stretched,
        }
    }
}

/// Every animated attribute of the scene for one tick.
///
/// A frame is a read-only snapshot; the renderer applies it and drops it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneFrame {
    /// Elapsed time of this frame.
    pub time: f64,
    /// Legs in draw order (back leg first).
    pub legs: [LegFrame; 2],
    /// `transform` of each wheel's spoke group.
    pub wheel_transforms: Vec<String>,
    /// `transform` of the rider's body group.
    pub body_transform: String,
    /// `transform` of each background streak.
    pub streak_transforms: Vec<String>,
}

impl SceneFrame {
    /// Turn a rider pose and the streak layer into render attributes at `t`.
    #[must_use]
    pub fn compose(pose: &RiderPose, streaks: &StreakLayer, t: f64) -> Self {
        let legs = [
            LegFrame::from_pose(&pose.limbs[0]),
            LegFrame::from_pose(&pose.limbs[1]),
        ];

        let wheel_transforms = pose
            .wheels
            .iter()
            .map(|w| svg::rotate(w.rotation_degrees, &w.center))
            .collect();

        let streak_transforms = streaks
            .offsets_at(t)
            .into_iter()
            .map(|dx| svg::translate(&Vector2::new(dx, 0.0)))
            .collect();

        Self {
            time: t,
            legs,
            wheel_transforms,
            body_transform: svg::translate(&pose.body_offset),
            streak_transforms,
        }
    }

    /// Attributes of the given leg.
    #[must_use]
    pub fn leg(&self, side: LimbSide) -> &LegFrame {
        match side {
            LimbSide::Back => &self.legs[0],
            LimbSide::Front => &self.legs[1],
        }
    }
}

/// Owns everything needed to produce a [`SceneFrame`] from a host timestamp.
///
/// The host calls [`SceneDriver::tick`] from its animation-frame callback and
/// stops the animation by no longer calling it.
#[derive(Debug, Clone)]
pub struct SceneDriver {
    clock: FrameClock,
    animator: LimbAnimator,
    streaks: StreakLayer,
}

impl SceneDriver {
    /// Validate both configurations and start the clock at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rig or the streak configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use limb_scene::{SceneDriver, StreakConfig};
    /// use limb_types::RigConfig;
    ///
    /// let driver = SceneDriver::new(
    ///     RigConfig::default(),
    ///     &StreakConfig::default().with_seed(1),
    ///     0.0,
    /// )?;
    ///
    /// let frame = driver.tick(16.0);
    /// assert!(frame.legs[0].path.starts_with("M 290 "));
    /// assert_eq!(frame.streak_transforms.len(), 15);
    /// # Ok::<(), limb_scene::SceneError>(())
    /// ```
    pub fn new(rig: RigConfig, streaks: &StreakConfig, now: f64) -> SceneResult<Self> {
        let animator = LimbAnimator::new(rig)?;
        let streaks = StreakLayer::generate(streaks)?;
        Ok(Self::from_parts(animator, streaks, FrameClock::start_at(now)))
    }

    /// Assemble a driver from already-built parts.
    #[must_use]
    pub fn from_parts(animator: LimbAnimator, streaks: StreakLayer, clock: FrameClock) -> Self {
        Self {
            clock,
            animator,
            streaks,
        }
    }

    /// Produce the frame for host timestamp `now`.
    #[must_use]
    pub fn tick(&self, now: f64) -> SceneFrame {
        let t = self.clock.elapsed(now);
        let pose = self.animator.pose_at(t);
        SceneFrame::compose(&pose, &self.streaks, t)
    }

    /// Restart the animation from its first frame at `now`.
    pub fn restart(&mut self, now: f64) {
        self.clock.restart(now);
    }

    /// The rider animator.
    #[must_use]
    pub fn animator(&self) -> &LimbAnimator {
        &self.animator
    }

    /// The background streaks.
    #[must_use]
    pub fn streaks(&self) -> &StreakLayer {
        &self.streaks
    }

    /// The frame clock.
    #[must_use]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}
