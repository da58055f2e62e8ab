//! Per-frame skeleton update.
//!
//! [`LimbAnimator::pose_at`] is a pure function of elapsed time: it keeps no
//! frame history, so calling it twice with the same `t` yields the same
//! [`RiderPose`], and frames can be evaluated in any order.

use limb_types::{
    BendDirection, LimbPose, LimbSide, PhasePair, Point2, RiderPose, RigConfig, WheelPose,
};
use tracing::{debug, info};

use crate::bob::Bob;
use crate::crank;
use crate::phase::PhaseDriver;
use crate::solver::TwoBoneChain;

/// Drives a pair of two-bone limbs from a rotating crank.
#[derive(Debug, Clone)]
pub struct LimbAnimator {
    config: RigConfig,
    phase: PhaseDriver,
    chain: TwoBoneChain,
    bob: Bob,
}

impl LimbAnimator {
    /// Validate `config` and build an animator for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the rig fails [`RigConfig::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use limb_ik::LimbAnimator;
    /// use limb_types::{LimbSide, RigConfig};
    ///
    /// let animator = LimbAnimator::new(RigConfig::default())?;
    /// let pose = animator.pose_at(16.0);
    ///
    /// assert_eq!(pose.limbs.len(), 2);
    /// assert_eq!(pose.limb(LimbSide::Front).side, LimbSide::Front);
    /// # Ok::<(), limb_types::LimbError>(())
    /// ```
    pub fn new(config: RigConfig) -> limb_types::Result<Self> {
        config.validate()?;
        let chain = TwoBoneChain::from_config(&config.chain)?;

        info!(
            hip_x = config.hip.x,
            hip_y = config.hip.y,
            reach = chain.reach(),
            angular_speed = config.angular_speed,
            clearance = config.anchor_clearance(),
            wheels = config.wheel_centers.len(),
            "Limb animator configured"
        );

        Ok(Self {
            phase: PhaseDriver::new(config.angular_speed),
            bob: Bob::new(config.bob),
            chain,
            config,
        })
    }

    /// The rig this animator was built from.
    #[must_use]
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// The crank phase driver.
    #[must_use]
    pub fn phase_driver(&self) -> &PhaseDriver {
        &self.phase
    }

    /// The shared limb chain.
    #[must_use]
    pub fn chain(&self) -> &TwoBoneChain {
        &self.chain
    }

    /// Anchor position at `t`, including the bob.
    #[must_use]
    pub fn anchor_at(&self, t: f64) -> Point2<f64> {
        self.bob.anchor(&self.config.hip, t)
    }

    /// Full rider pose at elapsed time `t`.
    #[must_use]
    pub fn pose_at(&self, t: f64) -> RiderPose {
        let phases = self.phase.at(t);
        let body_offset = self.bob.offset(t);
        let anchor = self.config.hip + body_offset;

        let limbs = LimbSide::DRAW_ORDER.map(|side| self.solve_limb(side, &anchor, phases));

        let rotation_degrees = self.phase.wheel_degrees(t);
        let wheels = self
            .config
            .wheel_centers
            .iter()
            .map(|&center| WheelPose {
                center,
                rotation_degrees,
            })
            .collect();

        RiderPose {
            time: t,
            phases,
            body_offset,
            crank_center: self.config.crank.center,
            limbs,
            wheels,
        }
    }

    /// Pose of a single limb at `t`.
    #[must_use]
    pub fn limb_at(&self, side: LimbSide, t: f64) -> LimbPose {
        self.solve_limb(side, &self.anchor_at(t), self.phase.at(t))
    }

    fn bend(&self, side: LimbSide) -> BendDirection {
        match side {
            LimbSide::Front => self.config.front_bend,
            LimbSide::Back => self.config.back_bend,
        }
    }

    fn solve_limb(&self, side: LimbSide, anchor: &Point2<f64>, phases: PhasePair) -> LimbPose {
        let driver = crank::driving_point(&self.config.crank, phases.get(side));
        let solution =
            self.chain
                .solve(anchor, &driver, self.bend(side), self.config.reach_policy);

        if solution.stretched {
            debug!(
                %side,
                distance = nalgebra::distance(anchor, &driver),
                reach = self.chain.reach(),
                policy = ?self.config.reach_policy,
                "Limb target out of reach"
            );
        }

        LimbPose {
            side,
            anchor: *anchor,
            joint: solution.joint,
            driver,
            stretched: solution.stretched,
        }
    }
}
