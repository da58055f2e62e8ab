//! Cyclic limb animation: crank phase, pedal projection and two-bone IK.
//!
//! Each frame, a pair of driving points rides a circle half a turn apart and
//! each limb's knee is placed by analytic two-bone inverse kinematics:
//!
//! - [`PhaseDriver`] - Elapsed time to crank angles (`θ`, `θ + π`)
//! - [`crank`] - Crank angle to pedal position on the driving circle
//! - [`TwoBoneChain`] - Law-of-cosines knee solver with a reach policy
//! - [`Bob`] - Vertical oscillation of the anchor
//! - [`LimbAnimator`] - Stateless `(t, rig) → pose` frame update
//! - [`FrameClock`] - Host timestamp to elapsed time
//!
//! # Example
//!
//! ```
//! use limb_ik::{FrameClock, LimbAnimator};
//! use limb_types::RigConfig;
//!
//! let animator = LimbAnimator::new(RigConfig::default())?;
//! let clock = FrameClock::start_at(1_000.0);
//!
//! // One animation-frame callback.
//! let pose = animator.pose_at(clock.elapsed(1_016.7));
//! for limb in &pose.limbs {
//!     let [hip, knee, pedal] = limb.polyline();
//!     assert!((nalgebra::distance(&hip, &knee) - 135.0).abs() < 1e-9);
//!     assert!((nalgebra::distance(&knee, &pedal) - 135.0).abs() < 1e-9);
//! }
//! # Ok::<(), limb_types::LimbError>(())
//! ```
//!
//! # Threading
//!
//! Everything here is synchronous arithmetic. An animator is immutable after
//! construction, so a host can call [`LimbAnimator::pose_at`] from its frame
//! callback without any coordination; stopping the animation is simply not
//! calling it again.

#![doc(html_root_url = "https://docs.rs/limb-ik/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::module_name_repetitions
)]

mod animator;
mod bob;
mod clock;
pub mod crank;
mod phase;
mod solver;

pub use animator::LimbAnimator;
pub use bob::Bob;
pub use clock::FrameClock;
pub use phase::PhaseDriver;
pub use solver::{IkSolution, TwoBoneChain, cross};
