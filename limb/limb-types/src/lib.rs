//! Core types for cyclic limb animation.
//!
//! This crate provides the data side of a pedalling rig:
//!
//! - [`RigConfig`] - Anchor, driving circle, segment lengths, speed, bob
//! - [`BendDirection`] - Which of the two IK knee solutions a limb uses
//! - [`ReachPolicy`] - Fallback when a target is out of reach
//! - [`RiderPose`] - Everything one frame publishes to the renderer
//! - [`LimbError`] - Setup-time validation failures
//!
//! # Design Philosophy
//!
//! These types are **pure data**. The phase driver, the solver and the frame
//! update live in `limb-ik`; rendering glue lives in `limb-scene`. A pose is
//! a snapshot for exactly one frame and is never mutated afterwards.
//!
//! # Coordinate System
//!
//! Defaults are expressed in SVG viewport units:
//!
//! - X: right
//! - Y: down
//! - Angles: radians, measured from +X towards +Y
//!
//! # Example
//!
//! ```
//! use limb_types::{BendDirection, ChainConfig, RigConfig};
//!
//! let rig = RigConfig::default()
//!     .with_chain(ChainConfig::new(120.0, 140.0))
//!     .with_bend(BendDirection::Clockwise);
//!
//! assert!(rig.validate().is_ok());
//! assert_eq!(rig.chain.reach(), 260.0);
//! ```

#![doc(html_root_url = "https://docs.rs/limb-types/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::suboptimal_flops,          // mul_add style changes aren't always clearer
    clippy::missing_errors_doc,        // Error docs added where non-obvious
)]

mod config;
mod error;
mod pose;

pub use config::{BendDirection, BobConfig, ChainConfig, CrankConfig, ReachPolicy, RigConfig};
pub use error::{LimbError, Segment};
pub use pose::{LimbPose, LimbSide, PhasePair, RiderPose, WheelPose};

// Re-export math types for convenience
pub use nalgebra::{Point2, Vector2};

/// Result type for rig setup.
pub type Result<T> = std::result::Result<T, LimbError>;
