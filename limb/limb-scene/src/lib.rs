//! Render-ready snapshots of the pedalling rider scene.
//!
//! This crate sits between [`limb_ik`] and whatever draws the SVG. It turns a
//! [`limb_types::RiderPose`] into the attribute strings the renderer writes
//! each frame and adds the scene's decorative motion:
//!
//! - [`svg`] - `d` and `transform` attribute formatting
//! - [`StreakLayer`] - Parallax background streaks, scattered once and scrolled
//! - [`SceneFrame`] - Every animated attribute for one tick
//! - [`SceneDriver`] - Clock + animator + streaks, one `tick(now)` per frame
//!
//! # Example
//!
//! ```
//! use limb_scene::{SceneDriver, StreakConfig};
//! use limb_types::{LimbSide, RigConfig};
//!
//! let driver = SceneDriver::new(RigConfig::default(), &StreakConfig::default(), 0.0)?;
//!
//! // Inside the host's animation-frame callback:
//! let frame = driver.tick(33.4);
//! let leg = frame.leg(LimbSide::Front);
//! assert!(leg.path.starts_with('M'));
//! assert!(leg.pedal_transform.starts_with("translate("));
//! # Ok::<(), limb_scene::SceneError>(())
//! ```

#![doc(html_root_url = "https://docs.rs/limb-scene/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod error;
mod frame;
mod parallax;
pub mod svg;

pub use error::{SceneError, SceneResult};
pub use frame::{LegFrame, SceneDriver, SceneFrame};
pub use parallax::{Streak, StreakConfig, StreakLayer};
