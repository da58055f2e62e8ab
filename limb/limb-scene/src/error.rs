//! Error types for scene setup.

use limb_types::LimbError;
use thiserror::Error;

/// Errors that can occur while building a scene.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    /// The rider rig is invalid.
    #[error(transparent)]
    Rig(#[from] LimbError),

    /// Streak layer parameters are unusable.
    #[error("invalid streak layer: {reason}")]
    InvalidStreaks {
        /// Description of the problem.
        reason: String,
    },
}

impl SceneError {
    /// Create an invalid streak layer error.
    #[must_use]
    pub fn invalid_streaks(reason: impl Into<String>) -> Self {
        Self::InvalidStreaks {
            reason: reason.into(),
        }
    }

    /// Check if this error came from the rider rig.
    #[must_use]
    pub fn is_rig_error(&self) -> bool {
        matches!(self, Self::Rig(_))
    }
}

/// Result type for scene operations.
pub type SceneResult<T> = std::result::Result<T, SceneError>;
