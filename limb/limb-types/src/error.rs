//! Error types for rig setup.
//!
//! Only configuration and chain construction can fail. Per-frame evaluation
//! is total and never returns a [`LimbError`].

use thiserror::Error;

/// Which bone of a two-bone chain a length refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Anchor to joint (thigh).
    Upper,
    /// Joint to driving point (shin).
    Lower,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upper => write!(f, "upper"),
            Self::Lower => write!(f, "lower"),
        }
    }
}

/// Errors that can occur while configuring a limb rig.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LimbError {
    /// Segment length is not a positive finite number.
    #[error("invalid {segment} segment length: {value} (must be positive and finite)")]
    InvalidSegmentLength {
        /// The offending segment.
        segment: Segment,
        /// The rejected length.
        value: f64,
    },

    /// Driving circle radius is not a positive finite number.
    #[error("invalid crank radius: {0} (must be positive and finite)")]
    InvalidRadius(f64),

    /// Angular speed is not finite.
    #[error("invalid angular speed: {0} (must be finite)")]
    InvalidAngularSpeed(f64),

    /// Anchor oscillation parameters are unusable.
    #[error("invalid bob: {reason}")]
    InvalidBob {
        /// Description of the problem.
        reason: String,
    },

    /// The anchor can reach a point on the driving circle, so the chain
    /// target could coincide with the anchor.
    #[error("anchor path touches the driving circle (clearance {clearance})")]
    AnchorOnDrivingCircle {
        /// Signed gap between the anchor path and the circle. Zero or negative
        /// means they intersect.
        clearance: f64,
    },

    /// Any other invalid configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl LimbError {
    /// Create an invalid segment length error.
    #[must_use]
    pub fn invalid_segment(segment: Segment, value: f64) -> Self {
        Self::InvalidSegmentLength { segment, value }
    }

    /// Create an invalid bob error.
    #[must_use]
    pub fn invalid_bob(reason: impl Into<String>) -> Self {
        Self::InvalidBob {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Check if this is a segment length error.
    #[must_use]
    pub fn is_segment_error(&self) -> bool {
        matches!(self, Self::InvalidSegmentLength { .. })
    }

    /// Check if this error comes from the rig geometry rather than a single
    /// out-of-range value.
    #[must_use]
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Self::AnchorOnDrivingCircle { .. })
    }

    /// Check if this is a generic configuration error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}
