//! Background speed streaks.
//!
//! A fixed set of horizontal lines is scattered once at setup; each frame
//! every line is shifted left at its own speed and wrapped around a span
//! wider than the viewport, which reads as forward motion of the rider.

use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::error::{SceneError, SceneResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for scattering and scrolling the streaks.
///
/// Every `(min, max)` range is sampled half-open and must satisfy `min < max`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StreakConfig {
    /// Number of streaks.
    pub count: usize,
    /// Vertical band the streaks occupy.
    pub y_range: (f64, f64),
    /// Per-streak speed multiplier.
    pub speed_range: (f64, f64),
    /// Streak length.
    pub width_range: (f64, f64),
    /// Initial left end of each streak.
    pub x_range: (f64, f64),
    /// Stroke width.
    pub stroke_width_range: (f64, f64),
    /// Colors picked uniformly per streak.
    pub palette: Vec<String>,
    /// Horizontal distance per time unit at speed 1.
    pub drift: f64,
    /// Period of the horizontal wrap.
    pub wrap_span: f64,
    /// How far left of the viewport a wrapped streak restarts.
    pub margin: f64,
    /// Fixed seed for reproducible layouts; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            count: 15,
            y_range: (480.0, 580.0),
            speed_range: (0.5, 2.5),
            width_range: (20.0, 170.0),
            x_range: (0.0, 1200.0),
            stroke_width_range: (1.0, 3.0),
            palette: vec!["#6d28d9".to_string(), "#2563eb".to_string()],
            drift: 0.3,
            wrap_span: 1400.0,
            margin: 200.0,
            seed: None,
        }
    }
}

impl StreakConfig {
    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of streaks.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Validate ranges, palette and wrap parameters.
    pub fn validate(&self) -> SceneResult<()> {
        for (name, (min, max)) in [
            ("y", self.y_range),
            ("speed", self.speed_range),
            ("width", self.width_range),
            ("x", self.x_range),
            ("stroke width", self.stroke_width_range),
        ] {
            if !(min.is_finite() && max.is_finite()) || min >= max {
                return Err(SceneError::invalid_streaks(format!(
                    "{name} range [{min}, {max}) is empty or not finite"
                )));
            }
            // The sampler needs a representable span.
            if !(max - min).is_finite() {
                return Err(SceneError::invalid_streaks(format!(
                    "{name} range [{min}, {max}) is too wide to sample"
                )));
            }
        }
        if self.palette.is_empty() {
            return Err(SceneError::invalid_streaks("palette is empty"));
        }
        if !self.drift.is_finite() {
            return Err(SceneError::invalid_streaks("drift must be finite"));
        }
        if !self.wrap_span.is_finite() || self.wrap_span <= 0.0 {
            return Err(SceneError::invalid_streaks(format!(
                "wrap span {} must be positive",
                self.wrap_span
            )));
        }
        if !self.margin.is_finite() {
            return Err(SceneError::invalid_streaks("margin must be finite"));
        }
        Ok(())
    }
}

/// One background line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Streak {
    /// Vertical position.
    pub y: f64,
    /// Speed multiplier.
    pub speed: f64,
    /// Length.
    pub width: f64,
    /// Left end at `t = 0`.
    pub initial_x: f64,
    /// Stroke color.
    pub color: String,
    /// Stroke width.
    pub stroke_width: f64,
}

impl Streak {
    /// Left end, as drawn before any transform.
    #[must_use]
    pub fn x1(&self) -> f64 {
        self.initial_x
    }

    /// Right end, as drawn before any transform.
    #[must_use]
    pub fn x2(&self) -> f64 {
        self.initial_x + self.width
    }
}

/// The scattered streaks plus the scroll parameters they move with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StreakLayer {
    streaks: Vec<Streak>,
    drift: f64,
    wrap_span: f64,
    margin: f64,
}

impl StreakLayer {
    /// Scatter streaks according to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`StreakConfig::validate`].
    pub fn generate(config: &StreakConfig) -> SceneResult<Self> {
        config.validate()?;

        let mut rng: Box<dyn RngCore> = if let Some(seed) = config.seed {
            Box::new(rand::rngs::StdRng::seed_from_u64(seed))
        } else {
            Box::new(rand::thread_rng())
        };

        let streaks = (0..config.count)
            .map(|_| {
                let y = rng.gen_range(config.y_range.0..config.y_range.1);
                let speed = rng.gen_range(config.speed_range.0..config.speed_range.1);
                let width = rng.gen_range(config.width_range.0..config.width_range.1);
                let initial_x = rng.gen_range(config.x_range.0..config.x_range.1);
                let color = config.palette[rng.gen_range(0..config.palette.len())].clone();
                let stroke_width =
                    rng.gen_range(config.stroke_width_range.0..config.stroke_width_range.1);
                Streak {
                    y,
                    speed,
                    width,
                    initial_x,
                    color,
                    stroke_width,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            count = streaks.len(),
            seeded = config.seed.is_some(),
            "Generated streak layer"
        );

        Ok(Self {
            streaks,
            drift: config.drift,
            wrap_span: config.wrap_span,
            margin: config.margin,
        })
    }

    /// The streaks in draw order.
    #[must_use]
    pub fn streaks(&self) -> &[Streak] {
        &self.streaks
    }

    /// Number of streaks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.streaks.len()
    }

    /// Whether the layer has no streaks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.streaks.is_empty()
    }

    /// Horizontal translation of `streak` at elapsed time `t`.
    ///
    /// The streak's left end is displayed at
    /// `rem_euclid(x0 − t·drift·speed, span) − margin`; the returned value is
    /// that position relative to where the streak was drawn (`x0`).
    #[must_use]
    pub fn offset_at(&self, streak: &Streak, t: f64) -> f64 {
        let current = streak.initial_x - t * self.drift * streak.speed;
        let display = current.rem_euclid(self.wrap_span) - self.margin;
        display - streak.initial_x
    }

    /// Translations of every streak at `t`, in draw order.
    #[must_use]
    pub fn offsets_at(&self, t: f64) -> Vec<f64> {
        self.streaks.iter().map(|s| self.offset_at(s, t)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn streak(initial_x: f64, speed: f64) -> Streak {
        Streak {
            y: 500.0,
            speed,
            width: 50.0,
            initial_x,
            color: "#2563eb".to_string(),
            stroke_width: 2.0,
        }
    }

    fn empty_layer() -> StreakLayer {
        StreakLayer::generate(&StreakConfig::default().with_count(0)).unwrap()
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = StreakConfig::default().with_seed(7);
        let a = StreakLayer::generate(&config).unwrap();
        let b = StreakLayer::generate(&config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 15);
    }

    #[test]
    fn test_streaks_within_ranges() {
        let config = StreakConfig::default().with_seed(42);
        let layer = StreakLayer::generate(&config).unwrap();
        for s in layer.streaks() {
            assert!((480.0..580.0).contains(&s.y));
            assert!((0.5..2.5).contains(&s.speed));
            assert!((20.0..170.0).contains(&s.width));
            assert!((0.0..1200.0).contains(&s.initial_x));
            assert!((1.0..3.0).contains(&s.stroke_width));
            assert!(config.palette.contains(&s.color));
            assert_relative_eq!(s.x2() - s.x1(), s.width, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_offset_at_start() {
        let layer = empty_layer();
        // At t = 0 a streak at x0 = 300 is shown at 300 - 200 = 100.
        assert_relative_eq!(layer.offset_at(&streak(300.0, 1.0), 0.0), -200.0);
    }

    #[test]
    fn test_offset_wraps() {
        let layer = empty_layer();
        let s = streak(100.0, 1.0);
        // After moving 0.3 * 1000 = 300 units left, x = -200 wraps to 1200.
        let offset = layer.offset_at(&s, 1000.0);
        assert_relative_eq!(offset, 1200.0 - 200.0 - 100.0, epsilon = 1e-9);

        // A full wrap period later the streak is back where it was.
        let period = 1400.0 / 0.3;
        assert_relative_eq!(
            layer.offset_at(&s, period),
            layer.offset_at(&s, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_display_position_stays_in_band() {
        let layer = StreakLayer::generate(&StreakConfig::default().with_seed(3)).unwrap();
        for t in [0.0, 16.0, 5_000.0, 123_456.0] {
            for (s, offset) in layer.streaks().iter().zip(layer.offsets_at(t)) {
                let shown = s.initial_x + offset;
                assert!(shown >= -200.0 - 1e-9 && shown <= 1200.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_invalid_config() {
        let mut config = StreakConfig::default();
        config.speed_range = (2.0, 2.0);
        assert!(matches!(
            StreakLayer::generate(&config),
            Err(SceneError::InvalidStreaks { .. })
        ));

        let mut config = StreakConfig::default();
        config.palette.clear();
        assert!(config.validate().is_err());

        let mut config = StreakConfig::default();
        config.wrap_span = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unsampleable_range_rejected() {
        let mut config = StreakConfig::default().with_seed(5);
        config.x_range = (-f64::MAX, f64::MAX);
        let err = StreakLayer::generate(&config).unwrap_err();
        assert!(matches!(err, SceneError::InvalidStreaks { .. }));
        assert!(err.to_string().contains("x range"));

        let mut config = StreakConfig::default();
        config.width_range = (f64::MIN, 0.0);
        assert!(config.validate().is_ok());
        config.width_range = (f64::MIN, f64::MAX / 2.0);
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn streak_layer_serialization() {
        let layer = StreakLayer::generate(&StreakConfig::default().with_seed(9)).unwrap();

        let json = serde_json::to_string(&layer).unwrap();
        let parsed: StreakLayer = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, layer);
        assert_eq!(parsed.offsets_at(250.0), layer.offsets_at(250.0));
    }

    #[test]
    fn test_empty_layer() {
        let layer = empty_layer();
        assert!(layer.is_empty());
        assert!(layer.offsets_at(100.0).is_empty());
    }
}
