//! Numerical thresholds used by the tolerance-based vector tests.

/// Magnitudes and dot products at or below this value are treated as zero.
///
/// Floating-point round-off makes exact comparisons with `0.0` unreliable after any arithmetic,
/// so [`Vector::is_zero`] and [`Vector::is_orthogonal`] compare against this instead.
///
/// [`Vector::is_zero`]: crate::Vector::is_zero
/// [`Vector::is_orthogonal`]: crate::Vector::is_orthogonal
pub const ZERO_TOLERANCE: f64 = 1e-10;

/// Configurable thresholds for the `*_within` family of vector tests.
///
/// # Examples
///
/// ```
/// # use gola::*;
/// let tol = Tolerance::DEFAULT.with_angle(1e-3);
/// assert_eq!(tol.zero, ZERO_TOLERANCE);
/// assert_eq!(tol.angle, 1e-3);
/// assert_eq!(Tolerance::DEFAULT.with_zero(0.5).zero, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Largest magnitude (or absolute dot product) that is still considered zero.
    pub zero: f64,
    /// Largest deviation, in radians, from `0` or `π` that still counts as parallel.
    pub angle: f64,
}

impl Tolerance {
    /// Uses [`ZERO_TOLERANCE`] as the zero threshold and `1e-6` radians as the angular one.
    pub const DEFAULT: Self = Self {
        zero: ZERO_TOLERANCE,
        // `acos` is ill-conditioned near ±1: a cosine that is off by a single ULP already yields
        // an angle of about 1e-8.
        angle: 1e-6,
    };

    #[inline]
    pub const fn new(zero: f64, angle: f64) -> Self {
        Self { zero, angle }
    }

    /// Replaces the zero threshold.
    #[inline]
    pub const fn with_zero(self, zero: f64) -> Self {
        Self { zero, ..self }
    }

    /// Replaces the angular threshold (in radians).
    #[inline]
    pub const fn with_angle(self, angle: f64) -> Self {
        Self { angle, ..self }
    }
}

impl Default for Tolerance {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
