#![forbid(unsafe_code)]

//! Size constraint solving.
//!
//! Pure functions from proposed sizes to admissible sizes. Nothing in this
//! module holds state; the drag lifecycle and layout models layer on top.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tolerance for the paired-resize sum check.
///
/// Pixel-to-percentage conversion runs through f64, so a strict `>` compare
/// would reject moves that differ from the original total only by float
/// noise.
pub const PAIR_SUM_EPSILON: f64 = 1e-6;

/// Per-pane size bounds, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBounds {
    min: f64,
    max: f64,
}

impl SizeBounds {
    /// Fallback bounds for grid panes, in percent of container.
    pub const GRID_FALLBACK: SizeBounds = SizeBounds {
        min: 10.0,
        max: 90.0,
    };

    /// Create bounds, rejecting inverted, non-finite, or negative limits.
    pub fn new(min: f64, max: f64) -> Result<Self, SizeBoundsError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SizeBoundsError::NonFinite { min, max });
        }
        if min < 0.0 {
            return Err(SizeBoundsError::Negative { min });
        }
        if max < min {
            return Err(SizeBoundsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower limit.
    #[inline]
    #[must_use]
    pub const fn min(self) -> f64 {
        self.min
    }

    /// Upper limit.
    #[inline]
    #[must_use]
    pub const fn max(self) -> f64 {
        self.max
    }

    /// Constrain a proposed size to `[min, max]`.
    ///
    /// Idempotent: clamping a clamped value is a no-op.
    #[inline]
    #[must_use]
    pub fn clamp(self, proposed: f64) -> f64 {
        self.min.max(self.max.min(proposed))
    }

    /// Whether a size already satisfies the bounds.
    #[inline]
    #[must_use]
    pub fn contains(self, size: f64) -> bool {
        size >= self.min && size <= self.max
    }
}

/// Invalid bound configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeBoundsError {
    Inverted { min: f64, max: f64 },
    NonFinite { min: f64, max: f64 },
    Negative { min: f64 },
}

impl fmt::Display for SizeBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted { min, max } => {
                write!(f, "inverted size bounds: min {min} exceeds max {max}")
            }
            Self::NonFinite { min, max } => {
                write!(f, "non-finite size bounds: min {min}, max {max}")
            }
            Self::Negative { min } => write!(f, "negative minimum size {min}"),
        }
    }
}

impl std::error::Error for SizeBoundsError {}

/// Outcome of a paired (mass-conserving) resize proposal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PairedResize {
    /// The move was admissible, possibly with a reduced delta.
    Applied {
        first: f64,
        second: f64,
        /// Signed delta actually transferred from second to first.
        applied_delta: f64,
    },
    /// Both rails saturated and the post-clamp sum exceeded the original
    /// total; the prior sizes are retained unchanged.
    Rejected { first: f64, second: f64 },
}

impl PairedResize {
    /// Resulting `(first, second)` pair, whether applied or retained.
    #[inline]
    #[must_use]
    pub const fn sizes(self) -> (f64, f64) {
        match self {
            Self::Applied { first, second, .. } | Self::Rejected { first, second } => {
                (first, second)
            }
        }
    }

    /// True if the move was committed.
    #[inline]
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Resolve a paired resize: grow `first` by `delta`, shrink `second` by the
/// same amount, honoring both panes' bounds and conserving their sum.
///
/// Each side is clamped independently against its own bounds. When both
/// rails saturate and the post-clamp sum would exceed the original combined
/// total, the move is rejected in full; independent clamping alone would let
/// the stored total creep upward. Otherwise the smaller admissible movement
/// of the two sides becomes the applied delta, so the committed pair always
/// sums to exactly `origin_first + origin_second`.
#[must_use]
pub fn clamp_paired(
    origin_first: f64,
    origin_second: f64,
    delta: f64,
    bounds_first: SizeBounds,
    bounds_second: SizeBounds,
) -> PairedResize {
    let proposed_first = origin_first + delta;
    let proposed_second = origin_second - delta;

    let clamped_first = bounds_first.clamp(proposed_first);
    let clamped_second = bounds_second.clamp(proposed_second);

    let total = origin_first + origin_second;
    let first_saturated = clamped_first != proposed_first;
    let second_saturated = clamped_second != proposed_second;
    if first_saturated && second_saturated && clamped_first + clamped_second > total + PAIR_SUM_EPSILON
    {
        return PairedResize::Rejected {
            first: origin_first,
            second: origin_second,
        };
    }

    // Admissible movement seen from each side; both carry the sign of the
    // requested delta, the tighter one wins.
    let first_admissible = clamped_first - origin_first;
    let second_admissible = origin_second - clamped_second;
    let applied_delta = if first_admissible.abs() <= second_admissible.abs() {
        first_admissible
    } else {
        second_admissible
    };

    PairedResize::Applied {
        first: origin_first + applied_delta,
        second: origin_second - applied_delta,
        applied_delta,
    }
}

/// Quantization step for grid-snapped resizing, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSnap {
    step: f64,
}

impl GridSnap {
    /// Create a snap step; must be finite and strictly positive.
    pub fn new(step: f64) -> Result<Self, GridSnapError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GridSnapError::InvalidStep { step });
        }
        Ok(Self { step })
    }

    /// Configured step.
    #[inline]
    #[must_use]
    pub const fn step(self) -> f64 {
        self.step
    }

    /// Round a size to the nearest multiple of the step.
    #[inline]
    #[must_use]
    pub fn snap(self, size: f64) -> f64 {
        (size / self.step).round() * self.step
    }

    /// Snap, then re-clamp against bounds.
    ///
    /// Snapping runs last in the pipeline and can push a size past a bound
    /// when the bound is not itself a multiple of the step, so the result is
    /// clamped again.
    #[inline]
    #[must_use]
    pub fn snap_clamped(self, size: f64, bounds: SizeBounds) -> f64 {
        bounds.clamp(self.snap(size))
    }
}

/// Invalid snap configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridSnapError {
    InvalidStep { step: f64 },
}

impl fmt::Display for GridSnapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStep { step } => {
                write!(f, "grid snap step {step} must be finite and positive")
            }
        }
    }
}

impl std::error::Error for GridSnapError {}
