#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Positions are client coordinates in CSS pixels, origin at top-left.

use serde::{Deserialize, Serialize};

/// A 2D pointer position in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPoint {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
}

impl PointerPoint {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to this point.
    #[inline]
    #[must_use]
    pub fn delta_from(self, origin: PointerPoint) -> PointerDelta {
        PointerDelta {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }
}

/// A 2D displacement between two pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerDelta {
    /// Horizontal displacement.
    pub dx: f64,
    /// Vertical displacement.
    pub dy: f64,
}

impl PointerDelta {
    /// Create a new delta.
    #[inline]
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Component of the displacement along one axis.
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.dx,
            Axis::Vertical => self.dy,
        }
    }

    /// Axis with the larger absolute displacement.
    ///
    /// Ties resolve to [`Axis::Horizontal`], matching the horizontal-first
    /// reading order of the layouts this feeds.
    #[must_use]
    pub fn dominant_axis(self) -> Axis {
        if self.dx.abs() >= self.dy.abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// True when both components are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// A concrete resize axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right; separators run vertically.
    Horizontal,
    /// Top to bottom; separators run horizontally.
    Vertical,
}

/// Axis configuration for a layout.
///
/// `Both` defers the choice to the first movement of each drag: the dominant
/// axis of that movement is locked in for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSelector {
    #[default]
    Horizontal,
    Vertical,
    Both,
}

impl AxisSelector {
    /// The fixed axis, if this selector does not depend on movement.
    #[inline]
    #[must_use]
    pub const fn fixed_axis(self) -> Option<Axis> {
        match self {
            Self::Horizontal => Some(Axis::Horizontal),
            Self::Vertical => Some(Axis::Vertical),
            Self::Both => None,
        }
    }
}
