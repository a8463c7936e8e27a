#![forbid(unsafe_code)]

//! Layout models.
//!
//! Three shapes share the same solver: a two-pane split storing one pixel
//! width, a collapsible sidebar, and an N-pane percentage grid. Each model
//! applies deltas against a caller-provided origin snapshot so repeated
//! moves within one drag never accumulate rounding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::solver::{GridSnap, GridSnapError, PairedResize, SizeBounds, SizeBoundsError, clamp_paired};

/// Configuration failures surfaced at model construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelConfigError {
    /// Invalid per-pane bounds.
    Bounds(SizeBoundsError),
    /// Invalid grid-snap step.
    Snap(GridSnapError),
    /// Collapsed width must be finite and non-negative.
    InvalidCollapsedWidth { width: f64 },
    /// A grid needs at least one pane.
    EmptyGrid,
    /// Provided default sizes do not match the pane count.
    SizesLengthMismatch { panes: usize, provided: usize },
    /// A default size is not a finite number.
    NonFiniteSize { index: usize, value: f64 },
    /// Pane index outside the grid.
    PaneIndexOutOfRange { index: usize, panes: usize },
}

impl fmt::Display for ModelConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds(source) => write!(f, "invalid pane bounds: {source}"),
            Self::Snap(source) => write!(f, "invalid grid snap: {source}"),
            Self::InvalidCollapsedWidth { width } => {
                write!(f, "collapsed width {width} must be finite and non-negative")
            }
            Self::EmptyGrid => write!(f, "grid layout needs at least one pane"),
            Self::SizesLengthMismatch { panes, provided } => {
                write!(f, "{provided} default sizes provided for {panes} panes")
            }
            Self::NonFiniteSize { index, value } => {
                write!(f, "default size {value} at index {index} is not finite")
            }
            Self::PaneIndexOutOfRange { index, panes } => {
                write!(f, "pane index {index} out of range for {panes} panes")
            }
        }
    }
}

impl std::error::Error for ModelConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bounds(source) => Some(source),
            Self::Snap(source) => Some(source),
            _ => None,
        }
    }
}

impl From<SizeBoundsError> for ModelConfigError {
    fn from(source: SizeBoundsError) -> Self {
        Self::Bounds(source)
    }
}

impl From<GridSnapError> for ModelConfigError {
    fn from(source: GridSnapError) -> Self {
        Self::Snap(source)
    }
}

/// Two-pane split storing only the leading pane width, in pixels.
///
/// The trailing pane fills the remaining space and is not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelModel {
    width: f64,
    bounds: SizeBounds,
}

impl PanelModel {
    /// Create a model; the default width is clamped into bounds.
    #[must_use]
    pub fn new(bounds: SizeBounds, default_width: f64) -> Self {
        Self {
            width: bounds.clamp(default_width),
            bounds,
        }
    }

    /// Current leading pane width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Configured bounds.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    /// Apply a cumulative drag delta against the drag-start width.
    pub fn resize_from(&mut self, origin_width: f64, delta_px: f64) -> f64 {
        self.width = self.bounds.clamp(origin_width + delta_px);
        self.width
    }
}

/// Collapse toggle state of a sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

/// Sidebar: a pixel-width pane with a collapse toggle and optional
/// grid-snapped resizing.
///
/// Collapsing freezes the stored width; the displayed width becomes the
/// fixed collapsed width until expansion restores the frozen value
/// verbatim. The separator is not interactive while collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidebarModel {
    width: f64,
    bounds: SizeBounds,
    collapsed_width: f64,
    state: SidebarState,
    snap: Option<GridSnap>,
}

impl SidebarModel {
    /// Create a model; the default width is clamped into bounds.
    pub fn new(
        bounds: SizeBounds,
        default_width: f64,
        collapsed_width: f64,
        snap: Option<GridSnap>,
    ) -> Result<Self, ModelConfigError> {
        if !collapsed_width.is_finite() || collapsed_width < 0.0 {
            return Err(ModelConfigError::InvalidCollapsedWidth {
                width: collapsed_width,
            });
        }
        Ok(Self {
            width: bounds.clamp(default_width),
            bounds,
            collapsed_width,
            state: SidebarState::Expanded,
            snap,
        })
    }

    /// Width the host should render right now.
    #[inline]
    #[must_use]
    pub const fn display_width(&self) -> f64 {
        match self.state {
            SidebarState::Expanded => self.width,
            SidebarState::Collapsed => self.collapsed_width,
        }
    }

    /// Stored width, unchanged by collapse.
    #[inline]
    #[must_use]
    pub const fn stored_width(&self) -> f64 {
        self.width
    }

    /// Current toggle state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SidebarState {
        self.state
    }

    /// True while collapsed.
    #[inline]
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        matches!(self.state, SidebarState::Collapsed)
    }

    /// Whether the separator accepts drags.
    #[inline]
    #[must_use]
    pub const fn separator_enabled(&self) -> bool {
        matches!(self.state, SidebarState::Expanded)
    }

    /// Flip the collapse state and return the new state.
    pub fn toggle(&mut self) -> SidebarState {
        self.state = match self.state {
            SidebarState::Expanded => SidebarState::Collapsed,
            SidebarState::Collapsed => SidebarState::Expanded,
        };
        self.state
    }

    /// Apply a cumulative drag delta against the drag-start width.
    ///
    /// Returns `None` while collapsed; the separator is disabled and a
    /// stray move must not disturb the frozen width. Snap, when
    /// configured, runs after clamping and is re-clamped.
    pub fn resize_from(&mut self, origin_width: f64, delta_px: f64) -> Option<f64> {
        if self.is_collapsed() {
            return None;
        }
        let clamped = self.bounds.clamp(origin_width + delta_px);
        self.width = match self.snap {
            Some(snap) => snap.snap_clamped(clamped, self.bounds),
            None => clamped,
        };
        Some(self.width)
    }
}

/// N-pane grid in percent of container, resized pairwise across separators.
///
/// Separator `i` sits between panes `i` and `i + 1`; a resize moves exactly
/// that pair and conserves its sum. All other panes are never touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridModel {
    sizes: Vec<f64>,
    bounds: Vec<SizeBounds>,
}

impl GridModel {
    /// Create a grid with sizes distributed evenly and fallback bounds.
    pub fn new(panes: usize) -> Result<Self, ModelConfigError> {
        if panes == 0 {
            return Err(ModelConfigError::EmptyGrid);
        }
        Ok(Self {
            sizes: vec![100.0 / panes as f64; panes],
            bounds: vec![SizeBounds::GRID_FALLBACK; panes],
        })
    }

    /// Replace the default sizes; the length must match the pane count.
    pub fn with_sizes(mut self, sizes: Vec<f64>) -> Result<Self, ModelConfigError> {
        if sizes.len() != self.sizes.len() {
            return Err(ModelConfigError::SizesLengthMismatch {
                panes: self.sizes.len(),
                provided: sizes.len(),
            });
        }
        if let Some((index, value)) = sizes
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(ModelConfigError::NonFiniteSize {
                index,
                value: *value,
            });
        }
        self.sizes = sizes;
        Ok(self)
    }

    /// Override the bounds of one pane.
    pub fn with_pane_bounds(
        mut self,
        index: usize,
        bounds: SizeBounds,
    ) -> Result<Self, ModelConfigError> {
        let panes = self.bounds.len();
        let slot = self
            .bounds
            .get_mut(index)
            .ok_or(ModelConfigError::PaneIndexOutOfRange { index, panes })?;
        *slot = bounds;
        Ok(self)
    }

    /// Number of panes.
    #[inline]
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.sizes.len()
    }

    /// Number of draggable separators.
    #[inline]
    #[must_use]
    pub fn separator_count(&self) -> usize {
        self.sizes.len().saturating_sub(1)
    }

    /// Current sizes in percent.
    #[inline]
    #[must_use]
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Bounds of one pane.
    #[must_use]
    pub fn pane_bounds(&self, index: usize) -> Option<SizeBounds> {
        self.bounds.get(index).copied()
    }

    /// Resize the pane pair at `separator` by a cumulative percent delta,
    /// measured against the drag-start snapshot.
    ///
    /// Returns `None` for a malformed request (bad separator index or a
    /// snapshot of the wrong length); stored sizes are untouched. A
    /// rejected move reports the retained stored pair.
    pub fn resize_pair(
        &mut self,
        separator: usize,
        origin_sizes: &[f64],
        delta_percent: f64,
    ) -> Option<PairedResize> {
        if separator >= self.separator_count() || origin_sizes.len() != self.sizes.len() {
            return None;
        }

        let result = clamp_paired(
            origin_sizes[separator],
            origin_sizes[separator + 1],
            delta_percent,
            self.bounds[separator],
            self.bounds[separator + 1],
        );
        match result {
            PairedResize::Applied { first, second, .. } => {
                self.sizes[separator] = first;
                self.sizes[separator + 1] = second;
                Some(result)
            }
            PairedResize::Rejected { .. } => Some(PairedResize::Rejected {
                first: self.sizes[separator],
                second: self.sizes[separator + 1],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: f64, max: f64) -> SizeBounds {
        SizeBounds::new(min, max).expect("test bounds must be valid")
    }

    #[test]
    fn panel_drag_within_bounds() {
        // Two-pane layout, bounds [200, 600], default 300: +150px lands on
        // 450 and the trailing pane auto-fills.
        let mut panel = PanelModel::new(bounds(200.0, 600.0), 300.0);
        assert_eq!(panel.resize_from(300.0, 150.0), 450.0);
        assert_eq!(panel.width(), 450.0);
    }

    #[test]
    fn panel_clamps_default_width() {
        let panel = PanelModel::new(bounds(200.0, 600.0), 50.0);
        assert_eq!(panel.width(), 200.0);
    }

    #[test]
    fn panel_resize_saturates() {
        let mut panel = PanelModel::new(bounds(200.0, 600.0), 300.0);
        assert_eq!(panel.resize_from(300.0, 1_000.0), 600.0);
        assert_eq!(panel.resize_from(300.0, -1_000.0), 200.0);
    }

    #[test]
    fn sidebar_collapse_expand_round_trip() {
        let mut sidebar =
            SidebarModel::new(bounds(200.0, 400.0), 250.0, 60.0, None).expect("valid config");
        sidebar.resize_from(250.0, 73.0);
        let before = sidebar.stored_width();

        assert_eq!(sidebar.toggle(), SidebarState::Collapsed);
        assert_eq!(sidebar.display_width(), 60.0);
        assert_eq!(sidebar.stored_width(), before);

        assert_eq!(sidebar.toggle(), SidebarState::Expanded);
        assert_eq!(sidebar.display_width(), before);
    }

    #[test]
    fn sidebar_separator_disabled_while_collapsed() {
        let mut sidebar =
            SidebarModel::new(bounds(200.0, 400.0), 250.0, 60.0, None).expect("valid config");
        sidebar.toggle();
        assert!(!sidebar.separator_enabled());
        assert_eq!(sidebar.resize_from(250.0, 50.0), None);
        assert_eq!(sidebar.stored_width(), 250.0);
    }

    #[test]
    fn sidebar_snap_quantizes_after_clamp() {
        let snap = GridSnap::new(10.0).expect("valid step");
        let mut sidebar =
            SidebarModel::new(bounds(200.0, 400.0), 250.0, 60.0, Some(snap)).expect("valid config");
        assert_eq!(sidebar.resize_from(250.0, 23.0), Some(270.0));
        assert_eq!(sidebar.resize_from(250.0, 27.0), Some(280.0));
    }

    #[test]
    fn sidebar_snap_canonical_scenario() {
        // Grid-snap step 10: a raw 127px stores 130px.
        let snap = GridSnap::new(10.0).expect("valid step");
        let mut sidebar =
            SidebarModel::new(bounds(0.0, 400.0), 100.0, 60.0, Some(snap)).expect("valid config");
        assert_eq!(sidebar.resize_from(100.0, 27.0), Some(130.0));
    }

    #[test]
    fn sidebar_rejects_bad_collapsed_width() {
        assert!(matches!(
            SidebarModel::new(bounds(200.0, 400.0), 250.0, f64::NAN, None),
            Err(ModelConfigError::InvalidCollapsedWidth { .. })
        ));
        assert!(matches!(
            SidebarModel::new(bounds(200.0, 400.0), 250.0, -5.0, None),
            Err(ModelConfigError::InvalidCollapsedWidth { .. })
        ));
    }

    #[test]
    fn grid_distributes_evenly_by_default() {
        let grid = GridModel::new(4).expect("valid grid");
        assert_eq!(grid.sizes(), &[25.0; 4]);
        assert_eq!(grid.separator_count(), 3);
        assert_eq!(grid.pane_bounds(2), Some(SizeBounds::GRID_FALLBACK));
    }

    #[test]
    fn grid_rejects_zero_panes() {
        assert!(matches!(GridModel::new(0), Err(ModelConfigError::EmptyGrid)));
    }

    #[test]
    fn grid_rejects_mismatched_sizes() {
        let result = GridModel::new(3).expect("valid grid").with_sizes(vec![50.0, 50.0]);
        assert!(matches!(
            result,
            Err(ModelConfigError::SizesLengthMismatch {
                panes: 3,
                provided: 2
            })
        ));
    }

    #[test]
    fn grid_rejects_out_of_range_pane_bounds() {
        let result = GridModel::new(2)
            .expect("valid grid")
            .with_pane_bounds(5, bounds(10.0, 90.0));
        assert!(matches!(
            result,
            Err(ModelConfigError::PaneIndexOutOfRange { index: 5, panes: 2 })
        ));
    }

    #[test]
    fn grid_pair_resize_reduces_delta_at_min() {
        // [33.33, 33.33, 33.34], bounds [15, 60]: dragging separator 0 by
        // -20 points clamps pane 0 at 15 and pane 1 absorbs only the
        // admissible 18.33; pane 2 is untouched.
        let grid = GridModel::new(3)
            .and_then(|grid| grid.with_sizes(vec![33.33, 33.33, 33.34]))
            .expect("valid grid");
        let mut grid = grid
            .with_pane_bounds(0, bounds(15.0, 60.0))
            .and_then(|grid| grid.with_pane_bounds(1, bounds(15.0, 60.0)))
            .and_then(|grid| grid.with_pane_bounds(2, bounds(15.0, 60.0)))
            .expect("valid bounds");

        let origin = grid.sizes().to_vec();
        let result = grid.resize_pair(0, &origin, -20.0).expect("well-formed");
        assert!(result.is_applied());
        assert!((grid.sizes()[0] - 15.0).abs() < 1e-9);
        assert!((grid.sizes()[1] - 51.66).abs() < 1e-9);
        assert_eq!(grid.sizes()[2], 33.34);
    }

    #[test]
    fn grid_pair_resize_rejects_double_saturation() {
        let mut grid = GridModel::new(3)
            .and_then(|grid| grid.with_sizes(vec![33.33, 33.33, 33.34]))
            .expect("valid grid");
        for index in 0..3 {
            grid = grid
                .with_pane_bounds(index, bounds(15.0, 60.0))
                .expect("valid bounds");
        }

        let origin = grid.sizes().to_vec();
        let result = grid.resize_pair(0, &origin, -28.33).expect("well-formed");
        assert!(!result.is_applied());
        assert_eq!(grid.sizes(), &[33.33, 33.33, 33.34]);
    }

    #[test]
    fn grid_pair_resize_conserves_sum() {
        let mut grid = GridModel::new(2).expect("valid grid");
        let origin = grid.sizes().to_vec();
        let total: f64 = origin.iter().sum();
        grid.resize_pair(0, &origin, 17.3).expect("well-formed");
        let after: f64 = grid.sizes().iter().sum();
        assert!((after - total).abs() < 1e-9);
    }

    #[test]
    fn grid_pair_resize_is_path_independent() {
        // One jump to +12 equals three intermediate moves ending at +12,
        // because every move resolves against the same origin snapshot.
        let origin = vec![50.0, 50.0];

        let mut jump = GridModel::new(2).expect("valid grid");
        jump.resize_pair(0, &origin, 12.0);

        let mut stepped = GridModel::new(2).expect("valid grid");
        stepped.resize_pair(0, &origin, 3.0);
        stepped.resize_pair(0, &origin, 40.0);
        stepped.resize_pair(0, &origin, 12.0);

        assert_eq!(jump.sizes(), stepped.sizes());
    }

    #[test]
    fn grid_malformed_requests_are_noops() {
        let mut grid = GridModel::new(2).expect("valid grid");
        let origin = grid.sizes().to_vec();
        assert_eq!(grid.resize_pair(1, &origin, 5.0), None);
        assert_eq!(grid.resize_pair(0, &[50.0], 5.0), None);
        assert_eq!(grid.sizes(), &[50.0, 50.0]);
    }
}
