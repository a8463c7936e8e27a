#![forbid(unsafe_code)]

//! N-pane resizable grid controller.

use serde::{Deserialize, Serialize};

use sash_core::event::{PointerEvent, PointerPhase};
use sash_core::geometry::{Axis, AxisSelector};
use sash_layout::drag::{
    CancelReason, CursorStyle, DragController, DragEffect, DragNoopReason, OverrideHost,
};
use sash_layout::model::{GridModel, ModelConfigError};
use sash_layout::solver::{PairedResize, SizeBounds};

use crate::{ResizeResponse, unreachable_effect};

#[cfg(feature = "tracing")]
use tracing::trace;

/// Container extent used to convert pixel deltas into percent.
///
/// Degenerate extents are clamped to one pixel so a zero-sized container
/// cannot poison the percentage math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Create a viewport from the container's client size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: if width.is_finite() { width.max(1.0) } else { 1.0 },
            height: if height.is_finite() { height.max(1.0) } else { 1.0 },
        }
    }

    /// Extent along one axis.
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Grid construction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of panes.
    pub panes: usize,
    /// Resize axis; `Both` locks the dominant axis per drag.
    pub selector: AxisSelector,
    /// Initial sizes in percent; evenly distributed when `None`.
    pub default_sizes: Option<Vec<f64>>,
}

impl GridConfig {
    /// Horizontal grid with evenly distributed panes.
    #[must_use]
    pub fn horizontal(panes: usize) -> Self {
        Self {
            panes,
            selector: AxisSelector::Horizontal,
            default_sizes: None,
        }
    }
}

/// An N-pane grid resized pairwise across separators.
///
/// Pixel deltas convert to percent of the container extent along the drag
/// axis; the host keeps the viewport current through
/// [`set_viewport`](Self::set_viewport).
#[derive(Debug)]
pub struct ResizableGrid<H: OverrideHost> {
    model: GridModel,
    drag: DragController<H>,
    selector: AxisSelector,
    viewport: Viewport,
}

impl<H: OverrideHost> ResizableGrid<H> {
    /// Build a grid from config, validating pane count and sizes.
    pub fn new(config: GridConfig, viewport: Viewport, host: H) -> Result<Self, ModelConfigError> {
        let mut model = GridModel::new(config.panes)?;
        if let Some(sizes) = config.default_sizes {
            model = model.with_sizes(sizes)?;
        }
        Ok(Self {
            model,
            drag: DragController::new(host),
            selector: config.selector,
            viewport,
        })
    }

    /// Override the bounds of one pane.
    pub fn with_pane_bounds(
        mut self,
        index: usize,
        bounds: SizeBounds,
    ) -> Result<Self, ModelConfigError> {
        self.model = self.model.with_pane_bounds(index, bounds)?;
        Ok(self)
    }

    /// Current sizes in percent.
    #[inline]
    #[must_use]
    pub fn sizes(&self) -> &[f64] {
        self.model.sizes()
    }

    /// Number of draggable separators.
    #[inline]
    #[must_use]
    pub fn separator_count(&self) -> usize {
        self.model.separator_count()
    }

    /// True while a drag session is live.
    #[inline]
    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Update the container extent after a host resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        #[cfg(feature = "tracing")]
        trace!(?viewport, "grid viewport updated");
        self.viewport = viewport;
    }

    /// Start a drag; the host calls this when a pointer-down hits the
    /// separator at `separator`.
    pub fn begin_resize(
        &mut self,
        separator: usize,
        event: PointerEvent,
    ) -> ResizeResponse<Vec<f64>> {
        if separator >= self.model.separator_count() {
            return ResizeResponse::Ignored {
                reason: DragNoopReason::SeparatorDisabled,
            };
        }

        let origin_sizes = self.model.sizes().to_vec();
        let cursor = match self.selector {
            AxisSelector::Vertical => CursorStyle::RowResize,
            AxisSelector::Horizontal | AxisSelector::Both => CursorStyle::ColResize,
        };
        match self.drag.begin_drag(
            separator,
            event.position,
            &origin_sizes,
            self.selector,
            event.source,
            cursor,
        ) {
            DragEffect::Started { .. } => ResizeResponse::Started,
            DragEffect::Noop { reason } => ResizeResponse::Ignored { reason },
            other => unreachable_effect(other),
        }
    }

    /// Process a document-level pointer event during (or after) a drag.
    pub fn on_pointer(&mut self, event: PointerEvent) -> ResizeResponse<Vec<f64>> {
        match event.phase {
            PointerPhase::Move => match self.drag.pointer_move(event.position) {
                DragEffect::Moved {
                    separator,
                    axis,
                    delta,
                    ..
                } => {
                    let origin_sizes = self
                        .drag
                        .session()
                        .map(|session| session.origin_sizes().to_vec())
                        .unwrap_or_default();
                    let delta_percent = delta / self.viewport.along(axis) * 100.0;
                    match self.model.resize_pair(separator, &origin_sizes, delta_percent) {
                        Some(PairedResize::Applied { .. }) => ResizeResponse::Resized {
                            sizes: self.model.sizes().to_vec(),
                        },
                        Some(PairedResize::Rejected { .. }) => ResizeResponse::Rejected,
                        None => ResizeResponse::Ignored {
                            reason: DragNoopReason::SeparatorDisabled,
                        },
                    }
                }
                DragEffect::Noop { reason } => ResizeResponse::Ignored { reason },
                other => unreachable_effect(other),
            },
            PointerPhase::Up => match self.drag.end_drag() {
                DragEffect::Released { .. } => ResizeResponse::Released,
                DragEffect::Noop { reason } => ResizeResponse::Ignored { reason },
                other => unreachable_effect(other),
            },
            PointerPhase::Cancel => match self.drag.cancel(CancelReason::PointerCancel) {
                DragEffect::Canceled { .. } => ResizeResponse::Released,
                DragEffect::Noop { reason } => ResizeResponse::Ignored { reason },
                other => unreachable_effect(other),
            },
            PointerPhase::Down => ResizeResponse::Ignored {
                reason: if self.drag.is_dragging() {
                    DragNoopReason::SessionAlreadyActive
                } else {
                    DragNoopReason::NoActiveSession
                },
            },
        }
    }
}
