#![forbid(unsafe_code)]

//! Collapsible sidebar controller.

use serde::{Deserialize, Serialize};

use sash_core::event::{PointerEvent, PointerPhase, PointerSource};
use sash_core::geometry::AxisSelector;
use sash_layout::drag::{
    CancelReason, CursorStyle, DragController, DragEffect, DragNoopReason, OverrideHost,
};
use sash_layout::model::{ModelConfigError, SidebarModel, SidebarState};
use sash_layout::solver::{GridSnap, SizeBounds};

use crate::{ResizeResponse, unreachable_effect};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Sidebar construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Narrowest resizable width in pixels.
    pub min_width: f64,
    /// Widest resizable width in pixels.
    pub max_width: f64,
    /// Initial width in pixels.
    pub default_width: f64,
    /// Fixed display width while collapsed.
    pub collapsed_width: f64,
    /// Whether touch drags are accepted.
    pub enable_touch: bool,
    /// Whether resize results snap to a grid.
    pub snap_to_grid: bool,
    /// Snap step in pixels, used when `snap_to_grid` is set.
    pub grid_size: f64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            min_width: 200.0,
            max_width: 400.0,
            default_width: 250.0,
            collapsed_width: 60.0,
            enable_touch: true,
            snap_to_grid: false,
            grid_size: 10.0,
        }
    }
}

/// A resizable, collapsible sidebar.
///
/// The host calls [`begin_resize`](Self::begin_resize) when a pointer-down
/// lands on the separator, then routes the document-level move/up/cancel
/// stream through [`on_pointer`](Self::on_pointer). The rendered width is
/// always [`width`](Self::width).
#[derive(Debug)]
pub struct Sidebar<H: OverrideHost> {
    model: SidebarModel,
    drag: DragController<H>,
    enable_touch: bool,
}

impl<H: OverrideHost> Sidebar<H> {
    /// Build a sidebar from config, validating bounds and snap step.
    pub fn new(config: SidebarConfig, host: H) -> Result<Self, ModelConfigError> {
        let bounds = SizeBounds::new(config.min_width, config.max_width)?;
        let snap = if config.snap_to_grid {
            Some(GridSnap::new(config.grid_size)?)
        } else {
            None
        };
        let model = SidebarModel::new(bounds, config.default_width, config.collapsed_width, snap)?;
        Ok(Self {
            model,
            drag: DragController::new(host),
            enable_touch: config.enable_touch,
        })
    }

    /// Width the host should render right now.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.model.display_width()
    }

    /// Current collapse state.
    #[inline]
    #[must_use]
    pub const fn collapse_state(&self) -> SidebarState {
        self.model.state()
    }

    /// True while collapsed.
    #[inline]
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.model.is_collapsed()
    }

    /// Whether the separator accepts drags right now.
    #[inline]
    #[must_use]
    pub const fn separator_enabled(&self) -> bool {
        self.model.separator_enabled()
    }

    /// True while a drag session is live.
    #[inline]
    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Flip the collapse state and return the new display width.
    ///
    /// Toggling mid-drag tears the session down first so the overrides
    /// cannot outlive the separator they belong to.
    pub fn toggle_collapse(&mut self) -> f64 {
        let _ = self.drag.force_cancel();
        let _ = self.model.toggle();

        #[cfg(feature = "tracing")]
        debug!(
            state = ?self.model.state(),
            width = self.model.display_width(),
            "sidebar toggled"
        );

        self.model.display_width()
    }

    /// Start a drag; the host calls this when a pointer-down hits the
    /// separator.
    pub fn begin_resize(&mut self, event: PointerEvent) -> ResizeResponse<f64> {
        if !self.model.separator_enabled() {
            return ResizeResponse::Ignored {
                reason: DragNoopReason::SeparatorDisabled,
            };
        }
        if let Some(reason) = self.touch_gate(event.source) {
            return ResizeResponse::Ignored { reason };
        }

        let origin_sizes = [self.model.stored_width()];
        match self.drag.begin_drag(
            0,
            event.position,
            &origin_sizes,
            AxisSelector::Horizontal,
            event.source,
            CursorStyle::ColResize,
        ) {
            DragEffect::Started { .. } => ResizeResponse::Started,
            DragEffect::Noop { reason } => ResizeResponse::Ignored { reason },
            other => unreachable_effect(other),
        }
    }

    /// Process a document-level pointer event during (or after) a drag.
    pub fn on_pointer(&mut self, event: PointerEvent) -> ResizeResponse<f64> {
        if let Some(reason) = self.touch_gate(event.source) {
            return ResizeResponse::Ignored { reason };
        }

        match event.phase {
            PointerPhase::Move => match self.drag.pointer_move(event.position) {
                DragEffect::Moved { delta, .. } => {
                    let origin_width = self
                        .drag
                        .session()
                        .and_then(|session| session.origin_sizes().first().copied());
                    match origin_width.and_then(|origin| self.model.resize_from(origin, delta)) {
                        Some(width) => ResizeResponse::Resized { sizes: width },
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

    fn touch_gate(&self, source: PointerSource) -> Option<DragNoopReason> {
        (source == PointerSource::Touch && !self.enable_touch)
            .then_some(DragNoopReason::TouchDisabled)
    }
}
