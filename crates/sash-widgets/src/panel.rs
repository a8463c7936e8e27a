#![forbid(unsafe_code)]

//! Two-pane split panel controller.

use serde::{Deserialize, Serialize};

use sash_core::event::{PointerEvent, PointerPhase};
use sash_core::geometry::AxisSelector;
use sash_layout::drag::{
    CancelReason, CursorStyle, DragController, DragEffect, DragNoopReason, OverrideHost,
};
use sash_layout::model::{ModelConfigError, PanelModel};
use sash_layout::solver::SizeBounds;

use crate::{ResizeResponse, unreachable_effect};

/// Split panel construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitPanelConfig {
    /// Narrowest left pane width in pixels.
    pub min_left_width: f64,
    /// Widest left pane width in pixels.
    pub max_left_width: f64,
    /// Initial left pane width in pixels.
    pub default_left_width: f64,
}

impl Default for SplitPanelConfig {
    fn default() -> Self {
        Self {
            min_left_width: 200.0,
            max_left_width: 600.0,
            default_left_width: 300.0,
        }
    }
}

/// A horizontal two-pane split.
///
/// Only the left pane width is modeled; the right pane fills whatever
/// remains and never constrains the drag.
#[derive(Debug)]
pub struct SplitPanel<H: OverrideHost> {
    model: PanelModel,
    drag: DragController<H>,
}

impl<H: OverrideHost> SplitPanel<H> {
    /// Build a panel from config, validating the bounds.
    pub fn new(config: SplitPanelConfig, host: H) -> Result<Self, ModelConfigError> {
        let bounds = SizeBounds::new(config.min_left_width, config.max_left_width)?;
        Ok(Self {
            model: PanelModel::new(bounds, config.default_left_width),
            drag: DragController::new(host),
        })
    }

    /// Current left pane width.
    #[inline]
    #[must_use]
    pub const fn left_width(&self) -> f64 {
        self.model.width()
    }

    /// True while a drag session is live.
    #[inline]
    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Start a drag; the host calls this when a pointer-down hits the
    /// separator.
    pub fn begin_resize(&mut self, event: PointerEvent) -> ResizeResponse<f64> {
        let origin_sizes = [self.model.width()];
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
        match event.phase {
            PointerPhase::Move => match self.drag.pointer_move(event.position) {
                DragEffect::Moved { delta, .. } => {
                    let origin_width = self
                        .drag
                        .session()
                        .and_then(|session| session.origin_sizes().first().copied())
                        .unwrap_or_else(|| self.model.width());
                    let width = self.model.resize_from(origin_width, delta);
                    ResizeResponse::Resized { sizes: width }
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
