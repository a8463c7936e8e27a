#![forbid(unsafe_code)]

//! Sashkit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use sash_core::event::{Modifiers, PointerEvent, PointerPhase, PointerSource};
pub use sash_core::geometry::{Axis, AxisSelector, PointerDelta, PointerPoint};

// --- Engine re-exports -----------------------------------------------------

pub use sash_layout::drag::{
    CancelReason, CursorStyle, DragController, DragEffect, DragNoopReason, DragSession, DragState,
    OverrideHost, OverrideSet,
};
pub use sash_layout::model::{GridModel, ModelConfigError, PanelModel, SidebarModel, SidebarState};
pub use sash_layout::solver::{
    GridSnap, GridSnapError, PairedResize, SizeBounds, SizeBoundsError, clamp_paired,
};

// --- Widget re-exports -----------------------------------------------------

pub use sash_widgets::{
    GridConfig, ResizableGrid, ResizeResponse, Sidebar, SidebarConfig, SplitPanel,
    SplitPanelConfig, Viewport,
};

/// Commonly used types for host integration.
pub mod prelude {
    pub use sash_core::event::{PointerEvent, PointerPhase, PointerSource};
    pub use sash_core::geometry::{Axis, AxisSelector, PointerPoint};
    pub use sash_layout::drag::{CursorStyle, OverrideHost};
    pub use sash_layout::solver::SizeBounds;
    pub use sash_widgets::{
        GridConfig, ResizableGrid, ResizeResponse, Sidebar, SidebarConfig, SplitPanel,
        SplitPanelConfig, Viewport,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_builds_a_working_panel() {
        let mut panel =
            SplitPanel::new(SplitPanelConfig::default(), ()).expect("default config is valid");
        panel.begin_resize(PointerEvent::mouse(
            PointerPhase::Down,
            PointerPoint::new(300.0, 0.0),
        ));
        let response = panel.on_pointer(PointerEvent::mouse(
            PointerPhase::Move,
            PointerPoint::new(350.0, 0.0),
        ));
        assert_eq!(response, ResizeResponse::Resized { sizes: 350.0 });
    }
}
