#![forbid(unsafe_code)]

//! Drag-to-resize engine.
//!
//! One drag/clamp algorithm shared by the sidebar, panel, and grid widget
//! variants. The split of responsibilities:
//!
//! - [`solver`] — pure size math: bound clamping, mass-conserving paired
//!   resize, grid snapping.
//! - [`drag`] — the drag lifecycle machine and the scoped acquisition of
//!   the process-wide cursor/text-selection overrides.
//! - [`model`] — the per-variant size stores (two-pane, sidebar, grid).
//!
//! Widgets in `sash-widgets` compose these; this crate never renders and
//! never talks to a host framework directly.

pub mod drag;
pub mod model;
pub mod solver;

pub use drag::{
    CancelReason, CursorStyle, DragController, DragEffect, DragNoopReason, DragSession, DragState,
    OverrideHost, OverrideSet,
};
pub use model::{GridModel, ModelConfigError, PanelModel, SidebarModel, SidebarState};
pub use solver::{
    GridSnap, GridSnapError, PAIR_SUM_EPSILON, PairedResize, SizeBounds, SizeBoundsError,
    clamp_paired,
};
