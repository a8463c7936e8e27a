#![forbid(unsafe_code)]

//! Resizable widget controllers.
//!
//! Each controller binds one layout model and one drag lifecycle to a host:
//! the host reports pointer-downs on a separator plus the document-level
//! move/up/cancel stream, and reads back the accepted size set from the
//! returned [`ResizeResponse`]. Rendering stays entirely on the host side.

pub mod grid;
pub mod panel;
pub mod sidebar;

use serde::{Deserialize, Serialize};

use sash_layout::drag::DragNoopReason;

pub use grid::{GridConfig, ResizableGrid, Viewport};
pub use panel::{SplitPanel, SplitPanelConfig};
pub use sidebar::{Sidebar, SidebarConfig};

/// Outcome of feeding one pointer event to a widget controller.
///
/// `S` is the widget's size set: a single width for the sidebar and split
/// panel, the full percentage vector for the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "response", rename_all = "snake_case")]
pub enum ResizeResponse<S> {
    /// A drag session began on a separator.
    Started,
    /// A move was accepted; `sizes` is the current size set to render.
    Resized { sizes: S },
    /// A move was refused by the conservation guard; sizes are unchanged.
    Rejected,
    /// The drag session ended and global overrides were released.
    Released,
    /// The event did not apply; the reason says why.
    Ignored { reason: DragNoopReason },
}

impl<S> ResizeResponse<S> {
    /// True when the event produced a size change.
    #[inline]
    #[must_use]
    pub const fn is_resized(&self) -> bool {
        matches!(self, Self::Resized { .. })
    }
}

/// Map a drag effect no controller call should produce.
///
/// Each lifecycle call has a closed effect set; anything outside it is a
/// logic error worth surfacing in debug builds.
pub(crate) fn unreachable_effect<S>(effect: sash_layout::drag::DragEffect) -> ResizeResponse<S> {
    debug_assert!(false, "unexpected drag effect: {effect:?}");
    ResizeResponse::Ignored {
        reason: DragNoopReason::NoActiveSession,
    }
}
