#![forbid(unsafe_code)]

//! Drag lifecycle.
//!
//! [`DragController`] turns normalized pointer input into size-delta effects
//! and owns the process-wide side effects of an active drag: the cursor
//! override and text-selection suppression applied through a host-supplied
//! [`OverrideHost`]. Acquisition and release are scoped to one session;
//! every exit path, including dropping the controller mid-drag, funnels
//! through the same teardown.
//!
//! ```text
//! Idle -> Dragging -> Idle
//! ```
//!
//! Moves always recompute the cumulative delta from the drag-start origin,
//! never from the previous frame, so coalesced or replayed move events yield
//! identical results.

use serde::{Deserialize, Serialize};

use sash_core::geometry::{Axis, AxisSelector, PointerPoint};
use sash_core::event::PointerSource;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Cursor shown while a separator is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    /// Vertical separator, horizontal movement.
    ColResize,
    /// Horizontal separator, vertical movement.
    RowResize,
}

impl CursorStyle {
    /// Conventional cursor for a resize along the given axis.
    #[inline]
    #[must_use]
    pub const fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::ColResize,
            Axis::Vertical => Self::RowResize,
        }
    }
}

/// Host hook for the body-level overrides active during a drag.
///
/// The host applies these to whatever owns the global pointer surface (the
/// document body in a browser host, the root view elsewhere). Only one drag
/// session holds the overrides at a time; the controller guarantees a
/// matching release for every acquisition.
pub trait OverrideHost {
    /// Override the global cursor.
    fn apply_cursor(&mut self, cursor: CursorStyle);
    /// Restore the default cursor.
    fn clear_cursor(&mut self);
    /// Disable text selection for the duration of a drag.
    fn suppress_text_selection(&mut self);
    /// Re-enable text selection.
    fn restore_text_selection(&mut self);
}

/// No-op host for headless use and tests.
impl OverrideHost for () {
    fn apply_cursor(&mut self, _cursor: CursorStyle) {}
    fn clear_cursor(&mut self) {}
    fn suppress_text_selection(&mut self) {}
    fn restore_text_selection(&mut self) {}
}

/// Record of which overrides a session actually acquired.
///
/// Touch drags never set a cursor, so teardown must restore exactly what was
/// taken and nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverrideSet {
    cursor: Option<CursorStyle>,
    selection_suppressed: bool,
}

impl OverrideSet {
    /// Cursor override in effect, if any.
    #[inline]
    #[must_use]
    pub const fn cursor(self) -> Option<CursorStyle> {
        self.cursor
    }

    /// Whether text selection is suppressed.
    #[inline]
    #[must_use]
    pub const fn selection_suppressed(self) -> bool {
        self.selection_suppressed
    }
}

/// Why a drag was torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// Platform aborted the interaction (touch-cancel, capture loss).
    PointerCancel,
    /// Teardown forced by the owner (widget unmount, controller drop).
    Programmatic,
}

/// Ephemeral state of one drag, created on pointer-down and destroyed on
/// release.
///
/// `origin_sizes` is a copied snapshot owned exclusively by the session;
/// concurrent reads of the live layout are unaffected mid-drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    separator: usize,
    origin: PointerPoint,
    origin_sizes: Vec<f64>,
    selector: AxisSelector,
    resolved_axis: Option<Axis>,
    source: PointerSource,
    overrides: OverrideSet,
}

impl DragSession {
    /// Separator being dragged.
    #[inline]
    #[must_use]
    pub const fn separator(&self) -> usize {
        self.separator
    }

    /// Pointer position at drag start.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> PointerPoint {
        self.origin
    }

    /// Snapshot of pane sizes at drag start.
    #[inline]
    #[must_use]
    pub fn origin_sizes(&self) -> &[f64] {
        &self.origin_sizes
    }

    /// Axis locked for this session, once movement has determined it.
    #[inline]
    #[must_use]
    pub const fn resolved_axis(&self) -> Option<Axis> {
        self.resolved_axis
    }

    /// Device class that started the drag.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> PointerSource {
        self.source
    }

    /// Overrides held by this session.
    #[inline]
    #[must_use]
    pub const fn overrides(&self) -> OverrideSet {
        self.overrides
    }
}

/// Lifecycle state of a controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    Idle,
    Dragging(DragSession),
}

/// Explicit no-op diagnostics for events that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    /// `begin_drag` while a session is live.
    SessionAlreadyActive,
    /// Move or release without a matching begin.
    NoActiveSession,
    /// First movement of a `Both`-axis drag had zero displacement, so the
    /// dominant axis cannot be chosen yet.
    AxisUndetermined,
    /// The addressed separator is not interactive (collapsed sidebar,
    /// out-of-range index).
    SeparatorDisabled,
    /// Touch input is disabled for the widget that received the event.
    TouchDisabled,
}

/// Effect emitted by one lifecycle step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    /// A session began and the listed overrides were acquired.
    Started {
        separator: usize,
        origin: PointerPoint,
        overrides: OverrideSet,
    },
    /// The pointer moved; `delta` is cumulative from the origin along the
    /// session axis, in pixels.
    Moved {
        separator: usize,
        axis: Axis,
        delta: f64,
        position: PointerPoint,
    },
    /// The session ended normally and overrides were released.
    Released { separator: usize },
    /// The session was torn down without a normal release.
    Canceled {
        separator: usize,
        reason: CancelReason,
    },
    /// Nothing happened; the reason says why.
    Noop { reason: DragNoopReason },
}

/// Translates pointer input into size-delta effects for one widget.
///
/// The controller owns the override host and tears the overrides down on
/// every exit path. Dropping an active controller releases them; this is
/// the safety valve for owners destroyed mid-drag.
#[derive(Debug)]
pub struct DragController<H: OverrideHost> {
    host: H,
    state: DragState,
    transition_counter: u64,
}

impl<H: OverrideHost> DragController<H> {
    /// Create an idle controller around a host.
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: DragState::Idle,
            transition_counter: 0,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Active session, if one is live.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Whether a session is live.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Number of non-noop transitions performed.
    #[must_use]
    pub const fn transition_count(&self) -> u64 {
        self.transition_counter
    }

    /// Start a session on `separator`.
    ///
    /// `origin_sizes` is copied into the session. The cursor override is
    /// acquired for mouse drags only; touch drags suppress text selection
    /// but have no cursor to show. A second begin while a session is live
    /// is a no-op.
    pub fn begin_drag(
        &mut self,
        separator: usize,
        origin: PointerPoint,
        origin_sizes: &[f64],
        selector: AxisSelector,
        source: PointerSource,
        cursor: CursorStyle,
    ) -> DragEffect {
        if self.is_dragging() {
            return DragEffect::Noop {
                reason: DragNoopReason::SessionAlreadyActive,
            };
        }

        let mut overrides = OverrideSet {
            cursor: None,
            selection_suppressed: true,
        };
        if source == PointerSource::Mouse {
            self.host.apply_cursor(cursor);
            overrides.cursor = Some(cursor);
        }
        self.host.suppress_text_selection();

        let session = DragSession {
            separator,
            origin,
            origin_sizes: origin_sizes.to_vec(),
            selector,
            resolved_axis: selector.fixed_axis(),
            source,
            overrides,
        };

        #[cfg(feature = "tracing")]
        debug!(separator, ?source, "drag session started");

        self.state = DragState::Dragging(session);
        self.transition_counter += 1;
        DragEffect::Started {
            separator,
            origin,
            overrides,
        }
    }

    /// Process a pointer movement.
    ///
    /// No-op when idle; listeners are only attached during a session, but
    /// touch/mouse races can still deliver stray moves. The emitted delta
    /// is always recomputed from the origin snapshot.
    pub fn pointer_move(&mut self, position: PointerPoint) -> DragEffect {
        let DragState::Dragging(session) = &mut self.state else {
            return DragEffect::Noop {
                reason: DragNoopReason::NoActiveSession,
            };
        };

        let delta = position.delta_from(session.origin);
        let axis = match session.resolved_axis {
            Some(axis) => axis,
            None => {
                if delta.is_zero() {
                    return DragEffect::Noop {
                        reason: DragNoopReason::AxisUndetermined,
                    };
                }
                let axis = delta.dominant_axis();
                session.resolved_axis = Some(axis);

                #[cfg(feature = "tracing")]
                trace!(?axis, "dominant axis locked for session");

                axis
            }
        };

        self.transition_counter += 1;
        DragEffect::Moved {
            separator: session.separator,
            axis,
            delta: delta.along(axis),
            position,
        }
    }

    /// End the session normally and release the overrides.
    ///
    /// Idempotent: ending without a matching begin is a no-op.
    pub fn end_drag(&mut self) -> DragEffect {
        match self.teardown() {
            Some(separator) => {
                self.transition_counter += 1;
                DragEffect::Released { separator }
            }
            None => DragEffect::Noop {
                reason: DragNoopReason::NoActiveSession,
            },
        }
    }

    /// Tear the session down without a normal release.
    pub fn cancel(&mut self, reason: CancelReason) -> DragEffect {
        match self.teardown() {
            Some(separator) => {
                self.transition_counter += 1;

                #[cfg(feature = "tracing")]
                debug!(separator, ?reason, "drag session canceled");

                DragEffect::Canceled { separator, reason }
            }
            None => DragEffect::Noop {
                reason: DragNoopReason::NoActiveSession,
            },
        }
    }

    /// Unconditionally reset to idle, releasing any held overrides.
    ///
    /// Safety valve for cleanup paths where the owner is being destroyed
    /// and no pointer event will arrive. Returns the canceled effect if a
    /// session was live.
    pub fn force_cancel(&mut self) -> Option<DragEffect> {
        match self.cancel(CancelReason::Programmatic) {
            DragEffect::Noop { .. } => None,
            effect => Some(effect),
        }
    }

    /// Release overrides and return the separator of the live session.
    fn teardown(&mut self) -> Option<usize> {
        let DragState::Dragging(session) = &self.state else {
            return None;
        };
        let separator = session.separator;
        let overrides = session.overrides;

        if overrides.cursor.is_some() {
            self.host.clear_cursor();
        }
        if overrides.selection_suppressed {
            self.host.restore_text_selection();
        }
        self.state = DragState::Idle;
        Some(separator)
    }
}

impl<H: OverrideHost> Drop for DragController<H> {
    fn drop(&mut self) {
        let _ = self.teardown();
    }
}
