#![forbid(unsafe_code)]

//! Canonical pointer input types.
//!
//! Hosts translate raw mouse and touch events into [`PointerEvent`] before
//! anything else sees them. The rest of the engine never distinguishes the
//! device class except through [`PointerSource`], which teardown logic uses
//! to know which global overrides were acquired.
//!
//! # Design Notes
//!
//! - Coordinates are client-space CSS pixels.
//! - Touch-end events on some platforms carry no position; hosts pass the
//!   last known position instead.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::geometry::PointerPoint;

/// Lifecycle phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// Button pressed or touch began.
    Down,
    /// Pointer moved while down.
    Move,
    /// Button released or touch ended.
    Up,
    /// Interaction aborted by the platform (touch-cancel, capture loss).
    Cancel,
}

/// Device class that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerSource {
    Mouse,
    Touch,
}

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const META  = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Lifecycle phase.
    pub phase: PointerPhase,
    /// Client-space position.
    pub position: PointerPoint,
    /// Originating device class.
    pub source: PointerSource,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a pointer event from a mouse interaction.
    #[must_use]
    pub const fn mouse(phase: PointerPhase, position: PointerPoint) -> Self {
        Self {
            phase,
            position,
            source: PointerSource::Mouse,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a pointer event from the primary touch of a touch interaction.
    #[must_use]
    pub const fn touch(phase: PointerPhase, position: PointerPoint) -> Self {
        Self {
            phase,
            position,
            source: PointerSource::Touch,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers to the event.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// True for phases that terminate an interaction.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.phase, PointerPhase::Up | PointerPhase::Cancel)
    }
}
