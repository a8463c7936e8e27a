#![forbid(unsafe_code)]

//! Core primitives shared by the sashkit layout engine and widgets.
//!
//! This crate defines the geometric vocabulary (points, deltas, axes) and the
//! normalized pointer event model. Mouse and touch input are folded into one
//! pointer abstraction at this boundary; everything downstream speaks
//! [`event::PointerEvent`] only.

pub mod event;
pub mod geometry;

pub use event::{Modifiers, PointerEvent, PointerPhase, PointerSource};
pub use geometry::{Axis, AxisSelector, PointerDelta, PointerPoint};
