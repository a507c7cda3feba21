#![forbid(unsafe_code)]

//! Geometry and canonical input events for popdock.
//!
//! This crate holds the host-independent primitives the dialog manager is
//! built on: [`geometry::Rect`] / [`geometry::Point`] for frames and hit
//! testing, and the [`event`] module's canonical input types with an
//! optional crossterm conversion layer for native terminals.

pub mod event;
pub mod geometry;

pub use event::{Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::{Point, Rect};
