#![forbid(unsafe_code)]

//! Drag-to-reposition behavior for dialog handle bars.
//!
//! The controller is the "drag behavior provider" seam: the manager feeds
//! it press/move/release points and applies the deltas it reports. Hosts
//! with their own pointer plumbing can drive a dialog's frame directly and
//! skip this type entirely.
//!
//! A drag is armed by a press on a handle bar and engages once the pointer
//! has moved at least [`DragConfig::threshold`] units from the press point.
//! The default threshold is 0: a dedicated handle bar has no click/drag
//! ambiguity to resolve, so the frame tracks the pointer immediately.

use crate::dialog::DialogId;
use popdock_core::Point;

/// Configuration for drag gesture detection.
#[derive(Debug, Clone, Copy)]
pub struct DragConfig {
    /// Minimum movement in host units before the drag engages.
    pub threshold: u16,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self { threshold: 0 }
    }
}

impl DragConfig {
    /// Create a config with a custom engage threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u16) -> Self {
        self.threshold = threshold;
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    dialog: DialogId,
    start: Point,
    last: Point,
    engaged: bool,
}

/// Tracks at most one active drag.
#[derive(Debug, Default)]
pub struct DragController {
    config: DragConfig,
    active: Option<ActiveDrag>,
}

impl DragController {
    /// Create a controller with the given config.
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Arm a drag for `dialog` at the press point.
    ///
    /// Replaces any drag already in flight; the host delivers events
    /// serially, so a second press means the first release was lost.
    pub fn begin(&mut self, dialog: DialogId, at: Point) {
        self.active = Some(ActiveDrag {
            dialog,
            start: at,
            last: at,
            engaged: self.config.threshold == 0,
        });
    }

    /// The dialog currently being dragged, if any.
    pub fn dragging(&self) -> Option<DialogId> {
        self.active.map(|d| d.dialog)
    }

    /// Feed a pointer move. Returns `(dialog, dx, dy)` to apply, or `None`
    /// while disengaged (below threshold) or idle.
    pub fn update(&mut self, at: Point) -> Option<(DialogId, i32, i32)> {
        let drag = self.active.as_mut()?;

        if !drag.engaged {
            if drag.start.manhattan_distance(at) < self.config.threshold as u32 {
                return None;
            }
            drag.engaged = true;
        }

        let (dx, dy) = drag.last.delta_to(at);
        drag.last = at;
        if dx == 0 && dy == 0 {
            return None;
        }
        Some((drag.dialog, dx, dy))
    }

    /// End the drag on release. Returns the dialog that was dragged.
    pub fn end(&mut self) -> Option<DialogId> {
        self.active.take().map(|d| d.dialog)
    }

    /// Drop any drag in flight without reporting it.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
