#![forbid(unsafe_code)]

//! The floating dialog manager.
//!
//! Owns the open-key registry, the id counter, and the set of live dialogs;
//! routes input to them and renders them in stacking order. One manager per
//! host surface.
//!
//! # Invariants
//!
//! 1. A key maps to at most one live dialog unless every open under it was
//!    a multi open; the registry flag is still written on multi opens but
//!    not consulted.
//! 2. A suppressed open has no side effects: no instance, no registry
//!    write, no callback.
//! 3. A freshly opened or clicked dialog's z strictly exceeds every other
//!    live dialog's z at that moment.
//! 4. Ids are unique for the manager's lifetime and never reused.
//!
//! # Failure semantics
//!
//! There are no error paths. The one recognized non-default outcome,
//! opening a non-multi dialog under a key that is already open, is a
//! designed suppression and is reported as [`OpenOutcome::Suppressed`]
//! instead of being silently swallowed.

use crate::content::ContentRegion;
use crate::dialog::{Dialog, DialogId, DialogOptions, HitPart};
use crate::drag::{DragConfig, DragController};
use crate::registry::OpenRegistry;
use crate::surface::Surface;
use popdock_core::{Event, MouseButton, MouseEvent, MouseEventKind, Point, Rect};

/// Stacking orders start above this floor; the first raise lands at 1001.
const Z_BASE: u32 = 1000;

/// Result of [`DialogManager::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum OpenOutcome {
    /// A dialog was created and attached.
    Opened(DialogId),
    /// The key already holds a live non-multi dialog; nothing happened.
    Suppressed,
}

impl OpenOutcome {
    /// True if a dialog was created.
    pub fn is_opened(&self) -> bool {
        matches!(self, Self::Opened(_))
    }

    /// The new dialog's id, if one was created.
    pub fn id(&self) -> Option<DialogId> {
        match self {
            Self::Opened(id) => Some(*id),
            Self::Suppressed => None,
        }
    }
}

/// What [`DialogManager::handle_event`] did with an input event.
///
/// Anything but `Ignored` means the screen needs a repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// The event was not for a dialog; the host should process it.
    Ignored,
    /// A dialog was raised to the front (and focused).
    Raised(DialogId),
    /// A dialog's close control was pressed and the dialog is gone.
    Closed(DialogId),
    /// A handle-bar press armed a drag on this dialog.
    DragStarted(DialogId),
    /// The dragged dialog moved.
    DragMoved(DialogId),
    /// The drag ended on release.
    DragEnded(DialogId),
}

/// Creates, positions, raises, and destroys floating dialogs.
#[derive(Debug)]
pub struct DialogManager {
    bounds: Rect,
    registry: OpenRegistry,
    dialogs: Vec<Dialog>,
    drag: DragController,
    next_id: u64,
    focused: Option<DialogId>,
}

impl DialogManager {
    /// Create a manager for a host with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            registry: OpenRegistry::new(),
            dialogs: Vec::new(),
            drag: DragController::new(DragConfig::default()),
            next_id: 0,
            focused: None,
        }
    }

    /// Replace the drag configuration.
    pub fn with_drag_config(mut self, config: DragConfig) -> Self {
        self.drag = DragController::new(config);
        self
    }

    /// Host bounds dialogs are clamped into while dragging.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Open a dialog without populating its content.
    ///
    /// See [`Self::open_with`] for the full protocol.
    pub fn open(
        &mut self,
        body: impl Into<String>,
        key: impl Into<String>,
        options: DialogOptions,
    ) -> OpenOutcome {
        self.open_with(body, key, options, |_| {})
    }

    /// Open a dialog under `key` and hand the content region to `on_ready`.
    ///
    /// If the key already holds a live dialog and `options.multi` is false,
    /// the open is suppressed: no instance is created, the registry is not
    /// written, and `on_ready` is never invoked. Otherwise the dialog is
    /// constructed at the resolved geometry, registered, stacked on top,
    /// and focused; `on_ready` runs synchronously before this returns,
    /// at most once per successful open.
    pub fn open_with(
        &mut self,
        body: impl Into<String>,
        key: impl Into<String>,
        options: DialogOptions,
        on_ready: impl FnOnce(&mut ContentRegion),
    ) -> OpenOutcome {
        let key = key.into();

        if self.registry.is_open(&key) && !options.multi {
            #[cfg(feature = "tracing")]
            tracing::debug!(key = %key, "open suppressed: key already holds a live dialog");
            return OpenOutcome::Suppressed;
        }

        self.registry.set_open(&key);

        self.next_id += 1;
        let id = DialogId(self.next_id);

        let mut dialog = Dialog::new(id, key, body.into(), &options);
        dialog.set_z(self.max_z() + 1);
        self.focused = Some(id);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = id.0,
            key = %dialog.key(),
            frame = ?dialog.frame(),
            multi = options.multi,
            "dialog opened"
        );

        self.dialogs.push(dialog);
        if let Some(dialog) = self.dialogs.last_mut() {
            on_ready(dialog.content_mut());
        }

        OpenOutcome::Opened(id)
    }

    /// Close a dialog: flag it closed, release its registry key, drop it.
    ///
    /// Returns false if the id is not live (already closed ids stay dead;
    /// instances are never reused). The registry write is last-writer-wins
    /// on the shared flag, so closing any instance under a multi key frees
    /// the key.
    pub fn close(&mut self, id: DialogId) -> bool {
        let Some(index) = self.dialogs.iter().position(|d| d.id() == id) else {
            return false;
        };

        let mut dialog = self.dialogs.remove(index);
        dialog.mark_closed();
        self.registry.set_closed(dialog.key());

        if self.drag.dragging() == Some(id) {
            self.drag.cancel();
        }
        if self.focused == Some(id) {
            self.focused = self.topmost();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(id = id.0, key = %dialog.key(), "dialog closed");

        true
    }

    /// Give logical focus to a live dialog.
    pub fn focus(&mut self, id: DialogId) -> bool {
        if self.get(id).is_some() {
            self.focused = Some(id);
            true
        } else {
            false
        }
    }

    /// The dialog currently holding focus.
    pub fn focused(&self) -> Option<DialogId> {
        self.focused
    }

    /// Raise a dialog strictly above every other live dialog.
    pub fn raise_to_front(&mut self, id: DialogId) -> bool {
        let top = self.max_z() + 1;
        let Some(dialog) = self.dialogs.iter_mut().find(|d| d.id() == id) else {
            return false;
        };
        dialog.set_z(top);

        #[cfg(feature = "tracing")]
        tracing::trace!(id = id.0, z = top, "dialog raised");

        true
    }

    fn max_z(&self) -> u32 {
        self.dialogs.iter().map(Dialog::z).fold(Z_BASE, u32::max)
    }

    /// The topmost live dialog, if any.
    pub fn topmost(&self) -> Option<DialogId> {
        self.dialogs.iter().max_by_key(|d| d.z()).map(Dialog::id)
    }

    /// The topmost live dialog whose frame contains the point.
    pub fn topmost_at(&self, x: u16, y: u16) -> Option<DialogId> {
        self.dialogs
            .iter()
            .filter(|d| d.frame().contains(x, y))
            .max_by_key(|d| d.z())
            .map(Dialog::id)
    }

    /// Number of live dialogs.
    pub fn open_count(&self) -> usize {
        self.dialogs.len()
    }

    /// True if the registry flags this key as open.
    pub fn is_open(&self, key: &str) -> bool {
        self.registry.is_open(key)
    }

    /// Look up a live dialog.
    pub fn get(&self, id: DialogId) -> Option<&Dialog> {
        self.dialogs.iter().find(|d| d.id() == id)
    }

    /// The content region of a live dialog, for late population.
    pub fn content_mut(&mut self, id: DialogId) -> Option<&mut ContentRegion> {
        self.dialogs
            .iter_mut()
            .find(|d| d.id() == id)
            .map(Dialog::content_mut)
    }

    /// Iterate live dialogs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Dialog> {
        self.dialogs.iter()
    }

    /// Route an input event to the dialogs.
    ///
    /// Mouse presses go to the topmost dialog under the pointer: the close
    /// control closes it, the handle bar raises it and arms a drag, and
    /// anything else in the frame raises it. Later drag motion repositions
    /// the armed dialog clamped to the host bounds. Everything else,
    /// including every event while no dialog is hit, is `Ignored` and
    /// stays the host's business. A resize updates the bounds and pulls
    /// stranded dialogs back inside them.
    pub fn handle_event(&mut self, event: &Event) -> DialogEvent {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize { width, height } => {
                self.bounds = Rect::from_size(*width, *height);
                let bounds = self.bounds;
                for dialog in &mut self.dialogs {
                    let frame = dialog.frame().offset_clamped(0, 0, &bounds);
                    dialog.set_frame(frame);
                }
                DialogEvent::Ignored
            }
            Event::Key(_) => DialogEvent::Ignored,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> DialogEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(id) = self.topmost_at(mouse.x, mouse.y) else {
                    return DialogEvent::Ignored;
                };

                self.raise_to_front(id);
                self.focused = Some(id);

                let part = self
                    .get(id)
                    .and_then(|d| d.hit_test(mouse.x, mouse.y))
                    .unwrap_or(HitPart::Border);

                match part {
                    HitPart::CloseControl => {
                        self.close(id);
                        DialogEvent::Closed(id)
                    }
                    HitPart::Handle => {
                        self.drag.begin(id, Point::new(mouse.x, mouse.y));
                        DialogEvent::DragStarted(id)
                    }
                    HitPart::Content | HitPart::Border => DialogEvent::Raised(id),
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some((id, dx, dy)) = self.drag.update(Point::new(mouse.x, mouse.y)) else {
                    return DialogEvent::Ignored;
                };
                let bounds = self.bounds;
                if let Some(dialog) = self.dialogs.iter_mut().find(|d| d.id() == id) {
                    let frame = dialog.frame().offset_clamped(dx, dy, &bounds);
                    dialog.set_frame(frame);
                }
                DialogEvent::DragMoved(id)
            }
            MouseEventKind::Up(MouseButton::Left) => match self.drag.end() {
                Some(id) => DialogEvent::DragEnded(id),
                None => DialogEvent::Ignored,
            },
            _ => DialogEvent::Ignored,
        }
    }

    /// Render every live dialog back-to-front by stacking order.
    pub fn render(&self, surface: &mut Surface) {
        let mut order: Vec<&Dialog> = self.dialogs.iter().collect();
        order.sort_by_key(|d| d.z());
        for dialog in order {
            dialog.render(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> DialogManager {
        DialogManager::new(Rect::from_size(200, 120))
    }

    fn small() -> DialogOptions {
        DialogOptions::default().width(20).height(8)
    }

    #[test]
    fn open_uses_defaults() {
        let mut m = manager();
        let id = m.open("b", "k", DialogOptions::default()).id().unwrap();
        let frame = m.get(id).unwrap().frame();
        assert_eq!(frame, Rect::new(150, 100, 400, 400));
    }

    #[test]
    fn duplicate_key_is_suppressed() {
        let mut m = manager();
        assert!(m.open("b", "dup", small()).is_opened());

        let mut called = false;
        let outcome = m.open_with("b", "dup", small(), |_| called = true);
        assert_eq!(outcome, OpenOutcome::Suppressed);
        assert!(!called, "on_ready must not run for a suppressed open");
        assert_eq!(m.open_count(), 1);
    }

    #[test]
    fn suppressed_open_has_no_side_effects() {
        let mut m = manager();
        m.open("b", "k", small()).id().unwrap();
        let ids: Vec<_> = m.iter().map(Dialog::id).collect();
        let _ = m.open("b", "k", small());
        assert_eq!(m.iter().map(Dialog::id).collect::<Vec<_>>(), ids);
        // The id counter did not advance for the suppressed open.
        let id2 = m.open("b", "other", small()).id().unwrap();
        assert_eq!(id2, DialogId(2));
    }

    #[test]
    fn multi_bypasses_registry() {
        let mut m = manager();
        let a = m.open("b", "k", small().multi(true)).id().unwrap();
        let b = m.open("b", "k", small().multi(true)).id().unwrap();
        assert_ne!(a, b);
        assert_eq!(m.open_count(), 2);

        // Closing one instance frees the shared flag (last-writer-wins),
        // leaving the other live.
        assert!(m.close(a));
        assert!(!m.is_open("k"));
        assert_eq!(m.open_count(), 1);
        assert!(m.get(b).is_some());
    }

    #[test]
    fn close_then_reopen_same_key() {
        let mut m = manager();
        let a = m.open("b", "p", small()).id().unwrap();
        assert!(m.close(a));
        let outcome = m.open("b", "p", small());
        let b = outcome.id().expect("reopen after close must succeed");
        assert_ne!(a, b);
        assert!(m.is_open("p"));
    }

    #[test]
    fn close_unknown_id_is_false() {
        let mut m = manager();
        assert!(!m.close(DialogId(99)));
        let a = m.open("b", "k", small()).id().unwrap();
        assert!(m.close(a));
        assert!(!m.close(a), "closing twice reports false the second time");
        assert!(!m.is_open("k"));
    }

    #[test]
    fn on_ready_gets_content_inside_frame() {
        let mut m = manager();
        let mut seen = None;
        let outcome = m.open_with(
            "x",
            "p",
            small().top(5).left(5).title("T"),
            |content| {
                content.set_text("hello");
                seen = Some(content.area());
            },
        );
        let id = outcome.id().unwrap();
        let area = seen.expect("on_ready must run on success");
        let frame = m.get(id).unwrap().frame();
        assert!(frame.contains(area.x, area.y));
        assert!(frame.contains(area.right() - 1, area.bottom() - 1));
        assert_eq!(m.get(id).unwrap().title(), "T");
    }

    #[test]
    fn stacking_click_raises_by_one_over_max() {
        let mut m = manager();
        let a = m.open("b", "a", small().top(0).left(0)).id().unwrap();
        let _b = m.open("b", "b", small().top(20).left(40)).id().unwrap();
        let c = m.open("b", "c", small().top(40).left(80)).id().unwrap();

        let pre_max = m.iter().map(Dialog::z).max().unwrap();
        assert_eq!(m.get(c).unwrap().z(), pre_max);

        // Click inside A's content.
        let ev = Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            5,
            3,
        ));
        assert_eq!(m.handle_event(&ev), DialogEvent::Raised(a));
        assert_eq!(m.get(a).unwrap().z(), pre_max + 1);
        assert_eq!(m.topmost(), Some(a));
        assert_eq!(m.focused(), Some(a));
    }

    #[test]
    fn newly_opened_dialog_is_topmost() {
        let mut m = manager();
        let a = m.open("b", "a", small()).id().unwrap();
        assert_eq!(m.get(a).unwrap().z(), 1001);
        let b = m.open("b", "b", small()).id().unwrap();
        assert!(m.get(b).unwrap().z() > m.get(a).unwrap().z());
        assert_eq!(m.focused(), Some(b));
    }

    #[test]
    fn click_routes_to_topmost_overlapping() {
        let mut m = manager();
        let a = m.open("b", "a", small().top(0).left(0)).id().unwrap();
        let b = m.open("b", "b", small().top(2).left(2)).id().unwrap();

        // (5, 5) lies inside both frames; B is on top.
        assert_eq!(m.topmost_at(5, 5), Some(b));
        let ev = Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            5,
            5,
        ));
        assert_eq!(m.handle_event(&ev), DialogEvent::Raised(b));
        assert_eq!(m.get(a).unwrap().z(), 1001);
    }

    #[test]
    fn close_control_click_closes() {
        let mut m = manager();
        let id = m.open("b", "k", small().top(0).left(0)).id().unwrap();
        let (cx, cy) = m.get(id).unwrap().close_control_at().unwrap();
        let ev = Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            cx,
            cy,
        ));
        assert_eq!(m.handle_event(&ev), DialogEvent::Closed(id));
        assert_eq!(m.open_count(), 0);
        assert!(!m.is_open("k"));
    }

    #[test]
    fn handle_drag_moves_frame() {
        let mut m = manager();
        let id = m.open("b", "k", small().top(10).left(10)).id().unwrap();

        let down = Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            14,
            10,
        ));
        assert_eq!(m.handle_event(&down), DialogEvent::DragStarted(id));

        let drag = Event::Mouse(MouseEvent::new(
            MouseEventKind::Drag(MouseButton::Left),
            20,
            13,
        ));
        assert_eq!(m.handle_event(&drag), DialogEvent::DragMoved(id));
        assert_eq!(m.get(id).unwrap().frame(), Rect::new(16, 13, 20, 8));

        let up = Event::Mouse(MouseEvent::new(
            MouseEventKind::Up(MouseButton::Left),
            20,
            13,
        ));
        assert_eq!(m.handle_event(&up), DialogEvent::DragEnded(id));
    }

    #[test]
    fn content_press_does_not_drag() {
        let mut m = manager();
        let _id = m.open("b", "k", small().top(10).left(10)).id().unwrap();

        let down = Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            14,
            14,
        ));
        assert!(matches!(m.handle_event(&down), DialogEvent::Raised(_)));

        let drag = Event::Mouse(MouseEvent::new(
            MouseEventKind::Drag(MouseButton::Left),
            30,
            30,
        ));
        assert_eq!(m.handle_event(&drag), DialogEvent::Ignored);
    }

    #[test]
    fn drag_clamps_to_bounds() {
        let mut m = DialogManager::new(Rect::from_size(40, 20));
        let id = m.open("b", "k", small().top(2).left(2)).id().unwrap();

        m.handle_event(&Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            5,
            2,
        )));
        m.handle_event(&Event::Mouse(MouseEvent::new(
            MouseEventKind::Drag(MouseButton::Left),
            0,
            0,
        )));
        // Origin cannot leave the host bounds.
        let frame = m.get(id).unwrap().frame();
        assert_eq!((frame.x, frame.y), (0, 0));
    }

    #[test]
    fn click_outside_everything_is_ignored() {
        let mut m = manager();
        m.open("b", "k", small().top(10).left(10)).id().unwrap();
        let ev = Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            150,
            100,
        ));
        assert_eq!(m.handle_event(&ev), DialogEvent::Ignored);
    }

    #[test]
    fn resize_pulls_dialogs_back_in_bounds() {
        let mut m = manager();
        let id = m.open("b", "k", small().top(100).left(180)).id().unwrap();
        m.handle_event(&Event::Resize {
            width: 50,
            height: 30,
        });
        let frame = m.get(id).unwrap().frame();
        assert!(frame.x < 50 && frame.y < 30);
        assert_eq!(m.bounds(), Rect::from_size(50, 30));
    }

    #[test]
    fn focus_follows_close() {
        let mut m = manager();
        let a = m.open("b", "a", small()).id().unwrap();
        let b = m.open("b", "b", small()).id().unwrap();
        assert_eq!(m.focused(), Some(b));
        m.close(b);
        assert_eq!(m.focused(), Some(a));
        m.close(a);
        assert_eq!(m.focused(), None);
    }

    #[test]
    fn explicit_focus() {
        let mut m = manager();
        let a = m.open("b", "a", small()).id().unwrap();
        let b = m.open("b", "b", small()).id().unwrap();
        assert!(m.focus(a));
        assert_eq!(m.focused(), Some(a));
        m.close(a);
        assert!(!m.focus(a), "closed dialogs cannot take focus");
        assert_eq!(m.focused(), Some(b));
    }

    #[test]
    fn render_draws_topmost_over_lower() {
        let mut m = DialogManager::new(Rect::from_size(40, 20));
        let a = m
            .open("b", "a", DialogOptions::default().width(10).height(5).top(0).left(0))
            .id()
            .unwrap();
        let _b = m
            .open("b", "b", DialogOptions::default().width(10).height(5).top(2).left(4))
            .id()
            .unwrap();

        let mut surface = Surface::new(40, 20);
        m.render(&mut surface);
        // B's top-left corner overdraws A's interior.
        assert_eq!(surface.get(4, 2).map(|c| c.ch), Some('┌'));

        // Raise A and repaint: A's interior now overdraws B's corner.
        m.raise_to_front(a);
        surface.clear();
        m.render(&mut surface);
        assert_eq!(surface.get(4, 2).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn suppressed_open_leaves_render_identical() {
        let mut m = DialogManager::new(Rect::from_size(40, 20));
        let _ = m.open("b", "k", DialogOptions::default().width(10).height(5).top(1).left(1));

        let mut before = Surface::new(40, 20);
        m.render(&mut before);

        let _ = m.open("b", "k", DialogOptions::default().width(30).height(10).top(0).left(0));
        let mut after = Surface::new(40, 20);
        m.render(&mut after);

        assert_eq!(before.snapshot(), after.snapshot());
    }
}
