#![forbid(unsafe_code)]

//! A single floating dialog panel.
//!
//! A dialog is a bordered frame whose top row doubles as the drag handle:
//! it carries a centered title and a close control in the top-right corner.
//! The content region fills the interior. Dialogs are built by
//! [`crate::manager::DialogManager::open`] and never constructed directly.
//!
//! # Lifecycle
//!
//! `unopened → open → closed`, terminal. A closed dialog is never reused;
//! reopening a key builds a fresh instance with a fresh id.

use crate::borders::{BorderSet, draw_border};
use crate::content::ContentRegion;
use crate::style::Style;
use crate::surface::{Cell, Surface};
use crate::{draw_text, fill_area};
use popdock_core::Rect;
use unicode_width::UnicodeWidthStr;

/// Default frame width when the caller leaves it unset.
pub const DEFAULT_WIDTH: u16 = 400;
/// Default frame height when the caller leaves it unset.
pub const DEFAULT_HEIGHT: u16 = 400;
/// Default top offset when the caller leaves it unset.
pub const DEFAULT_TOP: u16 = 100;
/// Default left offset when the caller leaves it unset.
pub const DEFAULT_LEFT: u16 = 150;

/// Glyph shown in the close control.
const CLOSE_GLYPH: char = '✕';

/// Unique identifier for a dialog instance.
///
/// Allocated from a monotonically increasing counter owned by the manager,
/// so ids never collide within a manager's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogId(pub u64);

/// Placement and behavior options for [`crate::manager::DialogManager::open`].
///
/// Geometry fields are presence-checked: `None` falls back to the default,
/// while an explicit value (including `0`) is always honored. Units are
/// host units; the manager does not interpret them.
#[derive(Debug, Clone, Default)]
pub struct DialogOptions {
    /// Frame width. Default 400.
    pub width: Option<u16>,
    /// Frame height. Default 400.
    pub height: Option<u16>,
    /// Top offset of the frame origin. Default 100.
    pub top: Option<u16>,
    /// Left offset of the frame origin. Default 150.
    pub left: Option<u16>,
    /// Handle-bar title. Default empty.
    pub title: String,
    /// Layout pass-through flag; stored, not interpreted.
    pub fit: bool,
    /// Allow multiple live dialogs under the same key.
    pub multi: bool,
}

impl DialogOptions {
    /// Set the frame width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the frame height.
    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the top offset.
    pub fn top(mut self, top: u16) -> Self {
        self.top = Some(top);
        self
    }

    /// Set the left offset.
    pub fn left(mut self, left: u16) -> Self {
        self.left = Some(left);
        self
    }

    /// Set the handle-bar title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the layout pass-through flag.
    pub fn fit(mut self, fit: bool) -> Self {
        self.fit = fit;
        self
    }

    /// Allow duplicate keys for this open.
    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Resolve the frame rectangle, applying defaults for absent fields.
    pub fn resolve_frame(&self) -> Rect {
        Rect::new(
            self.left.unwrap_or(DEFAULT_LEFT),
            self.top.unwrap_or(DEFAULT_TOP),
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT),
        )
    }
}

/// What part of a dialog a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The close control on the handle bar.
    CloseControl,
    /// The handle bar (top row), excluding the close control.
    Handle,
    /// The inner content region.
    Content,
    /// The left/right/bottom border.
    Border,
}

/// One live overlay panel.
#[derive(Debug)]
pub struct Dialog {
    id: DialogId,
    key: String,
    body: String,
    frame: Rect,
    title: String,
    fit: bool,
    multi: bool,
    closed: bool,
    z: u32,
    content: ContentRegion,
    border_set: BorderSet,
    chrome_style: Style,
    title_style: Style,
}

impl Dialog {
    pub(crate) fn new(
        id: DialogId,
        key: String,
        body: String,
        options: &DialogOptions,
    ) -> Self {
        let frame = options.resolve_frame();
        Self {
            id,
            key,
            body,
            frame,
            title: options.title.clone(),
            fit: options.fit,
            multi: options.multi,
            closed: false,
            z: 0,
            content: ContentRegion::new(Self::inner(frame)),
            border_set: BorderSet::SQUARE,
            chrome_style: Style::new(),
            title_style: Style::new().bold(),
        }
    }

    /// The interior area for a given frame.
    fn inner(frame: Rect) -> Rect {
        Rect::new(
            frame.x.saturating_add(1),
            frame.y.saturating_add(1),
            frame.width.saturating_sub(2),
            frame.height.saturating_sub(2),
        )
    }

    pub fn id(&self) -> DialogId {
        self.id
    }

    /// The dedup key this dialog holds in the registry.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The content descriptor supplied at open. Stored, never interpreted.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn fit(&self) -> bool {
        self.fit
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Current stacking order. Higher renders later (on top).
    pub fn z(&self) -> u32 {
        self.z
    }

    pub(crate) fn set_z(&mut self, z: u32) {
        self.z = z;
    }

    pub(crate) fn mark_closed(&mut self) {
        self.closed = true;
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.content.set_area(Self::inner(frame));
    }

    /// The inner content region.
    pub fn content(&self) -> &ContentRegion {
        &self.content
    }

    pub(crate) fn content_mut(&mut self) -> &mut ContentRegion {
        &mut self.content
    }

    /// Override the border glyph set (e.g. ASCII fallback).
    pub fn set_border_set(&mut self, set: BorderSet) {
        self.border_set = set;
    }

    /// Position of the close control, if the frame is wide enough for one.
    pub fn close_control_at(&self) -> Option<(u16, u16)> {
        if self.frame.width < 3 || self.frame.height == 0 {
            return None;
        }
        Some((self.frame.right() - 2, self.frame.y))
    }

    /// Classify a point against this dialog's chrome.
    ///
    /// Returns `None` for points outside the frame.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitPart> {
        if !self.frame.contains(x, y) {
            return None;
        }
        if self.close_control_at() == Some((x, y)) {
            return Some(HitPart::CloseControl);
        }
        if y == self.frame.y {
            return Some(HitPart::Handle);
        }
        if Self::inner(self.frame).contains(x, y) {
            return Some(HitPart::Content);
        }
        Some(HitPart::Border)
    }

    /// Render the panel chrome and content into the surface.
    ///
    /// Closed dialogs draw nothing; removal from the screen is repaint-based.
    pub fn render(&self, surface: &mut Surface) {
        if self.closed || self.frame.width < 2 || self.frame.height < 2 {
            return;
        }

        fill_area(surface, Self::inner(self.frame), ' ', self.chrome_style);
        draw_border(surface, self.frame, self.border_set, self.chrome_style);
        self.render_handle_bar(surface);
        self.content.render(surface);
    }

    fn render_handle_bar(&self, surface: &mut Surface) {
        // Title is centered between the corners, keeping clear of the close
        // control and one spacer cell on each side.
        let bar_y = self.frame.y;
        let left = self.frame.x + 1;
        let right = self.frame.right().saturating_sub(3);
        let available = right.saturating_sub(left) as usize;

        if available >= 1 && !self.title.is_empty() {
            let title = ellipsize(&self.title, available.saturating_sub(2));
            let width = UnicodeWidthStr::width(title.as_ref());
            let x = left + ((available.saturating_sub(width)) / 2) as u16;
            draw_text(surface, x, bar_y, &title, self.title_style, right);
        }

        if let Some((x, y)) = self.close_control_at() {
            surface.set(x, y, Cell::styled(CLOSE_GLYPH, self.chrome_style));
        }
    }
}

/// Truncate a string to `max_width` display units, appending `…` when cut.
fn ellipsize(s: &str, max_width: usize) -> std::borrow::Cow<'_, str> {
    use unicode_segmentation::UnicodeSegmentation;

    let total = UnicodeWidthStr::width(s);
    if total <= max_width {
        return std::borrow::Cow::Borrowed(s);
    }
    if max_width == 0 {
        return std::borrow::Cow::Borrowed("");
    }
    if max_width == 1 {
        return std::borrow::Cow::Borrowed("…");
    }

    let mut out = String::new();
    let mut used = 0usize;
    let target = max_width - 1;

    for g in s.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if w == 0 {
            continue;
        }
        if used + w > target {
            break;
        }
        out.push_str(g);
        used += w;
    }

    out.push('…');
    std::borrow::Cow::Owned(out)
}
