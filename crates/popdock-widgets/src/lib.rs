#![forbid(unsafe_code)]

//! Floating dialog manager for terminal UIs.
//!
//! The centerpiece is [`manager::DialogManager`]: it creates, positions,
//! raises, and destroys floating overlay panels anchored to a logical key,
//! guaranteeing at most one live dialog per key unless a dialog was opened
//! in multi mode. Dialogs carry a draggable handle bar with a close control
//! and a centered title, and hand their inner content region back to the
//! caller for population.
//!
//! ```
//! use popdock_core::Rect;
//! use popdock_widgets::dialog::DialogOptions;
//! use popdock_widgets::manager::{DialogManager, OpenOutcome};
//!
//! let mut manager = DialogManager::new(Rect::from_size(1000, 600));
//! let outcome = manager.open_with(
//!     "snippet",
//!     "estimate",
//!     DialogOptions::default().title("Kyber – primal"),
//!     |content| content.set_text("n = 256\nq = 3329"),
//! );
//! assert!(matches!(outcome, OpenOutcome::Opened(_)));
//! ```

pub mod borders;
pub mod content;
pub mod dialog;
pub mod drag;
pub mod manager;
pub mod registry;
pub mod style;
pub mod surface;

pub use content::ContentRegion;
pub use dialog::{Dialog, DialogId, DialogOptions, HitPart};
pub use drag::{DragConfig, DragController};
pub use manager::{DialogEvent, DialogManager, OpenOutcome};
pub use registry::OpenRegistry;
pub use style::{Color, Style, StyleFlags};
pub use surface::{Cell, Surface};

use popdock_core::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A renderable component.
///
/// Widgets draw themselves into a [`Surface`] within a given [`Rect`].
/// Dialog content regions accept any boxed widget.
pub trait Widget {
    /// Render the widget into the surface at the given area.
    fn render(&self, area: Rect, surface: &mut Surface);
}

/// Draw a text span at `(x, y)`, stopping at `max_x` (exclusive).
///
/// Returns the x position after the last drawn character. Wide graphemes
/// occupy their display width; combining marks are dropped rather than
/// overdrawn, which is acceptable for chrome text.
pub(crate) fn draw_text(
    surface: &mut Surface,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x + w as u16 > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            surface.set(x, y, Cell::styled(c, style));
        }
        x = x.saturating_add(w as u16);
    }
    x
}

/// Fill a rectangular area with a character and style.
pub(crate) fn fill_area(surface: &mut Surface, area: Rect, ch: char, style: Style) {
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            surface.set(x, y, Cell::styled(ch, style));
        }
    }
}
