#![forbid(unsafe_code)]

//! Border glyph sets and the frame-drawing helper used by dialog chrome.

use crate::style::Style;
use crate::surface::{Cell, Surface};
use popdock_core::Rect;

/// The six glyphs that make up a rectangular border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderSet {
    /// Square unicode box-drawing characters.
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Rounded unicode corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// ASCII fallback for hosts without unicode box drawing.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

/// Draw a rectangular border along the edges of `area`.
///
/// Areas narrower or shorter than 2 units are skipped; a frame needs both
/// edges to exist.
pub fn draw_border(surface: &mut Surface, area: Rect, set: BorderSet, style: Style) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let right = area.right() - 1;
    let bottom = area.bottom() - 1;

    for x in (area.x + 1)..right {
        surface.set(x, area.y, Cell::styled(set.horizontal, style));
        surface.set(x, bottom, Cell::styled(set.horizontal, style));
    }
    for y in (area.y + 1)..bottom {
        surface.set(area.x, y, Cell::styled(set.vertical, style));
        surface.set(right, y, Cell::styled(set.vertical, style));
    }

    surface.set(area.x, area.y, Cell::styled(set.top_left, style));
    surface.set(right, area.y, Cell::styled(set.top_right, style));
    surface.set(area.x, bottom, Cell::styled(set.bottom_left, style));
    surface.set(right, bottom, Cell::styled(set.bottom_right, style));
}
