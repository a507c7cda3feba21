#![forbid(unsafe_code)]

//! The inner content region of a dialog.
//!
//! The manager never interprets what lives here; the caller populates the
//! region through the `on_ready` callback of a successful open (or later
//! via [`crate::manager::DialogManager::content_mut`]). Content is either
//! preformatted text lines or an arbitrary boxed [`Widget`].

use crate::style::Style;
use crate::{Widget, draw_text};
use crate::surface::Surface;
use popdock_core::Rect;

enum Content {
    Empty,
    Lines(Vec<String>),
    Widget(Box<dyn Widget>),
}

/// Handle to a dialog's inner container.
pub struct ContentRegion {
    area: Rect,
    style: Style,
    content: Content,
}

impl std::fmt::Debug for ContentRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.content {
            Content::Empty => "Empty".to_string(),
            Content::Lines(lines) => format!("Lines({})", lines.len()),
            Content::Widget(_) => "Widget(..)".to_string(),
        };
        f.debug_struct("ContentRegion")
            .field("area", &self.area)
            .field("content", &kind)
            .finish()
    }
}

impl ContentRegion {
    pub(crate) fn new(area: Rect) -> Self {
        Self {
            area,
            style: Style::new(),
            content: Content::Empty,
        }
    }

    /// The region's current area in host coordinates.
    ///
    /// Tracks the dialog as it is dragged; captured values go stale.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub(crate) fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// True if nothing was ever put into the region.
    pub fn is_empty(&self) -> bool {
        matches!(self.content, Content::Empty)
    }

    /// Style applied to text content.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Fill the region with preformatted text, split on newlines.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.content = Content::Lines(text.lines().map(str::to_owned).collect());
    }

    /// Fill the region with explicit lines.
    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.content = Content::Lines(lines);
    }

    /// Hand the region to an arbitrary widget.
    pub fn set_widget(&mut self, widget: Box<dyn Widget>) {
        self.content = Content::Widget(widget);
    }

    /// The text lines, if the region holds text.
    pub fn lines(&self) -> Option<&[String]> {
        match &self.content {
            Content::Lines(lines) => Some(lines),
            _ => None,
        }
    }

    pub(crate) fn render(&self, surface: &mut Surface) {
        if self.area.is_empty() {
            return;
        }
        match &self.content {
            Content::Empty => {}
            Content::Lines(lines) => {
                let max_x = self.area.right();
                for (i, line) in lines.iter().enumerate() {
                    if i as u16 >= self.area.height {
                        break;
                    }
                    draw_text(
                        surface,
                        self.area.x,
                        self.area.y + i as u16,
                        line,
                        self.style,
                        max_x,
                    );
                }
            }
            Content::Widget(widget) => widget.render(self.area, surface),
        }
    }
}
