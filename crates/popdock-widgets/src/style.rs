#![forbid(unsafe_code)]

//! Visual styling for surface cells.

use bitflags::bitflags;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0001;
        const DIM       = 0b0010;
        const REVERSE   = 0b0100;
        const UNDERLINE = 0b1000;
    }
}

/// A cell style: optional colors plus attribute flags.
///
/// `None` color fields mean "leave whatever is already there" so styles can
/// be layered with [`Style::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: StyleFlags,
}

impl Style {
    /// Create an empty style.
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add the bold attribute.
    pub const fn bold(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::BOLD);
        self
    }

    /// Add the dim attribute.
    pub const fn dim(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::DIM);
        self
    }

    /// Add the reverse-video attribute.
    pub const fn reverse(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::REVERSE);
        self
    }

    /// True if the style sets nothing.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Layer `self` over `base`: fields set on `self` win, unset fields
    /// fall back to `base`, attribute flags are unioned.
    pub fn merge(&self, base: &Style) -> Style {
        Style {
            fg: self.fg.or(base.fg),
            bg: self.bg.or(base.bg),
            attrs: self.attrs | base.attrs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style() {
        assert!(Style::new().is_empty());
        assert!(!Style::new().bold().is_empty());
        assert!(!Style::new().fg(Color::rgb(1, 2, 3)).is_empty());
    }

    #[test]
    fn merge_prefers_self() {
        let base = Style::new().fg(Color::rgb(0, 0, 0)).bg(Color::rgb(9, 9, 9));
        let over = Style::new().fg(Color::rgb(255, 0, 0));
        let merged = over.merge(&base);
        assert_eq!(merged.fg, Some(Color::rgb(255, 0, 0)));
        assert_eq!(merged.bg, Some(Color::rgb(9, 9, 9)));
    }

    #[test]
    fn merge_unions_attrs() {
        let merged = Style::new().bold().merge(&Style::new().dim());
        assert!(merged.attrs.contains(StyleFlags::BOLD | StyleFlags::DIM));
    }
}
