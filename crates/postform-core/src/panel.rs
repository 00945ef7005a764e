#![forbid(unsafe_code)]

//! Collaborator surface for the floating panel and its text field.
//!
//! The controller and the quote action only talk to these traits, so a page
//! binding and a headless test host are interchangeable. [`PanelState`] and
//! [`TextFieldState`] are the in-memory implementations.

use crate::geometry::{Point, Size};

/// Anything carrying the "floating" display flag.
pub trait FloatingSurface {
    fn is_floating(&self) -> bool;

    fn set_floating(&mut self, floating: bool);
}

/// The movable panel: position, size and floating flag.
pub trait PanelSurface: FloatingSurface {
    /// Current top-left corner in viewport coordinates.
    fn origin(&self) -> Point;

    /// Current rendered size.
    fn size(&self) -> Size;

    fn set_origin(&mut self, origin: Point);
}

/// A text input that accepts appended text and focus requests.
pub trait TextField {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    /// Append `text` to the end of the current value.
    fn append(&mut self, text: &str) {
        let mut value = self.value();
        value.push_str(text);
        self.set_value(&value);
    }

    fn focus(&mut self);
}

impl<T: FloatingSurface + ?Sized> FloatingSurface for &mut T {
    fn is_floating(&self) -> bool {
        (**self).is_floating()
    }

    fn set_floating(&mut self, floating: bool) {
        (**self).set_floating(floating);
    }
}

impl<T: PanelSurface + ?Sized> PanelSurface for &mut T {
    fn origin(&self) -> Point {
        (**self).origin()
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn set_origin(&mut self, origin: Point) {
        (**self).set_origin(origin);
    }
}

/// In-memory panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    pub origin: Point,
    pub size: Size,
    pub floating: bool,
}

impl PanelState {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self {
            origin,
            size,
            floating: false,
        }
    }

    #[must_use]
    pub const fn floating(mut self) -> Self {
        self.floating = true;
        self
    }
}

impl FloatingSurface for PanelState {
    fn is_floating(&self) -> bool {
        self.floating
    }

    fn set_floating(&mut self, floating: bool) {
        self.floating = floating;
    }
}

impl PanelSurface for PanelState {
    fn origin(&self) -> Point {
        self.origin
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }
}

/// In-memory text field. `focused` records that focus was requested.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFieldState {
    pub value: String,
    pub focused: bool,
}

impl TextFieldState {
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            focused: false,
        }
    }
}

impl TextField for TextFieldState {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.value);
    }

    fn append(&mut self, text: &str) {
        self.value.push_str(text);
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
