#![forbid(unsafe_code)]

//! Geometric primitives and the clamp used for viewport bounds.
//!
//! All values are integral CSS pixels, matching `offsetLeft`/`offsetTop`,
//! `clientWidth`/`clientHeight` and `MouseEvent.clientX`/`clientY`.

use core::ops::Sub;

/// Clamp `value` into `[min, max]` as `max(min, min(value, max))`.
///
/// Unlike [`Ord::clamp`] this never panics on an inverted range. When
/// `min > max` the inner `min(value, max)` is raised back to `min`, so the
/// result is always `min`. A panel larger than the viewport therefore pins
/// to the top-left edge on that axis.
#[inline]
pub fn clamp<T: Ord>(min: T, value: T, max: T) -> T {
    min.max(value.min(max))
}

/// A point in viewport coordinates (origin at the top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Width and height of a panel or viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[inline]
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Allowed origin range for a panel inside a viewport.
///
/// Derived fresh for every event from the current viewport size and the
/// current panel size; never stored. The range is `[0, max_x] x [0, max_y]`
/// and `max_x`/`max_y` go negative when the panel overflows the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportBounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl ViewportBounds {
    #[must_use]
    pub const fn derive(viewport: Size, panel: Size) -> Self {
        Self {
            max_x: viewport.width.saturating_sub(panel.width),
            max_y: viewport.height.saturating_sub(panel.height),
        }
    }

    /// Whether either axis has an inverted range.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.max_x < 0 || self.max_y < 0
    }

    /// Clamp both axes of `origin` into the bounds.
    #[must_use]
    pub fn clamp_origin(&self, origin: Point) -> Point {
        Point::new(clamp(0, origin.x, self.max_x), clamp(0, origin.y, self.max_y))
    }
}
