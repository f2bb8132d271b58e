//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the geometric types used by Strata for positioning
//! layer bands, component cells and connectors.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle defined by its top-left corner and size
//!
//! # Coordinate System
//!
//! Strata uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! All coordinates are whole pixels (`u32`). Arithmetic that could go below
//! zero saturates at zero, so a degenerate canvas collapses shapes to zero
//! size rather than producing negative dimensions.

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use strata_core::geometry::Point;
/// let p = Point::new(80, 130);
/// let moved = p.offset(10, 20);
/// assert_eq!(moved.x(), 90);
/// assert_eq!(moved.y(), 150);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: u32,
    y: u32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    pub fn x(self) -> u32 {
        self.x
    }

    /// Returns the y coordinate.
    pub fn y(self) -> u32 {
        self.y
    }

    /// Returns a copy of this point with a different x coordinate.
    pub fn with_x(mut self, x: u32) -> Self {
        self.x = x;
        self
    }

    /// Translates the point by `(dx, dy)`, saturating at `u32::MAX`.
    pub fn offset(self, dx: u32, dy: u32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Creates [`Bounds`] with this point as the top-left corner.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Width and height dimensions in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    /// Shrinks both dimensions, saturating at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_core::geometry::Size;
    /// let size = Size::new(100, 5).shrink(10, 10);
    /// assert_eq!(size, Size::new(90, 0));
    /// ```
    pub fn shrink(self, dw: u32, dh: u32) -> Self {
        Self::new(
            self.width.saturating_sub(dw),
            self.height.saturating_sub(dh),
        )
    }
}

/// An axis-aligned rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    origin: Point,
    size: Size,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            origin: top_left,
            size,
        }
    }

    pub fn min_x(self) -> u32 {
        self.origin.x()
    }

    pub fn min_y(self) -> u32 {
        self.origin.y()
    }

    pub fn max_x(self) -> u32 {
        self.origin.x().saturating_add(self.size.width())
    }

    pub fn max_y(self) -> u32 {
        self.origin.y().saturating_add(self.size.height())
    }

    pub fn width(self) -> u32 {
        self.size.width()
    }

    pub fn height(self) -> u32 {
        self.size.height()
    }

    /// Returns the top-left corner.
    pub fn min_point(self) -> Point {
        self.origin
    }

    pub fn to_size(self) -> Size {
        self.size
    }

    /// Returns `true` if `other` lies entirely within these bounds.
    pub fn contains(self, other: Bounds) -> bool {
        other.min_x() >= self.min_x()
            && other.min_y() >= self.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }
}
