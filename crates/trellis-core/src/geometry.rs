//! Geometric primitives for grid layout and positioning.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in pixel space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`CellCoord`] - An integer lattice coordinate inside a grid
//! - [`Dimensions`] - The column and row count of a grid
//!
//! # Coordinate System
//!
//! Trellis uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Lattice coordinates follow the same orientation: `x` selects the column
//! and grows rightward, `y` selects the row and grows downward.

use std::fmt;

/// A 2D point representing a position in pixel space.
///
/// # Examples
///
/// ```
/// # use trellis_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Returns the bounds of a rectangle whose top-left corner is this point.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both components are finite and strictly greater than zero
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Grows both dimensions by `margin` on each side.
    pub fn add_margin(self, margin: f32) -> Self {
        Self {
            width: margin.mul_add(2.0, self.width),
            height: margin.mul_add(2.0, self.height),
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates a zero-sized bounds located at `point`
    pub fn from_point(point: Point) -> Self {
        Self::new_from_top_left(point, Size::default())
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trellis_core::geometry::{Bounds, Point, Size};
    /// let label = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let cells = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = label.merge(&cells);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// An integer coordinate on a grid lattice.
///
/// `x` is the column index and `y` is the row index. A coordinate only has a
/// meaning relative to the [`Dimensions`] of the grid it is used with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellCoord {
    x: usize,
    y: usize,
}

impl CellCoord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column index
    pub fn x(self) -> usize {
        self.x
    }

    /// Returns the row index
    pub fn y(self) -> usize {
        self.y
    }

    /// Scales this coordinate elementwise by a cell size, giving the pixel
    /// offset of the cell relative to the lattice origin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trellis_core::geometry::{CellCoord, Size};
    /// let offset = CellCoord::new(2, 1).scale(Size::new(120.0, 40.0));
    /// assert_eq!(offset.x(), 240.0);
    /// assert_eq!(offset.y(), 40.0);
    /// ```
    pub fn scale(self, cell_size: Size) -> Point {
        Point::new(
            self.x as f32 * cell_size.width(),
            self.y as f32 * cell_size.height(),
        )
    }
}

impl Ord for CellCoord {
    /// Row-major ordering: rows first, then columns.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for CellCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The column and row count of a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    columns: usize,
    rows: usize,
}

impl Dimensions {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    pub fn columns(self) -> usize {
        self.columns
    }

    pub fn rows(self) -> usize {
        self.rows
    }

    /// Returns true if there is at least one column and one row
    pub fn is_positive(self) -> bool {
        self.columns > 0 && self.rows > 0
    }

    /// Returns true if `coord` addresses a cell inside these dimensions
    pub fn contains(self, coord: CellCoord) -> bool {
        coord.x < self.columns && coord.y < self.rows
    }

    /// Returns the pixel size spanned by these dimensions for the given cell size.
    pub fn span(self, cell_size: Size) -> Size {
        Size::new(
            self.columns as f32 * cell_size.width(),
            self.rows as f32 * cell_size.height(),
        )
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
