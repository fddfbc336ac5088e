//! Geometric primitives for section analysis.
//!
//! # Coordinate System
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! A standard right-handed x-y frame with +y up: counter-clockwise vertex
//! winding encloses positive signed area. Rendering backends that use a
//! y-down convention (such as SVG) are responsible for flipping.

/// A 2D point representing a position in section coordinate space.
///
/// Points use `f64` coordinates and provide the small set of vector
/// operations the diagram geometry needs.
///
/// # Examples
///
/// ```
/// # use section_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(4.0, 8.0);
///
/// let diff = p1.sub_point(p2);
/// assert_eq!(diff.x(), 6.0);
/// assert_eq!(diff.y(), 12.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the point displaced by `distance` along direction `angle`
    /// (radians from the +x axis).
    pub fn offset_along(self, angle: f64, distance: f64) -> Self {
        Self {
            x: self.x + distance * angle.cos(),
            y: self.y + distance * angle.sin(),
        }
    }

    /// Returns this point rotated by `angle` radians about `center`.
    pub fn rotate_about(self, center: Point, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let d = self.sub_point(center);
        Self {
            x: center.x + d.x * cos - d.y * sin,
            y: center.y + d.x * sin + d.y * cos,
        }
    }
}

/// A rectangular bounding box with minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Computes the axis-aligned bounding box of a point sequence.
    ///
    /// Returns `None` for an empty sequence.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let seed = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points.iter().skip(1).fold(seed, |acc, p| acc.expand(*p)))
    }

    /// Returns the smallest bounds containing both `self` and `point`.
    pub fn expand(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Expands the bounds outward by a uniform margin on all sides.
    pub fn add_margin(self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}
