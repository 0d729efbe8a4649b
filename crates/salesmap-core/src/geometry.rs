//! Geometric primitives: `Point`, `Size`, `Bounds`.
//!
//! Layout works in corner form ([`Bounds`], `x0,y0,x1,y1`). Everything uses
//! `f64` so pixel positions match what a browser receives for SVG attributes.

use serde::{Deserialize, Serialize};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by a fixed offset.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both extents are finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Axis-aligned box in corner form, as produced by the treemap layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge
    pub x0: f64,
    /// Top edge
    pub y0: f64,
    /// Right edge
    pub x1: f64,
    /// Bottom edge
    pub y1: f64,
}

impl Bounds {
    /// Create bounds from corner coordinates.
    #[must_use]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Bounds covering `size` at the origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Covered area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True when `x1 >= x0` and `y1 >= y0`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.x1 >= self.x0 && self.y1 >= self.y0
    }

    /// Shrink every side by `amount`. An axis that would invert collapses to
    /// its midline instead.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        let (mut x0, mut y0, mut x1, mut y1) = (
            self.x0 + amount,
            self.y0 + amount,
            self.x1 - amount,
            self.y1 - amount,
        );
        if x1 < x0 {
            let mid = (x0 + x1) / 2.0;
            x0 = mid;
            x1 = mid;
        }
        if y1 < y0 {
            let mid = (y0 + y1) / 2.0;
            y0 = mid;
            y1 = mid;
        }
        Self::new(x0, y0, x1, y1)
    }

    /// Area shared with `other` (zero when disjoint or touching).
    #[must_use]
    pub fn overlap_area(&self, other: &Self) -> f64 {
        let w = self.x1.min(other.x1) - self.x0.max(other.x0);
        let h = self.y1.min(other.y1) - self.y0.max(other.y0);
        if w > 0.0 && h > 0.0 {
            w * h
        } else {
            0.0
        }
    }

    /// True when `other` lies inside these bounds, allowing `epsilon` slack.
    #[must_use]
    pub fn contains(&self, other: &Self, epsilon: f64) -> bool {
        other.x0 >= self.x0 - epsilon
            && other.y0 >= self.y0 - epsilon
            && other.x1 <= self.x1 + epsilon
            && other.y1 <= self.y1 + epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_offset() {
        assert_eq!(Point::new(3.0, 4.0).offset(10.0, 10.0), Point::new(13.0, 14.0));
    }

    #[test]
    fn test_size_validity() {
        assert!(Size::new(1000.0, 720.0).is_valid());
        assert!(Size::ZERO.is_valid());
        assert!(!Size::new(-1.0, 10.0).is_valid());
        assert!(!Size::new(f64::NAN, 10.0).is_valid());
        assert!(!Size::new(10.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_bounds_inset() {
        let b = Bounds::new(0.0, 0.0, 10.0, 20.0).inset(1.0);
        assert_eq!(b, Bounds::new(1.0, 1.0, 9.0, 19.0));
    }

    #[test]
    fn test_bounds_inset_collapses_to_midline() {
        let b = Bounds::new(0.0, 0.0, 1.0, 20.0).inset(1.0);
        assert_eq!(b.x0, 0.5);
        assert_eq!(b.x1, 0.5);
        assert_eq!(b.width(), 0.0);
        assert!(b.is_ordered());
    }

    #[test]
    fn test_bounds_overlap_area() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(a.overlap_area(&b), 25.0);

        let touching = Bounds::new(10.0, 0.0, 20.0, 10.0);
        assert_eq!(a.overlap_area(&touching), 0.0);
    }

    #[test]
    fn test_bounds_contains() {
        let outer = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Bounds::new(10.0, 10.0, 20.0, 20.0), 0.0));
        assert!(outer.contains(&Bounds::new(0.0, 0.0, 100.000_000_1, 100.0), 1e-6));
        assert!(!outer.contains(&Bounds::new(90.0, 90.0, 110.0, 100.0), 1e-6));
    }
}
