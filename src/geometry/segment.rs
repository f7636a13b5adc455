use crate::math::{Point2, Vector2};

use super::Box2;

/// A straight boundary piece from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a segment. Zero-length segments are allowed.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns the direction vector `end - start`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Returns the bounding box.
    #[must_use]
    pub fn bbox(&self) -> Box2 {
        Box2::new(self.start, self.end)
    }

    /// Trapezoid integral `∫ (y - ymin) dx` from start to end.
    #[must_use]
    pub fn definite_integral(&self, ymin: f64) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy1 = self.start.y - ymin;
        let dy2 = self.end.y - ymin;
        dx * (dy1 + dy2) / 2.0
    }

    /// Returns the same segment walked the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Path fragment continuing from the start point.
    #[must_use]
    pub fn svg_fragment(&self) -> String {
        format!(" L{},{}", self.end.x, self.end.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn length_3_4_5() {
        assert!((seg(0.0, 0.0, 3.0, 4.0).length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn bbox_of_descending_segment() {
        let b = seg(2.0, 3.0, -1.0, 1.0).bbox();
        assert_eq!(b.min, Point2::new(-1.0, 1.0));
        assert_eq!(b.max, Point2::new(2.0, 3.0));
    }

    #[test]
    fn integral_is_trapezoid_area() {
        // Top edge of a unit square walked right to left.
        let s = seg(1.0, 1.0, 0.0, 1.0);
        assert!((s.definite_integral(0.0) + 1.0).abs() < 1e-12);
        // Relative to ymin = 1 the same edge sweeps no area.
        assert!(s.definite_integral(1.0).abs() < 1e-12);
        // Vertical edges contribute nothing.
        assert!(seg(1.0, 0.0, 1.0, 1.0).definite_integral(0.0).abs() < 1e-12);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let s = seg(0.0, 0.0, 1.0, 2.0);
        let r = s.reversed();
        assert_eq!(r.start(), s.end());
        assert_eq!(r.end(), s.start());
        assert_eq!(r.reversed(), s);
    }

    #[test]
    fn svg_fragment_is_line_to() {
        assert_eq!(seg(0.0, 0.0, 1.5, -2.0).svg_fragment(), " L1.5,-2");
    }
}
