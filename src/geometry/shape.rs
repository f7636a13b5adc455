use crate::math::intersect_2d::{
    arc_arc_intersect_2d, segment_arc_intersect_2d, segment_segment_intersect_2d,
};
use crate::math::{Point2, TOLERANCE};

use super::{Arc, Box2, Segment, ShapeRecord};

/// Distance under which an intersection point is moved onto a shape endpoint.
pub(crate) const SNAP_DISTANCE: f64 = TOLERANCE * 100.0;

/// One boundary piece of a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A straight segment.
    Segment(Segment),
    /// A circular arc.
    Arc(Arc),
}

impl From<Segment> for Shape {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Arc> for Shape {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl Shape {
    #[must_use]
    pub fn is_segment(&self) -> bool {
        matches!(self, Self::Segment(_))
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            Self::Segment(s) => s.start(),
            Self::Arc(a) => a.start(),
        }
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::Segment(s) => s.end(),
            Self::Arc(a) => a.end(),
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Segment(s) => s.length(),
            Self::Arc(a) => a.length(),
        }
    }

    #[must_use]
    pub fn bbox(&self) -> Box2 {
        match self {
            Self::Segment(s) => s.bbox(),
            Self::Arc(a) => a.bbox(),
        }
    }

    /// `∫ (y - ymin) dx` along the shape in its direction of travel.
    #[must_use]
    pub fn definite_integral(&self, ymin: f64) -> f64 {
        match self {
            Self::Segment(s) => s.definite_integral(ymin),
            Self::Arc(a) => a.definite_integral(ymin),
        }
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::Segment(s) => Self::Segment(s.reversed()),
            Self::Arc(a) => Self::Arc(a.reversed()),
        }
    }

    /// Same shape ending exactly at `end`, which must be within rounding of
    /// the current end.
    #[must_use]
    pub(crate) fn with_end(&self, end: Point2) -> Self {
        match self {
            Self::Segment(s) => Self::Segment(Segment::new(s.start(), end)),
            Self::Arc(a) => Self::Arc(a.with_end(end)),
        }
    }

    #[must_use]
    pub fn svg_fragment(&self) -> String {
        match self {
            Self::Segment(s) => s.svg_fragment(),
            Self::Arc(a) => a.svg_fragment(),
        }
    }

    /// Serialized form of the shape.
    #[must_use]
    pub fn to_record(&self) -> ShapeRecord {
        ShapeRecord::from(self)
    }

    /// Intersection points of two shapes.
    ///
    /// Points within a hair of an endpoint of either shape are snapped onto
    /// that endpoint, so loop joints compare exactly equal.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Vec<Point2> {
        let raw: Vec<Point2> = match (self, other) {
            (Self::Segment(a), Self::Segment(b)) => {
                segment_segment_intersect_2d(&a.start(), &a.end(), &b.start(), &b.end())
                    .map(|(pt, _, _)| vec![pt])
                    .unwrap_or_default()
            }
            (Self::Segment(s), Self::Arc(a)) | (Self::Arc(a), Self::Segment(s)) => {
                segment_arc_intersect_2d(&s.start(), &s.end(), &a.span())
                    .into_iter()
                    .map(|(pt, _, _)| pt)
                    .collect()
            }
            (Self::Arc(a), Self::Arc(b)) => arc_arc_intersect_2d(&a.span(), &b.span())
                .into_iter()
                .map(|(pt, _, _)| pt)
                .collect(),
        };

        let endpoints = [self.start(), self.end(), other.start(), other.end()];
        raw.into_iter()
            .map(|pt| snap_to_endpoints(pt, &endpoints))
            .collect()
    }
}

fn snap_to_endpoints(pt: Point2, endpoints: &[Point2]) -> Point2 {
    endpoints
        .iter()
        .map(|e| (e, (e - pt).norm()))
        .filter(|(_, d)| *d < SNAP_DISTANCE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(pt, |(e, _)| *e)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1)).into()
    }

    #[test]
    fn crossing_segments() {
        let pts = seg(0.0, 0.0, 1.0, 1.0).intersect(&seg(1.0, 0.0, 0.0, 1.0));
        assert_eq!(pts.len(), 1);
        assert!((pts[0].x - 0.5).abs() < 1e-12);
        assert!((pts[0].y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn segment_meets_arc_at_exact_endpoints() {
        let arc: Shape = Arc::through(
            Point2::new(1.0, 0.0),
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, 0.0),
            true,
        )
        .unwrap()
        .into();
        let chord = seg(-1.0, 0.0, 1.0, 0.0);
        let pts = chord.intersect(&arc);
        assert_eq!(pts.len(), 2);
        assert!(pts.contains(&Point2::new(-1.0, 0.0)));
        assert!(pts.contains(&Point2::new(1.0, 0.0)));
        // Symmetric dispatch.
        assert_eq!(arc.intersect(&chord).len(), 2);
    }

    #[test]
    fn snapping_pulls_near_hits_onto_endpoint() {
        let end = Point2::new(1.0, 1.0);
        let near = Point2::new(1.0 + 1e-12, 1.0);
        assert_eq!(snap_to_endpoints(near, &[Point2::new(0.0, 0.0), end]), end);
        let far = Point2::new(0.5, 0.5);
        assert_eq!(snap_to_endpoints(far, &[end]), far);
    }

    #[test]
    fn dispatch_matches_primitives() {
        let arc = Arc::new(Point2::new(0.0, 0.0), 2.0, 0.0, PI / 2.0, true).unwrap();
        let shape = Shape::from(arc);
        assert!(!shape.is_segment());
        assert!((shape.length() - PI).abs() < 1e-12);
        assert_eq!(shape.start(), arc.start());
        assert_eq!(shape.reversed().end(), arc.start());
        assert!(seg(0.0, 0.0, 1.0, 0.0).is_segment());
    }
}
