use std::cell::Cell;

use crate::geometry::Box2;

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Rotational sense of a closed loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Clockwise.
    Cw,
    /// Counter-clockwise.
    Ccw,
    /// Zero signed area; the loop has no usable sense.
    NotOrientable,
}

impl Orientation {
    /// Orientation of the same loop walked backwards.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Cw => Self::Ccw,
            Self::Ccw => Self::Cw,
            Self::NotOrientable => Self::NotOrientable,
        }
    }
}

/// Data associated with a face.
///
/// A face is a closed loop of edges. The loop links live on the edges; the
/// face only records the entry points, both absent for an empty face.
///
/// Derived values are cached lazily:
/// - the bounding box is cleared by append, insert and remove, and kept by
///   reverse (a loop's box does not depend on its direction);
/// - the orientation is cleared by append, insert and remove, and flipped by
///   reverse;
/// - edge arc lengths go stale after insert and remove until the whole loop
///   is recomputed, which [`FaceData::arc_length_stale`] reports.
#[derive(Debug, Clone, Default)]
pub struct FaceData {
    /// Entry edge; arc lengths are measured from its start.
    pub first: Option<EdgeId>,
    /// Edge preceding `first` in the loop.
    pub last: Option<EdgeId>,
    bbox: Cell<Option<Box2>>,
    orientation: Cell<Option<Orientation>>,
    arc_length_stale: bool,
}

impl FaceData {
    /// Creates an empty face.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    #[must_use]
    pub fn cached_bbox(&self) -> Option<Box2> {
        self.bbox.get()
    }

    pub(crate) fn cache_bbox(&self, bbox: Box2) {
        self.bbox.set(Some(bbox));
    }

    #[must_use]
    pub fn cached_orientation(&self) -> Option<Orientation> {
        self.orientation.get()
    }

    pub(crate) fn cache_orientation(&self, orientation: Orientation) {
        self.orientation.set(Some(orientation));
    }

    /// Returns whether some edge arc lengths may be out of date.
    #[must_use]
    pub fn arc_length_stale(&self) -> bool {
        self.arc_length_stale
    }

    pub(crate) fn set_arc_length_stale(&mut self, stale: bool) {
        self.arc_length_stale = stale;
    }

    /// Drops every geometric cache after the loop changed shape.
    pub(crate) fn invalidate(&self) {
        self.bbox.set(None);
        self.orientation.set(None);
    }

    pub(crate) fn set_entries(&mut self, first: Option<EdgeId>, last: Option<EdgeId>) {
        self.first = first;
        self.last = last;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn flipped_swaps_sense() {
        assert_eq!(Orientation::Cw.flipped(), Orientation::Ccw);
        assert_eq!(Orientation::Ccw.flipped(), Orientation::Cw);
        assert_eq!(Orientation::NotOrientable.flipped(), Orientation::NotOrientable);
    }

    #[test]
    fn new_face_is_empty_and_uncached() {
        let face = FaceData::new();
        assert!(face.is_empty());
        assert!(face.cached_bbox().is_none());
        assert!(face.cached_orientation().is_none());
        assert!(!face.arc_length_stale());
    }

    #[test]
    fn invalidate_clears_caches() {
        let face = FaceData::new();
        face.cache_bbox(Box2::from_point(Point2::new(1.0, 1.0)));
        face.cache_orientation(Orientation::Cw);
        face.invalidate();
        assert!(face.cached_bbox().is_none());
        assert!(face.cached_orientation().is_none());
    }
}
