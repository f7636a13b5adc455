use crate::error::Result;
use crate::topology::{FaceId, TopologyStore};

use super::SetArcLength;

/// Reverses the direction of a face loop.
///
/// Every shape is replaced by its reversal and the loop is relinked so that
/// the old `last` edge becomes `first`. Arc lengths are recomputed from zero.
/// A cached orientation is flipped; the bounding box cache is kept since a
/// loop's box does not depend on its direction. Edge boxes are unchanged,
/// so the index needs no update.
pub struct ReverseFace {
    face: FaceId,
}

impl ReverseFace {
    /// Creates a new `ReverseFace` operation.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        let mut edges = store.loop_edges(self.face)?;
        if edges.is_empty() {
            return Ok(());
        }
        edges.reverse();

        let n = edges.len();
        for (i, id) in edges.iter().enumerate() {
            let edge = store.edge_mut(*id)?;
            edge.shape = edge.shape.reversed();
            edge.next = Some(edges[(i + 1) % n]);
            edge.prev = Some(edges[(i + n - 1) % n]);
        }

        let face = store.face_mut(self.face)?;
        face.set_entries(edges.first().copied(), edges.last().copied());
        if let Some(orientation) = face.cached_orientation() {
            face.cache_orientation(orientation.flipped());
        }

        SetArcLength::new(self.face).execute(store)?;
        tracing::debug!(face = ?self.face, edges = n, "face reversed");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Arc, Segment, Shape};
    use crate::index::RTreeIndex;
    use crate::math::Point2;
    use crate::operations::creation::{FaceSource, MakeFace};
    use crate::operations::query::{FaceBox, FaceOrientation};
    use crate::topology::Orientation;

    fn shapes_of(store: &TopologyStore, face: FaceId) -> Vec<Shape> {
        store
            .loop_edges(face)
            .unwrap()
            .iter()
            .map(|e| store.edge(*e).unwrap().shape)
            .collect()
    }

    fn half_disc() -> Vec<Shape> {
        let left = Point2::new(-1.0, 0.0);
        let right = Point2::new(1.0, 0.0);
        vec![
            Segment::new(left, right).into(),
            Arc::through(right, left, Point2::origin(), true).unwrap().into(),
        ]
    }

    #[test]
    fn reverse_walks_backwards() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let face = MakeFace::new(FaceSource::Shapes(half_disc()))
            .execute(&mut store, &mut index)
            .unwrap();
        let before = store.loop_edges(face).unwrap();

        ReverseFace::new(face).execute(&mut store).unwrap();

        let after = store.loop_edges(face).unwrap();
        assert_eq!(after, vec![before[1], before[0]]);
        let shapes = shapes_of(&store, face);
        assert_eq!(shapes[0].start(), Point2::new(-1.0, 0.0));
        assert_eq!(shapes[0].end(), Point2::new(1.0, 0.0));
        assert!(matches!(shapes[0], Shape::Arc(a) if !a.is_ccw()));
        assert!(store.edge(after[0]).unwrap().arc_length.abs() < f64::EPSILON);
        assert!((store.edge(after[1]).unwrap().arc_length - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn reverse_twice_restores_loop() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let face = MakeFace::new(FaceSource::Shapes(half_disc()))
            .execute(&mut store, &mut index)
            .unwrap();
        let original = shapes_of(&store, face);

        ReverseFace::new(face).execute(&mut store).unwrap();
        ReverseFace::new(face).execute(&mut store).unwrap();

        assert_eq!(shapes_of(&store, face), original);
    }

    #[test]
    fn cached_orientation_flips_and_box_survives() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let face = MakeFace::new(FaceSource::Points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]))
        .execute(&mut store, &mut index)
        .unwrap();
        let orientation = FaceOrientation::new(face).execute(&store).unwrap();
        assert_eq!(orientation, Orientation::Ccw);
        let bbox = FaceBox::new(face).execute(&store).unwrap();

        ReverseFace::new(face).execute(&mut store).unwrap();

        let f = store.face(face).unwrap();
        assert_eq!(f.cached_orientation(), Some(Orientation::Cw));
        assert_eq!(f.cached_bbox(), bbox);
        assert_eq!(FaceOrientation::new(face).execute(&store).unwrap(), Orientation::Cw);
    }
}
