use crate::error::Result;
use crate::topology::{FaceId, TopologyStore};

/// Counts the edges of a face by walking its loop.
///
/// Not cached; every call is a full traversal.
pub struct FaceSize {
    face: FaceId,
}

impl FaceSize {
    /// Creates a new `FaceSize` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query, returning the edge count.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn execute(&self, store: &TopologyStore) -> Result<usize> {
        Ok(store.loop_edges(self.face)?.len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::index::RTreeIndex;
    use crate::math::Point2;
    use crate::operations::creation::{FaceSource, MakeFace};

    #[test]
    fn counts_edges() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let triangle = MakeFace::new(FaceSource::Points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        ]))
        .execute(&mut store, &mut index)
        .unwrap();
        let empty = MakeFace::new(FaceSource::Points(Vec::new()))
            .execute(&mut store, &mut index)
            .unwrap();

        assert_eq!(FaceSize::new(triangle).execute(&store).unwrap(), 3);
        assert_eq!(FaceSize::new(empty).execute(&store).unwrap(), 0);
    }
}
