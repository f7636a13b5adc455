use crate::error::Result;
use crate::geometry::Box2;
use crate::topology::{FaceId, TopologyStore};

/// Computes the bounding box of a face as the union of its edge boxes.
///
/// The result is cached on the face and served from the cache until a
/// structural mutation clears it. An empty face has no box.
pub struct FaceBox {
    face: FaceId,
}

impl FaceBox {
    /// Creates a new `FaceBox` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn execute(&self, store: &TopologyStore) -> Result<Option<Box2>> {
        let face = store.face(self.face)?;
        if let Some(bbox) = face.cached_bbox() {
            return Ok(Some(bbox));
        }

        let mut bbox: Option<Box2> = None;
        for id in store.loop_edges(self.face)? {
            let edge_box = store.edge(id)?.bbox();
            bbox = Some(bbox.map_or(edge_box, |b| b.merge(&edge_box)));
        }
        if let Some(bbox) = bbox {
            face.cache_bbox(bbox);
        }
        Ok(bbox)
    }
}
