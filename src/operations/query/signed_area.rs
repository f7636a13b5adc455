use crate::error::Result;
use crate::topology::{FaceId, TopologyStore};

use super::FaceBox;

/// Signed area of a face by Green's theorem.
///
/// Sums `∫ (y - ymin) dx` over the edges in traversal order, with `ymin`
/// taken from the face box. Negative means counter-clockwise, positive
/// clockwise. An empty face has zero area.
pub struct SignedArea {
    face: FaceId,
}

impl SignedArea {
    /// Creates a new `SignedArea` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let Some(bbox) = FaceBox::new(self.face).execute(store)? else {
            return Ok(0.0);
        };
        let ymin = bbox.min.y;
        let mut sum = 0.0;
        for id in store.loop_edges(self.face)? {
            sum += store.edge(id)?.shape.definite_integral(ymin);
        }
        Ok(sum)
    }
}

/// Unsigned area of a face.
pub struct Area {
    face: FaceId,
}

impl Area {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query, returning `|signed area|`.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        Ok(SignedArea::new(self.face).execute(store)?.abs())
    }
}
