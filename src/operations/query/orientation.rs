use crate::error::Result;
use crate::math::Tolerance;
use crate::topology::{FaceId, Orientation, TopologyStore};

use super::SignedArea;

/// Classifies the winding of a face from its signed area.
///
/// The result is cached on the face. A cached value is returned as is, so
/// a tolerance passed on a later call only matters after the cache has been
/// cleared by a structural mutation.
pub struct FaceOrientation {
    face: FaceId,
    tolerance: Tolerance,
}

impl FaceOrientation {
    /// Creates a new `FaceOrientation` query with the default tolerance.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            tolerance: Tolerance::default(),
        }
    }

    /// Sets the tolerance below which the signed area counts as zero.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn execute(&self, store: &TopologyStore) -> Result<Orientation> {
        if let Some(orientation) = store.face(self.face)?.cached_orientation() {
            return Ok(orientation);
        }

        let area = SignedArea::new(self.face).execute(store)?;
        let orientation = if self.tolerance.is_zero(area) {
            tracing::warn!(face = ?self.face, area, "face is not orientable");
            Orientation::NotOrientable
        } else if area < 0.0 {
            Orientation::Ccw
        } else {
            Orientation::Cw
        };
        store.face(self.face)?.cache_orientation(orientation);
        Ok(orientation)
    }
}
