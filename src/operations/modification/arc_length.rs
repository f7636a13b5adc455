use crate::error::Result;
use crate::topology::{FaceId, TopologyStore};

/// Recomputes the arc length of every edge of a face in one walk.
///
/// `first` gets 0 and every following edge its predecessor's arc length plus
/// the predecessor's length. Face back-references are reasserted on the way.
/// This is the only operation that clears the face's stale flag after
/// insert or remove.
pub struct SetArcLength {
    face: FaceId,
}

impl SetArcLength {
    /// Creates a new `SetArcLength` operation.
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
        let edges = store.loop_edges(self.face)?;
        let mut arc_length = 0.0;
        for id in &edges {
            let edge = store.edge_mut(*id)?;
            edge.arc_length = arc_length;
            edge.face = Some(self.face);
            arc_length += edge.length();
        }
        store.face_mut(self.face)?.set_arc_length_stale(false);
        tracing::trace!(face = ?self.face, edges = edges.len(), perimeter = arc_length, "arc lengths recomputed");
        Ok(())
    }
}
