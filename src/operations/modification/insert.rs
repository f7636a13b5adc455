use crate::error::{Result, TopologyError};
use crate::index::SpatialIndex;
use crate::topology::{EdgeId, FaceId, TopologyStore};

/// Inserts an edge right after another edge of the same face.
///
/// When the anchor is the face's `last` edge the new edge becomes `first`.
/// Only the new edge receives an arc length; edges downstream of the
/// insertion point keep their old values and the face is flagged stale
/// until [`SetArcLength`](super::SetArcLength) runs.
pub struct InsertEdge {
    face: FaceId,
    edge: EdgeId,
    after: EdgeId,
}

impl InsertEdge {
    /// Creates a new `InsertEdge` operation placing `edge` after `after`.
    #[must_use]
    pub fn new(face: FaceId, edge: EdgeId, after: EdgeId) -> Self {
        Self { face, edge, after }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the new edge is already linked, or if the anchor
    /// edge does not belong to the face.
    pub fn execute<I: SpatialIndex + ?Sized>(
        &self,
        store: &mut TopologyStore,
        index: &mut I,
    ) -> Result<()> {
        let data = store.edge(self.edge)?;
        if data.is_linked() {
            return Err(TopologyError::EdgeAlreadyLinked.into());
        }
        let bbox = data.bbox();
        if store.edge(self.after)?.face != Some(self.face) {
            return Err(TopologyError::EdgeNotInFace.into());
        }
        let becomes_first = store.face(self.face)?.last == Some(self.after);

        let next = store.next_edge(self.after)?;
        store.link_edges(self.after, self.edge)?;
        store.link_edges(self.edge, next)?;

        let arc_length = if becomes_first {
            0.0
        } else {
            let predecessor = store.edge(self.after)?;
            predecessor.arc_length + predecessor.length()
        };
        let edge = store.edge_mut(self.edge)?;
        edge.arc_length = arc_length;
        edge.face = Some(self.face);

        let face = store.face_mut(self.face)?;
        if becomes_first {
            face.first = Some(self.edge);
        }
        face.invalidate();
        face.set_arc_length_stale(true);

        index.insert(self.edge, bbox);
        tracing::debug!(face = ?self.face, edge = ?self.edge, after = ?self.after, "edge inserted");
        Ok(())
    }
}
