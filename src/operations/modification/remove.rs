use crate::error::{Result, TopologyError};
use crate::index::SpatialIndex;
use crate::topology::{EdgeData, EdgeId, FaceId, TopologyStore};

/// Detaches an edge from its face, drops it from the index and the store.
///
/// Edges after the removed one keep their arc lengths; unless the removed
/// edge was `last`, the face is flagged stale.
pub struct RemoveEdge {
    face: FaceId,
    edge: EdgeId,
}

impl RemoveEdge {
    /// Creates a new `RemoveEdge` operation.
    #[must_use]
    pub fn new(face: FaceId, edge: EdgeId) -> Self {
        Self { face, edge }
    }

    /// Executes the operation, returning the detached edge data.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge no longer exists (e.g. removed twice) or
    /// does not belong to the face.
    pub fn execute<I: SpatialIndex + ?Sized>(
        &self,
        store: &mut TopologyStore,
        index: &mut I,
    ) -> Result<EdgeData> {
        if store.edge(self.edge)?.face != Some(self.face) {
            return Err(TopologyError::EdgeNotInFace.into());
        }
        let face = store.face(self.face)?;
        let (first, last) = (face.first, face.last);

        let shifted = if first == Some(self.edge) && last == Some(self.edge) {
            store.face_mut(self.face)?.set_entries(None, None);
            false
        } else {
            let prev = store.prev_edge(self.edge)?;
            let next = store.next_edge(self.edge)?;
            store.link_edges(prev, next)?;
            let face = store.face_mut(self.face)?;
            if first == Some(self.edge) {
                face.first = Some(next);
            }
            if last == Some(self.edge) {
                face.last = Some(prev);
            }
            last != Some(self.edge)
        };

        let face = store.face_mut(self.face)?;
        face.invalidate();
        if face.is_empty() {
            face.set_arc_length_stale(false);
        } else if shifted {
            face.set_arc_length_stale(true);
        }

        index.remove(self.edge);
        let mut data = store.remove_edge(self.edge)?;
        data.unlink();
        tracing::debug!(face = ?self.face, edge = ?self.edge, "edge removed");
        Ok(data)
    }
}
