use crate::error::{Result, TopologyError};
use crate::index::SpatialIndex;
use crate::topology::{EdgeId, FaceId, TopologyStore};

/// Appends an edge at the end of a face loop, between `last` and `first`.
///
/// Only the appended edge gets an arc length (from its new predecessor), so
/// the existing edges stay valid. The edge is registered in the index.
pub struct AppendEdge {
    face: FaceId,
    edge: EdgeId,
}

impl AppendEdge {
    /// Creates a new `AppendEdge` operation.
    #[must_use]
    pub fn new(face: FaceId, edge: EdgeId) -> Self {
        Self { face, edge }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or edge is not found, or if the edge is
    /// already linked into a loop.
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
        let face = store.face(self.face)?;

        if let (Some(first), Some(last)) = (face.first, face.last) {
            let predecessor = store.edge(last)?;
            let arc_length = predecessor.arc_length + predecessor.length();
            store.link_edges(last, self.edge)?;
            store.link_edges(self.edge, first)?;
            store.edge_mut(self.edge)?.arc_length = arc_length;
            store.face_mut(self.face)?.last = Some(self.edge);
        } else {
            store.link_edges(self.edge, self.edge)?;
            store.edge_mut(self.edge)?.arc_length = 0.0;
            store
                .face_mut(self.face)?
                .set_entries(Some(self.edge), Some(self.edge));
        }

        store.edge_mut(self.edge)?.face = Some(self.face);
        store.face(self.face)?.invalidate();
        index.insert(self.edge, bbox);
        tracing::trace!(face = ?self.face, edge = ?self.edge, "edge appended");
        Ok(())
    }
}
