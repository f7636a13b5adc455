pub mod edge;
pub mod face;
pub mod walk;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId, Orientation};
pub use walk::FaceEdges;

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns every edge and face of a polygon.
///
/// Edges and faces reference each other via typed IDs (generational
/// indices), so the cyclic loop structure never needs shared ownership.
#[derive(Debug, Default, Clone)]
pub struct TopologyStore {
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Returns a mutable reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, TopologyError> {
        self.edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Removes an edge from the store and returns its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<EdgeData, TopologyError> {
        self.edges
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Number of edges in the store, across all faces.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Chains `from → to`: sets `from.next` and `to.prev`.
    ///
    /// Used by boundary algorithms to pre-link a loop before handing it to a face.
    ///
    /// # Errors
    ///
    /// Returns an error if either edge is not found in the store.
    pub fn link_edges(&mut self, from: EdgeId, to: EdgeId) -> Result<(), TopologyError> {
        self.edge(to)?;
        self.edge_mut(from)?.next = Some(to);
        self.edge_mut(to)?.prev = Some(from);
        Ok(())
    }

    /// Returns the edge following `id` in its loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is missing or not linked.
    pub fn next_edge(&self, id: EdgeId) -> Result<EdgeId, TopologyError> {
        self.edge(id)?
            .next
            .ok_or_else(|| TopologyError::CorruptLoop("edge has no successor".into()))
    }

    /// Returns the edge preceding `id` in its loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is missing or not linked.
    pub fn prev_edge(&self, id: EdgeId) -> Result<EdgeId, TopologyError> {
        self.edge(id)?
            .prev
            .ok_or_else(|| TopologyError::CorruptLoop("edge has no predecessor".into()))
    }

    // --- Face operations ---

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Returns a mutable reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, TopologyError> {
        self.faces
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Removes a face record. Its edges are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn remove_face(&mut self, id: FaceId) -> Result<FaceData, TopologyError> {
        self.faces
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// IDs of all faces, in arena order.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.keys()
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    // --- Loop traversal ---

    /// Lenient iterator over a face's edges, starting at `first`.
    ///
    /// Stops early on a broken link and never yields more edges than the
    /// store holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found in the store.
    pub fn face_edges(&self, face: FaceId) -> Result<FaceEdges<'_>, TopologyError> {
        let first = self.face(face)?.first;
        Ok(FaceEdges::new(self, first))
    }

    /// Strict traversal of a face's loop.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::CorruptLoop`] if a link is missing or the walk
    /// does not return to `first` within the store's edge count.
    pub fn loop_edges(&self, face: FaceId) -> Result<Vec<EdgeId>, TopologyError> {
        let Some(first) = self.face(face)?.first else {
            return Ok(Vec::new());
        };
        let mut edges = Vec::new();
        let mut current = first;
        loop {
            if edges.len() >= self.edges.len() {
                return Err(TopologyError::CorruptLoop(
                    "walk does not return to the first edge".into(),
                ));
            }
            edges.push(current);
            current = self.next_edge(current)?;
            if current == first {
                return Ok(edges);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Segment;
    use crate::math::Point2;

    fn edge(x0: f64, y0: f64, x1: f64, y1: f64) -> EdgeData {
        EdgeData::new(Segment::new(Point2::new(x0, y0), Point2::new(x1, y1)))
    }

    #[test]
    fn missing_entities_are_errors() {
        let mut store = TopologyStore::new();
        let e = store.add_edge(edge(0.0, 0.0, 1.0, 0.0));
        store.remove_edge(e).unwrap();
        assert!(store.edge(e).is_err());
        assert!(store.remove_edge(e).is_err());
        let f = store.add_face(FaceData::new());
        store.remove_face(f).unwrap();
        assert!(store.face(f).is_err());
    }

    #[test]
    fn link_edges_sets_both_sides() {
        let mut store = TopologyStore::new();
        let a = store.add_edge(edge(0.0, 0.0, 1.0, 0.0));
        let b = store.add_edge(edge(1.0, 0.0, 0.0, 0.0));
        store.link_edges(a, b).unwrap();
        assert_eq!(store.next_edge(a).unwrap(), b);
        assert_eq!(store.prev_edge(b).unwrap(), a);
        assert!(store.next_edge(b).is_err());
    }

    #[test]
    fn loop_edges_detects_open_chain() {
        let mut store = TopologyStore::new();
        let a = store.add_edge(edge(0.0, 0.0, 1.0, 0.0));
        let b = store.add_edge(edge(1.0, 0.0, 0.0, 0.0));
        store.link_edges(a, b).unwrap();
        let face = store.add_face(FaceData::new());
        store.face_mut(face).unwrap().set_entries(Some(a), Some(b));
        assert!(store.loop_edges(face).is_err());
        // The lenient walk stops at the break.
        assert_eq!(store.face_edges(face).unwrap().count(), 2);

        store.link_edges(b, a).unwrap();
        assert_eq!(store.loop_edges(face).unwrap(), vec![a, b]);
    }

    #[test]
    fn empty_face_walks_nothing() {
        let mut store = TopologyStore::new();
        let face = store.add_face(FaceData::new());
        assert!(store.loop_edges(face).unwrap().is_empty());
        assert_eq!(store.face_edges(face).unwrap().count(), 0);
    }
}
