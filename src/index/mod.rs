use rstar::{RTree, RTreeObject, AABB};
use slotmap::SecondaryMap;

use crate::geometry::Box2;
use crate::topology::EdgeId;

/// Broad-phase index over a polygon's edges.
///
/// One index is shared by every face of a polygon and passed explicitly to
/// each operation that registers, drops or looks up edges.
pub trait SpatialIndex {
    /// Registers an edge under `bbox`. Registering an edge again replaces its box.
    fn insert(&mut self, edge: EdgeId, bbox: Box2);

    /// Drops an edge. Returns `false` if it was not registered.
    fn remove(&mut self, edge: EdgeId) -> bool;

    /// Edges whose boxes overlap `bbox` (touching counts).
    fn search(&self, bbox: &Box2) -> Vec<EdgeId>;

    /// Returns whether the edge is registered.
    fn contains(&self, edge: EdgeId) -> bool;

    /// Number of registered edges.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Box2> for AABB<[f64; 2]> {
    fn from(bbox: Box2) -> Self {
        AABB::from_corners([bbox.min.x, bbox.min.y], [bbox.max.x, bbox.max.y])
    }
}

/// An edge handle stored in the R-tree together with its box.
#[derive(Debug, Clone, PartialEq)]
struct IndexedEdge {
    edge: EdgeId,
    bbox: Box2,
}

impl RTreeObject for IndexedEdge {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.bbox.into()
    }
}

/// [`SpatialIndex`] backed by an R-tree.
///
/// The registered box of every edge is remembered, so removal finds the
/// tree entry even after the edge's shape has been replaced.
#[derive(Debug, Clone, Default)]
pub struct RTreeIndex {
    tree: RTree<IndexedEdge>,
    boxes: SecondaryMap<EdgeId, Box2>,
}

impl RTreeIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpatialIndex for RTreeIndex {
    fn insert(&mut self, edge: EdgeId, bbox: Box2) {
        self.remove(edge);
        self.tree.insert(IndexedEdge { edge, bbox });
        self.boxes.insert(edge, bbox);
        tracing::trace!(?edge, "edge registered in index");
    }

    fn remove(&mut self, edge: EdgeId) -> bool {
        let Some(bbox) = self.boxes.remove(edge) else {
            return false;
        };
        self.tree.remove(&IndexedEdge { edge, bbox }).is_some()
    }

    fn search(&self, bbox: &Box2) -> Vec<EdgeId> {
        let envelope: AABB<[f64; 2]> = (*bbox).into();
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.edge)
            .collect()
    }

    fn contains(&self, edge: EdgeId) -> bool {
        self.boxes.contains_key(edge)
    }

    fn len(&self) -> usize {
        self.boxes.len()
    }
}
