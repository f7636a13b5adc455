use crate::error::Result;
use crate::index::SpatialIndex;
use crate::math::Point2;
use crate::topology::{FaceId, TopologyStore};

/// Finds points where a face's boundary crosses itself.
///
/// Candidate pairs come from the spatial index (broad phase) and are then
/// intersected exactly (narrow phase). An edge is never tested against
/// itself, adjacent straight segments are skipped, and a hit lying exactly
/// on the joint shared with a neighbour is discarded. Every edge registered
/// in the index is a candidate, so crossings with other faces sharing the
/// index are reported too.
///
/// Tangential touches are not reliably reported. Each crossing is found
/// once from each of the two edges involved.
pub struct SelfIntersections {
    face: FaceId,
    exit_on_first: bool,
}

impl SelfIntersections {
    /// Creates a new `SelfIntersections` query that collects every hit.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            exit_on_first: false,
        }
    }

    /// Stops the scan at the first hit.
    #[must_use]
    pub fn exit_on_first(mut self, exit: bool) -> Self {
        self.exit_on_first = exit;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn execute<I: SpatialIndex + ?Sized>(
        &self,
        store: &TopologyStore,
        index: &I,
    ) -> Result<Vec<Point2>> {
        let mut hits = Vec::new();

        for e1 in store.loop_edges(self.face)? {
            let edge1 = store.edge(e1)?;
            let candidates = index.search(&edge1.bbox());
            tracing::trace!(edge = ?e1, candidates = candidates.len(), "broad phase");

            for e2 in candidates {
                if e2 == e1 {
                    continue;
                }
                let Ok(edge2) = store.edge(e2) else {
                    continue;
                };
                let is_prev = edge1.prev == Some(e2);
                let is_next = edge1.next == Some(e2);
                if (is_prev || is_next) && edge1.shape.is_segment() && edge2.shape.is_segment() {
                    continue;
                }

                for pt in edge1.shape.intersect(&edge2.shape) {
                    if is_prev && pt == edge1.start() && pt == edge2.end() {
                        continue;
                    }
                    if is_next && pt == edge1.end() && pt == edge2.start() {
                        continue;
                    }
                    hits.push(pt);
                    if self.exit_on_first {
                        return Ok(hits);
                    }
                }
            }
        }

        if !hits.is_empty() {
            tracing::debug!(face = ?self.face, count = hits.len(), "self-intersections found");
        }
        Ok(hits)
    }
}

/// Returns whether a face's boundary has no detected self-intersection.
pub struct IsSimple {
    face: FaceId,
}

impl IsSimple {
    /// Creates a new `IsSimple` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn execute<I: SpatialIndex + ?Sized>(&self, store: &TopologyStore, index: &I) -> Result<bool> {
        let hits = SelfIntersections::new(self.face)
            .exit_on_first(true)
            .execute(store, index)?;
        Ok(hits.is_empty())
    }
}
