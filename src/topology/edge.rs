use crate::geometry::{Box2, Shape};
use crate::math::Point2;

use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// Data associated with an edge.
///
/// An edge wraps one boundary piece and carries the loop links that chain
/// it into a face. Links are handles into the same store; an edge that has
/// not been linked yet has no neighbours and no face.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// The boundary piece.
    pub shape: Shape,
    /// Previous edge in the loop.
    pub prev: Option<EdgeId>,
    /// Next edge in the loop.
    pub next: Option<EdgeId>,
    /// Face whose loop holds this edge.
    pub face: Option<FaceId>,
    /// Boundary length from the face's first edge to this edge's start.
    pub arc_length: f64,
}

impl EdgeData {
    /// Creates an unlinked edge around a shape.
    #[must_use]
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            prev: None,
            next: None,
            face: None,
            arc_length: 0.0,
        }
    }

    /// Returns whether the edge is chained into a loop or owned by a face.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.prev.is_some() || self.next.is_some() || self.face.is_some()
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.shape.start()
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.shape.end()
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.shape.length()
    }

    #[must_use]
    pub fn bbox(&self) -> Box2 {
        self.shape.bbox()
    }

    pub(crate) fn unlink(&mut self) {
        self.prev = None;
        self.next = None;
        self.face = None;
    }
}
