use crate::error::{Result, TopologyError};
use crate::topology::{FaceId, TopologyStore};

/// Verifies the structural invariants of a face loop.
///
/// An empty face must have neither entry. Otherwise `first.prev == last`,
/// `last.next == first`, every `next`/`prev` pair must agree, and every
/// edge must point back at the face.
pub struct CheckLoop {
    face: FaceId,
}

impl CheckLoop {
    /// Creates a new `CheckLoop` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the check.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::CorruptLoop`] naming the first violated
    /// invariant, or an error if the face is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<()> {
        let face = store.face(self.face)?;
        let (first, last) = match (face.first, face.last) {
            (None, None) => return Ok(()),
            (Some(first), Some(last)) => (first, last),
            _ => return Err(corrupt("only one entry edge is set")),
        };

        if store.prev_edge(first)? != last {
            return Err(corrupt("first.prev is not last"));
        }
        if store.next_edge(last)? != first {
            return Err(corrupt("last.next is not first"));
        }

        let edges = store.loop_edges(self.face)?;
        if edges.last() != Some(&last) {
            return Err(corrupt("walk from first does not end at last"));
        }
        for id in &edges {
            let edge = store.edge(*id)?;
            if edge.face != Some(self.face) {
                return Err(corrupt("edge does not point back at its face"));
            }
            let next = store.next_edge(*id)?;
            if store.prev_edge(next)? != *id {
                return Err(corrupt("next and prev links disagree"));
            }
        }
        Ok(())
    }
}

fn corrupt(reason: &str) -> crate::error::PolyloopError {
    TopologyError::CorruptLoop(reason.into()).into()
}
