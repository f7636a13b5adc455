use crate::error::Result;
use crate::topology::{FaceId, TopologyStore};

/// Renders a face as an SVG path `d` attribute.
///
/// The path moves to the start of `first`, appends each edge's fragment in
/// traversal order and closes with `z`. An empty face renders as an empty
/// string.
pub struct SvgPath {
    face: FaceId,
}

impl SvgPath {
    /// Creates a new `SvgPath` export.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the export.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn execute(&self, store: &TopologyStore) -> Result<String> {
        let edges = store.loop_edges(self.face)?;
        let Some(&first) = edges.first() else {
            return Ok(String::new());
        };

        let start = store.edge(first)?.start();
        let mut path = format!("M{},{}", start.x, start.y);
        for id in edges {
            path.push_str(&store.edge(id)?.shape.svg_fragment());
        }
        path.push_str(" z");
        Ok(path)
    }
}
