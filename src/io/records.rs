use crate::error::Result;
use crate::geometry::ShapeRecord;
use crate::topology::{FaceId, TopologyStore};

/// Exports a face as its shape records in traversal order from `first`.
pub struct ExportRecords {
    face: FaceId,
}

impl ExportRecords {
    /// Creates a new `ExportRecords` operation.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the export.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<ShapeRecord>> {
        store
            .loop_edges(self.face)?
            .into_iter()
            .map(|id| Ok(store.edge(id)?.shape.to_record()))
            .collect()
    }

    /// Exports the records as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing, its loop is broken, or
    /// serialization fails.
    pub fn to_json(&self, store: &TopologyStore) -> Result<String> {
        let records = self.execute(store)?;
        Ok(serde_json::to_string(&records)?)
    }
}
