use crate::error::{Result, TopologyError};
use crate::geometry::{Box2, Shape, ShapeRecord};
use crate::index::{RTreeIndex, SpatialIndex};
use crate::io::{ExportRecords, SvgPath};
use crate::math::{Point2, Tolerance};
use crate::operations::creation::{FaceSource, MakeFace};
use crate::operations::modification::{
    AppendEdge, InsertEdge, RemoveEdge, ReverseFace, SetArcLength,
};
use crate::operations::query::{
    Area, CheckLoop, FaceBox, FaceOrientation, FaceSize, IsSimple, SelfIntersections, SignedArea,
};
use crate::topology::{EdgeData, EdgeId, FaceId, Orientation, TopologyStore};

/// A set of faces sharing one edge store and one spatial index.
///
/// The polygon owns every edge of every face. Each face operation is also
/// available as a standalone command in [`crate::operations`]; the methods
/// here wire the store, the index and the polygon's tolerance together.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    store: TopologyStore,
    index: RTreeIndex,
    tolerance: Tolerance,
}

impl Polygon {
    /// Creates an empty polygon with the default tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty polygon using `tolerance` for orientation decisions.
    #[must_use]
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    #[must_use]
    pub fn store(&self) -> &TopologyStore {
        &self.store
    }

    #[must_use]
    pub fn index(&self) -> &RTreeIndex {
        &self.index
    }

    /// Store and index together, for running operations directly.
    pub fn parts_mut(&mut self) -> (&mut TopologyStore, &mut RTreeIndex) {
        (&mut self.store, &mut self.index)
    }

    /// IDs of all faces.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.store.face_ids()
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.store.face_count()
    }

    /// Number of edges across all faces.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    // --- Faces ---

    /// Builds a face from `source` and registers its edges.
    ///
    /// # Errors
    ///
    /// See [`MakeFace::execute`].
    pub fn add_face(&mut self, source: FaceSource) -> Result<FaceId> {
        MakeFace::new(source).execute(&mut self.store, &mut self.index)
    }

    /// Like [`Polygon::add_face`], but first checks with the polygon's
    /// tolerance that consecutive shapes join.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::LoopNotClosed`] for a chain with a gap.
    pub fn add_face_validated(&mut self, source: FaceSource) -> Result<FaceId> {
        MakeFace::new(source)
            .validated(self.tolerance)
            .execute(&mut self.store, &mut self.index)
    }

    /// Copies a face of another polygon into this one.
    ///
    /// The copy gets its own edges; nothing is shared with `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing from `other` or its loop is broken.
    pub fn import_face(&mut self, other: &Polygon, face: FaceId) -> Result<FaceId> {
        let shapes = other.shapes(face)?;
        self.add_face(FaceSource::Shapes(shapes))
    }

    /// Deletes a face with all its edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn delete_face(&mut self, face: FaceId) -> Result<()> {
        let edges = self.store.loop_edges(face)?;
        for id in &edges {
            self.index.remove(*id);
            self.store.remove_edge(*id)?;
        }
        self.store.remove_face(face)?;
        tracing::debug!(?face, edges = edges.len(), "face deleted");
        Ok(())
    }

    // --- Mutation ---

    /// Appends `shape` as a new edge at the end of the face loop.
    ///
    /// # Errors
    ///
    /// See [`AppendEdge::execute`].
    pub fn append(&mut self, face: FaceId, shape: impl Into<Shape>) -> Result<EdgeId> {
        let edge = self.store.add_edge(EdgeData::new(shape));
        if let Err(err) = AppendEdge::new(face, edge).execute(&mut self.store, &mut self.index) {
            self.store.remove_edge(edge)?;
            return Err(err);
        }
        Ok(edge)
    }

    /// Inserts `shape` as a new edge right after `after`.
    ///
    /// # Errors
    ///
    /// See [`InsertEdge::execute`].
    pub fn insert(&mut self, face: FaceId, shape: impl Into<Shape>, after: EdgeId) -> Result<EdgeId> {
        let edge = self.store.add_edge(EdgeData::new(shape));
        if let Err(err) = InsertEdge::new(face, edge, after).execute(&mut self.store, &mut self.index) {
            self.store.remove_edge(edge)?;
            return Err(err);
        }
        Ok(edge)
    }

    /// Removes an edge from a face and returns its shape.
    ///
    /// # Errors
    ///
    /// See [`RemoveEdge::execute`].
    pub fn remove(&mut self, face: FaceId, edge: EdgeId) -> Result<Shape> {
        let data = RemoveEdge::new(face, edge).execute(&mut self.store, &mut self.index)?;
        Ok(data.shape)
    }

    /// Recomputes arc lengths along the face loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn set_arc_length(&mut self, face: FaceId) -> Result<()> {
        SetArcLength::new(face).execute(&mut self.store)
    }

    /// Reverses the face loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn reverse_face(&mut self, face: FaceId) -> Result<()> {
        ReverseFace::new(face).execute(&mut self.store)
    }

    // --- Queries ---

    /// Shapes of the face in traversal order from `first`.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn shapes(&self, face: FaceId) -> Result<Vec<Shape>> {
        self.store
            .loop_edges(face)?
            .into_iter()
            .map(|id| Ok(self.store.edge(id)?.shape))
            .collect()
    }

    /// # Errors
    ///
    /// Returns an error if the face is missing.
    pub fn is_empty(&self, face: FaceId) -> Result<bool> {
        Ok(self.store.face(face)?.is_empty())
    }

    /// # Errors
    ///
    /// Returns an error if the face is missing.
    pub fn first_edge(&self, face: FaceId) -> Result<Option<EdgeId>> {
        Ok(self.store.face(face)?.first)
    }

    /// # Errors
    ///
    /// Returns an error if the face is missing.
    pub fn last_edge(&self, face: FaceId) -> Result<Option<EdgeId>> {
        Ok(self.store.face(face)?.last)
    }

    /// Point where the loop starts (and, being closed, ends).
    ///
    /// # Errors
    ///
    /// Returns an error if the face or its first edge is missing.
    pub fn start_point(&self, face: FaceId) -> Result<Option<Point2>> {
        match self.store.face(face)?.first {
            Some(first) => Ok(Some(self.store.edge(first)?.start())),
            None => Ok(None),
        }
    }

    /// Returns whether `edge` is part of the face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing.
    pub fn contains_edge(&self, face: FaceId, edge: EdgeId) -> Result<bool> {
        self.store.face(face)?;
        Ok(self
            .store
            .edge(edge)
            .is_ok_and(|data| data.face == Some(face)))
    }

    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn size(&self, face: FaceId) -> Result<usize> {
        FaceSize::new(face).execute(&self.store)
    }

    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn bounding_box(&self, face: FaceId) -> Result<Option<Box2>> {
        FaceBox::new(face).execute(&self.store)
    }

    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn signed_area(&self, face: FaceId) -> Result<f64> {
        SignedArea::new(face).execute(&self.store)
    }

    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn area(&self, face: FaceId) -> Result<f64> {
        Area::new(face).execute(&self.store)
    }

    /// Orientation decided with the polygon's tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn orientation(&self, face: FaceId) -> Result<Orientation> {
        FaceOrientation::new(face)
            .with_tolerance(self.tolerance)
            .execute(&self.store)
    }

    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn is_simple(&self, face: FaceId) -> Result<bool> {
        IsSimple::new(face).execute(&self.store, &self.index)
    }

    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn self_intersections(&self, face: FaceId, exit_on_first: bool) -> Result<Vec<Point2>> {
        SelfIntersections::new(face)
            .exit_on_first(exit_on_first)
            .execute(&self.store, &self.index)
    }

    /// Verifies the loop invariants of a face.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::CorruptLoop`] if an invariant is violated.
    pub fn check_face(&self, face: FaceId) -> Result<()> {
        CheckLoop::new(face).execute(&self.store)?;
        for id in self.store.loop_edges(face)? {
            if !self.index.contains(id) {
                return Err(TopologyError::CorruptLoop("edge missing from index".into()).into());
            }
        }
        Ok(())
    }

    // --- Export ---

    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn svg_path(&self, face: FaceId) -> Result<String> {
        SvgPath::new(face).execute(&self.store)
    }

    /// # Errors
    ///
    /// Returns an error if the face is missing or its loop is broken.
    pub fn to_records(&self, face: FaceId) -> Result<Vec<ShapeRecord>> {
        ExportRecords::new(face).execute(&self.store)
    }

    /// # Errors
    ///
    /// Returns an error if the face is missing, its loop is broken, or
    /// serialization fails.
    pub fn to_json(&self, face: FaceId) -> Result<String> {
        ExportRecords::new(face).to_json(&self.store)
    }
}
