use crate::error::{Result, TopologyError};
use crate::geometry::{Box2, Circle, Segment, Shape, ShapeRecord, SNAP_DISTANCE};
use crate::index::SpatialIndex;
use crate::math::{Point2, Tolerance};
use crate::operations::modification::{AppendEdge, SetArcLength};
use crate::topology::{EdgeData, EdgeId, FaceData, FaceId, TopologyStore};

/// Input a face can be built from.
#[derive(Debug, Clone)]
pub enum FaceSource {
    /// Closed polyline; point `i` is joined to point `(i + 1) mod n`.
    Points(Vec<Point2>),
    /// Shapes already chained tail to head.
    Shapes(Vec<Shape>),
    /// Serialized shapes already chained tail to head.
    Records(Vec<ShapeRecord>),
    /// Another face of the same store. Its edges are shared, not copied.
    Face(FaceId),
    /// A full counter-clockwise circle as a single arc edge.
    Circle(Circle),
    /// Four segments walking `(min,min) → (max,min) → (max,max) → (min,max)`.
    Box(Box2),
    /// A chain `first → … → last` the caller has linked with
    /// [`TopologyStore::link_edges`] and registered in the index.
    Prelinked { first: EdgeId, last: EdgeId },
}

impl FaceSource {
    /// Parses a JSON array of shape records.
    ///
    /// # Errors
    ///
    /// Returns a construction error if the text is not a valid record array.
    pub fn from_json(text: &str) -> Result<Self> {
        let records: Vec<ShapeRecord> = serde_json::from_str(text)?;
        Ok(Self::Records(records))
    }
}

/// Creates a face in the topology store and links its loop.
///
/// Every edge the operation creates is registered in the index.
pub struct MakeFace {
    source: FaceSource,
    closure: Option<Tolerance>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(source: FaceSource) -> Self {
        Self {
            source,
            closure: None,
        }
    }

    /// Checks that shape input joins tail to head (within `tolerance`)
    /// before anything is created.
    #[must_use]
    pub fn validated(mut self, tolerance: Tolerance) -> Self {
        self.closure = Some(tolerance);
        self
    }

    /// Executes the operation, returning the new face.
    ///
    /// # Errors
    ///
    /// Returns an error if a record is malformed, the input fails the
    /// closure check, or a referenced face or edge is missing or broken.
    /// Nothing is created when input conversion or validation fails.
    pub fn execute<I: SpatialIndex + ?Sized>(
        &self,
        store: &mut TopologyStore,
        index: &mut I,
    ) -> Result<FaceId> {
        let shapes = match &self.source {
            FaceSource::Points(points) => polyline_shapes(points),
            FaceSource::Shapes(shapes) => shapes.clone(),
            FaceSource::Records(records) => records
                .iter()
                .map(Shape::try_from)
                .collect::<Result<Vec<_>>>()?,
            FaceSource::Circle(circle) => vec![circle.to_arc()?.into()],
            FaceSource::Box(bbox) => polyline_shapes(&bbox.corners()),
            FaceSource::Face(source) => return alias_face(store, index, *source),
            FaceSource::Prelinked { first, last } => {
                return adopt_chain(store, *first, *last);
            }
        };

        let shapes = join_chain(shapes);
        if let Some(tolerance) = self.closure {
            check_closed(&shapes, tolerance)?;
        }

        let face = store.add_face(FaceData::new());
        for shape in &shapes {
            let edge = store.add_edge(EdgeData::new(*shape));
            AppendEdge::new(face, edge).execute(store, index)?;
        }
        tracing::debug!(?face, edges = shapes.len(), "face created");
        Ok(face)
    }
}

fn polyline_shapes(points: &[Point2]) -> Vec<Shape> {
    let n = points.len();
    (0..n)
        .map(|i| Segment::new(points[i], points[(i + 1) % n]).into())
        .collect()
}

/// Moves each shape's end onto the next shape's start when the two differ
/// only by rounding, so joints compare exactly equal.
fn join_chain(mut shapes: Vec<Shape>) -> Vec<Shape> {
    let n = shapes.len();
    for i in 0..n {
        let next_start = shapes[(i + 1) % n].start();
        let end = shapes[i].end();
        if end != next_start && (end - next_start).norm() < SNAP_DISTANCE {
            shapes[i] = shapes[i].with_end(next_start);
        }
    }
    shapes
}

fn check_closed(shapes: &[Shape], tolerance: Tolerance) -> Result<()> {
    let n = shapes.len();
    for (i, shape) in shapes.iter().enumerate() {
        let next = &shapes[(i + 1) % n];
        if !tolerance.points_equal(&shape.end(), &next.start()) {
            return Err(TopologyError::LoopNotClosed { at: i }.into());
        }
    }
    Ok(())
}

/// New face over the same edges as `source`. The edges now point back at
/// the new face; `source` keeps its entry references and should be dropped.
fn alias_face<I: SpatialIndex + ?Sized>(
    store: &mut TopologyStore,
    index: &mut I,
    source: FaceId,
) -> Result<FaceId> {
    let edges = store.loop_edges(source)?;
    let (first, last, stale) = {
        let data = store.face(source)?;
        (data.first, data.last, data.arc_length_stale())
    };

    let mut data = FaceData::new();
    data.set_entries(first, last);
    data.set_arc_length_stale(stale);
    let face = store.add_face(data);
    for id in &edges {
        let edge = store.edge_mut(*id)?;
        edge.face = Some(face);
        let bbox = edge.bbox();
        index.insert(*id, bbox);
    }
    tracing::debug!(?face, ?source, edges = edges.len(), "face aliased");
    Ok(face)
}

fn adopt_chain(store: &mut TopologyStore, first: EdgeId, last: EdgeId) -> Result<FaceId> {
    check_chain(store, first, last)?;
    store.link_edges(last, first)?;
    let mut data = FaceData::new();
    data.set_entries(Some(first), Some(last));
    let face = store.add_face(data);
    SetArcLength::new(face).execute(store)?;
    tracing::debug!(?face, "face adopted pre-linked chain");
    Ok(face)
}

/// Walks `next` links from `first` and requires them to reach `last`.
fn check_chain(store: &TopologyStore, first: EdgeId, last: EdgeId) -> Result<()> {
    let mut current = first;
    for _ in 0..store.edge_count() {
        if current == last {
            return Ok(());
        }
        current = store.next_edge(current)?;
    }
    Err(TopologyError::CorruptLoop("pre-linked chain does not reach its last edge".into()).into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolyloopError;
    use crate::geometry::Arc;
    use crate::index::RTreeIndex;
    use crate::io::ExportRecords;
    use crate::operations::modification::InsertEdge;
    use crate::operations::query::IsSimple;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn shapes_of(store: &TopologyStore, face: FaceId) -> Vec<Shape> {
        store
            .loop_edges(face)
            .unwrap()
            .iter()
            .map(|e| store.edge(*e).unwrap().shape)
            .collect()
    }

    #[test]
    fn points_close_by_wrap_around() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let face = MakeFace::new(FaceSource::Points(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]))
            .execute(&mut store, &mut index)
            .unwrap();
        let shapes = shapes_of(&store, face);
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[2].start(), p(0.0, 1.0));
        assert_eq!(shapes[2].end(), p(0.0, 0.0));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn empty_points_make_empty_face() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let face = MakeFace::new(FaceSource::Points(Vec::new()))
            .execute(&mut store, &mut index)
            .unwrap();
        assert!(store.face(face).unwrap().is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn box_walks_clockwise_from_min_corner() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let face = MakeFace::new(FaceSource::Box(Box2::new(p(0.0, 0.0), p(2.0, 1.0))))
            .execute(&mut store, &mut index)
            .unwrap();
        let shapes = shapes_of(&store, face);
        assert_eq!(shapes.len(), 4);
        assert!(shapes.iter().all(Shape::is_segment));
        let starts: Vec<Point2> = shapes.iter().map(Shape::start).collect();
        assert_eq!(starts, vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 1.0), p(0.0, 1.0)]);
    }

    #[test]
    fn circle_is_single_ccw_arc() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let circle = Circle::new(p(1.0, 1.0), 2.0).unwrap();
        let face = MakeFace::new(FaceSource::Circle(circle))
            .execute(&mut store, &mut index)
            .unwrap();
        let shapes = shapes_of(&store, face);
        assert_eq!(shapes.len(), 1);
        assert!(matches!(shapes[0], Shape::Arc(a) if a.is_ccw() && a.is_full()));
        let e = store.face(face).unwrap().first.unwrap();
        assert_eq!(store.next_edge(e).unwrap(), e);
    }

    #[test]
    fn records_from_json() {
        let text = r#"[
            {"name":"segment","ps":{"x":-1,"y":0},"pe":{"x":1,"y":0}},
            {"name":"arc","pc":{"x":0,"y":0},"r":1,"startAngle":0,"endAngle":3.141592653589793,"counterClockwise":true}
        ]"#;
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let face = MakeFace::new(FaceSource::from_json(text).unwrap())
            .execute(&mut store, &mut index)
            .unwrap();
        let shapes = shapes_of(&store, face);
        assert_eq!(shapes.len(), 2);
        assert!(matches!(shapes[1], Shape::Arc(_)));
    }

    #[test]
    fn malformed_records_create_nothing() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        assert!(FaceSource::from_json(r#"[{"name":"spline"}]"#).is_err());
        assert!(FaceSource::from_json("not json").is_err());

        let bad = vec![ShapeRecord::Arc {
            pc: p(0.0, 0.0).into(),
            r: -1.0,
            start_angle: 0.0,
            end_angle: 1.0,
            counter_clockwise: true,
        }];
        let result = MakeFace::new(FaceSource::Records(bad)).execute(&mut store, &mut index);
        assert!(matches!(result, Err(PolyloopError::Construction(_))));
        assert_eq!(store.face_count(), 0);
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn validation_rejects_open_chain() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let open: Vec<Shape> = vec![
            Segment::new(p(0.0, 0.0), p(1.0, 0.0)).into(),
            Segment::new(p(1.0, 0.0), p(1.0, 1.0)).into(),
        ];
        let result = MakeFace::new(FaceSource::Shapes(open.clone()))
            .validated(Tolerance::default())
            .execute(&mut store, &mut index);
        assert!(matches!(
            result,
            Err(PolyloopError::Topology(TopologyError::LoopNotClosed { at: 1 }))
        ));
        assert_eq!(store.face_count(), 0);

        // Without validation the broken loop is accepted as given.
        let face = MakeFace::new(FaceSource::Shapes(open))
            .execute(&mut store, &mut index)
            .unwrap();
        assert_eq!(store.loop_edges(face).unwrap().len(), 2);
    }

    #[test]
    fn face_copy_aliases_edges() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let source = MakeFace::new(FaceSource::Points(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]))
            .execute(&mut store, &mut index)
            .unwrap();
        let copy = MakeFace::new(FaceSource::Face(source))
            .execute(&mut store, &mut index)
            .unwrap();

        assert_eq!(store.loop_edges(copy).unwrap(), store.loop_edges(source).unwrap());
        assert_eq!(store.edge_count(), 3);
        assert_eq!(index.len(), 3);
        for e in store.loop_edges(copy).unwrap() {
            assert_eq!(store.edge(e).unwrap().face, Some(copy));
        }
    }

    #[test]
    fn prelinked_chain_is_closed_and_measured() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let left = p(-1.0, 0.0);
        let right = p(1.0, 0.0);
        let a = store.add_edge(EdgeData::new(Segment::new(left, right)));
        let b = store.add_edge(EdgeData::new(Arc::through(right, left, Point2::origin(), true).unwrap()));
        store.link_edges(a, b).unwrap();
        for e in [a, b] {
            let bbox = store.edge(e).unwrap().bbox();
            index.insert(e, bbox);
        }

        let face = MakeFace::new(FaceSource::Prelinked { first: a, last: b })
            .execute(&mut store, &mut index)
            .unwrap();

        assert_eq!(store.next_edge(b).unwrap(), a);
        assert_eq!(store.prev_edge(a).unwrap(), b);
        assert_eq!(store.edge(b).unwrap().face, Some(face));
        assert!((store.edge(b).unwrap().arc_length - 2.0).abs() < 1e-12);
    }

    #[test]
    fn broken_prelinked_chain_is_rejected() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let a = store.add_edge(EdgeData::new(Segment::new(p(0.0, 0.0), p(1.0, 0.0))));
        let b = store.add_edge(EdgeData::new(Segment::new(p(1.0, 0.0), p(0.0, 0.0))));
        // a → b was never linked.
        let result = MakeFace::new(FaceSource::Prelinked { first: a, last: b })
            .execute(&mut store, &mut index);
        assert!(result.is_err());
        assert_eq!(store.face_count(), 0);
        assert!(store.edge(b).unwrap().next.is_none());
        assert!(store.edge(a).unwrap().prev.is_none());
    }

    #[test]
    fn record_joints_are_exact() {
        let text = r#"[
            {"name":"segment","ps":{"x":-1,"y":0},"pe":{"x":1,"y":0}},
            {"name":"arc","pc":{"x":0,"y":0},"r":1,"startAngle":0,"endAngle":3.141592653589793,"counterClockwise":true}
        ]"#;
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let face = MakeFace::new(FaceSource::from_json(text).unwrap())
            .validated(Tolerance::new(1e-12))
            .execute(&mut store, &mut index)
            .unwrap();
        let shapes = shapes_of(&store, face);
        assert_eq!(shapes[1].end(), shapes[0].start());
        assert_eq!(shapes[0].end(), shapes[1].start());
    }

    #[test]
    fn exported_face_rebuilds_simple() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let left = p(-2.0, 1.0);
        let right = p(3.0, 1.0);
        let source = MakeFace::new(FaceSource::Shapes(vec![
            Segment::new(left, right).into(),
            Arc::through(right, left, p(0.5, 1.0), true).unwrap().into(),
        ]))
        .execute(&mut store, &mut index)
        .unwrap();
        let json = ExportRecords::new(source).to_json(&store).unwrap();

        let mut store2 = TopologyStore::new();
        let mut index2 = RTreeIndex::new();
        let rebuilt = MakeFace::new(FaceSource::from_json(&json).unwrap())
            .execute(&mut store2, &mut index2)
            .unwrap();

        assert!(IsSimple::new(rebuilt).execute(&store2, &index2).unwrap());
        assert_eq!(store2.loop_edges(rebuilt).unwrap().len(), 2);
    }

    #[test]
    fn face_copy_keeps_stale_arc_lengths() {
        let mut store = TopologyStore::new();
        let mut index = RTreeIndex::new();
        let source = MakeFace::new(FaceSource::Points(vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
        ]))
        .execute(&mut store, &mut index)
        .unwrap();
        let first = store.face(source).unwrap().first.unwrap();
        for _ in 0..2 {
            let edge = store.add_edge(EdgeData::new(Segment::new(p(0.5, 0.0), p(0.5, 0.0))));
            InsertEdge::new(source, edge, first).execute(&mut store, &mut index).unwrap();
        }
        assert!(store.face(source).unwrap().arc_length_stale());

        let copy = MakeFace::new(FaceSource::Face(source))
            .execute(&mut store, &mut index)
            .unwrap();
        assert!(store.face(copy).unwrap().arc_length_stale());
    }
}
