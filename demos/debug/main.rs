//! Polyloop debug walkthrough: builds a few faces, edits them and logs the
//! derived properties.
//!
//! Usage:
//! ```text
//! cargo run --example debug
//! RUST_LOG=polyloop=debug cargo run --example debug
//! ```

use polyloop::geometry::{Arc, Box2, Circle, Segment};
use polyloop::math::Point2;
use polyloop::operations::creation::FaceSource;
use polyloop::{Polygon, PolyloopError};

fn main() -> Result<(), PolyloopError> {
    // Default: WARN for everything, INFO for polyloop and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyloop=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("debug=info".parse().unwrap_or_default())
        .add_directive("polyloop=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut polygon = Polygon::new();

    let square = polygon.add_face(FaceSource::Points(vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ]))?;
    report(&polygon, "square", square)?;

    let boxed = polygon.add_face(FaceSource::Box(Box2::new(
        Point2::new(3.0, 0.0),
        Point2::new(5.0, 3.0),
    )))?;
    report(&polygon, "box", boxed)?;

    let circle = polygon.add_face(FaceSource::Circle(Circle::new(Point2::new(8.0, 1.0), 1.0)?))?;
    report(&polygon, "circle", circle)?;

    let left = Point2::new(-3.0, 0.0);
    let right = Point2::new(-1.0, 0.0);
    let half_disc = polygon.add_face_validated(FaceSource::Shapes(vec![
        Segment::new(left, right).into(),
        Arc::through(right, left, Point2::new(-2.0, 0.0), true)?.into(),
    ]))?;
    report(&polygon, "half disc", half_disc)?;

    let bowtie = polygon.add_face(FaceSource::Points(vec![
        Point2::new(0.0, 3.0),
        Point2::new(1.0, 4.0),
        Point2::new(1.0, 3.0),
        Point2::new(0.0, 4.0),
    ]))?;
    report(&polygon, "bowtie", bowtie)?;
    for hit in polygon.self_intersections(bowtie, false)? {
        tracing::info!(x = hit.x, y = hit.y, "bowtie crossing");
    }

    polygon.reverse_face(square)?;
    report(&polygon, "square reversed", square)?;

    let json = polygon.to_json(half_disc)?;
    tracing::info!(%json, "half disc records");
    let mut other = Polygon::new();
    let imported = other.import_face(&polygon, half_disc)?;
    report(&other, "imported half disc", imported)?;

    polygon.delete_face(bowtie)?;
    tracing::info!(
        faces = polygon.face_count(),
        edges = polygon.edge_count(),
        "after deleting bowtie"
    );
    Ok(())
}

fn report(polygon: &Polygon, name: &str, face: polyloop::topology::FaceId) -> Result<(), PolyloopError> {
    tracing::info!(
        name,
        size = polygon.size(face)?,
        area = polygon.area(face)?,
        orientation = ?polygon.orientation(face)?,
        bbox = ?polygon.bounding_box(face)?,
        simple = polygon.is_simple(face)?,
        path = %polygon.svg_path(face)?,
        "face"
    );
    Ok(())
}
