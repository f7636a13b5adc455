mod arc;
mod bbox;
mod circle;
mod record;
mod segment;
mod shape;

pub use arc::Arc;
pub use bbox::Box2;
pub use circle::Circle;
pub use record::{PointRecord, ShapeRecord};
pub use segment::Segment;
pub use shape::Shape;
pub(crate) use shape::SNAP_DISTANCE;
