use serde::{Deserialize, Serialize};

use crate::error::{ConstructionError, PolyloopError};
use crate::math::Point2;

use super::{Arc, Segment, Shape};

/// Serialized point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
}

impl From<Point2> for PointRecord {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PointRecord> for Point2 {
    fn from(p: PointRecord) -> Self {
        Point2::new(p.x, p.y)
    }
}

/// Serialized shape, tagged by `"name"`.
///
/// ```json
/// {"name":"segment","ps":{"x":0,"y":0},"pe":{"x":1,"y":0}}
/// {"name":"arc","pc":{"x":0,"y":0},"r":1,"startAngle":0,"endAngle":3.14,"counterClockwise":true}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum ShapeRecord {
    Segment {
        ps: PointRecord,
        pe: PointRecord,
    },
    Arc {
        pc: PointRecord,
        r: f64,
        #[serde(rename = "startAngle")]
        start_angle: f64,
        #[serde(rename = "endAngle")]
        end_angle: f64,
        #[serde(rename = "counterClockwise")]
        counter_clockwise: bool,
    },
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        match shape {
            Shape::Segment(s) => Self::Segment {
                ps: s.start().into(),
                pe: s.end().into(),
            },
            Shape::Arc(a) => Self::Arc {
                pc: a.center().into(),
                r: a.radius(),
                start_angle: a.start_angle(),
                end_angle: a.end_angle(),
                counter_clockwise: a.is_ccw(),
            },
        }
    }
}

impl TryFrom<&ShapeRecord> for Shape {
    type Error = PolyloopError;

    fn try_from(record: &ShapeRecord) -> Result<Self, Self::Error> {
        match *record {
            ShapeRecord::Segment { ps, pe } => {
                if ![ps.x, ps.y, pe.x, pe.y].iter().all(|v| v.is_finite()) {
                    return Err(ConstructionError::InvalidShape(
                        "segment coordinates must be finite".into(),
                    )
                    .into());
                }
                Ok(Segment::new(ps.into(), pe.into()).into())
            }
            ShapeRecord::Arc {
                pc,
                r,
                start_angle,
                end_angle,
                counter_clockwise,
            } => {
                if ![pc.x, pc.y, start_angle, end_angle].iter().all(|v| v.is_finite()) {
                    return Err(ConstructionError::InvalidShape(
                        "arc parameters must be finite".into(),
                    )
                    .into());
                }
                let arc = Arc::new(pc.into(), r, start_angle, end_angle, counter_clockwise)
                    .map_err(|e| ConstructionError::InvalidShape(e.to_string()))?;
                Ok(arc.into())
            }
        }
    }
}
