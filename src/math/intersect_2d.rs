use super::arc_2d::angle_to_arc_param;
use super::{Point2, Vector2, TOLERANCE};

/// Angular span of a circle, the raw input for arc intersection math.
#[derive(Debug, Clone, Copy)]
pub struct CircularSpan {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Parallel (including collinear) segments report no intersection.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da: Vector2 = a1 - a0;
    let db: Vector2 = b1 - b0;

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Small epsilon so that endpoints are included.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        let pt = a0 + da * t_clamped;
        Some((pt, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Intersection of a line segment with a circular arc in 2D.
///
/// Returns `(point, t_seg, t_arc)` triples, both parameters in `[0, 1]`.
#[must_use]
pub fn segment_arc_intersect_2d(a0: &Point2, a1: &Point2, arc: &CircularSpan) -> Vec<(Point2, f64, f64)> {
    let mut results = Vec::new();
    if arc.radius < TOLERANCE || arc.sweep.abs() < TOLERANCE {
        return results;
    }

    let d: Vector2 = a1 - a0;
    let seg_len_sq = d.norm_squared();
    if seg_len_sq < TOLERANCE * TOLERANCE {
        return results;
    }

    // Substitute the parametric segment into the circle equation:
    // |a0 + t*d - c|² = r²
    let f: Vector2 = a0 - arc.center;
    let a = seg_len_sq;
    let b = 2.0 * f.dot(&d);
    let c = f.norm_squared() - arc.radius * arc.radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < -TOLERANCE {
        return results;
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    let eps = TOLERANCE;
    let t_roots = if disc_sqrt < TOLERANCE * 100.0 {
        // Tangent: single root.
        vec![-b / (2.0 * a)]
    } else {
        vec![(-b - disc_sqrt) / (2.0 * a), (-b + disc_sqrt) / (2.0 * a)]
    };

    for t_seg in t_roots {
        if t_seg < -eps || t_seg > 1.0 + eps {
            continue;
        }
        let t_seg = t_seg.clamp(0.0, 1.0);
        let pt = a0 + d * t_seg;

        let angle = (pt.y - arc.center.y).atan2(pt.x - arc.center.x);
        if let Some(t_arc) = angle_to_arc_param(angle, arc.start_angle, arc.sweep) {
            results.push((pt, t_seg, t_arc));
        }
    }

    results
}

/// Intersection of two circular arcs in 2D.
///
/// Returns `(point, t1, t2)` triples with arc parameters in `[0, 1]`.
/// Concentric arcs never report intersections, even when they overlap.
#[must_use]
pub fn arc_arc_intersect_2d(arc1: &CircularSpan, arc2: &CircularSpan) -> Vec<(Point2, f64, f64)> {
    let mut results = Vec::new();
    let (r1, r2) = (arc1.radius, arc2.radius);
    if r1 < TOLERANCE || r2 < TOLERANCE {
        return results;
    }

    let delta: Vector2 = arc2.center - arc1.center;
    let dist_sq = delta.norm_squared();
    let dist = dist_sq.sqrt();

    if dist < TOLERANCE {
        return results;
    }

    let sum = r1 + r2;
    let diff = (r1 - r2).abs();
    if dist > sum + TOLERANCE || dist < diff - TOLERANCE {
        return results;
    }

    // Distance from the first center along the center line to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
    let h_sq = r1 * r1 - a * a;
    if h_sq < -TOLERANCE {
        return results;
    }
    let h = h_sq.max(0.0).sqrt();

    let unit = delta / dist;
    let mid = arc1.center + unit * a;
    let perp = Vector2::new(-unit.y, unit.x);

    let candidates = if h < TOLERANCE {
        vec![mid]
    } else {
        vec![mid + perp * h, mid - perp * h]
    };

    let eps = TOLERANCE;
    for pt in candidates {
        let angle1 = (pt.y - arc1.center.y).atan2(pt.x - arc1.center.x);
        let angle2 = (pt.y - arc2.center.y).atan2(pt.x - arc2.center.x);

        let t1 = angle_to_arc_param(angle1, arc1.start_angle, arc1.sweep);
        let t2 = angle_to_arc_param(angle2, arc2.start_angle, arc2.sweep);

        if let (Some(t1), Some(t2)) = (t1, t2) {
            let d1 = (pt - arc1.center).norm();
            let d2 = (pt - arc2.center).norm();
            if (d1 - r1).abs() < eps && (d2 - r2).abs() < eps {
                results.push((pt, t1, t2));
            }
        }
    }

    results
}
