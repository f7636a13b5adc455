use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{angle_in_sweep, sweep_between};
use crate::math::intersect_2d::CircularSpan;
use crate::math::{Point2, TOLERANCE};

use super::Box2;

/// A circular arc in the plane.
///
/// The arc runs from `start_angle` over a signed `sweep` (positive is
/// counter-clockwise). Endpoints are stored rather than re-evaluated, so an
/// arc built from exact points joins its neighbours exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    sweep: f64,
    start: Point2,
    end: Point2,
}

impl Arc {
    /// Creates an arc from its circle and angular range.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians; `start_angle ± 2π` gives a full circle
    /// * `ccw` - Direction of travel from start to end
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or the sweep is zero.
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64, ccw: bool) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        let sweep = sweep_between(start_angle, end_angle, ccw);
        if sweep.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("arc sweep must be non-zero".into()).into());
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
            sweep,
            start: on_circle(center, radius, start_angle),
            end: on_circle(center, radius, start_angle + sweep),
        })
    }

    /// Creates an arc between two exact endpoints around `center`.
    ///
    /// Coincident endpoints produce a full circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints are not equidistant from the center
    /// or coincide with it.
    pub fn through(start: Point2, end: Point2, center: Point2, ccw: bool) -> Result<Self> {
        let radius = (start - center).norm();
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        let end_radius = (end - center).norm();
        if (end_radius - radius).abs() > TOLERANCE * 1e3 * radius.max(1.0) {
            return Err(GeometryError::Degenerate(format!(
                "arc endpoints are not equidistant from center ({radius} vs {end_radius})"
            ))
            .into());
        }

        let start_angle = (start.y - center.y).atan2(start.x - center.x);
        let (end_angle, sweep) = if start == end {
            let full = if ccw { TAU } else { -TAU };
            (start_angle + full, full)
        } else {
            let end_angle = (end.y - center.y).atan2(end.x - center.x);
            (end_angle, sweep_between(start_angle, end_angle, ccw))
        };
        if sweep.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("arc sweep must be non-zero".into()).into());
        }

        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
            sweep,
            start,
            end,
        })
    }

    /// Full counter-clockwise circle starting and ending at angle 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn full_circle(center: Point2, radius: f64) -> Result<Self> {
        let mut arc = Self::new(center, radius, 0.0, TAU, true)?;
        // Close exactly at the seam.
        arc.end = arc.start;
        Ok(arc)
    }

    /// Same arc with its stored end point replaced. `end` must lie on the
    /// circle within rounding of the computed end.
    pub(crate) fn with_end(mut self, end: Point2) -> Self {
        self.end = end;
        self
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Signed sweep; positive is counter-clockwise.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.sweep > 0.0
    }

    /// Returns whether the arc covers the whole circle.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (self.sweep.abs() - TAU).abs() < TOLERANCE
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns `r · |sweep|`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    /// Angular span consumed by the intersection math.
    #[must_use]
    pub fn span(&self) -> CircularSpan {
        CircularSpan {
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle,
            sweep: self.sweep,
        }
    }

    /// Bounding box: the endpoints plus every axis extreme inside the sweep.
    #[must_use]
    pub fn bbox(&self) -> Box2 {
        let mut bbox = Box2::new(self.start, self.end);
        for extreme in [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2] {
            if angle_in_sweep(extreme, self.start_angle, self.sweep) {
                bbox = bbox.include(&on_circle(self.center, self.radius, extreme));
            }
        }
        bbox
    }

    /// Closed form of `∫ (y - ymin) dx` along the arc.
    ///
    /// With `x = cx + r cos θ`, `y = cy + r sin θ` over `θ ∈ [a, b]`:
    /// `(cy - ymin) r (cos b - cos a) - r² ((b - a)/2 - (sin 2b - sin 2a)/4)`.
    #[must_use]
    pub fn definite_integral(&self, ymin: f64) -> f64 {
        let a = self.start_angle;
        let b = self.start_angle + self.sweep;
        let r = self.radius;
        let lift = (self.center.y - ymin) * r * (b.cos() - a.cos());
        let segment = r * r * ((b - a) / 2.0 - ((2.0 * b).sin() - (2.0 * a).sin()) / 4.0);
        lift - segment
    }

    /// Returns the same arc walked the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            center: self.center,
            radius: self.radius,
            start_angle: self.end_angle,
            end_angle: self.start_angle,
            sweep: -self.sweep,
            start: self.end,
            end: self.start,
        }
    }

    /// Path fragment continuing from the start point.
    ///
    /// A full circle cannot be drawn by one elliptical-arc command, so it is
    /// emitted as two half arcs.
    #[must_use]
    pub fn svg_fragment(&self) -> String {
        let sweep_flag = u8::from(self.is_ccw());
        if self.is_full() {
            let half = on_circle(self.center, self.radius, self.start_angle + self.sweep / 2.0);
            return format!(
                " A{r},{r} 0 0,{sweep_flag} {},{} A{r},{r} 0 0,{sweep_flag} {},{}",
                half.x,
                half.y,
                self.end.x,
                self.end.y,
                r = self.radius
            );
        }
        let large_arc = u8::from(self.sweep.abs() > PI);
        format!(
            " A{r},{r} 0 {large_arc},{sweep_flag} {},{}",
            self.end.x,
            self.end.y,
            r = self.radius
        )
    }
}

fn on_circle(center: Point2, radius: f64, angle: f64) -> Point2 {
    Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}
