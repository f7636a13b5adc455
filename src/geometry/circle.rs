use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::Arc;

/// A full circle, used as face input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not a positive finite number.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(GeometryError::Degenerate("circle radius must be positive".into()).into());
        }
        Ok(Self { center, radius })
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The whole circle as one counter-clockwise arc starting at angle 0.
    ///
    /// # Errors
    ///
    /// Never fails for a circle built through [`Circle::new`].
    pub fn to_arc(&self) -> Result<Arc> {
        Arc::full_circle(self.center, self.radius)
    }
}
