pub mod arc_2d;
pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Fixed epsilon used by the low-level intersection math.
pub const TOLERANCE: f64 = 1e-10;

/// Default epsilon for [`Tolerance`].
pub const DEFAULT_EPS: f64 = 1e-6;

/// Numeric comparison policy for orientation and closure decisions.
///
/// The policy is a plain value so that every polygon can carry its own;
/// it never changes behind a face's back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

impl Tolerance {
    /// Creates a policy with the given epsilon. Negative input is taken by magnitude.
    #[must_use]
    pub fn new(eps: f64) -> Self {
        Self { eps: eps.abs() }
    }

    /// Returns the epsilon.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// `|x| < eps`.
    #[must_use]
    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() < self.eps
    }

    /// `|a - b| < eps`.
    #[must_use]
    pub fn equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.eps
    }

    /// Component-wise [`Tolerance::equal`] for points.
    #[must_use]
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        self.equal(a.x, b.x) && self.equal(a.y, b.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerance() {
        let tol = Tolerance::default();
        assert!((tol.eps() - DEFAULT_EPS).abs() < f64::EPSILON);
        assert!(tol.is_zero(1e-7));
        assert!(!tol.is_zero(1e-5));
    }

    #[test]
    fn comparisons_respect_eps() {
        let tol = Tolerance::new(0.1);
        assert!(!tol.equal(1.0, 1.2));
        assert!(tol.equal(1.0, 1.05));
        assert!(tol.points_equal(&Point2::new(0.0, 0.0), &Point2::new(0.05, -0.05)));
    }

    #[test]
    fn negative_eps_is_taken_by_magnitude() {
        assert!((Tolerance::new(-0.5).eps() - 0.5).abs() < f64::EPSILON);
    }
}
