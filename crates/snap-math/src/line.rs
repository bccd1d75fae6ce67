//! Infinite line through two points.

use serde::{Deserialize, Serialize};

use crate::{Point3, Real, Vector3};

/// Infinite line `f(t) = (1 - t) * p1 + t * p2`.
///
/// `p1` is the parametric origin; `p2 - p1` is the direction. A zero-length
/// direction is only meaningful on the documented degenerate paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    p1: Point3,
    p2: Point3,
}

impl Line {
    pub fn new(p1: Point3, p2: Point3) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> Point3 {
        self.p1
    }

    pub fn p2(&self) -> Point3 {
        self.p2
    }

    pub fn set_p1(&mut self, p1: Point3) {
        self.p1 = p1;
    }

    pub fn set_p2(&mut self, p2: Point3) {
        self.p2 = p2;
    }

    /// Unnormalized direction `p2 - p1`.
    pub fn direction(&self) -> Vector3 {
        self.p2 - self.p1
    }

    pub fn eval(&self, t: Real) -> Point3 {
        self.p1 + t * (self.p2 - self.p1)
    }

    /// Parametric value of the orthogonal projection of `pt`, unclamped.
    /// Returns `0` when `p1 == p2`.
    pub fn project_to_parametric(&self, pt: Point3) -> Real {
        let dir = self.direction();
        let len_sq = dir.length_squared();
        if len_sq == 0.0 {
            return 0.0;
        }
        (pt - self.p1).dot(dir) / len_sq
    }

    pub fn closest_point(&self, pt: Point3) -> Point3 {
        self.eval(self.project_to_parametric(pt))
    }

    /// Parameters `(t, s)` of the closest approach between this line and
    /// `other`: `self.eval(t)` and `other.eval(s)` are the nearest pair.
    ///
    /// Returns `None` when the lines are parallel (or either is degenerate)
    /// within `epsilon`, since no unique pair exists.
    pub fn closest_approach(&self, other: &Line, epsilon: Real) -> Option<(Real, Real)> {
        let d1 = self.direction();
        let d2 = other.direction();
        let r = self.p1 - other.p1;

        let a = d1.dot(d1);
        let e = d2.dot(d2);
        let b = d1.dot(d2);
        let c = d1.dot(r);
        let f = d2.dot(r);

        // a * e - b^2 == a * e * sin^2(angle)
        let denom = a * e - b * b;
        if denom <= epsilon * a * e || denom <= 0.0 {
            return None;
        }

        let t = (b * f - c * e) / denom;
        let s = (a * f - b * c) / denom;
        Some((t, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use approx::assert_abs_diff_eq;

    fn p(x: Real, y: Real, z: Real) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_eval_extrapolates() {
        let line = Line::new(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0));
        assert!((line.eval(0.5) - p(1.0, 0.0, 0.0)).length() < 1e-9);
        assert!((line.eval(-1.0) - p(-2.0, 0.0, 0.0)).length() < 1e-9);
        assert!((line.eval(3.0) - p(6.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_project_unclamped() {
        let line = Line::new(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0));
        assert_abs_diff_eq!(line.project_to_parametric(p(5.0, 3.0, 0.0)), 2.5, epsilon = 1e-9);
        assert_abs_diff_eq!(line.project_to_parametric(p(-2.0, 1.0, 1.0)), -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_project_degenerate_line() {
        let line = Line::new(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0));
        assert_eq!(line.project_to_parametric(p(5.0, 3.0, 0.0)), 0.0);
    }

    #[test]
    fn test_closest_approach_skew() {
        // x axis and a line parallel to y at z = 2, x = 3
        let a = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = Line::new(p(3.0, -1.0, 2.0), p(3.0, 1.0, 2.0));
        let (t, s) = a.closest_approach(&b, EPSILON).unwrap();
        assert_abs_diff_eq!(t, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!((a.eval(t) - b.eval(s)).length(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_closest_approach_intersecting() {
        let a = Line::new(p(-1.0, -1.0, 0.0), p(1.0, 1.0, 0.0));
        let b = Line::new(p(-1.0, 1.0, 0.0), p(1.0, -1.0, 0.0));
        let (t, s) = a.closest_approach(&b, EPSILON).unwrap();
        assert_abs_diff_eq!(t, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(s, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_closest_approach_parallel() {
        let a = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = Line::new(p(0.0, 1.0, 0.0), p(4.0, 1.0, 0.0));
        assert!(a.closest_approach(&b, EPSILON).is_none());
    }
}
