use snap_core::SnapConfig;
use snap_math::{LineSegment, Point3};

use crate::constraint::{Constraint, ConstraintBase, Snap};

/// Snaps to the segment between two endpoints; the proxy never leaves it.
#[derive(Debug, Clone)]
pub struct LineConstraint {
    base: ConstraintBase,
    segment: LineSegment,
}

impl LineConstraint {
    pub fn new(start: Point3, end: Point3) -> Self {
        Self::with_config(start, end, &SnapConfig::default())
    }

    pub fn with_config(start: Point3, end: Point3, config: &SnapConfig) -> Self {
        Self {
            base: ConstraintBase::new(config),
            segment: LineSegment::new(start, end),
        }
    }

    pub fn segment(&self) -> &LineSegment {
        &self.segment
    }

    pub fn start_point(&self) -> Point3 {
        self.segment.start()
    }

    pub fn end_point(&self) -> Point3 {
        self.segment.end()
    }

    pub fn set_start_point(&mut self, start: Point3) {
        self.segment.set_start(start);
    }

    pub fn set_end_point(&mut self, end: Point3) {
        self.segment.set_end(end);
    }
}

impl Constraint for LineConstraint {
    fn test_constraint(&self, test_point: Point3) -> Option<Snap> {
        let t = self.segment.project_to_parametric(test_point);
        Some(Snap::new(test_point, self.segment.eval_segment(t)))
    }

    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    use snap_math::Real;

    fn p(x: Real, y: Real, z: Real) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_interior_projection() {
        let constraint = LineConstraint::new(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0));
        let snap = constraint.test_constraint(p(4.0, 3.0, 0.0)).unwrap();
        assert!((snap.proxy - p(4.0, 0.0, 0.0)).length() < 1e-6);
        assert_abs_diff_eq!(snap.distance, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_proxy_clamped_to_endpoints() {
        let constraint = LineConstraint::new(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0));
        let snap = constraint.test_constraint(p(-3.0, 4.0, 0.0)).unwrap();
        assert_eq!(snap.proxy, constraint.start_point());
        assert_abs_diff_eq!(snap.distance, 5.0, epsilon = 1e-6);

        let snap = constraint.test_constraint(p(12.0, 0.0, 0.0)).unwrap();
        assert_eq!(snap.proxy, constraint.end_point());
    }

    #[test]
    fn test_endpoint_setters() {
        let mut constraint = LineConstraint::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        constraint.set_end_point(p(0.0, 0.0, 8.0));
        constraint.set_start_point(p(0.0, 0.0, 2.0));
        assert_abs_diff_eq!(constraint.segment().length(), 6.0, epsilon = 1e-6);
        let snap = constraint.test_constraint(p(1.0, 0.0, 5.0)).unwrap();
        assert!((snap.proxy - p(0.0, 0.0, 5.0)).length() < 1e-6);
    }

    #[test]
    fn test_degenerate_line_acts_as_point() {
        let constraint = LineConstraint::new(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0));
        let snap = constraint.test_constraint(p(1.0, 1.0, 4.0)).unwrap();
        assert_eq!(snap.proxy, p(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(snap.distance, 3.0, epsilon = 1e-6);
    }
}
