use snap_core::SnapConfig;
use snap_math::Point3;

use crate::constraint::{Constraint, ConstraintBase, Snap};

/// Snaps to a single fixed point.
#[derive(Debug, Clone)]
pub struct PointConstraint {
    base: ConstraintBase,
    point: Point3,
}

impl PointConstraint {
    pub fn new(point: Point3) -> Self {
        Self::with_config(point, &SnapConfig::default())
    }

    pub fn with_config(point: Point3, config: &SnapConfig) -> Self {
        Self {
            base: ConstraintBase::new(config),
            point,
        }
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn set_point(&mut self, point: Point3) {
        self.point = point;
    }
}

impl Constraint for PointConstraint {
    fn test_constraint(&self, test_point: Point3) -> Option<Snap> {
        Some(Snap::new(test_point, self.point))
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

    #[test]
    fn test_proxy_is_fixed_point() {
        let constraint = PointConstraint::new(Point3::new(1.0, 2.0, 3.0));
        for test_point in [Point3::ZERO, Point3::new(1.0, 2.0, 7.0), Point3::new(-4.0, 0.0, 0.0)] {
            let snap = constraint.test_constraint(test_point).unwrap();
            assert_eq!(snap.proxy, constraint.point());
        }
        let snap = constraint.test_constraint(Point3::new(1.0, 2.0, 7.0)).unwrap();
        assert_abs_diff_eq!(snap.distance, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_should_snap_respects_snap_distance() {
        let mut constraint = PointConstraint::new(Point3::ZERO);
        assert!(constraint.should_snap(Point3::new(1.0, 0.0, 0.0)).is_some());
        assert!(constraint.should_snap(Point3::new(2.0, 0.0, 0.0)).is_none());

        constraint.set_snap_distance(3.0);
        assert!(constraint.should_snap(Point3::new(2.0, 0.0, 0.0)).is_some());

        constraint.set_anti_constraint(true);
        assert!(constraint.should_snap(Point3::new(0.5, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_set_point() {
        let mut constraint = PointConstraint::new(Point3::ZERO);
        constraint.set_point(Point3::new(0.0, 5.0, 0.0));
        let snap = constraint.test_constraint(Point3::ZERO).unwrap();
        assert_abs_diff_eq!(snap.distance, 5.0, epsilon = 1e-9);
    }
}
