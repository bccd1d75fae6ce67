use snap_core::{Result, SnapConfig};
use snap_math::{Plane, Point3, Vector3};

use crate::constraint::{Constraint, ConstraintBase, Snap};

/// Snaps to an infinite plane given by a point on it and a normal.
#[derive(Debug, Clone)]
pub struct PlaneConstraint {
    base: ConstraintBase,
    point: Point3,
    plane: Plane,
}

impl PlaneConstraint {
    /// Fails with [`snap_core::SnapError::Degenerate`] on a zero normal.
    pub fn new(point: Point3, normal: Vector3) -> Result<Self> {
        Self::with_config(point, normal, &SnapConfig::default())
    }

    pub fn with_config(point: Point3, normal: Vector3, config: &SnapConfig) -> Result<Self> {
        Ok(Self {
            base: ConstraintBase::new(config),
            point,
            plane: Plane::from_normal_point(normal, point)?,
        })
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn normal(&self) -> Vector3 {
        self.plane.normal()
    }

    pub fn set_point(&mut self, point: Point3) {
        self.point = point;
        self.plane.set_point(point);
    }

    /// Reorient about the stored point. The constraint is unchanged on error.
    pub fn set_normal(&mut self, normal: Vector3) -> Result<()> {
        self.plane = Plane::from_normal_point(normal, self.point)?;
        Ok(())
    }
}

impl Constraint for PlaneConstraint {
    fn test_constraint(&self, test_point: Point3) -> Option<Snap> {
        Some(Snap {
            proxy: self.plane.project_point(test_point),
            distance: self.plane.perp_distance(test_point).abs(),
        })
    }

    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }
}
