use std::fmt;

use snap_core::SnapConfig;
use snap_math::Point3;

use crate::constraint::{Constraint, ConstraintBase, Snap};

/// Application-defined constraint: a closure maps each test point to its
/// proxy, and the distance is taken between the two.
pub struct CustomConstraint<F> {
    base: ConstraintBase,
    project: F,
}

impl<F> CustomConstraint<F>
where
    F: Fn(Point3) -> Point3,
{
    pub fn new(project: F) -> Self {
        Self::with_config(project, &SnapConfig::default())
    }

    pub fn with_config(project: F, config: &SnapConfig) -> Self {
        Self {
            base: ConstraintBase::new(config),
            project,
        }
    }
}

impl<F> fmt::Debug for CustomConstraint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomConstraint")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<F> Constraint for CustomConstraint<F>
where
    F: Fn(Point3) -> Point3,
{
    fn test_constraint(&self, test_point: Point3) -> Option<Snap> {
        Some(Snap::new(test_point, (self.project)(test_point)))
    }

    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }
}
