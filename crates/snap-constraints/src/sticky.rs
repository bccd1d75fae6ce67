use snap_math::{Point3, Real};
use tracing::debug;

use crate::constraint::{Applied, Constraint, ConstraintBase, Snap};
use crate::handle::ConstraintRef;

/// Keeps a constraint engaged: [`Constraint::apply_constraint`] never
/// reports done, whatever the wrapped constraint decided, so only the
/// owner's [`Constraint::end_constraint`] releases it.
///
/// Geometry, snap distance and the anti-constraint flag are read from and
/// written to the wrapped constraint. Dropping the wrapper drops an owned
/// inner constraint and only releases the handle on a shared one.
#[derive(Debug)]
pub struct Sticky {
    base: ConstraintBase,
    inner: ConstraintRef,
}

impl Sticky {
    pub fn new(inner: impl Into<ConstraintRef>) -> Self {
        Self {
            base: ConstraintBase::default(),
            inner: inner.into(),
        }
    }

    pub fn inner(&self) -> &ConstraintRef {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut ConstraintRef {
        &mut self.inner
    }

    pub fn into_inner(self) -> ConstraintRef {
        self.inner
    }
}

impl Constraint for Sticky {
    fn test_constraint(&self, test_point: Point3) -> Option<Snap> {
        self.inner.test_constraint(test_point)
    }

    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn apply_constraint(&mut self, test_point: Point3) -> Option<Applied> {
        let applied = self.inner.apply_constraint(test_point);
        if self.inner.is_done() || self.base.is_done() {
            debug!("sticky constraint re-engaged");
        }
        self.inner.set_done(false);
        self.base.set_done(false);
        applied.map(|applied| Applied {
            proceed: true,
            ..applied
        })
    }

    fn snap_distance(&self) -> Real {
        self.inner.snap_distance()
    }

    fn set_snap_distance(&mut self, snap_distance: Real) {
        self.inner.set_snap_distance(snap_distance);
    }

    fn is_anti_constraint(&self) -> bool {
        self.inner.is_anti_constraint()
    }

    fn set_anti_constraint(&mut self, anti_constraint: bool) {
        self.inner.set_anti_constraint(anti_constraint);
    }

    fn on_start_constraint(&mut self) {
        self.inner.start_constraint();
    }

    fn on_end_constraint(&mut self) {
        self.inner.end_constraint();
    }
}
