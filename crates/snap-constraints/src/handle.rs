use std::cell::RefCell;
use std::rc::Rc;

use snap_math::{Point3, Real};

use crate::constraint::{Applied, Constraint, Snap};

/// How a container holds one of its constraints.
///
/// `Owned` members are dropped with their container (they are
/// auto-deleted); `Shared` members stay alive for whoever else holds the
/// `Rc`, the container only releasing its own handle.
#[derive(Debug)]
pub enum ConstraintRef {
    Owned(Box<dyn Constraint>),
    Shared(Rc<RefCell<dyn Constraint>>),
}

impl ConstraintRef {
    pub fn owned(constraint: impl Constraint + 'static) -> Self {
        Self::Owned(Box::new(constraint))
    }

    pub fn shared(constraint: Rc<RefCell<dyn Constraint>>) -> Self {
        Self::Shared(constraint)
    }

    /// Whether the container is responsible for destroying this constraint.
    pub fn auto_delete(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Run `f` against the constraint.
    ///
    /// # Panics
    ///
    /// Panics if a shared constraint is already mutably borrowed. A composite
    /// that (indirectly) contains itself does not panic on the shared borrows
    /// taken here: evaluating it recurses until the stack overflows.
    pub fn with<R>(&self, f: impl FnOnce(&(dyn Constraint + 'static)) -> R) -> R {
        match self {
            Self::Owned(constraint) => f(&**constraint),
            Self::Shared(constraint) => f(&*constraint.borrow()),
        }
    }

    /// # Panics
    ///
    /// Panics if a shared constraint is already borrowed, which is what
    /// starting, ending or applying a composite that contains itself runs into.
    pub fn with_mut<R>(&mut self, f: impl FnOnce(&mut (dyn Constraint + 'static)) -> R) -> R {
        match self {
            Self::Owned(constraint) => f(&mut **constraint),
            Self::Shared(constraint) => f(&mut *constraint.borrow_mut()),
        }
    }

    pub fn test_constraint(&self, test_point: Point3) -> Option<Snap> {
        self.with(|c| c.test_constraint(test_point))
    }

    pub fn apply_constraint(&mut self, test_point: Point3) -> Option<Applied> {
        self.with_mut(|c| c.apply_constraint(test_point))
    }

    pub fn start_constraint(&mut self) {
        self.with_mut(|c| c.start_constraint());
    }

    pub fn end_constraint(&mut self) {
        self.with_mut(|c| c.end_constraint());
    }

    pub fn snap_distance(&self) -> Real {
        self.with(|c| c.snap_distance())
    }

    pub fn set_snap_distance(&mut self, snap_distance: Real) {
        self.with_mut(|c| c.set_snap_distance(snap_distance));
    }

    pub fn is_anti_constraint(&self) -> bool {
        self.with(|c| c.is_anti_constraint())
    }

    pub fn set_anti_constraint(&mut self, anti_constraint: bool) {
        self.with_mut(|c| c.set_anti_constraint(anti_constraint));
    }

    pub fn is_done(&self) -> bool {
        self.with(|c| c.is_done())
    }

    pub fn set_done(&mut self, done: bool) {
        self.with_mut(|c| c.set_done(done));
    }
}

impl<C: Constraint + 'static> From<C> for ConstraintRef {
    fn from(constraint: C) -> Self {
        Self::owned(constraint)
    }
}

impl From<Rc<RefCell<dyn Constraint>>> for ConstraintRef {
    fn from(constraint: Rc<RefCell<dyn Constraint>>) -> Self {
        Self::shared(constraint)
    }
}
