use std::any::Any;
use std::fmt;
use std::rc::Rc;

use snap_core::SnapConfig;
use snap_math::{Point3, Real};
use tracing::debug;

/// Opaque value carried by a constraint on behalf of the application.
/// The engine never inspects it.
pub type UserData = Rc<dyn Any>;

/// Outcome of evaluating a constraint against a test point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    pub proxy: Point3,
    pub distance: Real,
}

impl Snap {
    pub fn new(test_point: Point3, proxy: Point3) -> Self {
        Self {
            proxy,
            distance: test_point.distance(proxy),
        }
    }

    pub fn within(&self, snap_distance: Real) -> bool {
        self.distance < snap_distance
    }
}

/// Outcome of [`Constraint::apply_constraint`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Applied {
    /// `false` once the constraint reports itself done.
    pub proceed: bool,
    pub proxy: Point3,
    pub distance: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintPhase {
    Inactive,
    Active,
    Done,
}

/// Bookkeeping shared by every constraint.
#[derive(Debug, Clone)]
pub struct ConstraintBase {
    snap_distance: Real,
    active: bool,
    done: bool,
    anti_constraint: bool,
    user_data: Option<UserData>,
}

impl ConstraintBase {
    pub fn new(config: &SnapConfig) -> Self {
        Self {
            snap_distance: config.default_snap_distance as Real,
            active: false,
            done: false,
            anti_constraint: false,
            user_data: None,
        }
    }

    pub fn phase(&self) -> ConstraintPhase {
        match (self.active, self.done) {
            (false, _) => ConstraintPhase::Inactive,
            (true, false) => ConstraintPhase::Active,
            (true, true) => ConstraintPhase::Done,
        }
    }

    /// Enter `Active`; a fresh activation clears any earlier completion.
    pub fn activate(&mut self) {
        self.active = true;
        self.done = false;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn snap_distance(&self) -> Real {
        self.snap_distance
    }

    pub fn set_snap_distance(&mut self, snap_distance: Real) {
        self.snap_distance = snap_distance;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub fn is_anti_constraint(&self) -> bool {
        self.anti_constraint
    }

    pub fn set_anti_constraint(&mut self, anti_constraint: bool) {
        self.anti_constraint = anti_constraint;
    }

    pub fn user_data(&self) -> Option<&UserData> {
        self.user_data.as_ref()
    }

    pub fn set_user_data(&mut self, user_data: Option<UserData>) {
        self.user_data = user_data;
    }
}

impl Default for ConstraintBase {
    fn default() -> Self {
        Self::new(&SnapConfig::default())
    }
}

/// A geometric locus a test point can be snapped to.
///
/// Implementors provide [`Constraint::test_constraint`] and access to their
/// [`ConstraintBase`]; everything else has a default. `test_constraint`
/// must not change any state and returns `None` only when the constraint
/// has nothing to offer (an empty composite, for instance).
pub trait Constraint: fmt::Debug {
    fn test_constraint(&self, test_point: Point3) -> Option<Snap>;

    fn base(&self) -> &ConstraintBase;

    fn base_mut(&mut self) -> &mut ConstraintBase;

    fn apply_constraint(&mut self, test_point: Point3) -> Option<Applied> {
        let snap = self.test_constraint(test_point)?;
        Some(Applied {
            proceed: !self.is_done(),
            proxy: snap.proxy,
            distance: snap.distance,
        })
    }

    /// Hook run after the owner activates the constraint.
    fn on_start_constraint(&mut self) {}

    /// Hook run before the owner deactivates the constraint.
    fn on_end_constraint(&mut self) {}

    fn start_constraint(&mut self) {
        self.base_mut().activate();
        debug!(snap_distance = self.snap_distance() as f64, "constraint started");
        self.on_start_constraint();
    }

    fn end_constraint(&mut self) {
        self.on_end_constraint();
        debug!(done = self.is_done(), "constraint ended");
        self.base_mut().deactivate();
    }

    fn phase(&self) -> ConstraintPhase {
        self.base().phase()
    }

    fn snap_distance(&self) -> Real {
        self.base().snap_distance()
    }

    fn set_snap_distance(&mut self, snap_distance: Real) {
        self.base_mut().set_snap_distance(snap_distance);
    }

    fn is_done(&self) -> bool {
        self.base().is_done()
    }

    fn set_done(&mut self, done: bool) {
        self.base_mut().set_done(done);
    }

    fn is_anti_constraint(&self) -> bool {
        self.base().is_anti_constraint()
    }

    fn set_anti_constraint(&mut self, anti_constraint: bool) {
        self.base_mut().set_anti_constraint(anti_constraint);
    }

    fn user_data(&self) -> Option<&UserData> {
        self.base().user_data()
    }

    fn set_user_data(&mut self, user_data: Option<UserData>) {
        self.base_mut().set_user_data(user_data);
    }

    /// The per-tick decision: the snap to honor, if the test point is
    /// within snap distance of a binding constraint.
    fn should_snap(&self, test_point: Point3) -> Option<Snap> {
        if self.is_anti_constraint() {
            return None;
        }
        self.test_constraint(test_point)
            .filter(|snap| snap.within(self.snap_distance()))
    }
}
