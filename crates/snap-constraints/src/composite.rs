//! Constraints built from a group of other constraints.

use snap_core::SnapConfig;
use snap_math::Point3;
use tracing::trace;

use crate::constraint::{Constraint, ConstraintBase, Snap};
use crate::group::ConstraintGroup;
use crate::handle::ConstraintRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMode {
    /// Feed each member's proxy into the next member, in insertion order.
    Sequential,
    /// Test every member against the original point; the nearest wins.
    Nearest,
}

/// A constraint that resolves its [`ConstraintGroup`] in one of the
/// [`CompositeMode`]s. Composites nest; a composite must not end up
/// containing itself.
///
/// An empty group (or one whose members all decline) yields `None` from
/// [`Constraint::test_constraint`]: no constraint is active.
#[derive(Debug)]
pub struct CompositeConstraint {
    base: ConstraintBase,
    mode: CompositeMode,
    group: ConstraintGroup,
}

impl CompositeConstraint {
    pub fn new(mode: CompositeMode) -> Self {
        Self::with_config(mode, &SnapConfig::default())
    }

    pub fn with_config(mode: CompositeMode, config: &SnapConfig) -> Self {
        Self {
            base: ConstraintBase::new(config),
            mode,
            group: ConstraintGroup::new(),
        }
    }

    pub fn sequential() -> Self {
        Self::new(CompositeMode::Sequential)
    }

    pub fn nearest() -> Self {
        Self::new(CompositeMode::Nearest)
    }

    /// Builder-style [`ConstraintGroup::push`].
    pub fn with(mut self, constraint: impl Into<ConstraintRef>) -> Self {
        self.group.push(constraint);
        self
    }

    pub fn mode(&self) -> CompositeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CompositeMode) {
        self.mode = mode;
    }

    pub fn group(&self) -> &ConstraintGroup {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut ConstraintGroup {
        &mut self.group
    }

    pub fn add(&mut self, constraint: impl Into<ConstraintRef>) {
        self.group.push(constraint);
    }

    /// Chain the members. The first member to answer always moves the
    /// running point; later members only when they land within their own
    /// snap distance. Anti-constraints never move it.
    fn test_sequential(&self, test_point: Point3) -> Option<Snap> {
        let mut current = test_point;
        let mut proxy = None;

        for (index, member) in self.group.iter().enumerate() {
            if member.is_anti_constraint() {
                trace!(index, "sequential: skipping anti-constraint");
                continue;
            }
            let Some(snap) = member.test_constraint(current) else {
                continue;
            };
            if proxy.is_none() || snap.within(member.snap_distance()) {
                trace!(index, distance = snap.distance as f64, "sequential: accepted");
                current = snap.proxy;
                proxy = Some(snap.proxy);
            }
        }

        proxy.map(|proxy| Snap::new(test_point, proxy))
    }

    /// First strictly smallest distance wins. If the winner is an
    /// anti-constraint the whole composite is suppressed.
    fn test_nearest(&self, test_point: Point3) -> Option<Snap> {
        let mut best: Option<(usize, Snap, bool)> = None;

        for (index, member) in self.group.iter().enumerate() {
            let Some(snap) = member.test_constraint(test_point) else {
                continue;
            };
            if best.map_or(true, |(_, current, _)| snap.distance < current.distance) {
                best = Some((index, snap, member.is_anti_constraint()));
            }
        }

        match best {
            Some((index, _, true)) => {
                trace!(index, "nearest: suppressed by anti-constraint");
                None
            }
            Some((index, snap, false)) => {
                trace!(index, distance = snap.distance as f64, "nearest: selected");
                Some(Snap::new(test_point, snap.proxy))
            }
            None => None,
        }
    }
}

impl Constraint for CompositeConstraint {
    fn test_constraint(&self, test_point: Point3) -> Option<Snap> {
        match self.mode {
            CompositeMode::Sequential => self.test_sequential(test_point),
            CompositeMode::Nearest => self.test_nearest(test_point),
        }
    }

    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn on_start_constraint(&mut self) {
        for member in self.group.iter_mut() {
            member.start_constraint();
        }
    }

    fn on_end_constraint(&mut self) {
        for member in self.group.iter_mut() {
            member.end_constraint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineConstraint, PlaneConstraint, PointConstraint};
    use approx::assert_abs_diff_eq;
    use snap_math::{Real, Vector3};

    fn p(x: Real, y: Real, z: Real) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_empty_group_is_inactive() {
        let mut sequential = CompositeConstraint::sequential();
        let mut nearest = CompositeConstraint::nearest();
        assert!(sequential.test_constraint(p(1.0, 2.0, 3.0)).is_none());
        assert!(nearest.test_constraint(p(1.0, 2.0, 3.0)).is_none());
        assert!(sequential.apply_constraint(p(1.0, 2.0, 3.0)).is_none());
        assert!(nearest.should_snap(p(1.0, 2.0, 3.0)).is_none());
    }

    #[test]
    fn test_sequential_rejects_far_member() {
        // The line sits 4 away from the plane proxy, beyond its snap distance.
        let composite = CompositeConstraint::sequential()
            .with(PlaneConstraint::new(Point3::ZERO, Vector3::Z).unwrap())
            .with(LineConstraint::new(p(-10.0, 0.0, 0.0), p(10.0, 0.0, 0.0)));
        let snap = composite.test_constraint(p(3.0, 4.0, 5.0)).unwrap();
        assert!((snap.proxy - p(3.0, 4.0, 0.0)).length() < 1e-6);
        assert_abs_diff_eq!(snap.distance, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sequential_first_member_always_accepted() {
        let mut far = PointConstraint::new(p(100.0, 0.0, 0.0));
        far.set_snap_distance(0.0);
        let composite = CompositeConstraint::sequential().with(far);
        let snap = composite.test_constraint(Point3::ZERO).unwrap();
        assert_eq!(snap.proxy, p(100.0, 0.0, 0.0));
    }

    #[test]
    fn test_nearest_tie_keeps_first() {
        let composite = CompositeConstraint::nearest()
            .with(PointConstraint::new(p(-1.0, 0.0, 0.0)))
            .with(PointConstraint::new(p(1.0, 0.0, 0.0)));
        let snap = composite.test_constraint(Point3::ZERO).unwrap();
        assert_eq!(snap.proxy, p(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_nearest_anti_constraint_suppresses() {
        let mut anti = PointConstraint::new(p(0.0, 0.5, 0.0));
        anti.set_anti_constraint(true);
        let composite = CompositeConstraint::nearest()
            .with(PointConstraint::new(p(0.0, 2.0, 0.0)))
            .with(anti);
        assert!(composite.test_constraint(Point3::ZERO).is_none());
        // Far from the anti-constraint, the binding member wins again.
        let snap = composite.test_constraint(p(0.0, 3.0, 0.0)).unwrap();
        assert_eq!(snap.proxy, p(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_sequential_skips_anti_constraint() {
        let mut anti = PointConstraint::new(p(5.0, 5.0, 5.0));
        anti.set_anti_constraint(true);
        let composite = CompositeConstraint::sequential()
            .with(anti)
            .with(PlaneConstraint::new(Point3::ZERO, Vector3::Z).unwrap());
        let snap = composite.test_constraint(p(1.0, 1.0, 1.0)).unwrap();
        assert!((snap.proxy - p(1.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_start_and_end_propagate() {
        let mut composite = CompositeConstraint::nearest()
            .with(PointConstraint::new(Point3::ZERO))
            .with(CompositeConstraint::sequential().with(PointConstraint::new(Point3::X)));
        composite.start_constraint();
        assert_eq!(composite.phase(), crate::ConstraintPhase::Active);
        for member in composite.group() {
            assert!(member.with(|c| c.phase() == crate::ConstraintPhase::Active));
        }
        composite.end_constraint();
        for member in composite.group() {
            assert!(member.with(|c| c.phase() == crate::ConstraintPhase::Inactive));
        }
    }

    #[test]
    fn test_mode_switch() {
        let mut composite = CompositeConstraint::sequential()
            .with(PointConstraint::new(p(0.0, 0.0, 10.0)))
            .with(PointConstraint::new(p(0.0, 0.0, 1.0)));
        // Sequential: the second point is 9 away from the first proxy, rejected.
        let snap = composite.test_constraint(Point3::ZERO).unwrap();
        assert_eq!(snap.proxy, p(0.0, 0.0, 10.0));

        composite.set_mode(CompositeMode::Nearest);
        let snap = composite.test_constraint(Point3::ZERO).unwrap();
        assert_eq!(snap.proxy, p(0.0, 0.0, 1.0));
    }
}
