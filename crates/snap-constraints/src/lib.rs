//! Snap-to constraint resolution.
//!
//! A [`Constraint`] maps a test point (a cursor or probe position) to the
//! nearest point on its locus, the proxy point, together with the distance
//! between the two. Callers evaluate once per control-loop tick and honor
//! the proxy when the distance falls under the constraint's snap distance.
//!
//! Leaves ([`PointConstraint`], [`LineConstraint`], [`PlaneConstraint`],
//! [`CustomConstraint`]) wrap the geometry in `snap-math`;
//! [`CompositeConstraint`] chains or races a [`ConstraintGroup`], and
//! [`Sticky`] keeps any constraint engaged until its owner ends it.

mod composite;
mod constraint;
mod custom;
mod group;
mod handle;
mod line;
mod plane;
mod point;
mod sticky;

pub use composite::{CompositeConstraint, CompositeMode};
pub use constraint::{Applied, Constraint, ConstraintBase, ConstraintPhase, Snap, UserData};
pub use custom::CustomConstraint;
pub use group::ConstraintGroup;
pub use handle::ConstraintRef;
pub use line::LineConstraint;
pub use plane::PlaneConstraint;
pub use point::PointConstraint;
pub use sticky::Sticky;

pub use snap_core::{Result, SnapConfig, SnapError};
pub use snap_math::{Point3, Real, Vector3};
