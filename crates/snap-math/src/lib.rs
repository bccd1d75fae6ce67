//! Geometry primitives for the snap constraint engine.
//!
//! Scalars and vectors are `f64` / [`glam::DVec3`] by default; enabling the
//! `single-precision` feature switches the whole engine to `f32` /
//! [`glam::Vec3`].

pub mod line;
pub mod plane;
pub mod segment;

pub use line::Line;
pub use plane::{Plane, PlaneHit, PlaneSide};
pub use segment::{LineSegment, SegmentDistance};

#[cfg(not(feature = "single-precision"))]
mod precision {
    pub type Real = f64;
    pub type Vector3 = glam::DVec3;

    /// Default geometric tolerance.
    pub const EPSILON: Real = 1e-9;
}

#[cfg(feature = "single-precision")]
mod precision {
    pub type Real = f32;
    pub type Vector3 = glam::Vec3;

    /// Default geometric tolerance.
    pub const EPSILON: Real = 1e-5;
}

pub use precision::{Real, Vector3, EPSILON};

pub type Point3 = Vector3;
