//! Implicit plane `a*x + b*y + c*z + d = 0` with a unit normal.

use serde::{Deserialize, Serialize};
use snap_core::{Result, SnapError};

use crate::{Line, LineSegment, Point3, Real, Vector3, EPSILON};

/// Which half-space a crossing entered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneSide {
    /// The side the normal points toward.
    Front,
    Back,
}

/// A line or segment crossing a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    pub point: Point3,
    /// Parameter along the tested line or segment.
    pub t: Real,
    pub side: PlaneSide,
}

/// A plane stored as unit normal and offset, so that
/// `perp_distance(p) = dot(normal, p) + d` is a signed Euclidean distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    normal: Vector3,
    d: Real,
}

fn unit(v: Vector3, what: &str) -> Result<Vector3> {
    v.try_normalize()
        .ok_or_else(|| SnapError::Degenerate(format!("{what} has zero or non-finite length")))
}

impl Plane {
    /// Build from the four plane coefficients; normal and offset are rescaled.
    pub fn from_coefficients(a: Real, b: Real, c: Real, d: Real) -> Result<Self> {
        let n = Vector3::new(a, b, c);
        let len = n.length();
        let normal = unit(n, "plane normal")?;
        Ok(Self { normal, d: d / len })
    }

    pub fn from_normal_point(normal: Vector3, point: Point3) -> Result<Self> {
        let normal = unit(normal, "plane normal")?;
        Ok(Self {
            normal,
            d: -normal.dot(point),
        })
    }

    /// Plane through three points, normal `normalize((p2 - p1) x (p3 - p1))`.
    pub fn from_points(p1: Point3, p2: Point3, p3: Point3) -> Result<Self> {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let n = e1.cross(e2);
        if n.length_squared() <= EPSILON * EPSILON * e1.length_squared() * e2.length_squared() {
            return Err(SnapError::Degenerate(
                "plane points are collinear".to_string(),
            ));
        }
        Self::from_normal_point(n, p1)
    }

    pub fn xy() -> Self {
        Self {
            normal: Vector3::Z,
            d: 0.0,
        }
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    pub fn d(&self) -> Real {
        self.d
    }

    /// The point of the plane closest to the origin.
    pub fn point_on_plane(&self) -> Point3 {
        -self.d * self.normal
    }

    /// Reorient the plane about [`Plane::point_on_plane`].
    pub fn set_normal(&mut self, normal: Vector3) -> Result<()> {
        let anchor = self.point_on_plane();
        *self = Self::from_normal_point(normal, anchor)?;
        Ok(())
    }

    /// Move the plane so it passes through `point`, keeping the orientation.
    pub fn set_point(&mut self, point: Point3) {
        self.d = -self.normal.dot(point);
    }

    /// Swap front and back.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.d = -self.d;
    }

    /// Signed distance, positive in front of the plane.
    pub fn perp_distance(&self, pt: Point3) -> Real {
        self.normal.dot(pt) + self.d
    }

    pub fn project_point(&self, pt: Point3) -> Point3 {
        pt - self.perp_distance(pt) * self.normal
    }

    /// Project onto the plane, then lift the result `offset` along the normal.
    pub fn project_point_offset(&self, pt: Point3, offset: Real) -> Point3 {
        self.project_point(pt) + offset * self.normal
    }

    /// Crossing from front to back: the start must be at or in front of the
    /// plane and the end at or behind it, both within `epsilon`.
    pub fn intersect_segment_front(&self, segment: &LineSegment, epsilon: Real) -> Option<PlaneHit> {
        let start_dist = self.perp_distance(segment.start());
        let end_dist = self.perp_distance(segment.end());
        if start_dist < -epsilon || end_dist > epsilon {
            return None;
        }
        self.segment_crossing(segment, start_dist, epsilon, PlaneSide::Front)
    }

    /// Crossing from back to front.
    pub fn intersect_segment_back(&self, segment: &LineSegment, epsilon: Real) -> Option<PlaneHit> {
        let start_dist = self.perp_distance(segment.start());
        let end_dist = self.perp_distance(segment.end());
        if start_dist > epsilon || end_dist < -epsilon {
            return None;
        }
        self.segment_crossing(segment, start_dist, epsilon, PlaneSide::Back)
    }

    /// Crossing in either direction; the front test takes precedence.
    pub fn intersect_segment_front_and_back(
        &self,
        segment: &LineSegment,
        epsilon: Real,
    ) -> Option<PlaneHit> {
        self.intersect_segment_front(segment, epsilon)
            .or_else(|| self.intersect_segment_back(segment, epsilon))
    }

    fn segment_crossing(
        &self,
        segment: &LineSegment,
        start_dist: Real,
        epsilon: Real,
        side: PlaneSide,
    ) -> Option<PlaneHit> {
        let facing = self.normal.dot(segment.unit_direction());
        if facing.abs() < epsilon {
            return None;
        }
        let t = -start_dist / (facing * segment.length());
        Some(PlaneHit {
            point: segment.eval(t),
            t,
            side,
        })
    }

    /// Infinite line heading against the normal.
    pub fn intersect_line_front(&self, line: &Line, epsilon: Real) -> Option<PlaneHit> {
        self.line_crossing(line, epsilon)
            .filter(|hit| hit.side == PlaneSide::Front)
    }

    /// Infinite line heading along the normal.
    pub fn intersect_line_back(&self, line: &Line, epsilon: Real) -> Option<PlaneHit> {
        self.line_crossing(line, epsilon)
            .filter(|hit| hit.side == PlaneSide::Back)
    }

    pub fn intersect_line_front_and_back(&self, line: &Line, epsilon: Real) -> Option<PlaneHit> {
        self.line_crossing(line, epsilon)
    }

    fn line_crossing(&self, line: &Line, epsilon: Real) -> Option<PlaneHit> {
        let dir = line.direction();
        let unit_dir = dir.try_normalize()?;
        let facing = self.normal.dot(unit_dir);
        if facing.abs() < epsilon {
            return None;
        }
        let t = -self.perp_distance(line.p1()) / self.normal.dot(dir);
        let side = if facing < 0.0 {
            PlaneSide::Front
        } else {
            PlaneSide::Back
        };
        Some(PlaneHit {
            point: line.eval(t),
            t,
            side,
        })
    }
}
