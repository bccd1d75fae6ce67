//! Finite line segment.

use serde::{Deserialize, Serialize};

use crate::{Line, Point3, Real, Vector3};

/// Result of [`LineSegment::dist_from_segment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDistance {
    pub distance: Real,
    /// Parameter on the segment the query was made on.
    pub t: Real,
    /// Parameter on the other segment.
    pub s: Real,
}

/// Segment from `start` to `end`, the line's parametric form restricted to
/// `t` in `[0, 1]`.
///
/// Length and unit direction are recomputed by every endpoint setter. The
/// unit direction of a zero-length segment is the zero vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Line", into = "Line")]
pub struct LineSegment {
    line: Line,
    length: Real,
    unit_direction: Vector3,
}

impl LineSegment {
    pub fn new(start: Point3, end: Point3) -> Self {
        let mut segment = Self {
            line: Line::new(start, end),
            length: 0.0,
            unit_direction: Vector3::ZERO,
        };
        segment.update_cache();
        segment
    }

    fn update_cache(&mut self) {
        let dir = self.line.direction();
        self.length = dir.length();
        self.unit_direction = if self.length > 0.0 {
            dir / self.length
        } else {
            Vector3::ZERO
        };
    }

    pub fn start(&self) -> Point3 {
        self.line.p1()
    }

    pub fn end(&self) -> Point3 {
        self.line.p2()
    }

    pub fn set_start(&mut self, start: Point3) {
        self.line.set_p1(start);
        self.update_cache();
    }

    pub fn set_end(&mut self, end: Point3) {
        self.line.set_p2(end);
        self.update_cache();
    }

    /// The infinite line carrying this segment.
    pub fn line(&self) -> &Line {
        &self.line
    }

    pub fn length(&self) -> Real {
        self.length
    }

    pub fn unit_direction(&self) -> Vector3 {
        self.unit_direction
    }

    pub fn is_degenerate(&self) -> bool {
        self.length == 0.0
    }

    /// Unclamped evaluation, identical to [`Line::eval`].
    pub fn eval(&self, t: Real) -> Point3 {
        self.start() + (t * self.length) * self.unit_direction
    }

    /// Evaluation with `t` clamped to `[0, 1]`; always a point on the segment.
    pub fn eval_segment(&self, t: Real) -> Point3 {
        if t <= 0.0 {
            self.start()
        } else if t >= 1.0 {
            self.end()
        } else {
            self.eval(t)
        }
    }

    /// Parameter of the closest point on the segment to `pt`, in `[0, 1]`.
    /// A degenerate segment collapses to its start and always yields `0`.
    pub fn project_to_parametric(&self, pt: Point3) -> Real {
        if self.is_degenerate() {
            return 0.0;
        }
        let t = (pt - self.start()).dot(self.unit_direction) / self.length;
        t.clamp(0.0, 1.0)
    }

    pub fn closest_point(&self, pt: Point3) -> Point3 {
        self.eval_segment(self.project_to_parametric(pt))
    }

    pub fn dist_point_segment(&self, pt: Point3) -> Real {
        self.closest_point(pt).distance(pt)
    }

    pub fn dist_sq_point_segment(&self, pt: Point3) -> Real {
        self.closest_point(pt).distance_squared(pt)
    }

    /// Minimum distance between two segments, with the parameters on each
    /// at which it occurs.
    ///
    /// The infinite-line closest approach is used when it lands inside both
    /// segments. Otherwise the four endpoint projections are compared in the
    /// order `start(self)`, `end(self)`, `start(other)`, `end(other)`, and
    /// the first strictly smallest one wins.
    pub fn dist_from_segment(&self, other: &LineSegment, epsilon: Real) -> SegmentDistance {
        if let Some((t, s)) = self.line.closest_approach(&other.line, epsilon) {
            if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&s) {
                return SegmentDistance {
                    distance: self.eval(t).distance(other.eval(s)),
                    t,
                    s,
                };
            }
        }

        let s_start = other.project_to_parametric(self.start());
        let s_end = other.project_to_parametric(self.end());
        let t_start = self.project_to_parametric(other.start());
        let t_end = self.project_to_parametric(other.end());

        let candidates = [(0.0, s_start), (1.0, s_end), (t_start, 0.0), (t_end, 1.0)];

        let mut best = SegmentDistance {
            distance: Real::INFINITY,
            t: 0.0,
            s: 0.0,
        };
        for (t, s) in candidates {
            let distance = self.eval_segment(t).distance(other.eval_segment(s));
            if distance < best.distance {
                best = SegmentDistance { distance, t, s };
            }
        }
        best
    }
}

impl From<Line> for LineSegment {
    fn from(line: Line) -> Self {
        Self::new(line.p1(), line.p2())
    }
}

impl From<LineSegment> for Line {
    fn from(segment: LineSegment) -> Self {
        segment.line
    }
}
