use glam::Vec2;

use crate::{core::filter::QueryFilter, utils::allocator::ObjectId};

/// Components smaller than this are treated as parallel to an axis or edge.
const PARALLEL_EPSILON: f32 = 1e-9;

/// Slack on segment parameters so a query starting exactly on an edge still reports it.
const EDGE_TOLERANCE: f32 = 1e-5;

/// Nearest intersection reported by a [`LineQuery`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHit {
    pub point: Vec2,
    pub normal: Vec2,
    pub object: ObjectId,
    /// Portion of the segment travelled before the hit, in `[0, 1]`.
    pub fraction: f32,
}

/// Read-only line-segment query against filterable scene geometry.
///
/// This is the only scene access the controller needs. Implementations return
/// the nearest intersection along `from -> to` among objects selected by
/// `filter`, and must have no side effects.
pub trait LineQuery {
    type Filter: QueryFilter;

    fn linecast(&self, from: Vec2, to: Vec2, filter: &Self::Filter) -> Option<LineHit>;
}

impl<Q: LineQuery + ?Sized> LineQuery for &Q {
    type Filter = Q::Filter;

    fn linecast(&self, from: Vec2, to: Vec2, filter: &Self::Filter) -> Option<LineHit> {
        (**self).linecast(from, to, filter)
    }
}

/// Slab test of the segment `from -> to` against a closed axis-aligned box.
///
/// Returns the entry fraction and face normal. A segment starting inside the
/// box hits at fraction 0 with the normal opposing its travel; a zero-length
/// segment inside the box hits with a zero normal.
pub fn segment_aabb(from: Vec2, to: Vec2, min: Vec2, max: Vec2) -> Option<(f32, Vec2)> {
    let dir = to - from;
    let mut t_min = 0.0_f32;
    let mut t_max = 1.0_f32;
    let mut normal = Vec2::ZERO;

    for i in 0..2 {
        let origin = from[i];
        let d = dir[i];

        if d.abs() < PARALLEL_EPSILON {
            if origin < min[i] || origin > max[i] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t1 = (min[i] - origin) * inv;
        let mut t2 = (max[i] - origin) * inv;
        let mut face_normal = Vec2::ZERO;
        face_normal[i] = -1.0;

        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
            face_normal = -face_normal;
        }

        if t1 >= t_min {
            t_min = t1;
            normal = face_normal;
        }

        t_max = t_max.min(t2);
        if t_min > t_max {
            return None;
        }
    }

    if normal == Vec2::ZERO {
        normal = -dir.normalize_or_zero();
    }
    Some((t_min, normal))
}

/// Intersection of the segment `from -> to` with the two-sided edge `a -> b`.
///
/// The normal faces the side the query came from. Parallel and zero-length
/// queries never hit an edge.
pub fn segment_segment(from: Vec2, to: Vec2, a: Vec2, b: Vec2) -> Option<(f32, Vec2)> {
    let d = to - from;
    let e = b - a;
    let denom = d.perp_dot(e);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let w = a - from;
    let t = w.perp_dot(e) / denom;
    let u = w.perp_dot(d) / denom;
    let range = -EDGE_TOLERANCE..=1.0 + EDGE_TOLERANCE;
    if !range.contains(&t) || !range.contains(&u) {
        return None;
    }

    let mut normal = e.perp().normalize_or_zero();
    if normal.dot(d) > 0.0 {
        normal = -normal;
    }
    Some((t.clamp(0.0, 1.0), normal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_entry_normals_face_the_query() {
        let min = Vec2::new(1.0, -1.0);
        let max = Vec2::new(2.0, 1.0);

        let (t, n) = segment_aabb(Vec2::ZERO, Vec2::new(4.0, 0.0), min, max).unwrap();
        assert!((t - 0.25).abs() < 1e-6);
        assert_eq!(n, Vec2::NEG_X);

        let (t, n) = segment_aabb(Vec2::new(3.0, 0.0), Vec2::new(-1.0, 0.0), min, max).unwrap();
        assert!((t - 0.25).abs() < 1e-6);
        assert_eq!(n, Vec2::X);
    }

    #[test]
    fn aabb_short_segment_misses() {
        let hit = segment_aabb(
            Vec2::ZERO,
            Vec2::new(0.5, 0.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(2.0, 1.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn aabb_start_inside_hits_at_origin() {
        let (t, n) = segment_aabb(
            Vec2::ZERO,
            Vec2::new(0.0, -1.0),
            Vec2::splat(-1.0),
            Vec2::splat(1.0),
        )
        .unwrap();
        assert_eq!(t, 0.0);
        assert_eq!(n, Vec2::Y);
    }

    #[test]
    fn aabb_touching_face_reports_face_normal() {
        // Starts exactly on the top face and travels down into the box.
        let (t, n) = segment_aabb(
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, 0.5),
            Vec2::splat(-1.0),
            Vec2::splat(1.0),
        )
        .unwrap();
        assert_eq!(t, 0.0);
        assert_eq!(n, Vec2::Y);
    }

    #[test]
    fn edge_hit_reports_facing_normal() {
        let a = Vec2::new(1.0, -1.0);
        let b = Vec2::new(3.0, 1.0);
        let (t, n) = segment_segment(Vec2::ZERO, Vec2::new(4.0, 0.0), a, b).unwrap();
        assert!((t - 0.5).abs() < 1e-6);
        let expected = Vec2::new(-1.0, 1.0).normalize();
        assert!((n - expected).length() < 1e-6, "normal was {n}");

        assert!(segment_segment(Vec2::ZERO, Vec2::new(1.0, 1.0), a, b).is_none());
    }
}
