// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boolean intersection tests between pairs of primitives.
//!
//! Every test is total. Boundaries count as intersecting, and an empty polygon
//! never intersects anything. Convex polygons may be wound either way.

use strata_fixed::{Fixed, Vec2};

use crate::Aabb;
use crate::line::{line_point_relation, segment_closest_point};
use crate::sat::{Interval, edge_axes};

/// Point inside (or on) a box.
#[inline]
pub fn aabb_point(aabb: Aabb, v: Vec2) -> bool {
    aabb.contains_point(v)
}

/// Point inside (or on) a circle.
#[inline]
pub fn circle_point(centre: Vec2, radius: Fixed, v: Vec2) -> bool {
    (v - centre).length_squared() <= radius.squared()
}

/// Circle against box, by the squared distance from the centre to the box.
#[inline]
pub fn aabb_circle(aabb: Aabb, centre: Vec2, radius: Fixed) -> bool {
    aabb.distance_squared(centre) <= radius.squared()
}

/// Segment against circle, via the closest point of the segment to the centre.
pub fn segment_circle(a: Vec2, b: Vec2, centre: Vec2, radius: Fixed) -> bool {
    let closest = segment_closest_point(a, b, centre);
    circle_point(centre, radius, closest)
}

/// Segment against box.
///
/// Misses when all four corners lie strictly on one side of the segment's line,
/// or when the segment's own bounds fall entirely outside the box.
pub fn aabb_segment(aabb: Aabb, a: Vec2, b: Vec2) -> bool {
    let rel = aabb.corners().map(|corner| line_point_relation(a, b, corner));
    let all_neg = rel.iter().all(|f| *f < Fixed::ZERO);
    let all_pos = rel.iter().all(|f| *f > Fixed::ZERO);
    if all_neg || all_pos {
        return false;
    }
    let (min, max) = (aabb.min, aabb.max);
    !((a.x > max.x && b.x > max.x)
        || (a.x < min.x && b.x < min.x)
        || (a.y > max.y && b.y > max.y)
        || (a.y < min.y && b.y < min.y))
}

/// Convex polygon against segment. Axes are the polygon's edge normals plus the segment's own normal.
pub fn convex_segment(convex: &[Vec2], a: Vec2, b: Vec2) -> bool {
    if convex.is_empty() {
        return false;
    }
    let separated = |axis: Vec2| {
        !Interval::of_convex(convex, axis).overlaps(Interval::of_segment(a, b, axis))
    };
    if edge_axes(convex).any(separated) {
        return false;
    }
    !separated((b - a).perpendicular())
}

/// Convex polygon against circle.
///
/// Tests the unit edge normals first. A vertex inside the circle is an early hit.
/// Otherwise the remaining candidate axis runs from the centre to the nearest
/// vertex, which separates the circle from the polygon's corner regions.
pub fn convex_circle(convex: &[Vec2], centre: Vec2, radius: Fixed) -> bool {
    if convex.is_empty() {
        return false;
    }
    let r2 = radius.squared();
    let circle_overlaps = |axis: Vec2| {
        Interval::of_convex(convex, axis).overlaps(Interval::of_circle(centre, radius, axis))
    };

    let mut closest: Option<(Vec2, Fixed)> = None;
    for (v, axis) in convex.iter().zip(edge_axes(convex)) {
        if !circle_overlaps(axis.normalise()) {
            return false;
        }
        let d = (*v - centre).length_squared();
        if d <= r2 {
            return true;
        }
        if closest.is_none_or(|(_, best)| d < best) {
            closest = Some((*v, d));
        }
    }
    match closest {
        Some((v, _)) => circle_overlaps((v - centre).normalise()),
        None => false,
    }
}

/// Convex polygon against convex polygon, over both polygons' edge normals.
pub fn convex_convex(a: &[Vec2], b: &[Vec2]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    edge_axes(a)
        .chain(edge_axes(b))
        .all(|axis| Interval::of_convex(a, axis).overlaps(Interval::of_convex(b, axis)))
}

/// Box against convex polygon, treating the box as a four-vertex polygon.
pub fn aabb_convex(aabb: Aabb, convex: &[Vec2]) -> bool {
    convex_convex(&aabb.corners(), convex)
}
