// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluating a tree against a collision query.

use alloc::vec::Vec;

use strata_collision::{Aabb, intersect};
use strata_fixed::{Fixed, Vec2};

use crate::bank::Slot;
use crate::node::{ArcCollider, BallCollider, BoxCollider, NgonCollider, Node};
use crate::params::{ParameterSet, Value};
use crate::resolve::ResolvedNgonDimensions;
use crate::transform::{LegacyTransform, LocalTransform, QueryTransform};
use crate::types::{NodeId, ShapeFlag};

/// Geometry of a collision query, in the root frame of the tree.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Extent<'a> {
    /// A point.
    Point(Vec2),
    /// A segment between two points.
    Segment(Vec2, Vec2),
    /// A solid circle.
    Circle {
        /// Centre.
        centre: Vec2,
        /// Radius.
        radius: Fixed,
    },
    /// A convex polygon.
    Convex(&'a [Vec2]),
}

/// A collision query: which roles to look for, and where.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CheckQuery<'a> {
    /// Colliders whose flags share no bit with this mask are skipped.
    pub mask: ShapeFlag,
    /// Query geometry.
    pub extent: Extent<'a>,
    /// Evaluate the way older content expects. See [`CheckQuery::legacy`].
    pub legacy: bool,
}

impl<'a> CheckQuery<'a> {
    /// Query with any extent.
    pub fn new(mask: ShapeFlag, extent: Extent<'a>) -> Self {
        Self {
            mask,
            extent,
            legacy: false,
        }
    }

    /// Point query.
    pub fn point(mask: ShapeFlag, v: Vec2) -> Self {
        Self::new(mask, Extent::Point(v))
    }

    /// Segment query.
    pub fn segment(mask: ShapeFlag, a: Vec2, b: Vec2) -> Self {
        Self::new(mask, Extent::Segment(a, b))
    }

    /// Circle query.
    pub fn circle(mask: ShapeFlag, centre: Vec2, radius: Fixed) -> Self {
        Self::new(mask, Extent::Circle { centre, radius })
    }

    /// Convex polygon query.
    pub fn convex(mask: ShapeFlag, vertices: &'a [Vec2]) -> Self {
        Self::new(mask, Extent::Convex(vertices))
    }

    /// Switch to legacy evaluation.
    ///
    /// The query point is moved through the tree instead of accumulating a
    /// transform, and rotations use [`Vec2::rotate_legacy`]. Every reported
    /// centre is the origin. Only point queries are meaningful in this mode;
    /// other extents report nothing.
    #[must_use]
    pub fn legacy(mut self) -> Self {
        self.legacy = true;
        self
    }
}

/// Output of [`ShapeBank::check_collision`](crate::ShapeBank::check_collision).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitResult {
    /// Union of the matched flags of every hit collider.
    pub mask: ShapeFlag,
    /// Root-frame origin of each hit collider, in depth-first order.
    pub shape_centres: Vec<Vec2>,
}

impl HitResult {
    /// Record a hit.
    pub fn add(&mut self, flags: ShapeFlag, centre: Vec2) {
        self.mask |= flags;
        self.shape_centres.push(centre);
    }

    /// Whether anything was hit.
    pub fn is_hit(&self) -> bool {
        !self.mask.is_empty()
    }

    /// Reset to no hits, keeping the allocation.
    pub fn clear(&mut self) {
        self.mask = ShapeFlag::empty();
        self.shape_centres.clear();
    }
}

pub(crate) fn check_collision_into(
    slots: &[Slot],
    root: NodeId,
    query: &CheckQuery<'_>,
    params: &ParameterSet,
    hit: &mut HitResult,
) {
    if query.legacy {
        if let Extent::Point(v) = query.extent {
            check_node(slots, root, LegacyTransform::new(v), params, query, hit);
        }
    } else {
        check_node(slots, root, LocalTransform::IDENTITY, params, query, hit);
    }
}

/// Depth-first walk over collision children only.
fn check_node<T: QueryTransform>(
    slots: &[Slot],
    id: NodeId,
    t: T,
    params: &ParameterSet,
    query: &CheckQuery<'_>,
    hit: &mut HitResult,
) {
    let Some(slot) = slots.get(id.idx()) else {
        return;
    };
    let t = match &slot.node {
        Node::BallCollider(c) => return check_ball(c, &t, params, query, hit),
        Node::BoxCollider(c) => return check_box(c, &t, params, query, hit),
        Node::NgonCollider(c) => return check_ngon(c, &t, params, query, hit),
        Node::ArcCollider(c) => return check_arc(c, &t, params, query, hit),
        Node::Ball(_) | Node::Box(_) | Node::Line(_) | Node::Ngon(_) => return,
        Node::Compound => t,
        Node::Enable(x) => {
            if !x.condition.resolve(params) {
                return;
            }
            t
        }
        Node::Translate(x) => t.translate(x.offset.resolve(params)),
        Node::Rotate(x) => t.rotate(x.angle.resolve(params)),
        Node::TranslateRotate(x) => t
            .translate(x.translation.resolve(params))
            .rotate(x.rotation.resolve(params)),
    };
    for &child in &slot.collision {
        check_node(slots, child, t, params, query, hit);
    }
}

/// Shared prologue and epilogue of every collider: mask filtering, then
/// recording the collider's origin on a hit.
fn check_leaf<T: QueryTransform>(
    flags: &Value<ShapeFlag>,
    t: &T,
    params: &ParameterSet,
    query: &CheckQuery<'_>,
    hit: &mut HitResult,
    test: impl FnOnce() -> bool,
) {
    let flags = flags.resolve(params) & query.mask;
    if flags.is_empty() {
        return;
    }
    if test() {
        hit.add(flags, t.to_world(Vec2::ZERO));
    }
}

fn check_ball<T: QueryTransform>(
    c: &BallCollider,
    t: &T,
    params: &ParameterSet,
    query: &CheckQuery<'_>,
    hit: &mut HitResult,
) {
    check_leaf(&c.flags, t, params, query, hit, || {
        let d = c.dimensions.resolve(params);
        let ir2 = d.inner_radius.squared();
        match query.extent {
            Extent::Point(v) => {
                let d2 = t.to_local_ignore_rotation(v).length_squared();
                d2 <= d.radius.squared() && d2 >= ir2
            }
            Extent::Segment(a, b) => {
                let (a, b) = (t.to_local(a), t.to_local(b));
                intersect::segment_circle(a, b, Vec2::ZERO, d.radius)
                    && (a.length_squared() >= ir2 || b.length_squared() >= ir2)
            }
            Extent::Circle { centre, radius } => {
                let d2 = t.to_local_ignore_rotation(centre).length_squared();
                d2 <= (d.radius + radius).squared()
                    && (d.inner_radius.is_zero() || d2.sqrt() + radius >= d.inner_radius)
            }
            Extent::Convex(vs) => {
                let local = t.to_local_all(vs);
                intersect::convex_circle(&local, Vec2::ZERO, d.radius)
                    && (d.inner_radius.is_zero()
                        || local.iter().any(|v| v.length_squared() >= ir2))
            }
        }
    });
}

fn check_box<T: QueryTransform>(
    c: &BoxCollider,
    t: &T,
    params: &ParameterSet,
    query: &CheckQuery<'_>,
    hit: &mut HitResult,
) {
    check_leaf(&c.flags, t, params, query, hit, || {
        let half = c.dimensions.resolve(params);
        let aabb = Aabb::from_half_extents(half);
        match query.extent {
            Extent::Point(v) => {
                let v = t.to_local(v);
                v.x.abs() <= half.x && v.y.abs() <= half.y
            }
            Extent::Segment(a, b) => intersect::aabb_segment(aabb, t.to_local(a), t.to_local(b)),
            Extent::Circle { centre, radius } => {
                intersect::aabb_circle(aabb, t.to_local(centre), radius)
            }
            Extent::Convex(vs) => intersect::aabb_convex(aabb, &t.to_local_all(vs)),
        }
    });
}

/// Wedge `i` of a polygon as a convex piece: a triangle from the centre, or a
/// quad between the inner and outer radius.
fn ngon_piece(d: &ResolvedNgonDimensions, i: u32, buf: &mut [Vec2; 4]) -> usize {
    let sides = Fixed::from_u32(d.sides);
    let angle = |k: u32| Fixed::from_u32(k.wrapping_mul(2)) * Fixed::PI / sides;
    if d.inner_radius.is_zero() {
        let spoke = Vec2::new(d.radius, Fixed::ZERO);
        buf[0] = Vec2::ZERO;
        buf[1] = spoke.rotate(angle(i));
        buf[2] = spoke.rotate(angle(i + 1));
        3
    } else {
        let a = Vec2::UNIT_X.rotate(angle(i));
        let b = Vec2::UNIT_X.rotate(angle(i + 1));
        buf[0] = d.inner_radius * a;
        buf[1] = d.inner_radius * b;
        buf[2] = d.radius * b;
        buf[3] = d.radius * a;
        4
    }
}

fn any_ngon_piece(d: &ResolvedNgonDimensions, mut test: impl FnMut(&[Vec2]) -> bool) -> bool {
    let mut buf = [Vec2::ZERO; 4];
    (0..d.segments).any(|i| {
        let n = ngon_piece(d, i, &mut buf);
        test(&buf[..n])
    })
}

fn check_ngon<T: QueryTransform>(
    c: &NgonCollider,
    t: &T,
    params: &ParameterSet,
    query: &CheckQuery<'_>,
    hit: &mut HitResult,
) {
    check_leaf(&c.flags, t, params, query, hit, || {
        let d = c.dimensions.resolve(params);
        match query.extent {
            Extent::Point(v) => {
                let v = t.to_local(v);
                let mut theta = v.angle();
                if theta.is_negative() {
                    theta += Fixed::TAU;
                }
                // Squared distance to the polygon edge shrinks towards the middle
                // of each side; `dt` is that ratio relative to the circumradius.
                let a = Fixed::TAU / Fixed::from_u32(d.sides);
                let at = (theta % a) / a;
                let dt = Fixed::ONE
                    + Fixed::from_int(2) * at * (at - Fixed::ONE) * (Fixed::ONE - a.cos());
                let d2 = v.length_squared();
                theta <= a * Fixed::from_u32(d.segments)
                    && d2 <= dt * d.radius.squared()
                    && d2 >= dt * d.inner_radius.squared()
            }
            Extent::Segment(a, b) => {
                let (a, b) = (t.to_local(a), t.to_local(b));
                any_ngon_piece(&d, |piece| intersect::convex_segment(piece, a, b))
            }
            Extent::Circle { centre, radius } => {
                let centre = t.to_local(centre);
                any_ngon_piece(&d, |piece| intersect::convex_circle(piece, centre, radius))
            }
            Extent::Convex(vs) => {
                let local = t.to_local_all(vs);
                any_ngon_piece(&d, |piece| intersect::convex_convex(piece, &local))
            }
        }
    });
}

fn check_arc<T: QueryTransform>(
    c: &ArcCollider,
    t: &T,
    params: &ParameterSet,
    query: &CheckQuery<'_>,
    hit: &mut HitResult,
) {
    check_leaf(&c.flags, t, params, query, hit, || {
        let Extent::Point(v) = query.extent else {
            return false;
        };
        let d = c.dimensions.resolve(params);
        let v = t.to_local(v);
        let angle = v.angle();
        let len = v.length();
        !angle.is_negative()
            && angle <= c.arc_angle.resolve(params)
            && len >= d.inner_radius
            && len < d.radius
    });
}
