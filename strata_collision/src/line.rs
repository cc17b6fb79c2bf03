// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-to-line helpers.

use strata_fixed::{Fixed, Vec2};

/// Which side of the infinite line through `a` and `b` the point `v` lies on.
///
/// Zero means `v` is on the line. The sign is consistent for a given `(a, b)`
/// but otherwise carries no fixed orientation meaning.
#[inline]
pub fn line_point_relation(a: Vec2, b: Vec2, v: Vec2) -> Fixed {
    (v.x - a.x) * (b.y - a.y) - (v.y - a.y) * (b.x - a.x)
}

/// The point of segment `ab` closest to `v`.
///
/// A degenerate segment (`a == b`) returns `a`.
pub fn segment_closest_point(a: Vec2, b: Vec2, v: Vec2) -> Vec2 {
    let ab = b - a;
    if ab == Vec2::ZERO {
        return a;
    }
    let t = (v - a).dot(ab) / ab.length_squared();
    a + ab * t.clamp(Fixed::ZERO, Fixed::ONE)
}
