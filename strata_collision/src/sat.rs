// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Separating-axis building blocks: projection intervals and edge axes.

use strata_fixed::{Fixed, Vec2};

/// Closed interval `[min, max]` on a projection axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Interval {
    /// Lower bound.
    pub min: Fixed,
    /// Upper bound.
    pub max: Fixed,
}

impl Interval {
    /// Interval spanning two values in either order.
    pub fn spanning(a: Fixed, b: Fixed) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Whether two closed intervals share at least one point. Touching counts.
    #[inline]
    pub fn overlaps(self, other: Self) -> bool {
        self.max >= other.min && other.max >= self.min
    }

    /// Projection of a convex polygon onto `axis`. An empty polygon projects to `[0, 0]`.
    pub fn of_convex(convex: &[Vec2], axis: Vec2) -> Self {
        let mut points = convex.iter().map(|v| v.dot(axis));
        let Some(first) = points.next() else {
            return Self::default();
        };
        points.fold(Self::spanning(first, first), |acc, p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        })
    }

    /// Projection of the segment `ab` onto `axis`.
    pub fn of_segment(a: Vec2, b: Vec2, axis: Vec2) -> Self {
        Self::spanning(a.dot(axis), b.dot(axis))
    }

    /// Projection of a circle onto a unit-length `axis`.
    pub fn of_circle(centre: Vec2, radius: Fixed, axis: Vec2) -> Self {
        let c = centre.dot(axis);
        Self {
            min: c - radius,
            max: c + radius,
        }
    }
}

/// Edges of a closed polygon as `(start, end)` pairs, wrapping from the last vertex to the first.
pub fn edges(convex: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = convex.len();
    (0..n).map(move |i| (convex[i], convex[(i + 1) % n]))
}

/// Edge normals of a polygon, not normalised.
pub fn edge_axes(convex: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    edges(convex).map(|(a, b)| (b - a).perpendicular())
}
