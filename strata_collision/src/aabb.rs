// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use strata_fixed::{Fixed, Vec2};

/// Axis-aligned bounding box given by its minimum and maximum corners.
///
/// Bounds are inclusive on every side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
}

impl Aabb {
    /// Create a box from its corners.
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box spanning `-half..=half`, centred on the origin.
    pub fn from_half_extents(half: Vec2) -> Self {
        Self::new(-half, half)
    }

    /// Whether the point lies inside or on the boundary.
    pub fn contains_point(&self, v: Vec2) -> bool {
        v.x >= self.min.x && v.x <= self.max.x && v.y >= self.min.y && v.y <= self.max.y
    }

    /// The four corners as a convex polygon, in the order
    /// `min, (min.x, max.y), max, (max.x, min.y)`.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.min.x, self.max.y),
            self.max,
            Vec2::new(self.max.x, self.min.y),
        ]
    }

    /// Squared distance from `v` to the nearest point of the box. Zero inside.
    pub fn distance_squared(&self, v: Vec2) -> Fixed {
        fn axis(min: Fixed, max: Fixed, c: Fixed) -> Fixed {
            if c < min {
                (c - min).squared()
            } else if c > max {
                (c - max).squared()
            } else {
                Fixed::ZERO
            }
        }
        axis(self.min.x, self.max.x, v.x) + axis(self.min.y, self.max.y, v.y)
    }
}
