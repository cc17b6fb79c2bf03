// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transforms accumulated while walking a shape tree.

use alloc::vec::Vec;

use strata_fixed::{Fixed, Vec2};

/// Placement of a shape: rotate by `rotation`, then move by `translation`.
///
/// Built up during [`ShapeBank::resolve`](crate::ShapeBank::resolve): each
/// translation is expressed in the frame rotated by every enclosing rotation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Transform {
    /// Origin of the shape in the root frame.
    pub translation: Vec2,
    /// Accumulated rotation.
    pub rotation: Fixed,
}

impl Transform {
    /// No translation, no rotation.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        rotation: Fixed::ZERO,
    };

    /// Move by `v` within the current rotated frame.
    #[must_use]
    pub fn translate(self, v: Vec2) -> Self {
        Self {
            translation: self.translation + v.rotate(self.rotation),
            rotation: self.rotation,
        }
    }

    /// Turn the frame by `angle`.
    #[must_use]
    pub fn rotate(self, angle: Fixed) -> Self {
        Self {
            translation: self.translation,
            rotation: self.rotation + angle,
        }
    }

    /// Map a point from the shape's local frame into the root frame.
    pub fn apply(&self, v: Vec2) -> Vec2 {
        v.rotate(self.rotation) + self.translation
    }
}

/// A transform carried down a collision walk.
///
/// Collision queries arrive in the root frame; colliders are defined around their
/// own origin. Implementors move query geometry into the local frame and report
/// where a collider sits in the root frame.
pub(crate) trait QueryTransform: Copy {
    #[must_use]
    fn translate(self, v: Vec2) -> Self;
    #[must_use]
    fn rotate(self, angle: Fixed) -> Self;

    /// Root-frame point into the local frame.
    fn to_local(&self, v: Vec2) -> Vec2;
    /// Root-frame point into the local frame, skipping the rotation. Enough for
    /// rotation-invariant colliders.
    fn to_local_ignore_rotation(&self, v: Vec2) -> Vec2;
    /// Local point into the root frame.
    fn to_world(&self, v: Vec2) -> Vec2;

    fn to_local_all(&self, vs: &[Vec2]) -> Vec<Vec2> {
        vs.iter().map(|v| self.to_local(*v)).collect()
    }
}

/// The inverse of [`Transform`], for mapping queries into collider space.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct LocalTransform(Transform);

impl LocalTransform {
    pub(crate) const IDENTITY: Self = Self(Transform::IDENTITY);
}

impl QueryTransform for LocalTransform {
    fn translate(self, v: Vec2) -> Self {
        Self(self.0.translate(v))
    }

    fn rotate(self, angle: Fixed) -> Self {
        Self(self.0.rotate(angle))
    }

    fn to_local(&self, v: Vec2) -> Vec2 {
        (v - self.0.translation).rotate(-self.0.rotation)
    }

    fn to_local_ignore_rotation(&self, v: Vec2) -> Vec2 {
        v - self.0.translation
    }

    fn to_world(&self, v: Vec2) -> Vec2 {
        self.0.apply(v)
    }
}

/// Point-only query transform matching how older content was evaluated.
///
/// Instead of accumulating a transform, the query point itself is moved at each
/// compositor: translations subtract and rotations use [`Vec2::rotate_legacy`].
/// Reported centres are always the origin.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LegacyTransform {
    point: Vec2,
}

impl LegacyTransform {
    pub(crate) fn new(point: Vec2) -> Self {
        Self { point }
    }
}

impl QueryTransform for LegacyTransform {
    fn translate(self, v: Vec2) -> Self {
        Self::new(self.point - v)
    }

    fn rotate(self, angle: Fixed) -> Self {
        Self::new(self.point.rotate_legacy(-angle))
    }

    fn to_local(&self, _v: Vec2) -> Vec2 {
        self.point
    }

    fn to_local_ignore_rotation(&self, _v: Vec2) -> Vec2 {
        self.point
    }

    fn to_world(&self, _v: Vec2) -> Vec2 {
        Vec2::ZERO
    }
}
