// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::Fixed;

/// A 2D vector with [`Fixed`] components.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// Horizontal component.
    pub x: Fixed,
    /// Vertical component.
    pub y: Fixed,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(Fixed::ZERO, Fixed::ZERO);
    /// Unit vector along the x axis.
    pub const UNIT_X: Self = Self::new(Fixed::ONE, Fixed::ZERO);

    /// Create a vector from components.
    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Create a vector from integer components.
    #[inline]
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self::new(Fixed::from_int(x), Fixed::from_int(y))
    }

    /// Vector of length `len` at angle `theta` from the x axis.
    pub fn from_polar(theta: Fixed, len: Fixed) -> Self {
        Self::new(theta.cos() * len, theta.sin() * len)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> Fixed {
        self.x * other.x + self.y * other.y
    }

    /// The 2D cross product `self.x * other.y - self.y * other.x`.
    #[inline]
    pub fn cross(self, other: Self) -> Fixed {
        self.x * other.y - self.y * other.x
    }

    /// Squared length, exact up to multiplication truncation.
    #[inline]
    pub fn length_squared(self) -> Fixed {
        self.dot(self)
    }

    /// Length, via [`Fixed::sqrt`].
    #[inline]
    pub fn length(self) -> Fixed {
        self.length_squared().sqrt()
    }

    /// Angle from the x axis, via [`Fixed::atan2`].
    #[inline]
    pub fn angle(self) -> Fixed {
        self.y.atan2(self.x)
    }

    /// Scale to unit length. The zero vector is returned unchanged.
    pub fn normalise(self) -> Self {
        if self == Self::ZERO {
            return self;
        }
        self / self.length()
    }

    /// Rotate a quarter turn counter-clockwise: `(-y, x)`.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotate by `theta` with the rotation matrix.
    pub fn rotate(self, theta: Fixed) -> Self {
        if theta.is_zero() {
            return self;
        }
        let (s, c) = theta.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Rotate by `theta` by re-projecting from polar form.
    ///
    /// Rounds differently from [`Vec2::rotate`]. Kept because older recorded
    /// content was evaluated this way.
    pub fn rotate_legacy(self, theta: Fixed) -> Self {
        if theta.is_zero() {
            return self;
        }
        Self::from_polar(self.angle() + theta, self.length())
    }

    /// Componentwise product.
    #[inline]
    pub fn mul_components(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<Fixed> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Fixed) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for Fixed {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div<Fixed> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Fixed) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
