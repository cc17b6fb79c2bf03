// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square root and trigonometry on [`Fixed`].
//!
//! These are iterative or series approximations, not correctly rounded results.
//! What matters is that they are bit-for-bit reproducible.

use crate::Fixed;

const SQRT_ITERATIONS: u32 = 8;

const R6: Fixed = Fixed::ONE.const_div(Fixed::from_int(6));
const R120: Fixed = Fixed::ONE.const_div(Fixed::from_int(120));
const R5040: Fixed = Fixed::ONE.const_div(Fixed::from_int(5040));
const R362880: Fixed = Fixed::ONE.const_div(Fixed::from_int(362_880));
const R39916800: Fixed = Fixed::ONE.const_div(Fixed::from_int(39_916_800));

const ATAN_A: Fixed = Fixed::from_internal(0x3240_0000);
const ATAN_B: Fixed = Fixed::from_internal(0xfb50_0000);
const FRAC_3PI_4: Fixed = Fixed::from_int(3).const_mul(Fixed::FRAC_PI_4);

impl Fixed {
    /// Square root by Newton iteration.
    ///
    /// Non-positive inputs give zero. Inputs below one are computed as
    /// `1 / sqrt(1 / x)`. The iteration stops after eight steps or once the square
    /// of the estimate is within 2^-10 of the input.
    pub fn sqrt(self) -> Self {
        if self.to_internal() <= 0 {
            return Self::ZERO;
        }
        if self < Self::ONE {
            return Self::ONE / (Self::ONE / self).sqrt();
        }

        let a = self / Self::from_int(2);
        let half = Self::HALF;
        let bound = Self::from_internal(Self::ONE.to_internal() >> 10);

        let raw = self.to_internal();
        let shift = (32 - (raw as u64).leading_zeros()) / 2;
        let mut r = Self::from_internal(raw >> shift);

        for _ in 0..SQRT_ITERATIONS {
            if r.is_zero() {
                break;
            }
            r = r * half + a / r;
            let err = (r * r).to_internal().wrapping_abs().wrapping_sub(raw);
            if Self::from_internal(err) < bound {
                break;
            }
        }
        r
    }

    /// Sine by Taylor series, after reducing the argument into `[-π, π]`.
    pub fn sin(self) -> Self {
        let mut angle = Self::from_internal(self.abs().to_internal() % Self::TAU.to_internal());
        if angle > Self::PI {
            angle -= Self::TAU;
        }

        let angle2 = angle * angle;
        let mut out = angle;

        angle *= angle2;
        out -= angle * R6;
        angle *= angle2;
        out += angle * R120;
        angle *= angle2;
        out -= angle * R5040;
        angle *= angle2;
        out += angle * R362880;
        angle *= angle2;
        out -= angle * R39916800;

        if self.is_negative() { -out } else { out }
    }

    /// Cosine, as `sin(x + π/2)`.
    #[inline]
    pub fn cos(self) -> Self {
        (self + Self::FRAC_PI_2).sin()
    }

    /// Sine and cosine together.
    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Four-quadrant arctangent of `self / x` (`self` is the y coordinate).
    ///
    /// Uses a cubic polynomial per half-plane. `atan2(0, 0)` is `-π/4`.
    pub fn atan2(self, x: Self) -> Self {
        let y = self;
        let ay = y.abs();
        let angle = if x.to_internal() >= 0 {
            if (x + ay).is_zero() {
                return -Self::FRAC_PI_4;
            }
            let r = (x - ay) / (x + ay);
            ATAN_A * r * r * r - ATAN_B * r + Self::FRAC_PI_4
        } else {
            if (x - ay).is_zero() {
                return -FRAC_3PI_4;
            }
            let r = (x + ay) / (ay - x);
            ATAN_A * r * r * r - ATAN_B * r + FRAC_3PI_4
        };
        if y.is_negative() { -angle } else { angle }
    }

    /// Fold an angle once by a full turn toward `[0, 2π]`.
    ///
    /// Angles above 2π lose one turn and negative angles gain one. This is a
    /// single step, not a full reduction: 2π itself is kept, and inputs more
    /// than one turn out of range stay out of range.
    pub fn normalise_angle(self) -> Self {
        if self > Self::TAU {
            self - Self::TAU
        } else if self.is_negative() {
            self + Self::TAU
        } else {
            self
        }
    }
}
