// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Fixed`] scalar: Q32.32 arithmetic built from integer operations only.

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, Shr, Sub, SubAssign,
};

const FRAC_BITS: u32 = 32;
const ONE_RAW: i64 = 1 << FRAC_BITS;

/// Signed fixed-point number with 32 integer bits and 32 fractional bits.
///
/// Every operation is defined in terms of 64-bit integer arithmetic, so a given
/// sequence of operations produces the same bits on every target and compiler.
/// This is what keeps recorded games replayable across machines.
///
/// ## Semantics
///
/// - Addition, subtraction and negation wrap on overflow.
/// - Multiplication splits both magnitudes into 32-bit halves and recombines the
///   four partial products, truncating toward zero.
/// - Division is restoring long division with a 33-bit quotient. Dividing by zero
///   yields [`Fixed::ZERO`].
/// - Remainder operates on the raw representation. A zero divisor yields zero.
///
/// ## Persistence
///
/// The raw 64-bit integer from [`Fixed::to_internal`] is the only representation
/// that may be stored or sent elsewhere. With the `serde` feature the type
/// serializes transparently as that integer.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct Fixed(i64);

const fn sign_of(a: i64, b: i64) -> i64 {
    if (a < 0) == (b < 0) { 1 } else { -1 }
}

const fn mul_raw(a: i64, b: i64) -> i64 {
    const MASK: u64 = 0xffff_ffff;
    let sign = sign_of(a, b);
    let l = a.wrapping_abs() as u64;
    let r = b.wrapping_abs() as u64;

    let hi = (l >> 32) * (r >> 32);
    let lo = (l & MASK) * (r & MASK);
    let lf = (l >> 32) * (r & MASK);
    let rt = (l & MASK) * (r >> 32);

    let combine = (hi << 32)
        .wrapping_add(lf)
        .wrapping_add(rt)
        .wrapping_add(lo >> 32);
    sign.wrapping_mul(combine as i64)
}

const fn div_raw(a: i64, b: i64) -> i64 {
    let sign = sign_of(a, b);
    let mut r = a.wrapping_abs() as u64;
    let mut d = b.wrapping_abs() as u64;
    let mut q: u64 = 0;

    let mut bit: u32 = 33;
    while (d & 0xf) == 0 && bit >= 4 {
        d >>= 4;
        bit -= 4;
    }
    if d == 0 {
        return 0;
    }
    while r != 0 {
        let mut shift = r.leading_zeros();
        if shift > bit {
            shift = bit;
        }
        r <<= shift;
        bit -= shift;

        let div = r / d;
        r %= d;
        q = q.wrapping_add(div << bit);

        r <<= 1;
        if bit == 0 {
            break;
        }
        bit -= 1;
    }
    sign.wrapping_mul((q >> 1) as i64)
}

impl Fixed {
    /// Zero.
    pub const ZERO: Self = Self(0);
    /// One.
    pub const ONE: Self = Self(ONE_RAW);
    /// One half.
    pub const HALF: Self = Self(ONE_RAW >> 1);
    /// One quarter.
    pub const QUARTER: Self = Self(ONE_RAW >> 2);
    /// One tenth, truncated.
    pub const TENTH: Self = Self::ONE.const_div(Self::from_int(10));
    /// One hundredth, truncated.
    pub const HUNDREDTH: Self = Self::ONE.const_div(Self::from_int(100));
    /// The smallest positive value (one raw unit).
    pub const EPSILON: Self = Self(1);
    /// The smallest representable value.
    pub const MIN: Self = Self(i64::MIN);
    /// The largest representable value.
    pub const MAX: Self = Self(i64::MAX);
    /// π, truncated to 32 fractional bits.
    pub const PI: Self = Self(0x3_243f_6a88);
    /// 2π, computed with fixed-point multiplication.
    pub const TAU: Self = Self::from_int(2).const_mul(Self::PI);
    /// π/2, computed with fixed-point division.
    pub const FRAC_PI_2: Self = Self::PI.const_div(Self::from_int(2));
    /// π/4, computed with fixed-point division.
    pub const FRAC_PI_4: Self = Self::PI.const_div(Self::from_int(4));

    /// Build a value from its raw 64-bit representation.
    #[inline]
    pub const fn from_internal(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw 64-bit representation. Round-trips exactly through [`Fixed::from_internal`].
    #[inline]
    pub const fn to_internal(self) -> i64 {
        self.0
    }

    /// Convert an integer exactly.
    #[inline]
    pub const fn from_int(v: i32) -> Self {
        Self((v as i64) << FRAC_BITS)
    }

    /// Convert an unsigned count. Values of 2^31 and above wrap negative.
    #[inline]
    pub const fn from_u32(v: u32) -> Self {
        Self((v as i64) << FRAC_BITS)
    }

    /// `num / den` using fixed-point division.
    #[inline]
    pub const fn from_ratio(num: i32, den: i32) -> Self {
        Self::from_int(num).const_div(Self::from_int(den))
    }

    /// Integer part, rounding toward negative infinity.
    #[inline]
    pub const fn to_int(self) -> i32 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "The integer part of a Q32.32 value always fits in 32 bits."
        )]
        let v = (self.0 >> FRAC_BITS) as i32;
        v
    }

    /// Lossy conversion for presentation layers. Never feed the result back into simulation.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / ONE_RAW as f64
    }

    /// Lossy conversion for presentation layers. Never feed the result back into simulation.
    #[inline]
    pub fn to_f32(self) -> f32 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Presentation-only precision loss."
        )]
        let v = self.to_f64() as f32;
        v
    }

    /// Absolute value. `Fixed::MIN.abs()` wraps to itself.
    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.wrapping_abs())
    }

    /// Whether the value is exactly zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whether the value is strictly negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Fixed-point product, usable in constant expressions.
    #[inline]
    pub const fn const_mul(self, rhs: Self) -> Self {
        Self(mul_raw(self.0, rhs.0))
    }

    /// Fixed-point quotient, usable in constant expressions. Zero divisor yields zero.
    #[inline]
    pub const fn const_div(self, rhs: Self) -> Self {
        Self(div_raw(self.0, rhs.0))
    }

    /// Wrapping sum, usable in constant expressions.
    #[inline]
    pub const fn const_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    /// Wrapping difference, usable in constant expressions.
    #[inline]
    pub const fn const_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    /// Wrapping negation, usable in constant expressions.
    #[inline]
    pub const fn const_neg(self) -> Self {
        Self(0_i64.wrapping_sub(self.0))
    }

    /// `self * self`.
    #[inline]
    pub const fn squared(self) -> Self {
        self.const_mul(self)
    }

    /// The smaller of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// The larger of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Clamp into `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

impl From<i32> for Fixed {
    #[inline]
    fn from(v: i32) -> Self {
        Self::from_int(v)
    }
}

impl Add for Fixed {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.const_add(rhs)
    }
}

impl Sub for Fixed {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.const_sub(rhs)
    }
}

impl Neg for Fixed {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.const_neg()
    }
}

impl Mul for Fixed {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.const_mul(rhs)
    }
}

impl Div for Fixed {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.const_div(rhs)
    }
}

impl Rem for Fixed {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Self(self.0.checked_rem(rhs.0).unwrap_or(0))
    }
}

impl Shl<u32> for Fixed {
    type Output = Self;
    #[inline]
    fn shl(self, rhs: u32) -> Self {
        Self(self.0.wrapping_shl(rhs))
    }
}

impl Shr<u32> for Fixed {
    type Output = Self;
    #[inline]
    fn shr(self, rhs: u32) -> Self {
        Self(self.0.wrapping_shr(rhs))
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fixed {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Fixed {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

/// Exact decimal expansion, truncated to the formatter precision (default 10 digits).
impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "{}.", v >> FRAC_BITS)?;
        let mut frac = v & 0xffff_ffff;
        for _ in 0..f.precision().unwrap_or(10) {
            frac *= 10;
            write!(f, "{}", frac >> FRAC_BITS)?;
            frac &= 0xffff_ffff;
        }
        Ok(())
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({self})")
    }
}
