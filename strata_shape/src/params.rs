// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-evaluation parameters and the [`Value`] indirection that reads them.
//!
//! A shape tree is built once per kind, but every entity of that kind looks a
//! little different: its colour fades, a turret rotates, a shield switches off.
//! Node fields are therefore [`Value`]s, which are either literals or references
//! into a [`ParameterSet`] filled in by the caller before each evaluation.

use alloc::boxed::Box;

use strata_fixed::{Fixed, Vec2};

use crate::types::{Colour, NgonStyle, RenderFlags, ShapeFlag, Tag};

/// Number of parameter slots in a [`ParameterSet`].
pub const PARAMETER_SLOTS: usize = 256;

/// Index of a slot in a [`ParameterSet`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParameterKey(pub u8);

/// A value stored in a parameter slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParameterValue {
    /// Boolean. Unset slots hold `Bool(false)`.
    Bool(bool),
    /// Unsigned integer. Enumerations and flag sets are stored this way too.
    U32(u32),
    /// Fixed-point scalar.
    Fixed(Fixed),
    /// Fixed-point vector.
    Vec2(Vec2),
    /// Float, for render-only quantities such as depth and line width.
    F32(f32),
    /// Colour.
    Colour(Colour),
}

impl Default for ParameterValue {
    fn default() -> Self {
        Self::Bool(false)
    }
}

/// Types that can be stored in and read from a [`ParameterSet`].
pub trait ParameterType: Copy + Default {
    /// Encode for storage.
    fn into_parameter(self) -> ParameterValue;

    /// Decode a stored value, or `None` if it holds a different type.
    fn from_parameter(value: ParameterValue) -> Option<Self>;

    /// Product used by [`Value::Multiply`]. Types without a meaningful product
    /// return their default.
    fn multiply(self, _rhs: Self) -> Self {
        Self::default()
    }
}

impl ParameterType for bool {
    fn into_parameter(self) -> ParameterValue {
        ParameterValue::Bool(self)
    }

    fn from_parameter(value: ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl ParameterType for u32 {
    fn into_parameter(self) -> ParameterValue {
        ParameterValue::U32(self)
    }

    fn from_parameter(value: ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::U32(v) => Some(v),
            _ => None,
        }
    }

    fn multiply(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl ParameterType for Fixed {
    fn into_parameter(self) -> ParameterValue {
        ParameterValue::Fixed(self)
    }

    fn from_parameter(value: ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Fixed(v) => Some(v),
            _ => None,
        }
    }

    fn multiply(self, rhs: Self) -> Self {
        self * rhs
    }
}

impl ParameterType for Vec2 {
    fn into_parameter(self) -> ParameterValue {
        ParameterValue::Vec2(self)
    }

    fn from_parameter(value: ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Vec2(v) => Some(v),
            _ => None,
        }
    }

    fn multiply(self, rhs: Self) -> Self {
        self.mul_components(rhs)
    }
}

impl ParameterType for f32 {
    fn into_parameter(self) -> ParameterValue {
        ParameterValue::F32(self)
    }

    fn from_parameter(value: ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::F32(v) => Some(v),
            _ => None,
        }
    }

    fn multiply(self, rhs: Self) -> Self {
        self * rhs
    }
}

impl ParameterType for Colour {
    fn into_parameter(self) -> ParameterValue {
        ParameterValue::Colour(self)
    }

    fn from_parameter(value: ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Colour(v) => Some(v),
            _ => None,
        }
    }

    fn multiply(self, rhs: Self) -> Self {
        core::array::from_fn(|i| self[i] * rhs[i])
    }
}

/// Enumerations are stored as their `u32` discriminant.
macro_rules! u32_parameter {
    ($ty:ty, |$v:ident| $encode:expr, |$n:ident| $decode:expr) => {
        impl ParameterType for $ty {
            fn into_parameter(self) -> ParameterValue {
                let $v = self;
                ParameterValue::U32($encode)
            }

            fn from_parameter(value: ParameterValue) -> Option<Self> {
                match value {
                    ParameterValue::U32($n) => Some($decode),
                    _ => None,
                }
            }
        }
    };
}

u32_parameter!(ShapeFlag, |v| v.bits(), |n| Self::from_bits_truncate(n));
u32_parameter!(RenderFlags, |v| v.bits(), |n| Self::from_bits_truncate(n));
u32_parameter!(NgonStyle, |v| v as u32, |n| Self::from_u32(n));
u32_parameter!(Tag, |v| u32::from(v.0), |n| u8::try_from(n).map(Tag).unwrap_or_default());

/// Fixed-size table of parameter slots, indexed by [`ParameterKey`].
#[derive(Clone)]
pub struct ParameterSet {
    slots: Box<[ParameterValue; PARAMETER_SLOTS]>,
}

impl core::fmt::Debug for ParameterSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let set = self
            .slots
            .iter()
            .filter(|v| **v != ParameterValue::default())
            .count();
        f.debug_struct("ParameterSet")
            .field("non_default_slots", &set)
            .finish_non_exhaustive()
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSet {
    /// A set with every slot holding `Bool(false)`.
    pub fn new() -> Self {
        Self {
            slots: Box::new([ParameterValue::default(); PARAMETER_SLOTS]),
        }
    }

    /// Store `value` under `key`, replacing whatever was there.
    pub fn add<T: ParameterType>(&mut self, key: ParameterKey, value: T) -> &mut Self {
        self.slots[usize::from(key.0)] = value.into_parameter();
        self
    }

    /// Read `key` as a `T`, or `T::default()` if the slot holds another type.
    pub fn get<T: ParameterType>(&self, key: ParameterKey) -> T {
        T::from_parameter(self.value(key)).unwrap_or_default()
    }

    /// The raw stored value.
    pub fn value(&self, key: ParameterKey) -> ParameterValue {
        self.slots[usize::from(key.0)]
    }

    /// Reset every slot to `Bool(false)`.
    pub fn clear(&mut self) {
        self.slots.fill(ParameterValue::default());
    }
}

/// A node field: a literal, or an expression over a [`ParameterSet`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value<T> {
    /// A literal.
    Constant(T),
    /// The parameter stored under the key.
    Parameter(ParameterKey),
    /// A literal times the parameter stored under the key.
    Multiply(T, ParameterKey),
    /// `if_true` when the slot under `key` equals `value`, otherwise `if_false`.
    Compare {
        /// Value compared against the slot.
        value: ParameterValue,
        /// Slot to compare.
        key: ParameterKey,
        /// Result on equality.
        if_true: T,
        /// Result otherwise.
        if_false: T,
    },
}

impl<T: ParameterType> Default for Value<T> {
    fn default() -> Self {
        Self::Constant(T::default())
    }
}

impl<T: ParameterType> Value<T> {
    /// `x * params[key]`.
    pub fn multiply(x: T, key: ParameterKey) -> Self {
        Self::Multiply(x, key)
    }

    /// Select between two literals on whether `params[key] == value`.
    pub fn compare(value: impl ParameterType, key: ParameterKey, if_true: T, if_false: T) -> Self {
        Self::Compare {
            value: value.into_parameter(),
            key,
            if_true,
            if_false,
        }
    }

    /// Evaluate against a parameter set.
    pub fn resolve(&self, params: &ParameterSet) -> T {
        match *self {
            Self::Constant(x) => x,
            Self::Parameter(key) => params.get(key),
            Self::Multiply(x, key) => x.multiply(params.get(key)),
            Self::Compare {
                value,
                key,
                if_true,
                if_false,
            } => {
                if params.value(key) == value {
                    if_true
                } else {
                    if_false
                }
            }
        }
    }
}

impl Value<bool> {
    /// True when `params[key] == value`.
    pub fn equals(value: impl ParameterType, key: ParameterKey) -> Self {
        Self::compare(value, key, true, false)
    }
}

impl<T> From<ParameterKey> for Value<T> {
    fn from(key: ParameterKey) -> Self {
        Self::Parameter(key)
    }
}

macro_rules! constant_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value<$ty> {
                fn from(x: $ty) -> Self {
                    Self::Constant(x)
                }
            }
        )*
    };
}

constant_value!(bool, u32, Fixed, Vec2, f32, Colour, ShapeFlag, RenderFlags, NgonStyle, Tag);

#[cfg(test)]
mod tests {
    use super::*;

    const K: ParameterKey = ParameterKey(3);

    #[test]
    fn unset_slots_are_false() {
        let params = ParameterSet::new();
        assert_eq!(params.value(K), ParameterValue::Bool(false));
        assert!(!params.get::<bool>(K));
        assert_eq!(params.get::<Fixed>(K), Fixed::ZERO);
    }

    #[test]
    fn parameter_reads_matching_type_only() {
        let mut params = ParameterSet::new();
        params.add(K, Fixed::from_int(7));
        let v: Value<Fixed> = K.into();
        assert_eq!(v.resolve(&params), Fixed::from_int(7));
        let wrong: Value<Vec2> = K.into();
        assert_eq!(wrong.resolve(&params), Vec2::ZERO);
    }

    #[test]
    fn enums_round_trip_through_u32() {
        let mut params = ParameterSet::new();
        params.add(K, ShapeFlag::DANGEROUS | ShapeFlag::SHIELD);
        assert_eq!(params.value(K), ParameterValue::U32(0b0001_1000));
        assert_eq!(
            params.get::<ShapeFlag>(K),
            ShapeFlag::DANGEROUS | ShapeFlag::SHIELD
        );
        params.add(K, NgonStyle::Polystar);
        assert_eq!(params.get::<NgonStyle>(K), NgonStyle::Polystar);
        params.add(K, 300_u32);
        assert_eq!(params.get::<Tag>(K), Tag::default());
    }

    #[test]
    fn multiply_scales_numeric_types() {
        let mut params = ParameterSet::new();
        params.add(K, Fixed::HALF);
        let v = Value::multiply(Fixed::from_int(10), K);
        assert_eq!(v.resolve(&params), Fixed::from_int(5));

        params.add(K, Vec2::from_ints(2, 3));
        let v = Value::multiply(Vec2::from_ints(4, 5), K);
        assert_eq!(v.resolve(&params), Vec2::from_ints(8, 15));
    }

    #[test]
    fn multiply_non_numeric_is_default() {
        let mut params = ParameterSet::new();
        params.add(K, true);
        assert!(!Value::multiply(true, K).resolve(&params));
        params.add(K, ShapeFlag::DANGEROUS.bits());
        assert_eq!(
            Value::multiply(ShapeFlag::DANGEROUS, K).resolve(&params),
            ShapeFlag::empty()
        );
    }

    #[test]
    fn compare_selects_on_equality() {
        let mut params = ParameterSet::new();
        let v = Value::compare(2_u32, K, Fixed::ONE, Fixed::ZERO);
        assert_eq!(v.resolve(&params), Fixed::ZERO);
        params.add(K, 2_u32);
        assert_eq!(v.resolve(&params), Fixed::ONE);
        // Unset slots compare equal to `false`.
        assert!(Value::equals(false, ParameterKey(9)).resolve(&params));
    }

    #[test]
    fn clear_resets_every_slot() {
        let mut params = ParameterSet::new();
        params.add(K, 5_u32).add(ParameterKey(255), Fixed::ONE);
        params.clear();
        assert_eq!(params.value(K), ParameterValue::default());
        assert_eq!(params.value(ParameterKey(255)), ParameterValue::default());
    }
}
