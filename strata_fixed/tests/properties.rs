// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `Fixed` arithmetic laws.

#![allow(missing_docs, reason = "Test code.")]

use proptest::prelude::*;

use strata_fixed::{Fixed, Vec2};

/// Raw values whose square still fits the integer range.
fn moderate() -> impl Strategy<Value = Fixed> {
    (-(1_i64 << 47)..(1_i64 << 47)).prop_map(Fixed::from_internal)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn raw_round_trip(raw in any::<i64>()) {
        prop_assert_eq!(Fixed::from_internal(raw).to_internal(), raw);
    }

    #[test]
    fn additive_inverse(raw in any::<i64>()) {
        let a = Fixed::from_internal(raw);
        prop_assert_eq!(a + (-a), Fixed::ZERO);
    }

    #[test]
    fn division_by_zero_is_zero(raw in any::<i64>()) {
        prop_assert_eq!(Fixed::from_internal(raw) / Fixed::ZERO, Fixed::ZERO);
    }

    #[test]
    fn multiplication_commutes(a in any::<i64>(), b in any::<i64>()) {
        let (a, b) = (Fixed::from_internal(a), Fixed::from_internal(b));
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn multiplying_by_one_is_identity(raw in any::<i64>()) {
        let a = Fixed::from_internal(raw);
        prop_assert_eq!(a * Fixed::ONE, a);
    }

    #[test]
    fn integer_products_are_exact(a in -30_000_i32..30_000, b in -30_000_i32..30_000) {
        prop_assert_eq!(Fixed::from_int(a) * Fixed::from_int(b), Fixed::from_int(a * b));
    }

    #[test]
    fn sqrt_of_square_is_close(x in moderate()) {
        let s = (x * x).sqrt();
        prop_assert!((s - x.abs()).abs() <= Fixed::ONE >> 10, "sqrt({x:?}^2) = {s:?}");
    }

    #[test]
    fn sin_is_odd_and_bounded(raw in -(1_i64 << 52)..(1_i64 << 52)) {
        let x = Fixed::from_internal(raw);
        prop_assert_eq!((-x).sin(), -x.sin());
        prop_assert!(x.sin().abs() <= Fixed::ONE);
    }

    #[test]
    fn trig_is_pure(raw in any::<i64>()) {
        let x = Fixed::from_internal(raw);
        prop_assert_eq!(x.sin(), x.sin());
        prop_assert_eq!(x.atan2(Fixed::ONE), x.atan2(Fixed::ONE));
    }

    #[test]
    fn perpendicular_is_orthogonal(x in -(1_i32 << 14)..(1 << 14), y in -(1_i32 << 14)..(1 << 14)) {
        let v = Vec2::from_ints(x, y);
        prop_assert_eq!(v.dot(v.perpendicular()), Fixed::ZERO);
    }
}
