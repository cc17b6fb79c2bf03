// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_fixed --heading-base-level=0

//! Strata Fixed: deterministic Q32.32 arithmetic.
//!
//! Lockstep simulations and replays need every peer to compute the same bits from the
//! same inputs. Floating point does not promise that across compilers, targets, and
//! optimisation levels. This crate provides a fixed-point scalar whose operations are
//! written entirely in 64-bit integer arithmetic.
//!
//! - [`Fixed`]: signed Q32.32 scalar with wrapping add/sub, truncating mul/div,
//!   and a total division (dividing by zero yields zero).
//! - [`Vec2`]: 2D vector over [`Fixed`] with dot product, length, rotation and
//!   normalisation.
//! - Square root and trigonometry ([`Fixed::sqrt`], [`Fixed::sin`], [`Fixed::cos`],
//!   [`Fixed::atan2`]) are approximations, but reproducible ones.
//!
//! ## Features
//!
//! - `serde`: `Fixed` serializes as its raw `i64`. This is the only form that should be
//!   written to disk or the network.
//! - `kurbo`: `From<Vec2>` conversions into [`kurbo`] types, for renderers. Kurbo
//!   itself needs a float backend, so pair this with `std` or `libm`.
//! - `std`, `libm`: select that backend for `kurbo`.
//!
//! ## Example
//!
//! ```
//! use strata_fixed::{Fixed, Vec2};
//!
//! let v = Vec2::from_ints(3, 4);
//! let len = v.length();
//! assert!((len - Fixed::from_int(5)).abs() <= Fixed::ONE >> 10);
//!
//! // Division is total.
//! assert_eq!(Fixed::from_int(7) / Fixed::ZERO, Fixed::ZERO);
//!
//! // The raw form round-trips exactly.
//! let x = Fixed::from_ratio(1, 3);
//! assert_eq!(Fixed::from_internal(x.to_internal()), x);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod fixed;
#[cfg(feature = "kurbo")]
mod interop;
mod trig;
mod vec2;

pub use fixed::Fixed;
pub use vec2::Vec2;
