// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_collision --heading-base-level=0

//! Strata Collision: deterministic 2D intersection tests.
//!
//! Pure functions over [`strata_fixed::Vec2`] that answer "do these two primitives
//! touch?". Primitives are points, segments, circles, axis-aligned boxes ([`Aabb`])
//! and convex polygons given as vertex slices. Convex cases use the separating axis
//! theorem with inclusive interval overlap, so shapes that merely touch intersect.
//!
//! All tests live in [`intersect`]. The SAT pieces are exposed in [`sat`] for callers
//! that build their own queries.
//!
//! ## Example
//!
//! ```
//! use strata_collision::{Aabb, intersect};
//! use strata_fixed::{Fixed, Vec2};
//!
//! let a = [
//!     Vec2::from_ints(0, 0),
//!     Vec2::from_ints(10, 0),
//!     Vec2::from_ints(10, 10),
//!     Vec2::from_ints(0, 10),
//! ];
//! // A circle just reaching the corner at (10, 10).
//! assert!(intersect::convex_circle(&a, Vec2::from_ints(13, 14), Fixed::from_int(5)));
//!
//! let b = Aabb::new(Vec2::from_ints(11, 0), Vec2::from_ints(20, 10));
//! assert!(!intersect::aabb_convex(b, &a));
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod aabb;
pub mod intersect;
mod line;
pub mod sat;

pub use aabb::Aabb;
pub use line::{line_point_relation, segment_closest_point};
