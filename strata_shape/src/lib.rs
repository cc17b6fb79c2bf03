// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_shape --heading-base-level=0

//! Strata Shape: declarative, parameterised shape trees for deterministic games.
//!
//! A game object's look and its hit areas are described once, as a tree:
//!
//! - **Colliders** ([`BallCollider`], [`BoxCollider`], [`NgonCollider`], [`ArcCollider`])
//!   carry [`ShapeFlag`] roles and answer collision queries.
//! - **Renderable shapes** ([`BallShape`], [`BoxShape`], [`LineShape`], [`NgonShape`])
//!   are turned into draw-ready primitives.
//! - **Compositors** ([`Translate`], [`Rotate`], [`Enable`], and plain compounds)
//!   place and gate their children.
//!
//! Any field of any node may be a [`Value`]: a constant, or a lookup into a
//! [`ParameterSet`] supplied at evaluation time. One tree per object kind is built
//! on first use and cached in a [`ShapeBank`], which also simplifies it once so
//! later evaluations do less work.
//!
//! Two evaluations walk a tree:
//!
//! - [`ShapeBank::resolve`] produces a [`ResolveResult`] listing every visible
//!   shape with its [`Transform`].
//! - [`ShapeBank::check_collision`] tests a [`CheckQuery`] (point, segment, circle or
//!   convex polygon) against every enabled collider whose flags match the query
//!   mask, producing a [`HitResult`].
//!
//! All geometry is in [`strata_fixed::Fixed`], so results are bit-identical across
//! platforms.
//!
//! ## Example
//!
//! ```
//! use strata_fixed::{Fixed, Vec2};
//! use strata_shape::{
//!     BallCollider, BallDimensions, BallShape, CheckQuery, Enable, ParameterKey, ShapeBank,
//!     ShapeFlag, Translate,
//! };
//!
//! const SHIELD_UP: ParameterKey = ParameterKey(0);
//!
//! let mut bank: ShapeBank = ShapeBank::new();
//! let build = |b: &mut strata_shape::Builder<'_>| {
//!     b.add(BallShape {
//!         dimensions: BallDimensions::new(Fixed::from_int(10)),
//!         ..Default::default()
//!     });
//!     b.add(BallCollider::new(Fixed::from_int(10), ShapeFlag::VULNERABLE));
//!     b.with(Enable::new(SHIELD_UP), |b| {
//!         b.with(Translate::new(Vec2::from_ints(20, 0)), |b| {
//!             b.add(BallCollider::new(Fixed::from_int(4), ShapeFlag::SHIELD));
//!         });
//!     });
//! };
//!
//! let hit = bank.check_kind(
//!     "drone",
//!     build,
//!     &CheckQuery::point(ShapeFlag::EVERYTHING, Vec2::from_ints(21, 1)),
//!     |p| {
//!         p.add(SHIELD_UP, true);
//!     },
//! );
//! assert_eq!(hit.mask, ShapeFlag::SHIELD);
//! assert_eq!(hit.shape_centres, [Vec2::from_ints(20, 0)]);
//!
//! let drawn = bank.resolve_kind("drone", build, |_| {});
//! assert_eq!(drawn.entries.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bank;
mod collision;
mod node;
mod optimize;
mod params;
mod resolve;
mod transform;
mod types;

pub use bank::{Builder, ShapeBank};
pub use collision::{CheckQuery, Extent, HitResult};
pub use node::{
    ArcCollider, BallCollider, BallDimensions, BallShape, BoxCollider, BoxShape, Enable,
    FillStyle, LineShape, LineStyle, NgonCollider, NgonDimensions, NgonShape, Node, Rotate,
    Translate, TranslateRotate,
};
pub use params::{PARAMETER_SLOTS, ParameterKey, ParameterSet, ParameterType, ParameterValue, Value};
pub use resolve::{
    ResolveEntry, ResolveResult, ResolvedBall, ResolvedBallDimensions, ResolvedBox,
    ResolvedFillStyle, ResolvedLine, ResolvedLineStyle, ResolvedNgon, ResolvedNgonDimensions,
    ResolvedShape,
};
pub use transform::Transform;
pub use types::{Colour, NgonStyle, NodeCaps, NodeId, RenderFlags, ShapeFlag, Tag};
