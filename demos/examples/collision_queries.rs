// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision queries.
//!
//! Fire a few projectiles of different shapes at a shielded target and report
//! which roles each one touched.
//!
//! Run:
//! - `cargo run -p strata_demos --example collision_queries`

use strata_fixed::{Fixed, Vec2};
use strata_shape::{
    ArcCollider, BallCollider, BallDimensions, Builder, CheckQuery, ParameterKey, ParameterSet,
    Rotate, ShapeBank, ShapeFlag,
};

const FACING: ParameterKey = ParameterKey(0);

fn target(b: &mut Builder<'_>) {
    b.add(BallCollider::new(Fixed::from_int(10), ShapeFlag::VULNERABLE));
    // A quarter-circle shield that turns with the target.
    b.with(Rotate::new(FACING), |b| {
        b.add(ArcCollider {
            dimensions: BallDimensions::annulus(Fixed::from_int(20), Fixed::from_int(16)),
            arc_angle: Fixed::FRAC_PI_2.into(),
            flags: ShapeFlag::SHIELD.into(),
        });
    });
}

fn main() {
    env_logger::init();

    let mut bank: ShapeBank = ShapeBank::new();
    let root = bank.get_or_build("target", target);
    let mut params = ParameterSet::new();
    params.add(FACING, -Fixed::FRAC_PI_4);

    let spark = [
        Vec2::from_ints(8, -2),
        Vec2::from_ints(12, 0),
        Vec2::from_ints(8, 2),
    ];
    let shots = [
        ("bullet", CheckQuery::point(ShapeFlag::EVERYTHING, Vec2::from_ints(18, 0))),
        ("stray bullet", CheckQuery::point(ShapeFlag::EVERYTHING, Vec2::from_ints(-18, 0))),
        (
            "laser",
            CheckQuery::segment(
                ShapeFlag::VULNERABLE | ShapeFlag::DANGEROUS,
                Vec2::from_ints(-40, 5),
                Vec2::from_ints(40, 5),
            ),
        ),
        (
            "bomb",
            CheckQuery::circle(ShapeFlag::EVERYTHING, Vec2::from_ints(0, 25), Fixed::from_int(16)),
        ),
        ("spark", CheckQuery::convex(ShapeFlag::EVERYTHING, &spark)),
        (
            "old-style bullet",
            CheckQuery::point(ShapeFlag::EVERYTHING, Vec2::from_ints(18, 0)).legacy(),
        ),
    ];

    for (name, query) in &shots {
        let hit = bank.check_collision(root, query, &params);
        if hit.is_hit() {
            println!("{name}: {:?} at {:?}", hit.mask, hit.shape_centres);
        } else {
            println!("{name}: miss");
        }
    }
}
