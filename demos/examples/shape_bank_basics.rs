// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape bank basics.
//!
//! Describe an enemy once, then resolve it each frame with different parameters
//! and hand the result to a (pretend) renderer as Kurbo geometry.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p strata_demos --example shape_bank_basics`

use kurbo::{Affine, Circle, Line, Point, Shape};
use strata_fixed::{Fixed, Vec2};
use strata_shape::{
    BallDimensions, BallShape, Builder, Colour, Enable, FillStyle, LineShape, LineStyle, ParameterKey,
    ResolvedShape, Rotate, ShapeBank, Translate,
};

const TURRET_ANGLE: ParameterKey = ParameterKey(0);
const CHARGING: ParameterKey = ParameterKey(1);
const HULL_COLOUR: ParameterKey = ParameterKey(2);

const BLACK: Colour = [0.1, 0.1, 0.1, 1.0];
const WHITE: Colour = [1.0, 1.0, 1.0, 1.0];
const ALERT: Colour = [1.0, 0.2, 0.2, 1.0];

#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
enum Kind {
    Turret,
}

fn turret(b: &mut Builder<'_>) {
    // Hull
    b.add(BallShape {
        dimensions: BallDimensions::new(Fixed::from_int(12)),
        line: LineStyle::new(HULL_COLOUR, 0.0_f32, 2.0),
        fill: FillStyle::new(BLACK, 0.0_f32),
        ..Default::default()
    });
    // Barrel
    b.with(Rotate::new(TURRET_ANGLE), |b| {
        b.add(LineShape {
            a: Vec2::from_ints(12, 0).into(),
            b: Vec2::from_ints(24, 0).into(),
            style: LineStyle::new(WHITE, 0.0_f32, 3.0),
            ..Default::default()
        });
        // Charge glow at the muzzle
        b.with(Enable::new(CHARGING), |b| {
            b.with(Translate::new(Vec2::from_ints(24, 0)), |b| {
                b.add(BallShape {
                    dimensions: BallDimensions::new(Fixed::from_int(4)),
                    ..Default::default()
                });
            });
        });
    });
}

fn draw(frame: u32, bank: &mut ShapeBank<Kind>) {
    let angle = Fixed::from_ratio(frame as i32, 8);
    let out = bank.resolve_kind(Kind::Turret, turret, |p| {
        p.add(TURRET_ANGLE, angle)
            .add(CHARGING, frame % 2 == 1)
            .add(HULL_COLOUR, ALERT);
    });

    println!("frame {frame}: {} shapes", out.entries.len());
    for entry in &out.entries {
        let t = entry.transform;
        let affine = Affine::rotate(t.rotation.to_f64()).then_translate(t.translation.into());
        match entry.shape {
            ResolvedShape::Ball(ball) => {
                let circle = Circle::new(Point::ORIGIN, ball.dimensions.radius.to_f64());
                let bbox = (affine * circle.to_path(0.1)).bounding_box();
                println!("  ball   {bbox:?} colour {:?}", ball.line.colour0);
            }
            ResolvedShape::Line(line) => {
                let seg = affine * Line::new(Point::from(line.a), Point::from(line.b));
                println!("  line   {:?} -> {:?}", seg.p0, seg.p1);
            }
            other => println!("  other  {other:?}"),
        }
    }
}

fn main() {
    env_logger::init();

    let mut bank = ShapeBank::new();
    for frame in 0..3 {
        draw(frame, &mut bank);
    }
    log::info!("bank holds {} nodes after three frames", bank.len());
}
