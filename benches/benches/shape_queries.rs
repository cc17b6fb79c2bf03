// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use strata_fixed::{Fixed, Vec2};
use strata_shape::{
    BallCollider, BallDimensions, BallShape, BoxCollider, Builder, CheckQuery, Enable,
    NgonCollider, NgonDimensions, NgonShape, ParameterKey, ParameterSet, Rotate, ShapeBank,
    ShapeFlag, Translate,
};

const SPIN: ParameterKey = ParameterKey(0);
const ARMED: ParameterKey = ParameterKey(1);

/// A ring of `arms` rotating arms, each with a renderable tip and a collider.
fn boss(arms: i32) -> impl Fn(&mut Builder<'_>) {
    move |b: &mut Builder<'_>| {
        b.add(BallShape {
            dimensions: BallDimensions::new(Fixed::from_int(30)),
            ..Default::default()
        });
        b.add(NgonCollider::new(
            NgonDimensions::new(Fixed::from_int(30), 8),
            ShapeFlag::VULNERABLE,
        ));
        b.with(Rotate::new(SPIN), |b| {
            for i in 0..arms {
                b.with(Rotate::new(Fixed::from_ratio(i, arms) * Fixed::TAU), |b| {
                    b.with(Translate::new(Vec2::from_ints(60, 0)), |b| {
                        b.add(NgonShape {
                            dimensions: NgonDimensions::new(Fixed::from_int(8), 3),
                            ..Default::default()
                        });
                        b.with(Enable::new(ARMED), |b| {
                            b.add(BoxCollider::new(Vec2::from_ints(8, 3), ShapeFlag::DANGEROUS));
                        });
                        b.add(BallCollider::new(Fixed::from_int(6), ShapeFlag::SHIELD));
                    });
                });
            }
        });
    }
}

fn params() -> ParameterSet {
    let mut p = ParameterSet::new();
    p.add(SPIN, Fixed::from_ratio(1, 3)).add(ARMED, true);
    p
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for arms in [4, 16, 64] {
        group.throughput(Throughput::Elements(arms as u64));
        group.bench_function(format!("build_optimize_arms{arms}"), |b| {
            b.iter_batched(
                ShapeBank::<&'static str>::new,
                |mut bank| {
                    bank.get_or_build("boss", boss(arms));
                    black_box(bank)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let p = params();
    for arms in [4, 16, 64] {
        let mut bank: ShapeBank = ShapeBank::new();
        let root = bank.get_or_build("boss", boss(arms));
        group.throughput(Throughput::Elements(arms as u64));
        group.bench_function(format!("resolve_arms{arms}"), |b| {
            b.iter(|| bank.resolve(black_box(root), &p));
        });
    }
    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_collision");
    let p = params();
    let mut bank: ShapeBank = ShapeBank::new();
    let root = bank.get_or_build("boss", boss(16));
    let hull = [
        Vec2::from_ints(50, -5),
        Vec2::from_ints(70, -5),
        Vec2::from_ints(70, 5),
        Vec2::from_ints(50, 5),
    ];
    let queries = [
        ("point", CheckQuery::point(ShapeFlag::EVERYTHING, Vec2::from_ints(55, 20))),
        (
            "segment",
            CheckQuery::segment(
                ShapeFlag::EVERYTHING,
                Vec2::from_ints(-100, 3),
                Vec2::from_ints(100, 7),
            ),
        ),
        (
            "circle",
            CheckQuery::circle(ShapeFlag::EVERYTHING, Vec2::from_ints(40, 40), Fixed::from_int(10)),
        ),
        ("convex", CheckQuery::convex(ShapeFlag::EVERYTHING, &hull)),
        (
            "legacy_point",
            CheckQuery::point(ShapeFlag::EVERYTHING, Vec2::from_ints(55, 20)).legacy(),
        ),
    ];
    for (name, query) in &queries {
        group.bench_function(*name, |b| {
            b.iter(|| bank.check_collision(root, black_box(query), &p));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_resolve, bench_check);
criterion_main!(benches);
