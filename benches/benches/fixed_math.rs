// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use strata_collision::{Aabb, intersect};
use strata_fixed::{Fixed, Vec2};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    /// Uniform in `[-range, range)`, as raw Q32.32.
    fn next_fixed(&mut self, range: i32) -> Fixed {
        let span = (i64::from(range) << 33) as u64;
        let raw = (self.next_u64() % span) as i64 - (i64::from(range) << 32);
        Fixed::from_internal(raw)
    }
    fn next_vec2(&mut self, range: i32) -> Vec2 {
        Vec2::new(self.next_fixed(range), self.next_fixed(range))
    }
}

fn gen_fixed(count: usize, range: i32, seed: u64) -> Vec<Fixed> {
    let mut rng = Rng::new(seed);
    (0..count).map(|_| rng.next_fixed(range)).collect()
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed");
    let xs = gen_fixed(1024, 1000, 0xCAFE_F00D_DEAD_BEEF);
    let ys = gen_fixed(1024, 1000, 0xBADC_F00D_1234_5678);
    group.throughput(Throughput::Elements(xs.len() as u64));

    group.bench_function("mul", |b| {
        b.iter(|| {
            xs.iter()
                .zip(&ys)
                .fold(Fixed::ZERO, |acc, (x, y)| acc + black_box(*x) * *y)
        });
    });
    group.bench_function("div", |b| {
        b.iter(|| {
            xs.iter()
                .zip(&ys)
                .fold(Fixed::ZERO, |acc, (x, y)| acc + black_box(*x) / *y)
        });
    });
    group.bench_function("sqrt", |b| {
        b.iter(|| {
            xs.iter()
                .fold(Fixed::ZERO, |acc, x| acc + black_box(x.abs()).sqrt())
        });
    });
    group.bench_function("sin_cos", |b| {
        b.iter(|| {
            xs.iter().fold(Fixed::ZERO, |acc, x| {
                let (s, c) = black_box(*x).sin_cos();
                acc + s + c
            })
        });
    });
    group.bench_function("atan2", |b| {
        b.iter(|| {
            xs.iter()
                .zip(&ys)
                .fold(Fixed::ZERO, |acc, (y, x)| acc + black_box(*y).atan2(*x))
        });
    });
    group.finish();
}

fn bench_vectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec2");
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let vs: Vec<Vec2> = (0..1024).map(|_| rng.next_vec2(500)).collect();
    let angle = Fixed::from_ratio(3, 7);
    group.throughput(Throughput::Elements(vs.len() as u64));

    group.bench_function("rotate", |b| {
        b.iter(|| vs.iter().fold(Vec2::ZERO, |acc, v| acc + black_box(*v).rotate(angle)));
    });
    group.bench_function("rotate_legacy", |b| {
        b.iter(|| {
            vs.iter()
                .fold(Vec2::ZERO, |acc, v| acc + black_box(*v).rotate_legacy(angle))
        });
    });
    group.bench_function("normalise", |b| {
        b.iter(|| vs.iter().fold(Vec2::ZERO, |acc, v| acc + black_box(*v).normalise()));
    });
    group.finish();
}

fn bench_intersections(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let points: Vec<Vec2> = (0..1024).map(|_| rng.next_vec2(50)).collect();
    let hexagon: Vec<Vec2> = (0..6)
        .map(|i| Vec2::from_polar(Fixed::from_ratio(i, 6) * Fixed::TAU, Fixed::from_int(20)))
        .collect();
    let aabb = Aabb::from_half_extents(Vec2::from_ints(15, 10));
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("convex_circle", |b| {
        b.iter(|| {
            points
                .iter()
                .filter(|p| intersect::convex_circle(&hexagon, black_box(**p), Fixed::from_int(3)))
                .count()
        });
    });
    group.bench_function("convex_segment", |b| {
        b.iter(|| {
            points
                .windows(2)
                .filter(|w| intersect::convex_segment(&hexagon, black_box(w[0]), w[1]))
                .count()
        });
    });
    group.bench_function("aabb_convex", |b| {
        let tri = [Vec2::ZERO, Vec2::from_ints(4, 0), Vec2::from_ints(0, 4)];
        b.iter(|| {
            points
                .iter()
                .filter(|p| {
                    let moved = tri.map(|v| v + **p);
                    intersect::aabb_convex(black_box(aabb), &moved)
                })
                .count()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_vectors, bench_intersections);
criterion_main!(benches);
