// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quadrille_core::{color::Rgba, geometry::Corner};
use quadrille_model::{counts::SquareCounts, palette::Palette, square::Square};
use quadrille_search::{
    placer::Placer,
    sweep::SweepPlacer,
    tiered::TieredPlacer,
    traversal::{SweepMode, TraversalStrategy},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Requests that fill roughly half of the grid, largest sizes first.
fn request_for(side_length: usize) -> Vec<Square> {
    let budget = side_length * side_length / 2;
    let x5 = budget / 4 / 25;
    let x4 = budget / 4 / 16;
    let x3 = budget / 4 / 9;
    let x2 = budget / 4 / 4;
    SquareCounts::from_largest_first(x5, x4, x3, x2).to_squares(&Palette::default())
}

fn bench_sweep_placer(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_placer");

    for side_length in [8_usize, 16, 32, 64] {
        let squares = request_for(side_length);
        group.throughput(Throughput::Elements((side_length * side_length) as u64));

        for strategy in [
            TraversalStrategy::default(),
            TraversalStrategy::new(Corner::BottomRight, SweepMode::Serpentine, true),
        ] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), side_length),
                &squares,
                |b, squares| {
                    let mut placer = SweepPlacer;
                    b.iter(|| {
                        let result = placer.place(
                            black_box(side_length),
                            black_box(squares),
                            strategy,
                            Rgba::TRANSPARENT,
                        );
                        black_box(result)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_tiered_placer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiered_placer");

    for side_length in [8_usize, 16, 32] {
        let squares = request_for(side_length);
        group.throughput(Throughput::Elements((side_length * side_length) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(side_length),
            &squares,
            |b, squares| {
                let mut placer = TieredPlacer::new(ChaCha8Rng::seed_from_u64(42));
                b.iter(|| {
                    let result = placer.place(
                        black_box(side_length),
                        black_box(squares),
                        TraversalStrategy::default(),
                        Rgba::TRANSPARENT,
                    );
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sweep_placer, bench_tiered_placer);
criterion_main!(benches);
