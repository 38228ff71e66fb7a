// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Benchmarks for a full simulation tick
//!
//! The collision pass visits every pair, so cost grows quadratically with
//! the body count. These benchmarks measure:
//! - `step` (fresh output vector) against `step_in_place`
//! - The pairwise collision sweep on its own

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use playground_physics::collision::CollisionDetector;
use playground_physics::{Body, BodyBuilder, SimulationManager, Vector2, WorldConfig};

const DT: f64 = 1.0 / 60.0;

/// Ground slab plus a grid of small balls spread over the world
fn setup_playground(ball_count: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(ball_count + 1);
    bodies.push(
        BodyBuilder::rectangle(20.0, 1.0)
            .position(Vector2::zero())
            .mass(100.0)
            .static_body()
            .build()
            .unwrap(),
    );

    for i in 0..ball_count {
        let column = (i % 38) as f64;
        let row = (i / 38) as f64;
        // Vary velocities slightly to avoid perfect symmetry
        bodies.push(
            BodyBuilder::circle(0.2)
                .position(Vector2::new(0.5 + column * 0.5, 2.0 + (row * 0.45) % 9.5))
                .velocity(Vector2::new((i % 7) as f64 - 3.0, (i % 5) as f64 - 2.0))
                .build()
                .unwrap(),
        );
    }

    bodies
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for ball_count in [10, 100, 500].iter() {
        group.throughput(Throughput::Elements(*ball_count as u64));

        group.bench_with_input(
            BenchmarkId::new("fresh_vec", ball_count),
            ball_count,
            |b, &ball_count| {
                let mut sim = SimulationManager::new(WorldConfig::default());
                let mut bodies = setup_playground(ball_count);
                b.iter(|| {
                    bodies = sim.step(black_box(&bodies), DT, None);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("in_place", ball_count),
            ball_count,
            |b, &ball_count| {
                let mut sim = SimulationManager::new(WorldConfig::default());
                let mut bodies = setup_playground(ball_count);
                b.iter(|| {
                    sim.step_in_place(black_box(&mut bodies), DT, None);
                });
            },
        );
    }

    group.finish();
}

fn bench_collision_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision_sweep");
    let detector = CollisionDetector::default();

    for ball_count in [10, 100, 500].iter() {
        group.throughput(Throughput::Elements(*ball_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(ball_count),
            ball_count,
            |b, &ball_count| {
                let start = setup_playground(ball_count);
                b.iter(|| {
                    let mut bodies = start.clone();
                    detector.resolve_all(black_box(&mut bodies))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_step, bench_collision_sweep);
criterion_main!(benches);
