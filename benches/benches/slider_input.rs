// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_slider::{HeadlessSurface, HeadlessTrack, Key, Slider, SliderConfig};

type BenchSlider = Slider<HeadlessTrack, HeadlessSurface>;

/// Deterministic values in `[lo, hi)` from a 64-bit LCG (Knuth's MMIX constants).
fn gen_values(count: usize, lo: f64, hi: f64, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            lo + unit * (hi - lo)
        })
        .collect()
}

fn range_slider(track_width: f64, step: f64) -> BenchSlider {
    let mut s = Slider::new(HeadlessTrack::new(Rect::new(0.0, 0.0, track_width, 20.0)));
    s.max(1000.0)
        .step(step)
        .handle(HeadlessSurface::new(16.0), 250.0)
        .handle(HeadlessSurface::new(16.0), 750.0);
    s
}

fn bench_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap");
    let values = gen_values(4096, -200.0, 1200.0, 0x5eed_1234);
    group.throughput(Throughput::Elements(values.len() as u64));
    for &step in &[1.0, 0.25, 7.0] {
        let cfg = SliderConfig::new(0.0, 1000.0, step);
        group.bench_function(format!("step_{step}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &v in &values {
                    acc += cfg.snap(black_box(v));
                }
                black_box(acc);
            });
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    for &moves in &[64usize, 512] {
        let xs = gen_values(moves, -50.0, 650.0, 0xdead_beef);
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_function(format!("low_handle_moves_{moves}"), |b| {
            b.iter_batched(
                || range_slider(600.0, 1.0),
                |mut s| {
                    let Some(low) = s.handle_id(0) else { return };
                    let mut h = s.handle_mut(low);
                    h.pointer_down(Point::new(xs[0], 10.0));
                    for &x in &xs {
                        h.pointer_move(Point::new(x, 10.0));
                    }
                    h.pointer_up();
                    black_box(s.range_bar());
                },
                BatchSize::SmallInput,
            );
        });
    }
    // Listeners are part of the per-move cost.
    let xs = gen_values(512, -50.0, 650.0, 0xfeed_f00d);
    group.bench_function("low_handle_moves_with_listeners", |b| {
        b.iter_batched(
            || {
                let mut s = range_slider(600.0, 1.0);
                s.on_any(|e| {
                    black_box(e);
                });
                s
            },
            |mut s| {
                let Some(low) = s.handle_id(0) else { return };
                let mut h = s.handle_mut(low);
                h.pointer_down(Point::new(xs[0], 10.0));
                for &x in &xs {
                    h.pointer_move(Point::new(x, 10.0));
                }
                h.pointer_up();
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("keys");
    // Mostly single steps, with the occasional jump to either bound.
    let keys: Vec<Key> = gen_values(1024, 0.0, 8.0, 0x0bad_cafe)
        .into_iter()
        .map(|r| match r as u8 {
            0 => Key::Home,
            1 => Key::End,
            2..=4 => Key::Left,
            _ => Key::Right,
        })
        .collect();
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("high_handle_key_mix", |b| {
        b.iter_batched(
            || range_slider(800.0, 5.0),
            |mut s| {
                let Some(high) = s.handle_id(1) else { return };
                let mut h = s.handle_mut(high);
                for &k in &keys {
                    black_box(h.key_down(k));
                }
                black_box(s.value());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_snap, bench_drag, bench_keys);
criterion_main!(benches);
