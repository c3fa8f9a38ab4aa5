#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num;

use criterion::Criterion;
use mandelbrot::{escape_certainty, render, render_threaded, Viewport};
use num::Complex;

fn escape_benchmark(c: &mut Criterion) {
    c.bench_function("escape origin 1000", |b| {
        b.iter(|| escape_certainty(Complex::new(0.0, 0.0), 1000))
    });
}

fn render_benchmark(c: &mut Criterion) {
    let viewport = Viewport::with_size(160, 120).unwrap();
    c.bench_function("render 160x120 single", move |b| {
        b.iter(|| render(&viewport, 100).unwrap())
    });
    c.bench_function("render 160x120 threaded", move |b| {
        b.iter(|| render_threaded(&viewport, 100, 4).unwrap())
    });
}

criterion_group!(benches, escape_benchmark, render_benchmark);
criterion_main!(benches);
