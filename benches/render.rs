#[macro_use]
extern crate criterion;
extern crate multibrot;
extern crate num;

use criterion::Criterion;
use multibrot::{Evaluator, FrameRenderer, Palette, PlaneMapper};
use num::Complex;

fn renderer() -> FrameRenderer {
    let plane =
        PlaneMapper::new(128, 128, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
    FrameRenderer::new(plane, Evaluator::default(), Palette::Grayscale)
}

fn bench_single(c: &mut Criterion) {
    let r = renderer();
    c.bench_function("render 128x128 single", move |b| b.iter(|| r.render_single(2.0)));
}

fn bench_threaded(c: &mut Criterion) {
    let r = renderer();
    c.bench_function("render 128x128 threaded", move |b| {
        b.iter(|| r.render(2.0, 4).unwrap())
    });
}

criterion_group!(benches, bench_single, bench_threaded);
criterion_main!(benches);
