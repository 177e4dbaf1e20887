use criterion::{criterion_group, criterion_main, Criterion};

use fractrio_core::{evaluate, Complex, FractalEvaluator, SurfaceSize, Variant, ViewMapper};
use fractrio_render::{colorize_frame, render_frame};

fn bench_full_frame_render(c: &mut Criterion) {
    let evaluator = FractalEvaluator::default();
    let surface = SurfaceSize::new(640, 480).unwrap();

    for v in Variant::ALL {
        let view = ViewMapper::new(v).snapshot();
        c.bench_function(&format!("frame_640x480_{v}"), |b| {
            b.iter(|| render_frame(&evaluator, &view, surface));
        });
    }
}

fn bench_single_point(c: &mut Criterion) {
    // The Mandelbrot origin never escapes, so this measures the full budget.
    c.bench_function("evaluate_origin_1000iter", |b| {
        b.iter(|| {
            evaluate(
                std::hint::black_box(Complex::ZERO),
                Variant::Mandelbrot,
                1000,
            )
        });
    });
}

fn bench_colorize(c: &mut Criterion) {
    let evaluator = FractalEvaluator::default();
    let surface = SurfaceSize::new(640, 480).unwrap();
    let mut view = ViewMapper::new(Variant::Mandelbrot);
    view.set_zoom_t(1.0);
    let result = render_frame(&evaluator, &view.snapshot(), surface);

    c.bench_function("colorize_640x480", |b| {
        b.iter(|| colorize_frame(&result.iterations));
    });
}

criterion_group!(
    benches,
    bench_full_frame_render,
    bench_single_point,
    bench_colorize
);
criterion_main!(benches);
