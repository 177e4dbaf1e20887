use fractrio_core::{EvalParams, FractalEvaluator, SurfaceSize, Variant, ViewMapper};
use fractrio_render::{colorize_frame, export_png, render_frame, ExportMetadata};

#[test]
fn end_to_end_render_for_every_variant() {
    let evaluator = FractalEvaluator::new(EvalParams::new(300).unwrap());
    let surface = SurfaceSize::new(96, 72).unwrap();

    for v in Variant::ALL {
        let mut view = ViewMapper::new(v);
        view.set_zoom_t(1.0);
        let result = render_frame(&evaluator, &view.snapshot(), surface);

        assert_eq!(result.iterations.width, 96);
        assert_eq!(result.iterations.height, 72);
        assert_eq!(result.iterations.data.len(), 96 * 72);

        let frame = colorize_frame(&result.iterations);
        assert_eq!(frame.pixels.len(), 96 * 72 * 4);
        let has_non_black = frame
            .pixels
            .chunks_exact(4)
            .any(|px| px[0] > 0 || px[1] > 0 || px[2] > 0);
        assert!(has_non_black, "{v}: rendered image should contain color");
        assert!(frame.pixels.chunks_exact(4).all(|px| px[3] == 255));
    }
}

#[test]
fn render_determinism() {
    let evaluator = FractalEvaluator::default();
    let mut view = ViewMapper::new(Variant::Mandelbrot);
    view.set_zoom_t(0.5);
    let surface = SurfaceSize::new(64, 48).unwrap();

    let r1 = render_frame(&evaluator, &view.snapshot(), surface);
    let r2 = render_frame(&evaluator, &view.snapshot(), surface);

    assert_eq!(
        r1.iterations.data, r2.iterations.data,
        "renders must be deterministic"
    );
}

#[test]
fn variant_switch_changes_the_frame() {
    let evaluator = FractalEvaluator::new(EvalParams::new(200).unwrap());
    let surface = SurfaceSize::new(48, 36).unwrap();
    let mut view = ViewMapper::new(Variant::Mandelbrot);
    view.set_zoom_t(1.0);
    let before = render_frame(&evaluator, &view.snapshot(), surface);

    view.select_variant(Variant::BurningShip);
    view.set_zoom_t(1.0);
    let after = render_frame(&evaluator, &view.snapshot(), surface);

    assert_ne!(before.iterations.data, after.iterations.data);
}

#[test]
fn rendered_frame_exports_to_png() {
    let evaluator = FractalEvaluator::new(EvalParams::new(100).unwrap());
    let view = ViewMapper::new(Variant::Perturbed).snapshot();
    let surface = SurfaceSize::new(16, 12).unwrap();
    let frame = colorize_frame(&render_frame(&evaluator, &view, surface).iterations);

    let dir = std::env::temp_dir().join("fractrio_integration_export");
    let _ = std::fs::create_dir_all(&dir);
    let path = dir.join("frame.png");
    let meta = ExportMetadata::from_snapshot(&view, 100, surface);
    export_png(&frame, &path, &meta).expect("export should succeed");
    assert!(path.exists());

    let _ = std::fs::remove_dir_all(&dir);
}
