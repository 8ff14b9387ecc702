use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use scene_viewport::{Button, Camera, CameraMovement, Controller, ViewController, WindowDimensions};

struct HeldKeys(Vec<Button>);

impl Controller for HeldKeys {
    fn is_down(&self, button: Button) -> bool {
        self.0.contains(&button)
    }
}

fn default_camera() -> Camera {
    Camera::new(
        Vec3::new(0.0, 9.0, 18.0),
        Vec3::new(0.0, -0.8, -3.0),
        Vec3::Y,
        80.0,
        50.0,
        0.5,
    )
}

fn bench_view_matrix(c: &mut Criterion) {
    let camera = default_camera();
    c.bench_function("camera_view_matrix", |b| {
        b.iter(|| black_box(camera.view_matrix()));
    });
}

fn bench_mouse_movement(c: &mut Criterion) {
    c.bench_function("camera_mouse_movement", |b| {
        let mut camera = default_camera();
        b.iter(|| {
            camera.process_mouse_movement(black_box(1.5), black_box(-0.75));
        });
    });
}

fn bench_keyboard_step(c: &mut Criterion) {
    c.bench_function("camera_keyboard_step", |b| {
        let mut camera = default_camera();
        b.iter(|| {
            camera.process_keyboard(black_box(CameraMovement::Forward), black_box(0.016));
        });
    });
}

fn bench_prepare_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare_frame");
    let idle = HeldKeys(vec![]);
    let moving = HeldKeys(vec![Button::KeyW, Button::KeyD]);

    group.bench_function("idle", |b| {
        let mut view: ViewController<scene_viewport::UniformStage> =
            ViewController::new(WindowDimensions::new(1000, 800), None);
        b.iter(|| black_box(view.prepare_frame(&idle)));
    });

    group.bench_function("two_keys_held", |b| {
        let mut view: ViewController<scene_viewport::UniformStage> =
            ViewController::new(WindowDimensions::new(1000, 800), None);
        b.iter(|| black_box(view.prepare_frame(&moving)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_view_matrix,
    bench_mouse_movement,
    bench_keyboard_step,
    bench_prepare_frame
);
criterion_main!(benches);
