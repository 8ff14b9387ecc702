use glam::{Mat4, Vec3};
use scene_viewport::{Camera, CameraMovement};

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

#[test]
fn test_displacement_magnitude_scales_with_delta() {
    for dt in [0.0f32, 0.004, 0.016, 0.1, 1.0] {
        for direction in [
            CameraMovement::Forward,
            CameraMovement::Backward,
            CameraMovement::Left,
            CameraMovement::Right,
            CameraMovement::Up,
            CameraMovement::Down,
        ] {
            let mut camera = default_camera();
            let before = camera.position;
            camera.process_keyboard(direction, dt);

            let magnitude = (camera.position - before).length();
            assert!(
                (magnitude - 50.0 * dt).abs() < 1e-3,
                "dt={} dir={:?}: expected {}, got {}",
                dt,
                direction,
                50.0 * dt,
                magnitude
            );
        }
    }
}

#[test]
fn test_opposite_directions_cancel() {
    let mut camera = default_camera();
    let start = camera.position;

    camera.process_keyboard(CameraMovement::Forward, 0.25);
    camera.process_keyboard(CameraMovement::Backward, 0.25);
    assert!((camera.position - start).length() < 1e-4);

    camera.process_keyboard(CameraMovement::Left, 0.5);
    camera.process_keyboard(CameraMovement::Right, 0.5);
    assert!((camera.position - start).length() < 1e-4);
}

#[test]
fn test_movement_directions_match_basis_vectors() {
    let cases: [(CameraMovement, fn(&Camera) -> Vec3); 3] = [
        (CameraMovement::Forward, |c| c.front()),
        (CameraMovement::Right, |c| c.right()),
        (CameraMovement::Up, |c| c.up()),
    ];

    for (direction, basis) in cases {
        let mut camera = default_camera();
        let expected = basis(&camera);
        let before = camera.position;
        camera.process_keyboard(direction, 0.5);

        let actual = (camera.position - before).normalize();
        assert!(
            actual.dot(expected) > 1.0 - 1e-5,
            "direction {:?} should follow its basis vector",
            direction
        );
    }
}

#[test]
fn test_mouse_movement_scales_with_sensitivity() {
    let mut camera = default_camera();
    let yaw = camera.yaw();
    let pitch = camera.pitch();

    camera.process_mouse_movement(20.0, 10.0);

    assert!((camera.yaw() - (yaw + 10.0)).abs() < 1e-4);
    assert!((camera.pitch() - (pitch + 5.0)).abs() < 1e-4);
}

#[test]
fn test_view_matrix_looks_down_front() {
    let camera = default_camera();
    let view = camera.view_matrix();

    // eye maps to the origin of eye space
    let eye = view * camera.position.extend(1.0);
    assert!(eye.truncate().length() < 1e-4);

    // a point one unit along front lands on the negative eye-space z axis
    let ahead = view * (camera.position + camera.front()).extend(1.0);
    assert!((ahead.truncate() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
}

#[test]
fn test_view_matrix_deterministic() {
    let camera = default_camera();
    let a: Mat4 = camera.view_matrix();
    let b: Mat4 = camera.view_matrix();
    assert_eq!(a, b);
}

#[test]
fn test_speed_floor_survives_repeated_decrements() {
    let mut camera = default_camera();
    for _ in 0..200 {
        camera.adjust_movement_speed(-1.0);
    }
    assert_eq!(camera.movement_speed(), 1.0);
}
