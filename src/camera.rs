use glam::{Mat4, Vec3};

/// Minimum camera speed - scroll-down can never park the camera
pub const MIN_MOVEMENT_SPEED: f32 = 1.0;
/// Pitch limit in degrees, keeps front from reaching the vertical pole
pub const PITCH_LIMIT: f32 = 89.0;

/// Discrete movement directions mapped from keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// First-person camera: position plus an orthonormal front/right/up basis
/// derived from yaw and pitch (degrees).
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
}

impl Camera {
    /// Build a camera looking along `front` from `position`.
    /// Yaw/pitch are recovered from the front vector so mouse rotation
    /// continues smoothly from the initial orientation.
    pub fn new(
        position: Vec3,
        front: Vec3,
        world_up: Vec3,
        zoom: f32,
        movement_speed: f32,
        mouse_sensitivity: f32,
    ) -> Self {
        let front = front.normalize();
        let pitch = front.y.asin().to_degrees();
        let yaw = front.z.atan2(front.x).to_degrees();

        let mut camera = Self {
            position,
            front,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: movement_speed.max(MIN_MOVEMENT_SPEED),
            mouse_sensitivity,
            zoom,
        };
        camera.update_vectors();
        camera
    }

    /// World-to-eye transform. No side effects; identical output for
    /// identical state.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Apply a mouse offset: yaw/pitch move by `offset * sensitivity`,
    /// pitch clamped to avoid flipping past the pole, basis rebuilt.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Move along one basis vector. Displacement magnitude is exactly
    /// `movement_speed * delta_time`, so motion is frame-rate independent.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
        }
    }

    /// Nudge speed up or down by `step`, never below the floor.
    pub fn adjust_movement_speed(&mut self, step: f32) {
        self.set_movement_speed(self.movement_speed + step);
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed.max(MIN_MOVEMENT_SPEED);
    }

    /// Force position and orientation to an explicit pose. Used by the
    /// orthographic overview, which pins the camera every frame.
    pub fn set_pose(&mut self, position: Vec3, front: Vec3, world_up: Vec3) {
        self.position = position;
        self.front = front.normalize();
        self.world_up = world_up;
        self.pitch = self.front.y.asin().to_degrees();
        self.yaw = self.front.z.atan2(self.front.x).to_degrees();
        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
