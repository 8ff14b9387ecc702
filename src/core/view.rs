use glam::{Mat4, Vec3};

use crate::camera::{Camera, CameraMovement};

use super::clock::FrameClock;
use super::controller::{Button, Controller};
use super::shader_sink::{
    ShaderSink, PROJECTION_UNIFORM, VIEW_POSITION_UNIFORM, VIEW_UNIFORM,
};
use super::window::WindowDimensions;

/// Default camera pose, also the pinned orthographic overview pose
pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 9.0, 18.0);
pub const DEFAULT_FRONT: Vec3 = Vec3::new(0.0, -0.8, -3.0);
pub const DEFAULT_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const DEFAULT_ZOOM: f32 = 80.0;
pub const DEFAULT_MOVEMENT_SPEED: f32 = 50.0;
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.5;

/// Frustum depth range shared by both projection modes
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

/// Reference distance used to size the orthographic volume so the fixed
/// overview frames roughly the same extent the perspective frustum would
/// at the canonical pose.
const ORTHO_VIEW_DISTANCE: f32 = 20.0;

/// Active projection model. Exactly one at a time; orthographic pins the
/// camera to the fixed overview pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Perspective,
    Orthographic,
}

/// Cursor sample bookkeeping for mouse-look. The first observed sample
/// only seeds last_x/last_y; producing an offset from it would hurl the
/// camera by the full distance from the window origin.
#[derive(Debug, Clone, Copy)]
struct CursorTracking {
    last_x: f32,
    last_y: f32,
    first_sample: bool,
}

impl CursorTracking {
    fn new() -> Self {
        Self {
            last_x: 0.0,
            last_y: 0.0,
            first_sample: true,
        }
    }
}

/// One frame's published output
#[derive(Debug, Clone, Copy)]
pub struct FrameView {
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_position: Vec3,
    pub close_requested: bool,
}

/// Owns the camera, the frame clock, and the projection-mode state
/// machine; translates input events and polled key state into one camera
/// pose per frame and publishes it to the shader sink.
///
/// Single-threaded by construction: event callbacks and `prepare_frame`
/// interleave on the host's event-dispatch thread and mutate the camera
/// directly, with no buffering between frames.
pub struct ViewController<S: ShaderSink> {
    camera: Camera,
    clock: FrameClock,
    cursor: CursorTracking,
    mode: ProjectionMode,
    viewport: WindowDimensions,
    sink: Option<S>,
    delta_time: f32,
    // previous O/P levels, for rising-edge detection
    ortho_key_down: bool,
    persp_key_down: bool,
}

impl<S: ShaderSink> ViewController<S> {
    /// A `None` sink skips the publish step each frame.
    pub fn new(viewport: WindowDimensions, sink: Option<S>) -> Self {
        Self {
            camera: Camera::new(
                DEFAULT_POSITION,
                DEFAULT_FRONT,
                DEFAULT_UP,
                DEFAULT_ZOOM,
                DEFAULT_MOVEMENT_SPEED,
                DEFAULT_MOUSE_SENSITIVITY,
            ),
            clock: FrameClock::new(),
            cursor: CursorTracking::new(),
            mode: ProjectionMode::Perspective,
            viewport,
            sink,
            delta_time: 0.0,
            ortho_key_down: false,
            persp_key_down: false,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Cursor-position event callback. The camera is not mouse-navigable
    /// in orthographic mode, so the whole handler (seeding included) is
    /// suppressed there.
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        if self.mode == ProjectionMode::Orthographic {
            return;
        }

        if self.cursor.first_sample {
            self.cursor.last_x = x;
            self.cursor.last_y = y;
            self.cursor.first_sample = false;
            return;
        }

        let x_offset = x - self.cursor.last_x;
        // reversed: screen y grows downward, pitch grows upward
        let y_offset = self.cursor.last_y - y;
        self.cursor.last_x = x;
        self.cursor.last_y = y;

        self.camera.process_mouse_movement(x_offset, y_offset);
    }

    /// Scroll event callback: one speed step per wheel notch, floored at
    /// the camera's minimum speed.
    pub fn on_scroll(&mut self, y_offset: f32) {
        if y_offset > 0.0 {
            self.camera.adjust_movement_speed(1.0);
        } else if y_offset < 0.0 {
            self.camera.adjust_movement_speed(-1.0);
        }
        log::debug!("camera speed: {}", self.camera.movement_speed());
    }

    /// Query held keys and apply them to the camera with the current frame
    /// delta. Movement keys only act in perspective mode; O/P mode edges
    /// and Escape are honored regardless of mode. Returns true when Escape
    /// requests shutdown - closing is the host's job, not ours.
    pub fn poll_keyboard(&mut self, input: &dyn Controller) -> bool {
        let close_requested = input.is_down(Button::Escape);

        if self.mode == ProjectionMode::Perspective {
            let bindings = [
                (Button::KeyW, CameraMovement::Forward),
                (Button::KeyS, CameraMovement::Backward),
                (Button::KeyA, CameraMovement::Left),
                (Button::KeyD, CameraMovement::Right),
                (Button::KeyQ, CameraMovement::Up),
                (Button::KeyE, CameraMovement::Down),
            ];
            // all held keys apply - diagonals come for free
            for (button, direction) in bindings {
                if input.is_down(button) {
                    self.camera.process_keyboard(direction, self.delta_time);
                }
            }
        }

        let ortho_down = input.is_down(Button::KeyO);
        if ortho_down && !self.ortho_key_down {
            self.set_mode(ProjectionMode::Orthographic);
        }
        self.ortho_key_down = ortho_down;

        let persp_down = input.is_down(Button::KeyP);
        if persp_down && !self.persp_key_down {
            self.set_mode(ProjectionMode::Perspective);
        }
        self.persp_key_down = persp_down;

        close_requested
    }

    /// Run one frame: advance the clock, poll the keyboard, derive the
    /// view and projection matrices, publish them to the sink.
    pub fn prepare_frame(&mut self, input: &dyn Controller) -> FrameView {
        self.delta_time = self.clock.tick();
        let close_requested = self.poll_keyboard(input);

        // Re-pin the overview pose every frame, not just on the mode
        // transition: orthographic must never drift, whatever else touched
        // the camera since the last frame.
        if self.mode == ProjectionMode::Orthographic {
            self.camera.set_pose(DEFAULT_POSITION, DEFAULT_FRONT, DEFAULT_UP);
        }

        let view = self.camera.view_matrix();
        let projection = match self.mode {
            ProjectionMode::Perspective => self.perspective_projection(),
            ProjectionMode::Orthographic => self.orthographic_projection(),
        };

        if let Some(sink) = self.sink.as_mut() {
            sink.set_mat4(VIEW_UNIFORM, view);
            sink.set_mat4(PROJECTION_UNIFORM, projection);
            sink.set_vec3(VIEW_POSITION_UNIFORM, self.camera.position);
        }

        FrameView {
            view,
            projection,
            camera_position: self.camera.position,
            close_requested,
        }
    }

    fn set_mode(&mut self, mode: ProjectionMode) {
        if self.mode != mode {
            log::info!("projection mode: {:?}", mode);
            self.mode = mode;
        }
    }

    fn perspective_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.camera.zoom.to_radians(),
            self.viewport.aspect_ratio(),
            NEAR_PLANE,
            FAR_PLANE,
        )
    }

    // Sized from the zoom angle at a fixed reference distance so the
    // overview covers about the same volume the perspective frustum would.
    fn orthographic_projection(&self) -> Mat4 {
        let half_height = ORTHO_VIEW_DISTANCE * (self.camera.zoom.to_radians() / 2.0).tan();
        let half_width = half_height * self.viewport.aspect_ratio();
        Mat4::orthographic_rh(
            -half_width,
            half_width,
            -half_height,
            half_height,
            NEAR_PLANE,
            FAR_PLANE,
        )
    }
}
