pub mod camera;
pub mod cli;
pub mod core;
pub mod renderer;
pub mod scene;
pub mod types;

pub use camera::{Camera, CameraMovement};
pub use self::core::controller::{Button, Controller};
pub use self::core::shader_sink::{ShaderSink, UniformStage};
pub use self::core::view::{FrameView, ProjectionMode, ViewController};
pub use self::core::window::WindowDimensions;
