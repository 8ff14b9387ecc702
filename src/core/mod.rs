pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod shader_sink;
pub mod view;
pub mod window;
