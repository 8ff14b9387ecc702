use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use scene_viewport::cli::Cli;
use scene_viewport::core::input_adapter::WinitController;
use scene_viewport::core::shader_sink::UniformStage;
use scene_viewport::core::view::ViewController;
use scene_viewport::core::window::WindowDimensions;
use scene_viewport::renderer::Renderer;

struct App {
    dimensions: WindowDimensions,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    view: ViewController<UniformStage>,
    input: WinitController,
}

impl App {
    fn new(dimensions: WindowDimensions) -> Self {
        Self {
            dimensions,
            window: None,
            renderer: None,
            view: ViewController::new(dimensions, Some(UniformStage::new())),
            input: WinitController::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Scene Viewport")
                    .with_resizable(false)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.dimensions.width,
                        self.dimensions.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(Renderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                self.view.on_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let y_offset = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                self.view.on_scroll(y_offset);
            }
            WindowEvent::RedrawRequested => {
                let frame = self.view.prepare_frame(&self.input);
                if frame.close_requested {
                    event_loop.exit();
                    return;
                }

                if let (Some(renderer), Some(stage)) = (&mut self.renderer, self.view.sink()) {
                    if let Err(e) = renderer.render(stage.uniform()) {
                        log::error!("render error: {}", e);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(WindowDimensions::new(cli.width, cli.height));

    log::info!("controls: WASD + QE to move, mouse to look, scroll for speed, O/P for projection, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
