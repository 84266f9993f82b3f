//! Windowed driver: winit event loop plus the wgpu renderer.
//!
//! The driver owns no simulation logic. It forwards the surface size and
//! pointer to the [`Scene`], steps it once per redraw and hands the discs to
//! the [`Renderer`]. Redraws are chained, so the scene advances once per
//! display refresh.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::error::RunError;
use crate::gpu::Renderer;
use crate::scene::Scene;
use crate::viewport::Viewport;

struct App {
    scene: Scene,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    error: Option<RunError>,
}

impl App {
    fn new(scene: Scene) -> Self {
        Self {
            scene,
            window: None,
            renderer: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RunError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.scene.config().style.window_title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            &self.scene.config().style,
        ))?;

        self.scene.set_scale_factor(window.scale_factor());
        self.scene.resize(Viewport::from(window.inner_size()));

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        let discs = self.scene.frame();
        match renderer.render(discs) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {e:?}"),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.scene.pointer_mut().handle_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
                self.scene.resize(Viewport::from(physical_size));
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                // A Resized event with the new physical size follows
                self.scene.set_scale_factor(scale_factor);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

/// Open a window and animate `scene` until it is closed.
pub fn run(scene: Scene) -> Result<(), RunError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(scene);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
