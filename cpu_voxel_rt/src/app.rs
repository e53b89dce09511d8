use crate::error::AppError;
use crate::voxel_tracer::VoxelTracer;

use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Fullscreen, Window, WindowId};
use voxel_common::camera::Camera;
use voxel_common::camera_controller::CameraController;
use voxel_common::frames_per_second::FramesPerSecond;
use voxel_common::parameters::RenderParameters;
use voxel_common::volume::VoxelVolume;

pub struct App {
    window: Option<Arc<Window>>,
    voxel_tracer: Option<VoxelTracer>,
    volume: VoxelVolume,
    camera: Camera,
    camera_controller: CameraController,
    render_parameters: RenderParameters,
    last_render_time: Instant,
    frames_per_second: FramesPerSecond,
    error: Option<AppError>,
}

impl App {
    pub fn new(volume: VoxelVolume, render_parameters: RenderParameters) -> Self {
        let (width, height) = render_parameters.viewport_size();
        let mut camera = Camera::new(width, height);
        camera.set_position(render_parameters.start_position());
        Self {
            window: None,
            voxel_tracer: None,
            volume,
            camera,
            camera_controller: *render_parameters.camera_controller(),
            render_parameters,
            last_render_time: Instant::now(),
            frames_per_second: FramesPerSecond::new(),
            error: None,
        }
    }

    // the first error stops the loop and is handed back to main
    pub fn into_result(self) -> Result<(), AppError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        log::error!("{}", err);
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>, AppError> {
        let size = self.render_parameters.viewport_size();
        let mut win_attr = Window::default_attributes()
            .with_inner_size(winit::dpi::PhysicalSize::new(size.0, size.1))
            .with_title("Voxel Ray Tracing");
        if self.render_parameters.fullscreen() {
            win_attr = win_attr.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        let window = Arc::new(event_loop.create_window(win_attr)?);

        // relative mouse motion still arrives through device events when the
        // platform refuses to lock the cursor
        if let Err(err) = window.set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined)) {
            log::warn!("could not grab cursor: {}", err);
        }
        window.set_cursor_visible(false);
        Ok(window)
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        match key {
            KeyCode::KeyW => self.camera_controller.move_forward(pressed),
            KeyCode::KeyS => self.camera_controller.move_backward(pressed),
            KeyCode::KeyA => self.camera_controller.move_left(pressed),
            KeyCode::KeyD => self.camera_controller.move_right(pressed),
            KeyCode::KeyQ => self.camera_controller.move_down(pressed),
            KeyCode::KeyE => self.camera_controller.move_up(pressed),
            _ => {}
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = now - self.last_render_time;
        self.last_render_time = now;
        self.frames_per_second.update(dt);
        if self.frames_per_second.window_complete() {
            log::debug!("avg fps: {:.1}", self.frames_per_second.get_avg_fps());
        }

        self.camera_controller.update_camera(&mut self.camera, &self.volume);

        let Some(voxel_tracer) = self.voxel_tracer.as_mut() else { return; };
        if let Err(err) = voxel_tracer.run(&self.camera, &self.volume) {
            self.fail(event_loop, err.into());
        }
    }

    fn resize(&mut self, size: (u32, u32)) {
        self.render_parameters.set_viewport(size);
        if !self.render_parameters.resized() {
            return;
        }
        log::info!("resized to {}x{}", size.0, size.1);
        self.camera.set_port_vectors(size.0, size.1);
        if let Some(voxel_tracer) = self.voxel_tracer.as_mut() {
            voxel_tracer.resize(self.render_parameters);
        }
        self.render_parameters.reset();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(err) => return self.fail(event_loop, err),
        };
        self.window = Some(Arc::clone(&window));

        // a fullscreen window may come up at a size other than requested
        let inner = window.inner_size();
        self.resize((inner.width, inner.height));

        let max_viewport_resolution = window
            .available_monitors()
            .map(|monitor| {
                let viewport = monitor.size();
                viewport.width * viewport.height
            })
            .max()
            .unwrap_or(0);

        match VoxelTracer::new(window, max_viewport_resolution, &self.render_parameters) {
            Ok(voxel_tracer) => self.voxel_tracer = Some(voxel_tracer),
            Err(err) => self.fail(event_loop, err.into()),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop,
                    window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else { return; };
        if window.id() != window_id { return; }

        match event {
            WindowEvent::CloseRequested | WindowEvent::KeyboardInput {
                event: KeyEvent {
                    state: ElementState::Pressed,
                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                    ..
                },
                ..
            } => {
                event_loop.exit();
                return;
            }

            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    state,
                    physical_key: PhysicalKey::Code(key),
                    ..
                },
                ..
            } => self.handle_key(key, state),

            WindowEvent::Resized(new_size) => {
                self.resize((new_size.width, new_size.height));
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
        window.request_redraw();
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop,
                    _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.camera_controller.process_mouse([dx as f32, dy as f32]);
        }
    }
}
