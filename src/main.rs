use std::{sync::Arc, time::Instant};

use glam::Vec2;
use log::{error, info, warn};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod config;
mod constants;
mod grid;
mod patterns;
mod renderer;
mod simulation;
mod utils;

use config::{GridConfig, TimingConfig};
use constants::{
    CONTROLS_HINT, TITLE_UPDATE_INTERVAL_SECS, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use grid::GridState;
use renderer::Renderer;
use simulation::{FrameInput, SimulationController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(format!("{WINDOW_TITLE} ({CONTROLS_HINT})"))
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .build(&event_loop)?,
    );

    let grid_config = GridConfig::default();
    let mut renderer = pollster::block_on(Renderer::new(window.clone(), &grid_config));

    let mut grid = GridState::from_config(&grid_config);
    for pattern in patterns::STARTUP_PATTERNS {
        grid.stamp(pattern.cells);
    }
    info!(
        "Seeded {}x{} board with {} fixtures, {} cells alive",
        grid.width(),
        grid.height(),
        patterns::STARTUP_PATTERNS.len(),
        grid.live_count()
    );

    let mut controller = SimulationController::new(TimingConfig::default());

    let started = Instant::now();
    let mut pointer: Option<Vec2> = None;
    let mut left_down = false;
    let mut right_down = false;
    // One-shot key commands accumulate here until the next redraw consumes
    // them.
    let mut pending = FrameInput::default();
    let mut last_title_update = Instant::now();

    event_loop.run(move |event, elwt: &EventLoopWindowTarget<()>| {
        elwt.set_control_flow(ControlFlow::Poll);
        match event {
            Event::AboutToWait => window.request_redraw(),
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(physical_size) => renderer.resize(physical_size),
                WindowEvent::ScaleFactorChanged { .. } => renderer.resize(window.inner_size()),
                WindowEvent::CursorMoved { position, .. } => {
                    pointer = Some(Vec2::new(position.x as f32, position.y as f32));
                }
                WindowEvent::CursorLeft { .. } => pointer = None,
                WindowEvent::MouseInput { state, button, .. } => match button {
                    MouseButton::Left => left_down = state == ElementState::Pressed,
                    MouseButton::Right => right_down = state == ElementState::Pressed,
                    _ => {}
                },
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if key_event.state == ElementState::Pressed && !key_event.repeat {
                        match key_event.physical_key {
                            PhysicalKey::Code(KeyCode::KeyS) => pending.toggle_running = true,
                            PhysicalKey::Code(KeyCode::KeyZ) => pending.slow_down = true,
                            PhysicalKey::Code(KeyCode::KeyX) => pending.speed_up = true,
                            PhysicalKey::Code(KeyCode::KeyC) => pending.clear_board = true,
                            PhysicalKey::Code(KeyCode::KeyR) => pending.reseed_board = true,
                            PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                            _ => {}
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    let now = started.elapsed().as_secs_f64();
                    let input = FrameInput {
                        pointer,
                        paint_alive: left_down,
                        paint_dead: right_down,
                        ..pending
                    };
                    pending = FrameInput::default();

                    controller.advance_frame(&mut grid, &grid_config, &input, now);
                    grid.classify_and_collapse();

                    let cursor_cell =
                        pointer.and_then(|p| utils::cell_under_pointer(p, &grid_config));
                    match renderer.render(&grid, &grid_config, cursor_cell) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => renderer.resize(renderer.size),
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("wgpu surface out of memory");
                            elwt.exit();
                        }
                        Err(e) => warn!("wgpu surface error: {e:?}"),
                    }

                    if last_title_update.elapsed().as_secs_f64() >= TITLE_UPDATE_INTERVAL_SECS {
                        last_title_update = Instant::now();
                        let paused_text = if controller.is_running() {
                            ""
                        } else {
                            " [PAUSED]"
                        };
                        window.set_title(&format!(
                            "{} - gen {} - {} alive - {:.2}s/step{} ({})",
                            WINDOW_TITLE,
                            controller.generation(),
                            grid.live_count(),
                            controller.interval_secs(),
                            paused_text,
                            CONTROLS_HINT,
                        ));
                    }
                }
                _ => {}
            },
            _ => {}
        }
    })?;
    Ok(())
}
