use std::sync::Arc;

use anyhow::{Context, Result};
use cafe_scene::{Config, State};
use clap::Parser;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowBuilder},
};

// Pixels of trackpad scroll per wheel line.
const PIXELS_PER_LINE: f32 = 20.0;

fn capture_cursor(window: &Window, captured: bool) {
    let grab = if captured {
        window
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
    } else {
        window.set_cursor_grab(CursorGrabMode::None)
    };
    if let Err(e) = grab {
        log::warn!("Cursor grab failed: {}", e);
    }
    window.set_cursor_visible(!captured);
}

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    log::debug!("{:?}", config);

    let event_loop = EventLoop::new().context("Failed to create event loop")?;

    let window = WindowBuilder::new()
        .with_title("Cafe")
        .with_inner_size(winit::dpi::PhysicalSize::new(config.width, config.height))
        .build(&event_loop)
        .context("Failed to create window")?;

    let mut state = State::new(Arc::new(window), &config)?;
    let mut mouse_captured = false;

    event_loop.run(move |event, window_target| match event {
        Event::WindowEvent { window_id, event } if window_id == state.window().id() => match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                match key_code {
                    KeyCode::Escape if pressed => {
                        if mouse_captured {
                            mouse_captured = false;
                            capture_cursor(state.window(), false);
                        } else {
                            window_target.exit();
                        }
                    }
                    _ => state.scene.process_keyboard(key_code, pressed),
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } if !mouse_captured => {
                mouse_captured = true;
                capture_cursor(state.window(), true);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
                };
                state.scene.process_scroll(lines);
            }
            WindowEvent::Focused(false) => {
                state.scene.release_keys();
                if mouse_captured {
                    mouse_captured = false;
                    capture_cursor(state.window(), false);
                }
            }
            WindowEvent::CloseRequested => {
                window_target.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::RedrawRequested => match state.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::debug!("Surface lost, reconfiguring");
                    state.resize(state.size());
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of GPU memory, exiting");
                    window_target.exit();
                }
                Err(e) => log::warn!("Skipping frame: {}", e),
            },
            _ => {}
        },
        Event::DeviceEvent {
            event: DeviceEvent::MouseMotion { delta },
            ..
        } if mouse_captured => {
            // Screen y grows downwards.
            state.scene.process_mouse(delta.0 as f32, -delta.1 as f32);
        }
        Event::AboutToWait => {
            state.update();
            state.window().request_redraw();
        }
        _ => {}
    })?;

    Ok(())
}
