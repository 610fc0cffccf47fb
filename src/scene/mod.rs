pub mod camera;
pub mod fan;
pub mod script;
pub mod transform;
#[cfg(test)]
mod tests;

pub use camera::{Camera, CameraMovement};
pub use fan::Fan;
pub use script::{DrawCall, MeshKind};
pub use transform::{compose, Pose};

use std::collections::HashSet;
use std::time::Instant;

use glam::Vec3;
use winit::keyboard::KeyCode;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Move(CameraMovement),
    ToggleFan,
    ToggleOrbit,
}

pub fn key_binding(key: KeyCode) -> Option<Binding> {
    let binding = match key {
        KeyCode::KeyW => Binding::Move(CameraMovement::Forward),
        KeyCode::KeyS => Binding::Move(CameraMovement::Backward),
        KeyCode::KeyA => Binding::Move(CameraMovement::Left),
        KeyCode::KeyD => Binding::Move(CameraMovement::Right),
        KeyCode::KeyE => Binding::Move(CameraMovement::Up),
        KeyCode::KeyR => Binding::Move(CameraMovement::Down),
        KeyCode::KeyX => Binding::Move(CameraMovement::PitchUp),
        KeyCode::KeyC => Binding::Move(CameraMovement::PitchDown),
        KeyCode::KeyY => Binding::Move(CameraMovement::YawLeft),
        KeyCode::KeyV => Binding::Move(CameraMovement::YawRight),
        KeyCode::KeyZ => Binding::Move(CameraMovement::RollLeft),
        KeyCode::KeyQ => Binding::Move(CameraMovement::RollRight),
        KeyCode::KeyG => Binding::ToggleFan,
        KeyCode::KeyF => Binding::ToggleOrbit,
        _ => return None,
    };
    Some(binding)
}

/// Everything that changes while the program runs.
pub struct Scene {
    pub camera: Camera,
    pub fan: Fan,
    orbiting: bool,
    toggles_down: HashSet<KeyCode>,
    last_update: Instant,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            fan: Fan::default(),
            orbiting: false,
            toggles_down: HashSet::new(),
            last_update: Instant::now(),
        }
    }

    pub fn from_config(config: &Config, aspect: f32) -> Self {
        let [x, y, z] = config.camera_position;
        let mut camera = Camera::new(Vec3::new(x, y, z), aspect);
        camera.set_orientation(config.yaw, config.pitch);
        camera.movement_speed = config.speed;
        camera.mouse_sensitivity = config.sensitivity;
        camera.orbit_step = config.orbit_step;
        camera.orbit_radius = config.orbit_radius;

        let mut scene = Self::new(camera);
        scene.fan = Fan::new(config.fan_step);
        scene.fan.enabled = config.fan;
        scene.orbiting = config.orbit;
        scene
    }

    pub fn is_orbiting(&self) -> bool {
        self.orbiting
    }

    pub fn toggle_orbit(&mut self) -> bool {
        self.orbiting = !self.orbiting;
        log::debug!("Orbit {}", if self.orbiting { "on" } else { "off" });
        self.orbiting
    }

    pub fn toggle_fan(&mut self) -> bool {
        let enabled = self.fan.toggle();
        log::debug!("Fan {} at {:.1} degrees", if enabled { "on" } else { "off" }, self.fan.angle());
        enabled
    }

    /// Wall-clock frame step.
    pub fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;

        self.advance(dt);
    }

    pub fn advance(&mut self, dt: f32) {
        self.camera.update(dt);
        if self.orbiting {
            self.camera.process_movement(CameraMovement::YawLeft, dt);
        }
        self.fan.tick();
    }

    /// Toggles fire once per press; held keys never repeat them.
    pub fn process_keyboard(&mut self, key: KeyCode, pressed: bool) {
        match key_binding(key) {
            Some(Binding::Move(movement)) => self.camera.set_movement(movement, pressed),
            Some(toggle) => {
                if !pressed {
                    self.toggles_down.remove(&key);
                } else if self.toggles_down.insert(key) {
                    match toggle {
                        Binding::ToggleFan => {
                            self.toggle_fan();
                        }
                        Binding::ToggleOrbit => {
                            self.toggle_orbit();
                        }
                        Binding::Move(_) => {}
                    }
                }
            }
            None => {}
        }
    }

    pub fn process_mouse(&mut self, dx: f32, dy: f32) {
        self.camera.process_mouse(dx, dy);
    }

    pub fn process_scroll(&mut self, delta: f32) {
        self.camera.process_scroll(delta);
    }

    /// Drops held movement, e.g. when the window loses focus.
    pub fn release_keys(&mut self) {
        self.camera.release_all();
        self.toggles_down.clear();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    pub fn draw_list(&self) -> Vec<DrawCall> {
        script::draw_list(self.fan.angle())
    }
}
