use glam::{Mat4, Quat, Vec3};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;
pub const DEFAULT_ORBIT_STEP: f32 = 0.5;
pub const DEFAULT_ORBIT_RADIUS: f32 = 5.0;

pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Discrete camera inputs. The first six translate the camera; the rest turn
/// it by a fixed angle per tick around its look target or its own axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
}

impl CameraMovement {
    pub const ALL: [CameraMovement; 12] = [
        CameraMovement::Forward,
        CameraMovement::Backward,
        CameraMovement::Left,
        CameraMovement::Right,
        CameraMovement::Up,
        CameraMovement::Down,
        CameraMovement::YawLeft,
        CameraMovement::YawRight,
        CameraMovement::PitchUp,
        CameraMovement::PitchDown,
        CameraMovement::RollLeft,
        CameraMovement::RollRight,
    ];

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    pub world_up: Vec3,
    yaw: f32,   // degrees, rotation around world up, kept in [-180, 180)
    pitch: f32, // degrees, clamped to +-PITCH_LIMIT
    roll: f32,  // degrees, rotation around front
    zoom: f32,  // vertical field of view in degrees
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub orbit_step: f32,
    pub orbit_radius: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    held: u16,
}

impl Camera {
    pub fn new(position: Vec3, aspect: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            roll: 0.0,
            zoom: DEFAULT_ZOOM,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            orbit_step: DEFAULT_ORBIT_STEP,
            orbit_radius: DEFAULT_ORBIT_RADIUS,
            aspect,
            near: 0.1,
            far: 100.0,
            held: 0,
        };
        camera.update_vectors();
        camera
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

    pub fn roll(&self) -> f32 {
        self.roll
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Point the camera orbits around: `orbit_radius` ahead along `front`.
    pub fn target(&self) -> Vec3 {
        self.position + self.front * self.orbit_radius
    }

    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = wrap_degrees(yaw);
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Mouse look. Positive `dy` looks up.
    pub fn process_mouse(&mut self, dx: f32, dy: f32) {
        self.yaw = wrap_degrees(self.yaw + dx * self.mouse_sensitivity);
        self.pitch = (self.pitch + dy * self.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    pub fn process_scroll(&mut self, delta: f32) {
        self.zoom = (self.zoom - delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn process_movement(&mut self, movement: CameraMovement, dt: f32) {
        let velocity = self.movement_speed * dt;
        match movement {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
            CameraMovement::YawLeft => self.orbit(-self.orbit_step, 0.0),
            CameraMovement::YawRight => self.orbit(self.orbit_step, 0.0),
            CameraMovement::PitchUp => self.orbit(0.0, self.orbit_step),
            CameraMovement::PitchDown => self.orbit(0.0, -self.orbit_step),
            CameraMovement::RollLeft => self.add_roll(-self.orbit_step),
            CameraMovement::RollRight => self.add_roll(self.orbit_step),
        }
    }

    pub fn set_movement(&mut self, movement: CameraMovement, held: bool) {
        if held {
            self.held |= movement.bit();
        } else {
            self.held &= !movement.bit();
        }
    }

    pub fn is_held(&self, movement: CameraMovement) -> bool {
        self.held & movement.bit() != 0
    }

    pub fn release_all(&mut self) {
        self.held = 0;
    }

    /// Applies every held movement once.
    pub fn update(&mut self, dt: f32) {
        for movement in CameraMovement::ALL {
            if self.is_held(movement) {
                self.process_movement(movement, dt);
            }
        }
    }

    /// Turns the camera about its look target, which stays put.
    fn orbit(&mut self, yaw_delta: f32, pitch_delta: f32) {
        let target = self.target();
        self.yaw = wrap_degrees(self.yaw + yaw_delta);
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
        self.position = target - self.front * self.orbit_radius;
    }

    fn add_roll(&mut self, delta: f32) {
        self.roll = wrap_degrees(self.roll + delta);
        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();

        let level_right = self.front.cross(self.world_up).normalize();
        let roll = Quat::from_axis_angle(self.front, self.roll.to_radians());
        self.right = (roll * level_right).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

/// Maps an angle in degrees into [-180, 180) so that long runs of small
/// steps stay within f32 precision.
fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}
