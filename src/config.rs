use clap::{Parser, ValueEnum};

use crate::scene::{camera, fan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresentModeArg {
    AutoVsync,
    AutoNoVsync,
    Fifo,
    Immediate,
    Mailbox,
}

impl From<PresentModeArg> for wgpu::PresentMode {
    fn from(mode: PresentModeArg) -> Self {
        match mode {
            PresentModeArg::AutoVsync => wgpu::PresentMode::AutoVsync,
            PresentModeArg::AutoNoVsync => wgpu::PresentMode::AutoNoVsync,
            PresentModeArg::Fifo => wgpu::PresentMode::Fifo,
            PresentModeArg::Immediate => wgpu::PresentMode::Immediate,
            PresentModeArg::Mailbox => wgpu::PresentMode::Mailbox,
        }
    }
}

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about = "Walk around a furnished cafe interior", long_about = None)]
pub struct Config {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Camera start position as x,y,z
    #[arg(long = "eye", default_value = "0,2.5,3", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub camera_position: [f32; 3],

    /// Initial heading in degrees; -90 looks down -Z
    #[arg(long, default_value_t = camera::DEFAULT_YAW, allow_negative_numbers = true)]
    pub yaw: f32,

    /// Initial pitch in degrees, clamped to +-89
    #[arg(long, default_value_t = camera::DEFAULT_PITCH, allow_negative_numbers = true)]
    pub pitch: f32,

    /// Camera movement speed in units per second
    #[arg(long, default_value_t = camera::DEFAULT_SPEED)]
    pub speed: f32,

    /// Degrees of turn per pixel of mouse motion
    #[arg(long, default_value_t = camera::DEFAULT_SENSITIVITY)]
    pub sensitivity: f32,

    /// Fan rotation per frame in degrees
    #[arg(long, default_value_t = fan::DEFAULT_FAN_STEP)]
    pub fan_step: f32,

    /// Orbit, tilt and roll step per frame in degrees
    #[arg(long, default_value_t = camera::DEFAULT_ORBIT_STEP)]
    pub orbit_step: f32,

    /// Distance from the camera to the point it orbits
    #[arg(long, default_value_t = camera::DEFAULT_ORBIT_RADIUS)]
    pub orbit_radius: f32,

    /// Start with the fan spinning
    #[arg(long)]
    pub fan: bool,

    /// Start with the camera orbiting
    #[arg(long)]
    pub orbit: bool,

    /// Surface present mode
    #[arg(long, value_enum, default_value_t = PresentModeArg::AutoVsync)]
    pub present_mode: PresentModeArg,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from([env!("CARGO_PKG_NAME")])
    }
}

fn parse_vec3(s: &str) -> Result<[f32; 3], String> {
    let parts = s
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|e| format!("'{}': {}", part.trim(), e)))
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [x, y, z] if [x, y, z].iter().all(|c| c.is_finite()) => Ok([*x, *y, *z]),
        [_, _, _] => Err("coordinates must be finite".to_string()),
        _ => Err(format!("expected x,y,z but got {} values", parts.len())),
    }
}
