pub const DEFAULT_FAN_STEP: f32 = 5.0;

/// Ceiling fan spin. The angle survives toggling off and on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fan {
    pub enabled: bool,
    angle: f32,
    pub step: f32, // degrees per frame
}

impl Default for Fan {
    fn default() -> Self {
        Self::new(DEFAULT_FAN_STEP)
    }
}

impl Fan {
    pub fn new(step: f32) -> Self {
        Self {
            enabled: false,
            angle: 0.0,
            step,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn tick(&mut self) {
        if self.enabled {
            self.angle = (self.angle + self.step).rem_euclid(360.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fan_starts_still() {
        let mut fan = Fan::default();
        fan.tick();
        assert!(!fan.enabled);
        assert_eq!(fan.angle(), 0.0);
    }

    #[test]
    fn test_toggle_resumes_angle() {
        let mut fan = Fan::default();
        assert!(fan.toggle());
        for _ in 0..3 {
            fan.tick();
        }
        assert_relative_eq!(fan.angle(), 15.0);

        assert!(!fan.toggle());
        fan.tick();
        assert_relative_eq!(fan.angle(), 15.0);

        fan.toggle();
        fan.tick();
        assert_relative_eq!(fan.angle(), 20.0);
    }

    #[test]
    fn test_angle_wraps() {
        let mut fan = Fan::new(100.0);
        fan.toggle();
        for _ in 0..4 {
            fan.tick();
        }
        assert_relative_eq!(fan.angle(), 40.0);
    }
}
