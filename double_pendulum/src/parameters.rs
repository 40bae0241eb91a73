use crate::PendulumErrors;

pub const DEFAULT_MASS: f64 = 10.0;
pub const DEFAULT_LENGTH: f64 = 1.2;
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Physical constants of the pendulum. Both rods share the same mass and length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumParameters {
    mass: f64,
    length: f64,
    gravity: f64,
}

impl PendulumParameters {
    pub fn new(mass: f64, length: f64, gravity: f64) -> Result<Self, PendulumErrors> {
        for (name, value) in [("mass", mass), ("length", length), ("gravity", gravity)] {
            if !value.is_finite() {
                return Err(PendulumErrors::NonFinite(name, value));
            }
        }
        if mass <= 0.0 {
            return Err(PendulumErrors::MassLessThanOrEqualToZero(mass));
        }
        if length <= 0.0 {
            return Err(PendulumErrors::LengthLessThanOrEqualToZero(length));
        }
        Ok(Self {
            mass,
            length,
            gravity,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            length: DEFAULT_LENGTH,
            gravity: DEFAULT_GRAVITY,
        }
    }
}
