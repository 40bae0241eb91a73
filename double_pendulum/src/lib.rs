//! Equations of motion of a double pendulum made of two identical uniform rods.
//!
//! The state is `[p1, p2, theta1, theta2]`: the generalized momenta conjugate to each
//! rod angle, followed by the angles themselves measured from the downward vertical.

use pendulum_diffeq::{OdeModel, StateArray, StateComponent};
use thiserror::Error;

pub mod parameters;

pub use parameters::PendulumParameters;

pub type PendulumState = StateArray<4>;

#[derive(Debug, Error, PartialEq)]
pub enum PendulumErrors {
    #[error("{0} must be finite, got {1}")]
    NonFinite(&'static str, f64),
    #[error("mass must be greater than zero, got {0}")]
    MassLessThanOrEqualToZero(f64),
    #[error("length must be greater than zero, got {0}")]
    LengthLessThanOrEqualToZero(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    P1,
    P2,
    Theta1,
    Theta2,
}

impl StateComponent<4> for Component {
    const ALL: [Self; 4] = [
        Component::P1,
        Component::P2,
        Component::Theta1,
        Component::Theta2,
    ];

    fn index(self) -> usize {
        match self {
            Component::P1 => 0,
            Component::P2 => 1,
            Component::Theta1 => 2,
            Component::Theta2 => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DoublePendulum {
    parameters: PendulumParameters,
}

impl DoublePendulum {
    pub fn new(parameters: PendulumParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &PendulumParameters {
        &self.parameters
    }

    pub fn d_p1(&self, x: &PendulumState) -> f64 {
        let (m, l, g) = self.mlg();
        let (theta1, theta2) = (x[2], x[3]);
        -0.5 * m * l
            * (self.d_theta1(x) * self.d_theta2(x) * (theta1 - theta2).sin()
                + 3.0 * (g / l) * theta1.sin())
    }

    pub fn d_p2(&self, x: &PendulumState) -> f64 {
        let (m, l, g) = self.mlg();
        let (theta1, theta2) = (x[2], x[3]);
        -0.5 * m * l
            * (-self.d_theta1(x) * self.d_theta2(x) * (theta1 - theta2).sin()
                + (g / l) * theta2.sin())
    }

    pub fn d_theta1(&self, x: &PendulumState) -> f64 {
        let (m, l, _) = self.mlg();
        let (p1, p2, theta1, theta2) = (x[0], x[1], x[2], x[3]);
        let c = (theta1 - theta2).cos();
        6.0 / (m * l * l) * ((2.0 * p1 - 3.0 * p2 * c) / (16.0 - 9.0 * c * c))
    }

    pub fn d_theta2(&self, x: &PendulumState) -> f64 {
        let (m, l, _) = self.mlg();
        let (p1, p2, theta1, theta2) = (x[0], x[1], x[2], x[3]);
        let c = (theta1 - theta2).cos();
        6.0 / (m * l * l) * ((8.0 * p2 - 3.0 * p1 * c) / (16.0 - 9.0 * c * c))
    }

    /// Total mechanical energy: kinetic `0.5*(p1*dtheta1 + p2*dtheta2)` plus the potential
    /// of both rod centres, `-0.5*m*g*l*(3*cos(theta1) + cos(theta2))`.
    pub fn energy(&self, x: &PendulumState) -> f64 {
        let (m, l, g) = self.mlg();
        let (p1, p2, theta1, theta2) = (x[0], x[1], x[2], x[3]);
        let kinetic = 0.5 * (p1 * self.d_theta1(x) + p2 * self.d_theta2(x));
        let potential = -0.5 * m * g * l * (3.0 * theta1.cos() + theta2.cos());
        kinetic + potential
    }

    fn mlg(&self) -> (f64, f64, f64) {
        (
            self.parameters.mass(),
            self.parameters.length(),
            self.parameters.gravity(),
        )
    }
}

impl OdeModel<4> for DoublePendulum {
    type Component = Component;

    fn derivative(&self, component: Component, state: &PendulumState) -> f64 {
        match component {
            Component::P1 => self.d_p1(state),
            Component::P2 => self.d_p2(state),
            Component::Theta1 => self.d_theta1(state),
            Component::Theta2 => self.d_theta2(state),
        }
    }
}
