//! Closed-form kinematics under constant acceleration.
//!
//! These are the exact solutions the stepwise integrators in
//! [`crate::integrator`] are compared against.

/// Standard gravitational acceleration in m/s².
pub const GRAVITY: f64 = 9.81;

/// Displacement after `t` seconds of constant acceleration `g`, starting at
/// rest from the origin: `x = (g * t²) / 2`.
///
/// No domain check is performed; negative `t` is evaluated as-is.
///
/// ```
/// # use diverge::kinematics::{displacement, GRAVITY};
/// assert!((displacement(GRAVITY, 10.0) - 490.5).abs() < 1e-9);
/// ```
pub fn displacement(g: f64, t: f64) -> f64 {
    (g * t * t) / 2.0
}

/// Motion with constant acceleration and an arbitrary initial state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub acceleration: f64,
    pub initial_velocity: f64,
    pub initial_position: f64,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self::at_rest(GRAVITY)
    }
}

impl Kinematics {
    /// Body starting at rest from the origin.
    pub fn at_rest(acceleration: f64) -> Self {
        Self {
            acceleration,
            initial_velocity: 0.0,
            initial_position: 0.0,
        }
    }

    /// `a/2 * t² + v0 * t + p0`
    pub fn displacement(&self, t: f64) -> f64 {
        displacement(self.acceleration, t) + self.initial_velocity * t + self.initial_position
    }

    /// `a * t + v0`
    pub fn velocity(&self, t: f64) -> f64 {
        self.acceleration * t + self.initial_velocity
    }
}
