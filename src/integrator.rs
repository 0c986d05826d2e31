//! Fixed-step Euler integrators for constant acceleration.
//!
//! Each integrator is an infinite [`Iterator`] over positions: every call to
//! `next()` advances the internal state by one step of `dt` and yields the new
//! position. The iterators never return `None`.
//!
//! The two schemes differ only in update order:
//!
//! ```text
//! symplectic:  v += a * dt;  p += v * dt   (new velocity moves the body)
//! explicit:    p += v * dt;  v += a * dt   (old velocity moves the body)
//! ```

/// Semi-implicit (symplectic) Euler, also known as Euler-Cromer.
///
/// ```
/// # use diverge::integrator::SymplecticEuler;
/// let mut steps = SymplecticEuler::new(10.0, 9.81);
/// assert!((steps.next().unwrap() - 981.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SymplecticEuler {
    velocity: f64,
    position: f64,
    dt: f64,
    acceleration: f64,
    steps: u64,
}

impl SymplecticEuler {
    /// Start at rest from the origin.
    pub fn new(dt: f64, acceleration: f64) -> Self {
        Self {
            velocity: 0.0,
            position: 0.0,
            dt,
            acceleration,
            steps: 0,
        }
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Iterator for SymplecticEuler {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.velocity += self.acceleration * self.dt;
        self.position += self.velocity * self.dt;
        self.steps += 1;
        Some(self.position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Explicit (forward) Euler.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitEuler {
    velocity: f64,
    position: f64,
    dt: f64,
    acceleration: f64,
    steps: u64,
}

impl ExplicitEuler {
    /// Start at rest from the origin.
    pub fn new(dt: f64, acceleration: f64) -> Self {
        Self {
            velocity: 0.0,
            position: 0.0,
            dt,
            acceleration,
            steps: 0,
        }
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Iterator for ExplicitEuler {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.position += self.velocity * self.dt;
        self.velocity += self.acceleration * self.dt;
        self.steps += 1;
        Some(self.position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Selects which stepwise scheme the sampling driver runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntegrationScheme {
    #[default]
    SymplecticEuler,
    ExplicitEuler,
}

impl IntegrationScheme {
    /// Legend label for the stepwise curve.
    pub fn label(&self) -> &'static str {
        match self {
            IntegrationScheme::SymplecticEuler => "Euler Integration",
            IntegrationScheme::ExplicitEuler => "Explicit Euler Integration",
        }
    }

    /// Build a fresh integrator for this scheme, at rest from the origin.
    pub fn integrator(&self, dt: f64, acceleration: f64) -> Stepper {
        match self {
            IntegrationScheme::SymplecticEuler => {
                Stepper::Symplectic(SymplecticEuler::new(dt, acceleration))
            }
            IntegrationScheme::ExplicitEuler => {
                Stepper::Explicit(ExplicitEuler::new(dt, acceleration))
            }
        }
    }
}

/// Either integrator behind one iterator type.
#[derive(Debug, Clone, PartialEq)]
pub enum Stepper {
    Symplectic(SymplecticEuler),
    Explicit(ExplicitEuler),
}

impl Stepper {
    pub fn scheme(&self) -> IntegrationScheme {
        match self {
            Stepper::Symplectic(_) => IntegrationScheme::SymplecticEuler,
            Stepper::Explicit(_) => IntegrationScheme::ExplicitEuler,
        }
    }

    pub fn velocity(&self) -> f64 {
        match self {
            Stepper::Symplectic(s) => s.velocity(),
            Stepper::Explicit(s) => s.velocity(),
        }
    }

    pub fn position(&self) -> f64 {
        match self {
            Stepper::Symplectic(s) => s.position(),
            Stepper::Explicit(s) => s.position(),
        }
    }

    pub fn steps(&self) -> u64 {
        match self {
            Stepper::Symplectic(s) => s.steps(),
            Stepper::Explicit(s) => s.steps(),
        }
    }
}

impl Iterator for Stepper {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match self {
            Stepper::Symplectic(s) => s.next(),
            Stepper::Explicit(s) => s.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
