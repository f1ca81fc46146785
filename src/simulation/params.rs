//! Numerical and physical parameters for the global simulation
//!
//! `GlobalParams` holds the runtime settings:
//! - gravitational constant `g`,
//! - fixed integration step `delta_time`,
//! - tick budget `max_steps`

/// Gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.674e-11;

/// Fixed time step, one hour in seconds
pub const DELTA_TIME: f64 = 3600.0;

/// Tick budget: hourly steps over one simulated year
pub const MAX_STEPS: u32 = 365 * 24;

/// Mass of the projectile (kg)
pub const ROCK_MASS: f64 = 1.0;

/// Radius of the projectile (m)
pub const ROCK_RADIUS: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct GlobalParams {
    pub g: f64, // gravitational constant
    pub delta_time: f64, // step size in seconds
    pub max_steps: u32, // tick budget before the run times out
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self {
            g: G,
            delta_time: DELTA_TIME,
            max_steps: MAX_STEPS,
        }
    }
}
