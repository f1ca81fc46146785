//! Newtonian gravity for the global engine
//!
//! Pairwise force, net force over a body set, and `F = ma` inversion.
//! Forces are exact Newton with no softening: coincident bodies return the
//! zero vector, and collision merging is expected to resolve that case
//! before it matters.

use crate::simulation::states::{distance, Body, NVec3};

/// Gravitational force exerted on `on` by `from`:
/// `F = G * m1 * m2 / d^2` along the unit vector from `on` to `from`.
///
/// Returns the zero vector when the two positions coincide.
pub fn gravitational_force(on: &Body, from: &Body, g: f64) -> NVec3 {
    let d = distance(&on.x, &from.x);
    if d == 0.0 {
        return NVec3::zeros();
    }

    // Unit vector from `on` toward `from`: gravity attracts.
    let direction = (from.x - on.x) / d;

    let magnitude = g * on.m * from.m / (d * d);
    direction * magnitude
}

/// Net gravitational force on `target` from every member of `others`.
///
/// `target` is excluded by identity (pointer), not value equality, so two
/// distinct bodies with identical state still attract each other.
pub fn net_force(target: &Body, others: &[&Body], g: f64) -> NVec3 {
    let mut net = NVec3::zeros();
    for other in others {
        if std::ptr::eq(target, *other) {
            continue;
        }
        net += gravitational_force(target, other, g);
    }
    net
}

/// Acceleration from force and mass: `a = F / m`.
pub fn acceleration(force: &NVec3, mass: f64) -> NVec3 {
    force / mass
}
