//! Core state types for the global simulation.
//!
//! Defines the celestial `Body` and the `System` holding the body set,
//! the rock, and the current tick. Positions and velocities are nalgebra
//! `Vector3<f64>` values aliased as `NVec3`.

use nalgebra::Vector3;

use crate::simulation::params::{ROCK_MASS, ROCK_RADIUS};

pub type NVec3 = Vector3<f64>;

/// A celestial body in the global scene.
///
/// Bodies are created from validated configuration at simulation start and
/// replaced by fresh instances when they merge; the engine never mutates a
/// body's mass, radius, name, or goal flag in place.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass, > 0
    pub radius: f64, // collision radius, >= 0
    pub is_goal: bool, // striking this body means mission success
}

impl Body {
    /// The projectile. Fixed 1 kg mass and 1 m radius; it attracts bodies
    /// and is attracted by them, but never merges.
    pub fn rock(position: NVec3, velocity: NVec3) -> Self {
        Self {
            name: "Rock".to_string(),
            x: position,
            v: velocity,
            m: ROCK_MASS,
            radius: ROCK_RADIUS,
            is_goal: false,
        }
    }
}

/// Full state of a global run at one tick: the body set plus the rock.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of celestial bodies
    pub rock: Body, // the projectile
    pub tick: u32, // current tick, 0 before the first step
}

/// Euclidean distance between two points.
pub fn distance(a: &NVec3, b: &NVec3) -> f64 {
    (b - a).norm()
}

/// Normalize `v`, mapping the zero vector to the zero vector.
///
/// Callers treat a zero direction as "no motion" instead of propagating NaN.
pub fn unit_or_zero(v: &NVec3) -> NVec3 {
    let mag = v.norm();
    if mag == 0.0 {
        NVec3::zeros()
    } else {
        v / mag
    }
}
