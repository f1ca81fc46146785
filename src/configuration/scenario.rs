//! Build fully-initialized runtime scenarios from configuration
//!
//! Takes the TOML-facing config types plus the rock state from the command
//! line and produces the runtime bundles the engines consume:
//! - [`GlobalScenario`]: a `System` (bodies + rock at tick 0) with its
//!   `GlobalParams`
//! - [`LocalScenario`]: the shape set, launch point, and direction-bearing
//!   velocity with its `MarchParams`

use crate::configuration::config::{BodyConfig, GlobalConfig, LocalConfig, ShapeConfig};
use crate::marching::marcher::MarchParams;
use crate::marching::sdf::Shape;
use crate::simulation::params::GlobalParams;
use crate::simulation::states::{Body, NVec3, System};

/// A fully-initialized global run: system state at tick 0 plus parameters.
#[derive(Debug, Clone)]
pub struct GlobalScenario {
    pub system: System,
    pub params: GlobalParams,
}

impl GlobalScenario {
    pub fn build(config: GlobalConfig, rock_position: NVec3, rock_velocity: NVec3) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = config
            .bodies
            .into_iter()
            .map(|bc: BodyConfig| Body {
                name: bc.name,
                x: bc.position.into(),
                v: bc.direction.into(),
                m: bc.mass,
                radius: bc.radius,
                is_goal: bc.goal,
            })
            .collect();

        let system = System {
            bodies,
            rock: Body::rock(rock_position, rock_velocity),
            tick: 0,
        };

        Self {
            system,
            params: GlobalParams::default(),
        }
    }
}

/// A fully-initialized local run: static shapes plus the launch state.
#[derive(Debug, Clone)]
pub struct LocalScenario {
    pub shapes: Vec<Shape>,
    pub origin: NVec3, // launch point
    pub velocity: NVec3, // supplies direction only
    pub params: MarchParams,
}

impl LocalScenario {
    pub fn build(config: LocalConfig, origin: NVec3, velocity: NVec3) -> Self {
        // Shapes: map `ShapeConfig` -> runtime `Shape`; box sides become
        // half-extents here, once.
        let shapes: Vec<Shape> = config
            .bodies
            .into_iter()
            .map(|sc| match sc {
                ShapeConfig::Sphere { position, radius } => Shape::Sphere {
                    position: position.into(),
                    radius,
                },
                ShapeConfig::Cylinder {
                    position,
                    radius,
                    height,
                } => Shape::Cylinder {
                    position: position.into(),
                    radius,
                    height,
                },
                ShapeConfig::Box { position, sides } => Shape::Box {
                    position: position.into(),
                    half_extents: NVec3::new(sides.x / 2.0, sides.y / 2.0, sides.z / 2.0),
                },
                ShapeConfig::Torus {
                    position,
                    inner_radius,
                    outer_radius,
                } => Shape::Torus {
                    position: position.into(),
                    inner_radius,
                    outer_radius,
                },
            })
            .collect();

        Self {
            shapes,
            origin,
            velocity,
            params: MarchParams::default(),
        }
    }
}
