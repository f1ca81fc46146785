//! Sphere tracing against the local scene
//!
//! Advances the rock from its launch point by the scene SDF value at each
//! step. The SDF is a lower bound on the distance to the nearest surface,
//! so a step never overshoots. Terminates on intersection, on leaving the
//! scene, or when the step budget runs out.

use std::fmt;

use anyhow::{bail, Result};

use crate::marching::sdf::{scene_sdf, Shape};
use crate::simulation::states::{unit_or_zero, NVec3};

/// Step budget before a march times out
pub const MAX_STEPS: u32 = 1000;

/// Distance threshold for intersection
pub const MIN_DISTANCE: f64 = 0.1;

/// Distance beyond which the rock is out of the scene
pub const MAX_DISTANCE: f64 = 1000.0;

#[derive(Debug, Clone)]
pub struct MarchParams {
    pub max_steps: u32, // step budget
    pub min_distance: f64, // intersection threshold
    pub max_distance: f64, // scene-exit threshold
}

impl Default for MarchParams {
    fn default() -> Self {
        Self {
            max_steps: MAX_STEPS,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
        }
    }
}

/// Terminal verdict of a local run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalVerdict {
    /// The ray reached a surface; `shape` indexes the struck shape.
    Intersection { shape: usize },
    OutOfScene,
    TimeOut,
}

impl fmt::Display for LocalVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intersection { .. } => write!(f, "Intersection"),
            Self::OutOfScene => write!(f, "Out of scene"),
            Self::TimeOut => write!(f, "Time out"),
        }
    }
}

/// A local run's verdict plus every marched point, launch point included.
#[derive(Debug, Clone)]
pub struct LocalOutcome {
    pub verdict: LocalVerdict,
    pub steps: Vec<NVec3>, // steps[0] is the launch point
}

/// March a ray from `origin` through the scene.
///
/// The velocity supplies direction only; its magnitude is discarded. A
/// zero-magnitude velocity leaves no safe direction to march and is an
/// error rather than a verdict.
pub fn ray_march(
    shapes: &[Shape],
    origin: NVec3,
    velocity: NVec3,
    params: &MarchParams,
) -> Result<LocalOutcome> {
    let direction = unit_or_zero(&velocity);
    if direction == NVec3::zeros() {
        bail!("rock velocity has zero magnitude, no direction to march");
    }

    let mut steps = vec![origin];
    let mut traveled = 0.0;
    let mut point = origin;

    for _ in 0..params.max_steps {
        let (dist, nearest) = scene_sdf(&point, shapes);

        // The SDF value is a safe step: advance by it, then classify the
        // arrival. A step no longer than the intersection threshold lands
        // the rock on the surface it was approaching.
        point += direction * dist;
        steps.push(point);

        if dist <= params.min_distance {
            return Ok(LocalOutcome {
                verdict: LocalVerdict::Intersection { shape: nearest },
                steps,
            });
        }

        if dist > params.max_distance || traveled > params.max_distance {
            return Ok(LocalOutcome {
                verdict: LocalVerdict::OutOfScene,
                steps,
            });
        }

        traveled += dist;
    }

    Ok(LocalOutcome {
        verdict: LocalVerdict::TimeOut,
        steps,
    })
}
