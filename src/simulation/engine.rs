//! The global simulation engine
//!
//! Runs the tick loop to a terminal verdict: per tick it resolves
//! body-body merges, drifts positions, records the rock, checks the rock
//! against every body, then kicks velocities with forces evaluated at the
//! new positions. One blocking call per run; the tick budget is the only
//! timeout.

use std::fmt;

use crate::simulation::collisions::resolve;
use crate::simulation::integrator::{drift_positions, kick_velocities};
use crate::simulation::params::GlobalParams;
use crate::simulation::states::{distance, NVec3, System};

/// Terminal verdict of a global run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalVerdict {
    MissionSuccess,
    MissionFailure,
}

impl fmt::Display for GlobalVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissionSuccess => write!(f, "Mission success"),
            Self::MissionFailure => write!(f, "Mission failure"),
        }
    }
}

/// A collision observed during a run, tagged with the tick it happened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Two or more bodies merged; `name` is the merged body's name.
    BodiesMerged { tick: u32, name: String },
    /// The rock struck `body`, ending the run.
    RockCollision { tick: u32, body: String },
}

/// Everything a run produces: the verdict, the rock's position at every
/// tick from 0, and the ordered collision events. Consumed by reporting
/// only, never by decision logic.
#[derive(Debug, Clone)]
pub struct GlobalOutcome {
    pub verdict: GlobalVerdict,
    pub trace: Vec<NVec3>, // trace[t] is the rock position at tick t
    pub events: Vec<Event>,
}

/// Run the global simulation to its terminal verdict.
///
/// Deterministic given the initial system; any degenerate numeric state
/// flows through rather than being special-cased, and the step caps are
/// the sole safety net.
pub fn run_global(mut sys: System, params: &GlobalParams) -> GlobalOutcome {
    let mut trace = vec![sys.rock.x];
    let mut events = Vec::new();

    for tick in 1..=params.max_steps {
        sys.tick = tick;

        // 1. Resolve body-body collisions on the current set.
        let (bodies, merged) = resolve(&sys.bodies);
        sys.bodies = bodies;
        for name in merged {
            events.push(Event::BodiesMerged { tick, name });
        }

        // 2-3. Advance positions on the previous velocities, sample the rock.
        drift_positions(&mut sys, params.delta_time);
        trace.push(sys.rock.x);

        // 4. Rock-collision check decides the run.
        if let Some(hit) = rock_collision(&sys) {
            let body = &sys.bodies[hit];
            events.push(Event::RockCollision {
                tick,
                body: body.name.clone(),
            });
            let verdict = if body.is_goal {
                GlobalVerdict::MissionSuccess
            } else {
                GlobalVerdict::MissionFailure
            };
            return GlobalOutcome {
                verdict,
                trace,
                events,
            };
        }

        // 5-6. Forces at the new positions, then advance velocities.
        kick_velocities(&mut sys, params.g, params.delta_time);
    }

    // Budget exhausted without reaching a goal.
    GlobalOutcome {
        verdict: GlobalVerdict::MissionFailure,
        trace,
        events,
    }
}

/// Index of the first body the rock overlaps, if any.
fn rock_collision(sys: &System) -> Option<usize> {
    sys.bodies
        .iter()
        .position(|body| distance(&sys.rock.x, &body.x) <= sys.rock.radius + body.radius)
}
