//! Semi-implicit Euler integration, split into the two phases the engine
//! interleaves with collision handling
//!
//! Per tick the engine drifts positions on the previous velocities, then
//! kicks velocities with forces evaluated at the new positions. Order
//! matters: drifting before kicking is what makes the scheme symplectic-
//! adjacent and stable at the fixed one-hour step.

use crate::simulation::forces::{acceleration, net_force};
use crate::simulation::states::{Body, NVec3, System};

/// Drift: `x_n+1 = x_n + dt * v_n` for every body and the rock.
pub fn drift_positions(sys: &mut System, dt: f64) {
    for body in sys.bodies.iter_mut() {
        body.x += dt * body.v;
    }
    sys.rock.x += dt * sys.rock.v;
}

/// Kick: `v_n+1 = v_n + dt * a` with accelerations evaluated at the
/// current (already drifted) positions.
///
/// Bodies attract each other and the rock contributes to their
/// accelerations; the rock itself is accelerated by all bodies. All
/// accelerations are computed from the same snapshot before any velocity
/// is written.
pub fn kick_velocities(sys: &mut System, g: f64, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    // a[i] for body i: pulled by every other body and by the rock.
    let mut accels = vec![NVec3::zeros(); n];
    for (i, body) in sys.bodies.iter().enumerate() {
        let mut others: Vec<&Body> = sys.bodies.iter().collect();
        others.push(&sys.rock);
        let force = net_force(body, &others, g);
        accels[i] = acceleration(&force, body.m);
    }

    // The rock is pulled by the bodies only.
    let body_refs: Vec<&Body> = sys.bodies.iter().collect();
    let rock_force = net_force(&sys.rock, &body_refs, g);
    let rock_accel = acceleration(&rock_force, sys.rock.m);

    for (body, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        body.v += dt * *a;
    }
    sys.rock.v += dt * rock_accel;
}
