//! Textual reporting of simulation outcomes
//!
//! Formats the traces and verdicts the engines produce. All rounding
//! happens here; the engines keep full precision. Global coordinates are
//! printed with 3 decimals, local ones with 2.

use std::fmt::Write as _;

use crate::configuration::scenario::LocalScenario;
use crate::marching::marcher::LocalOutcome;
use crate::marching::sdf::Shape;
use crate::simulation::engine::{Event, GlobalOutcome};
use crate::simulation::states::NVec3;

/// Render a global run: the rock position at every tick from 0, each
/// collision event in tick order, and the final verdict line.
pub fn report_global(outcome: &GlobalOutcome) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "At time t = 0: rock is {}", coords3(&outcome.trace[0]));

    for tick in 1..outcome.trace.len() as u32 {
        // Merges resolve at the start of the tick, before the rock moves.
        for event in &outcome.events {
            if let Event::BodiesMerged { tick: t, name } = event {
                if *t == tick {
                    let _ = writeln!(out, "Collision between {name} bodies");
                }
            }
        }

        let _ = writeln!(
            out,
            "At time t = {}: rock is {}",
            tick,
            coords3(&outcome.trace[tick as usize])
        );

        for event in &outcome.events {
            if let Event::RockCollision { tick: t, body } = event {
                if *t == tick {
                    let _ = writeln!(out, "Collision between rock and {body}");
                }
            }
        }
    }

    let _ = writeln!(out, "{}", outcome.verdict);
    out
}

/// Render a local run: the launch header, one line per scene shape, every
/// marched point from step 1 onward, and the result line.
pub fn report_local(scenario: &LocalScenario, outcome: &LocalOutcome) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Rock thrown at the point {} and parallel to the vector {}",
        coords2(&scenario.origin),
        coords2(&scenario.velocity)
    );

    for shape in &scenario.shapes {
        let _ = writeln!(out, "{}", describe_shape(shape));
    }

    // steps[0] is the launch point; the displayed sequence starts at the
    // first marched point.
    for (i, point) in outcome.steps.iter().enumerate().skip(1) {
        let _ = writeln!(out, "Step {}: {}", i, coords2(point));
    }

    let _ = writeln!(out, "Result: {}", outcome.verdict);
    out
}

fn describe_shape(shape: &Shape) -> String {
    match shape {
        Shape::Sphere { position, radius } => format!(
            "Sphere of radius {:.2} at position {}",
            radius,
            coords2(position)
        ),
        Shape::Cylinder {
            position,
            radius,
            height: Some(h),
        } => format!(
            "Cylinder of radius {:.2} and height {:.2} at position {}",
            radius,
            h,
            coords2(position)
        ),
        Shape::Cylinder {
            position,
            radius,
            height: None,
        } => format!(
            "Cylinder of radius {:.2} at position {}",
            radius,
            coords2(position)
        ),
        Shape::Box {
            position,
            half_extents,
        } => format!(
            "Box of dimensions {} at position {}",
            coords2(&(half_extents * 2.0)),
            coords2(position)
        ),
        Shape::Torus {
            position,
            inner_radius,
            outer_radius,
        } => format!(
            "Torus of inner radius {:.2} and outer radius {:.2} at position {}",
            inner_radius,
            outer_radius,
            coords2(position)
        ),
    }
}

fn coords3(v: &NVec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

fn coords2(v: &NVec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z)
}
