//! Body-body collision detection and merge resolution
//!
//! `detect` finds overlapping pairs, `merge` combines two bodies under the
//! conservation rules, and `resolve` applies a full tick's worth of merges
//! as a pure set-to-set transformation. A body colliding with two partners
//! in the same tick is merged transitively: each connected component of the
//! collision graph collapses into a single body.

use std::f64::consts::PI;

use crate::simulation::states::{distance, Body};

/// All colliding index pairs `(i, j)` with `i < j`.
///
/// Two bodies collide when the distance between their centers is at most
/// the sum of their radii.
pub fn detect(bodies: &[Body]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let d = distance(&bodies[i].x, &bodies[j].x);
            if d <= bodies[i].radius + bodies[j].radius {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Merge two bodies into one:
/// - mass is summed,
/// - radius conserves the combined sphere volume,
/// - position is the arithmetic mean,
/// - velocity is the mass-weighted mean (momentum conserving),
/// - names concatenate in ascending ASCII order,
/// - the goal flag survives if either input carried it.
pub fn merge(a: &Body, b: &Body) -> Body {
    let m = a.m + b.m;

    let volume = sphere_volume(a.radius) + sphere_volume(b.radius);
    let radius = radius_from_volume(volume);

    let name = if a.name <= b.name {
        format!("{}{}", a.name, b.name)
    } else {
        format!("{}{}", b.name, a.name)
    };

    Body {
        name,
        x: (a.x + b.x) / 2.0,
        v: (a.v * a.m + b.v * b.m) / m,
        m,
        radius,
        is_goal: a.is_goal || b.is_goal,
    }
}

/// Resolve every collision in `bodies` in a single pass, producing the
/// next tick's body set and the names of the merged results in the order
/// they were formed.
///
/// Untouched bodies keep their relative order; merged bodies are appended.
/// Components are folded in ascending original-index order, which fixes the
/// concatenated name and the position mean deterministically.
pub fn resolve(bodies: &[Body]) -> (Vec<Body>, Vec<String>) {
    let pairs = detect(bodies);
    if pairs.is_empty() {
        return (bodies.to_vec(), Vec::new());
    }

    // Union-find over indices to group chained collisions.
    let mut parent: Vec<usize> = (0..bodies.len()).collect();
    for &(i, j) in &pairs {
        let (ri, rj) = (find(&mut parent, i), find(&mut parent, j));
        if ri != rj {
            parent[ri.max(rj)] = ri.min(rj);
        }
    }

    let mut touched = vec![false; bodies.len()];
    for &(i, j) in &pairs {
        touched[i] = true;
        touched[j] = true;
    }

    // Members of each colliding component, keyed by root, ascending indices.
    let mut components: Vec<(usize, Vec<usize>)> = Vec::new();
    for i in 0..bodies.len() {
        if !touched[i] {
            continue;
        }
        let root = find(&mut parent, i);
        match components.iter_mut().find(|(r, _)| *r == root) {
            Some((_, members)) => members.push(i),
            None => components.push((root, vec![i])),
        }
    }

    // Untouched bodies first, in their original order.
    let mut next: Vec<Body> = bodies
        .iter()
        .enumerate()
        .filter(|(i, _)| !touched[*i])
        .map(|(_, body)| body.clone())
        .collect();

    // Then one merged body per component, folded by ascending index.
    let mut merged_names = Vec::new();
    for (_, members) in &components {
        let mut result = bodies[members[0]].clone();
        for &idx in &members[1..] {
            result = merge(&result, &bodies[idx]);
        }
        merged_names.push(result.name.clone());
        next.push(result);
    }

    (next, merged_names)
}

fn find(parent: &mut Vec<usize>, mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]]; // path halving
        i = parent[i];
    }
    i
}

fn sphere_volume(radius: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3)
}

fn radius_from_volume(volume: f64) -> f64 {
    (3.0 * volume / (4.0 * PI)).powf(1.0 / 3.0)
}
