//! Signed distance functions for the local scene shapes
//!
//! Each shape defines a signed distance from a point to its surface:
//! - positive distance = outside the shape,
//! - zero = on the surface,
//! - negative distance = inside the shape.
//!
//! `scene_sdf` is the scene-wide minimum, carrying the index of the
//! minimizing shape so the marcher can report what was struck.

use crate::simulation::states::NVec3;

/// A rigid shape in the local scene. Immutable for the duration of a run;
/// local mode has no dynamics.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere {
        position: NVec3,
        radius: f64,
    },
    /// z-axis aligned. Without a height the cylinder is infinite along z.
    Cylinder {
        position: NVec3,
        radius: f64,
        height: Option<f64>,
    },
    /// Axis-aligned box given by its half-extents.
    Box {
        position: NVec3,
        half_extents: NVec3,
    },
    /// Ring in the xy-plane: `outer_radius` is the ring radius,
    /// `inner_radius` the tube radius.
    Torus {
        position: NVec3,
        inner_radius: f64,
        outer_radius: f64,
    },
}

impl Shape {
    /// Signed distance from `point` to this shape's surface.
    pub fn sdf(&self, point: &NVec3) -> f64 {
        match self {
            Self::Sphere { position, radius } => (point - position).norm() - radius,

            Self::Cylinder {
                position,
                radius,
                height,
            } => {
                let d_xy = (point.x - position.x).hypot(point.y - position.y) - radius;
                match height {
                    // Infinite cylinder: only the radial distance counts.
                    None => d_xy,
                    Some(h) => {
                        let d_z = (point.z - position.z).abs() - h / 2.0;
                        if d_z > 0.0 {
                            if d_xy > 0.0 {
                                // Outside both bounds: Euclidean combination
                                // of the positive excesses.
                                d_xy.hypot(d_z)
                            } else {
                                // Past a cap but inside the tube.
                                d_z
                            }
                        } else {
                            // Inside the height bounds: radial distance,
                            // negative inside the tube.
                            d_xy
                        }
                    }
                }
            }

            Self::Box {
                position,
                half_extents,
            } => {
                let q = (point - position).abs() - half_extents;
                let outside = q.map(|c| c.max(0.0)).norm();
                let inside = q.x.max(q.y).max(q.z).min(0.0);
                outside + inside
            }

            Self::Torus {
                position,
                inner_radius,
                outer_radius,
            } => {
                let p = point - position;
                let q_xy = p.x.hypot(p.y) - outer_radius;
                q_xy.hypot(p.z) - inner_radius
            }
        }
    }
}

/// Minimum signed distance from `point` to any shape in the scene, with
/// the index of the nearest shape.
pub fn scene_sdf(point: &NVec3, shapes: &[Shape]) -> (f64, usize) {
    let mut min_dist = f64::INFINITY;
    let mut min_index = 0;
    for (i, shape) in shapes.iter().enumerate() {
        let d = shape.sdf(point);
        if d < min_dist {
            min_dist = d;
            min_index = i;
        }
    }
    (min_dist, min_index)
}
