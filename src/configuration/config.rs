//! Configuration types for loading scenes from TOML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scene plus the validation the engines rely on. A scene is a `[[bodies]]`
//! array whose entry shape depends on the mode:
//!
//! - [`GlobalConfig`] / [`BodyConfig`] – celestial bodies for the
//!   gravitational engine
//! - [`LocalConfig`] / [`ShapeConfig`] – rigid shapes for the ray marcher
//!
//! # TOML format
//! An example global scene matching these types:
//!
//! ```toml
//! [[bodies]]
//! name = "Sun"
//! position = { x = 0.0, y = 0.0, z = 0.0 }
//! direction = { x = 0.0, y = 0.0, z = 0.0 }
//! mass = 1.989e30
//! radius = 696340000.0
//! goal = true
//! ```
//!
//! And a local scene:
//!
//! ```toml
//! [[bodies]]
//! type = "sphere"
//! position = { x = 0.0, y = 0.0, z = 0.0 }
//! radius = 1.0
//!
//! [[bodies]]
//! type = "box"
//! position = { x = 0.0, y = 0.0, z = 0.0 }
//! sides = { x = 10.0, y = 10.0, z = 10.0 }
//! ```
//!
//! Validation happens once here, at the boundary: the engines assume well-
//! formed input and raise no domain errors of their own.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::simulation::states::NVec3;

/// A `{x, y, z}` inline table.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct VectorConfig {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<VectorConfig> for NVec3 {
    fn from(v: VectorConfig) -> Self {
        NVec3::new(v.x, v.y, v.z)
    }
}

/// Top-level global scene.
#[derive(Deserialize, Debug)]
pub struct GlobalConfig {
    pub bodies: Vec<BodyConfig>, // celestial bodies at t = 0
}

/// Initial state of one celestial body.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,
    pub position: VectorConfig, // initial position in meters
    pub direction: VectorConfig, // initial velocity in m/s
    pub mass: f64, // kg, must be positive
    pub radius: f64, // collision radius in meters, non-negative
    #[serde(default)]
    pub goal: bool, // striking this body means mission success
}

/// Top-level local scene.
#[derive(Deserialize, Debug)]
pub struct LocalConfig {
    pub bodies: Vec<ShapeConfig>, // rigid shapes, static for the run
}

/// One rigid shape, tagged by `type`. An unknown tag or a missing
/// type-specific field fails at deserialization, so the SDF dispatch never
/// sees an unknown kind at runtime.
#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeConfig {
    Sphere {
        position: VectorConfig,
        radius: f64,
    },
    Cylinder {
        position: VectorConfig,
        radius: f64,
        height: Option<f64>, // omitted => infinite along z
    },
    Box {
        position: VectorConfig,
        sides: VectorConfig, // full side lengths, halved at build time
    },
    Torus {
        position: VectorConfig,
        inner_radius: f64, // tube radius
        outer_radius: f64, // ring radius
    },
}

/// Load and validate a global scene file.
pub fn load_global(path: &Path) -> Result<GlobalConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    let config: GlobalConfig = toml::from_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    validate_global(&config)?;
    Ok(config)
}

/// Load and validate a local scene file.
pub fn load_local(path: &Path) -> Result<LocalConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    let config: LocalConfig = toml::from_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    validate_local(&config)?;
    Ok(config)
}

/// Check the invariants the global engine relies on.
pub fn validate_global(config: &GlobalConfig) -> Result<()> {
    if config.bodies.is_empty() {
        bail!("no bodies defined in configuration file");
    }
    for (i, body) in config.bodies.iter().enumerate() {
        if body.mass <= 0.0 {
            bail!("body {} ({}) must have positive mass", i + 1, body.name);
        }
        if body.radius < 0.0 {
            bail!("body {} ({}) must have non-negative radius", i + 1, body.name);
        }
    }
    if !config.bodies.iter().any(|b| b.goal) {
        bail!("no goal body found in global mode configuration");
    }
    Ok(())
}

/// Check that the local scene is non-empty.
pub fn validate_local(config: &LocalConfig) -> Result<()> {
    if config.bodies.is_empty() {
        bail!("no bodies defined in configuration file");
    }
    Ok(())
}
