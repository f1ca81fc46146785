pub mod simulation;
pub mod marching;
pub mod configuration;
pub mod reporting;

pub use simulation::states::{distance, unit_or_zero, Body, NVec3, System};
pub use simulation::params::GlobalParams;
pub use simulation::forces::{acceleration, gravitational_force, net_force};
pub use simulation::collisions::{detect, merge, resolve};
pub use simulation::engine::{run_global, Event, GlobalOutcome, GlobalVerdict};

pub use marching::sdf::{scene_sdf, Shape};
pub use marching::marcher::{ray_march, LocalOutcome, LocalVerdict, MarchParams};

pub use configuration::config::{load_global, load_local, GlobalConfig, LocalConfig};
pub use configuration::scenario::{GlobalScenario, LocalScenario};

pub use reporting::report::{report_global, report_local};
