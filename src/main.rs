use rocksim::{load_global, load_local, ray_march, report_global, report_local, run_global};
use rocksim::{GlobalScenario, LocalScenario, NVec3};

use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::Parser;

use std::path::PathBuf;
use std::process;

/// Simulate the trajectory of a rock through a scene of bodies.
#[derive(Parser, Debug)]
#[command(name = "rocksim")]
struct Args {
    /// Launch program in global scene mode (Newtonian N-body)
    #[arg(long, conflicts_with = "local")]
    global: bool,

    /// Launch program in local scene mode (ray marching)
    #[arg(long)]
    local: bool,

    /// TOML configuration file describing the scene
    config_file: PathBuf,

    /// Rock position x
    px: f64,
    /// Rock position y
    py: f64,
    /// Rock position z
    pz: f64,

    /// Rock velocity x
    vx: f64,
    /// Rock velocity y
    vy: f64,
    /// Rock velocity z
    vz: f64,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help / --version are not errors
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(84);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
        process::exit(84);
    }
}

fn run(args: Args) -> Result<()> {
    let position = NVec3::new(args.px, args.py, args.pz);
    let velocity = NVec3::new(args.vx, args.vy, args.vz);

    if args.global {
        let config = load_global(&args.config_file)?;
        let scenario = GlobalScenario::build(config, position, velocity);
        let outcome = run_global(scenario.system, &scenario.params);
        print!("{}", report_global(&outcome));
    } else if args.local {
        let config = load_local(&args.config_file)?;
        let scenario = LocalScenario::build(config, position, velocity);
        let outcome = ray_march(
            &scenario.shapes,
            scenario.origin,
            scenario.velocity,
            &scenario.params,
        )?;
        print!("{}", report_local(&scenario, &outcome));
    } else {
        bail!("one of --global or --local is required");
    }

    Ok(())
}
