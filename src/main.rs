use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use orbit_rig::camera::CameraRig;
use orbit_rig::cli::{Cli, Mode};
use orbit_rig::config::RigConfig;
use orbit_rig::demo::{demo_config, run_scenario, Scenario};
use orbit_rig::window;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => RigConfig::load(path)?,
        None => demo_config(),
    };

    match cli.mode() {
        Mode::Simulate {
            scenario,
            frames,
            dt,
            every,
        } => simulate(config, scenario, frames, dt, every),
        Mode::Window => window::run(config),
    }
}

fn simulate(config: RigConfig, scenario: Scenario, frames: u32, dt: f32, every: u32) -> Result<()> {
    let mut rig = CameraRig::new(config)?;
    let every = every.max(1);
    info!("Simulating {:?} for {} frames at dt={}", scenario, frames, dt);

    let mut out = BufWriter::new(io::stdout().lock());
    let mut result = Ok(());
    run_scenario(&mut rig, scenario, frames, dt, |frame, rig| {
        if result.is_err() || frame % every != 0 {
            return;
        }
        result = serde_json::to_writer(&mut out, &rig.snapshot())
            .map_err(anyhow::Error::from)
            .and_then(|_| writeln!(out).map_err(anyhow::Error::from));
    });
    result.context("Failed to write snapshot")?;
    out.flush()?;

    let last = rig.snapshot();
    info!(
        "Finished at ({:.2}, {:.2}, {:.2}), distance {:.2}",
        last.position.x, last.position.y, last.position.z, last.distance
    );
    Ok(())
}
