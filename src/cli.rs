// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::demo::Scenario;

#[derive(Parser, Debug, Clone)]
#[command(name = "orbit-rig")]
#[command(about = "Bounded orbit/pan/zoom camera rig", long_about = None)]
pub struct Cli {
    /// JSON rig config; a bounded demo config is used when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Mode {
    /// Run a scripted scenario headless and print one JSON snapshot per line
    Simulate {
        #[arg(long, value_enum, default_value_t = Scenario::Tour)]
        scenario: Scenario,
        #[arg(long, default_value_t = 600)]
        frames: u32,
        /// Fixed frame step in seconds
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
        /// Print every n-th frame
        #[arg(long, default_value_t = 1)]
        every: u32,
    },
    /// Open a window and drive the rig with mouse and keyboard
    Window,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        self.command.clone().unwrap_or(Mode::Simulate {
            scenario: Scenario::Tour,
            frames: 600,
            dt: 1.0 / 60.0,
            every: 1,
        })
    }
}
