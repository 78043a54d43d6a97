pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod demo;
pub mod math;
pub mod traits;
pub mod window;

pub use camera::{CameraRig, RigSnapshot};
pub use config::{HomePose, RigConfig};
pub use crate::core::blocking::{BlockSignal, BlockingContext};
pub use crate::core::boundary::{BoundaryGuard, Contact, Face};
pub use crate::core::input::{InputFrame, InputSampler};
pub use traits::{CameraController, InputSource};
