#![no_std]

pub mod color;
pub mod encoder;
pub mod frame;
pub mod line;
pub mod runner;
pub mod sensor;
pub mod timing;

pub use color::{Rgb, rgb_from_u32};
pub use encoder::StripEncoder;
pub use frame::{CapacityError, FrameBuffer};
pub use line::DataLine;
pub use runner::{RunnerConfig, StripRunner};
pub use sensor::{BrightnessMap, SensorSampler};
pub use timing::{ClockClass, Mhz8, Mhz16, Mhz20, PulseTiming};

pub use embassy_time::Duration;
