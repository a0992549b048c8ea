//! The outer control loop: sample, map, transmit, pace.
//!
//! Runs one frame per [`StripRunner::tick`] call and returns how long the
//! caller should sleep before the next one. Sleeping stays on the caller's
//! side so the loop works the same under any platform's delay primitive.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::encoder::StripEncoder;
use crate::frame::{CapacityError, FrameBuffer};
use crate::line::DataLine;
use crate::sensor::{BrightnessMap, SensorSampler};
use crate::timing::ClockClass;

/// Fixed startup configuration for the control loop.
///
/// Immutable for the process lifetime; the runner copies what it needs at
/// construction.
#[derive(Debug, Clone, Copy)]
pub struct RunnerConfig {
    /// Number of physical LEDs on the strip.
    pub led_count: usize,
    /// Sensor reading around which the brightness response is symmetric.
    pub midpoint: u16,
    /// Fixed pause between frames.
    pub frame_interval: Duration,
}

/// Owns the full sample-to-waveform cycle for one strip.
///
/// Single thread of control: the frame buffer has exactly one writer (the
/// runner, between transmissions) and one reader (the encoder, during a
/// transmission), never at the same time.
pub struct StripRunner<L, C, S, const MAX_LEDS: usize>
where
    L: DataLine,
    C: ClockClass,
    S: SensorSampler,
{
    encoder: StripEncoder<L, C>,
    sensor: S,
    brightness: BrightnessMap,
    frame: FrameBuffer<MAX_LEDS>,
    frame_interval: Duration,
}

impl<L, C, S, const MAX_LEDS: usize> StripRunner<L, C, S, MAX_LEDS>
where
    L: DataLine,
    C: ClockClass,
    S: SensorSampler,
{
    /// Create a runner for a strip of `config.led_count` LEDs.
    ///
    /// Allocates the frame buffer once, here; nothing allocates afterwards.
    pub fn new(
        encoder: StripEncoder<L, C>,
        sensor: S,
        config: &RunnerConfig,
    ) -> Result<Self, CapacityError> {
        let frame = FrameBuffer::new(config.led_count)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "strip runner: {} LEDs, {} ms between frames",
            config.led_count,
            config.frame_interval.as_millis()
        );

        Ok(Self {
            encoder,
            sensor,
            brightness: BrightnessMap::new(config.midpoint),
            frame,
            frame_interval: config.frame_interval,
        })
    }

    /// Run one frame cycle and return the pause before the next.
    ///
    /// Every channel of every LED gets its own fresh sensor reading, in
    /// strip order (red, green, blue per LED). The buffer is rewritten in
    /// place, then handed to the encoder for one burst.
    pub fn tick(&mut self) -> Duration {
        for led in self.frame.iter_mut() {
            led.r = self.brightness.map(self.sensor.sample());
            led.g = self.brightness.map(self.sensor.sample());
            led.b = self.brightness.map(self.sensor.sample());
        }
        self.encoder.transmit(self.frame.as_slice());
        self.frame_interval
    }

    /// The current frame.
    pub fn frame(&self) -> &FrameBuffer<MAX_LEDS> {
        &self.frame
    }

    /// Mutable access to the frame, for callers that fill it themselves.
    pub fn frame_mut(&mut self) -> &mut FrameBuffer<MAX_LEDS> {
        &mut self.frame
    }
}
