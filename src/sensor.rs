//! Analog sampling seam and the raw-sample to brightness mapping.

/// Blocking analog sampler on one fixed channel.
///
/// `sample` starts a conversion, waits until it completes and returns the
/// raw reading (16 bits or narrower, depending on the converter). The
/// peripheral itself is owned outside this crate.
pub trait SensorSampler {
    fn sample(&mut self) -> u16;
}

/// Maps raw sensor readings to an 8-bit channel value.
///
/// The response is symmetric around `midpoint`: the distance from the
/// midpoint is halved, clamped to 255, then squared back into 8-bit range.
/// Readings at the midpoint go dark and readings far from it saturate,
/// with a quadratic ramp between.
#[derive(Debug, Clone, Copy)]
pub struct BrightnessMap {
    midpoint: u16,
}

impl BrightnessMap {
    pub const fn new(midpoint: u16) -> Self {
        Self { midpoint }
    }

    /// Pure function of `raw`; identical readings always map to the same
    /// channel value.
    pub const fn map(self, raw: u16) -> u8 {
        let distance = if raw < self.midpoint {
            self.midpoint - raw
        } else {
            raw - self.midpoint
        };
        let halved = distance >> 1;
        let clamped = if halved > 0xff { 0xff } else { halved };
        ((clamped as u32 * clamped as u32) / 0xff) as u8
    }
}
