//! Fixed-capacity frame storage, one color per physical LED.

use heapless::Vec;

use crate::color::Rgb;

/// Error returned when the requested strip length exceeds the buffer's
/// compile-time capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    /// Strip length that was asked for.
    pub requested: usize,
    /// Compile-time capacity of the buffer.
    pub capacity: usize,
}

/// Ordered sequence of colors, index = physical position on the strip.
///
/// Allocated once at startup with the strip length and never resized.
/// Entries are overwritten in place every frame cycle; nothing on the hot
/// path allocates.
///
/// `MAX_LEDS` is the compile-time capacity; the runtime length is the
/// actual strip length and may be smaller.
#[derive(Debug)]
pub struct FrameBuffer<const MAX_LEDS: usize> {
    leds: Vec<Rgb, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> FrameBuffer<MAX_LEDS> {
    /// Create a buffer for a strip of `len` LEDs, all black.
    pub fn new(len: usize) -> Result<Self, CapacityError> {
        let mut leds = Vec::new();
        if leds.resize(len, Rgb::default()).is_err() {
            return Err(CapacityError {
                requested: len,
                capacity: MAX_LEDS,
            });
        }
        Ok(Self { leds })
    }

    /// Number of LEDs on the strip.
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    /// The frame as an ordered slice, ready for transmission.
    pub fn as_slice(&self) -> &[Rgb] {
        &self.leds
    }

    /// Overwrite the color at `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, color: Rgb) {
        self.leds[index] = color;
    }

    /// Color at `index`, if within the strip.
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.leds.get(index).copied()
    }

    /// Mutable iteration in strip order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Rgb> {
        self.leds.iter_mut()
    }

    /// Overwrite every entry with one color.
    pub fn fill(&mut self, color: Rgb) {
        for led in self.leds.iter_mut() {
            *led = color;
        }
    }
}
