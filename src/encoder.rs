//! Bit-level protocol output for the strip.
//!
//! Each bit occupies a fixed-duration slot: the line goes high at the start
//! of the slot and drops low either early (0-bit) or late (1-bit); the slot
//! length never depends on the value. A frame is every color in order, one
//! uninterrupted burst, followed by a long low hold that makes the strip
//! latch what it received.
//!
//! Interrupts are masked for the whole burst. A handler firing mid-slot
//! would stretch a pulse past the decode threshold and the strip would
//! show wrong colors with no way to detect it, so there is no error path
//! here at all.

use core::marker::PhantomData;

use crate::color::Rgb;
use crate::line::DataLine;
use crate::timing::ClockClass;

/// Emits frames as timed waveforms on a [`DataLine`].
///
/// Generic over a [`ClockClass`], which bakes the pulse widths for the
/// target core clock into the transmit path at compile time.
pub struct StripEncoder<L: DataLine, C: ClockClass> {
    line: L,
    _clock: PhantomData<C>,
}

impl<L: DataLine, C: ClockClass> StripEncoder<L, C> {
    /// Take ownership of a configured, idle-low line.
    pub fn new(line: L) -> Self {
        Self {
            line,
            _clock: PhantomData,
        }
    }

    /// Transmit every color in order, then latch the frame.
    ///
    /// Per LED in increasing index order: red, green, blue, each channel
    /// most-significant bit first. The full burst runs inside one critical
    /// section; the mask is released on its single exit path, before the
    /// latch interval begins. An empty slice emits no bit-slots but still
    /// holds the line low long enough to latch.
    ///
    /// The caller must not touch `colors` from an interrupt context while
    /// this runs; there is only one thread of control by construction.
    pub fn transmit(&mut self, colors: &[Rgb]) {
        self.line.set_low();
        critical_section::with(|_cs| {
            for color in colors {
                self.write_byte(color.r);
                self.write_byte(color.g);
                self.write_byte(color.b);
            }
        });
        // The last slot already left the line low; keep it there for the
        // latch interval.
        self.line.hold(C::TIMING.reset);
    }

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) {
        let mut bits = byte;
        for _ in 0..8 {
            self.write_bit(bits & 0x80 != 0);
            bits <<= 1;
        }
    }

    /// One fixed-duration bit-slot. Only the high/low split inside the
    /// slot depends on the bit value.
    #[inline(always)]
    fn write_bit(&mut self, bit: bool) {
        let high = if bit {
            C::TIMING.one_high
        } else {
            C::TIMING.zero_high
        };
        self.line.set_high();
        self.line.hold(high);
        self.line.set_low();
        self.line.hold(C::TIMING.period - high);
    }

    /// Borrow the underlying line.
    pub fn line(&self) -> &L {
        &self.line
    }

    /// Release the line back to the caller.
    pub fn into_line(self) -> L {
        self.line
    }
}
