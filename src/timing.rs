//! Clock-frequency classes and derived pulse-width constants.
//!
//! The strip protocol encodes each bit by how long the line stays high
//! within a fixed-length slot. Those widths are wall-clock requirements of
//! the strip, so the tick counts used to hit them must be re-derived for
//! every supported core clock. Selection happens at compile time through
//! [`ClockClass`]; a frequency without an implementing type cannot reach
//! runtime.

/// High time of a 0-bit, nanoseconds.
pub const ZERO_HIGH_NS: u32 = 400;
/// High time of a 1-bit, nanoseconds.
pub const ONE_HIGH_NS: u32 = 850;
/// Full bit-slot duration, nanoseconds.
pub const PERIOD_NS: u32 = 1300;
/// Line-low interval after the last bit that latches the frame, nanoseconds.
pub const RESET_NS: u32 = 50_000;

/// One coherent set of pulse widths, in core clock ticks.
///
/// The fields are only meaningful relative to the clock they were derived
/// for and are always computed together; changing the clock means deriving
/// a whole new set, never patching a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    /// Ticks the line stays high for a 0-bit.
    pub zero_high: u32,
    /// Ticks the line stays high for a 1-bit.
    pub one_high: u32,
    /// Ticks of one full bit-slot.
    pub period: u32,
    /// Ticks of the frame latch (reset) interval.
    pub reset: u32,
}

impl PulseTiming {
    /// Derive the full constant set for a core clock, rounding each width
    /// to the nearest tick.
    pub const fn for_clock_hz(hz: u32) -> Self {
        Self {
            zero_high: ns_to_ticks(ZERO_HIGH_NS, hz),
            one_high: ns_to_ticks(ONE_HIGH_NS, hz),
            period: ns_to_ticks(PERIOD_NS, hz),
            reset: ns_to_ticks(RESET_NS, hz),
        }
    }

    /// Midpoint between the two high times, in ticks.
    ///
    /// A receiver (or a test decoder) comparing an observed high time
    /// against this threshold recovers the transmitted bit.
    pub const fn decision_threshold(self) -> u32 {
        (self.zero_high + self.one_high) / 2
    }
}

const fn ns_to_ticks(ns: u32, hz: u32) -> u32 {
    ((ns as u64 * hz as u64 + 500_000_000) / 1_000_000_000) as u32
}

/// A supported core clock frequency.
///
/// Implementations are zero-sized markers; the encoder is generic over one
/// of them, which bakes the timing constants into the transmit path with no
/// runtime branch.
pub trait ClockClass {
    /// Core clock frequency in hertz.
    const HZ: u32;

    /// Pulse widths derived for this clock.
    const TIMING: PulseTiming = PulseTiming::for_clock_hz(Self::HZ);
}

/// 8 MHz core clock.
pub struct Mhz8;

impl ClockClass for Mhz8 {
    const HZ: u32 = 8_000_000;
}

/// 16 MHz core clock.
pub struct Mhz16;

impl ClockClass for Mhz16 {
    const HZ: u32 = 16_000_000;
}

/// 20 MHz core clock.
pub struct Mhz20;

impl ClockClass for Mhz20 {
    const HZ: u32 = 20_000_000;
}
