//! The seam between the encoder and the physical output pin.

/// Single-wire data line driven by the encoder.
///
/// Implement this trait to support different hardware platforms: map
/// `set_high`/`set_low` to a GPIO write and `hold` to a busy-wait of the
/// given number of core clock ticks.
///
/// Inside a bit-slot the encoder tolerates no jitter, so implementations
/// must be fixed-latency: inlineable, branch-free, and with no
/// data-dependent memory access. `hold` must spin, never yield or sleep.
///
/// The pin must already be configured as a driven output, idle low, before
/// the line is handed to the encoder.
pub trait DataLine {
    /// Drive the line high.
    fn set_high(&mut self);

    /// Drive the line low.
    fn set_low(&mut self);

    /// Busy-wait for `ticks` core clock ticks.
    fn hold(&mut self, ticks: u32);
}
