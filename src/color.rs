use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Build a color from a packed `0x00RR_GGBB` word.
pub const fn rgb_from_u32(value: u32) -> Rgb {
    Rgb {
        r: ((value >> 16) & 0xff) as u8,
        g: ((value >> 8) & 0xff) as u8,
        b: (value & 0xff) as u8,
    }
}
