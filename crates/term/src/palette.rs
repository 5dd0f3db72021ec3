//! The classic 2048 tile palette.
//!
//! Background colors follow the familiar beige-to-gold ramp, with low tiles
//! carrying dark text and everything above 4 switching to white. Values past
//! 2048 fall back to a loud red so an unexpected tile is impossible to miss.

use crate::fb::{CellStyle, Rgb};

/// Background for a tile of the given value (0 is an empty cell).
pub fn tile_color(value: u32) -> Rgb {
    match value {
        0 => Rgb::new(0xcd, 0xc1, 0xb4),
        2 => Rgb::new(0xee, 0xe4, 0xda),
        4 => Rgb::new(0xed, 0xe0, 0xc8),
        8 => Rgb::new(0xf2, 0xb1, 0x79),
        16 => Rgb::new(0xf5, 0x95, 0x63),
        32 => Rgb::new(0xf6, 0x7c, 0x5f),
        64 => Rgb::new(0xf6, 0x5e, 0x3b),
        128 => Rgb::new(0xed, 0xcf, 0x72),
        256 => Rgb::new(0xed, 0xcc, 0x61),
        512 => Rgb::new(0xed, 0xc8, 0x50),
        1024 => Rgb::new(0xed, 0xc5, 0x3f),
        2048 => Rgb::new(0xed, 0xc2, 0x2e),
        _ => Rgb::new(0xff, 0x00, 0x00),
    }
}

/// Text color for a tile value: dark on the two palest tiles, white above.
pub fn text_color(value: u32) -> Rgb {
    if value > 4 {
        Rgb::new(0xff, 0xff, 0xff)
    } else {
        Rgb::new(0x00, 0x00, 0x00)
    }
}

/// Complete cell style for drawing a tile of the given value.
pub fn tile_style(value: u32) -> CellStyle {
    CellStyle {
        fg: text_color(value),
        bg: tile_color(value),
        bold: value > 4,
        dim: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_use_the_classic_ramp() {
        assert_eq!(tile_color(0), Rgb::new(0xcd, 0xc1, 0xb4));
        assert_eq!(tile_color(2), Rgb::new(0xee, 0xe4, 0xda));
        assert_eq!(tile_color(2048), Rgb::new(0xed, 0xc2, 0x2e));
    }

    #[test]
    fn values_past_2048_fall_back_to_red() {
        assert_eq!(tile_color(4096), Rgb::new(0xff, 0x00, 0x00));
        assert_eq!(tile_color(65536), Rgb::new(0xff, 0x00, 0x00));
    }

    #[test]
    fn text_flips_to_white_above_4() {
        assert_eq!(text_color(2), Rgb::new(0x00, 0x00, 0x00));
        assert_eq!(text_color(4), Rgb::new(0x00, 0x00, 0x00));
        assert_eq!(text_color(8), Rgb::new(0xff, 0xff, 0xff));
        assert_eq!(text_color(2048), Rgb::new(0xff, 0xff, 0xff));
    }
}
