//! Tile colours, keyed by tile rank (log2 of the value).

use crate::core::Cell;
use crate::fb::Rgb;

/// Board background behind the tiles.
pub const BOARD_BG: Rgb = Rgb::from_hex(0xBBADA0);

/// Digits on small (light) tiles.
pub const DARK_TEXT: Rgb = Rgb::from_hex(0x776E65);

/// Digits on large (saturated) tiles.
pub const LIGHT_TEXT: Rgb = Rgb::from_hex(0xF9F6F2);

/// Index = rank; index 0 is the empty slot.
const TILE_COLORS: [u32; 18] = [
    0x968D81, 0xEEE4DA, 0xECE0C8, 0xF2B179, 0xF59563, 0xF67C5F, // 0, 2, 4, 8, 16, 32
    0xF65E3B, 0xEDCF72, 0xEDCC61, 0xEDC850, 0xEDC53F, 0xFBC52D, // 64 .. 2048
    0xF46674, 0xF14B61, 0xEB4141, 0x6DB9DB, 0x5DA1E2, 0x007FC2, // 4096 .. 2^17
];

/// Background colour for a tile of `rank`. Ranks past 17 reuse the last colour.
pub fn color_for_rank(rank: u8) -> Rgb {
    Rgb::from_hex(TILE_COLORS[(rank as usize).min(TILE_COLORS.len() - 1)])
}

/// Colour for the digits drawn on top of `color_for_rank(rank)`.
pub fn text_color_for_rank(rank: u8) -> Rgb {
    if rank <= 2 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Background colour of a tile value (0 or a power of two >= 2).
pub fn color_for(value: u32) -> Rgb {
    color_for_rank(Cell::new(value).rank())
}

pub fn text_color_for(value: u32) -> Rgb {
    text_color_for_rank(Cell::new(value).rank())
}
