//! Admission filters applied during quantization.

use palette::Srgb;

/// Decides whether a quantized color may enter the palette.
///
/// Filters run twice: once per histogram bin before the median cut, and once
/// more on each box's averaged color.
pub trait SwatchFilter {
    /// Returns `true` when the color is allowed.
    fn allows(&self, rgb: Srgb<u8>, hsl: [f32; 3]) -> bool;
}

const BLACK_MAX_LIGHTNESS: f32 = 0.05;
const WHITE_MIN_LIGHTNESS: f32 = 0.95;

/// The stock filter: rejects near-black, near-white, and the low-saturation
/// red band around the I line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFilter;

impl DefaultFilter {
    fn is_black(hsl: [f32; 3]) -> bool {
        hsl[2] <= BLACK_MAX_LIGHTNESS
    }

    fn is_white(hsl: [f32; 3]) -> bool {
        hsl[2] >= WHITE_MIN_LIGHTNESS
    }

    fn is_near_red_i_line(hsl: [f32; 3]) -> bool {
        hsl[0] >= 10.0 && hsl[0] <= 37.0 && hsl[1] <= 0.82
    }
}

impl SwatchFilter for DefaultFilter {
    fn allows(&self, _rgb: Srgb<u8>, hsl: [f32; 3]) -> bool {
        !Self::is_white(hsl) && !Self::is_black(hsl) && !Self::is_near_red_i_line(hsl)
    }
}
