//! Quantized color swatches.

use palette::{FromColor, Hsl, Srgb};

/// Convert an RGB color to `[hue (degrees, 0..360), saturation, lightness]`.
pub(crate) fn rgb_to_hsl(rgb: Srgb<u8>) -> [f32; 3] {
    let hsl = Hsl::from_color(rgb.into_format::<f32>());
    [
        hsl.hue.into_positive_degrees(),
        hsl.saturation,
        hsl.lightness,
    ]
}

/// A quantized color together with the number of source pixels it represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    rgb: Srgb<u8>,
    population: u32,
    hsl: [f32; 3],
}

impl Swatch {
    /// Create a swatch from a color and its pixel population.
    pub fn new(rgb: Srgb<u8>, population: u32) -> Self {
        Self {
            rgb,
            population,
            hsl: rgb_to_hsl(rgb),
        }
    }

    /// The swatch color.
    pub fn rgb(&self) -> Srgb<u8> {
        self.rgb
    }

    /// Number of pixels that quantized to this swatch.
    pub fn population(&self) -> u32 {
        self.population
    }

    /// The color as `[hue (degrees), saturation, lightness]`.
    pub fn hsl(&self) -> [f32; 3] {
        self.hsl
    }
}
