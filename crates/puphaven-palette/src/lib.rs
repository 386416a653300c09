#![warn(missing_docs)]
//! Representative-color extraction from decoded images.
//!
//! [`Palette::from_image`] starts a builder; [`PaletteBuilder::generate`]
//! quantizes the image to a small set of [`Swatch`]es and scores them against
//! [`Target`] profiles. Generation runs synchronously on the calling thread,
//! never fails, and is fully deterministic for a given image and
//! configuration. Callers supply a fallback color per lookup for profiles
//! that found no qualifying swatch.
//!
//! ```no_run
//! use image::RgbaImage;
//! use palette::Srgb;
//! use puphaven_palette::Palette;
//!
//! let img = RgbaImage::new(64, 64);
//! let palette = Palette::from_image(&img).generate();
//! let accent = palette.vibrant_color(Srgb::new(0xBB, 0x86, 0xFC));
//! ```

mod filter;
mod quantizer;
mod swatch;
mod target;

pub use filter::{DefaultFilter, SwatchFilter};
pub use palette::Srgb;
pub use swatch::Swatch;
pub use target::{Target, TargetBuilder};

use image::RgbaImage;
use tracing::debug;

/// Quantizer bin budget when the caller does not override it.
pub const DEFAULT_MAX_COLORS: u16 = 16;

/// Images above this pixel area are downscaled before quantization.
pub const DEFAULT_RESIZE_AREA: u32 = 112 * 112;

/// Configures and runs palette generation. Created by [`Palette::from_image`].
pub struct PaletteBuilder<'a> {
    image: &'a RgbaImage,
    max_colors: u16,
    resize_area: u32,
    filters: Vec<Box<dyn SwatchFilter>>,
    targets: Vec<Target>,
}

impl<'a> PaletteBuilder<'a> {
    /// Cap the number of quantized colors. Values below 1 are clamped to 1.
    pub fn maximum_color_count(mut self, count: u16) -> Self {
        self.max_colors = count.max(1);
        self
    }

    /// Set the pixel area above which the image is downscaled first.
    /// `0` disables downscaling.
    pub fn resize_area(mut self, area: u32) -> Self {
        self.resize_area = area;
        self
    }

    /// Remove all filters, including the default one.
    pub fn clear_filters(mut self) -> Self {
        self.filters.clear();
        self
    }

    /// Add an admission filter on top of the existing ones.
    pub fn add_filter(mut self, filter: impl SwatchFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Remove all target profiles, including the six built-ins.
    pub fn clear_targets(mut self) -> Self {
        self.targets.clear();
        self
    }

    /// Add a target profile. Duplicates are ignored.
    pub fn add_target(mut self, target: Target) -> Self {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
        self
    }

    /// Run quantization and target scoring.
    pub fn generate(self) -> Palette {
        let scaled;
        let image = if self.resize_area > 0 {
            let area = u64::from(self.image.width()) * u64::from(self.image.height());
            if area > u64::from(self.resize_area) {
                let ratio = (f64::from(self.resize_area) / area as f64).sqrt();
                let width = ((f64::from(self.image.width()) * ratio).ceil() as u32).max(1);
                let height = ((f64::from(self.image.height()) * ratio).ceil() as u32).max(1);
                scaled = image::imageops::resize(
                    self.image,
                    width,
                    height,
                    image::imageops::FilterType::Nearest,
                );
                &scaled
            } else {
                self.image
            }
        } else {
            self.image
        };

        let pixels: Vec<[u8; 3]> = image.pixels().map(|p| [p.0[0], p.0[1], p.0[2]]).collect();
        let swatches = quantizer::quantize(&pixels, self.max_colors, &self.filters);
        debug!(
            swatches = swatches.len(),
            width = image.width(),
            height = image.height(),
            "quantization complete"
        );

        let dominant = swatches
            .iter()
            .copied()
            .fold(None::<Swatch>, |best, swatch| match best {
                Some(b) if b.population() >= swatch.population() => Some(b),
                _ => Some(swatch),
            });

        let mut palette = Palette {
            swatches,
            dominant,
            selected: Vec::with_capacity(self.targets.len()),
        };
        palette.select_targets(self.targets);
        palette
    }
}

/// The extracted swatches plus the best swatch per target profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    swatches: Vec<Swatch>,
    dominant: Option<Swatch>,
    selected: Vec<(Target, Option<Swatch>)>,
}

impl Palette {
    /// Start building a palette from a decoded image.
    ///
    /// The builder starts with the default filter, the six built-in targets,
    /// a [`DEFAULT_MAX_COLORS`] bin budget and [`DEFAULT_RESIZE_AREA`]
    /// downscaling.
    pub fn from_image(image: &RgbaImage) -> PaletteBuilder<'_> {
        PaletteBuilder {
            image,
            max_colors: DEFAULT_MAX_COLORS,
            resize_area: DEFAULT_RESIZE_AREA,
            filters: vec![Box::new(DefaultFilter)],
            targets: vec![
                Target::LIGHT_VIBRANT,
                Target::VIBRANT,
                Target::DARK_VIBRANT,
                Target::LIGHT_MUTED,
                Target::MUTED,
                Target::DARK_MUTED,
            ],
        }
    }

    /// All quantized swatches, in quantizer order.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The swatch with the largest population, if any color survived
    /// filtering.
    pub fn dominant_swatch(&self) -> Option<&Swatch> {
        self.dominant.as_ref()
    }

    /// Dominant color, or `fallback` for an empty palette.
    pub fn dominant_color(&self, fallback: Srgb<u8>) -> Srgb<u8> {
        self.dominant.map(|s| s.rgb()).unwrap_or(fallback)
    }

    /// The selected swatch for `target`, when one qualified.
    pub fn swatch_for_target(&self, target: &Target) -> Option<&Swatch> {
        self.selected
            .iter()
            .find(|(t, _)| t == target)
            .and_then(|(_, swatch)| swatch.as_ref())
    }

    /// The selected color for `target`, or `fallback`.
    pub fn color_for_target(&self, target: &Target, fallback: Srgb<u8>) -> Srgb<u8> {
        self.swatch_for_target(target)
            .map(|s| s.rgb())
            .unwrap_or(fallback)
    }

    /// Color for [`Target::VIBRANT`], or `fallback`.
    pub fn vibrant_color(&self, fallback: Srgb<u8>) -> Srgb<u8> {
        self.color_for_target(&Target::VIBRANT, fallback)
    }

    /// Color for [`Target::LIGHT_VIBRANT`], or `fallback`.
    pub fn light_vibrant_color(&self, fallback: Srgb<u8>) -> Srgb<u8> {
        self.color_for_target(&Target::LIGHT_VIBRANT, fallback)
    }

    /// Color for [`Target::DARK_VIBRANT`], or `fallback`.
    pub fn dark_vibrant_color(&self, fallback: Srgb<u8>) -> Srgb<u8> {
        self.color_for_target(&Target::DARK_VIBRANT, fallback)
    }

    /// Color for [`Target::MUTED`], or `fallback`.
    pub fn muted_color(&self, fallback: Srgb<u8>) -> Srgb<u8> {
        self.color_for_target(&Target::MUTED, fallback)
    }

    /// Color for [`Target::LIGHT_MUTED`], or `fallback`.
    pub fn light_muted_color(&self, fallback: Srgb<u8>) -> Srgb<u8> {
        self.color_for_target(&Target::LIGHT_MUTED, fallback)
    }

    /// Color for [`Target::DARK_MUTED`], or `fallback`.
    pub fn dark_muted_color(&self, fallback: Srgb<u8>) -> Srgb<u8> {
        self.color_for_target(&Target::DARK_MUTED, fallback)
    }

    fn select_targets(&mut self, targets: Vec<Target>) {
        let mut used: Vec<Srgb<u8>> = Vec::new();
        for target in targets {
            let best = self.max_scored_swatch(&target, &used);
            if let Some(swatch) = &best {
                if target.is_exclusive() {
                    used.push(swatch.rgb());
                }
            }
            self.selected.push((target, best));
        }
    }

    fn max_scored_swatch(&self, target: &Target, used: &[Srgb<u8>]) -> Option<Swatch> {
        let weights = target.normalized_weights();
        let max_population = self.dominant.map(|s| s.population()).unwrap_or(1);

        let mut best: Option<(f32, Swatch)> = None;
        for swatch in &self.swatches {
            if !Self::qualifies(swatch, target, used) {
                continue;
            }
            let score = Self::score(swatch, target, &weights, max_population);
            match best {
                Some((max, _)) if score <= max => {}
                _ => best = Some((score, *swatch)),
            }
        }
        best.map(|(_, swatch)| swatch)
    }

    fn qualifies(swatch: &Swatch, target: &Target, used: &[Srgb<u8>]) -> bool {
        let hsl = swatch.hsl();
        hsl[1] >= target.minimum_saturation()
            && hsl[1] <= target.maximum_saturation()
            && hsl[2] >= target.minimum_lightness()
            && hsl[2] <= target.maximum_lightness()
            && !used.contains(&swatch.rgb())
    }

    fn score(swatch: &Swatch, target: &Target, weights: &[f32; 3], max_population: u32) -> f32 {
        let hsl = swatch.hsl();
        let mut total = 0.0;
        if weights[0] > 0.0 {
            total += weights[0] * (1.0 - (hsl[1] - target.target_saturation()).abs());
        }
        if weights[1] > 0.0 {
            total += weights[1] * (1.0 - (hsl[2] - target.target_lightness()).abs());
        }
        if weights[2] > 0.0 {
            total += weights[2] * (swatch.population() as f32 / max_population as f32);
        }
        total
    }
}
