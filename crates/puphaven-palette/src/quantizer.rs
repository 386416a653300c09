//! Median-cut color quantization over an RGB555 histogram.
//!
//! Pixels are reduced to 5 bits per channel and binned; the populated bins
//! are then carved into boxes, always splitting the largest-volume box along
//! its longest color dimension at its population midpoint, until the box
//! count reaches the requested color count. Each box contributes its
//! population-weighted mean color as a swatch.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use palette::Srgb;

use crate::filter::SwatchFilter;
use crate::swatch::{rgb_to_hsl, Swatch};

const QUANTIZE_WORD_WIDTH: u32 = 5;
const QUANTIZE_WORD_MASK: u16 = (1 << QUANTIZE_WORD_WIDTH) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Red,
    Green,
    Blue,
}

fn quantize_word(value: u8) -> u16 {
    (value >> (8 - QUANTIZE_WORD_WIDTH)) as u16
}

fn quantize_rgb888(r: u8, g: u8, b: u8) -> u16 {
    (quantize_word(r) << (2 * QUANTIZE_WORD_WIDTH))
        | (quantize_word(g) << QUANTIZE_WORD_WIDTH)
        | quantize_word(b)
}

fn quantized_red(color: u16) -> u16 {
    (color >> (2 * QUANTIZE_WORD_WIDTH)) & QUANTIZE_WORD_MASK
}

fn quantized_green(color: u16) -> u16 {
    (color >> QUANTIZE_WORD_WIDTH) & QUANTIZE_WORD_MASK
}

fn quantized_blue(color: u16) -> u16 {
    color & QUANTIZE_WORD_MASK
}

fn approximate_rgb888(r: u16, g: u16, b: u16) -> Srgb<u8> {
    Srgb::new(
        (r << (8 - QUANTIZE_WORD_WIDTH)) as u8,
        (g << (8 - QUANTIZE_WORD_WIDTH)) as u8,
        (b << (8 - QUANTIZE_WORD_WIDTH)) as u8,
    )
}

fn bin_color(color: u16) -> Srgb<u8> {
    approximate_rgb888(
        quantized_red(color),
        quantized_green(color),
        quantized_blue(color),
    )
}

fn is_filtered(rgb: Srgb<u8>, filters: &[Box<dyn SwatchFilter>]) -> bool {
    let hsl = rgb_to_hsl(rgb);
    filters.iter().any(|f| !f.allows(rgb, hsl))
}

/// Reduce `pixels` to at most `max_colors` representative swatches.
///
/// Filtered colors neither occupy bins nor survive as box averages. When the
/// filtered histogram holds no more than `max_colors` distinct bins, the bins
/// themselves become the swatches and no cutting happens.
pub(crate) fn quantize(
    pixels: &[[u8; 3]],
    max_colors: u16,
    filters: &[Box<dyn SwatchFilter>],
) -> Vec<Swatch> {
    let mut histogram = vec![0u32; 1 << (3 * QUANTIZE_WORD_WIDTH)];
    for px in pixels {
        histogram[quantize_rgb888(px[0], px[1], px[2]) as usize] += 1;
    }

    let mut colors: Vec<u16> = Vec::new();
    for (color, count) in histogram.iter_mut().enumerate() {
        let color = color as u16;
        if *count > 0 && is_filtered(bin_color(color), filters) {
            *count = 0;
        }
        if *count > 0 {
            colors.push(color);
        }
    }

    if colors.len() <= max_colors as usize {
        return colors
            .iter()
            .map(|&color| Swatch::new(bin_color(color), histogram[color as usize]))
            .collect();
    }

    split_boxes(colors, &histogram, max_colors, filters)
}

fn split_boxes(
    mut colors: Vec<u16>,
    histogram: &[u32],
    max_colors: u16,
    filters: &[Box<dyn SwatchFilter>],
) -> Vec<Swatch> {
    let mut queue: BinaryHeap<Vbox> = BinaryHeap::with_capacity(max_colors as usize);
    queue.push(Vbox::new(0, colors.len() - 1, &colors, histogram));

    while queue.len() < max_colors as usize {
        let Some(mut vbox) = queue.pop() else {
            break;
        };
        if !vbox.can_split() {
            queue.push(vbox);
            break;
        }
        let upper_half = vbox.split(&mut colors, histogram);
        queue.push(upper_half);
        queue.push(vbox);
    }

    queue
        .into_iter()
        .filter_map(|vbox| vbox.average_swatch(&colors, histogram))
        .filter(|swatch| !is_filtered(swatch.rgb(), filters))
        .collect()
}

/// Reorders the bit layout so that an ascending `u16` sort orders colors by
/// `dimension` first. Applying the same reorder twice restores the layout.
fn reorder_significant_component(colors: &mut [u16], dimension: Component) {
    match dimension {
        Component::Red => {}
        Component::Green => {
            for color in colors.iter_mut() {
                *color = (quantized_green(*color) << (2 * QUANTIZE_WORD_WIDTH))
                    | (quantized_red(*color) << QUANTIZE_WORD_WIDTH)
                    | quantized_blue(*color);
            }
        }
        Component::Blue => {
            for color in colors.iter_mut() {
                *color = (quantized_blue(*color) << (2 * QUANTIZE_WORD_WIDTH))
                    | (quantized_green(*color) << QUANTIZE_WORD_WIDTH)
                    | quantized_red(*color);
            }
        }
    }
}

/// A box in quantized color space, covering `colors[lower..=upper]`.
#[derive(Debug, Clone, Copy)]
struct Vbox {
    lower: usize,
    upper: usize,
    population: u32,
    min_red: u16,
    max_red: u16,
    min_green: u16,
    max_green: u16,
    min_blue: u16,
    max_blue: u16,
}

impl Vbox {
    fn new(lower: usize, upper: usize, colors: &[u16], histogram: &[u32]) -> Self {
        let mut vbox = Vbox {
            lower,
            upper,
            population: 0,
            min_red: 0,
            max_red: 0,
            min_green: 0,
            max_green: 0,
            min_blue: 0,
            max_blue: 0,
        };
        vbox.fit(colors, histogram);
        vbox
    }

    /// Recompute the bounds and population from the covered colors.
    fn fit(&mut self, colors: &[u16], histogram: &[u32]) {
        let mut min_red = QUANTIZE_WORD_MASK;
        let mut min_green = QUANTIZE_WORD_MASK;
        let mut min_blue = QUANTIZE_WORD_MASK;
        let mut max_red = 0;
        let mut max_green = 0;
        let mut max_blue = 0;
        let mut population = 0;

        for &color in &colors[self.lower..=self.upper] {
            population += histogram[color as usize];
            let r = quantized_red(color);
            let g = quantized_green(color);
            let b = quantized_blue(color);
            min_red = min_red.min(r);
            max_red = max_red.max(r);
            min_green = min_green.min(g);
            max_green = max_green.max(g);
            min_blue = min_blue.min(b);
            max_blue = max_blue.max(b);
        }

        self.population = population;
        self.min_red = min_red;
        self.max_red = max_red;
        self.min_green = min_green;
        self.max_green = max_green;
        self.min_blue = min_blue;
        self.max_blue = max_blue;
    }

    fn volume(&self) -> u32 {
        (self.max_red - self.min_red + 1) as u32
            * (self.max_green - self.min_green + 1) as u32
            * (self.max_blue - self.min_blue + 1) as u32
    }

    fn color_count(&self) -> usize {
        self.upper - self.lower + 1
    }

    fn can_split(&self) -> bool {
        self.color_count() > 1
    }

    fn longest_dimension(&self) -> Component {
        let red = self.max_red - self.min_red;
        let green = self.max_green - self.min_green;
        let blue = self.max_blue - self.min_blue;
        if red >= green && red >= blue {
            Component::Red
        } else if green >= red && green >= blue {
            Component::Green
        } else {
            Component::Blue
        }
    }

    /// Split off the upper half at the population midpoint of the longest
    /// dimension. `self` keeps the lower half.
    fn split(&mut self, colors: &mut [u16], histogram: &[u32]) -> Vbox {
        debug_assert!(self.can_split());
        let split_point = self.find_split_point(colors, histogram);
        let upper_half = Vbox::new(split_point + 1, self.upper, colors, histogram);
        self.upper = split_point;
        self.fit(colors, histogram);
        upper_half
    }

    fn find_split_point(&self, colors: &mut [u16], histogram: &[u32]) -> usize {
        let dimension = self.longest_dimension();
        let range = &mut colors[self.lower..=self.upper];
        reorder_significant_component(range, dimension);
        range.sort_unstable();
        reorder_significant_component(range, dimension);

        let midpoint = self.population / 2;
        let mut count = 0u32;
        for i in self.lower..=self.upper {
            count += histogram[colors[i] as usize];
            if count >= midpoint {
                // Splitting at the last index would leave the upper half empty.
                return i.min(self.upper - 1);
            }
        }
        self.lower
    }

    /// The population-weighted mean color of the box. `None` for a box with
    /// no population, which only arises from an all-zero histogram.
    fn average_swatch(&self, colors: &[u16], histogram: &[u32]) -> Option<Swatch> {
        let mut red_sum = 0u64;
        let mut green_sum = 0u64;
        let mut blue_sum = 0u64;
        let mut population = 0u64;

        for &color in &colors[self.lower..=self.upper] {
            let count = histogram[color as usize] as u64;
            population += count;
            red_sum += count * quantized_red(color) as u64;
            green_sum += count * quantized_green(color) as u64;
            blue_sum += count * quantized_blue(color) as u64;
        }

        if population == 0 {
            return None;
        }

        let red = (red_sum as f64 / population as f64).round() as u16;
        let green = (green_sum as f64 / population as f64).round() as u16;
        let blue = (blue_sum as f64 / population as f64).round() as u16;
        Some(Swatch::new(
            approximate_rgb888(red, green, blue),
            population as u32,
        ))
    }
}

impl PartialEq for Vbox {
    fn eq(&self, other: &Self) -> bool {
        self.volume() == other.volume()
    }
}

impl Eq for Vbox {}

impl PartialOrd for Vbox {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vbox {
    fn cmp(&self, other: &Self) -> Ordering {
        self.volume().cmp(&other.volume())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DefaultFilter;

    fn no_filters() -> Vec<Box<dyn SwatchFilter>> {
        Vec::new()
    }

    fn default_filters() -> Vec<Box<dyn SwatchFilter>> {
        vec![Box::new(DefaultFilter)]
    }

    #[test]
    fn test_word_round_trip() {
        let q = quantize_rgb888(255, 128, 0);
        assert_eq!(quantized_red(q), 31);
        assert_eq!(quantized_green(q), 16);
        assert_eq!(quantized_blue(q), 0);
        assert_eq!(bin_color(q), Srgb::new(248, 128, 0));
    }

    #[test]
    fn test_reorder_is_self_inverse() {
        let original = vec![
            quantize_rgb888(10, 200, 30),
            quantize_rgb888(250, 5, 90),
            quantize_rgb888(66, 66, 66),
        ];
        for dimension in [Component::Red, Component::Green, Component::Blue] {
            let mut colors = original.clone();
            reorder_significant_component(&mut colors, dimension);
            reorder_significant_component(&mut colors, dimension);
            assert_eq!(colors, original);
        }
    }

    #[test]
    fn test_uniform_input_yields_single_swatch() {
        let pixels = vec![[0u8, 128, 255]; 100];
        let swatches = quantize(&pixels, 16, &no_filters());
        assert_eq!(swatches.len(), 1);
        assert_eq!(swatches[0].rgb(), Srgb::new(0, 128, 248));
        assert_eq!(swatches[0].population(), 100);
    }

    #[test]
    fn test_few_distinct_colors_pass_through() {
        let mut pixels = Vec::new();
        pixels.extend(std::iter::repeat([255u8, 0, 0]).take(10));
        pixels.extend(std::iter::repeat([0u8, 255, 0]).take(20));
        pixels.extend(std::iter::repeat([0u8, 0, 255]).take(30));
        let mut swatches = quantize(&pixels, 16, &no_filters());
        swatches.sort_by_key(|s| s.population());
        assert_eq!(swatches.len(), 3);
        assert_eq!(swatches[0].rgb(), Srgb::new(248, 0, 0));
        assert_eq!(swatches[1].rgb(), Srgb::new(0, 248, 0));
        assert_eq!(swatches[2].rgb(), Srgb::new(0, 0, 248));
    }

    #[test]
    fn test_swatch_count_is_bounded() {
        // A ramp with far more distinct quantized colors than requested.
        let mut pixels = Vec::new();
        for r in (0..32).map(|v| v * 8) {
            for g in (0..8).map(|v| v * 32) {
                pixels.push([r as u8, g as u8, 128]);
            }
        }
        let swatches = quantize(&pixels, 8, &no_filters());
        assert!(swatches.len() <= 8);
        assert!(swatches.len() > 1);
    }

    #[test]
    fn test_filtered_bins_are_dropped() {
        let mut pixels = vec![[255u8, 255, 255]; 50];
        pixels.extend(std::iter::repeat([0u8, 0, 0]).take(50));
        pixels.extend(std::iter::repeat([0u8, 128, 255]).take(10));
        let swatches = quantize(&pixels, 16, &default_filters());
        assert_eq!(swatches.len(), 1);
        assert_eq!(swatches[0].rgb(), Srgb::new(0, 128, 248));
    }

    #[test]
    fn test_empty_input_yields_no_swatches() {
        let swatches = quantize(&[], 16, &default_filters());
        assert!(swatches.is_empty());
    }

    #[test]
    fn test_population_is_preserved_across_split() {
        let mut pixels = Vec::new();
        for i in 0..1000u32 {
            let v = (i % 256) as u8;
            pixels.push([v, 255 - v, (i % 32 * 8) as u8]);
        }
        let total: u32 = quantize(&pixels, 4, &no_filters())
            .iter()
            .map(|s| s.population())
            .sum();
        assert_eq!(total, 1000);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let mut pixels = Vec::new();
        for i in 0..500u32 {
            pixels.push([(i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8]);
        }
        let first = quantize(&pixels, 12, &default_filters());
        let second = quantize(&pixels, 12, &default_filters());
        assert_eq!(first, second);
    }
}
