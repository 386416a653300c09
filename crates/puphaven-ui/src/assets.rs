//! Portrait texture cache with extracted accent colors.

use std::collections::HashMap;

use egui::{Color32, ColorImage, TextureHandle, TextureOptions};
use puphaven_core::portrait;
use puphaven_palette::{Palette, Srgb};
use tracing::debug;

use crate::theme::colors;

/// Representative colors extracted from one portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accents {
    /// Vibrant accent, used for card titles on the home grid
    pub vibrant: Color32,
    /// Muted tint, used for glyphs on the detail screen
    pub muted: Color32,
}

/// Synthesizes puppy portraits on demand, uploads them as egui textures and
/// caches each together with its extracted [`Accents`].
///
/// Synthesis and extraction run once per image id; later lookups are a map
/// hit. Texture handles are reference counted, so the returned clone stays
/// valid as long as either the cache or the caller holds it.
pub struct AssetCache {
    portrait_size: u32,
    entries: HashMap<String, (TextureHandle, Accents)>,
}

impl AssetCache {
    /// Create a cache rendering portraits at `portrait_size` square pixels.
    pub fn new(portrait_size: u32) -> Self {
        Self {
            portrait_size: portrait_size.max(1),
            entries: HashMap::new(),
        }
    }

    /// Texture and accents for `image_id`, synthesizing on first use.
    pub fn get(&mut self, ctx: &egui::Context, image_id: &str) -> (TextureHandle, Accents) {
        if let Some(entry) = self.entries.get(image_id) {
            return entry.clone();
        }

        let portrait = portrait::render(image_id, self.portrait_size, self.portrait_size);
        let palette = Palette::from_image(&portrait).generate();
        let accents = Accents {
            vibrant: to_color32(palette.vibrant_color(to_srgb(colors::ACCENT_FALLBACK))),
            muted: to_color32(palette.muted_color(to_srgb(colors::TINT_FALLBACK))),
        };

        let size = [portrait.width() as usize, portrait.height() as usize];
        let pixels = ColorImage::from_rgba_unmultiplied(size, portrait.as_raw());
        let texture = ctx.load_texture(
            format!("portrait/{image_id}"),
            pixels,
            TextureOptions::LINEAR,
        );
        debug!(image_id, "portrait synthesized");

        self.entries
            .insert(image_id.to_owned(), (texture.clone(), accents));
        (texture, accents)
    }

    /// Number of cached portraits.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no portraits yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached portraits.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn to_color32(rgb: Srgb<u8>) -> Color32 {
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

fn to_srgb(color: Color32) -> Srgb<u8> {
    Srgb::new(color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_reused() {
        let ctx = egui::Context::default();
        let mut cache = AssetCache::new(64);
        let (first, accents_a) = cache.get(&ctx, "pup_biscuit_01");
        let (second, accents_b) = cache.get(&ctx, "pup_biscuit_01");
        assert_eq!(first.id(), second.id());
        assert_eq!(accents_a, accents_b);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_ids_get_distinct_entries() {
        let ctx = egui::Context::default();
        let mut cache = AssetCache::new(64);
        let (a, _) = cache.get(&ctx, "pup_biscuit_01");
        let (b, _) = cache.get(&ctx, "pup_moose_01");
        assert_ne!(a.id(), b.id());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_accents_are_deterministic_across_caches() {
        let ctx = egui::Context::default();
        let mut one = AssetCache::new(48);
        let mut two = AssetCache::new(48);
        let (_, a) = one.get(&ctx, "pup_waffle_02");
        let (_, b) = two.get(&ctx, "pup_waffle_02");
        assert_eq!(a, b);
    }

    #[test]
    fn test_clear_forces_resynthesis() {
        let ctx = egui::Context::default();
        let mut cache = AssetCache::new(32);
        cache.get(&ctx, "pup_pepper_01");
        cache.clear();
        assert!(cache.is_empty());
        cache.get(&ctx, "pup_pepper_01");
        assert_eq!(cache.len(), 1);
    }
}
