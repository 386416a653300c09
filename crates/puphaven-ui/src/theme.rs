//! Theme system.

use egui::{Color32, Style, Visuals};
use puphaven_core::Gender;
use serde::{Deserialize, Serialize};

/// Available themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

/// Shared color constants.
pub mod colors {
    use egui::Color32;

    /// Card accent when extraction finds no vibrant swatch
    pub const ACCENT_FALLBACK: Color32 = Color32::from_rgb(0xBB, 0x86, 0xFC); // Lavender
    /// Detail glyph tint when extraction finds no muted swatch
    pub const TINT_FALLBACK: Color32 = Color32::WHITE;
    /// Window background (dark)
    pub const DARK_BACKGROUND: Color32 = Color32::from_rgb(18, 18, 24);
    /// Panel background (dark)
    pub const DARK_PANEL: Color32 = Color32::from_rgb(24, 24, 31);
    /// Card background (dark)
    pub const DARK_CARD: Color32 = Color32::from_rgb(38, 38, 48);
    /// Window background (light)
    pub const LIGHT_BACKGROUND: Color32 = Color32::from_rgb(248, 246, 250);
    /// Panel background (light)
    pub const LIGHT_PANEL: Color32 = Color32::from_rgb(240, 238, 244);
    /// Card background (light)
    pub const LIGHT_CARD: Color32 = Color32::WHITE;
    /// Congratulation overlay scrim
    pub const SCRIM: Color32 = Color32::from_rgba_premultiplied(10, 10, 14, 210);
}

/// Theme configuration applied to the egui context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Selected theme
    pub theme: Theme,
    /// Global zoom factor
    pub ui_scale: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            ui_scale: 1.0,
        }
    }
}

impl ThemeConfig {
    /// Apply the theme to the egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        style.visuals = match self.theme {
            Theme::Dark => Self::dark_visuals(),
            Theme::Light => Self::light_visuals(),
        };
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        ctx.set_style(style);
        ctx.set_zoom_factor(self.ui_scale);
    }

    /// Card background for the active theme.
    pub fn card_fill(&self) -> Color32 {
        match self.theme {
            Theme::Dark => colors::DARK_CARD,
            Theme::Light => colors::LIGHT_CARD,
        }
    }

    /// Window clear color for the active theme.
    pub fn background(&self) -> Color32 {
        match self.theme {
            Theme::Dark => colors::DARK_BACKGROUND,
            Theme::Light => colors::LIGHT_BACKGROUND,
        }
    }

    fn dark_visuals() -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(Color32::from_rgb(0xEA, 0xEA, 0xEA));
        visuals.window_fill = colors::DARK_BACKGROUND;
        visuals.panel_fill = colors::DARK_PANEL;
        visuals.faint_bg_color = colors::DARK_CARD;
        visuals
    }

    fn light_visuals() -> Visuals {
        let mut visuals = Visuals::light();
        visuals.window_fill = colors::LIGHT_BACKGROUND;
        visuals.panel_fill = colors::LIGHT_PANEL;
        visuals.faint_bg_color = colors::LIGHT_CARD;
        visuals
    }
}

/// Accent color for a gender glyph.
pub fn gender_color(gender: Gender) -> Color32 {
    let [r, g, b] = gender.accent();
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.ui_scale, 1.0);
    }

    #[test]
    fn test_apply_sets_visuals() {
        let ctx = egui::Context::default();
        let config = ThemeConfig::default();
        config.apply(&ctx);
        assert_eq!(ctx.style().visuals.panel_fill, colors::DARK_PANEL);

        let light = ThemeConfig {
            theme: Theme::Light,
            ..ThemeConfig::default()
        };
        light.apply(&ctx);
        assert_eq!(ctx.style().visuals.panel_fill, colors::LIGHT_PANEL);
    }

    #[test]
    fn test_card_fill_follows_theme() {
        let dark = ThemeConfig::default();
        let light = ThemeConfig {
            theme: Theme::Light,
            ..ThemeConfig::default()
        };
        assert_ne!(dark.card_fill(), light.card_fill());
    }

    #[test]
    fn test_gender_colors_are_distinct() {
        assert_ne!(gender_color(Gender::Male), gender_color(Gender::Female));
    }
}
