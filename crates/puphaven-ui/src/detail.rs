//! Detail screen for a single puppy.

use std::collections::HashSet;

use egui::{Align2, Area, Color32, CursorIcon, Id, Order, RichText, ScrollArea, Sense, Vec2};
use puphaven_core::{Puppy, PuppyId};

use crate::assets::AssetCache;
use crate::theme::{colors, gender_color, ThemeConfig};
use crate::UIAction;

/// Seconds the congratulation card takes to spring in.
const CONGRATS_RISE_SECS: f32 = 0.45;
/// Seconds the congratulation card takes to fade back out.
const CONGRATS_FADE_SECS: f32 = 0.15;
/// Seconds the congratulation card stays on screen.
const CONGRATS_SHOW_SECS: f64 = 1.8;

/// Full profile for one puppy, with back navigation and an adopt toggle.
pub struct DetailView {
    hero_height: f32,
    celebrating: Option<(PuppyId, f64)>,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    /// Create the view with the standard hero height.
    pub fn new() -> Self {
        Self {
            hero_height: 280.0,
            celebrating: None,
        }
    }

    /// Render the profile. Back and adopt presses are reported through
    /// `actions`; `adopted` holds the ids the user has already taken home.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        puppy: &Puppy,
        adopted: &HashSet<PuppyId>,
        assets: &mut AssetCache,
        theme: &ThemeConfig,
        actions: &mut Vec<UIAction>,
    ) {
        let (hero, accents) = assets.get(ui.ctx(), puppy.primary_image());

        ui.horizontal(|ui| {
            if ui.button(RichText::new("\u{2190}").heading()).clicked() {
                actions.push(UIAction::GoBack);
            }
            ui.heading(RichText::new(&puppy.name).color(accents.vibrant).strong());
            ui.label(
                RichText::new(puppy.gender.symbol())
                    .heading()
                    .color(gender_color(puppy.gender)),
            );
        });
        ui.add_space(4.0);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let width = ui.available_width();
                ui.add(
                    egui::Image::new(&hero)
                        .fit_to_exact_size(Vec2::new(width, self.hero_height))
                        .corner_radius(10.0),
                );
                ui.add_space(8.0);

                egui::Frame::NONE
                    .fill(theme.card_fill())
                    .corner_radius(8.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_width(width - 16.0);
                        info_row(ui, "\u{1F43E}", "Breed", &puppy.breed, accents.muted);
                        info_row(ui, "\u{1F4CD}", "Location", &puppy.location, accents.muted);
                        info_row(ui, "\u{1F382}", "Age", &puppy.age, accents.muted);
                        info_row(ui, "\u{1F3A8}", "Coat", &puppy.coat, accents.muted);
                    });
                ui.add_space(8.0);

                ui.label(&puppy.story);
                ui.add_space(8.0);

                if puppy.images.len() > 1 {
                    ui.label(RichText::new("More photos").strong());
                    ui.horizontal_wrapped(|ui| {
                        for image_id in &puppy.images[1..] {
                            let (texture, _) = assets.get(ui.ctx(), image_id);
                            ui.add(
                                egui::Image::new(&texture)
                                    .fit_to_exact_size(Vec2::splat(96.0))
                                    .corner_radius(6.0),
                            );
                        }
                    });
                    ui.add_space(8.0);
                }

                self.adopt_button(ui, puppy, adopted, accents.vibrant, actions);
                ui.add_space(12.0);
            });

        self.congrats_overlay(ui, puppy);
    }

    fn adopt_button(
        &mut self,
        ui: &mut egui::Ui,
        puppy: &Puppy,
        adopted: &HashSet<PuppyId>,
        accent: Color32,
        actions: &mut Vec<UIAction>,
    ) {
        let is_adopted = adopted.contains(&puppy.id);
        let label = if is_adopted {
            "Adopted \u{2713}"
        } else {
            "Adopt me"
        };
        let fill = if is_adopted {
            accent.gamma_multiply(0.4)
        } else {
            accent
        };
        let button = egui::Button::new(RichText::new(label).strong())
            .fill(fill)
            .corner_radius(20.0);
        let response = ui
            .add_sized([ui.available_width().min(320.0), 40.0], button)
            .interact(Sense::click());
        if response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }
        if response.clicked() {
            if is_adopted {
                self.celebrating = None;
            } else {
                self.celebrating = Some((puppy.id, ui.input(|i| i.time)));
            }
            actions.push(UIAction::ToggleAdopt(puppy.id));
        }
    }

    fn congrats_overlay(&mut self, ui: &mut egui::Ui, puppy: &Puppy) {
        let ctx = ui.ctx().clone();
        let now = ui.input(|i| i.time);
        let show = match self.celebrating {
            Some((id, started)) if id == puppy.id => {
                if now - started < CONGRATS_SHOW_SECS {
                    true
                } else {
                    self.celebrating = None;
                    false
                }
            }
            _ => false,
        };

        // Keeping the value parked at zero while hidden makes the spring
        // start from zero on the frame the adoption lands.
        let anim_id = Id::new(("adopt_congrats", puppy.id));
        let t = if show {
            ctx.request_repaint();
            ctx.animate_value_with_time(anim_id, 1.0, CONGRATS_RISE_SECS)
        } else {
            ctx.animate_value_with_time(anim_id, 0.0, CONGRATS_FADE_SECS)
        };
        if t <= 0.0 {
            return;
        }

        let scale = ease_out_back(t);
        Area::new(Id::new(("congrats_area", puppy.id)))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .interactable(false)
            .show(&ctx, |ui| {
                egui::Frame::NONE
                    .fill(colors::SCRIM.gamma_multiply(t))
                    .corner_radius(16.0)
                    .inner_margin(24.0)
                    .show(ui, |ui| {
                        ui.set_max_width(260.0);
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("\u{1F389}").size(40.0 * scale));
                            ui.heading(format!("{} is coming home!", puppy.name));
                            ui.label(RichText::new("Thank you for adopting").weak());
                        });
                    });
            });
    }
}

fn info_row(ui: &mut egui::Ui, glyph: &str, label: &str, value: &str, tint: Color32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(glyph).color(tint));
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).strong());
    });
}

fn ease_out_back(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let u = t - 1.0;
    1.0 + C3 * u * u * u + C1 * u * u
}

#[cfg(test)]
mod tests {
    use super::*;
    use puphaven_core::Roster;

    #[test]
    fn test_profile_renders_without_actions() {
        let ctx = egui::Context::default();
        let roster = Roster::demo().unwrap();
        let puppy = &roster.puppies()[0];
        let mut assets = AssetCache::new(32);
        let theme = ThemeConfig::default();
        let mut view = DetailView::new();
        let mut actions = Vec::new();
        let adopted = HashSet::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                view.show(ui, puppy, &adopted, &mut assets, &theme, &mut actions);
            });
        });

        assert!(actions.is_empty());
        // Hero plus every extra photo lands in the cache.
        assert_eq!(assets.len(), puppy.images.len());
    }

    #[test]
    fn test_spring_curve_lands_on_one() {
        assert!(ease_out_back(0.0).abs() < 1e-5);
        assert!((ease_out_back(1.0) - 1.0).abs() < 1e-5);
        // Overshoots past the resting size on the way in.
        assert!(ease_out_back(0.7) > 1.0);
    }
}
