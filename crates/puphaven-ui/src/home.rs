//! Home screen: the adoptable puppy grid.

use egui::{Align, CursorIcon, Layout, RichText, ScrollArea, Sense, Vec2};
use puphaven_core::{Puppy, Roster};

use crate::assets::AssetCache;
use crate::theme::{gender_color, ThemeConfig};
use crate::UIAction;

/// Card grid over the adoptable roster.
pub struct HomeView {
    columns: usize,
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeView {
    /// Create the grid with the standard two-column layout.
    pub fn new() -> Self {
        Self { columns: 2 }
    }

    /// Render the grid. Card clicks are reported through `actions`.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        roster: &Roster,
        assets: &mut AssetCache,
        theme: &ThemeConfig,
        actions: &mut Vec<UIAction>,
    ) {
        ui.heading("PupHaven");
        ui.label(RichText::new("Puppies looking for a home").weak());
        ui.add_space(4.0);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let spacing = ui.spacing().item_spacing.x;
                let card_width = ((ui.available_width()
                    - spacing * (self.columns as f32 - 1.0))
                    / self.columns as f32)
                    .max(120.0);
                for row in roster.puppies().chunks(self.columns) {
                    ui.horizontal_top(|ui| {
                        for puppy in row {
                            self.puppy_card(ui, puppy, card_width, assets, theme, actions);
                        }
                    });
                }
            });
    }

    fn puppy_card(
        &self,
        ui: &mut egui::Ui,
        puppy: &Puppy,
        card_width: f32,
        assets: &mut AssetCache,
        theme: &ThemeConfig,
        actions: &mut Vec<UIAction>,
    ) {
        let (texture, accents) = assets.get(ui.ctx(), puppy.primary_image());
        let inner_width = card_width - 16.0;

        let response = egui::Frame::NONE
            .fill(theme.card_fill())
            .corner_radius(8.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(inner_width);
                ui.add(
                    egui::Image::new(&texture)
                        .fit_to_exact_size(Vec2::splat(inner_width))
                        .corner_radius(6.0),
                );
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&puppy.name).strong().color(accents.vibrant));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(puppy.gender.symbol())
                                .color(gender_color(puppy.gender)),
                        );
                    });
                });
                ui.label(RichText::new(&puppy.breed).small());
                ui.label(
                    RichText::new(format!("{} \u{b7} {}", puppy.location, puppy.age))
                        .small()
                        .weak(),
                );
            })
            .response
            .interact(Sense::click());

        if response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }
        if response.clicked() {
            actions.push(UIAction::OpenPuppy(puppy.id));
        }
    }
}
