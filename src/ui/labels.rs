//! World-anchored text labels, re-projected every frame.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::AppConfig;
use crate::editor::AnnotationStore;
use crate::editor::params::CameraParams;

const LABEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 180);

pub fn labels_ui(
    mut contexts: EguiContexts,
    config: Res<AppConfig>,
    store: Res<AnnotationStore>,
    camera: CameraParams,
) -> Result {
    if !config.data.show_labels {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    for (i, measurement) in store.measurements().enumerate() {
        let Some(screen) = camera.world_to_screen(measurement.midpoint()) else {
            continue;
        };
        show_label(
            ctx,
            egui::Id::new(("measurement_label", i)),
            screen,
            format!("{} units", measurement.distance_label()),
            egui::Color32::from_rgb(255, 120, 120),
        );
    }

    for (i, annotation) in store.annotations().enumerate() {
        let Some(screen) = camera.world_to_screen(annotation.position()) else {
            continue;
        };
        show_label(
            ctx,
            egui::Id::new(("annotation_label", i)),
            screen,
            annotation.text().to_string(),
            egui::Color32::from_rgb(255, 230, 90),
        );
    }

    Ok(())
}

fn show_label(ctx: &egui::Context, id: egui::Id, screen: Vec2, text: String, color: egui::Color32) {
    egui::Area::new(id)
        .fixed_pos(egui::pos2(screen.x, screen.y))
        .pivot(egui::Align2::CENTER_BOTTOM)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(LABEL_BACKGROUND)
                .corner_radius(3.0)
                .inner_margin(egui::Margin::symmetric(4, 2))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(text).color(color));
                });
        });
}
