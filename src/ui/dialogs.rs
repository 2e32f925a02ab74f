//! Notification dialogs: file operation errors, config reset, busy indicator.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::ConfigResetNotification;
use crate::persistence::{AsyncFileOperation, FileOperationError};

/// Shows the last export/import error until dismissed
pub fn file_error_dialog_ui(
    mut contexts: EguiContexts,
    mut file_error: ResMut<FileOperationError>,
) -> Result {
    let Some(message) = file_error.message.clone() else {
        return Ok(());
    };

    egui::Window::new("File Error")
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                ui.colored_label(egui::Color32::RED, message);
            });
            ui.add_space(5.0);
            if ui.button("OK").clicked() {
                file_error.message = None;
            }
        });

    Ok(())
}

/// Tells the user their configuration file could not be used
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Configuration Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Settings were reset to defaults.");
            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });

    Ok(())
}

/// Small spinner while an export or import is running
pub fn async_operation_indicator_ui(
    mut contexts: EguiContexts,
    async_op: Res<AsyncFileOperation>,
) -> Result {
    if !async_op.is_busy() {
        return Ok(());
    }
    let description = async_op
        .operation_description
        .as_deref()
        .unwrap_or("Working...");

    egui::Area::new(egui::Id::new("async_operation_indicator"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -40.0])
        .interactable(false)
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(description);
            });
        });

    Ok(())
}
