use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::file_dialogs::FileDialogState;
use crate::config::{AppConfig, SetShowLabelsRequest};
use crate::editor::{
    AnnotationMode, AnnotationStore, ClearAllRequest, CommandHistory, RedoRequest,
    SetModeRequest, ToolSession, UndoRequest,
};
use crate::editor::annotations::EntityKind;
use crate::persistence::AsyncFileOperation;

/// Requests the toolbar can emit
#[derive(bevy::ecs::system::SystemParam)]
pub struct ToolbarRequests<'w> {
    pub mode: MessageWriter<'w, SetModeRequest>,
    pub undo: MessageWriter<'w, UndoRequest>,
    pub redo: MessageWriter<'w, RedoRequest>,
    pub clear: MessageWriter<'w, ClearAllRequest>,
    pub labels: MessageWriter<'w, SetShowLabelsRequest>,
}

/// Main toolbar: tool modes, history, file operations and the mode indicator
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    session: Res<ToolSession>,
    history: Res<CommandHistory>,
    store: Res<AnnotationStore>,
    config: Res<AppConfig>,
    async_op: Res<AsyncFileOperation>,
    mut file_dialogs: ResMut<FileDialogState>,
    mut requests: ToolbarRequests,
) -> Result {
    let mut export_clicked = false;
    let mut import_clicked = false;

    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                // Mode buttons; clicking the active mode returns to idle
                for mode in AnnotationMode::all() {
                    let selected = session.mode() == *mode;
                    let button = egui::Button::new(
                        egui::RichText::new(mode_button_label(mode)).size(14.0).strong(),
                    )
                    .min_size(egui::vec2(0.0, 28.0))
                    .selected(selected);

                    if ui.add(button).clicked() {
                        let mode = if selected { AnnotationMode::Idle } else { *mode };
                        requests.mode.write(SetModeRequest { mode });
                    }
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if ui
                    .add_enabled(history.can_undo(), egui::Button::new("Undo"))
                    .on_hover_text(format!("Ctrl+Z ({} available)", history.undo_count()))
                    .clicked()
                {
                    requests.undo.write(UndoRequest);
                }
                if ui
                    .add_enabled(history.can_redo(), egui::Button::new("Redo"))
                    .on_hover_text(format!(
                        "Ctrl+Y / Ctrl+Shift+Z ({} available)",
                        history.redo_count()
                    ))
                    .clicked()
                {
                    requests.redo.write(RedoRequest);
                }
                if ui
                    .add_enabled(!store.is_empty(), egui::Button::new("Clear All"))
                    .clicked()
                {
                    requests.clear.write(ClearAllRequest);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                let export_enabled =
                    !async_op.is_exporting && file_dialogs.pending_export.is_none();
                if ui
                    .add_enabled(export_enabled, egui::Button::new("Export"))
                    .clicked()
                {
                    export_clicked = true;
                }

                let import_enabled =
                    !async_op.is_importing && file_dialogs.pending_import.is_none();
                let import_label = if async_op.is_importing {
                    "Importing..."
                } else {
                    "Import"
                };
                if ui
                    .add_enabled(import_enabled, egui::Button::new(import_label))
                    .clicked()
                {
                    import_clicked = true;
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                let mut show_labels = config.data.show_labels;
                if ui.checkbox(&mut show_labels, "Labels").changed() {
                    requests.labels.write(SetShowLabelsRequest { show: show_labels });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("Mode: {}", session.mode().display_name()))
                            .strong(),
                    );
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{} measurements, {} polygons, {} annotations",
                            store.count(EntityKind::Measurement),
                            store.count(EntityKind::Polygon),
                            store.count(EntityKind::Annotation),
                        ))
                        .weak(),
                    );
                });
            });
        });

    if export_clicked {
        file_dialogs.open_export_dialog(&config);
    }
    if import_clicked {
        file_dialogs.open_import_dialog(&config);
    }

    Ok(())
}

fn mode_button_label(mode: &AnnotationMode) -> String {
    format!("{} ({})", mode.display_name(), mode.shortcut_label())
}

/// Hint bar describing what the active tool expects next
pub fn tool_hint_ui(mut contexts: EguiContexts, session: Res<ToolSession>) -> Result {
    let hint = match session.mode() {
        AnnotationMode::Idle => return Ok(()),
        AnnotationMode::Measuring => match session.in_progress_points().len() {
            0 => "Click the first point to measure from",
            _ => "Click the second point",
        },
        AnnotationMode::DrawingPolygon => match session.in_progress_points().len() {
            0..=2 => "Click to add polygon vertices",
            _ => "Click near the first vertex to close the polygon",
        },
        AnnotationMode::Annotating => "Click a point to annotate",
    };

    egui::TopBottomPanel::bottom("tool_hint")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 4)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.label(egui::RichText::new(hint).weak());
        });
    Ok(())
}
