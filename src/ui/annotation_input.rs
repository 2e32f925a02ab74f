//! Text input dialog for a pending annotation point.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::editor::{CancelAnnotationRequest, ConfirmAnnotationRequest, ToolSession};

#[derive(Resource, Default)]
pub struct AnnotationInputState {
    pub text: String,
}

pub fn annotation_input_ui(
    mut contexts: EguiContexts,
    session: Res<ToolSession>,
    mut input: ResMut<AnnotationInputState>,
    mut confirm_events: MessageWriter<ConfirmAnnotationRequest>,
    mut cancel_events: MessageWriter<CancelAnnotationRequest>,
) -> Result {
    let Some(pending) = session.pending_annotation() else {
        if !input.text.is_empty() {
            input.text.clear();
        }
        return Ok(());
    };
    let anchor = pending.position;

    let mut confirm = false;
    let mut cancel = false;

    egui::Window::new("Add Annotation")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "At ({:.2}, {:.2}, {:.2})",
                    anchor.x, anchor.y, anchor.z
                ))
                .weak(),
            );
            let response = ui.add(
                egui::TextEdit::singleline(&mut input.text)
                    .hint_text("Annotation text")
                    .desired_width(260.0),
            );
            if !response.has_focus() && !response.lost_focus() {
                response.request_focus();
            }

            let (enter, escape) = ui.input(|i| {
                (
                    i.key_pressed(egui::Key::Enter),
                    i.key_pressed(egui::Key::Escape),
                )
            });
            let has_text = !input.text.trim().is_empty();

            if enter && has_text {
                confirm = true;
            }
            if escape {
                cancel = true;
            }

            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(has_text, egui::Button::new("Add")).clicked() {
                    confirm = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if cancel {
        cancel_events.write(CancelAnnotationRequest);
        input.text.clear();
    } else if confirm {
        confirm_events.write(ConfirmAnnotationRequest {
            text: std::mem::take(&mut input.text),
        });
    }

    Ok(())
}
