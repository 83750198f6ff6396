use crate::app::{AppIntent, UiState};

/// Zeigt den Abschnitt-hinzufügen-Dialog als modales Fenster.
/// Validierungsfehler des letzten Versuchs erscheinen im Dialog selbst.
pub fn show_add_section_dialog(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.add_dialog.visible {
        return events;
    }

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Abschnitt hinzufügen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut ui_state.add_dialog.name);
            });

            if let Some(ref error) = ui_state.add_dialog.error {
                ui.add_space(4.0);
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let name_valid = !ui_state.add_dialog.name.trim().is_empty();

                ui.add_enabled_ui(name_valid, |ui| {
                    if ui.button("OK").clicked() {
                        confirmed = true;
                    }
                });

                if ui.button("Abbrechen").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        events.push(AppIntent::AddSectionConfirmed {
            name: ui_state.add_dialog.name.trim().to_string(),
        });
    } else if cancelled {
        events.push(AppIntent::AddSectionCancelled);
    }

    events
}
