use crate::app::{AppIntent, UiState};

/// Zeigt den Abschnitt-umbenennen-Dialog als modales Fenster.
/// Vorbelegt mit dem aktuellen Namen; Bestätigen mit unverändertem Namen
/// ist ein No-op-Erfolg.
pub fn show_rename_section_dialog(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.rename_dialog.visible {
        return events;
    }

    let title = format!("Abschnitt '{}' umbenennen", ui_state.rename_dialog.target);

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            ui.horizontal(|ui| {
                ui.label("Neuer Name:");
                ui.text_edit_singleline(&mut ui_state.rename_dialog.new_name);
            });

            if let Some(ref error) = ui_state.rename_dialog.error {
                ui.add_space(4.0);
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let name_valid = !ui_state.rename_dialog.new_name.trim().is_empty();

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
        events.push(AppIntent::RenameSectionConfirmed {
            old: ui_state.rename_dialog.target.clone(),
            new: ui_state.rename_dialog.new_name.trim().to_string(),
        });
    } else if cancelled {
        events.push(AppIntent::RenameSectionCancelled);
    }

    events
}
