use crate::app::{AppIntent, UiState};

/// Zeigt die Lösch-Bestätigung als modales Fenster.
pub fn show_delete_confirm_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.delete_dialog.visible {
        return events;
    }

    let target = ui_state.delete_dialog.target.clone();

    egui::Window::new("Abschnitt löschen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(format!(
                    "Abschnitt '{}' und seinen Inhalt endgültig löschen?",
                    target
                ));
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Löschen").clicked() {
                        events.push(AppIntent::DeleteSectionConfirmed {
                            name: target.clone(),
                        });
                    }

                    if ui.button("Abbrechen").clicked() {
                        events.push(AppIntent::DeleteSectionCancelled);
                    }
                });
            });
        });

    events
}
