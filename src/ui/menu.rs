//! Top-Menü (File, Edit).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let busy = state.is_exporting() || state.ui.modal_dialog_open();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add_enabled(!busy, egui::Button::new("Export as PDF..."))
                    .clicked()
                {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(!busy, egui::Button::new("Upload Photo..."))
                    .clicked()
                {
                    events.push(AppIntent::PhotoUploadRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(!busy, egui::Button::new("Add Section..."))
                    .clicked()
                {
                    events.push(AppIntent::AddSectionRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(!busy, egui::Button::new("Rename Section..."))
                    .clicked()
                {
                    events.push(AppIntent::RenameSectionRequested {
                        name: state.registry.active().to_string(),
                    });
                    ui.close();
                }

                // Der letzte Abschnitt ist per Invariante unlöschbar
                let can_delete = !busy && state.registry.len() > 1;
                if ui
                    .add_enabled(can_delete, egui::Button::new("Delete Section..."))
                    .clicked()
                {
                    events.push(AppIntent::DeleteSectionRequested {
                        name: state.registry.active().to_string(),
                    });
                    ui.close();
                }
            });
        });
    });

    events
}
