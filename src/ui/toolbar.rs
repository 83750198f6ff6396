//! Toolbar: Theme-Auswahl, Abschnitt hinzufügen, Foto, Export.

use crate::app::{AppIntent, AppState};
use crate::shared::Theme;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let busy = state.is_exporting() || state.ui.modal_dialog_open();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.add_enabled_ui(!busy, |ui| {
                ui.label("Theme:");
                egui::ComboBox::from_id_salt("theme_select")
                    .selected_text(state.options.theme.label())
                    .show_ui(ui, |ui| {
                        for (index, theme) in Theme::ALL.iter().enumerate() {
                            if ui
                                .selectable_label(state.options.theme == *theme, theme.label())
                                .clicked()
                            {
                                events.push(AppIntent::ThemeSelected { index });
                            }
                        }
                    });

                ui.separator();

                if ui.button("Add Section").clicked() {
                    events.push(AppIntent::AddSectionRequested);
                }

                if ui.button("Upload Photo...").clicked() {
                    events.push(AppIntent::PhotoUploadRequested);
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if state.is_exporting() {
                    ui.spinner();
                    ui.label("Export läuft …");
                } else if ui
                    .add_enabled(!busy, egui::Button::new("Export as PDF"))
                    .clicked()
                {
                    events.push(AppIntent::ExportRequested);
                }
            });
        });
    });

    events
}
