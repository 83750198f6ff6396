use crate::app::{AppIntent, AppState};

/// Zeigt den Export-Fortschritt mit Abbruch-Möglichkeit, solange ein
/// Export-Job läuft.
pub fn show_export_progress(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(job) = &state.export_job else {
        return events;
    };

    let (done, total) = job.progress();
    let fraction = done as f32 / total.max(1) as f32;

    egui::Window::new("PDF-Export")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            match job.current_section() {
                Some(section) => {
                    ui.label(format!(
                        "Erfasse Abschnitt '{}' ({}/{})",
                        section,
                        done + 1,
                        total
                    ));
                }
                None => {
                    ui.label("Schreibe Dokument …");
                }
            }

            ui.add_space(6.0);
            ui.add(egui::ProgressBar::new(fraction).show_percentage());
            ui.add_space(8.0);

            if ui.button("Abbrechen").clicked() {
                events.push(AppIntent::ExportCancelRequested);
            }
        });

    events
}
