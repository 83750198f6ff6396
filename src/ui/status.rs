//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Sections: {}", state.registry.len()));

            ui.separator();

            ui.label(format!("Active: {}", state.registry.active()));

            ui.separator();

            if let Some(photo) = &state.profile.photo {
                ui.label(format!("Photo: {}x{} px", photo.width, photo.height));
            } else {
                ui.label("Photo: None");
            }

            if let Some(job) = &state.export_job {
                ui.separator();
                let (done, total) = job.progress();
                ui.label(format!("Export: Seite {}/{}", (done + 1).min(total), total));
            }

            // Statusnachricht (z.B. Export-Ergebnis, gelöschter Abschnitt)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Theme: {}", state.options.theme.label()));
            });
        });
    });
}
