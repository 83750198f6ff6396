use crate::app::{AppIntent, UiState};
use crate::core::Profile;

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
/// Die Dialoge selbst sind zustandslos (rfd) — derselbe Pfad kann beliebig
/// oft erneut gewählt werden.
pub fn handle_file_dialogs(ui_state: &mut UiState, profile: &Profile) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Foto-Auswahl-Dialog
    if ui_state.show_photo_dialog {
        ui_state.show_photo_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Bilddatei", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            events.push(AppIntent::PhotoFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Export-Ziel-Dialog, vorbelegt mit dem deterministisch abgeleiteten
    // Dateinamen
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        let default_name = profile.export_file_name();

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF-Dokument", &["pdf"])
            .set_file_name(&default_name)
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
