//! Handler für Profil-Operationen (Anzeigename, Foto).

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt den Anzeigenamen.
pub fn set_display_name(state: &mut AppState, name: String) {
    use_cases::profile::set_display_name(state, name);
}

/// Öffnet den Foto-Auswahldialog über den UI-State.
pub fn request_photo_dialog(state: &mut AppState) {
    use_cases::profile::request_photo_dialog(state);
}

/// Lädt ein Foto vom Pfad. Bei Fehlern bleibt das bisherige Foto erhalten
/// und der Benutzer bekommt einen Hinweis.
pub fn load_photo(state: &mut AppState, path: &str) {
    if let Err(e) = use_cases::profile::load_photo(state, path) {
        log::error!("Foto-Upload fehlgeschlagen: {:#}", e);
        state.ui.error_message = Some(format!("Foto konnte nicht geladen werden: {:#}", e));
    }
}
