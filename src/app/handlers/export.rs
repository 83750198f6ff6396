//! Handler für den PDF-Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Export-Ziel-Dialog über den UI-State.
pub fn request_export_dialog(state: &mut AppState) {
    use_cases::export::request_export_dialog(state);
}

/// Startet den Export-Job (single-flight).
pub fn begin(state: &mut AppState, path: String) {
    use_cases::export::begin_export(state, path);
}

/// Bricht den laufenden Export-Job ab.
pub fn cancel(state: &mut AppState) {
    use_cases::export::cancel_export(state);
}
