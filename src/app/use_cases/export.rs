//! Use-Case-Funktionen für den PDF-Export (Start, Abbruch).
//!
//! Der Job selbst wird frame-getrieben in `export::job` vorangetrieben.

use crate::app::AppState;
use crate::export::ExportJob;
use std::path::PathBuf;

/// Öffnet den Export-Ziel-Dialog über den UI-State.
pub fn request_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Startet einen Export-Job. Single-flight: läuft bereits einer, wird der
/// zweite Start abgelehnt und nicht interleaved.
pub fn begin_export(state: &mut AppState, path: String) {
    if state.is_exporting() {
        log::warn!("Export bereits aktiv — zweiter Start abgelehnt");
        state.ui.status_message = Some("Export läuft bereits".to_string());
        return;
    }

    let job = ExportJob::new(
        &state.registry,
        &state.profile.display_name,
        PathBuf::from(path),
        &state.options,
    );
    log::info!(
        "Export gestartet: {} Abschnitte nach '{}'",
        state.registry.len(),
        job.output_path().display()
    );
    state.ui.status_message = Some("Export läuft …".to_string());
    state.export_job = Some(job);
}

/// Merkt einen Abbruchwunsch vor; der Job honoriert ihn an jedem
/// Suspendierungspunkt.
pub fn cancel_export(state: &mut AppState) {
    if let Some(job) = state.export_job.as_mut() {
        job.request_cancel();
        log::info!("Export-Abbruch angefordert");
    }
}
