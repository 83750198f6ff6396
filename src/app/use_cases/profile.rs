//! Use-Case-Funktionen für das Profil.
//! Alle Dateisystem-Operationen (Foto-I/O) sind hier zentralisiert.

use crate::app::AppState;
use anyhow::Context;
use std::sync::Arc;

/// Setzt den Anzeigenamen (unkonditional, freier Text).
pub fn set_display_name(state: &mut AppState, name: String) {
    state.profile.display_name = name;
}

/// Öffnet den Foto-Auswahldialog über den UI-State.
pub fn request_photo_dialog(state: &mut AppState) {
    state.ui.show_photo_dialog = true;
}

/// Liest und validiert die gewählte Bilddatei und ersetzt das Profilfoto.
///
/// Die Datei wird einmal dekodiert, um Format und Abmessungen zu prüfen;
/// gespeichert werden die Original-Bytes (egui dekodiert über den
/// `bytes://`-Loader erneut). Bei jedem Fehler bleibt das bisherige Foto
/// unverändert.
pub fn load_photo(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("Lesen von '{}'", path))?;
    let decoded = image::load_from_memory(&bytes).context("Bilddatei nicht dekodierbar")?;

    let width = decoded.width();
    let height = decoded.height();
    state
        .profile
        .replace_photo(Arc::from(bytes.into_boxed_slice()), width, height);

    log::info!("Profilfoto aktualisiert: {}x{} Pixel ({})", width, height, path);
    state.ui.status_message = Some("Profilfoto aktualisiert".to_string());
    Ok(())
}
