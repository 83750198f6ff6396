//! Use-Case-Funktionen für Abschnitts-Mutationen.
//!
//! Validierungsfehler der Registry werden hier in den jeweils zuständigen
//! Dialog bzw. Hinweis geleitet; die Registry bleibt bei Fehlern unverändert.

use crate::app::AppState;

/// Setzt den aktiven Cursor auf einen existierenden Abschnitt.
pub fn set_active(state: &mut AppState, name: &str) {
    if let Err(e) = state.registry.set_active(name) {
        // Nav-Buttons bieten nur existierende Abschnitte an
        log::warn!("Cursor-Wechsel abgelehnt: {}", e);
    }
}

/// Legt einen neuen Abschnitt an. Erfolg schließt den Dialog; ein
/// Validierungsfehler wird im Dialog angezeigt und lässt ihn offen.
pub fn add_section(state: &mut AppState, name: &str) {
    match state.registry.add(name) {
        Ok(()) => {
            log::info!("Abschnitt angelegt: '{}'", name);
            state.ui.add_dialog.close();
        }
        Err(e) => {
            log::info!("Abschnitt anlegen abgelehnt: {}", e);
            state.ui.add_dialog.error = Some(e.to_string());
        }
    }
}

/// Benennt einen Abschnitt um. Erfolg schließt den Dialog; ein
/// Validierungsfehler wird im Dialog angezeigt und lässt ihn offen.
pub fn rename_section(state: &mut AppState, old: &str, new: &str) {
    match state.registry.rename(old, new) {
        Ok(()) => {
            log::info!("Abschnitt umbenannt: '{}' -> '{}'", old, new);
            state.ui.rename_dialog.close();
        }
        Err(e) => {
            log::info!("Umbenennen abgelehnt: {}", e);
            state.ui.rename_dialog.error = Some(e.to_string());
        }
    }
}

/// Löscht einen Abschnitt nach Bestätigung. Die Bestätigung wird in jedem
/// Fall geschlossen; ein Fehler (z.B. letzter Abschnitt) wird als Hinweis
/// angezeigt.
pub fn delete_section(state: &mut AppState, name: &str) {
    state.ui.delete_dialog.close();
    match state.registry.delete(name) {
        Ok(()) => {
            log::info!(
                "Abschnitt gelöscht: '{}', Cursor auf '{}'",
                name,
                state.registry.active()
            );
            state.ui.status_message = Some(format!("Abschnitt '{}' gelöscht", name));
        }
        Err(e) => {
            log::warn!("Löschen abgelehnt: {}", e);
            state.ui.error_message = Some(e.to_string());
        }
    }
}

/// Verschiebt einen Abschnitt in der Reihenfolge (Indizes bereits geprüft).
pub fn reorder_section(state: &mut AppState, from: usize, to: usize) {
    state.registry.reorder(from, to);
    log::debug!("Abschnitt verschoben: {} -> {}", from, to);
}

/// Überschreibt den Inhalt eines Abschnitts.
pub fn set_content(state: &mut AppState, name: &str, text: String) {
    state.registry.set_content(name, text);
}
