//! Handler für Dialoge und Anwendungssteuerung.

use crate::app::AppState;

/// Öffnet den Abschnitt-hinzufügen-Dialog.
pub fn open_add_dialog(state: &mut AppState) {
    state.ui.add_dialog.open();
}

/// Schließt den Abschnitt-hinzufügen-Dialog.
pub fn close_add_dialog(state: &mut AppState) {
    state.ui.add_dialog.close();
}

/// Öffnet den Umbenennen-Dialog für den angegebenen Abschnitt.
pub fn open_rename_dialog(state: &mut AppState, name: &str) {
    state.ui.rename_dialog.open(name);
}

/// Schließt den Umbenennen-Dialog.
pub fn close_rename_dialog(state: &mut AppState) {
    state.ui.rename_dialog.close();
}

/// Öffnet die Lösch-Bestätigung für den angegebenen Abschnitt.
pub fn open_delete_dialog(state: &mut AppState, name: &str) {
    state.ui.delete_dialog.open(name);
}

/// Schließt die Lösch-Bestätigung.
pub fn close_delete_dialog(state: &mut AppState) {
    state.ui.delete_dialog.close();
}

/// Schließt den modalen Fehler-Hinweis.
pub fn dismiss_error_notice(state: &mut AppState) {
    state.ui.error_message = None;
}

/// Beendet die Anwendung kontrolliert.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
