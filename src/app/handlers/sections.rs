//! Handler für Abschnitts-Operationen (Cursor, Anlegen, Umbenennen,
//! Löschen, Verschieben, Inhalt).

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt den aktiven Cursor.
pub fn set_active(state: &mut AppState, name: &str) {
    use_cases::sections::set_active(state, name);
}

/// Legt einen neuen Abschnitt an (Validierungsfehler landen im Dialog).
pub fn add(state: &mut AppState, name: &str) {
    use_cases::sections::add_section(state, name);
}

/// Benennt einen Abschnitt um (Validierungsfehler landen im Dialog).
pub fn rename(state: &mut AppState, old: &str, new: &str) {
    use_cases::sections::rename_section(state, old, new);
}

/// Löscht einen Abschnitt nach Bestätigung.
pub fn delete(state: &mut AppState, name: &str) {
    use_cases::sections::delete_section(state, name);
}

/// Verschiebt einen Abschnitt in der Reihenfolge.
pub fn reorder(state: &mut AppState, from: usize, to: usize) {
    use_cases::sections::reorder_section(state, from, to);
}

/// Überschreibt den Inhalt eines Abschnitts.
pub fn set_content(state: &mut AppState, name: &str, text: String) {
    use_cases::sections::set_content(state, name, text);
}
