//! Zustände der modalen Dialoge und aggregierter UI-State.

/// Zustand des Abschnitt-hinzufügen-Dialogs
#[derive(Default)]
pub struct AddSectionDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Eingegebener Name
    pub name: String,
    /// Validierungsfehler des letzten Bestätigungsversuchs
    pub error: Option<String>,
}

impl AddSectionDialogState {
    /// Öffnet den Dialog mit leerem Eingabefeld.
    pub fn open(&mut self) {
        self.visible = true;
        self.name.clear();
        self.error = None;
    }

    /// Schließt den Dialog und verwirft die Eingabe.
    pub fn close(&mut self) {
        self.visible = false;
        self.name.clear();
        self.error = None;
    }
}

/// Zustand des Abschnitt-umbenennen-Dialogs
#[derive(Default)]
pub struct RenameSectionDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Abschnitt, der umbenannt wird
    pub target: String,
    /// Eingegebener neuer Name
    pub new_name: String,
    /// Validierungsfehler des letzten Bestätigungsversuchs
    pub error: Option<String>,
}

impl RenameSectionDialogState {
    /// Öffnet den Dialog, vorbelegt mit dem aktuellen Namen.
    pub fn open(&mut self, target: &str) {
        self.visible = true;
        self.target = target.to_string();
        self.new_name = target.to_string();
        self.error = None;
    }

    /// Schließt den Dialog und verwirft die Eingabe.
    pub fn close(&mut self) {
        self.visible = false;
        self.target.clear();
        self.new_name.clear();
        self.error = None;
    }
}

/// Zustand der Lösch-Bestätigung
#[derive(Default)]
pub struct DeleteConfirmDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Abschnitt, dessen Löschung bestätigt werden soll
    pub target: String,
}

impl DeleteConfirmDialogState {
    /// Öffnet die Bestätigung für den angegebenen Abschnitt.
    pub fn open(&mut self, target: &str) {
        self.visible = true;
        self.target = target.to_string();
    }

    /// Schließt die Bestätigung.
    pub fn close(&mut self) {
        self.visible = false;
        self.target.clear();
    }
}

/// UI-State: Dialoge, ausstehende Datei-Dialoge, Meldungen.
#[derive(Default)]
pub struct UiState {
    /// Abschnitt-hinzufügen-Dialog
    pub add_dialog: AddSectionDialogState,
    /// Abschnitt-umbenennen-Dialog
    pub rename_dialog: RenameSectionDialogState,
    /// Lösch-Bestätigung
    pub delete_dialog: DeleteConfirmDialogState,
    /// Foto-Auswahldialog beim nächsten Frame öffnen
    pub show_photo_dialog: bool,
    /// Export-Ziel-Dialog beim nächsten Frame öffnen
    pub show_export_dialog: bool,
    /// Nicht-blockierende Statusmeldung in der Status-Bar
    pub status_message: Option<String>,
    /// Blockierender Fehler-Hinweis (modales Fenster)
    pub error_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-State.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob ein modaler Dialog offen ist. Solange das der Fall
    /// ist, lässt das Intent-Mapping nur Dialog-eigene Intents passieren.
    pub fn modal_dialog_open(&self) -> bool {
        self.add_dialog.visible
            || self.rename_dialog.visible
            || self.delete_dialog.visible
            || self.error_message.is_some()
    }
}
