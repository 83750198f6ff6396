//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::shared::Theme;

/// Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Nav-Button: Abschnitt als aktiven Cursor wählen
    SectionSelected { name: String },
    /// Drag&Drop: Abschnitt von Position `from` nach `to` verschieben
    SectionReorderRequested { from: usize, to: usize },
    /// Inhalt des aktiven Abschnitts wurde editiert
    ContentEdited { text: String },
    /// Anzeigename wurde editiert
    DisplayNameEdited { name: String },

    /// Abschnitt-hinzufügen-Dialog öffnen
    AddSectionRequested,
    /// Abschnitt-hinzufügen-Dialog bestätigt
    AddSectionConfirmed { name: String },
    /// Abschnitt-hinzufügen-Dialog abgebrochen
    AddSectionCancelled,
    /// Umbenennen-Dialog für einen Abschnitt öffnen
    RenameSectionRequested { name: String },
    /// Umbenennen-Dialog bestätigt
    RenameSectionConfirmed { old: String, new: String },
    /// Umbenennen-Dialog abgebrochen
    RenameSectionCancelled,
    /// Lösch-Bestätigung für einen Abschnitt öffnen
    DeleteSectionRequested { name: String },
    /// Löschen bestätigt
    DeleteSectionConfirmed { name: String },
    /// Löschen abgebrochen
    DeleteSectionCancelled,

    /// Theme per Index gewählt (UI bietet nur gültige Indizes an)
    ThemeSelected { index: usize },

    /// Foto-Auswahldialog öffnen
    PhotoUploadRequested,
    /// Fotodatei wurde im Dialog ausgewählt
    PhotoFileSelected { path: String },

    /// Export anstoßen (öffnet den Ziel-Dialog)
    ExportRequested,
    /// Export-Zielpfad wurde im Dialog ausgewählt
    ExportPathSelected { path: String },
    /// Laufenden Export abbrechen
    ExportCancelRequested,

    /// Fehler-Hinweis bestätigt
    ErrorNoticeDismissed,
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Commands, vom Controller auf den AppState ausgeführt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Aktiven Cursor setzen
    SetActiveSection { name: String },
    /// Abschnitt verschieben (Indizes vom Mapping grenzgeprüft)
    ReorderSection { from: usize, to: usize },
    /// Inhalt eines Abschnitts überschreiben
    SetSectionContent { name: String, text: String },
    /// Anzeigenamen setzen
    SetDisplayName { name: String },

    /// Hinzufügen-Dialog öffnen
    OpenAddSectionDialog,
    /// Hinzufügen-Dialog schließen
    CloseAddSectionDialog,
    /// Abschnitt anlegen
    AddSection { name: String },
    /// Umbenennen-Dialog öffnen
    OpenRenameSectionDialog { name: String },
    /// Umbenennen-Dialog schließen
    CloseRenameSectionDialog,
    /// Abschnitt umbenennen
    RenameSection { old: String, new: String },
    /// Lösch-Bestätigung öffnen
    OpenDeleteConfirmDialog { name: String },
    /// Lösch-Bestätigung schließen
    CloseDeleteConfirmDialog,
    /// Abschnitt löschen
    DeleteSection { name: String },

    /// Theme wechseln (und in den Optionen persistieren)
    SetTheme { theme: Theme },

    /// Foto-Auswahldialog anfordern
    RequestPhotoDialog,
    /// Foto von Pfad laden und Profil aktualisieren
    LoadPhoto { path: String },

    /// Export-Ziel-Dialog anfordern
    RequestExportDialog,
    /// Export-Job starten (single-flight)
    BeginExport { path: String },
    /// Laufenden Export-Job abbrechen
    CancelExport,

    /// Fehler-Hinweis schließen
    DismissErrorNotice,
    /// Anwendung kontrolliert beenden
    RequestExit,
}
